use log::{debug, error};

use crate::error::SlidesError;
use crate::models::{State, StatePatch};
use crate::storage::manager::{paths, StorageManager};

/// Persistence port for the session state.
///
/// `store` merges the given fields into the current state and persists
/// the result; the write must be visible to the next `get` in the same
/// session. `get` never fails: missing or corrupt data reads as the
/// default state.
pub trait Repository {
    async fn store(&mut self, patch: StatePatch) -> Result<(), SlidesError>;
    async fn get(&self) -> State;
}

/// State persisted as a JSON file in the workspace root.
pub struct FileRepository {
    storage_manager: StorageManager,
    filename: String,
}

impl FileRepository {
    pub fn new(storage_manager: StorageManager) -> Self {
        Self::with_file(storage_manager, paths::STATE_FILE)
    }

    pub fn with_file(storage_manager: StorageManager, filename: impl Into<String>) -> Self {
        Self {
            storage_manager,
            filename: filename.into(),
        }
    }

    fn load(&self) -> State {
        if !self.storage_manager.file_exists(&self.filename) {
            debug!("No state file found, using default state");
            return State::default();
        }

        match self.storage_manager.read_file(&self.filename) {
            Ok(contents) => match serde_json::from_str::<State>(&contents) {
                Ok(state) => state,
                Err(e) => {
                    // Corrupt state is replaced, never surfaced to the user.
                    error!("Stored state failed validation, using default: {}", e);
                    State::default()
                }
            },
            Err(e) => {
                error!("Error reading state file: {}", e);
                State::default()
            }
        }
    }
}

impl Repository for FileRepository {
    async fn store(&mut self, patch: StatePatch) -> Result<(), SlidesError> {
        let mut state = self.load();
        state.apply(patch);

        let json = serde_json::to_string_pretty(&state)?;
        self.storage_manager.write_file(&self.filename, &json)?;
        debug!(
            "State saved to {:?}",
            self.storage_manager.get_file_path(&self.filename)
        );
        Ok(())
    }

    async fn get(&self) -> State {
        self.load()
    }
}
