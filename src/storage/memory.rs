use crate::error::SlidesError;
use crate::models::{State, StatePatch};
use crate::storage::repository::Repository;

/// In-process state, for tests and embedding. Same merge semantics as
/// the file backend, nothing survives the process.
#[derive(Default)]
pub struct InMemoryRepository {
    state: State,
}

impl InMemoryRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_state(state: State) -> Self {
        Self { state }
    }
}

impl Repository for InMemoryRepository {
    async fn store(&mut self, patch: StatePatch) -> Result<(), SlidesError> {
        self.state.apply(patch);
        Ok(())
    }

    async fn get(&self) -> State {
        self.state.clone()
    }
}
