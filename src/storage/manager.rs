use log::debug;
use std::fs::{self, File};
use std::io::{Read, Result as IoResult, Write};
use std::path::PathBuf;

// Path constants for all stored files
pub mod paths {
    pub const STATE_FILE: &str = ".vscode-slides.json";
}

/// Owns the directory state files live in and does the raw string I/O.
pub struct StorageManager {
    base_dir: PathBuf,
}

impl StorageManager {
    pub fn new(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: base_dir.into(),
        }
    }

    // Get the full path for a specific file
    pub fn get_file_path(&self, filename: &str) -> PathBuf {
        self.base_dir.join(filename)
    }

    // Ensure the base directory exists
    pub fn ensure_directory_exists(&self) -> IoResult<()> {
        if !self.base_dir.exists() {
            debug!(
                "Storage directory doesn't exist, creating: {:?}",
                self.base_dir
            );
            fs::create_dir_all(&self.base_dir)?;
        }
        Ok(())
    }

    // Read a file from storage
    pub fn read_file(&self, filename: &str) -> IoResult<String> {
        let file_path = self.get_file_path(filename);
        debug!("Reading file: {:?}", file_path);
        let mut file = File::open(file_path)?;
        let mut contents = String::new();
        file.read_to_string(&mut contents)?;
        Ok(contents)
    }

    // Write a file to storage
    pub fn write_file(&self, filename: &str, contents: &str) -> IoResult<()> {
        self.ensure_directory_exists()?;

        let file_path = self.get_file_path(filename);
        debug!("Writing to file: {:?}", file_path);
        let mut file = File::create(&file_path)?;
        file.write_all(contents.as_bytes())?;

        debug!(
            "Successfully wrote {} bytes to {}",
            contents.len(),
            filename
        );
        Ok(())
    }

    // Check if a file exists
    pub fn file_exists(&self, filename: &str) -> bool {
        let exists = self.get_file_path(filename).exists();
        debug!("Checking if file '{}' exists: {}", filename, exists);
        exists
    }
}
