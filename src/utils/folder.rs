// Slide folder handling

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// A folder of slide files, one file per slide.
#[derive(Clone, Debug)]
pub struct Folder {
    path: PathBuf,
}

impl Folder {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn path_to(&self, relative: impl AsRef<Path>) -> PathBuf {
        self.path.join(relative)
    }

    pub fn go_to(&self, relative: impl AsRef<Path>) -> Folder {
        Folder::new(self.path_to(relative))
    }

    /// Files shown as slides: regular files only, dotfiles skipped,
    /// sorted by name so the slide order is stable across hosts.
    pub fn visible_files(&self) -> io::Result<Vec<PathBuf>> {
        let mut files = Vec::new();

        for entry in fs::read_dir(&self.path)? {
            let entry = entry?;
            if entry.file_name().to_string_lossy().starts_with('.') {
                continue;
            }
            if entry.file_type()?.is_dir() {
                continue;
            }
            files.push(entry.path());
        }

        files.sort();
        Ok(files)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::File;

    #[test]
    fn visible_files_skips_directories_and_dotfiles() {
        let dir = tempfile::tempdir().unwrap();
        File::create(dir.path().join("02.md")).unwrap();
        File::create(dir.path().join("01.md")).unwrap();
        File::create(dir.path().join(".hidden")).unwrap();
        fs::create_dir(dir.path().join("assets")).unwrap();

        let files = Folder::new(dir.path()).visible_files().unwrap();

        assert_eq!(
            files,
            vec![dir.path().join("01.md"), dir.path().join("02.md")]
        );
    }

    #[test]
    fn go_to_appends_relative_path() {
        let folder = Folder::new("/workspace").go_to("slides");

        assert_eq!(folder.path(), Path::new("/workspace/slides"));
        assert_eq!(
            folder.path_to("01.md"),
            PathBuf::from("/workspace/slides/01.md")
        );
    }

    #[test]
    fn visible_files_errors_on_missing_folder() {
        let dir = tempfile::tempdir().unwrap();
        let folder = Folder::new(dir.path().join("nope"));

        assert!(folder.visible_files().is_err());
    }
}
