use crate::config::SOURCE_EXTENSION;
use crate::errors::ScanError;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

pub struct FileWalker {
    root: PathBuf,
    extension: &'static str,
}

impl FileWalker {
    pub fn new(root: PathBuf) -> Self {
        Self {
            root,
            extension: SOURCE_EXTENSION,
        }
    }

    /// Collect every matching file under the root, recursively, in sorted
    /// path order so runs are deterministic.
    pub fn walk(&self) -> Result<Vec<PathBuf>, ScanError> {
        if !self.root.is_dir() {
            return Err(ScanError::MissingDirectory(self.root.clone()));
        }

        let mut files = Vec::new();
        for entry in WalkDir::new(&self.root) {
            let entry = entry?;
            let path = entry.path();

            if path.is_file() && self.should_process(path) {
                files.push(path.to_path_buf());
            }
        }

        files.sort();
        Ok(files)
    }

    fn should_process(&self, path: &Path) -> bool {
        path.extension()
            .map(|ext| ext.to_string_lossy() == self.extension)
            .unwrap_or(false)
    }
}

pub fn walk_source_files(root: &Path) -> Result<Vec<PathBuf>, ScanError> {
    FileWalker::new(root.to_path_buf()).walk()
}
