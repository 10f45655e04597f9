use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use sysml_deps::prelude::*;

/// In-memory SourceReader keyed by path
///
/// `discover_sources` ignores the root and returns every stored path with
/// the requested extension, sorted.
#[derive(Default)]
pub struct MockSourceReader {
    files: BTreeMap<PathBuf, Option<String>>,
    missing_root: bool,
}

impl MockSourceReader {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_file(mut self, path: &str, text: &str) -> Self {
        self.files.insert(PathBuf::from(path), Some(text.to_string()));
        self
    }

    /// Registers a path that is discovered but fails to read
    pub fn with_unreadable_file(mut self, path: &str) -> Self {
        self.files.insert(PathBuf::from(path), None);
        self
    }

    pub fn with_missing_root(mut self) -> Self {
        self.missing_root = true;
        self
    }
}

impl SourceReader for MockSourceReader {
    fn discover_sources(&self, root: &Path, extension: &str) -> Result<Vec<PathBuf>> {
        if self.missing_root {
            return Err(ModelError::FolderNotFound {
                path: root.to_path_buf(),
            }
            .into());
        }
        Ok(self
            .files
            .keys()
            .filter(|path| path.extension().is_some_and(|ext| ext == extension))
            .cloned()
            .collect())
    }

    fn read_source(&self, path: &Path) -> Result<String> {
        match self.files.get(path) {
            Some(Some(text)) => Ok(text.clone()),
            _ => Err(ModelError::FileReadError {
                path: path.to_path_buf(),
                details: "mock read failure".to_string(),
            }
            .into()),
        }
    }
}
