use crate::ports::outbound::SourceReader;
use crate::shared::error::ModelError;
use crate::shared::security::check_source_file;
use crate::shared::Result;
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// FileSystemReader adapter for reading model sources from disk
///
/// Symbolic links are neither followed during the walk nor read.
pub struct FileSystemReader;

impl FileSystemReader {
    pub fn new() -> Self {
        Self
    }

    fn validate_root(root: &Path) -> Result<()> {
        if !root.exists() {
            return Err(ModelError::FolderNotFound {
                path: root.to_path_buf(),
            }
            .into());
        }
        if !root.is_dir() {
            return Err(ModelError::NotADirectory {
                path: root.to_path_buf(),
            }
            .into());
        }
        Ok(())
    }
}

impl Default for FileSystemReader {
    fn default() -> Self {
        Self::new()
    }
}

impl SourceReader for FileSystemReader {
    fn discover_sources(&self, root: &Path, extension: &str) -> Result<Vec<PathBuf>> {
        Self::validate_root(root)?;

        let mut paths = Vec::new();
        for entry in WalkDir::new(root).follow_links(false) {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    tracing::warn!(error = %e, "skipping unreadable directory entry");
                    continue;
                }
            };
            if !entry.file_type().is_file() {
                continue;
            }
            if entry
                .path()
                .extension()
                .is_some_and(|ext| ext == extension)
            {
                paths.push(entry.into_path());
            }
        }

        paths.sort();
        Ok(paths)
    }

    fn read_source(&self, path: &Path) -> Result<String> {
        check_source_file(path)?;

        let bytes = fs::read(path).map_err(|e| ModelError::FileReadError {
            path: path.to_path_buf(),
            details: e.to_string(),
        })?;

        // Best effort: invalid sequences become U+FFFD instead of failing
        match String::from_utf8(bytes) {
            Ok(text) => Ok(text),
            Err(e) => {
                tracing::debug!(file = %path.display(), "source is not valid UTF-8; decoding lossily");
                Ok(String::from_utf8_lossy(e.as_bytes()).into_owned())
            }
        }
    }
}
