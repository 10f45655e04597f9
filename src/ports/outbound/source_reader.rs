use crate::shared::Result;
use std::path::{Path, PathBuf};

/// SourceReader port for locating and reading model source files
///
/// This port abstracts the file system walk and the file reads needed to
/// feed the scanner. Reads may run on several threads at once, hence the
/// `Sync` bound.
pub trait SourceReader: Sync {
    /// Lists every regular file under `root` whose extension equals
    /// `extension` (given without the leading dot)
    ///
    /// # Returns
    /// Paths sorted ascending, so downstream first-wins merging is stable
    ///
    /// # Errors
    /// Returns an error if:
    /// - `root` does not exist (`ModelError::FolderNotFound`)
    /// - `root` is not a directory (`ModelError::NotADirectory`)
    fn discover_sources(&self, root: &Path, extension: &str) -> Result<Vec<PathBuf>>;

    /// Reads one source file, decoding it as UTF-8 on a best-effort basis
    ///
    /// # Errors
    /// Returns `ModelError::FileReadError` if the file cannot be read
    fn read_source(&self, path: &Path) -> Result<String>;
}
