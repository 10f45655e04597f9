use crate::ports::outbound::OutputPresenter;
use crate::shared::error::ModelError;
use crate::shared::security::check_output_target;
use crate::shared::Result;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// FileSystemWriter adapter for writing an artifact to a file
///
/// The file is replaced wholesale; its parent directory must exist.
pub struct FileSystemWriter {
    output_path: PathBuf,
}

impl FileSystemWriter {
    pub fn new(output_path: PathBuf) -> Self {
        Self { output_path }
    }

    pub fn output_path(&self) -> &Path {
        &self.output_path
    }
}

impl OutputPresenter for FileSystemWriter {
    fn present(&self, content: &str) -> Result<()> {
        check_output_target(&self.output_path)?;

        fs::write(&self.output_path, content).map_err(|e| ModelError::FileWriteError {
            path: self.output_path.clone(),
            details: e.to_string(),
        })?;

        tracing::debug!(path = %self.output_path.display(), bytes = content.len(), "artifact written");
        Ok(())
    }
}

/// StdoutPresenter adapter for writing output to stdout
pub struct StdoutPresenter;

impl StdoutPresenter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for StdoutPresenter {
    fn default() -> Self {
        Self::new()
    }
}

impl OutputPresenter for StdoutPresenter {
    fn present(&self, content: &str) -> Result<()> {
        let write = |bytes: &[u8]| {
            io::stdout()
                .lock()
                .write_all(bytes)
                .map_err(|e| anyhow::anyhow!("Failed to write to stdout: {}", e))
        };
        write(content.as_bytes())?;
        if !content.is_empty() && !content.ends_with('\n') {
            write("\n".as_bytes())?;
        }
        Ok(())
    }
}
