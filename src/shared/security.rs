use crate::shared::error::ModelError;
use std::fs;
use std::path::Path;

/// Maximum source file size (100 MB)
/// Larger files are skipped instead of being pulled into memory
pub const MAX_FILE_SIZE: u64 = 100 * 1024 * 1024;

/// Checks that `path` is a regular file small enough to scan.
///
/// Uses `symlink_metadata()` so a symlink is reported as such instead of
/// being followed.
///
/// # Errors
/// Returns `ModelError::FileReadError` if the metadata cannot be read, the
/// path is a symbolic link or not a regular file, or the file exceeds
/// [`MAX_FILE_SIZE`].
pub fn check_source_file(path: &Path) -> Result<(), ModelError> {
    let read_error = |details: String| ModelError::FileReadError {
        path: path.to_path_buf(),
        details,
    };

    let metadata = fs::symlink_metadata(path)
        .map_err(|e| read_error(format!("Failed to read file metadata: {}", e)))?;

    if metadata.is_symlink() {
        return Err(read_error(
            "Security: source path is a symbolic link. Symbolic links are not scanned."
                .to_string(),
        ));
    }

    if !metadata.is_file() {
        return Err(read_error("Not a regular file".to_string()));
    }

    if metadata.len() > MAX_FILE_SIZE {
        return Err(read_error(format!(
            "File is too large ({} bytes). Maximum allowed size is {} bytes.",
            metadata.len(),
            MAX_FILE_SIZE
        )));
    }

    Ok(())
}

/// Checks that `path` can be written without following a symlink.
///
/// The parent directory must already exist; an existing target must not be
/// a symbolic link.
pub fn check_output_target(path: &Path) -> Result<(), ModelError> {
    let write_error = |details: String| ModelError::FileWriteError {
        path: path.to_path_buf(),
        details,
    };

    if let Some(parent) = path.parent() {
        if parent != Path::new("") && !parent.is_dir() {
            return Err(write_error(format!(
                "Parent directory does not exist: {}",
                parent.display()
            )));
        }
    }

    if let Ok(metadata) = fs::symlink_metadata(path) {
        if metadata.is_symlink() {
            return Err(write_error(
                "Security: Output path is a symbolic link. Writing through symbolic links is not allowed."
                    .to_string(),
            ));
        }
        if metadata.is_dir() {
            return Err(write_error("Output path is a directory".to_string()));
        }
    }

    Ok(())
}
