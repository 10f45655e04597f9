use crate::shared::Result;

/// OutputPresenter port for presenting final output
///
/// This port abstracts the output destination (stdout, file, etc.)
/// where a formatted artifact is delivered.
pub trait OutputPresenter {
    /// Presents the formatted content to the output destination
    ///
    /// # Errors
    /// Returns an error if:
    /// - The parent directory of an output file does not exist
    /// - The output path is a symbolic link
    /// - Writing to the output destination fails
    fn present(&self, content: &str) -> Result<()>;
}
