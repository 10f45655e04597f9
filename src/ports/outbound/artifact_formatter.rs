use crate::application::read_models::ModelReadModel;
use crate::shared::Result;

/// ArtifactFormatter port for rendering analysis results
///
/// Implementations turn the read model into one output artifact: the
/// dependency-ordered source file, the notebook, the graph export, or the
/// run summary.
pub trait ArtifactFormatter {
    /// Renders the artifact's full content
    ///
    /// # Errors
    /// Returns an error if the model cannot be rendered in this format
    /// (for example an empty or cyclic graph for the graph export)
    fn format(&self, model: &ModelReadModel) -> Result<String>;
}
