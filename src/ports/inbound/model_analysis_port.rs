use crate::application::dto::{AnalysisRequest, AnalysisResponse};
use crate::shared::Result;
use std::path::Path;

/// ModelAnalysisPort - Inbound port for the model analysis use case
///
/// This port defines the interface that external adapters (CLI, tests)
/// use to scan a model tree. It represents the application's public API.
pub trait ModelAnalysisPort {
    /// Runs the full pipeline: scan, graph, validation, views and ordering
    ///
    /// # Errors
    /// Returns an error if:
    /// - The scan root does not exist or is not a directory
    /// - The import graph contains a cycle (`ModelError::ImportCycle`)
    /// - Strict mode is on and imports stay unresolved
    ///   (`ModelError::MissingPackage`)
    fn analyze(&self, request: AnalysisRequest) -> Result<AnalysisResponse>;

    /// Scans `root` and returns only the topological order, skipping the
    /// unresolved-import policy
    fn order(&self, root: &Path, extension: &str, dependencies_first: bool)
        -> Result<Vec<String>>;
}
