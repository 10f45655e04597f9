use crate::model_scan::domain::{DependencyGraph, PackageRegistry, UnresolvedImports};

/// AnalysisResponse - everything the analysis use case recovered
///
/// Formatters never read this directly; they go through `ModelReadModel`.
#[derive(Debug, Clone)]
pub struct AnalysisResponse {
    /// Top-level packages in registry (first-seen) order
    pub registry: PackageRegistry,
    /// `importer -> imported` graph, including unresolved targets
    pub graph: DependencyGraph,
    /// Topological order over every graph node
    pub order: Vec<String>,
    /// Fully-qualified view names, deduplicated in first-seen order
    pub views: Vec<String>,
    /// Unresolved imports left after the ignore list was applied
    pub unresolved_imports: UnresolvedImports,
    /// Source files discovered under the root
    pub scanned_files: usize,
    /// Source files skipped because they could not be read
    pub skipped_files: usize,
}
