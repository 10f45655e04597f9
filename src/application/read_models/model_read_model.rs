use crate::application::dto::AnalysisResponse;
use crate::model_scan::domain::DependencyGraph;
use serde::Serialize;

/// One top-level package with its declaration text
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PackageView {
    pub name: String,
    #[serde(skip)]
    pub text: String,
}

/// A missing import target and the packages importing it
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UnresolvedImportView {
    pub name: String,
    /// Sorted ascending
    pub importers: Vec<String>,
}

/// Query-side view of one analysis run
///
/// `packages` follows the topological order but only lists packages that
/// were actually declared; import-only nodes have no text to emit.
#[derive(Debug, Clone)]
pub struct ModelReadModel {
    pub packages: Vec<PackageView>,
    pub views: Vec<String>,
    pub node_count: usize,
    pub edge_count: usize,
    pub unresolved_imports: Vec<UnresolvedImportView>,
    pub scanned_files: usize,
    pub skipped_files: usize,
    pub graph: DependencyGraph,
}

impl ModelReadModel {
    pub fn from_response(response: &AnalysisResponse) -> Self {
        let packages = response
            .order
            .iter()
            .filter_map(|name| {
                response.registry.get(name).map(|text| PackageView {
                    name: name.clone(),
                    text: text.to_string(),
                })
            })
            .collect();

        let unresolved_imports = response
            .unresolved_imports
            .iter()
            .map(|(name, importers)| UnresolvedImportView {
                name: name.clone(),
                importers: importers.iter().cloned().collect(),
            })
            .collect();

        Self {
            packages,
            views: response.views.clone(),
            node_count: response.graph.node_count(),
            edge_count: response.graph.edge_count(),
            unresolved_imports,
            scanned_files: response.scanned_files,
            skipped_files: response.skipped_files,
            graph: response.graph.clone(),
        }
    }

    pub fn package_names(&self) -> impl Iterator<Item = &str> {
        self.packages.iter().map(|p| p.name.as_str())
    }
}
