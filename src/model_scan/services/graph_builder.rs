use super::import_scanner::ImportScanner;
use crate::model_scan::domain::{DependencyGraph, PackageRegistry};

/// GraphBuilder turns a registry into the `importer -> imported` graph.
///
/// Import targets absent from the registry still become nodes, and are
/// recorded in the graph's unresolved-imports table.
pub struct GraphBuilder;

impl GraphBuilder {
    pub fn build(registry: &PackageRegistry) -> DependencyGraph {
        let mut graph = DependencyGraph::new();

        for (name, text) in registry.iter() {
            graph.add_node(name);

            for target in ImportScanner::scan(name, text) {
                if !registry.contains(&target) {
                    graph.record_unresolved(&target, name);
                }
                graph.add_edge(name.to_string(), target);
            }
        }

        tracing::debug!(
            nodes = graph.node_count(),
            edges = graph.edge_count(),
            unresolved = graph.unresolved_imports().len(),
            "import graph built"
        );
        graph
    }
}
