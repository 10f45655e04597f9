use crate::application::read_models::ModelReadModel;
use crate::model_scan::services::CycleDetector;
use crate::ports::outbound::ArtifactFormatter;
use crate::shared::error::ModelError;
use crate::shared::Result;
use std::fmt::Write;

/// Layout used when none is configured
pub const DEFAULT_LAYOUT: &str = "kamada_kawai";

const GRAPH_TITLE: &str = "SysML Package Import Graph";

/// GraphvizFormatter adapter exporting the import graph as DOT
///
/// Layout keywords map onto Graphviz engines: `spring` → `fdp`,
/// `kamada_kawai` → `neato`, `shell` → `circo`. Imports whose target was
/// never declared are drawn dashed.
pub struct GraphvizFormatter {
    layout: String,
}

impl GraphvizFormatter {
    pub fn new(layout: impl Into<String>) -> Self {
        Self {
            layout: layout.into(),
        }
    }

    /// Resolves a layout keyword to its Graphviz engine
    pub fn engine_for(layout: &str) -> std::result::Result<&'static str, ModelError> {
        match layout {
            "spring" => Ok("fdp"),
            "kamada_kawai" => Ok("neato"),
            "shell" => Ok("circo"),
            other => Err(ModelError::UnknownLayout {
                layout: other.to_string(),
            }),
        }
    }
}

impl Default for GraphvizFormatter {
    fn default() -> Self {
        Self::new(DEFAULT_LAYOUT)
    }
}

impl ArtifactFormatter for GraphvizFormatter {
    fn format(&self, model: &ModelReadModel) -> Result<String> {
        let graph = &model.graph;
        CycleDetector::assert_acyclic(graph)?;
        if graph.is_empty() {
            return Err(ModelError::EmptyGraph.into());
        }
        let engine = Self::engine_for(&self.layout)?;

        let unresolved = graph.unresolved_imports();
        let mut dot = String::new();
        writeln!(dot, "digraph imports {{")?;
        writeln!(dot, "  label={};", quote(GRAPH_TITLE))?;
        writeln!(dot, "  labelloc=t;")?;
        writeln!(dot, "  layout={};", engine)?;
        writeln!(dot, "  overlap=false;")?;
        writeln!(dot, "  node [shape=box, fontsize=8];")?;

        for node in graph.nodes() {
            if unresolved.contains_key(node) {
                writeln!(dot, "  {} [style=dashed];", quote(node))?;
            } else {
                writeln!(dot, "  {};", quote(node))?;
            }
        }

        for (source, target) in graph.edges() {
            if unresolved.contains_key(target) {
                writeln!(dot, "  {} -> {} [style=dashed];", quote(source), quote(target))?;
            } else {
                writeln!(dot, "  {} -> {};", quote(source), quote(target))?;
            }
        }

        writeln!(dot, "}}")?;
        Ok(dot)
    }
}

/// DOT double-quoted ID
fn quote(id: &str) -> String {
    format!("\"{}\"", id.replace('\\', "\\\\").replace('"', "\\\""))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model_scan::domain::{DependencyGraph, PackageRegistry};
    use crate::model_scan::services::GraphBuilder;

    fn model_of(graph: DependencyGraph) -> ModelReadModel {
        ModelReadModel {
            packages: Vec::new(),
            views: Vec::new(),
            node_count: graph.node_count(),
            edge_count: graph.edge_count(),
            unresolved_imports: Vec::new(),
            scanned_files: 0,
            skipped_files: 0,
            graph,
        }
    }

    #[test]
    fn test_format_sorted_nodes_and_edges() {
        let graph = DependencyGraph::from_edges([("B", "C"), ("A", "C"), ("A", "B")]);
        let dot = GraphvizFormatter::default().format(&model_of(graph)).unwrap();

        assert!(dot.starts_with("digraph imports {\n"));
        assert!(dot.contains("  layout=neato;\n"));
        assert!(dot.contains("  \"A\";\n  \"B\";\n  \"C\";\n"));
        assert!(dot.contains("  \"A\" -> \"B\";\n  \"A\" -> \"C\";\n  \"B\" -> \"C\";\n"));
        assert!(dot.ends_with("}\n"));
    }

    #[test]
    fn test_format_unresolved_targets_dashed() {
        let registry: PackageRegistry = [("App", "package App {\n  import StdLib;\n}\n")]
            .into_iter()
            .collect();
        let dot = GraphvizFormatter::new("shell")
            .format(&model_of(GraphBuilder::build(&registry)))
            .unwrap();

        assert!(dot.contains("  layout=circo;\n"));
        assert!(dot.contains("  \"StdLib\" [style=dashed];\n"));
        assert!(dot.contains("  \"App\" -> \"StdLib\" [style=dashed];\n"));
    }

    #[test]
    fn test_format_rejects_cycles() {
        let graph = DependencyGraph::from_edges([("A", "B"), ("B", "A")]);
        let err = GraphvizFormatter::default()
            .format(&model_of(graph))
            .unwrap_err();

        assert!(matches!(
            err.downcast_ref::<ModelError>(),
            Some(ModelError::ImportCycle { .. })
        ));
    }

    #[test]
    fn test_format_rejects_empty_graph() {
        let err = GraphvizFormatter::default()
            .format(&model_of(DependencyGraph::new()))
            .unwrap_err();

        assert!(matches!(
            err.downcast_ref::<ModelError>(),
            Some(ModelError::EmptyGraph)
        ));
    }

    #[test]
    fn test_format_rejects_unknown_layout() {
        let graph = DependencyGraph::from_edges([("A", "B")]);
        let err = GraphvizFormatter::new("circular")
            .format(&model_of(graph))
            .unwrap_err();

        assert!(format!("{}", err).contains("Unknown layout: circular"));
    }

    #[test]
    fn test_engine_for_known_layouts() {
        assert_eq!(GraphvizFormatter::engine_for("spring").unwrap(), "fdp");
        assert_eq!(GraphvizFormatter::engine_for("kamada_kawai").unwrap(), "neato");
        assert_eq!(GraphvizFormatter::engine_for("shell").unwrap(), "circo");
        assert!(GraphvizFormatter::engine_for("Spring").is_err());
    }

    #[test]
    fn test_quote_escapes() {
        assert_eq!(quote("Sub System"), "\"Sub System\"");
        assert_eq!(quote("a\"b\\c"), "\"a\\\"b\\\\c\"");
    }
}
