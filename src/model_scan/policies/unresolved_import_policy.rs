use crate::model_scan::domain::{DependencyGraph, UnresolvedImports};
use crate::shared::error::ModelError;
use std::collections::BTreeSet;

/// Placeholder name some tools emit for the anonymous root namespace
pub const ROOT_NAMESPACE: &str = "<root>";

/// UnresolvedImportPolicy decides what happens to imports whose target was
/// never scanned.
///
/// Standard libraries are routinely imported without being part of the
/// scanned tree, so missing packages are data by default and an error only
/// in strict mode.
pub struct UnresolvedImportPolicy;

impl UnresolvedImportPolicy {
    /// The graph's unresolved imports minus every name in `ignore`.
    pub fn unresolved(graph: &DependencyGraph, ignore: &BTreeSet<String>) -> UnresolvedImports {
        graph
            .unresolved_imports()
            .iter()
            .filter(|(name, _)| !ignore.contains(name.as_str()))
            .map(|(name, importers)| (name.clone(), importers.clone()))
            .collect()
    }

    /// Fails with `ModelError::MissingPackage` only when `strict` is set and
    /// something remains after filtering.
    pub fn enforce(
        graph: &DependencyGraph,
        ignore: &BTreeSet<String>,
        strict: bool,
    ) -> Result<(), ModelError> {
        let unresolved = Self::unresolved(graph, ignore);
        if unresolved.is_empty() || !strict {
            return Ok(());
        }
        Err(ModelError::MissingPackage {
            message: Self::format(&unresolved),
        })
    }

    /// One line per missing package, both levels sorted ascending.
    pub fn format(unresolved: &UnresolvedImports) -> String {
        let mut lines = vec!["Missing imported package definitions detected:".to_string()];
        for (name, importers) in unresolved {
            let importers: Vec<&str> = importers.iter().map(String::as_str).collect();
            lines.push(format!("  - {}  (imported by: {})", name, importers.join(", ")));
        }
        lines.join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model_scan::domain::PackageRegistry;
    use crate::model_scan::services::GraphBuilder;

    fn graph_of(entries: &[(&str, &str)]) -> DependencyGraph {
        let registry: PackageRegistry = entries.iter().copied().collect();
        GraphBuilder::build(&registry)
    }

    fn ignore(names: &[&str]) -> BTreeSet<String> {
        names.iter().map(|n| n.to_string()).collect()
    }

    #[test]
    fn test_unresolved_recorded_and_returned() {
        let graph = graph_of(&[
            ("A", "package A {\n  private import B::*;\n  private import StdLib::*;\n}\n"),
            ("B", "package B;\n"),
        ]);

        let unresolved = UnresolvedImportPolicy::unresolved(&graph, &ignore(&[ROOT_NAMESPACE]));
        assert_eq!(unresolved.len(), 1);
        assert_eq!(unresolved["StdLib"], ignore(&["A"]));

        assert!(UnresolvedImportPolicy::enforce(&graph, &ignore(&[ROOT_NAMESPACE]), false).is_ok());
    }

    #[test]
    fn test_unresolved_can_be_ignored() {
        let graph = graph_of(&[("A", "package A { private import StdLib::*; }\n")]);

        assert!(UnresolvedImportPolicy::unresolved(&graph, &ignore(&["StdLib"])).is_empty());
        assert!(UnresolvedImportPolicy::enforce(&graph, &ignore(&["StdLib"]), true).is_ok());
    }

    #[test]
    fn test_strict_mode_names_missing_package() {
        let graph = graph_of(&[("A", "package A { private import Missing::*; }\n")]);

        let err = UnresolvedImportPolicy::enforce(&graph, &BTreeSet::new(), true).unwrap_err();
        let ModelError::MissingPackage { message } = &err else {
            panic!("expected MissingPackage, got {:?}", err);
        };
        assert!(message.contains("Missing"));
        assert!(message.contains("(imported by: A)"));
    }

    #[test]
    fn test_format_sorts_names_and_importers() {
        let graph = graph_of(&[
            ("Zed", "package Zed {\n  import Units;\n  import Alpha;\n}\n"),
            ("Beta", "package Beta {\n  import Units;\n}\n"),
        ]);

        let message = UnresolvedImportPolicy::format(graph.unresolved_imports());
        assert_eq!(
            message,
            "Missing imported package definitions detected:\n  - Alpha  (imported by: Zed)\n  - Units  (imported by: Beta, Zed)"
        );
    }

    #[test]
    fn test_enforce_without_unresolved_is_noop() {
        let graph = graph_of(&[("A", "package A;\n")]);
        assert!(UnresolvedImportPolicy::enforce(&graph, &BTreeSet::new(), true).is_ok());
    }
}
