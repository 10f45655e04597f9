pub mod cycle_report;
pub mod dependency_graph;
pub mod package_registry;

pub use cycle_report::CycleReport;
pub use dependency_graph::{DependencyGraph, UnresolvedImports};
pub use package_registry::PackageRegistry;
