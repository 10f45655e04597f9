use super::view_scanner::ViewScanner;
use crate::model_scan::domain::PackageRegistry;
use indexmap::IndexSet;

/// ViewCollector gathers view names across every top-level package.
pub struct ViewCollector;

impl ViewCollector {
    /// Scans packages in registry order and drops exact-string duplicates,
    /// keeping the first occurrence. `A::V` and `B::V` stay distinct.
    pub fn collect_all(registry: &PackageRegistry) -> Vec<String> {
        let views: IndexSet<String> = registry
            .iter()
            .flat_map(|(name, text)| ViewScanner::scan(name, text))
            .collect();
        views.into_iter().collect()
    }
}
