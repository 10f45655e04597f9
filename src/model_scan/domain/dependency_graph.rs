use std::collections::{BTreeMap, BTreeSet};

/// Import targets missing from the registry, each with the set of packages
/// importing it.
pub type UnresolvedImports = BTreeMap<String, BTreeSet<String>>;

/// DependencyGraph aggregate: a simple directed graph `importer -> imported`.
///
/// Nodes and successor sets are kept sorted so every derived view (cycle
/// listings, topological order, exports) is a pure function of the node and
/// edge sets.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DependencyGraph {
    nodes: BTreeSet<String>,
    successors: BTreeMap<String, BTreeSet<String>>,
    unresolved_imports: UnresolvedImports,
}

impl DependencyGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a graph from explicit edges. Both endpoints become nodes.
    pub fn from_edges<I, S>(edges: I) -> Self
    where
        I: IntoIterator<Item = (S, S)>,
        S: Into<String>,
    {
        let mut graph = Self::new();
        for (source, target) in edges {
            graph.add_edge(source.into(), target.into());
        }
        graph
    }

    pub(crate) fn add_node(&mut self, name: &str) {
        if !self.nodes.contains(name) {
            self.nodes.insert(name.to_string());
        }
    }

    /// Adds `source -> target`; parallel edges collapse into one.
    pub(crate) fn add_edge(&mut self, source: String, target: String) {
        self.add_node(&source);
        self.add_node(&target);
        self.successors.entry(source).or_default().insert(target);
    }

    pub(crate) fn record_unresolved(&mut self, target: &str, importer: &str) {
        self.unresolved_imports
            .entry(target.to_string())
            .or_default()
            .insert(importer.to_string());
    }

    pub fn nodes(&self) -> impl Iterator<Item = &str> {
        self.nodes.iter().map(String::as_str)
    }

    pub fn contains_node(&self, name: &str) -> bool {
        self.nodes.contains(name)
    }

    /// Packages imported by `name`, sorted
    pub fn successors(&self, name: &str) -> impl Iterator<Item = &str> {
        self.successors
            .get(name)
            .into_iter()
            .flat_map(|targets| targets.iter().map(String::as_str))
    }

    pub fn has_edge(&self, source: &str, target: &str) -> bool {
        self.successors
            .get(source)
            .is_some_and(|targets| targets.contains(target))
    }

    /// All edges in (source, target) order
    pub fn edges(&self) -> impl Iterator<Item = (&str, &str)> {
        self.successors.iter().flat_map(|(source, targets)| {
            targets
                .iter()
                .map(move |target| (source.as_str(), target.as_str()))
        })
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.successors.values().map(BTreeSet::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn unresolved_imports(&self) -> &UnresolvedImports {
        &self.unresolved_imports
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_edges_creates_both_endpoints() {
        let graph = DependencyGraph::from_edges([("A", "B"), ("B", "C")]);

        assert_eq!(graph.node_count(), 3);
        assert_eq!(graph.edge_count(), 2);
        assert!(graph.has_edge("A", "B"));
        assert!(!graph.has_edge("B", "A"));
    }

    #[test]
    fn test_parallel_edges_collapse() {
        let graph = DependencyGraph::from_edges([("A", "B"), ("A", "B")]);
        assert_eq!(graph.edge_count(), 1);
    }

    #[test]
    fn test_nodes_and_edges_are_sorted() {
        let graph = DependencyGraph::from_edges([("C", "A"), ("A", "C"), ("A", "B")]);

        let nodes: Vec<&str> = graph.nodes().collect();
        assert_eq!(nodes, vec!["A", "B", "C"]);

        let edges: Vec<(&str, &str)> = graph.edges().collect();
        assert_eq!(edges, vec![("A", "B"), ("A", "C"), ("C", "A")]);
    }

    #[test]
    fn test_successors_of_leaf_is_empty() {
        let graph = DependencyGraph::from_edges([("A", "B")]);
        assert_eq!(graph.successors("B").count(), 0);
        assert_eq!(graph.successors("missing").count(), 0);
    }

    #[test]
    fn test_empty_graph() {
        let graph = DependencyGraph::new();
        assert!(graph.is_empty());
        assert_eq!(graph.edge_count(), 0);
        assert!(graph.unresolved_imports().is_empty());
    }
}
