use super::cycle_detector::CycleDetector;
use crate::model_scan::domain::DependencyGraph;
use crate::shared::error::ModelError;
use std::collections::{BTreeMap, BTreeSet};

/// TopologicalOrderer computes a reproducible package order.
///
/// Kahn's algorithm with a sorted ready set: whenever several nodes are
/// eligible, the lexicographically smallest name goes first.
pub struct TopologicalOrderer;

impl TopologicalOrderer {
    /// With `dependencies_first`, every package follows everything it
    /// (transitively) imports; otherwise importers come first.
    ///
    /// # Errors
    /// Propagates `ModelError::ImportCycle` from the acyclicity check.
    pub fn order(
        graph: &DependencyGraph,
        dependencies_first: bool,
    ) -> Result<Vec<String>, ModelError> {
        CycleDetector::assert_acyclic(graph)?;
        Ok(kahn(graph, dependencies_first))
    }

    /// True if Kahn's algorithm consumes every node.
    pub fn is_acyclic(graph: &DependencyGraph) -> bool {
        kahn(graph, false).len() == graph.node_count()
    }
}

/// Returns as many nodes as can be ordered; a short result means a cycle.
fn kahn(graph: &DependencyGraph, reversed: bool) -> Vec<String> {
    // Edges point the way nodes are released: imported -> importer when
    // dependencies come first.
    let mut outgoing: BTreeMap<&str, Vec<&str>> = BTreeMap::new();
    let mut pending: BTreeMap<&str, usize> = graph.nodes().map(|n| (n, 0)).collect();

    for (source, target) in graph.edges() {
        let (from, to) = if reversed {
            (target, source)
        } else {
            (source, target)
        };
        outgoing.entry(from).or_default().push(to);
        *pending.entry(to).or_default() += 1;
    }

    let mut ready: BTreeSet<&str> = pending
        .iter()
        .filter(|(_, &count)| count == 0)
        .map(|(&name, _)| name)
        .collect();
    let mut order = Vec::with_capacity(pending.len());

    while let Some(next) = ready.pop_first() {
        order.push(next.to_string());
        for &to in outgoing.get(next).into_iter().flatten() {
            if let Some(count) = pending.get_mut(to) {
                *count -= 1;
                if *count == 0 {
                    ready.insert(to);
                }
            }
        }
    }

    order
}
