use super::topological_orderer::TopologicalOrderer;
use crate::model_scan::domain::{CycleReport, DependencyGraph};
use crate::shared::error::ModelError;
use std::collections::BTreeSet;

/// CycleDetector validates acyclicity and enumerates elementary cycles for
/// diagnostics.
pub struct CycleDetector;

impl CycleDetector {
    /// Fails with `ModelError::ImportCycle` listing every elementary cycle.
    pub fn assert_acyclic(graph: &DependencyGraph) -> Result<(), ModelError> {
        if TopologicalOrderer::is_acyclic(graph) {
            return Ok(());
        }
        let cycles = Self::find_cycles(graph);
        tracing::debug!(count = cycles.len(), "import cycles found");
        Err(ModelError::ImportCycle { cycles })
    }

    /// Enumerates elementary cycles with Johnson's blocking search.
    ///
    /// Each cycle starts at its smallest node (by name); cycles are listed by
    /// start node, then in sorted-successor DFS order.
    pub fn find_cycles(graph: &DependencyGraph) -> CycleReport {
        let names: Vec<&str> = graph.nodes().collect();
        let adjacency: Vec<Vec<usize>> = names
            .iter()
            .map(|name| {
                graph
                    .successors(name)
                    .filter_map(|target| names.binary_search(&target).ok())
                    .collect()
            })
            .collect();

        let mut search = CircuitSearch::new(&adjacency);
        for start in 0..names.len() {
            search.reset(start);
            search.circuit(start);
        }

        let cycles = search
            .found
            .into_iter()
            .map(|cycle| cycle.into_iter().map(|i| names[i].to_string()).collect())
            .collect();
        CycleReport::new(cycles)
    }
}

/// State for one round of Johnson's circuit search, restricted to nodes
/// whose index is at least `start`.
struct CircuitSearch<'a> {
    adjacency: &'a [Vec<usize>],
    start: usize,
    blocked: Vec<bool>,
    blocked_by: Vec<BTreeSet<usize>>,
    path: Vec<usize>,
    found: Vec<Vec<usize>>,
}

impl<'a> CircuitSearch<'a> {
    fn new(adjacency: &'a [Vec<usize>]) -> Self {
        let n = adjacency.len();
        Self {
            adjacency,
            start: 0,
            blocked: vec![false; n],
            blocked_by: vec![BTreeSet::new(); n],
            path: Vec::new(),
            found: Vec::new(),
        }
    }

    fn reset(&mut self, start: usize) {
        self.start = start;
        self.blocked.iter_mut().for_each(|b| *b = false);
        self.blocked_by.iter_mut().for_each(BTreeSet::clear);
        self.path.clear();
    }

    fn circuit(&mut self, v: usize) -> bool {
        let mut closed = false;
        self.path.push(v);
        self.blocked[v] = true;

        for &w in &self.adjacency[v] {
            if w < self.start {
                continue;
            }
            if w == self.start {
                self.found.push(self.path.clone());
                closed = true;
            } else if !self.blocked[w] && self.circuit(w) {
                closed = true;
            }
        }

        if closed {
            self.unblock(v);
        } else {
            for &w in &self.adjacency[v] {
                if w >= self.start {
                    self.blocked_by[w].insert(v);
                }
            }
        }

        self.path.pop();
        closed
    }

    fn unblock(&mut self, u: usize) {
        self.blocked[u] = false;
        let waiting = std::mem::take(&mut self.blocked_by[u]);
        for w in waiting {
            if self.blocked[w] {
                self.unblock(w);
            }
        }
    }
}
