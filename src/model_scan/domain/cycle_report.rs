use std::fmt;

/// Maximum number of cycles rendered in a diagnostic
pub const MAX_RENDERED_CYCLES: usize = 25;

/// Elementary cycles found in an import graph.
///
/// Each cycle lists its nodes in traversal order and implicitly closes back
/// onto its first element.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CycleReport {
    cycles: Vec<Vec<String>>,
}

impl CycleReport {
    pub fn new(cycles: Vec<Vec<String>>) -> Self {
        Self { cycles }
    }

    pub fn cycles(&self) -> &[Vec<String>] {
        &self.cycles
    }

    pub fn len(&self) -> usize {
        self.cycles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cycles.is_empty()
    }

    /// True if any cycle passes through `node`
    pub fn involves(&self, node: &str) -> bool {
        self.cycles.iter().any(|c| c.iter().any(|n| n == node))
    }
}

impl fmt::Display for CycleReport {
    /// Renders `1. A -> B -> A` lines, capped at [`MAX_RENDERED_CYCLES`].
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut lines = Vec::new();
        for (i, cycle) in self.cycles.iter().take(MAX_RENDERED_CYCLES).enumerate() {
            let Some(first) = cycle.first() else {
                continue;
            };
            let mut hops: Vec<&str> = cycle.iter().map(String::as_str).collect();
            hops.push(first);
            lines.push(format!("{}. {}", i + 1, hops.join(" -> ")));
        }
        if self.cycles.len() > MAX_RENDERED_CYCLES {
            lines.push(format!("+{} more", self.cycles.len() - MAX_RENDERED_CYCLES));
        }
        write!(f, "{}", lines.join("\n"))
    }
}
