use serde::Serialize;
use std::path::PathBuf;

/// Kind of file a run produces
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ArtifactKind {
    /// Dependency-ordered source concatenation
    Sysml,
    /// Jupyter notebook
    Notebook,
    /// Graphviz export of the import graph
    Graph,
}

impl std::fmt::Display for ArtifactKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ArtifactKind::Sysml => write!(f, "sysml"),
            ArtifactKind::Notebook => write!(f, "notebook"),
            ArtifactKind::Graph => write!(f, "graph"),
        }
    }
}

/// An artifact written to disk during a run
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WrittenArtifact {
    pub kind: ArtifactKind,
    pub path: PathBuf,
}

impl WrittenArtifact {
    pub fn new(kind: ArtifactKind, path: PathBuf) -> Self {
        Self { kind, path }
    }
}
