use crate::model_scan::policies::ROOT_NAMESPACE;
use std::collections::BTreeSet;
use std::path::PathBuf;

/// Extension scanned when none is configured
pub const DEFAULT_EXTENSION: &str = "sysml";

/// AnalysisRequest - input of the model analysis use case
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalysisRequest {
    /// Root of the model tree
    pub root: PathBuf,
    /// File extension to scan, without the leading dot
    pub extension: String,
    /// Unresolved import targets that are never reported
    pub ignore_missing: BTreeSet<String>,
    /// Fail when unresolved imports remain after filtering
    pub strict_missing: bool,
    /// Emit imported packages before their importers
    pub dependencies_first: bool,
}

impl AnalysisRequest {
    pub fn new(root: PathBuf) -> Self {
        Self {
            root,
            extension: DEFAULT_EXTENSION.to_string(),
            ignore_missing: BTreeSet::from([ROOT_NAMESPACE.to_string()]),
            strict_missing: false,
            dependencies_first: true,
        }
    }

    pub fn with_extension(mut self, extension: impl Into<String>) -> Self {
        self.extension = extension.into();
        self
    }

    pub fn with_ignore_missing<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.ignore_missing = names.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_strict_missing(mut self, strict: bool) -> Self {
        self.strict_missing = strict;
        self
    }

    pub fn with_dependencies_first(mut self, dependencies_first: bool) -> Self {
        self.dependencies_first = dependencies_first;
        self
    }
}
