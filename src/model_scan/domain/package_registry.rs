use indexmap::IndexMap;

/// PackageRegistry aggregate mapping top-level package names to their
/// comment-stripped declaration text.
///
/// Iteration follows insertion order, which the assembler derives from the
/// sorted file list, so every run sees the same order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PackageRegistry {
    packages: IndexMap<String, String>,
}

impl PackageRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts `name` unless it is already present. Returns false when the
    /// entry was discarded because an earlier one won.
    pub(crate) fn insert_first(&mut self, name: String, text: String) -> bool {
        if self.packages.contains_key(&name) {
            return false;
        }
        self.packages.insert(name, text);
        true
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.packages.get(name).map(String::as_str)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.packages.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.packages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.packages.is_empty()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.packages.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.packages
            .iter()
            .map(|(name, text)| (name.as_str(), text.as_str()))
    }
}

impl<N, T> FromIterator<(N, T)> for PackageRegistry
where
    N: Into<String>,
    T: Into<String>,
{
    /// Builds a registry with first-wins semantics.
    fn from_iter<I: IntoIterator<Item = (N, T)>>(iter: I) -> Self {
        let mut registry = PackageRegistry::new();
        for (name, text) in iter {
            registry.insert_first(name.into(), text.into());
        }
        registry
    }
}
