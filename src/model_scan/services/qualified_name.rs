/// Scope separator between qualified-name segments
pub const SCOPE_SEPARATOR: &str = "::";

/// Pattern for a captured name: a single-quoted string (escapes allowed)
/// or a bare token of word characters plus `.`, `:`, `/` and `-`.
pub const NAME_PATTERN: &str = r"'(?:[^'\\]|\\.)*'|[A-Za-z_][\w.:/-]*";

/// QualifiedName normalizes names captured from package, view and import
/// headers.
pub struct QualifiedName;

impl QualifiedName {
    /// Strips wrapping single quotes (content kept verbatim, escapes
    /// included), then drops a trailing `::` as left over by `B::*`.
    pub fn normalize(token: &str) -> String {
        let unquoted = Self::strip_quotes(token);
        let trimmed = unquoted.trim_end();
        match trimmed.strip_suffix(SCOPE_SEPARATOR) {
            Some(head) => head.to_string(),
            None => unquoted.to_string(),
        }
    }

    /// Returns the first `::` segment: `A::B::C` becomes `A`.
    pub fn top_level(name: &str) -> &str {
        match name.find(SCOPE_SEPARATOR) {
            Some(pos) => &name[..pos],
            None => name,
        }
    }

    fn strip_quotes(token: &str) -> &str {
        if token.len() >= 2 && token.starts_with('\'') && token.ends_with('\'') {
            &token[1..token.len() - 1]
        } else {
            token
        }
    }
}
