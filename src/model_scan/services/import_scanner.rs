use super::comment_stripper::CommentStripper;
use super::qualified_name::{QualifiedName, NAME_PATTERN};
use regex::Regex;
use std::sync::LazyLock;

/// Whole-word `import` followed by whitespace and a target token
static IMPORT_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(&format!(r"\bimport\s+({})", NAME_PATTERN)).unwrap());

/// ImportScanner recovers the top-level packages a declaration imports.
pub struct ImportScanner;

impl ImportScanner {
    /// Returns one top-level import name per matching line, in line order.
    ///
    /// Only the first `import` on a physical line is recognized; later
    /// imports on the same line are not reported. Imports of `package_name`
    /// itself are dropped, and duplicates are kept. Lines split on `\n` and
    /// `\r\n` only; form feeds or Unicode separators do not end a line.
    pub fn scan(package_name: &str, text: &str) -> Vec<String> {
        let mut imports = Vec::new();

        for raw_line in text.lines() {
            if CommentStripper::is_comment_line(raw_line) {
                continue;
            }
            let line = CommentStripper::strip_line(raw_line);
            let Some(target) = IMPORT_REGEX.captures(line).and_then(|caps| caps.get(1)) else {
                continue;
            };

            let qualified = QualifiedName::normalize(target.as_str());
            let top = QualifiedName::top_level(&qualified);
            if top == package_name {
                continue;
            }
            imports.push(top.to_string());
        }

        imports
    }
}
