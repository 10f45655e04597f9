use super::comment_stripper::CommentStripper;
use super::qualified_name::{QualifiedName, NAME_PATTERN, SCOPE_SEPARATOR};
use regex::Regex;
use std::sync::LazyLock;

/// A package header that opens its block on the same line
static PACKAGE_OPEN_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(
        r"^\s*(?:\w+\s+)*?package\s+({})\s*\{{",
        NAME_PATTERN
    ))
    .unwrap()
});

/// A view header that opens its block on the same line
static VIEW_OPEN_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(&format!(r"^\s*view\s+({})\s*\{{", NAME_PATTERN)).unwrap());

/// A nested package still open at the current line
struct OpenPackage {
    name: String,
    /// Brace depth just inside the package's `{`
    depth: i64,
}

/// ViewScanner recovers fully-qualified view names from a top-level
/// package's text.
///
/// Detection works per physical line: a header is recognized only when its
/// `{` sits on the same line. Lines split on `\n` and `\r\n` only.
pub struct ViewScanner;

impl ViewScanner {
    /// Returns `Top::Inner…::View` paths in source order.
    pub fn scan(package_name: &str, text: &str) -> Vec<String> {
        let mut views = Vec::new();
        let mut depth: i64 = 0;
        let mut stack: Vec<OpenPackage> = Vec::new();

        for raw_line in text.lines() {
            let line = CommentStripper::strip_line(raw_line);

            while stack.last().is_some_and(|open| open.depth > depth) {
                stack.pop();
            }

            if let Some(caps) = PACKAGE_OPEN_REGEX.captures(line) {
                let inner = QualifiedName::normalize(&caps[1]);
                // The enclosing header shows up when the full block is scanned
                if inner != package_name {
                    stack.push(OpenPackage {
                        name: inner,
                        depth: depth + 1,
                    });
                }
            }

            if let Some(caps) = VIEW_OPEN_REGEX.captures(line) {
                let view = QualifiedName::normalize(&caps[1]);
                let mut path: Vec<&str> = Vec::with_capacity(stack.len() + 2);
                path.push(package_name);
                path.extend(stack.iter().map(|open| open.name.as_str()));
                path.push(&view);
                views.push(path.join(SCOPE_SEPARATOR));
            }

            depth += brace_delta(line);
        }

        views
    }
}

fn brace_delta(line: &str) -> i64 {
    line.bytes().fold(0, |delta, byte| match byte {
        b'{' => delta + 1,
        b'}' => delta - 1,
        _ => delta,
    })
}
