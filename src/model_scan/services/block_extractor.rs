use super::qualified_name::{QualifiedName, NAME_PATTERN};
use regex::Regex;
use std::sync::LazyLock;

/// `package <name>` at the start of a line, optionally preceded by modifier
/// words such as `library` or `standard library`. Group 1 spans the header,
/// group 2 the raw name.
static PACKAGE_HEADER_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(
        r"(?m)^[ \t]*((?:\w+[ \t]+)*?package[ \t]+({}))",
        NAME_PATTERN
    ))
    .unwrap()
});

/// BlockExtractor finds top-level package declarations in comment-stripped
/// text.
///
/// Only headers at brace depth 0 are returned; nested packages stay embedded
/// in their parent's text. Unterminated or malformed declarations are
/// tolerated, but a header followed by nothing except whitespace is dropped.
/// Block text starts at the first modifier (or `package`), not at the line
/// start, so indentation before the header is not kept.
pub struct BlockExtractor;

impl BlockExtractor {
    /// Returns `(name, declaration text)` pairs in source order.
    ///
    /// The declaration text runs from the header to:
    /// - the end of the header's line for `package X;` and for any other
    ///   token following the name,
    /// - the matching `}` (plus a directly following `;`) for block bodies,
    /// - the end of the input when the body is never closed.
    ///
    /// A header with only whitespace after its name yields no block.
    pub fn extract_top_level_blocks(text: &str) -> Vec<(String, String)> {
        let depths = brace_depth_prefix(text);
        let mut blocks = Vec::new();

        for caps in PACKAGE_HEADER_REGEX.captures_iter(text) {
            let (Some(header), Some(raw_name)) = (caps.get(1), caps.get(2)) else {
                continue;
            };
            if depths[header.start()] != 0 {
                continue;
            }

            let name = QualifiedName::normalize(raw_name.as_str());
            let Some(end) = block_end(text, header.end()) else {
                tracing::trace!(package = %name, "header without a body at end of input skipped");
                continue;
            };
            tracing::trace!(package = %name, start = header.start(), end, "top-level package header");
            blocks.push((name, text[header.start()..end].to_string()));
        }

        blocks
    }
}

/// `depths[i]` is the brace depth before byte `i`; closing braces never take
/// it below zero.
fn brace_depth_prefix(text: &str) -> Vec<usize> {
    let mut depths = Vec::with_capacity(text.len() + 1);
    let mut depth = 0usize;
    for byte in text.bytes() {
        depths.push(depth);
        match byte {
            b'{' => depth += 1,
            b'}' => depth = depth.saturating_sub(1),
            _ => {}
        }
    }
    depths.push(depth);
    depths
}

/// End offset (exclusive) of the declaration whose name ends at `after_name`,
/// or `None` when only whitespace follows the name.
fn block_end(text: &str, after_name: usize) -> Option<usize> {
    let bytes = text.as_bytes();
    let next = next_non_whitespace(text, after_name)?;

    let end = match bytes[next] {
        b'{' => match matching_brace(bytes, next) {
            Some(close) => {
                let end = close + 1;
                match next_non_whitespace(text, end) {
                    Some(k) if bytes[k] == b';' => k + 1,
                    _ => end,
                }
            }
            None => text.len(),
        },
        _ => line_end(text, next),
    };
    Some(end)
}

fn next_non_whitespace(text: &str, from: usize) -> Option<usize> {
    text[from..]
        .char_indices()
        .find(|(_, c)| !c.is_whitespace())
        .map(|(i, _)| from + i)
}

/// End of the physical line containing `from`, excluding the terminator.
fn line_end(text: &str, from: usize) -> usize {
    let end = text[from..]
        .find('\n')
        .map_or(text.len(), |pos| from + pos);
    if end > from && text.as_bytes()[end - 1] == b'\r' {
        end - 1
    } else {
        end
    }
}

/// Index of the `}` closing the `{` at `open`, by plain depth counting.
fn matching_brace(bytes: &[u8], open: usize) -> Option<usize> {
    let mut depth = 0i64;
    for (i, byte) in bytes.iter().enumerate().skip(open) {
        match byte {
            b'{' => depth += 1,
            b'}' => {
                depth -= 1;
                if depth == 0 {
                    return Some(i);
                }
            }
            _ => {}
        }
    }
    None
}
