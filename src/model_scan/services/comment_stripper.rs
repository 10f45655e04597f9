/// Two-character line comment marker
pub const COMMENT_MARKER: &str = "//";

/// CommentStripper removes line comments from raw source text.
///
/// Truncation is purely positional: a marker inside a quoted name is cut like
/// any other. Line terminators (`\n` or `\r\n`) survive untouched.
pub struct CommentStripper;

impl CommentStripper {
    pub fn strip(text: &str) -> String {
        let mut out = String::with_capacity(text.len());
        for segment in text.split_inclusive('\n') {
            let (content, terminator) = split_terminator(segment);
            match content.find(COMMENT_MARKER) {
                Some(pos) => out.push_str(&content[..pos]),
                None => out.push_str(content),
            }
            out.push_str(terminator);
        }
        out
    }

    /// Strips the comment from a single line that has no terminator.
    pub fn strip_line(line: &str) -> &str {
        match line.find(COMMENT_MARKER) {
            Some(pos) => &line[..pos],
            None => line,
        }
    }

    /// True if the line, ignoring leading whitespace, is a comment.
    pub fn is_comment_line(line: &str) -> bool {
        line.trim_start().starts_with(COMMENT_MARKER)
    }
}

fn split_terminator(segment: &str) -> (&str, &str) {
    if let Some(content) = segment.strip_suffix("\r\n") {
        (content, "\r\n")
    } else if let Some(content) = segment.strip_suffix('\n') {
        (content, "\n")
    } else {
        (segment, "")
    }
}
