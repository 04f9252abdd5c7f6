// Shared per-file extraction context.
//
// Holds the source text, its path, and a precomputed line-offset index so
// every raw line-span slice is O(1) after one O(n) pass over the source.

use tree_sitter::Node;

/// Byte offsets of each line start, counted the way `str::lines` counts lines.
pub struct LineIndex {
    offsets: Vec<usize>,
    len: usize,
}

impl LineIndex {
    pub fn new(source: &str) -> Self {
        let mut offsets = vec![0];
        for (i, b) in source.bytes().enumerate() {
            if b == b'\n' {
                offsets.push(i + 1);
            }
        }
        Self {
            offsets,
            len: source.len(),
        }
    }

    /// Number of lines; a trailing newline does not open a phantom line.
    pub fn line_count(&self) -> usize {
        if self.len == 0 {
            0
        } else if self.offsets.last() == Some(&self.len) {
            self.offsets.len() - 1
        } else {
            self.offsets.len()
        }
    }

    /// Raw slice covering the 1-based inclusive line span, without the final
    /// line terminator.
    pub fn slice_lines<'a>(&self, source: &'a str, start_line: usize, end_line: usize) -> &'a str {
        if start_line == 0 || start_line > end_line {
            return "";
        }
        let start = match self.offsets.get(start_line - 1) {
            Some(&offset) => offset,
            None => return "",
        };
        let mut end = self.offsets.get(end_line).copied().unwrap_or(self.len);
        if end > start && source.as_bytes()[end - 1] == b'\n' {
            end -= 1;
            if end > start && source.as_bytes()[end - 1] == b'\r' {
                end -= 1;
            }
        }
        &source[start..end]
    }
}

/// Per-file context handed to the element builders.
pub struct SourceContext {
    pub filepath: String,
    pub content: String,
    index: LineIndex,
}

impl SourceContext {
    pub fn new(filepath: String, content: String) -> Self {
        let index = LineIndex::new(&content);
        Self {
            filepath,
            content,
            index,
        }
    }

    /// Literal source text of a tree-sitter node.
    pub fn node_text(&self, node: &Node) -> &str {
        self.content
            .get(node.start_byte()..node.end_byte())
            .unwrap_or("")
    }

    /// 1-based inclusive line span of a node.
    pub fn node_span(&self, node: &Node) -> (u32, u32) {
        (
            node.start_position().row as u32 + 1,
            node.end_position().row as u32 + 1,
        )
    }

    /// Raw source slice covering a node's full line span.
    pub fn node_lines(&self, node: &Node) -> &str {
        let (start_line, end_line) = self.node_span(node);
        self.index
            .slice_lines(&self.content, start_line as usize, end_line as usize)
    }

    pub fn line_count(&self) -> usize {
        self.index.line_count()
    }

    /// Leading string-literal statement of a body block, delimiters stripped.
    ///
    /// Only a *leading* literal counts: if the first non-comment statement is
    /// anything else, the body has no docstring.
    pub fn docstring(&self, body: &Node) -> Option<String> {
        let mut cursor = body.walk();
        for child in body.named_children(&mut cursor) {
            if child.kind() == "comment" {
                continue;
            }
            if child.kind() == "expression_statement" {
                let mut expr_cursor = child.walk();
                for expr_child in child.children(&mut expr_cursor) {
                    if expr_child.kind() == "string" {
                        return Some(self.unquote_string(&expr_child));
                    }
                }
            }
            return None;
        }
        None
    }

    /// Text between a string node's opening and closing delimiters, trimmed.
    /// Handles single, double, and triple quotes plus prefix letters (r, f, b)
    /// by relying on the grammar's string_start/string_end markers.
    fn unquote_string(&self, string_node: &Node) -> String {
        let mut start = string_node.start_byte();
        let mut end = string_node.end_byte();
        let mut cursor = string_node.walk();
        for child in string_node.children(&mut cursor) {
            match child.kind() {
                "string_start" => start = child.end_byte(),
                "string_end" => end = child.start_byte(),
                _ => {}
            }
        }
        self.content
            .get(start..end)
            .unwrap_or("")
            .trim()
            .to_string()
    }

    /// Truncate to `max_chars` characters, appending `...` when cut. Used for
    /// file summaries; respects UTF-8 character boundaries.
    pub fn truncate_with_marker(text: &str, max_chars: usize) -> String {
        if text.chars().count() <= max_chars {
            text.to_string()
        } else {
            text.chars().take(max_chars).collect::<String>() + "..."
        }
    }

    /// Truncate to `max_chars` characters with no marker. Used for class
    /// bodies, which keep a bare cap.
    pub fn truncate_plain(text: &str, max_chars: usize) -> String {
        if text.chars().count() <= max_chars {
            text.to_string()
        } else {
            text.chars().take(max_chars).collect()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn line_count_matches_lines_iterator() {
        for source in ["", "a", "a\n", "a\nb", "a\nb\n", "\n\n"] {
            let index = LineIndex::new(source);
            assert_eq!(
                index.line_count(),
                source.lines().count(),
                "source {:?}",
                source
            );
        }
    }

    #[test]
    fn slice_lines_is_inclusive_without_terminator() {
        let source = "one\ntwo\nthree\n";
        let index = LineIndex::new(source);
        assert_eq!(index.slice_lines(source, 1, 1), "one");
        assert_eq!(index.slice_lines(source, 2, 3), "two\nthree");
        assert_eq!(index.slice_lines(source, 1, 3), "one\ntwo\nthree");
    }

    #[test]
    fn truncation_policies_differ() {
        let text = "abcdefgh";
        assert_eq!(SourceContext::truncate_with_marker(text, 4), "abcd...");
        assert_eq!(SourceContext::truncate_plain(text, 4), "abcd");
        assert_eq!(SourceContext::truncate_with_marker(text, 8), "abcdefgh");
    }
}
