//! Byte offset to line/column conversion for tokens
//!
//! Tokens report positions the way grammar-driven parsers traditionally do: the line is
//! 1-based, the column is 0-based and counts characters, not bytes.

/// Line start table for a source string
pub struct SourceLocation<'a> {
    source: &'a str,
    /// Byte offsets where each line starts
    line_starts: Vec<usize>,
}

impl<'a> SourceLocation<'a> {
    pub fn new(source: &'a str) -> Self {
        let mut line_starts = vec![0];

        for (byte_pos, ch) in source.char_indices() {
            if ch == '\n' {
                line_starts.push(byte_pos + 1);
            }
        }

        Self {
            source,
            line_starts,
        }
    }

    /// Convert a byte offset to a (1-based line, 0-based character column) pair
    ///
    /// Offsets past the end clamp to the end of the source. An offset that falls inside a
    /// multi-byte character counts that character as already passed.
    pub fn line_column(&self, byte_offset: usize) -> (usize, usize) {
        let byte_offset = byte_offset.min(self.source.len());
        let line = self
            .line_starts
            .binary_search(&byte_offset)
            .unwrap_or_else(|i| i - 1);

        let line_start = self.line_starts[line];
        let column = self.source.as_bytes()[line_start..byte_offset]
            .iter()
            .filter(|byte| (**byte & 0xC0) != 0x80)
            .count();

        (line + 1, column)
    }

    /// Get the total number of lines in the source
    pub fn line_count(&self) -> usize {
        self.line_starts.len()
    }
}
