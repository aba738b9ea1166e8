//! Byte offset to line/column conversion.
//!
//! The lexer hands out byte offsets; diagnostics report line/column. A
//! `LineIndex` is built once per source unit and shared read-only.

use text_size::TextSize;

use super::Position;

/// Precomputed newline table for a source unit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineIndex {
    /// Byte offset of the start of each line. Always begins with 0.
    line_starts: Vec<TextSize>,
}

impl LineIndex {
    pub fn new(text: &str) -> Self {
        let mut line_starts = vec![TextSize::new(0)];
        for (i, byte) in text.bytes().enumerate() {
            if byte == b'\n' {
                line_starts.push(TextSize::new(i as u32 + 1));
            }
        }
        Self { line_starts }
    }

    /// Convert a byte offset into a 1-based line / 0-based column position.
    ///
    /// Offsets past the end of the text clamp to the last line.
    pub fn position(&self, offset: TextSize) -> Position {
        let line = self
            .line_starts
            .partition_point(|&start| start <= offset)
            .saturating_sub(1);
        let column = u32::from(offset) - u32::from(self.line_starts[line]);
        Position::new(line as u32 + 1, column)
    }

    pub fn line_count(&self) -> usize {
        self.line_starts.len()
    }
}
