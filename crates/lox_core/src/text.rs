//! Text span and line types for source location tracking.
//!
//! Tokens and diagnostics carry these so that later stages can point back
//! into the source buffer they came from.

use serde::Serialize;
use std::fmt;

/// A position in source text, measured as a byte offset from the start.
pub type TextPos = u32;

/// A 1-based source line number.
pub type LineNumber = u32;

/// Convert a byte offset or count to a [`TextPos`].
///
/// Positions are 32-bit. Offsets past 4 GiB saturate at `TextPos::MAX`, so
/// spans in very large buffers stay ordered but stop being exact.
#[inline]
pub fn to_text_pos(offset: usize) -> TextPos {
    TextPos::try_from(offset).unwrap_or(TextPos::MAX)
}

/// A span in source text, defined by a start position and a length.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Default, Serialize)]
pub struct TextSpan {
    /// The byte offset where this span starts.
    pub start: TextPos,
    /// The length of this span in bytes.
    pub length: TextPos,
}

impl TextSpan {
    /// Create a new text span.
    #[inline]
    pub fn new(start: TextPos, length: TextPos) -> Self {
        Self { start, length }
    }

    /// Create a span from start and end positions.
    #[inline]
    pub fn from_bounds(start: TextPos, end: TextPos) -> Self {
        debug_assert!(end >= start);
        Self {
            start,
            length: end - start,
        }
    }

    /// Create an empty span at a position.
    #[inline]
    pub fn empty(pos: TextPos) -> Self {
        Self {
            start: pos,
            length: 0,
        }
    }

    /// The end position of this span (exclusive).
    #[inline]
    pub fn end(&self) -> TextPos {
        self.start + self.length
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.length == 0
    }
}

impl fmt::Debug for TextSpan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.start, self.end())
    }
}

impl fmt::Display for TextSpan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {})", self.start, self.end())
    }
}

/// A map from byte offsets to line and column numbers, built from source text.
///
/// Lines and columns are both 1-based, matching how the scanner counts lines.
/// Columns are measured in bytes.
#[derive(Debug, Clone)]
pub struct LineMap {
    /// Byte offsets of the start of each line.
    line_starts: Vec<TextPos>,
}

impl LineMap {
    /// Build a line map from source bytes.
    pub fn new(source: &[u8]) -> Self {
        let mut line_starts = vec![0];
        line_starts.extend(memchr::memchr_iter(b'\n', source).map(|i| to_text_pos(i + 1)));
        Self { line_starts }
    }

    /// Index into `line_starts` of the line containing `pos`.
    fn line_index(&self, pos: TextPos) -> usize {
        match self.line_starts.binary_search(&pos) {
            Ok(index) => index,
            // line_starts[0] is 0, so any miss lands after it.
            Err(index) => index - 1,
        }
    }

    /// Get the line number for a byte offset.
    pub fn line_of(&self, pos: TextPos) -> LineNumber {
        to_text_pos(self.line_index(pos)).saturating_add(1)
    }

    /// Get the column for a byte offset.
    pub fn column_of(&self, pos: TextPos) -> u32 {
        let start = self.line_starts[self.line_index(pos)];
        (pos - start).saturating_add(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_span() {
        let span = TextSpan::new(5, 10);
        assert_eq!(span.start, 5);
        assert_eq!(span.length, 10);
        assert_eq!(span.end(), 15);
        assert!(!span.is_empty());
    }

    #[test]
    fn test_text_span_formatting() {
        let a = TextSpan::from_bounds(2, 4);
        assert!(TextSpan::empty(3).is_empty());
        assert_eq!(format!("{}", a), "[2, 4)");
        assert_eq!(format!("{:?}", a), "2..4");
    }

    #[test]
    fn test_to_text_pos() {
        assert_eq!(to_text_pos(0), 0);
        assert_eq!(to_text_pos(4096), 4096);
        assert_eq!(to_text_pos(TextPos::MAX as usize), TextPos::MAX);
    }

    #[cfg(target_pointer_width = "64")]
    #[test]
    fn test_to_text_pos_saturates_past_4gib() {
        assert_eq!(to_text_pos(TextPos::MAX as usize + 1), TextPos::MAX);
        assert_eq!(to_text_pos(usize::MAX), TextPos::MAX);
    }

    #[test]
    fn test_line_map() {
        let map = LineMap::new(b"line1\nline2\nline3");
        assert_eq!(map.line_of(0), 1);
        assert_eq!(map.line_of(5), 1); // newline byte
        assert_eq!(map.line_of(6), 2);
        assert_eq!(map.line_of(12), 3);
        assert_eq!(map.column_of(0), 1);
        assert_eq!(map.column_of(8), 3);
    }

    #[test]
    fn test_line_map_empty_source() {
        let map = LineMap::new(b"");
        assert_eq!(map.line_of(0), 1);
        assert_eq!(map.column_of(0), 1);
    }
}
