//! Source spans for diagnostics

use serde::{Deserialize, Serialize};

/// A half-open byte range into the original source text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Span {
    /// Byte offset of the first character
    pub start: usize,
    /// Byte offset one past the last character
    pub end: usize,
}

impl Span {
    /// Create a new span
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Smallest span covering both `self` and `other`
    pub fn merge(self, other: Span) -> Span {
        Span {
            start: self.start.min(other.start),
            end: self.end.max(other.end),
        }
    }

    /// Resolve this span to a 1-based (line, column) pair against `source`
    pub fn line_col(&self, source: &str) -> (usize, usize) {
        let mut line = 1;
        let mut column = 1;
        for (offset, ch) in source.char_indices() {
            if offset >= self.start {
                break;
            }
            if ch == '\n' {
                line += 1;
                column = 1;
            } else {
                column += 1;
            }
        }
        (line, column)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_merge() {
        let a = Span::new(2, 5);
        let b = Span::new(4, 9);
        assert_eq!(a.merge(b), Span::new(2, 9));
    }

    #[test]
    fn test_line_col() {
        let source = "print 1;\nprint 2;\n";
        assert_eq!(Span::new(0, 5).line_col(source), (1, 1));
        assert_eq!(Span::new(6, 7).line_col(source), (1, 7));
        assert_eq!(Span::new(9, 14).line_col(source), (2, 1));
        assert_eq!(Span::new(15, 16).line_col(source), (2, 7));
    }
}
