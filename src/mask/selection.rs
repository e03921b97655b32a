//! Selection ranges shared by the mask engine and bound elements.

use serde::{Deserialize, Serialize};

/// A `(start, end)` pair of character offsets.
///
/// A collapsed selection (`start == end`) is a plain caret. Offsets count
/// `char`s, not bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Selection {
    /// Offset of the first selected character, or the caret position.
    pub start: usize,
    /// Offset one past the last selected character.
    pub end: usize,
}

impl Selection {
    /// Creates a selection spanning `start..end`.
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Creates a collapsed selection at `pos`.
    pub fn caret(pos: usize) -> Self {
        Self {
            start: pos,
            end: pos,
        }
    }

    /// Returns true when nothing is selected.
    pub fn is_collapsed(&self) -> bool {
        self.start == self.end
    }

    /// Number of characters covered.
    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    /// Same as [`Selection::is_collapsed`].
    pub fn is_empty(&self) -> bool {
        self.is_collapsed()
    }

    /// Returns the range with `start <= end`.
    pub fn normalized(self) -> Self {
        if self.start <= self.end {
            self
        } else {
            Self {
                start: self.end,
                end: self.start,
            }
        }
    }
}

impl From<usize> for Selection {
    fn from(pos: usize) -> Self {
        Self::caret(pos)
    }
}

impl From<(usize, usize)> for Selection {
    fn from((start, end): (usize, usize)) -> Self {
        Self::new(start, end)
    }
}
