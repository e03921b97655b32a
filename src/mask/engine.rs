//! The bundled mask engine.

use super::history::{EditOp, History};
use super::pattern::{FormatCharacters, Pattern, PatternError};
use super::selection::Selection;
use super::MaskEngine;

/// Default character for editable slots without input.
pub const DEFAULT_PLACEHOLDER_CHAR: char = '_';

/// A mask engine holding a formatted value, a selection and edit history.
///
/// # Examples
///
/// ```rust
/// use masked_input::mask::{InputMask, MaskEngine, Selection};
///
/// let mut mask = InputMask::new("(111) 111-1111", "", '_').unwrap();
/// assert_eq!(mask.value(), "(___) ___-____");
///
/// for ch in "555".chars() {
///     assert!(mask.input(ch));
/// }
/// assert_eq!(mask.value(), "(555) ___-____");
/// assert_eq!(mask.selection(), Selection::caret(6));
/// ```
#[derive(Debug, Clone)]
pub struct InputMask {
    pattern: Pattern,
    value: Vec<char>,
    selection: Selection,
    empty_value: String,
    pub(super) history: History,
}

impl InputMask {
    /// Builds an engine for `pattern`, formatting `value` into it.
    pub fn new(pattern: &str, value: &str, placeholder_char: char) -> Result<Self, PatternError> {
        Self::with_format_characters(pattern, value, placeholder_char, &FormatCharacters::default())
    }

    /// Like [`InputMask::new`] but with a custom set of format characters.
    pub fn with_format_characters(
        pattern: &str,
        value: &str,
        placeholder_char: char,
        formats: &FormatCharacters,
    ) -> Result<Self, PatternError> {
        let pattern = Pattern::parse_with(pattern, placeholder_char, formats)?;
        let empty_value: String = pattern.format_value(&[]).into_iter().collect();
        let raw: Vec<char> = value.chars().collect();
        let value = pattern.format_value(&raw);

        Ok(Self {
            pattern,
            value,
            selection: Selection::caret(0),
            empty_value,
            history: History::default(),
        })
    }

    /// The parsed pattern.
    pub fn pattern(&self) -> &Pattern {
        &self.pattern
    }

    /// Returns true if `ch` matches a literal somewhere in the run of literals
    /// directly behind the caret. Pasted text may repeat those literals.
    fn repeats_skipped_literal(&self, ch: char) -> bool {
        let mut index = self.selection.start;
        while index > 0 && !self.pattern.is_editable_index(index - 1) {
            index -= 1;
            if self.pattern.literal_at(index) == Some(ch) {
                return true;
            }
        }
        false
    }
}

impl MaskEngine for InputMask {
    fn value(&self) -> String {
        self.value.iter().collect()
    }

    fn empty_value(&self) -> &str {
        &self.empty_value
    }

    fn selection(&self) -> Selection {
        self.selection
    }

    fn set_selection(&mut self, selection: Selection) {
        let len = self.pattern.len();
        let selection = selection.normalized();
        self.selection = Selection::new(selection.start.min(len), selection.end.min(len));
    }

    fn input(&mut self, ch: char) -> bool {
        let len = self.pattern.len();
        if self.selection.is_collapsed() && self.selection.start == len {
            return false;
        }

        let selection_before = self.selection;
        let value_before = self.value.clone();

        // Input landing on a literal goes to the next editable slot.
        let mut input_index = self.selection.start.max(self.pattern.first_editable_index());
        while input_index < len && !self.pattern.is_editable_index(input_index) {
            input_index += 1;
        }
        if input_index == len || !self.pattern.is_valid_at_index(ch, input_index) {
            return false;
        }
        self.value[input_index] = self.pattern.transform(ch, input_index);

        // The rest of a replaced range is blanked.
        for index in (input_index + 1)..self.selection.end {
            if self.pattern.is_editable_index(index) {
                self.value[index] = self.pattern.placeholder_char();
            }
        }

        let mut caret = input_index + 1;
        while caret < len && !self.pattern.is_editable_index(caret) {
            caret += 1;
        }
        self.selection = Selection::caret(caret);

        self.history
            .record(EditOp::Input, &value_before, selection_before, self.selection);
        true
    }

    fn backspace(&mut self) -> bool {
        if self.selection.start == 0 && self.selection.end == 0 {
            return false;
        }

        let selection_before = self.selection;
        let value_before = self.value.clone();

        if self.selection.is_collapsed() {
            let index = self.selection.start - 1;
            if self.pattern.is_editable_index(index) {
                self.value[index] = self.pattern.placeholder_char();
            }
            self.selection = Selection::caret(index);
        } else {
            for index in self.selection.start..self.selection.end {
                if self.pattern.is_editable_index(index) {
                    self.value[index] = self.pattern.placeholder_char();
                }
            }
            self.selection = Selection::caret(self.selection.start);
        }

        self.history
            .record(EditOp::Backspace, &value_before, selection_before, self.selection);
        true
    }

    fn paste(&mut self, text: &str) -> bool {
        let value_before = self.value.clone();
        let selection_before = self.selection;
        let history_before = self.history.clone();

        let chars: Vec<char> = text.chars().collect();
        let mut offset = 0;

        // Leading literals of the pattern may be part of the pasted text.
        let first_editable = self.pattern.first_editable_index();
        if self.selection.start < first_editable {
            let mut index = self.selection.start;
            while index < first_editable
                && chars.get(offset).copied() == self.pattern.literal_at(index)
            {
                offset += 1;
                index += 1;
            }
            self.selection = Selection::new(first_editable, self.selection.end.max(first_editable));
        }

        for &ch in &chars[offset..] {
            if self.selection.start > self.pattern.last_editable_index() {
                break;
            }
            if !self.input(ch) && !self.repeats_skipped_literal(ch) {
                tracing::trace!(rejected = ?ch, "paste rolled back");
                self.value = value_before;
                self.selection = selection_before;
                self.history = history_before;
                return false;
            }
        }

        true
    }

    fn undo(&mut self) -> bool {
        match self.history.undo(&self.value, self.selection) {
            Some((value, selection)) => {
                self.value = value;
                self.selection = selection;
                true
            }
            None => false,
        }
    }

    fn redo(&mut self) -> bool {
        match self.history.redo() {
            Some((value, selection)) => {
                self.value = value;
                self.selection = selection;
                true
            }
            None => false,
        }
    }
}
