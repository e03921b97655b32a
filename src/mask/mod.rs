//! Mask engines.
//!
//! The masked input adapter talks to its engine only through the
//! [`MaskEngine`] trait. [`InputMask`] is the engine used by default; any
//! other type implementing the trait can be plugged in with
//! [`MaskedInput::with_engine`](crate::maskedinput::MaskedInput::with_engine).
//!
//! # Basic Usage
//!
//! ```rust
//! use masked_input::mask::{InputMask, MaskEngine, Selection};
//!
//! let mut mask = InputMask::new("1111 1111", "", '_').unwrap();
//! mask.set_selection(Selection::caret(0));
//! assert!(mask.paste("1234"));
//! assert_eq!(mask.value(), "1234 ____");
//!
//! assert!(mask.undo());
//! assert_eq!(mask.value(), mask.empty_value());
//! ```

pub mod engine;
mod history;
pub mod pattern;
pub mod selection;


pub use engine::{InputMask, DEFAULT_PLACEHOLDER_CHAR};
pub use pattern::{FormatCharacter, FormatCharacters, Pattern, PatternError};
pub use selection::Selection;

/// The operations a masked input needs from its engine.
///
/// Every mutating call works on the engine's current selection and reports
/// whether anything changed.
pub trait MaskEngine {
    /// The current formatted value, placeholders included.
    fn value(&self) -> String;

    /// The formatted value when no editable slot holds input.
    fn empty_value(&self) -> &str;

    /// The current selection.
    fn selection(&self) -> Selection;

    /// Replaces the selection the next edit applies to.
    fn set_selection(&mut self, selection: Selection);

    /// Applies one typed character at the selection.
    fn input(&mut self, ch: char) -> bool;

    /// Deletes the selection, or the character before a caret.
    fn backspace(&mut self) -> bool;

    /// Applies multi-character text at the selection.
    fn paste(&mut self, text: &str) -> bool;

    /// Steps back through the edit history.
    fn undo(&mut self) -> bool;

    /// Steps forward again after [`MaskEngine::undo`].
    fn redo(&mut self) -> bool;
}
