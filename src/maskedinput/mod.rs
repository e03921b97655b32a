//! Masked input adapter.
//!
//! [`MaskedInput`] binds a [`MaskEngine`](crate::mask::MaskEngine) to one
//! [`InputElement`] and keeps the two in step. Keyboard, paste and change
//! events reach it either as [`InputEvent`]s passed to
//! [`MaskedInput::dispatch`], or as bubbletea-rs messages passed to
//! [`MaskedInput::update`].
//!
//! # Basic Usage
//!
//! ```rust
//! use masked_input::maskedinput::{ClipboardEvent, InputEvent, MaskedInput};
//! use masked_input::textfield::TextField;
//!
//! let field = TextField::new().with_value("5551234567");
//! let mut input = MaskedInput::new(field, "(111) 111-1111").unwrap();
//! assert_eq!(input.element().value(), "(555) 123-4567");
//!
//! // Pasting is handled by the mask; the returned command re-syncs the caret
//! input.element_mut().select(1, 4);
//! let mut paste = InputEvent::Paste(ClipboardEvent::with_text("999"));
//! let _sync = input.dispatch(&mut paste);
//! assert_eq!(input.element().value(), "(999) 123-4567");
//! ```
//!
//! # Events
//!
//! | Event | Handled | Default action |
//! |-------|---------|----------------|
//! | key-down | ctrl/cmd+Z, ctrl/cmd+Y, Backspace | prevented when handled |
//! | key-press | printable characters without ctrl/alt/meta | prevented |
//! | paste | always | prevented |
//! | change | text shortened by the host | n/a |
//!
//! # Teardown
//!
//! Listeners are registered on the element when the adapter is built and
//! removed by [`MaskedInput::detach`] or when the adapter is dropped.

pub mod clipboard;
pub mod element;
pub mod methods;
pub mod model;
pub mod options;
pub mod types;

#[cfg(test)]
mod tests;

pub use clipboard::{paste, paste_text, ClipboardSource};
#[cfg(feature = "clipboard-support")]
pub use clipboard::SystemClipboard;
pub use element::{InputElement, ListenerId, Listeners, NativeSelection};
pub use model::MaskedInput;
pub use options::MaskOptions;
pub use types::{
    ClipboardData, ClipboardEvent, EventKind, InputEvent, KeyboardEvent, PasteErrMsg, PasteMsg,
    SelectionSyncMsg,
};
