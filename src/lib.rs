#![warn(missing_docs)]
#![doc(html_root_url = "https://docs.rs/masked-input/")]

//! # masked-input
//!
//! Input masks for single-line text inputs. A mask pattern such as
//! `(111) 111-1111` fixes the literal characters of a value and constrains
//! what may be typed into each editable slot.
//!
//! ## Overview
//!
//! The crate is split into three layers:
//!
//! - [`mask`]: the [`MaskEngine`](mask::MaskEngine) trait and the bundled
//!   [`InputMask`](mask::InputMask) engine, which own pattern parsing,
//!   validation, selection-aware editing and undo/redo history.
//! - [`maskedinput`]: the [`MaskedInput`](maskedinput::MaskedInput) adapter,
//!   which turns key-down, key-press, paste and change events on an
//!   [`InputElement`](maskedinput::InputElement) into engine calls and writes
//!   the result back.
//! - [`textfield`]: a [`TextField`](textfield::TextField) element for
//!   bubbletea-rs terminal applications.
//!
//! ## Quick Start
//!
//! ```rust
//! use masked_input::prelude::*;
//! use bubbletea_rs::KeyMsg;
//! use crossterm::event::{KeyCode, KeyModifiers};
//!
//! let mut field = TextField::new().with_prompt("Phone: ");
//! field.focus();
//!
//! let mut input = MaskedInput::new(field, "(111) 111-1111").unwrap();
//! for ch in "5551234".chars() {
//!     input.update(Box::new(KeyMsg { key: KeyCode::Char(ch), modifiers: KeyModifiers::NONE }));
//! }
//! assert_eq!(input.element().value(), "(555) 123-4___");
//! ```
//!
//! ## Integration with bubbletea-rs
//!
//! Forward messages to [`MaskedInput::update`](maskedinput::MaskedInput::update)
//! and return the command it hands back; a paste produces a follow-up
//! command that re-syncs the caret once the runtime delivers it.
//!
//! ```rust
//! use masked_input::prelude::*;
//! use bubbletea_rs::{Cmd, Msg};
//!
//! struct App {
//!     phone: MaskedInput<TextField>,
//! }
//!
//! impl App {
//!     fn update(&mut self, msg: Msg) -> Option<Cmd> {
//!         self.phone.update(msg)
//!     }
//!
//!     fn view(&self) -> String {
//!         self.phone.element().view()
//!     }
//! }
//! ```

pub mod key;
pub mod mask;
pub mod maskedinput;
pub mod textfield;

use bubbletea_rs::Cmd;

/// Core trait for components that support focus management.
///
/// - `focus()` sets the focused state and may return a command for
///   initialization.
/// - `blur()` unsets the focused state.
/// - `focused()` reports the current state.
///
/// ```rust
/// use masked_input::prelude::*;
///
/// fn toggle<T: Component>(component: &mut T) {
///     if component.focused() {
///         component.blur();
///     } else {
///         let _ = component.focus();
///     }
/// }
///
/// let mut field = TextField::new();
/// toggle(&mut field);
/// assert!(Component::focused(&field));
/// ```
pub trait Component {
    /// Sets the component to focused state.
    fn focus(&mut self) -> Option<Cmd>;

    /// Sets the component to blurred (unfocused) state.
    fn blur(&mut self);

    /// Returns the current focus state of the component.
    fn focused(&self) -> bool;
}

impl<E, M> Component for maskedinput::MaskedInput<E, M>
where
    E: maskedinput::InputElement + Component,
    M: mask::MaskEngine,
{
    fn focus(&mut self) -> Option<Cmd> {
        self.element_mut().focus()
    }

    fn blur(&mut self) {
        self.element_mut().blur()
    }

    fn focused(&self) -> bool {
        self.element().focused()
    }
}

pub use mask::{InputMask, MaskEngine, PatternError, Selection};
pub use maskedinput::{
    InputElement, InputEvent, MaskOptions, MaskedInput, PasteErrMsg, PasteMsg, SelectionSyncMsg,
};
pub use textfield::TextField;

/// Prelude module for convenient imports.
///
/// ```rust
/// use masked_input::prelude::*;
///
/// let input = MaskedInput::new(TextField::new(), "11/11").unwrap();
/// assert_eq!(input.mask().empty_value(), "__/__");
/// ```
pub mod prelude {
    pub use crate::key::{is_redo, is_undo};
    pub use crate::mask::{InputMask, MaskEngine, PatternError, Selection};
    pub use crate::maskedinput::{
        ClipboardEvent, EventKind, InputElement, InputEvent, KeyboardEvent, MaskOptions,
        MaskedInput, PasteErrMsg, PasteMsg, SelectionSyncMsg,
    };
    pub use crate::textfield::TextField;
    pub use crate::Component;
}
