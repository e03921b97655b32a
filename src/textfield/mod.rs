//! Single-line text field for terminal applications.
//!
//! [`TextField`] is an in-memory [`InputElement`](crate::maskedinput::InputElement):
//! it holds text and a selection, runs the usual editing keys as its default
//! actions, and renders itself with Lip Gloss styles. Bind a mask to it with
//! [`MaskedInput`](crate::maskedinput::MaskedInput).
//!
//! # Basic Usage
//!
//! ```rust
//! use masked_input::textfield::TextField;
//! use masked_input::Component;
//!
//! let mut field = TextField::new().with_prompt("Phone: ");
//! field.focus();
//! field.set_value("hello");
//! assert_eq!(field.position(), 5);
//! ```

pub mod keymap;
pub mod methods;
pub mod model;
pub mod view;


pub use keymap::{default_key_map, KeyMap};
pub use model::{new, TextField};
