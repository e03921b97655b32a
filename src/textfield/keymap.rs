//! Key bindings for the text field.

use crate::key::{new_binding, with_keys_str, Binding};

/// The keys that run each of the text field's editing actions.
///
/// Fields are public so hosts can remap or disable individual actions.
#[derive(Debug, Clone)]
pub struct KeyMap {
    /// Move the caret one character right.
    pub character_forward: Binding,
    /// Move the caret one character left.
    pub character_backward: Binding,
    /// Extend the selection one character right.
    pub select_forward: Binding,
    /// Extend the selection one character left.
    pub select_backward: Binding,
    /// Move to the start of the line.
    pub line_start: Binding,
    /// Move to the end of the line.
    pub line_end: Binding,
    /// Extend the selection to the start of the line.
    pub select_to_line_start: Binding,
    /// Extend the selection to the end of the line.
    pub select_to_line_end: Binding,
    /// Delete the selection or the previous character.
    pub delete_character_backward: Binding,
    /// Delete the selection or the next character.
    pub delete_character_forward: Binding,
    /// Select all text.
    pub select_all: Binding,
    /// Cut the selection.
    pub cut: Binding,
}

/// The default key bindings.
pub fn default_key_map() -> KeyMap {
    KeyMap {
        character_forward: new_binding(vec![with_keys_str(&["right", "ctrl+f"])]),
        character_backward: new_binding(vec![with_keys_str(&["left", "ctrl+b"])]),
        select_forward: new_binding(vec![with_keys_str(&["shift+right"])]),
        select_backward: new_binding(vec![with_keys_str(&["shift+left"])]),
        line_start: new_binding(vec![with_keys_str(&["home"])]),
        line_end: new_binding(vec![with_keys_str(&["end", "ctrl+e"])]),
        select_to_line_start: new_binding(vec![with_keys_str(&["shift+home"])]),
        select_to_line_end: new_binding(vec![with_keys_str(&["shift+end"])]),
        delete_character_backward: new_binding(vec![with_keys_str(&[
            "backspace",
            "shift+backspace",
            "ctrl+h",
        ])]),
        delete_character_forward: new_binding(vec![with_keys_str(&["delete", "ctrl+d"])]),
        select_all: new_binding(vec![with_keys_str(&["ctrl+a", "super+a"])]),
        cut: new_binding(vec![with_keys_str(&["ctrl+x", "super+x"])]),
    }
}

impl Default for KeyMap {
    fn default() -> Self {
        default_key_map()
    }
}
