//! Configuration for masked inputs.

use serde::{Deserialize, Serialize};

use crate::mask::DEFAULT_PLACEHOLDER_CHAR;

fn default_placeholder_char() -> char {
    DEFAULT_PLACEHOLDER_CHAR
}

fn default_defer_paste_selection() -> bool {
    true
}

/// Options for building a [`MaskedInput`](super::MaskedInput).
///
/// Options deserialize from any serde format, so form definitions can carry
/// their masks:
///
/// ```rust
/// use masked_input::maskedinput::MaskOptions;
///
/// let options: MaskOptions = serde_json::from_str(r#"{"pattern": "11/11/1111"}"#).unwrap();
/// assert_eq!(options.placeholder_char, '_');
/// assert!(options.defer_paste_selection);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MaskOptions {
    /// The mask pattern, e.g. `(111) 111-1111`.
    pub pattern: String,

    /// Fills editable slots that have no input yet.
    #[serde(default = "default_placeholder_char")]
    pub placeholder_char: char,

    /// Sync the selection after a paste from a follow-up command instead of
    /// immediately. Hosts that update their own selection after the paste
    /// handler returns need this; turning it off changes when the caret moves.
    #[serde(default = "default_defer_paste_selection")]
    pub defer_paste_selection: bool,
}

impl MaskOptions {
    /// Options for `pattern` with default settings.
    pub fn new(pattern: impl Into<String>) -> Self {
        Self {
            pattern: pattern.into(),
            placeholder_char: DEFAULT_PLACEHOLDER_CHAR,
            defer_paste_selection: true,
        }
    }

    /// Sets the placeholder character.
    pub fn with_placeholder_char(mut self, placeholder_char: char) -> Self {
        self.placeholder_char = placeholder_char;
        self
    }

    /// Sets whether the post-paste selection sync is deferred.
    pub fn with_defer_paste_selection(mut self, defer: bool) -> Self {
        self.defer_paste_selection = defer;
        self
    }
}
