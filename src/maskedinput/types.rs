//! Events and messages handled by the masked input.

use bubbletea_rs::{KeyMsg, Msg};
use crossterm::event::{KeyCode, KeyModifiers};

use crate::key;

/// MIME type read from clipboard data first.
pub const TEXT_PLAIN: &str = "text/plain";
/// Format name understood by legacy clipboard sources.
pub const LEGACY_TEXT: &str = "Text";

/// The event types an adapter listens for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    /// The element's raw text was changed by the host (cut, delete).
    Change,
    /// A key went down.
    KeyDown,
    /// A key produced a character.
    KeyPress,
    /// Text is being pasted.
    Paste,
}

impl EventKind {
    /// All kinds, in registration order.
    pub const ALL: [EventKind; 4] = [
        EventKind::Change,
        EventKind::KeyDown,
        EventKind::KeyPress,
        EventKind::Paste,
    ];

    /// The DOM-style event name.
    pub fn name(&self) -> &'static str {
        match self {
            EventKind::Change => "change",
            EventKind::KeyDown => "keydown",
            EventKind::KeyPress => "keypress",
            EventKind::Paste => "paste",
        }
    }
}

impl std::fmt::Display for EventKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// A key-down or key-press event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyboardEvent {
    /// The key.
    pub code: KeyCode,
    /// Modifier flags held while the key was pressed.
    pub modifiers: KeyModifiers,
    default_prevented: bool,
}

impl KeyboardEvent {
    /// Creates an event for `code` with `modifiers`.
    pub fn new(code: KeyCode, modifiers: KeyModifiers) -> Self {
        Self {
            code,
            modifiers,
            default_prevented: false,
        }
    }

    /// Stops the host from running its default action.
    pub fn prevent_default(&mut self) {
        self.default_prevented = true;
    }

    /// Whether a handler called [`KeyboardEvent::prevent_default`].
    pub fn default_prevented(&self) -> bool {
        self.default_prevented
    }

    /// The numeric key code, see [`key::key_code`].
    pub fn which(&self) -> Option<u32> {
        key::key_code(&self.code)
    }

    /// True when this key is one of `binding`'s keys.
    pub fn matches(&self, binding: &key::Binding) -> bool {
        binding.matches(&self.code, self.modifiers)
    }

    /// The typed character, if the key produces one.
    pub fn character(&self) -> Option<char> {
        match self.code {
            KeyCode::Char(ch) => Some(ch),
            _ => None,
        }
    }
}

impl From<&KeyMsg> for KeyboardEvent {
    fn from(msg: &KeyMsg) -> Self {
        Self::new(msg.key, msg.modifiers)
    }
}

/// Data carried by a paste event, keyed by format.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClipboardData {
    items: Vec<(String, String)>,
}

impl ClipboardData {
    /// Clipboard data holding only `text/plain`.
    pub fn plain_text(text: impl Into<String>) -> Self {
        let mut data = Self::default();
        data.set_data(TEXT_PLAIN, text);
        data
    }

    /// Stores `data` under `format`, replacing any previous value.
    pub fn set_data(&mut self, format: &str, data: impl Into<String>) {
        let data = data.into();
        match self.items.iter_mut().find(|(f, _)| f.as_str() == format) {
            Some(item) => item.1 = data,
            None => self.items.push((format.to_string(), data)),
        }
    }

    /// Returns the data stored under `format`.
    pub fn get_data(&self, format: &str) -> Option<&str> {
        self.items
            .iter()
            .find(|(f, _)| f.as_str() == format)
            .map(|(_, data)| data.as_str())
    }
}

/// A paste event.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClipboardEvent {
    /// Clipboard contents attached to the event, when the host provides them.
    pub clipboard_data: Option<ClipboardData>,
    default_prevented: bool,
}

impl ClipboardEvent {
    /// A paste event carrying `data`.
    pub fn new(clipboard_data: Option<ClipboardData>) -> Self {
        Self {
            clipboard_data,
            default_prevented: false,
        }
    }

    /// A paste event carrying plain text.
    pub fn with_text(text: impl Into<String>) -> Self {
        Self::new(Some(ClipboardData::plain_text(text)))
    }

    /// Stops the host from inserting the pasted text itself.
    pub fn prevent_default(&mut self) {
        self.default_prevented = true;
    }

    /// Whether a handler called [`ClipboardEvent::prevent_default`].
    pub fn default_prevented(&self) -> bool {
        self.default_prevented
    }
}

/// Any event an adapter can be handed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputEvent {
    /// See [`EventKind::Change`].
    Change,
    /// See [`EventKind::KeyDown`].
    KeyDown(KeyboardEvent),
    /// See [`EventKind::KeyPress`].
    KeyPress(KeyboardEvent),
    /// See [`EventKind::Paste`].
    Paste(ClipboardEvent),
}

impl InputEvent {
    /// The kind used for listener lookup.
    pub fn kind(&self) -> EventKind {
        match self {
            InputEvent::Change => EventKind::Change,
            InputEvent::KeyDown(_) => EventKind::KeyDown,
            InputEvent::KeyPress(_) => EventKind::KeyPress,
            InputEvent::Paste(_) => EventKind::Paste,
        }
    }

    /// Whether a handler suppressed the default action.
    pub fn default_prevented(&self) -> bool {
        match self {
            InputEvent::Change => false,
            InputEvent::KeyDown(event) | InputEvent::KeyPress(event) => event.default_prevented(),
            InputEvent::Paste(event) => event.default_prevented(),
        }
    }
}

/// Clipboard paste message carrying raw text.
#[derive(Debug, Clone)]
pub struct PasteMsg(pub String);

/// Clipboard paste error message.
#[derive(Debug, Clone)]
pub struct PasteErrMsg(pub String);

/// Asks the adapter with `id` to copy its mask selection onto the element.
///
/// Returned, wrapped in a command, after a paste so the host finishes its own
/// selection update first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelectionSyncMsg {
    /// Target adapter.
    pub id: usize,
}

impl From<PasteMsg> for Msg {
    fn from(msg: PasteMsg) -> Self {
        Box::new(msg) as Msg
    }
}

impl From<PasteErrMsg> for Msg {
    fn from(msg: PasteErrMsg) -> Self {
        Box::new(msg) as Msg
    }
}

impl From<SelectionSyncMsg> for Msg {
    fn from(msg: SelectionSyncMsg) -> Self {
        Box::new(msg) as Msg
    }
}

impl From<InputEvent> for Msg {
    fn from(event: InputEvent) -> Self {
        Box::new(event) as Msg
    }
}
