//! Core model for the text field.

use lipgloss_extras::prelude::*;

use super::keymap::{default_key_map, KeyMap};
use crate::mask::Selection;
use crate::maskedinput::{
    EventKind, InputElement, KeyboardEvent, ListenerId, Listeners, NativeSelection,
};

/// A single-line text field with a selection.
#[derive(Debug, Clone)]
pub struct TextField {
    /// Prompt displayed before the text.
    pub prompt: String,
    /// Style for the prompt prefix.
    pub prompt_style: Style,
    /// Style of the text.
    pub text_style: Style,
    /// Text displayed while the field is empty.
    pub placeholder: String,
    /// Style for the placeholder text.
    pub placeholder_style: Style,
    /// Style of the character under a caret.
    pub cursor_style: Style,
    /// Style of selected text.
    pub selection_style: Style,
    /// Minimum rendered width of the text area. 0 means no padding.
    pub width: usize,
    /// Keys for the editing actions.
    pub key_map: KeyMap,

    pub(super) value: Vec<char>,
    pub(super) selection: Selection,
    // Set when the selection was extended leftwards, so shift+arrows move the
    // right end of the selection.
    pub(super) backward: bool,
    pub(super) focus: bool,
    pub(super) native_selection: bool,
    pub(super) listeners: Listeners,
    pub(super) last_cut: Option<String>,
}

/// Creates an empty, unfocused text field.
pub fn new() -> TextField {
    TextField {
        prompt: "> ".to_string(),
        prompt_style: Style::new(),
        text_style: Style::new(),
        placeholder: String::new(),
        placeholder_style: Style::new().foreground(Color::from("240")),
        cursor_style: Style::new().reverse(true),
        selection_style: Style::new().reverse(true),
        width: 0,
        key_map: default_key_map(),
        value: Vec::new(),
        selection: Selection::caret(0),
        backward: false,
        focus: false,
        native_selection: true,
        listeners: Listeners::new(),
        last_cut: None,
    }
}

impl Default for TextField {
    fn default() -> Self {
        new()
    }
}

impl TextField {
    /// Creates an empty, unfocused text field.
    pub fn new() -> Self {
        new()
    }

    /// Prefills the field, leaving the caret at the end.
    pub fn with_value(mut self, value: &str) -> Self {
        self.set_value(value);
        self
    }

    /// Sets the prompt.
    pub fn with_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.prompt = prompt.into();
        self
    }

    /// Sets the placeholder.
    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    /// Sets the padded width.
    pub fn with_width(mut self, width: usize) -> Self {
        self.width = width;
        self
    }

    /// Turns native selection reporting off, as on hosts that cannot expose
    /// selection offsets. Masks bound to such a field never sync selections.
    pub fn without_native_selection(mut self) -> Self {
        self.native_selection = false;
        self
    }

    /// The current text.
    pub fn value(&self) -> String {
        self.value.iter().collect()
    }

    /// Replaces the text. A changed value moves the caret to the end.
    pub fn set_value(&mut self, value: &str) {
        let runes: Vec<char> = value.chars().collect();
        if runes == self.value {
            return;
        }
        self.value = runes;
        self.set_cursor(self.value.len());
    }

    /// The current selection.
    pub fn selection(&self) -> Selection {
        self.selection
    }

    /// The caret position, i.e. the moving end of the selection.
    pub fn position(&self) -> usize {
        if self.backward {
            self.selection.start
        } else {
            self.selection.end
        }
    }

    /// Selects `start..end`, clamped to the text.
    pub fn select(&mut self, start: usize, end: usize) {
        let len = self.value.len();
        let selection = Selection::new(start.min(len), end.min(len)).normalized();
        self.selection = selection;
        self.backward = false;
    }

    /// Collapses the selection to a caret at `pos`.
    pub fn set_cursor(&mut self, pos: usize) {
        self.selection = Selection::caret(pos.min(self.value.len()));
        self.backward = false;
    }

    /// Text removed by the last cut.
    pub fn last_cut(&self) -> Option<&str> {
        self.last_cut.as_deref()
    }

    /// The listeners registered on this field.
    pub fn listeners(&self) -> &Listeners {
        &self.listeners
    }

    /// Whether the field is focused.
    pub fn focused(&self) -> bool {
        self.focus
    }
}

impl NativeSelection for TextField {
    fn selection_start(&self) -> usize {
        self.selection.start
    }

    fn selection_end(&self) -> usize {
        self.selection.end
    }

    fn set_selection_start(&mut self, start: usize) {
        let start = start.min(self.value.len());
        self.selection.start = start;
        self.selection.end = self.selection.end.max(start);
    }

    fn set_selection_end(&mut self, end: usize) {
        let end = end.min(self.value.len());
        self.selection.end = end;
        self.selection.start = self.selection.start.min(end);
    }
}

impl InputElement for TextField {
    fn value(&self) -> String {
        TextField::value(self)
    }

    fn set_value(&mut self, value: &str) {
        TextField::set_value(self, value)
    }

    fn native_selection(&mut self) -> Option<&mut dyn NativeSelection> {
        if self.native_selection {
            Some(self)
        } else {
            None
        }
    }

    fn add_listener(&mut self, kind: EventKind) -> ListenerId {
        self.listeners.add(kind)
    }

    fn remove_listener(&mut self, id: ListenerId) -> bool {
        self.listeners.remove(id)
    }

    fn has_listener(&self, kind: EventKind) -> bool {
        self.listeners.is_listening(kind)
    }

    fn has_focus(&self) -> bool {
        self.focus
    }

    fn perform_default(&mut self, event: &KeyboardEvent) -> bool {
        self.apply_key(event)
    }
}
