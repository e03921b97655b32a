//! Event handlers for the masked input.

use bubbletea_rs::{Cmd, KeyMsg, Msg};

use super::clipboard::{paste, paste_text};
use super::element::InputElement;
use super::model::MaskedInput;
use super::types::{
    ClipboardEvent, EventKind, InputEvent, KeyboardEvent, PasteErrMsg, PasteMsg, SelectionSyncMsg,
};
use crate::key;
use crate::mask::{MaskEngine, Selection};

impl<E: InputElement, M: MaskEngine> MaskedInput<E, M> {
    /// Routes one event to its handler.
    ///
    /// Events of a kind this adapter is not listening for (for instance after
    /// [`detach`](MaskedInput::detach)) are left untouched. A paste may return
    /// a command that must be handed back to [`update`](MaskedInput::update)
    /// once the host has finished processing the paste.
    pub fn dispatch(&mut self, event: &mut InputEvent) -> Option<Cmd> {
        if !self.is_listening(event.kind()) {
            return None;
        }

        match event {
            InputEvent::Change => {
                self.on_change();
                None
            }
            InputEvent::KeyDown(event) => {
                self.on_key_down(event);
                None
            }
            InputEvent::KeyPress(event) => {
                self.on_key_press(event);
                None
            }
            InputEvent::Paste(event) => self.on_paste(event),
        }
    }

    /// Handles a change to the element's raw text made by the host.
    ///
    /// A shorter text means characters were cut or deleted: the span they
    /// occupied, starting at the element's caret, is deleted from the mask as
    /// well. The element is then rewritten from the mask.
    pub fn on_change(&mut self) {
        let raw = self.element.value();
        let value = self.mask.value();
        if raw == value {
            return;
        }

        let raw_len = raw.chars().count();
        let mask_len = value.chars().count();
        if raw_len < mask_len {
            let size_diff = mask_len - raw_len;
            self.pull_selection();
            let start = self.mask.selection().start;
            self.mask.set_selection(Selection::new(start, start + size_diff));
            tracing::debug!(id = self.id, start, size_diff, "text removed outside the mask");
            self.mask.backspace();
        }

        self.write_value(true);
    }

    /// Handles a key-down: undo, redo and backspace are taken over from the
    /// element, everything else passes through.
    pub fn on_key_down(&mut self, event: &mut KeyboardEvent) {
        if key::is_undo(&event.code, event.modifiers) {
            event.prevent_default();
            tracing::debug!(id = self.id, "undo");
            if self.mask.undo() {
                self.write_value(true);
            }
        } else if key::is_redo(&event.code, event.modifiers) {
            event.prevent_default();
            tracing::debug!(id = self.id, "redo");
            if self.mask.redo() {
                self.write_value(true);
            }
        } else if key::is_backspace(&event.code) {
            event.prevent_default();
            self.pull_selection();
            if self.mask.backspace() {
                self.write_value(true);
            }
        }
    }

    /// Handles a key-press by feeding its character to the mask.
    ///
    /// Presses with ctrl, alt or meta held, Enter, and keys that produce no
    /// character are left to the element so shortcuts and form submission
    /// keep working.
    pub fn on_key_press(&mut self, event: &mut KeyboardEvent) {
        if key::has_shortcut_modifier(event.modifiers) || event.which() == Some(key::ENTER) {
            return;
        }
        let Some(ch) = event.character() else {
            return;
        };

        event.prevent_default();
        self.pull_selection();
        if self.mask.input(ch) {
            self.write_value(true);
        } else {
            tracing::trace!(id = self.id, rejected = ?ch, "input rejected by mask");
        }
    }

    /// Handles a paste.
    ///
    /// Text comes from the event's clipboard data, or from the legacy
    /// clipboard when the event has none. When selection sync is deferred the
    /// returned command yields a [`SelectionSyncMsg`] for this adapter.
    pub fn on_paste(&mut self, event: &mut ClipboardEvent) -> Option<Cmd> {
        event.prevent_default();
        self.pull_selection();

        let text = paste_text(event, self.legacy_clipboard.as_deref_mut()).unwrap_or_default();
        tracing::debug!(id = self.id, len = text.chars().count(), "paste");
        if !self.mask.paste(&text) {
            return None;
        }

        if !self.defer_paste_selection {
            self.write_value(true);
            return None;
        }

        self.write_value(false);
        let id = self.id;
        Some(Box::pin(async move {
            Some(Box::new(SelectionSyncMsg { id }) as Msg)
        }))
    }

    /// Processes a message from the bubbletea-rs runtime.
    ///
    /// Only a focused element takes messages, except for the
    /// [`SelectionSyncMsg`] this adapter scheduled itself. Key messages are
    /// played through key-down, key-press and then the element's default
    /// action, with a change event when that default action edited the text.
    /// The [`paste_key`](MaskedInput::paste_key) reads the system clipboard.
    /// Paste results, clipboard errors and raw [`InputEvent`] messages are
    /// handled as well.
    pub fn update(&mut self, msg: Msg) -> Option<Cmd> {
        if let Some(sync) = msg.downcast_ref::<SelectionSyncMsg>() {
            if sync.id == self.id && !self.is_detached() && !self.display_value().is_empty() {
                self.push_selection();
            }
            return None;
        }

        if !self.element.has_focus() {
            return None;
        }

        if let Some(key_msg) = msg.downcast_ref::<KeyMsg>() {
            return self.handle_key_msg(key_msg);
        }

        if let Some(paste_msg) = msg.downcast_ref::<PasteMsg>() {
            self.err = None;
            let mut event = InputEvent::Paste(ClipboardEvent::with_text(paste_msg.0.clone()));
            return self.dispatch(&mut event);
        }

        if let Some(paste_err) = msg.downcast_ref::<PasteErrMsg>() {
            tracing::warn!(id = self.id, "paste failed: {}", paste_err.0);
            self.err = Some(paste_err.0.clone());
            return None;
        }

        if let Ok(event) = msg.downcast::<InputEvent>() {
            let mut event = *event;
            return self.dispatch(&mut event);
        }

        None
    }

    fn handle_key_msg(&mut self, key_msg: &KeyMsg) -> Option<Cmd> {
        if self.is_listening(EventKind::Paste) && key::matches_binding(key_msg, &self.paste_key) {
            return Some(paste());
        }

        let mut event = KeyboardEvent::from(key_msg);
        if self.is_listening(EventKind::KeyDown) {
            self.on_key_down(&mut event);
        }
        if !event.default_prevented() && self.is_listening(EventKind::KeyPress) {
            self.on_key_press(&mut event);
        }
        if !event.default_prevented()
            && self.element.perform_default(&event)
            && self.is_listening(EventKind::Change)
        {
            self.on_change();
        }
        None
    }

    /// Writes the display value to the element and, when requested and the
    /// value is not empty, the mask selection too.
    fn write_value(&mut self, sync_selection: bool) {
        let value = self.display_value();
        self.element.set_value(&value);
        if sync_selection && !value.is_empty() {
            self.push_selection();
        }
    }

    /// Copies the element's native selection into the mask.
    pub(super) fn pull_selection(&mut self) {
        if let Some(native) = self.element.native_selection() {
            let selection = Selection::new(native.selection_start(), native.selection_end());
            tracing::trace!(id = self.id, ?selection, "pull selection");
            self.mask.set_selection(selection);
        }
    }

    /// Copies the mask selection onto the element, clamping the end to the
    /// element's text.
    pub(super) fn push_selection(&mut self) {
        let len = self.element.value().chars().count();
        let selection = self.mask.selection();
        if let Some(native) = self.element.native_selection() {
            tracing::trace!(id = self.id, ?selection, "push selection");
            native.set_selection_start(selection.start);
            native.set_selection_end(selection.end.min(len));
        }
    }
}
