//! Editing operations and default key handling for the text field.

use bubbletea_rs::Cmd;
use crossterm::event::KeyCode;

use super::model::TextField;
use crate::key::has_shortcut_modifier;
use crate::mask::Selection;
use crate::maskedinput::KeyboardEvent;
use crate::Component;

impl TextField {
    /// Gives the field keyboard focus.
    pub fn focus(&mut self) {
        self.focus = true;
    }

    /// Removes keyboard focus.
    pub fn blur(&mut self) {
        self.focus = false;
    }

    /// Runs the default action for `event`, looked up in the field's
    /// [`KeyMap`](super::KeyMap). Unbound character keys are inserted.
    ///
    /// Returns true when the text changed.
    pub fn apply_key(&mut self, event: &KeyboardEvent) -> bool {
        let keys = &self.key_map;
        if event.matches(&keys.character_forward) {
            self.move_right(false);
        } else if event.matches(&keys.character_backward) {
            self.move_left(false);
        } else if event.matches(&keys.select_forward) {
            self.move_right(true);
        } else if event.matches(&keys.select_backward) {
            self.move_left(true);
        } else if event.matches(&keys.line_start) {
            self.move_to(0, false);
        } else if event.matches(&keys.line_end) {
            self.move_to(self.value.len(), false);
        } else if event.matches(&keys.select_to_line_start) {
            self.move_to(0, true);
        } else if event.matches(&keys.select_to_line_end) {
            self.move_to(self.value.len(), true);
        } else if event.matches(&keys.delete_character_backward) {
            return self.delete_backward();
        } else if event.matches(&keys.delete_character_forward) {
            return self.delete_forward();
        } else if event.matches(&keys.select_all) {
            self.select_all();
        } else if event.matches(&keys.cut) {
            return self.cut().is_some();
        } else if let KeyCode::Char(ch) = event.code {
            if !has_shortcut_modifier(event.modifiers) {
                self.insert_char(ch);
                return true;
            }
        }
        false
    }

    /// Moves the caret one character left, or collapses the selection to its
    /// start. With `extend` the selection grows or shrinks instead.
    pub fn move_left(&mut self, extend: bool) {
        if extend {
            let head = self.position().saturating_sub(1);
            self.extend_to(head);
        } else if self.selection.is_collapsed() {
            self.set_cursor(self.selection.start.saturating_sub(1));
        } else {
            self.set_cursor(self.selection.start);
        }
    }

    /// Moves the caret one character right, or collapses the selection to its
    /// end. With `extend` the selection grows or shrinks instead.
    pub fn move_right(&mut self, extend: bool) {
        if extend {
            let head = (self.position() + 1).min(self.value.len());
            self.extend_to(head);
        } else if self.selection.is_collapsed() {
            self.set_cursor(self.selection.end + 1);
        } else {
            self.set_cursor(self.selection.end);
        }
    }

    /// Moves the caret to `pos`, or extends the selection there.
    pub fn move_to(&mut self, pos: usize, extend: bool) {
        if extend {
            self.extend_to(pos.min(self.value.len()));
        } else {
            self.set_cursor(pos);
        }
    }

    fn extend_to(&mut self, head: usize) {
        let anchor = if self.backward {
            self.selection.end
        } else {
            self.selection.start
        };
        self.backward = head < anchor;
        self.selection = Selection::new(anchor.min(head), anchor.max(head));
    }

    /// Selects all text.
    pub fn select_all(&mut self) {
        self.select(0, self.value.len());
    }

    /// Inserts `ch` in place of the selection.
    pub fn insert_char(&mut self, ch: char) {
        let Selection { start, end } = self.selection;
        self.value.drain(start..end);
        self.value.insert(start, ch);
        self.set_cursor(start + 1);
    }

    /// Deletes the selection, or the character after the caret.
    pub fn delete_forward(&mut self) -> bool {
        if !self.selection.is_collapsed() {
            return self.remove_selection().is_some();
        }
        let pos = self.selection.start;
        if pos >= self.value.len() {
            return false;
        }
        self.value.remove(pos);
        true
    }

    /// Deletes the selection, or the character before the caret.
    pub fn delete_backward(&mut self) -> bool {
        if !self.selection.is_collapsed() {
            return self.remove_selection().is_some();
        }
        let pos = self.selection.start;
        if pos == 0 {
            return false;
        }
        self.value.remove(pos - 1);
        self.set_cursor(pos - 1);
        true
    }

    /// Removes the selected text, remembering it as the last cut.
    pub fn cut(&mut self) -> Option<String> {
        let cut = self.remove_selection()?;
        self.last_cut = Some(cut.clone());
        Some(cut)
    }

    fn remove_selection(&mut self) -> Option<String> {
        let Selection { start, end } = self.selection;
        if start == end {
            return None;
        }
        let removed: String = self.value.drain(start..end).collect();
        self.set_cursor(start);
        Some(removed)
    }
}

impl Component for TextField {
    fn focus(&mut self) -> Option<Cmd> {
        TextField::focus(self);
        None
    }

    fn blur(&mut self) {
        TextField::blur(self)
    }

    fn focused(&self) -> bool {
        TextField::focused(self)
    }
}
