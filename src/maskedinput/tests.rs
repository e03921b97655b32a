//! Tests for the masked input adapter.

use super::*;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mask::{InputMask, MaskEngine, PatternError, Selection};
    use crate::textfield::TextField;
    use bubbletea_rs::{KeyMsg, Msg};
    use crossterm::event::{KeyCode, KeyModifiers};
    use std::sync::{Arc, Mutex};

    const PHONE: &str = "(111) 111-1111";

    fn phone_input() -> MaskedInput<TextField> {
        let mut input = MaskedInput::new(TextField::new(), PHONE).unwrap();
        input.set_legacy_clipboard(None);
        input
    }

    fn key_down(code: KeyCode, modifiers: KeyModifiers) -> InputEvent {
        InputEvent::KeyDown(KeyboardEvent::new(code, modifiers))
    }

    fn key_press(ch: char) -> InputEvent {
        InputEvent::KeyPress(KeyboardEvent::new(KeyCode::Char(ch), KeyModifiers::NONE))
    }

    fn type_str<E: InputElement, M: MaskEngine>(input: &mut MaskedInput<E, M>, text: &str) {
        for ch in text.chars() {
            let mut event = key_press(ch);
            assert!(input.dispatch(&mut event).is_none());
            assert!(event.default_prevented());
        }
    }

    fn key_msg(code: KeyCode, modifiers: KeyModifiers) -> Msg {
        Box::new(KeyMsg {
            key: code,
            modifiers,
        })
    }

    struct FixedClipboard(&'static str);

    impl ClipboardSource for FixedClipboard {
        fn get_data(&mut self, format: &str) -> Option<String> {
            assert_eq!(format, "Text");
            Some(self.0.to_string())
        }
    }

    /// Engine that records the calls made against it.
    struct RecordingEngine {
        calls: Arc<Mutex<Vec<String>>>,
        value: String,
        selection: Selection,
    }

    impl MaskEngine for RecordingEngine {
        fn value(&self) -> String {
            self.value.clone()
        }

        fn empty_value(&self) -> &str {
            "____"
        }

        fn selection(&self) -> Selection {
            self.selection
        }

        fn set_selection(&mut self, selection: Selection) {
            self.calls
                .lock()
                .unwrap()
                .push(format!("select {}..{}", selection.start, selection.end));
            self.selection = selection;
        }

        fn input(&mut self, ch: char) -> bool {
            self.calls.lock().unwrap().push(format!("input {ch}"));
            false
        }

        fn backspace(&mut self) -> bool {
            self.calls.lock().unwrap().push("backspace".to_string());
            false
        }

        fn paste(&mut self, text: &str) -> bool {
            self.calls.lock().unwrap().push(format!("paste {text:?}"));
            false
        }

        fn undo(&mut self) -> bool {
            self.calls.lock().unwrap().push("undo".to_string());
            false
        }

        fn redo(&mut self) -> bool {
            self.calls.lock().unwrap().push("redo".to_string());
            false
        }
    }

    fn recording(value: &str) -> (RecordingEngine, Arc<Mutex<Vec<String>>>) {
        let calls = Arc::new(Mutex::new(Vec::new()));
        let engine = RecordingEngine {
            calls: Arc::clone(&calls),
            value: value.to_string(),
            selection: Selection::caret(0),
        };
        (engine, calls)
    }

    #[test]
    fn test_prefilled_input_is_formatted() {
        let field = TextField::new().with_value("5551234567");
        let input = MaskedInput::new(field, PHONE).unwrap();
        let direct = InputMask::new(PHONE, "5551234567", '_').unwrap();

        assert_eq!(input.element().value(), direct.value());
        assert_eq!(input.element().value(), "(555) 123-4567");
    }

    #[test]
    fn test_empty_input_stays_empty() {
        let input = phone_input();
        assert_eq!(input.element().value(), "");
        assert_eq!(input.mask().value(), "(___) ___-____");
        assert_eq!(input.display_value(), "");
    }

    #[test]
    fn test_invalid_prefill_stays_empty() {
        let field = TextField::new().with_value("abc");
        let input = MaskedInput::new(field, PHONE).unwrap();
        assert_eq!(input.element().value(), "");
    }

    #[test]
    fn test_pattern_error_propagates() {
        let err = MaskedInput::new(TextField::new(), "---").unwrap_err();
        assert_eq!(
            err,
            PatternError::NoEditableCharacters {
                pattern: "---".to_string()
            }
        );
    }

    #[test]
    fn test_typing_matches_engine() {
        let mut input = phone_input();
        type_str(&mut input, "555");

        let mut direct = InputMask::new(PHONE, "", '_').unwrap();
        for ch in "555".chars() {
            direct.input(ch);
        }

        assert_eq!(input.element().value(), "(555) ___-____");
        assert_eq!(input.element().value(), direct.value());
        assert_eq!(input.element().selection(), Selection::caret(6));
    }

    #[test]
    fn test_rejected_character_is_still_prevented() {
        let mut input = phone_input();
        let mut event = key_press('x');
        input.dispatch(&mut event);
        assert!(event.default_prevented());
        assert_eq!(input.element().value(), "");
    }

    #[test]
    fn test_enter_is_not_prevented() {
        let mut input = phone_input();
        type_str(&mut input, "12");
        let before = input.mask().value();

        let mut event = InputEvent::KeyPress(KeyboardEvent::new(KeyCode::Enter, KeyModifiers::NONE));
        input.dispatch(&mut event);
        assert!(!event.default_prevented());
        assert_eq!(input.mask().value(), before);
        assert_eq!(input.element().value(), before);
    }

    #[test]
    fn test_modified_key_press_is_ignored() {
        let mut input = phone_input();
        for modifiers in [KeyModifiers::CONTROL, KeyModifiers::ALT, KeyModifiers::SUPER] {
            let mut event = InputEvent::KeyPress(KeyboardEvent::new(KeyCode::Char('5'), modifiers));
            input.dispatch(&mut event);
            assert!(!event.default_prevented());
        }
        assert_eq!(input.element().value(), "");
    }

    #[test]
    fn test_typing_at_element_caret() {
        let field = TextField::new().with_value("5551234567");
        let mut input = MaskedInput::new(field, PHONE).unwrap();
        input.element_mut().set_cursor(6);
        type_str(&mut input, "9");
        assert_eq!(input.element().value(), "(555) 923-4567");
        assert_eq!(input.element().selection(), Selection::caret(7));
    }

    #[test]
    fn test_undo_redo_shortcuts() {
        let mut input = phone_input();
        type_str(&mut input, "5");
        assert_eq!(input.element().value(), "(5__) ___-____");

        let mut undo = key_down(KeyCode::Char('z'), KeyModifiers::CONTROL);
        input.dispatch(&mut undo);
        assert!(undo.default_prevented());
        assert_eq!(input.element().value(), "");

        let mut redo = key_down(KeyCode::Char('y'), KeyModifiers::CONTROL);
        input.dispatch(&mut redo);
        assert!(redo.default_prevented());
        assert_eq!(input.element().value(), "(5__) ___-____");
        assert_eq!(input.element().selection(), Selection::caret(2));

        let mut undo = key_down(KeyCode::Char('z'), KeyModifiers::SUPER);
        input.dispatch(&mut undo);
        assert_eq!(input.element().value(), "");

        let mut redo = key_down(
            KeyCode::Char('Z'),
            KeyModifiers::CONTROL | KeyModifiers::SHIFT,
        );
        input.dispatch(&mut redo);
        assert_eq!(input.element().value(), "(5__) ___-____");
    }

    #[test]
    fn test_undo_reverts_to_prior_state() {
        let mut input = phone_input();
        type_str(&mut input, "12");
        input.element_mut().set_cursor(3);
        let mut backspace = key_down(KeyCode::Backspace, KeyModifiers::NONE);
        input.dispatch(&mut backspace);
        assert_eq!(input.element().value(), "(1__) ___-____");

        let mut undo = key_down(KeyCode::Char('z'), KeyModifiers::CONTROL);
        input.dispatch(&mut undo);
        assert_eq!(input.element().value(), "(12_) ___-____");
        assert_eq!(input.element().selection(), Selection::caret(3));
    }

    #[test]
    fn test_undo_without_history_still_prevents() {
        let mut input = phone_input();
        let mut undo = key_down(KeyCode::Char('z'), KeyModifiers::CONTROL);
        input.dispatch(&mut undo);
        assert!(undo.default_prevented());
        assert_eq!(input.element().value(), "");
    }

    #[test]
    fn test_other_key_down_passes_through() {
        let mut input = phone_input();
        let mut event = key_down(KeyCode::Left, KeyModifiers::NONE);
        input.dispatch(&mut event);
        assert!(!event.default_prevented());

        let mut event = key_down(KeyCode::Char('z'), KeyModifiers::NONE);
        input.dispatch(&mut event);
        assert!(!event.default_prevented());
    }

    #[test]
    fn test_backspace_removes_selected_span() {
        let field = TextField::new().with_value("5551234567");
        let mut input = MaskedInput::new(field, PHONE).unwrap();
        input.element_mut().select(1, 4);

        let mut event = key_down(KeyCode::Backspace, KeyModifiers::NONE);
        input.dispatch(&mut event);

        assert!(event.default_prevented());
        assert_eq!(input.element().value(), "(___) 123-4567");
        assert_eq!(input.element().selection(), Selection::caret(1));
    }

    #[test]
    fn test_backspace_to_empty_clears_field() {
        let mut input = phone_input();
        type_str(&mut input, "7");
        let mut event = key_down(KeyCode::Backspace, KeyModifiers::NONE);
        input.dispatch(&mut event);
        assert_eq!(input.element().value(), "");
    }

    #[tokio::test]
    async fn test_paste_fills_slots_and_defers_selection() {
        let mut input = phone_input();
        let mut event = InputEvent::Paste(ClipboardEvent::with_text("12"));
        let cmd = input.dispatch(&mut event).expect("deferred selection sync");

        assert!(event.default_prevented());
        assert_eq!(input.element().value(), "(12_) ___-____");
        // Until the sync arrives the caret sits where the value write left it
        assert_eq!(input.element().selection(), Selection::caret(14));

        let msg = cmd.await.expect("sync message");
        assert!(input.update(msg).is_none());
        assert_eq!(input.element().selection(), input.mask().selection());
        assert_eq!(input.element().selection(), Selection::caret(3));
    }

    #[test]
    fn test_paste_without_deferral() {
        let field = TextField::new();
        let options = MaskOptions::new(PHONE).with_defer_paste_selection(false);
        let mut input = MaskedInput::with_options(field, options).unwrap();
        assert!(!input.defers_paste_selection());

        let mut event = InputEvent::Paste(ClipboardEvent::with_text("12"));
        assert!(input.dispatch(&mut event).is_none());
        assert_eq!(input.element().selection(), Selection::caret(3));
    }

    #[test]
    fn test_rejected_paste_leaves_field() {
        let mut input = phone_input();
        type_str(&mut input, "9");
        let mut event = InputEvent::Paste(ClipboardEvent::with_text("abc"));
        assert!(input.dispatch(&mut event).is_none());
        assert!(event.default_prevented());
        assert_eq!(input.element().value(), "(9__) ___-____");
    }

    #[test]
    fn test_paste_falls_back_to_legacy_clipboard() {
        let mut input = phone_input();
        input.set_legacy_clipboard(Some(Box::new(FixedClipboard("42"))));
        let mut event = InputEvent::Paste(ClipboardEvent::new(None));
        input.dispatch(&mut event);
        assert_eq!(input.element().value(), "(42_) ___-____");
    }

    #[test]
    fn test_paste_without_any_clipboard() {
        let mut input = phone_input();
        let mut event = InputEvent::Paste(ClipboardEvent::new(None));
        input.dispatch(&mut event);
        assert!(event.default_prevented());
        assert_eq!(input.element().value(), "");
    }

    #[test]
    fn test_paste_hands_engine_empty_text_when_data_missing() {
        let (engine, calls) = recording("____");
        let mut input = MaskedInput::with_engine(TextField::new(), engine);
        input.set_legacy_clipboard(None);

        let mut data = ClipboardData::default();
        data.set_data("text/html", "<b>1</b>");
        let mut event = InputEvent::Paste(ClipboardEvent::new(Some(data)));
        assert!(input.dispatch(&mut event).is_none());

        let calls = calls.lock().unwrap();
        assert_eq!(calls.last().map(String::as_str), Some("paste \"\""));
    }

    #[test]
    fn test_change_after_cut() {
        let field = TextField::new().with_value("5551234567");
        let mut input = MaskedInput::new(field, PHONE).unwrap();
        input.element_mut().select(6, 9);
        assert_eq!(input.element_mut().cut().as_deref(), Some("123"));
        assert_eq!(input.element().value(), "(555) -4567");

        input.dispatch(&mut InputEvent::Change);
        assert_eq!(input.element().value(), "(555) ___-4567");
        assert_eq!(input.element().selection(), Selection::caret(6));
    }

    #[test]
    fn test_change_extends_selection_by_removed_length() {
        let (engine, calls) = recording("abcd");
        let mut input = MaskedInput::with_engine(TextField::new(), engine);
        input.element_mut().set_value("ab");
        input.element_mut().set_cursor(1);

        input.dispatch(&mut InputEvent::Change);

        let calls = calls.lock().unwrap();
        assert_eq!(
            calls.as_slice(),
            ["select 1..1", "select 1..3", "backspace"].map(String::from)
        );
    }

    #[test]
    fn test_change_with_unchanged_text_is_noop() {
        let (engine, calls) = recording("abcd");
        let mut input = MaskedInput::with_engine(TextField::new(), engine);
        input.dispatch(&mut InputEvent::Change);
        assert!(calls.lock().unwrap().is_empty());
        assert_eq!(input.element().value(), "abcd");
    }

    #[test]
    fn test_without_native_selection() {
        let field = TextField::new().without_native_selection();
        let mut input = MaskedInput::new(field, PHONE).unwrap();
        type_str(&mut input, "55");
        assert_eq!(input.element().value(), "(55_) ___-____");
        // The mask keeps its own caret; the field's is never touched
        assert_eq!(input.mask().selection(), Selection::caret(3));
        assert_eq!(input.element().selection(), Selection::caret(14));
    }

    #[test]
    fn test_custom_placeholder_char() {
        let options = MaskOptions::new(PHONE).with_placeholder_char('#');
        let mut input = MaskedInput::with_options(TextField::new(), options).unwrap();
        assert_eq!(input.element().value(), "");
        type_str(&mut input, "5");
        assert_eq!(input.element().value(), "(5##) ###-####");
    }

    #[test]
    fn test_options_from_json() {
        let options: MaskOptions = serde_json::from_str(
            r#"{"pattern": "11:11", "placeholder_char": "0", "defer_paste_selection": false}"#,
        )
        .unwrap();
        assert_eq!(
            options,
            MaskOptions::new("11:11")
                .with_placeholder_char('0')
                .with_defer_paste_selection(false)
        );
    }

    #[test]
    fn test_listeners_registered_and_detached() {
        let mut input = phone_input();
        for kind in EventKind::ALL {
            assert!(input.element().has_listener(kind));
            assert!(input.is_listening(kind));
        }
        assert_eq!(input.element().listeners().len(), 4);

        input.detach();
        assert!(input.is_detached());
        assert!(input.element().listeners().is_empty());

        let mut event = key_press('5');
        assert!(input.dispatch(&mut event).is_none());
        assert!(!event.default_prevented());
        assert_eq!(input.element().value(), "");

        // Detaching twice is harmless
        input.detach();
    }

    #[test]
    fn test_drop_detaches_borrowed_element() {
        let mut field = TextField::new().with_value("5551234567");
        {
            let input = MaskedInput::new(&mut field, PHONE).unwrap();
            assert_eq!(input.element().listeners().len(), 4);
        }
        assert!(field.listeners().is_empty());
        assert_eq!(field.value(), "(555) 123-4567");
    }

    #[test]
    fn test_update_routes_key_messages() {
        let mut input = phone_input();

        // Unfocused fields ignore keys
        assert!(input.update(key_msg(KeyCode::Char('5'), KeyModifiers::NONE)).is_none());
        assert_eq!(input.element().value(), "");

        input.element_mut().focus();
        for ch in "555".chars() {
            input.update(key_msg(KeyCode::Char(ch), KeyModifiers::NONE));
        }
        assert_eq!(input.element().value(), "(555) ___-____");

        input.update(key_msg(KeyCode::Char('z'), KeyModifiers::CONTROL));
        assert_eq!(input.element().value(), "");
        input.update(key_msg(KeyCode::Char('y'), KeyModifiers::CONTROL));
        assert_eq!(input.element().value(), "(555) ___-____");
    }

    #[test]
    fn test_update_runs_default_actions() {
        let field = TextField::new().with_value("5551234567");
        let mut input = MaskedInput::new(field, PHONE).unwrap();
        input.element_mut().focus();

        // Caret movement is left to the field
        input.update(key_msg(KeyCode::Home, KeyModifiers::NONE));
        input.update(key_msg(KeyCode::Right, KeyModifiers::NONE));
        assert_eq!(input.element().selection(), Selection::caret(1));

        // Delete edits the field, and the change is folded into the mask
        input.update(key_msg(KeyCode::Delete, KeyModifiers::NONE));
        assert_eq!(input.element().value(), "(_55) 123-4567");
        assert_eq!(input.element().selection(), Selection::caret(1));

        // Enter reaches the field untouched
        input.update(key_msg(KeyCode::Enter, KeyModifiers::NONE));
        assert_eq!(input.element().value(), "(_55) 123-4567");
    }

    #[test]
    fn test_update_cut_through_keys() {
        let field = TextField::new().with_value("5551234567");
        let mut input = MaskedInput::new(field, PHONE).unwrap();
        input.element_mut().focus();
        input.element_mut().select(10, 14);

        input.update(key_msg(KeyCode::Char('x'), KeyModifiers::CONTROL));
        assert_eq!(input.element().last_cut(), Some("4567"));
        assert_eq!(input.element().value(), "(555) 123-____");
    }

    #[test]
    fn test_update_ctrl_v_reads_clipboard() {
        let mut input = phone_input();
        input.element_mut().focus();
        assert!(input
            .update(key_msg(KeyCode::Char('v'), KeyModifiers::CONTROL))
            .is_some());
        assert_eq!(input.element().value(), "");
    }

    #[tokio::test]
    async fn test_update_paste_message() {
        let mut input = phone_input();
        input.element_mut().focus();
        let cmd = input.update(Box::new(PasteMsg("5551234567".to_string())));
        assert_eq!(input.element().value(), "(555) 123-4567");

        let msg = cmd.expect("sync command").await.expect("sync message");
        input.update(msg);
        assert_eq!(input.element().selection(), Selection::caret(14));
    }

    #[test]
    fn test_update_paste_error_is_kept() {
        let mut input = phone_input();
        input.element_mut().focus();
        assert!(input
            .update(Box::new(PasteErrMsg("no clipboard".to_string())))
            .is_none());
        assert_eq!(input.element().value(), "");
        assert_eq!(input.err.as_deref(), Some("no clipboard"));

        // A later successful paste clears it
        input.update(Box::new(PasteMsg("555".to_string())));
        assert_eq!(input.err, None);
        assert_eq!(input.element().value(), "(555) ___-____");
    }

    #[test]
    fn test_unfocused_adapter_ignores_paste_error() {
        let mut input = phone_input();
        input.update(Box::new(PasteErrMsg("no clipboard".to_string())));
        assert_eq!(input.err, None);
    }

    #[test]
    fn test_update_input_event_message() {
        let mut input = phone_input();
        input.update(key_press('8').into());
        assert_eq!(input.element().value(), "");

        input.element_mut().focus();
        input.update(key_press('8').into());
        assert_eq!(input.element().value(), "(8__) ___-____");
    }

    #[test]
    fn test_paste_message_reaches_only_focused_adapter() {
        let mut focused = phone_input();
        let mut other = phone_input();
        focused.element_mut().focus();

        for input in [&mut focused, &mut other] {
            input.update(Box::new(PasteMsg("5551234567".to_string())));
        }
        assert_eq!(focused.element().value(), "(555) 123-4567");
        assert_eq!(other.element().value(), "");
        assert_eq!(other.mask().value(), other.mask().empty_value());
    }

    #[test]
    fn test_paste_key_can_be_remapped() {
        let mut input = phone_input();
        input.element_mut().focus();
        input.paste_key = crate::key::new_binding(vec![crate::key::with_keys_str(&["shift+insert"])]);

        // ctrl+v is now an ordinary shortcut the mask ignores
        assert!(input
            .update(key_msg(KeyCode::Char('v'), KeyModifiers::CONTROL))
            .is_none());
        assert!(input
            .update(key_msg(KeyCode::Insert, KeyModifiers::SHIFT))
            .is_some());
        assert_eq!(input.element().value(), "");
    }

    #[test]
    fn test_selection_sync_for_other_adapter_is_ignored() {
        let mut input = phone_input();
        type_str(&mut input, "55");
        input.element_mut().set_cursor(0);

        let other = SelectionSyncMsg { id: input.id() + 1000 };
        input.update(other.into());
        assert_eq!(input.element().selection(), Selection::caret(0));

        input.update(SelectionSyncMsg { id: input.id() }.into());
        assert_eq!(input.element().selection(), Selection::caret(3));
    }

    #[test]
    fn test_adapter_ids_are_unique() {
        let a = phone_input();
        let b = phone_input();
        assert_ne!(a.id(), b.id());
    }
}
