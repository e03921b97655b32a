//! Named key codes and the shortcut rules masked inputs react to.
//!
//! Key events carry crossterm [`KeyCode`]s. The handlers compare them by
//! their classic numeric key code, looked up in [`KEY_CODES`], so that
//! `z` and `Z` (with or without shift) resolve to the same key.
//!
//! Remappable shortcuts are [`Binding`]s, built from key strings such as
//! `"ctrl+v"` or `"shift+left"`:
//!
//! ```rust
//! use bubbletea_rs::KeyMsg;
//! use crossterm::event::{KeyCode, KeyModifiers};
//! use masked_input::key::{matches_binding, new_binding, with_keys_str};
//!
//! let cut = new_binding(vec![with_keys_str(&["ctrl+x", "shift+delete"])]).with_help("ctrl+x", "cut");
//! let msg = KeyMsg { key: KeyCode::Char('x'), modifiers: KeyModifiers::CONTROL };
//! assert!(matches_binding(&msg, &cut));
//! ```

use bubbletea_rs::KeyMsg;
use crossterm::event::{KeyCode, KeyModifiers, ModifierKeyCode};

/// Backspace.
pub const BACKSPACE: u32 = 8;
/// Tab.
pub const TAB: u32 = 9;
/// Clear.
pub const CLEAR: u32 = 12;
/// Enter.
pub const ENTER: u32 = 13;
/// Shift.
pub const SHIFT: u32 = 16;
/// Control.
pub const CONTROL: u32 = 17;
/// Alt.
pub const ALT: u32 = 18;
/// Pause.
pub const PAUSE: u32 = 19;
/// Caps lock.
pub const CAPS_LOCK: u32 = 20;
/// Escape.
pub const ESCAPE: u32 = 27;
/// Space bar.
pub const SPACE: u32 = 32;
/// Page up.
pub const PAGE_UP: u32 = 33;
/// Page down.
pub const PAGE_DOWN: u32 = 34;
/// End.
pub const END: u32 = 35;
/// Home.
pub const HOME: u32 = 36;
/// Left arrow.
pub const ARROW_LEFT: u32 = 37;
/// Up arrow.
pub const ARROW_UP: u32 = 38;
/// Right arrow.
pub const ARROW_RIGHT: u32 = 39;
/// Down arrow.
pub const ARROW_DOWN: u32 = 40;
/// Insert.
pub const INSERT: u32 = 45;
/// Delete.
pub const DELETE: u32 = 46;
/// The `Y` key.
pub const Y: u32 = 89;
/// The `Z` key.
pub const Z: u32 = 90;
/// Meta / command / super.
pub const META: u32 = 224;

/// Key names and their codes.
pub const KEY_CODES: [(&str, u32); 24] = [
    ("Backspace", BACKSPACE),
    ("Tab", TAB),
    ("Clear", CLEAR),
    ("Enter", ENTER),
    ("Shift", SHIFT),
    ("Control", CONTROL),
    ("Alt", ALT),
    ("Pause", PAUSE),
    ("CapsLock", CAPS_LOCK),
    ("Escape", ESCAPE),
    (" ", SPACE),
    ("PageUp", PAGE_UP),
    ("PageDown", PAGE_DOWN),
    ("End", END),
    ("Home", HOME),
    ("ArrowLeft", ARROW_LEFT),
    ("ArrowUp", ARROW_UP),
    ("ArrowRight", ARROW_RIGHT),
    ("ArrowDown", ARROW_DOWN),
    ("Insert", INSERT),
    ("Delete", DELETE),
    ("Z", Z),
    ("Y", Y),
    ("Meta", META),
];

/// Looks up a key code by its name in [`KEY_CODES`].
///
/// ```rust
/// use masked_input::key::{code_for_name, BACKSPACE};
///
/// assert_eq!(code_for_name("Backspace"), Some(BACKSPACE));
/// assert_eq!(code_for_name("F13"), None);
/// ```
pub fn code_for_name(name: &str) -> Option<u32> {
    KEY_CODES
        .iter()
        .find(|(key, _)| *key == name)
        .map(|(_, code)| *code)
}

/// Maps a crossterm key to its numeric key code.
///
/// Letters map to their upper-case ASCII value and digits to their ASCII
/// value. Keys without a classic code map to `None`.
pub fn key_code(code: &KeyCode) -> Option<u32> {
    let name = match code {
        KeyCode::Char(ch) if ch.is_ascii_alphanumeric() => {
            return Some(ch.to_ascii_uppercase() as u32)
        }
        KeyCode::Char(' ') => " ",
        KeyCode::Backspace => "Backspace",
        KeyCode::Tab | KeyCode::BackTab => "Tab",
        KeyCode::Enter => "Enter",
        KeyCode::Pause => "Pause",
        KeyCode::CapsLock => "CapsLock",
        KeyCode::Esc => "Escape",
        KeyCode::PageUp => "PageUp",
        KeyCode::PageDown => "PageDown",
        KeyCode::End => "End",
        KeyCode::Home => "Home",
        KeyCode::Left => "ArrowLeft",
        KeyCode::Up => "ArrowUp",
        KeyCode::Right => "ArrowRight",
        KeyCode::Down => "ArrowDown",
        KeyCode::Insert => "Insert",
        KeyCode::Delete => "Delete",
        KeyCode::Modifier(modifier) => match modifier {
            ModifierKeyCode::LeftShift | ModifierKeyCode::RightShift => "Shift",
            ModifierKeyCode::LeftControl | ModifierKeyCode::RightControl => "Control",
            ModifierKeyCode::LeftAlt | ModifierKeyCode::RightAlt => "Alt",
            ModifierKeyCode::LeftSuper
            | ModifierKeyCode::RightSuper
            | ModifierKeyCode::LeftMeta
            | ModifierKeyCode::RightMeta => "Meta",
            _ => return None,
        },
        _ => return None,
    };
    code_for_name(name)
}

/// True when control or a meta/super key is held.
pub fn has_command_modifier(modifiers: KeyModifiers) -> bool {
    modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::SUPER | KeyModifiers::META)
}

/// True when any modifier that turns a key press into a shortcut is held.
pub fn has_shortcut_modifier(modifiers: KeyModifiers) -> bool {
    has_command_modifier(modifiers) || modifiers.contains(KeyModifiers::ALT)
}

/// Undo is command+Z, or command+shift+Y.
///
/// ```rust
/// use crossterm::event::{KeyCode, KeyModifiers};
/// use masked_input::key::{is_redo, is_undo};
///
/// assert!(is_undo(&KeyCode::Char('z'), KeyModifiers::CONTROL));
/// assert!(is_redo(&KeyCode::Char('Z'), KeyModifiers::CONTROL | KeyModifiers::SHIFT));
/// assert!(!is_undo(&KeyCode::Char('z'), KeyModifiers::NONE));
/// ```
pub fn is_undo(code: &KeyCode, modifiers: KeyModifiers) -> bool {
    let target = if modifiers.contains(KeyModifiers::SHIFT) { Y } else { Z };
    has_command_modifier(modifiers) && key_code(code) == Some(target)
}

/// Redo is command+Y, or command+shift+Z.
pub fn is_redo(code: &KeyCode, modifiers: KeyModifiers) -> bool {
    let target = if modifiers.contains(KeyModifiers::SHIFT) { Z } else { Y };
    has_command_modifier(modifiers) && key_code(code) == Some(target)
}

/// Plain backspace; modifiers do not matter.
pub fn is_backspace(code: &KeyCode) -> bool {
    key_code(code) == Some(BACKSPACE)
}

/// A single key with the modifiers that must be held.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeyPress {
    /// The key.
    pub code: KeyCode,
    /// Modifiers held with it.
    pub modifiers: KeyModifiers,
}

impl KeyPress {
    /// True when `code` pressed with `modifiers` is this key press.
    ///
    /// Shift is implied by the character for character keys, so it is ignored
    /// there, and letters match either case once another modifier is held.
    pub fn matches(&self, code: &KeyCode, modifiers: KeyModifiers) -> bool {
        match (self.code, code) {
            (KeyCode::Char(own), KeyCode::Char(other)) => {
                let held = modifiers.difference(KeyModifiers::SHIFT);
                let wanted = self.modifiers.difference(KeyModifiers::SHIFT);
                held == wanted
                    && if wanted.is_empty() {
                        own == *other
                    } else {
                        own.eq_ignore_ascii_case(other)
                    }
            }
            _ => self.code == *code && self.modifiers == modifiers,
        }
    }
}

impl From<KeyCode> for KeyPress {
    fn from(code: KeyCode) -> Self {
        Self {
            code,
            modifiers: KeyModifiers::NONE,
        }
    }
}

impl From<(KeyCode, KeyModifiers)> for KeyPress {
    fn from((code, modifiers): (KeyCode, KeyModifiers)) -> Self {
        Self { code, modifiers }
    }
}

/// Parses a key string like `"ctrl+shift+z"`, `"home"` or `"a"`.
///
/// Modifier names are `ctrl`, `alt`, `shift`, `super` and `meta`. Returns
/// `None` for names it does not know.
pub fn parse_key_str(s: &str) -> Option<KeyPress> {
    if s.chars().count() == 1 {
        return s.chars().next().map(|ch| KeyCode::Char(ch).into());
    }

    let mut parts: Vec<&str> = s.split('+').collect();
    // "ctrl++" ends in an empty part for the plus key itself.
    let last = match parts.pop()? {
        "" => "+",
        name => name,
    };
    if parts.last() == Some(&"") {
        parts.pop();
    }

    let mut modifiers = KeyModifiers::NONE;
    for part in parts {
        modifiers |= match part {
            "ctrl" => KeyModifiers::CONTROL,
            "alt" => KeyModifiers::ALT,
            "shift" => KeyModifiers::SHIFT,
            "super" | "cmd" => KeyModifiers::SUPER,
            "meta" => KeyModifiers::META,
            _ => return None,
        };
    }

    let mut chars = last.chars();
    let code = match (chars.next(), chars.next()) {
        (Some(ch), None) => KeyCode::Char(ch),
        _ => match last {
            "backspace" => KeyCode::Backspace,
            "delete" | "del" => KeyCode::Delete,
            "enter" => KeyCode::Enter,
            "tab" => KeyCode::Tab,
            "esc" | "escape" => KeyCode::Esc,
            "space" => KeyCode::Char(' '),
            "left" => KeyCode::Left,
            "right" => KeyCode::Right,
            "up" => KeyCode::Up,
            "down" => KeyCode::Down,
            "home" => KeyCode::Home,
            "end" => KeyCode::End,
            "pgup" => KeyCode::PageUp,
            "pgdown" => KeyCode::PageDown,
            "insert" => KeyCode::Insert,
            _ => return None,
        },
    };
    Some(KeyPress { code, modifiers })
}

/// Short help text for a binding.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Help {
    /// The keys as shown to the user.
    pub key: String,
    /// What the keys do.
    pub desc: String,
}

/// A set of key presses bound to one action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Binding {
    keys: Vec<KeyPress>,
    help: Help,
    enabled: bool,
}

impl Default for Binding {
    fn default() -> Self {
        Self {
            keys: Vec::new(),
            help: Help::default(),
            enabled: true,
        }
    }
}

impl Binding {
    /// Creates an enabled binding for `keys`.
    pub fn new<K: Into<KeyPress>>(keys: Vec<K>) -> Self {
        Self {
            keys: keys.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }

    /// Sets the help text.
    pub fn with_help(mut self, key: impl Into<String>, desc: impl Into<String>) -> Self {
        self.help = Help {
            key: key.into(),
            desc: desc.into(),
        };
        self
    }

    /// Replaces the bound keys.
    pub fn set_keys<K: Into<KeyPress>>(&mut self, keys: Vec<K>) {
        self.keys = keys.into_iter().map(Into::into).collect();
    }

    /// The bound keys.
    pub fn keys(&self) -> &[KeyPress] {
        &self.keys
    }

    /// The help text.
    pub fn help(&self) -> &Help {
        &self.help
    }

    /// Enables or disables the binding. Disabled bindings match nothing.
    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    /// Whether the binding is enabled.
    pub fn enabled(&self) -> bool {
        self.enabled && !self.keys.is_empty()
    }

    /// True when `code` with `modifiers` is one of the bound keys.
    pub fn matches(&self, code: &KeyCode, modifiers: KeyModifiers) -> bool {
        self.enabled() && self.keys.iter().any(|key| key.matches(code, modifiers))
    }
}

/// Options for [`new_binding`].
#[derive(Debug, Clone)]
pub enum BindingOpt {
    /// Bind these keys.
    Keys(Vec<KeyPress>),
    /// Attach help text.
    Help(Help),
    /// Start disabled.
    Disabled,
}

/// Builds a binding from options.
pub fn new_binding(opts: Vec<BindingOpt>) -> Binding {
    let mut binding = Binding::default();
    for opt in opts {
        match opt {
            BindingOpt::Keys(keys) => binding.keys.extend(keys),
            BindingOpt::Help(help) => binding.help = help,
            BindingOpt::Disabled => binding.enabled = false,
        }
    }
    binding
}

/// Binds the keys named by `keys`. Names [`parse_key_str`] rejects are
/// skipped with a warning.
pub fn with_keys_str(keys: &[&str]) -> BindingOpt {
    BindingOpt::Keys(
        keys.iter()
            .filter_map(|name| {
                let key = parse_key_str(name);
                if key.is_none() {
                    tracing::warn!(key = %name, "unknown key name in binding");
                }
                key
            })
            .collect(),
    )
}

/// Attaches help text to a binding.
pub fn with_help(key: impl Into<String>, desc: impl Into<String>) -> BindingOpt {
    BindingOpt::Help(Help {
        key: key.into(),
        desc: desc.into(),
    })
}

/// Starts a binding disabled.
pub fn with_disabled() -> BindingOpt {
    BindingOpt::Disabled
}

/// True when the key message matches the binding.
pub fn matches_binding(msg: &KeyMsg, binding: &Binding) -> bool {
    binding.matches(&msg.key, msg.modifiers)
}

/// Default terminal paste shortcut, ctrl+v.
pub fn default_paste_binding() -> Binding {
    new_binding(vec![with_keys_str(&["ctrl+v"])]).with_help("ctrl+v", "paste")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_has_unique_names() {
        for (i, (name, _)) in KEY_CODES.iter().enumerate() {
            assert!(
                KEY_CODES[i + 1..].iter().all(|(other, _)| other != name),
                "duplicate key name {name}"
            );
        }
    }

    #[test]
    fn test_key_code_letters_ignore_case() {
        assert_eq!(key_code(&KeyCode::Char('z')), Some(Z));
        assert_eq!(key_code(&KeyCode::Char('Z')), Some(Z));
        assert_eq!(key_code(&KeyCode::Char('7')), Some(55));
        assert_eq!(key_code(&KeyCode::Char(' ')), Some(SPACE));
        assert_eq!(key_code(&KeyCode::Char('é')), None);
    }

    #[test]
    fn test_key_code_named_keys() {
        assert_eq!(key_code(&KeyCode::Enter), Some(ENTER));
        assert_eq!(key_code(&KeyCode::Backspace), Some(BACKSPACE));
        assert_eq!(key_code(&KeyCode::Delete), Some(DELETE));
        assert_eq!(
            key_code(&KeyCode::Modifier(ModifierKeyCode::LeftSuper)),
            Some(META)
        );
        assert_eq!(key_code(&KeyCode::F(5)), None);
    }

    #[test]
    fn test_undo_redo_share_keys() {
        let ctrl = KeyModifiers::CONTROL;
        let ctrl_shift = KeyModifiers::CONTROL | KeyModifiers::SHIFT;
        let meta = KeyModifiers::SUPER;

        assert!(is_undo(&KeyCode::Char('z'), ctrl));
        assert!(is_undo(&KeyCode::Char('z'), meta));
        assert!(is_undo(&KeyCode::Char('Y'), ctrl_shift));
        assert!(!is_redo(&KeyCode::Char('z'), ctrl));

        assert!(is_redo(&KeyCode::Char('y'), ctrl));
        assert!(is_redo(&KeyCode::Char('Z'), ctrl_shift));
        assert!(!is_undo(&KeyCode::Char('Z'), ctrl_shift));

        assert!(!is_undo(&KeyCode::Char('z'), KeyModifiers::ALT));
        assert!(!is_redo(&KeyCode::Char('y'), KeyModifiers::SHIFT));
    }

    #[test]
    fn test_parse_key_str() {
        assert_eq!(
            parse_key_str("ctrl+v"),
            Some(KeyPress::from((KeyCode::Char('v'), KeyModifiers::CONTROL)))
        );
        assert_eq!(
            parse_key_str("shift+left"),
            Some(KeyPress::from((KeyCode::Left, KeyModifiers::SHIFT)))
        );
        assert_eq!(parse_key_str("home"), Some(KeyPress::from(KeyCode::Home)));
        assert_eq!(parse_key_str("a"), Some(KeyPress::from(KeyCode::Char('a'))));
        assert_eq!(
            parse_key_str("ctrl++"),
            Some(KeyPress::from((KeyCode::Char('+'), KeyModifiers::CONTROL)))
        );
        assert_eq!(parse_key_str("hyper+a"), None);
        assert_eq!(parse_key_str("f13"), None);
    }

    #[test]
    fn test_binding_matches_modifiers_exactly() {
        let left = new_binding(vec![with_keys_str(&["left"])]);
        assert!(left.matches(&KeyCode::Left, KeyModifiers::NONE));
        assert!(!left.matches(&KeyCode::Left, KeyModifiers::SHIFT));

        let select_left = new_binding(vec![with_keys_str(&["shift+left"])]);
        assert!(select_left.matches(&KeyCode::Left, KeyModifiers::SHIFT));
        assert!(!select_left.matches(&KeyCode::Left, KeyModifiers::NONE));
    }

    #[test]
    fn test_binding_letters_ignore_shift_and_case() {
        let paste = default_paste_binding();
        assert!(paste.matches(&KeyCode::Char('v'), KeyModifiers::CONTROL));
        assert!(paste.matches(
            &KeyCode::Char('V'),
            KeyModifiers::CONTROL | KeyModifiers::SHIFT
        ));
        assert!(!paste.matches(&KeyCode::Char('v'), KeyModifiers::NONE));
        assert!(!paste.matches(&KeyCode::Char('v'), KeyModifiers::ALT));
        assert_eq!(paste.help().key, "ctrl+v");

        let plain = Binding::new(vec![KeyCode::Char('q')]);
        assert!(plain.matches(&KeyCode::Char('q'), KeyModifiers::NONE));
        assert!(!plain.matches(&KeyCode::Char('Q'), KeyModifiers::SHIFT));
    }

    #[test]
    fn test_disabled_binding_matches_nothing() {
        let mut binding = new_binding(vec![
            with_keys_str(&["ctrl+x"]),
            with_help("ctrl+x", "cut"),
            with_disabled(),
        ]);
        assert!(!binding.enabled());
        assert!(!binding.matches(&KeyCode::Char('x'), KeyModifiers::CONTROL));

        binding.set_enabled(true);
        let msg = KeyMsg {
            key: KeyCode::Char('x'),
            modifiers: KeyModifiers::CONTROL,
        };
        assert!(matches_binding(&msg, &binding));

        binding.set_keys(vec![KeyCode::Delete]);
        assert!(!matches_binding(&msg, &binding));
        assert!(binding.matches(&KeyCode::Delete, KeyModifiers::NONE));
    }

    #[test]
    fn test_shortcut_modifiers() {
        assert!(has_shortcut_modifier(KeyModifiers::ALT));
        assert!(has_shortcut_modifier(KeyModifiers::META));
        assert!(!has_shortcut_modifier(KeyModifiers::SHIFT));
        assert!(!has_shortcut_modifier(KeyModifiers::NONE));
    }
}
