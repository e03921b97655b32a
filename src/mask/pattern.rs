//! Mask pattern parsing.
//!
//! A pattern is a template of literal characters and editable slots. Each
//! editable slot is named by a format character:
//!
//! | Char | Accepts | Transform |
//! |------|---------|-----------|
//! | `1` | ASCII digit | none |
//! | `a` | ASCII letter | none |
//! | `A` | ASCII letter | upper-case |
//! | `*` | ASCII alphanumeric | none |
//! | `#` | ASCII alphanumeric | upper-case |
//!
//! A backslash makes the next character a literal, so `\1` renders as `1`.

use std::collections::HashMap;

const ESCAPE_CHAR: char = '\\';

/// Errors produced while parsing a mask pattern.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PatternError {
    /// The pattern has no slot a user could type into.
    #[error("pattern {pattern:?} does not contain any editable characters")]
    NoEditableCharacters {
        /// The offending pattern.
        pattern: String,
    },
    /// The pattern ends with a backslash that escapes nothing.
    #[error("pattern {pattern:?} ends with an unfinished escape")]
    DanglingEscape {
        /// The offending pattern.
        pattern: String,
    },
}

/// Validation and optional transform for one format character.
#[derive(Debug, Clone, Copy)]
pub struct FormatCharacter {
    validate: fn(char) -> bool,
    transform: Option<fn(char) -> char>,
}

impl FormatCharacter {
    /// A format character accepting whatever `validate` accepts.
    pub fn new(validate: fn(char) -> bool) -> Self {
        Self {
            validate,
            transform: None,
        }
    }

    /// Rewrites accepted characters with `transform` before storing them.
    pub fn with_transform(mut self, transform: fn(char) -> char) -> Self {
        self.transform = Some(transform);
        self
    }

    /// Returns true if `ch` may be stored in a slot of this kind.
    pub fn accepts(&self, ch: char) -> bool {
        (self.validate)(ch)
    }

    /// Applies the transform, if any.
    pub fn apply(&self, ch: char) -> char {
        match self.transform {
            Some(transform) => transform(ch),
            None => ch,
        }
    }
}

/// The set of format characters recognized while parsing a pattern.
#[derive(Debug, Clone)]
pub struct FormatCharacters {
    chars: HashMap<char, FormatCharacter>,
}

impl Default for FormatCharacters {
    fn default() -> Self {
        let mut chars = HashMap::new();
        chars.insert('1', FormatCharacter::new(|c| c.is_ascii_digit()));
        chars.insert('a', FormatCharacter::new(|c| c.is_ascii_alphabetic()));
        chars.insert(
            'A',
            FormatCharacter::new(|c| c.is_ascii_alphabetic()).with_transform(|c| c.to_ascii_uppercase()),
        );
        chars.insert('*', FormatCharacter::new(|c| c.is_ascii_alphanumeric()));
        chars.insert(
            '#',
            FormatCharacter::new(|c| c.is_ascii_alphanumeric())
                .with_transform(|c| c.to_ascii_uppercase()),
        );
        Self { chars }
    }
}

impl FormatCharacters {
    /// Registers or replaces a format character.
    pub fn insert(&mut self, name: char, format: FormatCharacter) -> &mut Self {
        self.chars.insert(name, format);
        self
    }

    /// Looks up a format character by name.
    pub fn get(&self, name: char) -> Option<&FormatCharacter> {
        self.chars.get(&name)
    }
}

#[derive(Debug, Clone)]
enum Slot {
    Literal(char),
    Editable(FormatCharacter),
}

/// A parsed mask pattern.
#[derive(Debug, Clone)]
pub struct Pattern {
    source: String,
    slots: Vec<Slot>,
    placeholder_char: char,
    first_editable: usize,
    last_editable: usize,
}

impl Pattern {
    /// Parses `source` with the default format characters.
    pub fn parse(source: &str, placeholder_char: char) -> Result<Self, PatternError> {
        Self::parse_with(source, placeholder_char, &FormatCharacters::default())
    }

    /// Parses `source` with a custom format character set.
    pub fn parse_with(
        source: &str,
        placeholder_char: char,
        formats: &FormatCharacters,
    ) -> Result<Self, PatternError> {
        let mut slots = Vec::with_capacity(source.len());
        let mut chars = source.chars();

        while let Some(ch) = chars.next() {
            if ch == ESCAPE_CHAR {
                match chars.next() {
                    Some(escaped) => slots.push(Slot::Literal(escaped)),
                    None => {
                        return Err(PatternError::DanglingEscape {
                            pattern: source.to_string(),
                        })
                    }
                }
            } else if let Some(format) = formats.get(ch) {
                slots.push(Slot::Editable(*format));
            } else {
                slots.push(Slot::Literal(ch));
            }
        }

        let editable = |slot: &Slot| matches!(slot, Slot::Editable(_));
        let (first_editable, last_editable) = match (
            slots.iter().position(editable),
            slots.iter().rposition(editable),
        ) {
            (Some(first), Some(last)) => (first, last),
            _ => {
                return Err(PatternError::NoEditableCharacters {
                    pattern: source.to_string(),
                })
            }
        };

        Ok(Self {
            source: source.to_string(),
            slots,
            placeholder_char,
            first_editable,
            last_editable,
        })
    }

    /// The pattern text as given.
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Number of character positions in a formatted value.
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Patterns always contain at least one editable slot.
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Character shown in editable slots that hold no input.
    pub fn placeholder_char(&self) -> char {
        self.placeholder_char
    }

    /// Index of the first editable slot.
    pub fn first_editable_index(&self) -> usize {
        self.first_editable
    }

    /// Index of the last editable slot.
    pub fn last_editable_index(&self) -> usize {
        self.last_editable
    }

    /// Returns true if position `index` accepts user input.
    pub fn is_editable_index(&self, index: usize) -> bool {
        matches!(self.slots.get(index), Some(Slot::Editable(_)))
    }

    /// Returns the literal at `index`, or `None` for editable slots.
    pub fn literal_at(&self, index: usize) -> Option<char> {
        match self.slots.get(index) {
            Some(Slot::Literal(ch)) => Some(*ch),
            _ => None,
        }
    }

    /// Returns true if `ch` may be stored at editable position `index`.
    pub fn is_valid_at_index(&self, ch: char, index: usize) -> bool {
        match self.slots.get(index) {
            Some(Slot::Editable(format)) => format.accepts(ch),
            _ => false,
        }
    }

    /// Applies the slot's transform to `ch`.
    pub fn transform(&self, ch: char, index: usize) -> char {
        match self.slots.get(index) {
            Some(Slot::Editable(format)) => format.apply(ch),
            _ => ch,
        }
    }

    /// Lays raw input over the pattern.
    ///
    /// Editable slots consume input characters in order, keeping valid ones
    /// and falling back to the placeholder. Input characters equal to a
    /// literal at the same position are consumed by that literal, so already
    /// formatted values survive a round trip.
    pub fn format_value(&self, raw: &[char]) -> Vec<char> {
        let mut formatted = Vec::with_capacity(self.slots.len());
        let mut raw_index = 0;

        for slot in &self.slots {
            match slot {
                Slot::Editable(format) => {
                    let ch = match raw.get(raw_index) {
                        Some(&ch) if format.accepts(ch) => format.apply(ch),
                        _ => self.placeholder_char,
                    };
                    formatted.push(ch);
                    raw_index += 1;
                }
                Slot::Literal(literal) => {
                    formatted.push(*literal);
                    if raw.get(raw_index) == Some(literal) {
                        raw_index += 1;
                    }
                }
            }
        }

        formatted
    }
}
