//! Core model for the masked input adapter.

use std::sync::atomic::{AtomicUsize, Ordering};

use super::clipboard::{default_source, ClipboardSource};
use super::element::{InputElement, ListenerId};
use super::options::MaskOptions;
use super::types::EventKind;
use crate::key::{default_paste_binding, Binding};
use crate::mask::{InputMask, MaskEngine, PatternError};

// Used to ensure that selection sync messages only reach the adapter that sent them.
static LAST_ID: AtomicUsize = AtomicUsize::new(0);

fn next_id() -> usize {
    LAST_ID.fetch_add(1, Ordering::Relaxed)
}

/// Binds a mask engine to one input element.
///
/// The adapter keeps the element's text equal to the engine's formatted value
/// (or empty while nothing has been entered) and mirrors the selection both
/// ways around every edit. All formatting decisions belong to the engine.
///
/// # Examples
///
/// ```rust
/// use masked_input::maskedinput::{InputEvent, KeyboardEvent, MaskedInput};
/// use masked_input::textfield::TextField;
/// use crossterm::event::{KeyCode, KeyModifiers};
///
/// let mut input = MaskedInput::new(TextField::new(), "(111) 111-1111").unwrap();
/// assert_eq!(input.element().value(), "");
///
/// for ch in "555".chars() {
///     let mut event = InputEvent::KeyPress(KeyboardEvent::new(KeyCode::Char(ch), KeyModifiers::NONE));
///     input.dispatch(&mut event);
///     assert!(event.default_prevented());
/// }
/// assert_eq!(input.element().value(), "(555) ___-____");
/// ```
pub struct MaskedInput<E: InputElement, M: MaskEngine = InputMask> {
    /// Shortcut that reads the system clipboard in [`update`](MaskedInput::update).
    pub paste_key: Binding,
    /// The last clipboard read failure, cleared by the next successful paste.
    pub err: Option<String>,

    pub(super) element: E,
    pub(super) mask: M,
    pub(super) id: usize,
    pub(super) defer_paste_selection: bool,
    pub(super) legacy_clipboard: Option<Box<dyn ClipboardSource>>,
    pub(super) listeners: Vec<(EventKind, ListenerId)>,
}

impl<E: InputElement> MaskedInput<E, InputMask> {
    /// Masks `element` with `pattern` and the default placeholder `_`.
    ///
    /// # Errors
    ///
    /// Returns the engine's [`PatternError`] for an unusable pattern.
    pub fn new(element: E, pattern: &str) -> Result<Self, PatternError> {
        Self::with_options(element, MaskOptions::new(pattern))
    }

    /// Masks `element` according to `options`.
    ///
    /// The element's current text seeds the engine, so a prefilled input keeps
    /// whatever part of its value fits the pattern.
    ///
    /// # Errors
    ///
    /// Returns the engine's [`PatternError`] for an unusable pattern.
    pub fn with_options(element: E, options: MaskOptions) -> Result<Self, PatternError> {
        let mask = InputMask::new(&options.pattern, &element.value(), options.placeholder_char)?;
        let mut input = Self::with_engine(element, mask);
        input.defer_paste_selection = options.defer_paste_selection;
        Ok(input)
    }
}

impl<E: InputElement, M: MaskEngine> MaskedInput<E, M> {
    /// Binds an already constructed engine to `element`.
    ///
    /// Listeners for every [`EventKind`] are registered on the element and
    /// its text is replaced with the engine's display value.
    pub fn with_engine(mut element: E, mask: M) -> Self {
        let listeners = EventKind::ALL
            .iter()
            .map(|&kind| (kind, element.add_listener(kind)))
            .collect();

        let mut input = Self {
            paste_key: default_paste_binding(),
            err: None,
            element,
            mask,
            id: next_id(),
            defer_paste_selection: true,
            legacy_clipboard: default_source(),
            listeners,
        };

        let value = input.display_value();
        input.element.set_value(&value);
        tracing::debug!(id = input.id, value = %value, "masked input attached");
        input
    }

    /// Unique id of this adapter, used to address [`SelectionSyncMsg`](super::SelectionSyncMsg)s.
    pub fn id(&self) -> usize {
        self.id
    }

    /// The bound element.
    pub fn element(&self) -> &E {
        &self.element
    }

    /// Mutable access to the bound element, for host-side edits.
    pub fn element_mut(&mut self) -> &mut E {
        &mut self.element
    }

    /// The mask engine.
    pub fn mask(&self) -> &M {
        &self.mask
    }

    /// Whether the post-paste selection sync is deferred.
    pub fn defers_paste_selection(&self) -> bool {
        self.defer_paste_selection
    }

    /// See [`MaskOptions::defer_paste_selection`].
    pub fn set_defer_paste_selection(&mut self, defer: bool) {
        self.defer_paste_selection = defer;
    }

    /// Replaces the clipboard consulted when a paste event has no data.
    pub fn set_legacy_clipboard(&mut self, source: Option<Box<dyn ClipboardSource>>) {
        self.legacy_clipboard = source;
    }

    /// The text the element should show: the formatted value, or nothing
    /// while it equals the engine's empty value.
    pub fn display_value(&self) -> String {
        let value = self.mask.value();
        if value == self.mask.empty_value() {
            String::new()
        } else {
            value
        }
    }

    /// Whether this adapter still listens for `kind` events.
    pub fn is_listening(&self, kind: EventKind) -> bool {
        self.listeners.iter().any(|(k, _)| *k == kind)
    }

    /// Whether the adapter has been detached from its element.
    pub fn is_detached(&self) -> bool {
        self.listeners.is_empty()
    }

    /// Removes every listener this adapter registered.
    ///
    /// Events dispatched afterwards are ignored. The element keeps its current
    /// text. Dropping the adapter detaches it as well.
    pub fn detach(&mut self) {
        if self.listeners.is_empty() {
            return;
        }
        for (kind, id) in self.listeners.drain(..) {
            if !self.element.remove_listener(id) {
                tracing::warn!(id = self.id, %kind, "listener already removed");
            }
        }
        tracing::debug!(id = self.id, "masked input detached");
    }
}

impl<E: InputElement, M: MaskEngine> Drop for MaskedInput<E, M> {
    fn drop(&mut self) {
        self.detach();
    }
}

impl<E: InputElement + std::fmt::Debug, M: MaskEngine> std::fmt::Debug for MaskedInput<E, M> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MaskedInput")
            .field("id", &self.id)
            .field("element", &self.element)
            .field("value", &self.mask.value())
            .field("selection", &self.mask.selection())
            .field("listeners", &self.listeners)
            .field("err", &self.err)
            .finish()
    }
}
