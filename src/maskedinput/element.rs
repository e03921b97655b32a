//! The element side of a masked input.
//!
//! An [`InputElement`] is anything holding editable text: the terminal
//! [`TextField`](crate::textfield::TextField), or a host's handle to a native
//! widget. Selection support is a capability: elements that cannot report
//! their selection return `None` from [`InputElement::native_selection`] and
//! the adapter skips selection syncing for them.

use super::types::{EventKind, KeyboardEvent};

/// Identifies one registered listener on an element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

/// A set of registered listeners, for elements to embed.
#[derive(Debug, Clone, Default)]
pub struct Listeners {
    next_id: u64,
    entries: Vec<(ListenerId, EventKind)>,
}

impl Listeners {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a listener for `kind`.
    pub fn add(&mut self, kind: EventKind) -> ListenerId {
        let id = ListenerId(self.next_id);
        self.next_id += 1;
        self.entries.push((id, kind));
        id
    }

    /// Removes the listener `id`. Returns false if it was not registered.
    pub fn remove(&mut self, id: ListenerId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|(entry, _)| *entry != id);
        self.entries.len() != before
    }

    /// Whether any listener is registered for `kind`.
    pub fn is_listening(&self, kind: EventKind) -> bool {
        self.entries.iter().any(|(_, k)| *k == kind)
    }

    /// Number of registered listeners.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when nothing is registered.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Native selection offsets of an element, in characters.
pub trait NativeSelection {
    /// Start of the selection, or the caret.
    fn selection_start(&self) -> usize;
    /// End of the selection.
    fn selection_end(&self) -> usize;
    /// Moves the selection start.
    fn set_selection_start(&mut self, start: usize);
    /// Moves the selection end.
    fn set_selection_end(&mut self, end: usize);
}

/// A text input element a mask can be bound to.
pub trait InputElement {
    /// The raw text currently displayed.
    fn value(&self) -> String;

    /// Replaces the displayed text.
    fn set_value(&mut self, value: &str);

    /// Access to the native selection, if the element has one.
    fn native_selection(&mut self) -> Option<&mut dyn NativeSelection> {
        None
    }

    /// Registers interest in `kind` events.
    fn add_listener(&mut self, kind: EventKind) -> ListenerId;

    /// Drops a registration made by [`InputElement::add_listener`].
    fn remove_listener(&mut self, id: ListenerId) -> bool;

    /// Whether events of `kind` should be routed to listeners.
    fn has_listener(&self, kind: EventKind) -> bool;

    /// Whether keyboard input is currently directed at this element.
    fn has_focus(&self) -> bool {
        true
    }

    /// Runs the element's own behavior for a key nobody prevented.
    ///
    /// Returns true if the displayed text changed, in which case a change
    /// event follows.
    fn perform_default(&mut self, _event: &KeyboardEvent) -> bool {
        false
    }
}

impl<T: InputElement + ?Sized> InputElement for &mut T {
    fn value(&self) -> String {
        (**self).value()
    }

    fn set_value(&mut self, value: &str) {
        (**self).set_value(value)
    }

    fn native_selection(&mut self) -> Option<&mut dyn NativeSelection> {
        (**self).native_selection()
    }

    fn add_listener(&mut self, kind: EventKind) -> ListenerId {
        (**self).add_listener(kind)
    }

    fn remove_listener(&mut self, id: ListenerId) -> bool {
        (**self).remove_listener(id)
    }

    fn has_listener(&self, kind: EventKind) -> bool {
        (**self).has_listener(kind)
    }

    fn has_focus(&self) -> bool {
        (**self).has_focus()
    }

    fn perform_default(&mut self, event: &KeyboardEvent) -> bool {
        (**self).perform_default(event)
    }
}
