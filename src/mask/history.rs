//! Undo/redo history for [`InputMask`](super::InputMask).
//!
//! Consecutive edits of the same kind that continue from where the previous
//! one left the caret share a single history entry, so undo reverts a typed
//! run or a run of backspaces in one step.

use super::selection::Selection;

/// Kind of the last mutating operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum EditOp {
    Input,
    Backspace,
}

#[derive(Debug, Clone)]
struct Entry {
    value: Vec<char>,
    selection: Selection,
    last_op: Option<EditOp>,
    // Pushed by the first undo only so redo can get back to where it started.
    start_undo: bool,
}

/// A restored `(value, selection)` pair.
pub(crate) type Snapshot = (Vec<char>, Selection);

#[derive(Debug, Clone, Default)]
pub(crate) struct History {
    entries: Vec<Entry>,
    index: Option<usize>,
    last_op: Option<EditOp>,
    last_selection: Option<Selection>,
}

impl History {
    /// Records the state preceding an edit of kind `op`.
    pub(crate) fn record(
        &mut self,
        op: EditOp,
        value_before: &[char],
        selection_before: Selection,
        selection_after: Selection,
    ) {
        // Editing after an undo discards everything that could have been redone.
        if let Some(index) = self.index.take() {
            self.entries.truncate(index);
        }

        let continues_run = self.last_op == Some(op)
            && selection_before.is_collapsed()
            && self
                .last_selection
                .map_or(true, |last| last.start == selection_before.start);

        if !continues_run {
            self.entries.push(Entry {
                value: value_before.to_vec(),
                selection: selection_before,
                last_op: self.last_op,
                start_undo: false,
            });
        }

        self.last_op = Some(op);
        self.last_selection = Some(selection_after);
    }

    pub(crate) fn undo(&mut self, current: &[char], selection: Selection) -> Option<Snapshot> {
        if self.entries.is_empty() || self.index == Some(0) {
            return None;
        }

        let index = match self.index {
            Some(index) => index - 1,
            None => {
                let index = self.entries.len() - 1;
                let latest = &self.entries[index];
                if latest.value != current || latest.selection != selection {
                    self.entries.push(Entry {
                        value: current.to_vec(),
                        selection,
                        last_op: self.last_op,
                        start_undo: true,
                    });
                }
                index
            }
        };

        self.index = Some(index);
        Some(self.restore(index))
    }

    pub(crate) fn redo(&mut self) -> Option<Snapshot> {
        let index = self.index? + 1;
        if index >= self.entries.len() {
            return None;
        }

        let snapshot = self.restore(index);
        if index == self.entries.len() - 1 {
            self.index = None;
            if self.entries[index].start_undo {
                self.entries.pop();
            }
        } else {
            self.index = Some(index);
        }
        Some(snapshot)
    }

    fn restore(&mut self, index: usize) -> Snapshot {
        let entry = &self.entries[index];
        self.last_op = entry.last_op;
        (entry.value.clone(), entry.selection)
    }

    #[cfg(test)]
    pub(crate) fn len(&self) -> usize {
        self.entries.len()
    }
}
