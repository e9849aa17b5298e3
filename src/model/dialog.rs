//! Dialog registry for managing modal overlays
//!
//! The registry owns every open dialog and is the only place where one is
//! actually closed. Dialog components hold a non-owning [`DialogHandle`] and
//! request closure through it; requests are queued on a channel and applied by
//! the host between events, so a request for a dialog that is already gone is
//! simply dropped.

use std::sync::mpsc::{self, Receiver, Sender};

/// Identifier for one open dialog instance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DialogId(u64);

/// The modal surfaces the app can display on top of the main view
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogKind {
    /// Usage instructions for the snippet validation action
    SnippetInfo,
    /// Keyboard shortcut reference
    Help,
    /// Quit confirmation
    QuitConfirm,
}

/// Non-owning reference to one open dialog
///
/// Handed out by [`DialogRegistry::open`] and held by the dialog component for
/// its whole lifetime. Dropping the handle does not close the dialog; the only
/// effect a holder can have is [`DialogHandle::close`].
#[derive(Debug, Clone)]
pub struct DialogHandle {
    id: DialogId,
    close_tx: Sender<DialogId>,
}

impl DialogHandle {
    pub fn id(&self) -> DialogId {
        self.id
    }

    /// Ask the issuing registry to close this dialog.
    ///
    /// Never fails. If the registry is gone, or the dialog was already closed
    /// by the time requests are drained, the request is discarded.
    pub fn close(&self) {
        let _ = self.close_tx.send(self.id);
    }
}

/// One entry on the dialog stack
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OpenDialog {
    pub id: DialogId,
    pub kind: DialogKind,
}

/// Owner of all open dialogs
///
/// Dialogs form a stack: only the top one receives input. Components never
/// mutate the stack directly; they send close requests through their handle
/// and the host applies them via [`DialogRegistry::drain_close_requests`].
#[derive(Debug)]
pub struct DialogRegistry {
    stack: Vec<OpenDialog>,
    next_id: u64,
    close_tx: Sender<DialogId>,
    close_rx: Receiver<DialogId>,
}

impl Default for DialogRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl DialogRegistry {
    pub fn new() -> Self {
        let (close_tx, close_rx) = mpsc::channel();
        Self {
            stack: Vec::new(),
            next_id: 0,
            close_tx,
            close_rx,
        }
    }

    /// Open a dialog and return the handle its component will hold
    pub fn open(&mut self, kind: DialogKind) -> DialogHandle {
        let id = DialogId(self.next_id);
        self.next_id += 1;
        self.stack.push(OpenDialog { id, kind });
        DialogHandle {
            id,
            close_tx: self.close_tx.clone(),
        }
    }

    /// The dialog currently receiving input, if any
    pub fn top(&self) -> Option<OpenDialog> {
        self.stack.last().copied()
    }

    /// Whether a dialog with the given id is still on the stack
    pub fn is_open(&self, id: DialogId) -> bool {
        self.stack.iter().any(|d| d.id == id)
    }

    /// Check if the stack is empty
    pub fn is_empty(&self) -> bool {
        self.stack.is_empty()
    }

    /// Apply queued close requests, returning the dialogs actually closed.
    ///
    /// A request naming an id that is no longer on the stack is ignored, so
    /// closing the same dialog twice removes it exactly once.
    pub fn drain_close_requests(&mut self) -> Vec<DialogId> {
        let mut closed = Vec::new();
        while let Ok(id) = self.close_rx.try_recv() {
            if let Some(pos) = self.stack.iter().position(|d| d.id == id) {
                self.stack.remove(pos);
                closed.push(id);
            }
        }
        closed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_stacks_dialogs_with_unique_ids() {
        let mut registry = DialogRegistry::new();
        assert!(registry.is_empty());

        let help = registry.open(DialogKind::Help);
        let quit = registry.open(DialogKind::QuitConfirm);

        assert_ne!(help.id(), quit.id());
        assert_eq!(
            registry.top(),
            Some(OpenDialog {
                id: quit.id(),
                kind: DialogKind::QuitConfirm
            })
        );
    }

    #[test]
    fn test_close_request_removes_dialog() {
        let mut registry = DialogRegistry::new();
        let handle = registry.open(DialogKind::SnippetInfo);

        handle.close();
        assert_eq!(registry.drain_close_requests(), vec![handle.id()]);
        assert!(registry.is_empty());
    }

    #[test]
    fn test_duplicate_close_requests_remove_once() {
        let mut registry = DialogRegistry::new();
        let handle = registry.open(DialogKind::Help);

        handle.close();
        handle.close();
        assert_eq!(registry.drain_close_requests(), vec![handle.id()]);
        assert!(registry.drain_close_requests().is_empty());
    }

    #[test]
    fn test_closing_lower_dialog_keeps_top() {
        let mut registry = DialogRegistry::new();
        let help = registry.open(DialogKind::Help);
        let quit = registry.open(DialogKind::QuitConfirm);

        help.close();
        assert_eq!(registry.drain_close_requests(), vec![help.id()]);
        assert!(registry.is_open(quit.id()));
        assert_eq!(registry.top().map(|d| d.kind), Some(DialogKind::QuitConfirm));
    }

    #[test]
    fn test_stale_close_after_drain_is_ignored() {
        let mut registry = DialogRegistry::new();
        let handle = registry.open(DialogKind::SnippetInfo);
        let survivor = registry.open(DialogKind::Help);

        handle.close();
        registry.drain_close_requests();

        // The dialog is gone; a second request through the old handle
        // must not touch anything else on the stack.
        handle.close();
        assert!(registry.drain_close_requests().is_empty());
        assert!(registry.is_open(survivor.id()));
    }
}
