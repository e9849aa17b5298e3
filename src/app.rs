//! Root application component
//!
//! The App struct implements the Component trait, acting as the root component
//! that delegates event handling and rendering to child components.
//! Key events go to the topmost dialog when one is open, otherwise to the home
//! screen; after every update the dialog registry's pending close requests are
//! applied and the affected dialog components are dropped.

use crate::action::Action;
use crate::component::Component;
use crate::components::{HelpDialog, HomeComponent, QuitDialog, SnippetInfoDialog};
use crate::model::catalog::ActionKind;
use crate::model::dialog::{DialogKind, DialogRegistry};
use anyhow::Result;
use crossterm::event::KeyEvent;
use ratatui::{layout::Rect, Frame};
use tracing::debug;

/// Main application state - coordinates between components
pub struct App {
    /// Registry owning every open dialog
    pub dialogs: DialogRegistry,

    /// Flag to indicate the app should quit
    pub should_quit: bool,

    // ─────────────────────────────────────────────────────────────────────────
    // Child Components
    // ─────────────────────────────────────────────────────────────────────────
    pub home: HomeComponent,
    /// Dialog components live only while their dialog is open
    pub snippet_info: Option<SnippetInfoDialog>,
    pub help_dialog: Option<HelpDialog>,
    pub quit_dialog: Option<QuitDialog>,
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

impl App {
    /// Create a new App instance
    pub fn new() -> App {
        App {
            dialogs: DialogRegistry::new(),
            should_quit: false,
            home: HomeComponent::new(),
            snippet_info: None,
            help_dialog: None,
            quit_dialog: None,
        }
    }

    /// Drop the components whose dialogs the registry just closed
    fn reap_closed_dialogs(&mut self) {
        for id in self.dialogs.drain_close_requests() {
            debug!(?id, "dialog closed");
            if self.snippet_info.as_ref().is_some_and(|d| d.id() == id) {
                self.snippet_info = None;
            }
            if self.help_dialog.as_ref().is_some_and(|d| d.id() == id) {
                self.help_dialog = None;
            }
            if self.quit_dialog.as_ref().is_some_and(|d| d.id() == id) {
                self.quit_dialog = None;
            }
        }
    }
}

impl Component for App {
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        match self.dialogs.top().map(|d| d.kind) {
            Some(DialogKind::SnippetInfo) => match self.snippet_info.as_mut() {
                Some(dialog) => dialog.handle_key_event(key),
                None => Ok(None),
            },
            Some(DialogKind::Help) => match self.help_dialog.as_mut() {
                Some(dialog) => dialog.handle_key_event(key),
                None => Ok(None),
            },
            Some(DialogKind::QuitConfirm) => match self.quit_dialog.as_mut() {
                Some(dialog) => dialog.handle_key_event(key),
                None => Ok(None),
            },
            None => self.home.handle_key_event(key),
        }
    }

    fn update(&mut self, action: Action) -> Result<Option<Action>> {
        match action {
            // ─────────────────────────────────────────────────────────────────
            // App Lifecycle
            // ─────────────────────────────────────────────────────────────────
            Action::Tick => {}
            Action::Resize(_, _) => {}
            Action::ForceQuit => {
                self.should_quit = true;
            }

            // ─────────────────────────────────────────────────────────────────
            // Navigation (delegate to HomeComponent)
            // ─────────────────────────────────────────────────────────────────
            Action::NextItem => self.home.next(),
            Action::PrevItem => self.home.previous(),
            Action::FirstItem => self.home.select_first(),
            Action::LastItem => self.home.select_last(),

            // ─────────────────────────────────────────────────────────────────
            // Dialogs
            // ─────────────────────────────────────────────────────────────────
            Action::OpenActionInfo => {
                // Only the snippet validation action carries an info dialog
                let entry = self.home.selected_entry();
                if entry.kind == ActionKind::SnippetValidation && self.snippet_info.is_none() {
                    let handle = self.dialogs.open(DialogKind::SnippetInfo);
                    debug!(id = ?handle.id(), "snippet info dialog opened");
                    self.snippet_info = Some(SnippetInfoDialog::new(handle));
                }
            }
            Action::OpenHelp => {
                if self.help_dialog.is_none() {
                    let handle = self.dialogs.open(DialogKind::Help);
                    debug!(id = ?handle.id(), "help dialog opened");
                    self.help_dialog = Some(HelpDialog::new(handle));
                }
            }
            Action::OpenQuitDialog => {
                if self.quit_dialog.is_none() {
                    let handle = self.dialogs.open(DialogKind::QuitConfirm);
                    debug!(id = ?handle.id(), "quit dialog opened");
                    self.quit_dialog = Some(QuitDialog::new(handle));
                }
            }
            Action::AcknowledgeDialog => {
                // Acknowledgment always applies to the dialog receiving input
                match self.dialogs.top().map(|d| d.kind) {
                    Some(DialogKind::SnippetInfo) => {
                        if let Some(dialog) = &self.snippet_info {
                            dialog.acknowledge();
                        }
                    }
                    Some(DialogKind::Help) => {
                        if let Some(dialog) = &self.help_dialog {
                            dialog.acknowledge();
                        }
                    }
                    Some(DialogKind::QuitConfirm) => {
                        if let Some(dialog) = &self.quit_dialog {
                            dialog.acknowledge();
                        }
                    }
                    None => {}
                }
            }
        }

        self.reap_closed_dialogs();
        Ok(None)
    }

    fn draw(&mut self, frame: &mut Frame, area: Rect) -> Result<()> {
        self.home.draw(frame, area)?;

        // Draw the top dialog over the main view
        match self.dialogs.top().map(|d| d.kind) {
            Some(DialogKind::SnippetInfo) => {
                if let Some(dialog) = self.snippet_info.as_mut() {
                    dialog.draw(frame, area)?;
                }
            }
            Some(DialogKind::Help) => {
                if let Some(dialog) = self.help_dialog.as_mut() {
                    dialog.draw(frame, area)?;
                }
            }
            Some(DialogKind::QuitConfirm) => {
                if let Some(dialog) = self.quit_dialog.as_mut() {
                    dialog.draw(frame, area)?;
                }
            }
            None => {}
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn select_snippet_validation(app: &mut App) {
        while app.home.selected_entry().kind != ActionKind::SnippetValidation {
            app.home.next();
        }
    }

    #[test]
    fn test_info_dialog_opens_only_for_snippet_validation() {
        let mut app = App::new();

        // Default selection is the first catalog entry, which has no dialog
        app.update(Action::OpenActionInfo).unwrap();
        assert!(app.dialogs.is_empty());
        assert!(app.snippet_info.is_none());

        select_snippet_validation(&mut app);
        app.update(Action::OpenActionInfo).unwrap();
        assert_eq!(
            app.dialogs.top().map(|d| d.kind),
            Some(DialogKind::SnippetInfo)
        );
        assert!(app.snippet_info.is_some());
    }

    #[test]
    fn test_acknowledge_tears_down_info_dialog() {
        let mut app = App::new();
        select_snippet_validation(&mut app);
        app.update(Action::OpenActionInfo).unwrap();

        app.update(Action::AcknowledgeDialog).unwrap();

        assert!(app.dialogs.is_empty());
        assert!(app.snippet_info.is_none());
        assert!(!app.should_quit);
    }

    #[test]
    fn test_acknowledge_applies_to_top_dialog_only() {
        let mut app = App::new();
        select_snippet_validation(&mut app);
        app.update(Action::OpenActionInfo).unwrap();
        app.update(Action::OpenHelp).unwrap();

        // Help is on top; acknowledging must not touch the info dialog
        app.update(Action::AcknowledgeDialog).unwrap();

        assert!(app.help_dialog.is_none());
        assert!(app.snippet_info.is_some());
        assert_eq!(
            app.dialogs.top().map(|d| d.kind),
            Some(DialogKind::SnippetInfo)
        );
    }

    #[test]
    fn test_quit_dialog_cancel_keeps_running() {
        let mut app = App::new();
        app.update(Action::OpenQuitDialog).unwrap();
        app.update(Action::AcknowledgeDialog).unwrap();

        assert!(!app.should_quit);
        assert!(app.dialogs.is_empty());
        assert!(app.quit_dialog.is_none());
    }

    #[test]
    fn test_force_quit_sets_flag() {
        let mut app = App::new();
        app.update(Action::OpenQuitDialog).unwrap();
        app.update(Action::ForceQuit).unwrap();

        assert!(app.should_quit);
    }

    #[test]
    fn test_open_action_info_is_idempotent_while_open() {
        let mut app = App::new();
        select_snippet_validation(&mut app);
        app.update(Action::OpenActionInfo).unwrap();
        app.update(Action::OpenActionInfo).unwrap();

        app.update(Action::AcknowledgeDialog).unwrap();
        assert!(app.dialogs.is_empty());
    }
}
