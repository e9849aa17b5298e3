//! Snippet validation info dialog component
//!
//! Shows the one-time device setup and usage instructions for the snippet
//! validation action. The content is fixed; the only interaction is the
//! user acknowledging it, which asks the dialog registry to close the
//! dialog through the handle injected at construction.

use crate::action::Action;
use crate::component::Component;
use crate::components::centered_popup;
use crate::model::dialog::{DialogHandle, DialogId};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};
use unicode_width::UnicodeWidthStr;

/// Snippet validation usage dialog
///
/// Holds the handle for the dialog it lives in; the handle is set once here
/// and never replaced.
pub struct SnippetInfoDialog {
    handle: DialogHandle,
}

impl SnippetInfoDialog {
    pub fn new(handle: DialogHandle) -> Self {
        Self { handle }
    }

    pub fn id(&self) -> DialogId {
        self.handle.id()
    }

    /// The user accepted the message; ask the registry to close this dialog.
    ///
    /// Sends exactly one close request per call. What happens to a request
    /// for an already-closed dialog is the registry's decision, not ours.
    pub fn acknowledge(&self) {
        self.handle.close();
    }
}

impl Component for SnippetInfoDialog {
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        let action = match key.code {
            KeyCode::Enter | KeyCode::Esc | KeyCode::Char('q') => {
                Some(Action::AcknowledgeDialog)
            }
            _ => None,
        };
        Ok(action)
    }

    fn draw(&mut self, frame: &mut Frame, area: Rect) -> Result<()> {
        let content = build_info_content();

        // Size the popup to the widest content line, clamped to the screen
        let content_width = content
            .iter()
            .map(|line| {
                line.spans
                    .iter()
                    .map(|span| span.content.width())
                    .sum::<usize>()
            })
            .max()
            .unwrap_or(0) as u16;
        let width = (content_width + 6).min(area.width);
        let height = (content.len() as u16 + 2).min(area.height);

        let popup_area = centered_popup(area, width, height);
        frame.render_widget(Clear, popup_area);

        let paragraph = Paragraph::new(content).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan))
                .title(" Snippet Validation ")
                .title_style(
                    Style::default()
                        .fg(Color::Cyan)
                        .add_modifier(Modifier::BOLD),
                ),
        );

        frame.render_widget(paragraph, popup_area);
        Ok(())
    }
}

/// Build the instructional content shown in the dialog
fn build_info_content() -> Vec<Line<'static>> {
    let heading = |text: &'static str| {
        Line::from(Span::styled(
            format!("  {}", text),
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        ))
    };
    let step = |text: &'static str| {
        Line::from(Span::styled(
            format!("  {}", text),
            Style::default().fg(Color::White),
        ))
    };
    let note = |text: &'static str| {
        Line::from(Span::styled(
            format!("  {}", text),
            Style::default().fg(Color::DarkGray),
        ))
    };

    vec![
        Line::from(""),
        step("Runs a Mobly snippet RPC on the device and validates the result."),
        Line::from(""),
        heading("Setup"),
        step("1. Build the snippet APK against the Mobly snippet library and"),
        step("   install it:  adb install -r <your-snippet>.apk"),
        step("2. Package name: the applicationId of the installed snippet APK,"),
        step("   e.g. com.example.snippet"),
        step("3. Method: the @Rpc method to invoke, with arguments as a JSON"),
        step("   array, e.g. [\"wifi\", 5]"),
        step("4. Expected value: the action passes when the method's return"),
        step("   value matches it exactly."),
        Line::from(""),
        heading("Notes"),
        step("The snippet server is started over adb before the first call;"),
        step("each invocation honors the per-action execution timeout."),
        Line::from(""),
        note("Press Enter or Esc to close"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::dialog::{DialogKind, DialogRegistry};

    #[test]
    fn test_acknowledge_closes_own_dialog_once() {
        let mut registry = DialogRegistry::new();
        let dialog = SnippetInfoDialog::new(registry.open(DialogKind::SnippetInfo));

        dialog.acknowledge();

        assert_eq!(registry.drain_close_requests(), vec![dialog.id()]);
        assert!(registry.is_empty());
    }

    #[test]
    fn test_acknowledge_leaves_other_dialogs_untouched() {
        let mut registry = DialogRegistry::new();
        let first = SnippetInfoDialog::new(registry.open(DialogKind::SnippetInfo));
        let second = SnippetInfoDialog::new(registry.open(DialogKind::SnippetInfo));

        first.acknowledge();

        assert_eq!(registry.drain_close_requests(), vec![first.id()]);
        assert!(registry.is_open(second.id()));
    }

    #[test]
    fn test_repeated_acknowledge_is_absorbed_by_registry() {
        let mut registry = DialogRegistry::new();
        let dialog = SnippetInfoDialog::new(registry.open(DialogKind::SnippetInfo));

        dialog.acknowledge();
        dialog.acknowledge();

        // Two requests arrive, the registry closes the dialog exactly once
        assert_eq!(registry.drain_close_requests(), vec![dialog.id()]);
        assert!(registry.drain_close_requests().is_empty());
    }

    #[test]
    fn test_acknowledge_never_fails_without_registry() {
        let mut registry = DialogRegistry::new();
        let dialog = SnippetInfoDialog::new(registry.open(DialogKind::SnippetInfo));
        drop(registry);

        // The registry is gone; the request goes nowhere, without error
        dialog.acknowledge();
    }

    #[test]
    fn test_dialog_stays_open_without_acknowledgment() {
        let mut registry = DialogRegistry::new();
        let mut dialog = SnippetInfoDialog::new(registry.open(DialogKind::SnippetInfo));

        // Keys that are not an acknowledgment must not request closure
        dialog.handle_key_event(KeyEvent::from(KeyCode::Char('x'))).unwrap();
        dialog.handle_key_event(KeyEvent::from(KeyCode::Down)).unwrap();

        assert!(registry.drain_close_requests().is_empty());
        assert!(registry.is_open(dialog.id()));
    }

    #[test]
    fn test_info_content_covers_setup_steps() {
        let text: String = build_info_content()
            .iter()
            .flat_map(|line| line.spans.iter())
            .map(|span| span.content.as_ref())
            .collect::<Vec<_>>()
            .join("\n");

        assert!(text.contains("Mobly"));
        assert!(text.contains("adb install"));
        assert!(text.contains("Expected value"));
    }
}
