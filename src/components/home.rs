//! Home component - Main application screen
//!
//! Displays the advanced action catalog on the left and a detail panel for
//! the selected action on the right. Owns navigation state and logic.

use crate::action::Action;
use crate::component::Component;
use crate::components::calculate_main_layout;
use crate::model::catalog::{catalog, ActionEntry, ActionKind};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
    Frame,
};

/// Home component for the main application view
///
/// Owns navigation state and handles catalog list interactions
pub struct HomeComponent {
    /// List selection state
    pub list_state: ListState,
}

impl Default for HomeComponent {
    fn default() -> Self {
        Self::new()
    }
}

impl HomeComponent {
    pub fn new() -> Self {
        let mut list_state = ListState::default();
        list_state.select(Some(0));
        Self { list_state }
    }

    /// The catalog entry under the cursor
    pub fn selected_entry(&self) -> &'static ActionEntry {
        let idx = self.list_state.selected().unwrap_or(0);
        &catalog()[idx.min(catalog().len() - 1)]
    }

    pub fn next(&mut self) {
        let idx = self.list_state.selected().unwrap_or(0);
        let max = catalog().len() - 1;
        self.list_state.select(Some((idx + 1).min(max)));
    }

    pub fn previous(&mut self) {
        let idx = self.list_state.selected().unwrap_or(0);
        self.list_state.select(Some(idx.saturating_sub(1)));
    }

    pub fn select_first(&mut self) {
        self.list_state.select(Some(0));
    }

    pub fn select_last(&mut self) {
        self.list_state.select(Some(catalog().len() - 1));
    }
}

impl Component for HomeComponent {
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        let action = match key.code {
            KeyCode::Char('j') | KeyCode::Down => Some(Action::NextItem),
            KeyCode::Char('k') | KeyCode::Up => Some(Action::PrevItem),
            KeyCode::Char('g') => Some(Action::FirstItem),
            KeyCode::Char('G') => Some(Action::LastItem),
            KeyCode::Char('i') | KeyCode::Enter => Some(Action::OpenActionInfo),
            KeyCode::Char('?') => Some(Action::OpenHelp),
            KeyCode::Char('q') | KeyCode::Esc => Some(Action::OpenQuitDialog),
            _ => None,
        };
        Ok(action)
    }

    fn draw(&mut self, frame: &mut Frame, area: Rect) -> Result<()> {
        let layout = calculate_main_layout(area);

        // Action list
        let items: Vec<ListItem> = catalog()
            .iter()
            .map(|entry| {
                let badge = if entry.is_validator {
                    Span::styled(" [validator]", Style::default().fg(Color::Green))
                } else {
                    Span::raw("")
                };
                ListItem::new(Line::from(vec![Span::raw(entry.name), badge]))
            })
            .collect();

        let list = List::new(items)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(" Advanced Actions ")
                    .title_style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)),
            )
            .highlight_style(
                Style::default()
                    .bg(Color::DarkGray)
                    .add_modifier(Modifier::BOLD),
            )
            .highlight_symbol("> ");

        frame.render_stateful_widget(list, layout.list, &mut self.list_state);

        // Detail panel
        let entry = self.selected_entry();
        let detail = render_action_detail(entry);
        let paragraph = Paragraph::new(detail).block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!(" {} ", entry.name))
                .title_style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)),
        );
        frame.render_widget(paragraph, layout.detail);

        // Help bar
        let help = Paragraph::new(Line::from(vec![
            Span::styled(
                " j/k ",
                Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
            ),
            Span::raw("Navigate  "),
            Span::styled(
                " i ",
                Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
            ),
            Span::raw("Usage  "),
            Span::styled(
                " ? ",
                Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
            ),
            Span::raw("Help  "),
            Span::styled(
                " q ",
                Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
            ),
            Span::raw("Quit"),
        ]))
        .block(Block::default().borders(Borders::ALL));

        frame.render_widget(help, layout.help);

        Ok(())
    }
}

/// Render the detail panel content for a catalog entry
fn render_action_detail(entry: &ActionEntry) -> Vec<Line<'static>> {
    let mut lines = Vec::new();

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        format!("  {}", entry.summary),
        Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD),
    )));
    lines.push(Line::from(""));

    for detail in entry.details {
        lines.push(Line::from(format!("  {}", detail)));
    }

    lines.push(Line::from(""));
    lines.push(Line::from(vec![
        Span::raw("  Validates: "),
        if entry.is_validator {
            Span::styled("yes", Style::default().fg(Color::Green))
        } else {
            Span::styled("no", Style::default().fg(Color::DarkGray))
        },
    ]));

    if entry.kind == ActionKind::SnippetValidation {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            "  Press 'i' for setup instructions",
            Style::default().fg(Color::DarkGray),
        )));
    }

    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_selection_defaults_to_first_entry() {
        let home = HomeComponent::new();
        assert_eq!(home.selected_entry().name, catalog()[0].name);
    }

    #[test]
    fn test_next_clamps_at_last_entry() {
        let mut home = HomeComponent::new();
        for _ in 0..catalog().len() + 3 {
            home.next();
        }
        assert_eq!(home.selected_entry().name, catalog()[catalog().len() - 1].name);
    }

    #[test]
    fn test_previous_clamps_at_first_entry() {
        let mut home = HomeComponent::new();
        home.next();
        home.previous();
        home.previous();
        assert_eq!(home.selected_entry().name, catalog()[0].name);
    }

    #[test]
    fn test_first_and_last_jumps() {
        let mut home = HomeComponent::new();
        home.select_last();
        assert_eq!(home.selected_entry().name, catalog()[catalog().len() - 1].name);
        home.select_first();
        assert_eq!(home.selected_entry().name, catalog()[0].name);
    }
}
