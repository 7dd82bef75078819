//! Title screen implementation
//!
//! Main menu with Play and Quit options.
//! Includes navigation highlighting and responsive layout.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
    Frame,
};

/// Entries of the title menu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TitleAction {
    Play,
    Quit,
}

impl TitleAction {
    pub const ALL: [TitleAction; 2] = [TitleAction::Play, TitleAction::Quit];

    /// Get display text for the action
    pub fn display_text(&self, round_in_progress: bool) -> &'static str {
        match self {
            Self::Play if round_in_progress => "Resume Game",
            Self::Play => "New Game",
            Self::Quit => "Quit",
        }
    }
}

/// Title screen component
#[derive(Debug)]
pub struct TitleScreen {
    selected_index: usize,
    list_state: ListState,
}

impl TitleScreen {
    /// Create a new title screen
    pub fn new() -> Self {
        let mut list_state = ListState::default();
        list_state.select(Some(0));

        Self {
            selected_index: 0,
            list_state,
        }
    }

    pub fn selected_action(&self) -> TitleAction {
        TitleAction::ALL[self.selected_index]
    }

    /// Move selection up
    pub fn select_previous(&mut self) {
        if self.selected_index > 0 {
            self.selected_index -= 1;
        } else {
            self.selected_index = TitleAction::ALL.len() - 1;
        }
        self.list_state.select(Some(self.selected_index));
    }

    /// Move selection down
    pub fn select_next(&mut self) {
        if self.selected_index < TitleAction::ALL.len() - 1 {
            self.selected_index += 1;
        } else {
            self.selected_index = 0;
        }
        self.list_state.select(Some(self.selected_index));
    }

    /// Render the title screen
    pub fn render(&mut self, f: &mut Frame, round_in_progress: bool) {
        let size = f.size();

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(5), // Title and subtitle
                Constraint::Min(4),    // Menu
                Constraint::Length(3), // Help text
            ])
            .split(size);

        self.render_title(f, chunks[0]);
        self.render_menu(f, chunks[1], round_in_progress);
        self.render_help(f, chunks[2]);
    }

    fn render_title(&self, f: &mut Frame, area: Rect) {
        let title_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Main title
                Constraint::Length(2), // Subtitle
            ])
            .split(area);

        let title = Paragraph::new("HANGMAN")
            .style(
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            )
            .alignment(Alignment::Center)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::Cyan)),
            );
        f.render_widget(title, title_chunks[0]);

        let subtitle = Paragraph::new("Guess the word before the figure is complete")
            .style(Style::default().fg(Color::White))
            .alignment(Alignment::Center);
        f.render_widget(subtitle, title_chunks[1]);
    }

    fn render_menu(&mut self, f: &mut Frame, area: Rect, round_in_progress: bool) {
        let items: Vec<ListItem> = TitleAction::ALL
            .iter()
            .map(|action| ListItem::new(action.display_text(round_in_progress)))
            .collect();

        let list = List::new(items)
            .block(Block::default().borders(Borders::ALL).title("Menu"))
            .highlight_style(Style::default().bg(Color::Cyan).fg(Color::Black))
            .highlight_symbol(">> ");

        f.render_stateful_widget(list, area, &mut self.list_state);
    }

    fn render_help(&self, f: &mut Frame, area: Rect) {
        let key = Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD);

        let help_text = vec![Line::from(vec![
            Span::styled("↑↓", key),
            Span::raw(" Navigate  "),
            Span::styled("Enter", key),
            Span::raw(" Select  "),
            Span::styled("Esc", key),
            Span::raw(" Quit"),
        ])];

        let help = Paragraph::new(help_text).alignment(Alignment::Center).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Yellow)),
        );

        f.render_widget(help, area);
    }
}

impl Default for TitleScreen {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_title_screen_creation() {
        let screen = TitleScreen::new();
        assert_eq!(screen.selected_action(), TitleAction::Play);
    }

    #[test]
    fn test_menu_navigation() {
        let mut screen = TitleScreen::new();

        screen.select_next();
        assert_eq!(screen.selected_action(), TitleAction::Quit);

        // Wraps to beginning
        screen.select_next();
        assert_eq!(screen.selected_action(), TitleAction::Play);

        // Wraps to end
        screen.select_previous();
        assert_eq!(screen.selected_action(), TitleAction::Quit);
    }

    #[test]
    fn test_play_label() {
        assert_eq!(TitleAction::Play.display_text(true), "Resume Game");
        assert_eq!(TitleAction::Play.display_text(false), "New Game");
    }
}
