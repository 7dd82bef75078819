//! Game screen implementation
//!
//! Gallows canvas, masked word, status line, session tally and the virtual
//! keyboard. Everything shown is read from the [`GameState`].

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    symbols::Marker,
    text::{Line, Span},
    widgets::{
        canvas::{Canvas, Circle, Line as CanvasLine},
        Block, Borders, Paragraph,
    },
    Frame,
};

use super::keyboard::{Keyboard, KEYBOARD_HEIGHT};
use crate::game::figure::{self, Shape, BOARD_SIZE, GALLOWS};
use crate::game::{GameState, Outcome};

/// Wins and losses for this run of the program; never saved
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SessionTally {
    pub wins: u32,
    pub losses: u32,
    /// Consecutive wins, reset by a loss
    pub streak: u32,
}

impl SessionTally {
    pub fn record(&mut self, outcome: Outcome) {
        match outcome {
            Outcome::Win => {
                self.wins += 1;
                self.streak += 1;
            }
            Outcome::Loss => {
                self.losses += 1;
                self.streak = 0;
            }
        }
    }
}

/// Status line text and colour for the current round
pub fn status_line<R>(game: &GameState<R>) -> (String, Color) {
    match game.outcome() {
        None => (
            format!("Attempts left: {}", game.remaining_attempts()),
            Color::White,
        ),
        Some(Outcome::Win) => ("Congratulations! You won!".to_string(), Color::Green),
        Some(Outcome::Loss) => (
            format!("Game Over! The word was: {}", game.secret_word()),
            Color::Red,
        ),
    }
}

/// Game screen component
#[derive(Debug, Default)]
pub struct GameScreen {
    keyboard: Keyboard,
    tally: SessionTally,
}

impl GameScreen {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn keyboard(&self) -> &Keyboard {
        &self.keyboard
    }

    pub fn keyboard_mut(&mut self) -> &mut Keyboard {
        &mut self.keyboard
    }

    pub fn tally(&self) -> &SessionTally {
        &self.tally
    }

    /// Count a finished round
    pub fn record(&mut self, outcome: Outcome) {
        self.tally.record(outcome);
    }

    /// Render the game screen
    pub fn render<R>(&self, f: &mut Frame, game: &GameState<R>) {
        let size = f.size();

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),               // Title
                Constraint::Min(14),                 // Gallows and word
                Constraint::Length(KEYBOARD_HEIGHT), // Keyboard
                Constraint::Length(3),               // Help text
            ])
            .split(size);

        self.render_title(f, chunks[0]);

        let middle = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(chunks[1]);

        self.render_gallows(f, middle[0], game);
        self.render_word_panel(f, middle[1], game);
        self.keyboard.render(f, chunks[2], game);
        self.render_help(f, chunks[3], game);
    }

    fn render_title(&self, f: &mut Frame, area: Rect) {
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
        f.render_widget(title, area);
    }

    /// Draw the gallows plus one body part per wrong guess
    fn render_gallows<R>(&self, f: &mut Frame, area: Rect, game: &GameState<R>) {
        let shapes = figure::scene(game.drawing_stage());
        let figure_color = match game.outcome() {
            Some(Outcome::Win) => Color::Green,
            Some(Outcome::Loss) => Color::Red,
            None => Color::Yellow,
        };

        let canvas = Canvas::default()
            .block(Block::default().borders(Borders::ALL).title("Gallows"))
            .marker(Marker::Braille)
            .x_bounds([0.0, BOARD_SIZE])
            .y_bounds([0.0, BOARD_SIZE])
            .paint(move |ctx| {
                for (index, shape) in shapes.iter().enumerate() {
                    let color = if index < GALLOWS.len() {
                        Color::Gray
                    } else {
                        figure_color
                    };
                    match *shape {
                        Shape::Segment { from, to } => ctx.draw(&CanvasLine {
                            x1: from.0,
                            y1: from.1,
                            x2: to.0,
                            y2: to.1,
                            color,
                        }),
                        Shape::Circle { center, radius } => ctx.draw(&Circle {
                            x: center.0,
                            y: center.1,
                            radius,
                            color,
                        }),
                    }
                }
            });

        f.render_widget(canvas, area);
    }

    fn render_word_panel<R>(&self, f: &mut Frame, area: Rect, game: &GameState<R>) {
        let (status, status_color) = status_line(game);
        let missed: String = game
            .missed_letters()
            .iter()
            .map(|c| c.to_string())
            .collect::<Vec<_>>()
            .join(" ");

        let mut text = vec![
            Line::from(""),
            Line::from(Span::styled(
                game.masked_display(),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            Line::from(Span::styled(status, Style::default().fg(status_color))),
            Line::from(""),
            Line::from(vec![
                Span::raw("Missed: "),
                Span::styled(missed, Style::default().fg(Color::Red)),
            ]),
            Line::from(format!(
                "Wins: {}  Losses: {}  Streak: {}",
                self.tally.wins, self.tally.losses, self.tally.streak
            )),
        ];

        if !game.is_active() {
            text.push(Line::from(""));
            text.push(Line::from(Span::styled(
                " Play Again ",
                Style::default()
                    .bg(Color::Green)
                    .fg(Color::Black)
                    .add_modifier(Modifier::BOLD),
            )));
        }

        let panel = Paragraph::new(text).alignment(Alignment::Center).block(
            Block::default()
                .borders(Borders::ALL)
                .title("Word")
                .border_style(Style::default().fg(Color::Cyan)),
        );

        f.render_widget(panel, area);
    }

    fn render_help<R>(&self, f: &mut Frame, area: Rect, game: &GameState<R>) {
        let key = Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD);

        let help_text = if game.is_active() {
            Line::from(vec![
                Span::styled("A-Z", key),
                Span::raw(" Guess  "),
                Span::styled("←↑↓→", key),
                Span::raw(" Move  "),
                Span::styled("Enter", key),
                Span::raw(" Press key  "),
                Span::styled("Esc", key),
                Span::raw(" Menu"),
            ])
        } else {
            Line::from(vec![
                Span::styled("Enter", key),
                Span::raw(" Play again  "),
                Span::styled("Esc", key),
                Span::raw(" Menu  "),
                Span::styled("Ctrl+C", key),
                Span::raw(" Quit"),
            ])
        };

        let help = Paragraph::new(help_text).alignment(Alignment::Center).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Yellow)),
        );

        f.render_widget(help, area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::WordList;

    fn game_with(word: &str) -> GameState {
        GameState::seeded(WordList::new([word]).unwrap(), 5)
    }

    #[test]
    fn test_tally() {
        let mut tally = SessionTally::default();
        tally.record(Outcome::Win);
        tally.record(Outcome::Win);
        assert_eq!(tally.streak, 2);

        tally.record(Outcome::Loss);
        assert_eq!(tally, SessionTally { wins: 2, losses: 1, streak: 0 });
    }

    #[test]
    fn test_status_line() {
        let mut game = game_with("OX");
        assert_eq!(status_line(&game).0, "Attempts left: 6");

        game.guess('Q').unwrap();
        assert_eq!(status_line(&game).0, "Attempts left: 5");

        game.guess('O').unwrap();
        game.guess('X').unwrap();
        assert_eq!(
            status_line(&game),
            ("Congratulations! You won!".to_string(), Color::Green)
        );
    }

    #[test]
    fn test_status_line_reveals_word_on_loss() {
        let mut game = game_with("OX");
        for letter in ['A', 'B', 'C', 'D', 'E', 'F'] {
            game.guess(letter).unwrap();
        }
        let (text, color) = status_line(&game);
        assert_eq!(text, "Game Over! The word was: OX");
        assert_eq!(color, Color::Red);
    }
}
