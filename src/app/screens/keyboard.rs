//! Virtual keyboard
//!
//! A grid of the 26 letters with a movable cursor. Keys already guessed are
//! shown as used and every key greys out once the round is over.

use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::game::{GameState, LetterStatus};

pub const ALPHABET: [char; 26] = [
    'A', 'B', 'C', 'D', 'E', 'F', 'G', 'H', 'I', 'J', 'K', 'L', 'M', 'N', 'O', 'P', 'Q', 'R',
    'S', 'T', 'U', 'V', 'W', 'X', 'Y', 'Z',
];

/// Keys per keyboard row; the last row holds the remainder
pub const KEYS_PER_ROW: usize = 9;

/// Rows the rendered keyboard needs, borders included
pub const KEYBOARD_HEIGHT: u16 = (ALPHABET.len().div_ceil(KEYS_PER_ROW) + 2) as u16;

#[derive(Debug, Default)]
pub struct Keyboard {
    selected: usize,
}

impl Keyboard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn selected_letter(&self) -> char {
        ALPHABET[self.selected]
    }

    /// Put the cursor on `letter`; ignored for anything outside A-Z
    pub fn select_letter(&mut self, letter: char) {
        if let Some(index) = ALPHABET.iter().position(|&c| c == letter) {
            self.selected = index;
        }
    }

    pub fn reset(&mut self) {
        self.selected = 0;
    }

    pub fn select_left(&mut self) {
        self.selected = if self.selected == 0 {
            ALPHABET.len() - 1
        } else {
            self.selected - 1
        };
    }

    pub fn select_right(&mut self) {
        self.selected = (self.selected + 1) % ALPHABET.len();
    }

    pub fn select_up(&mut self) {
        let column = self.selected % KEYS_PER_ROW;
        self.selected = if self.selected >= KEYS_PER_ROW {
            self.selected - KEYS_PER_ROW
        } else {
            // wrap to the bottom row, which may be shorter
            let last_row_start = (ALPHABET.len() - 1) / KEYS_PER_ROW * KEYS_PER_ROW;
            (last_row_start + column).min(ALPHABET.len() - 1)
        };
    }

    pub fn select_down(&mut self) {
        let column = self.selected % KEYS_PER_ROW;
        let next = self.selected + KEYS_PER_ROW;
        self.selected = if next < ALPHABET.len() {
            next
        } else if self.selected / KEYS_PER_ROW < (ALPHABET.len() - 1) / KEYS_PER_ROW {
            // the row below exists but is too short for this column
            ALPHABET.len() - 1
        } else {
            column
        };
    }

    /// Render the keyboard for the current round
    pub fn render<R>(&self, f: &mut Frame, area: Rect, game: &GameState<R>) {
        let active = game.is_active();

        let lines: Vec<Line> = ALPHABET
            .chunks(KEYS_PER_ROW)
            .enumerate()
            .map(|(row, keys)| {
                let spans: Vec<Span> = keys
                    .iter()
                    .enumerate()
                    .map(|(col, &letter)| {
                        let selected = active && row * KEYS_PER_ROW + col == self.selected;
                        Span::styled(
                            format!(" {} ", letter),
                            key_style(game.letter_status(letter), active, selected),
                        )
                    })
                    .collect();
                Line::from(spans)
            })
            .collect();

        let keyboard = Paragraph::new(lines).alignment(Alignment::Center).block(
            Block::default()
                .borders(Borders::ALL)
                .title("Keyboard")
                .border_style(Style::default().fg(Color::Cyan)),
        );

        f.render_widget(keyboard, area);
    }
}

fn key_style(status: LetterStatus, active: bool, selected: bool) -> Style {
    if !active {
        return Style::default().fg(Color::DarkGray);
    }

    let style = match status {
        LetterStatus::Unused => Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
        LetterStatus::Hit => Style::default().fg(Color::Green),
        LetterStatus::Miss => Style::default()
            .fg(Color::Red)
            .add_modifier(Modifier::CROSSED_OUT),
    };

    if selected {
        style.bg(Color::Cyan).fg(Color::Black)
    } else {
        style
    }
}
