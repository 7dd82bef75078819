//! Round state machine
//!
//! Holds the secret word and the letters guessed so far, evaluates guesses
//! and decides when a round is won or lost. The masked word and drawing
//! stage are derived from these fields on demand.

use std::collections::BTreeSet;

use rand::{rngs::SmallRng, Rng, SeedableRng};
use tracing::{debug, info};

use crate::game::words::WordList;
use crate::{HangmanError, Result, MAX_WRONG};

/// Placeholder shown for letters not yet guessed
pub const PLACEHOLDER: char = '_';

/// How a finished round ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Win,
    Loss,
}

/// Round phase; `Finished` accepts no guesses until the next round
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Active,
    Finished(Outcome),
}

/// Per-letter state, used to grey out keys on the virtual keyboard
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LetterStatus {
    /// Not guessed yet this round
    Unused,
    /// Guessed and present in the word
    Hit,
    /// Guessed and absent from the word
    Miss,
}

/// Everything a view needs after a guess
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuessReport {
    /// Word with unguessed letters masked, space separated
    pub masked_display: String,
    /// Number of figure parts to draw (0-6)
    pub drawing_stage: u8,
    /// Whether the round still accepts guesses
    pub active: bool,
    /// Set only on the call that ended the round
    pub outcome: Option<Outcome>,
    /// The secret word, present when the round just ended
    pub revealed_word: Option<String>,
}

/// Game state for a single player
///
/// Generic over the random source so rounds can be replayed from a seed.
#[derive(Debug)]
pub struct GameState<R = SmallRng> {
    words: WordList,
    rng: R,
    secret_word: String,
    guessed_letters: BTreeSet<char>,
    missed_letters: BTreeSet<char>,
    wrong_attempts: u8,
    phase: Phase,
}

impl GameState<SmallRng> {
    /// Create a game seeded from OS entropy and start the first round
    pub fn new(words: WordList) -> Self {
        Self::with_rng(words, SmallRng::from_entropy())
    }

    /// Create a game whose word sequence is fixed by `seed`
    pub fn seeded(words: WordList, seed: u64) -> Self {
        Self::with_rng(words, SmallRng::seed_from_u64(seed))
    }
}

impl<R: Rng> GameState<R> {
    /// Create a game with the given random source and start the first round
    pub fn with_rng(words: WordList, rng: R) -> Self {
        let mut state = Self {
            words,
            rng,
            secret_word: String::new(),
            guessed_letters: BTreeSet::new(),
            missed_letters: BTreeSet::new(),
            wrong_attempts: 0,
            phase: Phase::Active,
        };
        state.new_game();
        state
    }

    /// Start a new round, abandoning the current one
    pub fn new_game(&mut self) {
        self.secret_word = self.words.choose(&mut self.rng).to_string();
        self.guessed_letters.clear();
        self.missed_letters.clear();
        self.wrong_attempts = 0;
        self.phase = Phase::Active;
        info!(length = self.secret_word.len(), "New round started");
    }

    /// Process a single guess
    ///
    /// Letters guessed before in this round, hit or miss, cost nothing.
    /// Finished rounds ignore the guess and report no outcome.
    pub fn guess(&mut self, letter: char) -> Result<GuessReport> {
        if !letter.is_ascii_uppercase() {
            return Err(HangmanError::InvalidInput(letter));
        }

        if !self.is_active() || self.letter_status(letter) != LetterStatus::Unused {
            return Ok(self.report(None));
        }

        if self.secret_word.contains(letter) {
            self.guessed_letters.insert(letter);
            debug!(%letter, "Correct guess");

            if self.is_word_revealed() {
                return Ok(self.finish(Outcome::Win));
            }
        } else {
            self.missed_letters.insert(letter);
            self.wrong_attempts += 1;
            debug!(%letter, wrong_attempts = self.wrong_attempts, "Wrong guess");

            if self.wrong_attempts >= MAX_WRONG {
                return Ok(self.finish(Outcome::Loss));
            }
        }

        Ok(self.report(None))
    }

    fn finish(&mut self, outcome: Outcome) -> GuessReport {
        self.phase = Phase::Finished(outcome);
        info!(
            ?outcome,
            word = %self.secret_word,
            wrong_attempts = self.wrong_attempts,
            "Round finished"
        );
        self.report(Some(outcome))
    }
}

impl<R> GameState<R> {
    /// The secret word with unguessed letters masked, e.g. `"C _ T"`
    pub fn masked_display(&self) -> String {
        self.secret_word
            .chars()
            .map(|c| {
                if self.guessed_letters.contains(&c) {
                    c.to_string()
                } else {
                    PLACEHOLDER.to_string()
                }
            })
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Number of figure parts to show; grows with wrong attempts only
    pub fn drawing_stage(&self) -> u8 {
        self.wrong_attempts
    }

    pub fn is_active(&self) -> bool {
        self.phase == Phase::Active
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Outcome of the round, if it has finished
    pub fn outcome(&self) -> Option<Outcome> {
        match self.phase {
            Phase::Active => None,
            Phase::Finished(outcome) => Some(outcome),
        }
    }

    pub fn wrong_attempts(&self) -> u8 {
        self.wrong_attempts
    }

    pub fn remaining_attempts(&self) -> u8 {
        MAX_WRONG - self.wrong_attempts
    }

    pub fn secret_word(&self) -> &str {
        &self.secret_word
    }

    /// Correct letters guessed this round
    pub fn guessed_letters(&self) -> &BTreeSet<char> {
        &self.guessed_letters
    }

    /// Wrong letters guessed this round
    pub fn missed_letters(&self) -> &BTreeSet<char> {
        &self.missed_letters
    }

    pub fn letter_status(&self, letter: char) -> LetterStatus {
        if self.guessed_letters.contains(&letter) {
            LetterStatus::Hit
        } else if self.missed_letters.contains(&letter) {
            LetterStatus::Miss
        } else {
            LetterStatus::Unused
        }
    }

    /// Snapshot of the current round without changing it
    pub fn report(&self, outcome: Option<Outcome>) -> GuessReport {
        GuessReport {
            masked_display: self.masked_display(),
            drawing_stage: self.drawing_stage(),
            active: self.is_active(),
            outcome,
            revealed_word: outcome.map(|_| self.secret_word.clone()),
        }
    }

    fn is_word_revealed(&self) -> bool {
        self.secret_word
            .chars()
            .all(|c| self.guessed_letters.contains(&c))
    }
}
