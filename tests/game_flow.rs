//! Integration tests for full rounds through the public game API

use hangman::game::{GameState, Outcome, WordList};
use hangman::{HangmanError, MAX_WRONG};

fn game_with(word: &str) -> GameState {
    GameState::seeded(WordList::new([word]).unwrap(), 0)
}

#[test]
fn test_cat_round_is_won_on_last_letter() {
    let mut game = game_with("CAT");
    let mut displays = vec![game.masked_display()];
    let mut outcomes = Vec::new();

    for letter in ['C', 'A', 'T'] {
        let report = game.guess(letter).unwrap();
        displays.push(report.masked_display);
        outcomes.push(report.outcome);
    }

    assert_eq!(displays, vec!["_ _ _", "C _ _", "C A _", "C A T"]);
    assert_eq!(outcomes, vec![None, None, Some(Outcome::Win)]);
    assert_eq!(game.wrong_attempts(), 0);
}

#[test]
fn test_dog_round_is_lost_on_sixth_miss() {
    let mut game = game_with("DOG");
    let mut stages = Vec::new();
    let mut last = None;

    for letter in ['X', 'Y', 'Z', 'Q', 'W', 'V'] {
        let report = game.guess(letter).unwrap();
        stages.push(report.drawing_stage);
        last = Some(report);
    }

    assert_eq!(stages, vec![1, 2, 3, 4, 5, 6]);
    let last = last.unwrap();
    assert_eq!(last.outcome, Some(Outcome::Loss));
    assert_eq!(last.revealed_word.as_deref(), Some("DOG"));
    assert!(!last.active);
    assert_eq!(game.masked_display(), "_ _ _");
}

#[test]
fn test_no_guesses_accepted_after_loss() {
    let mut game = game_with("DOG");
    for letter in ['A', 'B', 'C', 'E', 'F', 'H'] {
        game.guess(letter).unwrap();
    }
    assert_eq!(game.wrong_attempts(), MAX_WRONG);

    let report = game.guess('D').unwrap();
    assert_eq!(report.outcome, None);
    assert_eq!(report.masked_display, "_ _ _");
    assert_eq!(game.wrong_attempts(), MAX_WRONG);
    assert!(game.guessed_letters().is_empty());
}

#[test]
fn test_win_order_does_not_matter() {
    for order in [['L', 'E', 'V'], ['V', 'L', 'E'], ['E', 'V', 'L']] {
        let mut game = game_with("LEVEL");
        let outcomes: Vec<_> = order
            .iter()
            .map(|&letter| game.guess(letter).unwrap().outcome)
            .collect();
        assert_eq!(outcomes, vec![None, None, Some(Outcome::Win)]);
    }
}

#[test]
fn test_wrong_attempts_stay_bounded() {
    let mut game = game_with("QUIZ");
    for letter in 'A'..='Z' {
        game.guess(letter).unwrap();
        assert!(game.wrong_attempts() <= MAX_WRONG);
        assert!(game.drawing_stage() <= MAX_WRONG);
    }
    assert!(!game.is_active());
}

#[test]
fn test_every_round_starts_clean() {
    let mut game = GameState::seeded(WordList::builtin(), 2024);
    for _ in 0..25 {
        assert!(game.is_active());
        assert_eq!(game.wrong_attempts(), 0);
        assert!(game.masked_display().chars().all(|c| c == '_' || c == ' '));
        assert_eq!(
            game.masked_display().len(),
            game.secret_word().len() * 2 - 1
        );

        game.guess('E').unwrap();
        game.new_game();
    }
}

#[test]
fn test_lowercase_is_invalid_input() {
    let mut game = game_with("CAT");
    assert!(matches!(game.guess('c'), Err(HangmanError::InvalidInput('c'))));
    assert_eq!(game.masked_display(), "_ _ _");
}
