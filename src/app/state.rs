//! Application state management
//!
//! Handles screen transitions and turns key presses into input actions.
//! Letter keys are guesses, so navigation uses arrows, Enter and Esc only.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Application screens/states
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppState {
    /// Title screen with Play and Quit
    #[default]
    Title,
    /// A round in progress or just finished
    Playing,
}

/// Actions that can be triggered by keyboard input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputAction {
    /// Move selection up (arrow up)
    Up,
    /// Move selection down (arrow down)
    Down,
    /// Move selection left (arrow left)
    Left,
    /// Move selection right (arrow right)
    Right,
    /// Confirm selection (Enter, Space)
    Select,
    /// Go back (Esc)
    Back,
    /// Guess a letter, already uppercased
    Guess(char),
    /// Quit application (Ctrl+C)
    Quit,
    /// No action
    None,
}

/// Application state manager
#[derive(Debug)]
pub struct StateManager {
    current_state: AppState,
    previous_state: Option<AppState>,
    should_quit: bool,
}

impl StateManager {
    /// Create a new state manager starting at the title screen
    pub fn new() -> Self {
        Self {
            current_state: AppState::Title,
            previous_state: None,
            should_quit: false,
        }
    }

    pub fn current_state(&self) -> AppState {
        self.current_state
    }

    pub fn previous_state(&self) -> Option<AppState> {
        self.previous_state
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Transition to a new state
    pub fn transition_to(&mut self, new_state: AppState) {
        if new_state != self.current_state {
            self.previous_state = Some(self.current_state);
            self.current_state = new_state;
        }
    }

    /// Go back to the previous state if available, otherwise go to Title
    pub fn go_back(&mut self) {
        self.current_state = self.previous_state.take().unwrap_or(AppState::Title);
    }

    /// Apply the screen-independent part of an action: quitting and going back
    ///
    /// Returns true when the action was consumed.
    pub fn handle_navigation(&mut self, action: InputAction) -> bool {
        match action {
            InputAction::Quit => {
                self.should_quit = true;
                true
            }
            InputAction::Back => {
                match self.current_state {
                    AppState::Title => self.should_quit = true,
                    AppState::Playing => self.go_back(),
                }
                true
            }
            _ => false,
        }
    }

    /// Convert keyboard event to input action
    pub fn key_to_action(key: KeyEvent) -> InputAction {
        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                InputAction::Quit
            }
            KeyCode::Char(c)
                if c.is_ascii_alphabetic()
                    && (key.modifiers - KeyModifiers::SHIFT).is_empty() =>
            {
                InputAction::Guess(c.to_ascii_uppercase())
            }

            KeyCode::Up => InputAction::Up,
            KeyCode::Down => InputAction::Down,
            KeyCode::Left => InputAction::Left,
            KeyCode::Right => InputAction::Right,

            KeyCode::Enter | KeyCode::Char(' ') => InputAction::Select,
            KeyCode::Esc => InputAction::Back,

            _ => InputAction::None,
        }
    }
}

impl Default for StateManager {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_state_manager_creation() {
        let state_manager = StateManager::new();
        assert_eq!(state_manager.current_state(), AppState::Title);
        assert!(!state_manager.should_quit());
        assert!(state_manager.previous_state().is_none());
    }

    #[test]
    fn test_transition_and_back() {
        let mut state_manager = StateManager::new();

        state_manager.transition_to(AppState::Playing);
        assert_eq!(state_manager.current_state(), AppState::Playing);
        assert_eq!(state_manager.previous_state(), Some(AppState::Title));

        state_manager.go_back();
        assert_eq!(state_manager.current_state(), AppState::Title);
        assert!(state_manager.previous_state().is_none());

        // Going back from Title stays on Title
        state_manager.go_back();
        assert_eq!(state_manager.current_state(), AppState::Title);
    }

    #[test]
    fn test_back_navigation() {
        let mut state_manager = StateManager::new();
        state_manager.transition_to(AppState::Playing);

        assert!(state_manager.handle_navigation(InputAction::Back));
        assert_eq!(state_manager.current_state(), AppState::Title);
        assert!(!state_manager.should_quit());

        // Back from Title quits
        assert!(state_manager.handle_navigation(InputAction::Back));
        assert!(state_manager.should_quit());
    }

    #[test]
    fn test_other_actions_not_consumed() {
        let mut state_manager = StateManager::new();
        assert!(!state_manager.handle_navigation(InputAction::Select));
        assert!(!state_manager.handle_navigation(InputAction::Guess('A')));
        assert!(!state_manager.should_quit());
    }

    #[test]
    fn test_key_to_action() {
        assert_eq!(
            StateManager::key_to_action(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            InputAction::Quit
        );
        assert_eq!(
            StateManager::key_to_action(key(KeyCode::Char('c'))),
            InputAction::Guess('C')
        );
        assert_eq!(
            StateManager::key_to_action(key(KeyCode::Char('Q'))),
            InputAction::Guess('Q')
        );
        assert_eq!(StateManager::key_to_action(key(KeyCode::Up)), InputAction::Up);
        assert_eq!(StateManager::key_to_action(key(KeyCode::Left)), InputAction::Left);
        assert_eq!(StateManager::key_to_action(key(KeyCode::Enter)), InputAction::Select);
        assert_eq!(
            StateManager::key_to_action(key(KeyCode::Char(' '))),
            InputAction::Select
        );
        assert_eq!(StateManager::key_to_action(key(KeyCode::Esc)), InputAction::Back);
        assert_eq!(
            StateManager::key_to_action(key(KeyCode::Char('7'))),
            InputAction::None
        );
        assert_eq!(StateManager::key_to_action(key(KeyCode::Tab)), InputAction::None);
    }

    #[test]
    fn test_modified_letters_are_not_guesses() {
        assert_eq!(
            StateManager::key_to_action(KeyEvent::new(KeyCode::Char('X'), KeyModifiers::SHIFT)),
            InputAction::Guess('X')
        );
        assert_eq!(
            StateManager::key_to_action(KeyEvent::new(KeyCode::Char('x'), KeyModifiers::ALT)),
            InputAction::None
        );
        assert_eq!(
            StateManager::key_to_action(KeyEvent::new(KeyCode::Char('a'), KeyModifiers::CONTROL)),
            InputAction::None
        );
        assert_eq!(
            StateManager::key_to_action(KeyEvent::new(
                KeyCode::Char('E'),
                KeyModifiers::SHIFT | KeyModifiers::ALT
            )),
            InputAction::None
        );
    }
}
