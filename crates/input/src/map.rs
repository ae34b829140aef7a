//! Key mapping from terminal events to quiz inputs.

use crate::types::{QuizInput, MAX_OPTION_COUNT};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Which screen is reading keys; the same key means different things per screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    Menu,
    /// Free text entry (fill blank)
    TextEntry,
    /// Option list (multiple choice)
    Choice,
    /// Two-column board (word match)
    Match,
    Flashcards,
    /// Word list: typing searches, keys manage the list
    WordList,
    /// Round summary
    Summary,
}

/// Map keyboard input to a quiz input for the given screen.
pub fn map_key(key: KeyEvent, mode: InputMode) -> Option<QuizInput> {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return None;
    }

    if key.code == KeyCode::Esc {
        return Some(QuizInput::Back);
    }

    match mode {
        InputMode::Menu => match key.code {
            KeyCode::Up | KeyCode::Char('k') => Some(QuizInput::Up),
            KeyCode::Down | KeyCode::Char('j') => Some(QuizInput::Down),
            KeyCode::Enter => Some(QuizInput::Submit),
            KeyCode::Char(c @ '1'..='5') => digit(c),
            _ => None,
        },
        InputMode::TextEntry => match key.code {
            KeyCode::Enter => Some(QuizInput::Submit),
            KeyCode::Backspace => Some(QuizInput::Erase),
            KeyCode::Char(c) => Some(QuizInput::Type(c)),
            _ => None,
        },
        InputMode::Choice => match key.code {
            KeyCode::Up | KeyCode::Char('k') => Some(QuizInput::Up),
            KeyCode::Down | KeyCode::Char('j') => Some(QuizInput::Down),
            KeyCode::Enter | KeyCode::Char(' ') => Some(QuizInput::Submit),
            KeyCode::Char(c) if c.is_ascii_digit() => digit(c),
            _ => None,
        },
        InputMode::Match => match key.code {
            KeyCode::Up | KeyCode::Char('k') => Some(QuizInput::Up),
            KeyCode::Down | KeyCode::Char('j') => Some(QuizInput::Down),
            KeyCode::Tab | KeyCode::BackTab | KeyCode::Left | KeyCode::Right => {
                Some(QuizInput::SwitchColumn)
            }
            KeyCode::Enter | KeyCode::Char(' ') => Some(QuizInput::Submit),
            _ => None,
        },
        InputMode::Flashcards => match key.code {
            KeyCode::Char(' ') | KeyCode::Enter => Some(QuizInput::Flip),
            KeyCode::Right | KeyCode::Char('l') | KeyCode::Char('n') => Some(QuizInput::Next),
            KeyCode::Left | KeyCode::Char('h') | KeyCode::Char('p') => Some(QuizInput::Previous),
            KeyCode::Char('k') | KeyCode::Char('K') => Some(QuizInput::MarkKnown),
            KeyCode::Char('u') | KeyCode::Char('U') => Some(QuizInput::MarkUnknown),
            KeyCode::Char('s') | KeyCode::Char('S') => Some(QuizInput::Shuffle),
            KeyCode::Char('m') | KeyCode::Char('M') => Some(QuizInput::ReviewMistakes),
            KeyCode::Char('r') | KeyCode::Char('R') => Some(QuizInput::Restart),
            KeyCode::Char('a') | KeyCode::Char('A') => Some(QuizInput::ToggleAutoFlip),
            _ => None,
        },
        InputMode::WordList => match key.code {
            KeyCode::Up => Some(QuizInput::Up),
            KeyCode::Down => Some(QuizInput::Down),
            KeyCode::Enter => Some(QuizInput::Submit),
            KeyCode::Backspace => Some(QuizInput::Erase),
            KeyCode::Delete => Some(QuizInput::Delete),
            KeyCode::Tab => Some(QuizInput::CycleSort),
            KeyCode::BackTab => Some(QuizInput::CycleFilter),
            KeyCode::Left | KeyCode::Right => Some(QuizInput::CycleDifficulty),
            KeyCode::Char(c) => Some(QuizInput::Type(c)),
            _ => None,
        },
        InputMode::Summary => match key.code {
            KeyCode::Char('r') | KeyCode::Char('R') | KeyCode::Enter => Some(QuizInput::Restart),
            _ => None,
        },
    }
}

/// Check if key should quit the application.
///
/// `q` only quits from the menu; elsewhere it is an answer character or does
/// nothing. Ctrl+C always quits.
pub fn should_quit(key: KeyEvent, mode: InputMode) -> bool {
    (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
        || (mode == InputMode::Menu && matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q')))
}

/// `'1'..='8'` to a zero-based `Choose`
fn digit(c: char) -> Option<QuizInput> {
    let n = c.to_digit(10)? as usize;
    if (1..=MAX_OPTION_COUNT).contains(&n) {
        Some(QuizInput::Choose((n - 1) as u8))
    } else {
        None
    }
}
