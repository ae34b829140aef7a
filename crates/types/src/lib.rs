//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are plain data with no behaviour beyond parsing and formatting, so
//! they can be used by the round logic, the terminal views and any embedding host.
//!
//! # Game variants
//!
//! | Variant | Name | Questions | Time limit | Points |
//! |---------|------|-----------|------------|--------|
//! | [`GameKind::WordMatch`] | `word-match` | 6 | 60s | 10 |
//! | [`GameKind::FillBlank`] | `fill-blank` | 8 | 90s | 10 |
//! | [`GameKind::MultipleChoice`] | `multiple-choice` | 10 | 120s | 10 (4 options) |
//!
//! # Timing Constants
//!
//! Timing values are in milliseconds:
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `FRAME_MS` | 16 | Host loop frame interval (~60 FPS) |
//! | `TIMER_TICK_MS` | 1000 | Countdown resolution |
//! | `FEEDBACK_DELAY_MS` | 2000 | Answer feedback shown before advancing |
//! | `WRONG_PAIR_FLASH_MS` | 1000 | Word-match mismatch highlight |
//!
//! # Examples
//!
//! ```
//! use vocab_quiz_types::{GameKind, RoundConfig, Word};
//!
//! let kind = GameKind::from_str("Fill-Blank").unwrap();
//! assert_eq!(kind, GameKind::FillBlank);
//!
//! let config = RoundConfig::for_game(kind);
//! assert_eq!(config.question_count, 8);
//! assert_eq!(config.time_limit_secs, 90);
//!
//! let word = Word::new("1", "apple", "quả táo").with_example("An apple a day.");
//! assert_eq!(word.example.as_deref(), Some("An apple a day."));
//! ```

use serde::{Deserialize, Serialize};

/// Host loop frame interval in milliseconds (16ms ≈ 60 FPS)
pub const FRAME_MS: u32 = 16;

/// Countdown resolution (one decrement per second)
pub const TIMER_TICK_MS: u32 = 1000;

/// Delay between answer feedback and advancing to the next question
pub const FEEDBACK_DELAY_MS: u32 = 2000;

/// How long a mismatched word-match pair stays highlighted
pub const WRONG_PAIR_FLASH_MS: u32 = 1000;

/// Points awarded per correct answer in every variant
pub const DEFAULT_POINTS_PER_CORRECT: u32 = 10;

/// Ceiling for `points_per_correct`; scores saturate at `u32::MAX` beyond
/// `u32::MAX / MAX_POINTS_PER_CORRECT` correct answers
pub const MAX_POINTS_PER_CORRECT: u32 = 10_000;

/// Multiple-choice option count
pub const DEFAULT_OPTION_COUNT: u32 = 4;

/// Upper bound for the multiple-choice option set
pub const MAX_OPTION_COUNT: usize = 8;

/// Flashcard auto-flip delay in seconds
pub const DEFAULT_AUTO_FLIP_DELAY_SECS: u32 = 3;

/// Replacement for the target word in a cloze sentence
pub const MASK_TOKEN: &str = "______";


/// A vocabulary entry.
///
/// Words are read-only input to a round; the engine clones what it keeps.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Word {
    pub id: String,
    pub word: String,
    pub meaning: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub example: Option<String>,
}

impl Word {
    pub fn new(id: impl Into<String>, word: impl Into<String>, meaning: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            word: word.into(),
            meaning: meaning.into(),
            example: None,
        }
    }

    pub fn with_example(mut self, example: impl Into<String>) -> Self {
        self.example = Some(example.into());
        self
    }
}

/// The three quiz variants
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum GameKind {
    /// Pair each word with its meaning
    WordMatch,
    /// Type the word missing from its example sentence
    FillBlank,
    /// Pick the meaning of a word among a few options
    MultipleChoice,
}

impl GameKind {
    pub const ALL: [GameKind; 3] = [
        GameKind::WordMatch,
        GameKind::FillBlank,
        GameKind::MultipleChoice,
    ];

    /// Parse a variant from its route-style name (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use vocab_quiz_types::GameKind;
    ///
    /// assert_eq!(GameKind::from_str("word-match"), Some(GameKind::WordMatch));
    /// assert_eq!(GameKind::from_str("Multiple-Choice"), Some(GameKind::MultipleChoice));
    /// assert_eq!(GameKind::from_str("unknown"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "word-match" => Some(GameKind::WordMatch),
            "fill-blank" => Some(GameKind::FillBlank),
            "multiple-choice" => Some(GameKind::MultipleChoice),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            GameKind::WordMatch => "word-match",
            GameKind::FillBlank => "fill-blank",
            GameKind::MultipleChoice => "multiple-choice",
        }
    }

    /// Display title
    pub fn title(&self) -> &'static str {
        match self {
            GameKind::WordMatch => "Word Match",
            GameKind::FillBlank => "Fill in the Blanks",
            GameKind::MultipleChoice => "Multiple Choice",
        }
    }

    /// One-line instructions shown before a round starts
    pub fn instructions(&self) -> &'static str {
        match self {
            GameKind::WordMatch => "Match words with their meanings as quickly as possible!",
            GameKind::FillBlank => "Complete the sentences by filling in the missing words!",
            GameKind::MultipleChoice => "Choose the correct meaning for each word!",
        }
    }
}

/// Per-round parameters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundConfig {
    pub question_count: u32,
    pub time_limit_secs: u32,
    pub points_per_correct: u32,
    /// Only meaningful for multiple choice
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub option_count: Option<u32>,
}

impl RoundConfig {
    /// Defaults for a variant
    pub fn for_game(kind: GameKind) -> Self {
        let (question_count, time_limit_secs, option_count) = match kind {
            GameKind::WordMatch => (6, 60, None),
            GameKind::FillBlank => (8, 90, None),
            GameKind::MultipleChoice => (10, 120, Some(DEFAULT_OPTION_COUNT)),
        };
        Self {
            question_count,
            time_limit_secs,
            points_per_correct: DEFAULT_POINTS_PER_CORRECT,
            option_count,
        }
    }

    /// Effective points per correct answer, clamped to `MAX_POINTS_PER_CORRECT`
    pub fn points(&self) -> u32 {
        self.points_per_correct.min(MAX_POINTS_PER_CORRECT)
    }

    /// Effective option set size, clamped to `1..=MAX_OPTION_COUNT`
    pub fn options(&self) -> usize {
        let n = self.option_count.unwrap_or(DEFAULT_OPTION_COUNT) as usize;
        n.clamp(1, MAX_OPTION_COUNT)
    }
}

/// Round lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Phase {
    #[default]
    NotStarted,
    InProgress,
    Ended,
}

impl Phase {
    pub fn as_str(&self) -> &'static str {
        match self {
            Phase::NotStarted => "notStarted",
            Phase::InProgress => "inProgress",
            Phase::Ended => "ended",
        }
    }
}

/// Why a round ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum EndReason {
    /// Every question was answered
    Exhausted,
    /// Every word-match pair was found
    AllMatched,
    /// The countdown reached zero
    TimeUp,
}

/// One answered question (fill blank and multiple choice)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnswerRecord {
    pub word: String,
    pub submitted: String,
    pub correct: bool,
}

/// A player's submission
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum Response {
    /// Word match: proposed pairing of a word tile and a meaning tile (both by word id)
    Pair { word_id: String, meaning_id: String },
    /// Fill blank: free text
    Text { text: String },
    /// Multiple choice: the selected option string
    Choice { option: String },
}

impl Response {
    pub fn pair(word_id: impl Into<String>, meaning_id: impl Into<String>) -> Self {
        Response::Pair {
            word_id: word_id.into(),
            meaning_id: meaning_id.into(),
        }
    }

    pub fn text(text: impl Into<String>) -> Self {
        Response::Text { text: text.into() }
    }

    pub fn choice(option: impl Into<String>) -> Self {
        Response::Choice {
            option: option.into(),
        }
    }

    /// The variant this response belongs to
    pub fn kind(&self) -> GameKind {
        match self {
            Response::Pair { .. } => GameKind::WordMatch,
            Response::Text { .. } => GameKind::FillBlank,
            Response::Choice { .. } => GameKind::MultipleChoice,
        }
    }
}

/// Result of a submission, as shown to the player
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum Feedback {
    Correct,
    Incorrect { expected: String },
    Matched { word_id: String },
    Mismatch { word_id: String, meaning_id: String },
    /// Click on a matched/flashing/unknown tile
    Ignored,
}

impl Feedback {
    pub fn is_correct(&self) -> bool {
        matches!(self, Feedback::Correct | Feedback::Matched { .. })
    }
}

/// Player intents produced by the input layer
///
/// These are shared by the menu, the three quiz variants, the flashcard
/// session and the word list; each screen interprets the subset it cares about.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuizInput {
    /// Text entry (fill blank)
    Type(char),
    /// Delete the last typed character
    Erase,
    /// Confirm the current answer / selection
    Submit,
    /// Move the cursor up
    Up,
    /// Move the cursor down
    Down,
    /// Toggle between the word and meaning columns (word match)
    SwitchColumn,
    /// Pick an entry by zero-based index (menu, options)
    Choose(u8),
    /// Flip the flashcard
    Flip,
    /// Next flashcard
    Next,
    /// Previous flashcard
    Previous,
    MarkKnown,
    MarkUnknown,
    Shuffle,
    ReviewMistakes,
    /// Play again / restart the session
    Restart,
    /// Flashcards: turn auto-flip on or off
    ToggleAutoFlip,
    /// Word list: next sort order
    CycleSort,
    /// Word list: next learned/unlearned filter
    CycleFilter,
    /// Word list: next difficulty filter
    CycleDifficulty,
    /// Word list: remove the highlighted word
    Delete,
    /// Leave the current screen
    Back,
}
