//! Core quiz logic module - pure, deterministic, and testable
//!
//! This crate contains the quiz rules, round state management and timing.
//! It has **no dependencies** on the terminal, async runtimes or I/O, making it:
//!
//! - **Deterministic**: Same seed produces identical questions, options and layouts
//! - **Testable**: Time only moves through `tick(elapsed_ms)`
//! - **Portable**: Can be hosted by a terminal, an async task or a test
//!
//! # Module Structure
//!
//! - [`rng`]: Seedable LCG and Fisher-Yates shuffle
//! - [`sampler`]: Duplicate-free word sampling
//! - [`cloze`]: Whole-word masking for fill-in-the-blank sentences
//! - [`options`]: Multiple-choice option sets
//! - [`timer`]: Countdown and one-shot delays
//! - [`round`]: The round state machine shared by the three variants
//! - [`snapshot`]: Owned read-only views of a round
//! - [`outcome`]: Final score, accuracy and answer log
//! - [`flashcard`]: Flashcard study sessions
//! - [`deck`]: Built-in demo words
//! - [`vocab`]: Word list search, filters, sorting and editing
//!
//! # Rules
//!
//! - **Word match**: pair each word with its meaning; a wrong pair flashes for 1s
//! - **Fill blank**: type the masked word (case-insensitive, trimmed)
//! - **Multiple choice**: pick the meaning among up to 4 options
//! - Fill blank and multiple choice show feedback for 2s, then advance
//! - A round ends when questions run out, all pairs match, or time is up
//!
//! # Example
//!
//! ```
//! use vocab_quiz_core::{deck, Outcome, Round};
//! use vocab_quiz_types::{EndReason, GameKind, Phase, RoundConfig};
//!
//! let mut round = Round::new(GameKind::MultipleChoice, deck::builtin(), 12345);
//! round.start(RoundConfig::for_game(GameKind::MultipleChoice));
//! assert_eq!(round.phase(), Phase::InProgress);
//! assert_eq!(round.options().len(), 4);
//!
//! // Let the clock run out
//! round.tick(120_000);
//! let outcome = Outcome::from_round(&round).unwrap();
//! assert_eq!(outcome.end_reason, EndReason::TimeUp);
//! assert_eq!(outcome.time_spent_secs, 120);
//! ```
//!
//! Call [`Round::tick`](round::Round::tick) every frame with elapsed time.

pub mod cloze;
pub mod deck;
pub mod error;
pub mod flashcard;
pub mod options;
pub mod outcome;
pub mod rng;
pub mod round;
pub mod sampler;
pub mod snapshot;
pub mod timer;
pub mod vocab;

pub use vocab_quiz_types as types;

// Re-export commonly used types for convenience
pub use cloze::{cloze, Cloze};
pub use error::QuizError;
pub use flashcard::{StudySession, StudySettings, StudyStats};
pub use options::build_options;
pub use outcome::{accuracy, Outcome};
pub use rng::SimpleRng;
pub use round::{Round, RoundEvent, WrongPair};
pub use sampler::sample;
pub use snapshot::{PromptSnapshot, RoundSnapshot, TileSnapshot, TileState, TimersSnapshot};
pub use timer::{Countdown, Delay};
pub use vocab::{Difficulty, LearnedFilter, SortBy, VocabEntry, WordDraft, WordFilter, WordList};
