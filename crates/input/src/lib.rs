//! Terminal input module.
//!
//! Maps `crossterm` key events into [`crate::types::QuizInput`] per screen and
//! keeps the small amount of input state a screen needs (typed answer, list
//! cursor). Nothing here knows about rounds or scoring.

pub mod handler;
pub mod map;

pub use vocab_quiz_types as types;

pub use handler::{AnswerBuffer, ListCursor, ANSWER_CAPACITY};
pub use map::{map_key, should_quit, InputMode};
