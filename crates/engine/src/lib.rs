//! Quiz engine - the boundary between round logic and its hosts
//!
//! - [`quiz`]: [`QuizEngine`], a synchronous wrapper that absorbs invalid input and
//!   reports completion through a callback exactly once per round
//! - [`runtime`]: [`run_round`], an async driver that ticks an engine on tokio and
//!   feeds it [`RuntimeCommand`]s
//!
//! # Example
//!
//! ```
//! use vocab_quiz_core::deck;
//! use vocab_quiz_engine::QuizEngine;
//! use vocab_quiz_types::{GameKind, RoundConfig};
//!
//! let mut engine = QuizEngine::new(GameKind::FillBlank, deck::builtin(), 7);
//! engine.on_complete(|score, secs| println!("score {score} in {secs}s"));
//! engine.start(RoundConfig::for_game(GameKind::FillBlank));
//!
//! let state = engine.state();
//! assert_eq!(state.question_count, 8);
//! assert_eq!(state.remaining_secs, 90);
//! ```

pub mod quiz;
pub mod runtime;

pub use quiz::{CompletionCallback, QuizEngine};
pub use runtime::{run_round, RuntimeCommand};
