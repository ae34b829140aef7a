//! Vocab Quiz (workspace facade crate).
//!
//! Re-exports the workspace crates under short names and adds what only the
//! terminal app needs: environment configuration, log setup and the screen
//! state machine.

pub use vocab_quiz_core as core;
pub use vocab_quiz_engine as engine;
pub use vocab_quiz_input as input;
pub use vocab_quiz_term as term;
pub use vocab_quiz_types as types;

pub mod app;
pub mod config;
pub mod logging;

pub use app::{App, Screen};
pub use config::{AppConfig, CliFlags};
