//! Terminal rendering module.
//!
//! A small rendering layer for the quiz screens. It avoids widget/layout
//! libraries and renders into a simple framebuffer that is diffed and flushed
//! to the terminal with crossterm.
//!
//! - [`fb`]: framebuffer, styles and word wrapping
//! - [`quiz_view`]: pure views for the menu, rounds, summaries, flashcards and the word list
//! - [`renderer`]: diffing terminal backend

pub mod fb;
pub mod quiz_view;
pub mod renderer;

pub use vocab_quiz_core as core;
pub use vocab_quiz_types as types;

pub use fb::{wrap, Cell, CellStyle, FrameBuffer, Rgb};
pub use quiz_view::{Column, QuizView, RoundUi, Viewport, WordListUi, MENU_ITEMS};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
