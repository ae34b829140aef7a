//! Presentation boundary around a [`Round`].
//!
//! Hosts talk to a quiz through [`QuizEngine`]: start, submit, tick, read a
//! snapshot, and get told once when the round is over. Invalid calls are
//! logged and ignored instead of surfacing errors.

use std::fmt;

use tracing::debug;

use vocab_quiz_core::{Outcome, QuizError, Round, RoundEvent, RoundSnapshot};
use vocab_quiz_types::{Feedback, GameKind, Phase, Response, RoundConfig, Word};

/// Called with `(score, time_spent_secs)` when a round ends
pub type CompletionCallback = Box<dyn FnMut(u32, u32) + Send>;

pub struct QuizEngine {
    round: Round,
    on_complete: Option<CompletionCallback>,
    outcome: Option<Outcome>,
}

impl fmt::Debug for QuizEngine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("QuizEngine")
            .field("round", &self.round)
            .field("on_complete", &self.on_complete.is_some())
            .field("outcome", &self.outcome)
            .finish()
    }
}

impl QuizEngine {
    pub fn new(kind: GameKind, pool: Vec<Word>, seed: u32) -> Self {
        Self {
            round: Round::new(kind, pool, seed),
            on_complete: None,
            outcome: None,
        }
    }

    /// Register the completion callback (replaces any previous one)
    pub fn on_complete<F>(&mut self, callback: F)
    where
        F: FnMut(u32, u32) + Send + 'static,
    {
        self.on_complete = Some(Box::new(callback));
    }

    /// Start a fresh round. Always resets, even mid-round.
    pub fn start(&mut self, config: RoundConfig) {
        self.outcome = None;
        self.round.start(config);
        self.dispatch_events();
    }

    /// Submit a response; `None` when it was ignored
    pub fn submit_answer(&mut self, response: Response) -> Option<Feedback> {
        let result = self.round.submit_answer(response);
        self.absorb(result)
    }

    pub fn choose_option(&mut self, index: usize) -> Option<Feedback> {
        let result = self.round.choose_option(index);
        self.absorb(result)
    }

    pub fn select_word(&mut self, id: &str) -> Option<Feedback> {
        let result = self.round.select_word(id);
        self.absorb(result).flatten()
    }

    pub fn select_meaning(&mut self, id: &str) -> Option<Feedback> {
        let result = self.round.select_meaning(id);
        self.absorb(result).flatten()
    }

    /// Advance timers; returns true when the state changed
    pub fn tick(&mut self, elapsed_ms: u32) -> bool {
        let changed = self.round.tick(elapsed_ms);
        self.dispatch_events();
        changed
    }

    pub fn state(&self) -> RoundSnapshot {
        RoundSnapshot::from(&self.round)
    }

    /// Summary of the last ended round (cleared by `start`)
    pub fn outcome(&self) -> Option<Outcome> {
        self.outcome.clone()
    }

    pub fn round(&self) -> &Round {
        &self.round
    }

    pub fn kind(&self) -> GameKind {
        self.round.kind()
    }

    pub fn phase(&self) -> Phase {
        self.round.phase()
    }

    fn absorb<T>(&mut self, result: Result<T, QuizError>) -> Option<T> {
        match result {
            Ok(value) => {
                self.dispatch_events();
                Some(value)
            }
            Err(err) => {
                debug!(error = %err, round_id = self.round.round_id(), "input ignored");
                None
            }
        }
    }

    fn dispatch_events(&mut self) {
        while let Some(event) = self.round.take_event() {
            match event {
                RoundEvent::Ended {
                    score,
                    time_spent_secs,
                    ..
                } => {
                    self.outcome = Outcome::from_round(&self.round);
                    if let Some(callback) = self.on_complete.as_mut() {
                        callback(score, time_spent_secs);
                    }
                }
            }
        }
    }
}
