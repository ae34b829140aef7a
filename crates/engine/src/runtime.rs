//! Async round driver.
//!
//! Runs a [`QuizEngine`] on tokio: a frame interval drives `tick` and player
//! commands arrive over an `mpsc` channel. Everything the driver schedules is
//! owned by the future, so dropping or aborting it cancels the round's timers.

use std::time::Duration;

use tokio::sync::mpsc;
use tokio::time::{self, Instant, MissedTickBehavior};
use tracing::debug;

use vocab_quiz_core::Outcome;
use vocab_quiz_types::{Phase, Response, RoundConfig};

use crate::quiz::QuizEngine;

/// Command delivered to a running round.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RuntimeCommand {
    Submit(Response),
    ChooseOption(usize),
    SelectWord(String),
    SelectMeaning(String),
    /// Start over with a new config
    Restart(RoundConfig),
    /// The hosting view went away
    Cancel,
}

/// Drive `engine` until its round ends.
///
/// Returns the outcome when the round ends, or `None` when it was cancelled
/// (a `Cancel` command, or every sender dropped). A round that is not in
/// progress on entry returns immediately with whatever outcome it has.
pub async fn run_round(
    engine: &mut QuizEngine,
    mut commands: mpsc::Receiver<RuntimeCommand>,
    frame: Duration,
) -> Option<Outcome> {
    if engine.phase() != Phase::InProgress {
        return engine.outcome();
    }

    let mut interval = time::interval(frame.max(Duration::from_millis(1)));
    interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
    let mut last = Instant::now();

    loop {
        tokio::select! {
            _ = interval.tick() => {
                let now = Instant::now();
                let elapsed = now.duration_since(last);
                last = now;
                engine.tick(u32::try_from(elapsed.as_millis()).unwrap_or(u32::MAX));
            }
            command = commands.recv() => match command {
                None | Some(RuntimeCommand::Cancel) => {
                    debug!(round_id = engine.round().round_id(), "round cancelled");
                    return None;
                }
                Some(command) => {
                    // a fresh round must not inherit the partial frame
                    if matches!(command, RuntimeCommand::Restart(_)) {
                        last = Instant::now();
                    }
                    apply(engine, command);
                }
            },
        }

        if engine.phase() == Phase::Ended {
            return engine.outcome();
        }
    }
}

fn apply(engine: &mut QuizEngine, command: RuntimeCommand) {
    match command {
        RuntimeCommand::Submit(response) => {
            engine.submit_answer(response);
        }
        RuntimeCommand::ChooseOption(index) => {
            engine.choose_option(index);
        }
        RuntimeCommand::SelectWord(id) => {
            engine.select_word(&id);
        }
        RuntimeCommand::SelectMeaning(id) => {
            engine.select_meaning(&id);
        }
        RuntimeCommand::Restart(config) => engine.start(config),
        RuntimeCommand::Cancel => {}
    }
}
