//! Round outcome aggregation.

use serde::Serialize;

use crate::round::Round;
use crate::types::{AnswerRecord, EndReason, GameKind, Phase};

/// Final summary of an ended round
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Outcome {
    pub kind: GameKind,
    pub round_id: u32,
    pub score: u32,
    pub correct_count: usize,
    pub question_count: usize,
    /// Percentage in `0..=100`
    pub accuracy: u32,
    pub time_spent_secs: u32,
    pub end_reason: EndReason,
    pub answers: Vec<AnswerRecord>,
}

impl Outcome {
    /// Summarize `round`; `None` until it has ended
    pub fn from_round(round: &Round) -> Option<Self> {
        if round.phase() != Phase::Ended {
            return None;
        }
        let correct_count = round.correct_count();
        let question_count = round.questions().len();
        Some(Self {
            kind: round.kind(),
            round_id: round.round_id(),
            score: round.score(),
            correct_count,
            question_count,
            accuracy: accuracy(correct_count, question_count),
            time_spent_secs: round.time_spent_secs(),
            end_reason: round.end_reason()?,
            answers: round.answers().to_vec(),
        })
    }

    /// Incorrect answers, for review
    pub fn mistakes(&self) -> impl Iterator<Item = &AnswerRecord> {
        self.answers.iter().filter(|a| !a.correct)
    }
}

/// `round(100 * correct / total)` with halves rounded up, 0 for an empty round
///
/// # Examples
///
/// ```
/// use vocab_quiz_core::outcome::accuracy;
///
/// assert_eq!(accuracy(2, 3), 67);
/// assert_eq!(accuracy(1, 8), 13);
/// assert_eq!(accuracy(0, 0), 0);
/// ```
pub fn accuracy(correct: usize, total: usize) -> u32 {
    if total == 0 {
        return 0;
    }
    let correct = correct.min(total) as u64;
    let total = total as u64;
    ((200 * correct + total) / (2 * total)) as u32
}
