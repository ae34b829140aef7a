//! Error taxonomy for round operations.
//!
//! None of these are fatal. Core operations return them so that a host can
//! decide what to show; the engine layer logs and absorbs them.

use thiserror::Error;

use crate::types::{GameKind, Phase};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QuizError {
    /// Fewer source words than requested. The round still runs with what exists.
    #[error("requested {requested} words but the pool only has {available}")]
    InsufficientPool { requested: usize, available: usize },

    /// Mutation attempted outside `InProgress`.
    #[error("cannot {operation} while the round is {}", .phase.as_str())]
    InvalidTransition {
        phase: Phase,
        operation: &'static str,
    },

    /// Target word absent from its example sentence. The sentence renders unmasked.
    #[error("example sentence for {word:?} does not contain the word")]
    MalformedExample { word: String },

    #[error("a {} response does not fit this round", .kind.as_str())]
    UnexpectedResponse { kind: GameKind },

    #[error("answer feedback is still on screen")]
    FeedbackPending,

    #[error("answer is empty")]
    EmptyAnswer,

    #[error("{option:?} is not one of the offered options")]
    UnknownOption { option: String },

    /// Word list operation on an id that is not in the list.
    #[error("no word with id {id:?}")]
    UnknownWord { id: String },

    /// A required word list field was blank.
    #[error("a word needs a {field}")]
    MissingField { field: &'static str },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_problem() {
        let e = QuizError::InvalidTransition {
            phase: Phase::Ended,
            operation: "submit an answer",
        };
        assert_eq!(e.to_string(), "cannot submit an answer while the round is ended");

        let e = QuizError::UnexpectedResponse {
            kind: GameKind::WordMatch,
        };
        assert_eq!(e.to_string(), "a word-match response does not fit this round");

        let e = QuizError::InsufficientPool {
            requested: 10,
            available: 3,
        };
        assert!(e.to_string().contains("only has 3"));

        let e = QuizError::MissingField { field: "meaning" };
        assert_eq!(e.to_string(), "a word needs a meaning");
    }
}
