use serde::Serialize;

use crate::round::Round;
use crate::types::{AnswerRecord, EndReason, Feedback, GameKind, Phase};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum TileState {
    Idle,
    Selected,
    Matched,
    Wrong,
}

/// One word-match tile; `id` is the id of the word it belongs to
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TileSnapshot {
    pub id: String,
    pub text: String,
    pub state: TileState,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum PromptSnapshot {
    WordMatch {
        words: Vec<TileSnapshot>,
        meanings: Vec<TileSnapshot>,
    },
    FillBlank {
        meaning: String,
        sentence: String,
        masked: bool,
    },
    MultipleChoice {
        word: String,
        options: Vec<String>,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TimersSnapshot {
    pub feedback_ms: u32,
    pub flash_ms: u32,
}

/// Owned read-only view of a round
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RoundSnapshot {
    pub kind: GameKind,
    pub phase: Phase,
    pub round_id: u32,
    pub seed: u32,
    pub question_count: usize,
    pub current_index: usize,
    pub score: u32,
    pub elapsed_secs: u32,
    pub remaining_secs: u32,
    pub time_limit_secs: u32,
    pub correct_count: usize,
    pub answers: Vec<AnswerRecord>,
    /// None once every question is answered or before the round starts
    pub prompt: Option<PromptSnapshot>,
    pub feedback: Option<Feedback>,
    pub end_reason: Option<EndReason>,
    pub timers: TimersSnapshot,
}

impl RoundSnapshot {
    pub fn playable(&self) -> bool {
        self.phase == Phase::InProgress && self.timers.feedback_ms == 0
    }

    /// 1-based question number for display, capped at the question count
    pub fn question_number(&self) -> usize {
        (self.current_index + 1).min(self.question_count)
    }
}

impl From<&Round> for RoundSnapshot {
    fn from(round: &Round) -> Self {
        Self {
            kind: round.kind(),
            phase: round.phase(),
            round_id: round.round_id(),
            seed: round.seed(),
            question_count: round.questions().len(),
            current_index: round.current_index(),
            score: round.score(),
            elapsed_secs: round.elapsed_secs(),
            remaining_secs: round.remaining_secs(),
            time_limit_secs: round.config().time_limit_secs,
            correct_count: round.correct_count(),
            answers: round.answers().to_vec(),
            prompt: prompt(round),
            feedback: round.feedback().cloned(),
            end_reason: round.end_reason(),
            timers: TimersSnapshot {
                feedback_ms: round.feedback_delay_ms(),
                flash_ms: round.flash_ms(),
            },
        }
    }
}

fn prompt(round: &Round) -> Option<PromptSnapshot> {
    if round.phase() == Phase::NotStarted {
        return None;
    }
    match round.kind() {
        GameKind::WordMatch => {
            let words = round
                .questions()
                .iter()
                .map(|w| TileSnapshot {
                    id: w.id.clone(),
                    text: w.word.clone(),
                    state: tile_state(round, &w.id, round.selected_word()),
                })
                .collect();
            let meanings = round
                .meaning_column()
                .map(|w| TileSnapshot {
                    id: w.id.clone(),
                    text: w.meaning.clone(),
                    state: tile_state(round, &w.id, round.selected_meaning()),
                })
                .collect();
            Some(PromptSnapshot::WordMatch { words, meanings })
        }
        GameKind::FillBlank => {
            let question = round.current_question()?;
            let (sentence, masked) = round
                .cloze()
                .map(|c| (c.text.clone(), c.is_masked()))
                .unwrap_or_default();
            Some(PromptSnapshot::FillBlank {
                meaning: question.meaning.clone(),
                sentence,
                masked,
            })
        }
        GameKind::MultipleChoice => {
            let question = round.current_question()?;
            Some(PromptSnapshot::MultipleChoice {
                word: question.word.clone(),
                options: round.options().to_vec(),
            })
        }
    }
}

fn tile_state(round: &Round, id: &str, selected: Option<&str>) -> TileState {
    if round.is_matched(id) {
        return TileState::Matched;
    }
    if round.is_flashing(id) {
        TileState::Wrong
    } else if selected == Some(id) {
        TileState::Selected
    } else {
        TileState::Idle
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{RoundConfig, Word, WRONG_PAIR_FLASH_MS};

    fn words() -> Vec<Word> {
        vec![
            Word::new("1", "apple", "quả táo").with_example("An apple a day."),
            Word::new("2", "book", "quyển sách").with_example("Read a book."),
            Word::new("3", "cat", "con mèo").with_example("The cat sleeps."),
        ]
    }

    #[test]
    fn not_started_has_no_prompt() {
        let round = Round::new(GameKind::FillBlank, words(), 1);
        let snap = RoundSnapshot::from(&round);
        assert_eq!(snap.phase, Phase::NotStarted);
        assert!(snap.prompt.is_none());
        assert!(!snap.playable());
    }

    #[test]
    fn fill_blank_prompt_is_masked() {
        let mut round = Round::new(GameKind::FillBlank, words(), 1);
        round.start(RoundConfig::for_game(GameKind::FillBlank));
        let snap = RoundSnapshot::from(&round);

        assert_eq!(snap.question_count, 3);
        assert_eq!(snap.question_number(), 1);
        match snap.prompt {
            Some(PromptSnapshot::FillBlank {
                sentence, masked, ..
            }) => {
                assert!(masked);
                assert!(sentence.contains("______"));
            }
            other => panic!("unexpected prompt {other:?}"),
        }
    }

    #[test]
    fn word_match_tiles_reflect_selection_and_matches() {
        let mut round = Round::new(GameKind::WordMatch, words(), 3);
        round.start(RoundConfig::for_game(GameKind::WordMatch));
        round.select_word("1").unwrap();

        let snap = RoundSnapshot::from(&round);
        let Some(PromptSnapshot::WordMatch { words, .. }) = &snap.prompt else {
            panic!("expected word-match prompt");
        };
        let apple = words.iter().find(|t| t.id == "1").unwrap();
        assert_eq!(apple.state, TileState::Selected);

        round.select_meaning("1").unwrap();
        let snap = RoundSnapshot::from(&round);
        let Some(PromptSnapshot::WordMatch { words, meanings }) = &snap.prompt else {
            panic!("expected word-match prompt");
        };
        assert_eq!(words.iter().find(|t| t.id == "1").unwrap().state, TileState::Matched);
        assert_eq!(
            meanings.iter().find(|t| t.id == "1").unwrap().state,
            TileState::Matched
        );
    }

    #[test]
    fn wrong_pair_flashes_in_both_columns() {
        let mut round = Round::new(GameKind::WordMatch, words(), 3);
        round.start(RoundConfig::for_game(GameKind::WordMatch));
        round.select_word("1").unwrap();
        round.select_meaning("2").unwrap();

        let snap = RoundSnapshot::from(&round);
        let Some(PromptSnapshot::WordMatch { words, meanings }) = &snap.prompt else {
            panic!("expected word-match prompt");
        };
        for column in [words, meanings] {
            let state = |id: &str| column.iter().find(|t| t.id == id).unwrap().state;
            assert_eq!(state("1"), TileState::Wrong);
            assert_eq!(state("2"), TileState::Wrong);
            assert_eq!(state("3"), TileState::Idle);
        }
        assert_eq!(snap.timers.flash_ms, WRONG_PAIR_FLASH_MS);
    }

    #[test]
    fn serializes_camel_case() {
        let mut round = Round::new(GameKind::MultipleChoice, words(), 5);
        round.start(RoundConfig::for_game(GameKind::MultipleChoice));
        let json = serde_json::to_value(RoundSnapshot::from(&round)).unwrap();

        assert_eq!(json["kind"], "multiple-choice");
        assert_eq!(json["phase"], "inProgress");
        assert_eq!(json["remainingSecs"], 120);
        assert_eq!(json["prompt"]["type"], "multipleChoice");
        assert_eq!(json["prompt"]["options"].as_array().unwrap().len(), 3);
    }
}
