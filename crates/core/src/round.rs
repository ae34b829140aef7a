//! Round state module - one play-through of a quiz variant
//!
//! A [`Round`] ties together sampling, option generation, cloze construction
//! and the timers. It is advanced by player operations (`submit_answer`,
//! `select_word`, ...) and by `tick(elapsed_ms)` from the host loop.
//!
//! Lifecycle: `NotStarted --start--> InProgress --(exhausted | all matched | time up)--> Ended`.
//! `start` may be called again at any point; it always begins a fresh round.

use std::collections::HashSet;

use tracing::{debug, warn};

use crate::cloze::{cloze_for, Cloze};
use crate::error::QuizError;
use crate::options::{build_options, Options};
use crate::rng::SimpleRng;
use crate::sampler::sample;
use crate::timer::{Countdown, Delay};
use crate::types::*;

/// One-shot notifications consumed by the host (see [`Round::take_event`])
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundEvent {
    Ended {
        round_id: u32,
        score: u32,
        time_spent_secs: u32,
        reason: EndReason,
    },
}

/// A mismatched word-match pair, highlighted until the flash delay fires
///
/// While it flashes both ids are blocked in both columns. A newer mismatch
/// replaces the pair and re-arms the flash.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WrongPair {
    pub word_id: String,
    pub meaning_id: String,
}

impl WrongPair {
    pub fn contains(&self, id: &str) -> bool {
        self.word_id == id || self.meaning_id == id
    }
}

/// Complete round state
#[derive(Debug, Clone)]
pub struct Round {
    kind: GameKind,
    config: RoundConfig,
    /// Full word list (distractors are drawn from here, not only from `questions`)
    pool: Vec<Word>,
    rng: SimpleRng,
    seed: u32,
    /// Monotonic id, incremented on every start.
    round_id: u32,
    phase: Phase,
    questions: Vec<Word>,
    current_index: usize,
    score: u32,
    elapsed_secs: u32,
    answers: Vec<AnswerRecord>,
    countdown: Countdown,
    feedback_delay: Delay,
    feedback: Option<Feedback>,
    end_reason: Option<EndReason>,
    last_event: Option<RoundEvent>,
    // multiple choice
    options: Options,
    // fill blank
    cloze: Option<Cloze>,
    // word match
    matched: HashSet<String>,
    wrong: Option<WrongPair>,
    wrong_flash: Delay,
    selected_word: Option<String>,
    selected_meaning: Option<String>,
    meaning_order: Vec<usize>,
}

impl Round {
    /// Create a round over `pool` with the variant's default config
    pub fn new(kind: GameKind, pool: Vec<Word>, seed: u32) -> Self {
        Self {
            kind,
            config: RoundConfig::for_game(kind),
            pool,
            rng: SimpleRng::new(seed),
            seed,
            round_id: 0,
            phase: Phase::NotStarted,
            questions: Vec::new(),
            current_index: 0,
            score: 0,
            elapsed_secs: 0,
            answers: Vec::new(),
            countdown: Countdown::idle(),
            feedback_delay: Delay::default(),
            feedback: None,
            end_reason: None,
            last_event: None,
            options: Options::new(),
            cloze: None,
            matched: HashSet::new(),
            wrong: None,
            wrong_flash: Delay::default(),
            selected_word: None,
            selected_meaning: None,
            meaning_order: Vec::new(),
        }
    }

    /// Begin a fresh play-through, discarding everything from a previous one
    pub fn start(&mut self, config: RoundConfig) {
        if self.phase == Phase::InProgress {
            debug!(round_id = self.round_id, "restarting round mid-play");
        }

        self.config = RoundConfig {
            points_per_correct: config.points(),
            ..config
        };
        self.round_id = self.round_id.wrapping_add(1);
        self.phase = Phase::InProgress;
        self.current_index = 0;
        self.score = 0;
        self.elapsed_secs = 0;
        self.answers.clear();
        self.feedback_delay.cancel();
        self.feedback = None;
        self.end_reason = None;
        self.last_event = None;
        self.options.clear();
        self.cloze = None;
        self.matched.clear();
        self.wrong = None;
        self.wrong_flash.cancel();
        self.selected_word = None;
        self.selected_meaning = None;

        self.questions = sample(&self.pool, config.question_count as usize, &mut self.rng);
        self.meaning_order = (0..self.questions.len()).collect();
        if self.kind == GameKind::WordMatch {
            self.rng.shuffle(&mut self.meaning_order);
        }
        self.countdown.start(config.time_limit_secs);

        debug!(
            round_id = self.round_id,
            kind = self.kind.as_str(),
            questions = self.questions.len(),
            time_limit_secs = config.time_limit_secs,
            "round started"
        );

        if self.questions.is_empty() {
            let reason = match self.kind {
                GameKind::WordMatch => EndReason::AllMatched,
                _ => EndReason::Exhausted,
            };
            self.end(reason);
            return;
        }
        if config.time_limit_secs == 0 {
            self.end(EndReason::TimeUp);
            return;
        }

        self.prepare_question();
    }

    pub fn kind(&self) -> GameKind {
        self.kind
    }

    pub fn config(&self) -> &RoundConfig {
        &self.config
    }

    pub fn seed(&self) -> u32 {
        self.seed
    }

    pub fn round_id(&self) -> u32 {
        self.round_id
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn questions(&self) -> &[Word] {
        &self.questions
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    /// Question being asked (fill blank / multiple choice)
    pub fn current_question(&self) -> Option<&Word> {
        match self.kind {
            GameKind::WordMatch => None,
            _ => self.questions.get(self.current_index),
        }
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn elapsed_secs(&self) -> u32 {
        self.elapsed_secs
    }

    pub fn remaining_secs(&self) -> u32 {
        self.countdown.remaining_secs()
    }

    /// `time_limit - remaining`, meaningful once the round has started
    pub fn time_spent_secs(&self) -> u32 {
        self.config
            .time_limit_secs
            .saturating_sub(self.countdown.remaining_secs())
    }

    pub fn answers(&self) -> &[AnswerRecord] {
        &self.answers
    }

    /// Correct answers, or matched pairs for word match
    pub fn correct_count(&self) -> usize {
        match self.kind {
            GameKind::WordMatch => self.matched.len(),
            _ => self.answers.iter().filter(|a| a.correct).count(),
        }
    }

    pub fn feedback(&self) -> Option<&Feedback> {
        self.feedback.as_ref()
    }

    /// True while answer feedback is displayed before advancing
    pub fn feedback_pending(&self) -> bool {
        self.feedback_delay.is_armed()
    }

    pub fn end_reason(&self) -> Option<EndReason> {
        self.end_reason
    }

    pub fn options(&self) -> &[String] {
        &self.options
    }

    pub fn cloze(&self) -> Option<&Cloze> {
        self.cloze.as_ref()
    }

    pub fn matched_count(&self) -> usize {
        self.matched.len()
    }

    pub fn is_matched(&self, id: &str) -> bool {
        self.matched.contains(id)
    }

    pub fn wrong_pair(&self) -> Option<&WrongPair> {
        self.wrong.as_ref()
    }

    pub fn selected_word(&self) -> Option<&str> {
        self.selected_word.as_deref()
    }

    pub fn selected_meaning(&self) -> Option<&str> {
        self.selected_meaning.as_deref()
    }

    /// Word-match meaning column, in its per-round shuffled order
    pub fn meaning_column(&self) -> impl Iterator<Item = &Word> + '_ {
        self.meaning_order
            .iter()
            .filter_map(move |&i| self.questions.get(i))
    }

    pub(crate) fn feedback_delay_ms(&self) -> u32 {
        self.feedback_delay.remaining_ms()
    }

    pub(crate) fn flash_ms(&self) -> u32 {
        self.wrong_flash.remaining_ms()
    }

    /// Take the pending event, if any (each event is returned once)
    pub fn take_event(&mut self) -> Option<RoundEvent> {
        self.last_event.take()
    }

    /// Submit a response for the current question
    pub fn submit_answer(&mut self, response: Response) -> Result<Feedback, QuizError> {
        self.ensure_playing("submit an answer")?;
        if response.kind() != self.kind {
            return Err(QuizError::UnexpectedResponse {
                kind: response.kind(),
            });
        }

        match response {
            Response::Pair {
                word_id,
                meaning_id,
            } => {
                self.selected_word = None;
                self.selected_meaning = None;
                Ok(self.check_pair(&word_id, &meaning_id))
            }
            Response::Text { text } => self.check_text(&text),
            Response::Choice { option } => self.check_choice(option),
        }
    }

    /// Multiple choice: submit the option at `index`
    pub fn choose_option(&mut self, index: usize) -> Result<Feedback, QuizError> {
        self.ensure_playing("choose an option")?;
        let option = self
            .options
            .get(index)
            .cloned()
            .ok_or_else(|| QuizError::UnknownOption {
                option: format!("#{}", index + 1),
            })?;
        self.submit_answer(Response::Choice { option })
    }

    /// Word match: click a tile in the word column
    ///
    /// Clicking the selected tile again clears the selection. When a meaning is
    /// already selected the pair is checked. Returns the feedback of that check.
    pub fn select_word(&mut self, id: &str) -> Result<Option<Feedback>, QuizError> {
        self.ensure_playing("select a word")?;
        self.ensure_kind(GameKind::WordMatch)?;

        let flashing = self.is_flashing(id);
        if self.matched.contains(id) || flashing || !self.has_question(id) {
            return Ok(None);
        }
        if self.selected_word.as_deref() == Some(id) {
            self.selected_word = None;
            return Ok(None);
        }
        self.selected_word = Some(id.to_string());
        Ok(self.check_selection())
    }

    /// Word match: click a tile in the meaning column (identified by its word id)
    pub fn select_meaning(&mut self, id: &str) -> Result<Option<Feedback>, QuizError> {
        self.ensure_playing("select a meaning")?;
        self.ensure_kind(GameKind::WordMatch)?;

        let flashing = self.is_flashing(id);
        if self.matched.contains(id) || flashing || !self.has_question(id) {
            return Ok(None);
        }
        if self.selected_meaning.as_deref() == Some(id) {
            self.selected_meaning = None;
            return Ok(None);
        }
        self.selected_meaning = Some(id.to_string());
        Ok(self.check_selection())
    }

    /// Advance timers by `elapsed_ms`
    ///
    /// Returns true when anything visible changed. Order within a tick: the
    /// countdown, the feedback delay (advance), then the wrong-pair flash. The
    /// first end condition reached wins; ending cancels every timer.
    pub fn tick(&mut self, elapsed_ms: u32) -> bool {
        if self.phase != Phase::InProgress {
            return false;
        }

        let mut changed = false;

        let step = self.countdown.tick(elapsed_ms);
        if step.seconds > 0 {
            self.elapsed_secs += step.seconds;
            changed = true;
        }
        if step.expired {
            self.end(EndReason::TimeUp);
            return true;
        }

        if self.feedback_delay.tick(elapsed_ms) {
            self.advance();
            changed = true;
            if self.phase == Phase::Ended {
                return true;
            }
        }

        if self.wrong_flash.tick(elapsed_ms) {
            self.wrong = None;
            changed = true;
        }

        changed
    }

    fn ensure_playing(&self, operation: &'static str) -> Result<(), QuizError> {
        if self.phase == Phase::InProgress {
            Ok(())
        } else {
            Err(QuizError::InvalidTransition {
                phase: self.phase,
                operation,
            })
        }
    }

    fn ensure_kind(&self, kind: GameKind) -> Result<(), QuizError> {
        if self.kind == kind {
            Ok(())
        } else {
            Err(QuizError::UnexpectedResponse { kind })
        }
    }

    /// Part of the wrong pair currently flashing, in either column
    pub fn is_flashing(&self, id: &str) -> bool {
        self.wrong.as_ref().is_some_and(|w| w.contains(id))
    }

    fn has_question(&self, id: &str) -> bool {
        self.questions.iter().any(|w| w.id == id)
    }

    fn check_selection(&mut self) -> Option<Feedback> {
        match (self.selected_word.take(), self.selected_meaning.take()) {
            (Some(word_id), Some(meaning_id)) => Some(self.check_pair(&word_id, &meaning_id)),
            (word, meaning) => {
                self.selected_word = word;
                self.selected_meaning = meaning;
                None
            }
        }
    }

    fn check_pair(&mut self, word_id: &str, meaning_id: &str) -> Feedback {
        let blocked = |id: &str| self.matched.contains(id) || !self.has_question(id);
        if blocked(word_id)
            || blocked(meaning_id)
            || self.is_flashing(word_id)
            || self.is_flashing(meaning_id)
        {
            return Feedback::Ignored;
        }

        let feedback = if word_id == meaning_id {
            self.matched.insert(word_id.to_string());
            self.score = self.score.saturating_add(self.config.points_per_correct);
            debug!(word_id, score = self.score, "pair matched");
            Feedback::Matched {
                word_id: word_id.to_string(),
            }
        } else {
            self.wrong = Some(WrongPair {
                word_id: word_id.to_string(),
                meaning_id: meaning_id.to_string(),
            });
            self.wrong_flash.arm(WRONG_PAIR_FLASH_MS);
            debug!(word_id, meaning_id, "pair mismatched");
            Feedback::Mismatch {
                word_id: word_id.to_string(),
                meaning_id: meaning_id.to_string(),
            }
        };
        self.feedback = Some(feedback.clone());

        if self.matched.len() >= self.questions.len() {
            self.end(EndReason::AllMatched);
        }
        feedback
    }

    fn check_text(&mut self, text: &str) -> Result<Feedback, QuizError> {
        if self.feedback_delay.is_armed() {
            return Err(QuizError::FeedbackPending);
        }
        let answer = text.trim();
        if answer.is_empty() {
            return Err(QuizError::EmptyAnswer);
        }
        let Some(question) = self.questions.get(self.current_index) else {
            return Err(QuizError::InvalidTransition {
                phase: self.phase,
                operation: "answer past the last question",
            });
        };

        let expected = question.word.clone();
        let correct = answer.to_lowercase() == expected.trim().to_lowercase();
        Ok(self.record(answer.to_string(), correct, expected))
    }

    fn check_choice(&mut self, option: String) -> Result<Feedback, QuizError> {
        if self.feedback_delay.is_armed() {
            return Err(QuizError::FeedbackPending);
        }
        if !self.options.contains(&option) {
            return Err(QuizError::UnknownOption { option });
        }
        let Some(question) = self.questions.get(self.current_index) else {
            return Err(QuizError::InvalidTransition {
                phase: self.phase,
                operation: "answer past the last question",
            });
        };

        let expected = question.meaning.clone();
        let correct = option == expected;
        Ok(self.record(option, correct, expected))
    }

    /// Log an answer, score it and schedule the advance
    fn record(&mut self, submitted: String, correct: bool, expected: String) -> Feedback {
        let word = self
            .questions
            .get(self.current_index)
            .map(|w| w.word.clone())
            .unwrap_or_default();

        self.answers.push(AnswerRecord {
            word,
            submitted,
            correct,
        });
        if correct {
            self.score = self.score.saturating_add(self.config.points_per_correct);
        }
        self.feedback_delay.arm(FEEDBACK_DELAY_MS);

        debug!(
            index = self.current_index,
            correct,
            score = self.score,
            "answer recorded"
        );

        let feedback = if correct {
            Feedback::Correct
        } else {
            Feedback::Incorrect { expected }
        };
        self.feedback = Some(feedback.clone());
        feedback
    }

    fn advance(&mut self) {
        self.current_index += 1;
        self.feedback = None;
        if self.current_index >= self.questions.len() {
            self.end(EndReason::Exhausted);
        } else {
            self.prepare_question();
        }
    }

    fn prepare_question(&mut self) {
        let Some(question) = self.questions.get(self.current_index) else {
            return;
        };
        match self.kind {
            GameKind::MultipleChoice => {
                self.options =
                    build_options(question, &self.pool, self.config.options(), &mut self.rng);
            }
            GameKind::FillBlank => {
                let cloze = cloze_for(question);
                if !cloze.is_masked() {
                    warn!(
                        error = %QuizError::MalformedExample {
                            word: question.word.clone(),
                        },
                        "showing sentence unmasked"
                    );
                }
                self.cloze = Some(cloze);
            }
            GameKind::WordMatch => {}
        }
    }

    fn end(&mut self, reason: EndReason) {
        if self.phase != Phase::InProgress {
            return;
        }
        self.phase = Phase::Ended;
        self.countdown.cancel();
        self.feedback_delay.cancel();
        self.wrong_flash.cancel();
        self.wrong = None;
        self.selected_word = None;
        self.selected_meaning = None;
        self.end_reason = Some(reason);

        let time_spent_secs = self.time_spent_secs();
        self.last_event = Some(RoundEvent::Ended {
            round_id: self.round_id,
            score: self.score,
            time_spent_secs,
            reason,
        });
        debug!(
            round_id = self.round_id,
            ?reason,
            score = self.score,
            time_spent_secs,
            "round ended"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn deck(n: usize) -> Vec<Word> {
        (0..n)
            .map(|i| {
                Word::new(i.to_string(), format!("word{i}"), format!("meaning{i}"))
                    .with_example(format!("This sentence uses word{i} once."))
            })
            .collect()
    }

    fn config(questions: u32, secs: u32) -> RoundConfig {
        RoundConfig {
            question_count: questions,
            time_limit_secs: secs,
            points_per_correct: 10,
            option_count: Some(4),
        }
    }

    #[test]
    fn test_new_round() {
        let round = Round::new(GameKind::FillBlank, deck(5), 1);
        assert_eq!(round.phase(), Phase::NotStarted);
        assert_eq!(round.round_id(), 0);
        assert!(round.questions().is_empty());
        assert_eq!(round.score(), 0);
        assert_eq!(*round.config(), RoundConfig::for_game(GameKind::FillBlank));
    }

    #[test]
    fn test_start_samples_questions() {
        let mut round = Round::new(GameKind::FillBlank, deck(10), 1);
        round.start(config(4, 30));

        assert_eq!(round.phase(), Phase::InProgress);
        assert_eq!(round.round_id(), 1);
        assert_eq!(round.questions().len(), 4);
        assert_eq!(round.current_index(), 0);
        assert_eq!(round.remaining_secs(), 30);
        assert!(round.cloze().unwrap().is_masked());
    }

    #[test]
    fn test_submit_before_start_is_rejected() {
        let mut round = Round::new(GameKind::FillBlank, deck(3), 1);
        let err = round.submit_answer(Response::text("word0")).unwrap_err();
        assert_eq!(
            err,
            QuizError::InvalidTransition {
                phase: Phase::NotStarted,
                operation: "submit an answer",
            }
        );
    }

    #[test]
    fn test_wrong_response_shape_is_rejected() {
        let mut round = Round::new(GameKind::FillBlank, deck(3), 1);
        round.start(config(3, 30));
        let err = round.submit_answer(Response::pair("0", "0")).unwrap_err();
        assert_eq!(
            err,
            QuizError::UnexpectedResponse {
                kind: GameKind::WordMatch
            }
        );
        assert!(round.answers().is_empty());
    }

    #[test]
    fn test_feedback_delay_gates_advance() {
        let mut round = Round::new(GameKind::FillBlank, deck(3), 1);
        round.start(config(3, 30));

        let word = round.current_question().unwrap().word.clone();
        assert_eq!(round.submit_answer(Response::text(word)), Ok(Feedback::Correct));
        assert!(round.feedback_pending());
        assert_eq!(
            round.submit_answer(Response::text("again")),
            Err(QuizError::FeedbackPending)
        );

        round.tick(FEEDBACK_DELAY_MS - 1);
        assert_eq!(round.current_index(), 0);
        round.tick(1);
        assert_eq!(round.current_index(), 1);
        assert!(round.feedback().is_none());
    }

    #[test]
    fn test_restart_mid_round_resets() {
        let mut round = Round::new(GameKind::FillBlank, deck(5), 1);
        round.start(config(3, 30));
        let word = round.current_question().unwrap().word.clone();
        round.submit_answer(Response::text(word)).unwrap();
        round.tick(2500);

        round.start(config(3, 30));
        assert_eq!(round.round_id(), 2);
        assert_eq!(round.score(), 0);
        assert_eq!(round.current_index(), 0);
        assert!(round.answers().is_empty());
        assert_eq!(round.remaining_secs(), 30);
        assert!(!round.feedback_pending());
        assert!(round.take_event().is_none());
    }

    #[test]
    fn test_empty_pool_ends_immediately() {
        let mut round = Round::new(GameKind::MultipleChoice, Vec::new(), 1);
        round.start(config(10, 120));
        assert_eq!(round.phase(), Phase::Ended);
        assert_eq!(round.end_reason(), Some(EndReason::Exhausted));
        assert_eq!(
            round.take_event(),
            Some(RoundEvent::Ended {
                round_id: 1,
                score: 0,
                time_spent_secs: 0,
                reason: EndReason::Exhausted,
            })
        );
    }

    #[test]
    fn test_zero_time_limit_ends_immediately() {
        let mut round = Round::new(GameKind::FillBlank, deck(3), 1);
        round.start(config(3, 0));
        assert_eq!(round.phase(), Phase::Ended);
        assert_eq!(round.end_reason(), Some(EndReason::TimeUp));
    }

    #[test]
    fn test_tick_is_noop_after_end() {
        let mut round = Round::new(GameKind::FillBlank, deck(3), 1);
        round.start(config(3, 2));
        round.tick(2000);
        assert_eq!(round.phase(), Phase::Ended);
        assert!(round.take_event().is_some());

        assert!(!round.tick(5000));
        assert_eq!(round.elapsed_secs(), 2);
        assert!(round.take_event().is_none());
    }

    #[test]
    fn test_choose_option_out_of_range() {
        let mut round = Round::new(GameKind::MultipleChoice, deck(6), 1);
        round.start(config(3, 30));
        assert!(matches!(
            round.choose_option(7),
            Err(QuizError::UnknownOption { .. })
        ));
        assert!(round.choose_option(0).is_ok());
    }

    #[test]
    fn test_select_on_wrong_variant() {
        let mut round = Round::new(GameKind::MultipleChoice, deck(6), 1);
        round.start(config(3, 30));
        assert_eq!(
            round.select_word("0"),
            Err(QuizError::UnexpectedResponse {
                kind: GameKind::WordMatch
            })
        );
    }

    #[test]
    fn test_huge_points_saturate_instead_of_overflowing() {
        let mut round = Round::new(GameKind::WordMatch, deck(2), 1);
        let mut cfg = config(2, 60);
        cfg.points_per_correct = u32::MAX / 2 + 1;
        round.start(cfg);
        assert_eq!(round.config().points_per_correct, MAX_POINTS_PER_CORRECT);

        round.submit_answer(Response::pair("0", "0")).unwrap();
        round.submit_answer(Response::pair("1", "1")).unwrap();
        assert_eq!(round.phase(), Phase::Ended);
        assert_eq!(round.score(), 2 * MAX_POINTS_PER_CORRECT);
    }

    #[test]
    fn test_flashing_pair_blocks_both_ids_in_both_columns() {
        let mut round = Round::new(GameKind::WordMatch, deck(3), 1);
        round.start(config(3, 60));

        assert!(matches!(
            round.submit_answer(Response::pair("0", "1")),
            Ok(Feedback::Mismatch { .. })
        ));
        assert!(round.is_flashing("0"));
        assert!(round.is_flashing("1"));

        // the word id is blocked in the meaning column and vice versa
        assert_eq!(round.select_meaning("0"), Ok(None));
        assert_eq!(round.selected_meaning(), None);
        assert_eq!(round.select_word("1"), Ok(None));
        assert_eq!(round.selected_word(), None);
        assert_eq!(
            round.submit_answer(Response::pair("1", "1")),
            Ok(Feedback::Ignored)
        );

        // unrelated tiles stay playable
        assert!(matches!(
            round.submit_answer(Response::pair("2", "2")),
            Ok(Feedback::Matched { .. })
        ));

        round.tick(WRONG_PAIR_FLASH_MS);
        assert!(!round.is_flashing("0"));
        assert!(matches!(
            round.submit_answer(Response::pair("1", "1")),
            Ok(Feedback::Matched { .. })
        ));
    }

    #[test]
    fn test_meaning_column_is_permutation_of_questions() {
        let mut round = Round::new(GameKind::WordMatch, deck(6), 9);
        round.start(config(6, 60));

        let mut column: Vec<_> = round.meaning_column().map(|w| w.id.clone()).collect();
        let mut ids: Vec<_> = round.questions().iter().map(|w| w.id.clone()).collect();
        column.sort();
        ids.sort();
        assert_eq!(column, ids);
    }
}
