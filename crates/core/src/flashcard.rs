//! Flashcard study session
//!
//! A session walks a deck one card at a time. The player flips the card, then
//! marks it known or unknown, which moves on to the next card. Moving past the
//! last card completes the session. Cards marked unknown are remembered and can
//! be studied again with [`StudySession::review_mistakes`].
//!
//! Like [`Round`](crate::round::Round), the session is advanced by
//! `tick(elapsed_ms)`: it keeps the session clock and the optional auto-flip
//! delay.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::outcome::accuracy;
use crate::rng::SimpleRng;
use crate::timer::Delay;
use crate::types::{Word, DEFAULT_AUTO_FLIP_DELAY_SECS};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StudySettings {
    /// Flip the card automatically after `auto_flip_delay_secs`
    pub auto_flip: bool,
    pub auto_flip_delay_secs: u32,
    /// Shuffle the deck when the session is created
    pub shuffle_cards: bool,
}

impl Default for StudySettings {
    fn default() -> Self {
        Self {
            auto_flip: false,
            auto_flip_delay_secs: DEFAULT_AUTO_FLIP_DELAY_SECS,
            shuffle_cards: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StudyStats {
    pub total_cards: usize,
    pub correct: u32,
    pub answered: u32,
    pub streak: u32,
    pub best_streak: u32,
    /// Known cards over answered cards, in percent
    pub accuracy: u32,
    pub elapsed_secs: u32,
    /// `mm:ss`
    pub session_time: String,
}

#[derive(Debug, Clone)]
pub struct StudySession {
    cards: Vec<Word>,
    settings: StudySettings,
    rng: SimpleRng,
    index: usize,
    flipped: bool,
    complete: bool,
    correct: u32,
    answered: u32,
    streak: u32,
    best_streak: u32,
    /// Ids of cards marked unknown, in the order they were missed
    mistakes: Vec<String>,
    elapsed_ms: u64,
    auto_flip: Delay,
}

impl StudySession {
    pub fn new(cards: Vec<Word>, settings: StudySettings, seed: u32) -> Self {
        let mut session = Self {
            cards,
            settings,
            rng: SimpleRng::new(seed),
            index: 0,
            flipped: false,
            complete: false,
            correct: 0,
            answered: 0,
            streak: 0,
            best_streak: 0,
            mistakes: Vec::new(),
            elapsed_ms: 0,
            auto_flip: Delay::default(),
        };
        if settings.shuffle_cards {
            session.rng.shuffle(&mut session.cards);
        }
        session.show_front();
        session
    }

    pub fn cards(&self) -> &[Word] {
        &self.cards
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn current(&self) -> Option<&Word> {
        self.cards.get(self.index)
    }

    pub fn is_flipped(&self) -> bool {
        self.flipped
    }

    pub fn is_complete(&self) -> bool {
        self.complete
    }

    pub fn settings(&self) -> StudySettings {
        self.settings
    }

    pub fn mistakes(&self) -> &[String] {
        &self.mistakes
    }

    /// Change settings mid-session. Auto-flip takes effect on the current card.
    pub fn set_settings(&mut self, settings: StudySettings) {
        self.settings = settings;
        if self.flipped || self.complete {
            return;
        }
        self.arm_auto_flip();
    }

    pub fn flip(&mut self) {
        if self.complete || self.cards.is_empty() {
            return;
        }
        self.flipped = !self.flipped;
        if self.flipped {
            self.auto_flip.cancel();
        } else {
            self.arm_auto_flip();
        }
    }

    /// Next card; past the last card the session completes
    pub fn next(&mut self) {
        if self.complete {
            return;
        }
        if self.index + 1 < self.cards.len() {
            self.index += 1;
            self.show_front();
        } else {
            self.complete = true;
            self.auto_flip.cancel();
            debug!(
                correct = self.correct,
                answered = self.answered,
                mistakes = self.mistakes.len(),
                "study session complete"
            );
        }
    }

    /// Previous card (no-op on the first one)
    pub fn previous(&mut self) {
        if self.complete || self.index == 0 {
            return;
        }
        self.index -= 1;
        self.show_front();
    }

    pub fn mark_known(&mut self) {
        if self.complete || self.cards.is_empty() {
            return;
        }
        self.correct += 1;
        self.answered += 1;
        self.streak += 1;
        self.best_streak = self.best_streak.max(self.streak);
        self.next();
    }

    pub fn mark_unknown(&mut self) {
        let Some(card) = self.current() else {
            return;
        };
        if self.complete {
            return;
        }
        let id = card.id.clone();
        if !self.mistakes.contains(&id) {
            self.mistakes.push(id);
        }
        self.answered += 1;
        self.streak = 0;
        self.next();
    }

    /// Reorder the deck and go back to the first card
    pub fn shuffle(&mut self) {
        self.rng.shuffle(&mut self.cards);
        self.index = 0;
        self.complete = false;
        self.show_front();
    }

    /// Start over with the same deck; the session clock keeps running
    pub fn restart(&mut self) {
        self.index = 0;
        self.complete = false;
        self.correct = 0;
        self.answered = 0;
        self.streak = 0;
        self.best_streak = 0;
        self.mistakes.clear();
        self.show_front();
    }

    /// New session over the cards marked unknown, or `None` if there were none
    pub fn review_mistakes(&mut self) -> Option<StudySession> {
        if self.mistakes.is_empty() {
            return None;
        }
        let cards: Vec<Word> = self
            .cards
            .iter()
            .filter(|w| self.mistakes.contains(&w.id))
            .cloned()
            .collect();
        debug!(cards = cards.len(), "reviewing mistakes");
        Some(StudySession::new(cards, self.settings, self.rng.next_u32()))
    }

    /// Advance the clock; returns true when the display should change
    pub fn tick(&mut self, elapsed_ms: u32) -> bool {
        if self.complete {
            return false;
        }
        let before = self.elapsed_secs();
        self.elapsed_ms += u64::from(elapsed_ms);
        let mut changed = self.elapsed_secs() != before;

        if self.auto_flip.tick(elapsed_ms) {
            self.flipped = true;
            changed = true;
        }
        changed
    }

    pub fn elapsed_secs(&self) -> u32 {
        u32::try_from(self.elapsed_ms / 1000).unwrap_or(u32::MAX)
    }

    pub fn stats(&self) -> StudyStats {
        let elapsed_secs = self.elapsed_secs();
        StudyStats {
            total_cards: self.cards.len(),
            correct: self.correct,
            answered: self.answered,
            streak: self.streak,
            best_streak: self.best_streak,
            accuracy: accuracy(self.correct as usize, self.answered as usize),
            elapsed_secs,
            session_time: format_clock(elapsed_secs),
        }
    }

    fn show_front(&mut self) {
        self.flipped = false;
        self.arm_auto_flip();
    }

    fn arm_auto_flip(&mut self) {
        if self.settings.auto_flip && !self.cards.is_empty() {
            self.auto_flip
                .arm(self.settings.auto_flip_delay_secs.saturating_mul(1000));
        } else {
            self.auto_flip.cancel();
        }
    }
}

/// `mm:ss`, minutes not wrapped
pub fn format_clock(secs: u32) -> String {
    format!("{:02}:{:02}", secs / 60, secs % 60)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn deck() -> Vec<Word> {
        (1..=4)
            .map(|i| Word::new(i.to_string(), format!("word{i}"), format!("meaning{i}")))
            .collect()
    }

    #[test]
    fn walks_the_deck_and_completes() {
        let mut s = StudySession::new(deck(), StudySettings::default(), 1);
        assert_eq!(s.current().unwrap().id, "1");

        s.previous();
        assert_eq!(s.index(), 0);

        for _ in 0..3 {
            s.next();
        }
        assert_eq!(s.index(), 3);
        assert!(!s.is_complete());

        s.next();
        assert!(s.is_complete());
        assert_eq!(s.index(), 3);
    }

    #[test]
    fn flip_toggles_and_new_card_shows_front() {
        let mut s = StudySession::new(deck(), StudySettings::default(), 1);
        s.flip();
        assert!(s.is_flipped());
        s.flip();
        assert!(!s.is_flipped());
        s.flip();
        s.next();
        assert!(!s.is_flipped());
    }

    #[test]
    fn marking_tracks_streaks_and_mistakes() {
        let mut s = StudySession::new(deck(), StudySettings::default(), 1);
        s.mark_known();
        s.mark_known();
        s.mark_unknown();
        s.mark_known();

        let stats = s.stats();
        assert!(s.is_complete());
        assert_eq!(stats.correct, 3);
        assert_eq!(stats.answered, 4);
        assert_eq!(stats.streak, 1);
        assert_eq!(stats.best_streak, 2);
        assert_eq!(stats.accuracy, 75);
        assert_eq!(s.mistakes(), ["3".to_string()]);

        // completed sessions ignore further marks
        s.mark_known();
        assert_eq!(s.stats().answered, 4);
    }

    #[test]
    fn accuracy_is_zero_before_any_answer() {
        let s = StudySession::new(deck(), StudySettings::default(), 1);
        assert_eq!(s.stats().accuracy, 0);
    }

    #[test]
    fn review_mistakes_builds_a_smaller_session() {
        let mut s = StudySession::new(deck(), StudySettings::default(), 1);
        assert!(s.review_mistakes().is_none());

        s.mark_unknown();
        s.mark_known();
        s.mark_unknown();
        let review = s.review_mistakes().unwrap();
        let ids: Vec<_> = review.cards().iter().map(|w| w.id.as_str()).collect();
        assert_eq!(ids, ["1", "3"]);
        assert_eq!(review.stats().answered, 0);
    }

    #[test]
    fn restart_resets_progress() {
        let mut s = StudySession::new(deck(), StudySettings::default(), 1);
        s.mark_unknown();
        s.mark_known();
        s.restart();
        assert_eq!(s.index(), 0);
        assert_eq!(s.stats().answered, 0);
        assert!(s.mistakes().is_empty());
    }

    #[test]
    fn shuffle_keeps_cards_and_rewinds() {
        let mut s = StudySession::new(deck(), StudySettings::default(), 7);
        s.next();
        s.shuffle();
        assert_eq!(s.index(), 0);
        let mut ids: Vec<_> = s.cards().iter().map(|w| w.id.clone()).collect();
        ids.sort();
        assert_eq!(ids, ["1", "2", "3", "4"]);
    }

    #[test]
    fn auto_flip_fires_after_delay() {
        let settings = StudySettings {
            auto_flip: true,
            ..StudySettings::default()
        };
        let mut s = StudySession::new(deck(), settings, 1);
        s.tick(2999);
        assert!(!s.is_flipped());
        assert!(s.tick(1));
        assert!(s.is_flipped());

        s.next();
        assert!(!s.is_flipped());
        s.tick(3000);
        assert!(s.is_flipped());
    }

    #[test]
    fn enabling_auto_flip_mid_card() {
        let mut s = StudySession::new(deck(), StudySettings::default(), 1);
        s.tick(5000);
        s.set_settings(StudySettings {
            auto_flip: true,
            auto_flip_delay_secs: 1,
            shuffle_cards: false,
        });
        assert!(s.tick(1000));
        assert!(s.is_flipped());

        s.set_settings(StudySettings::default());
        s.next();
        s.tick(5000);
        assert!(!s.is_flipped());
    }

    #[test]
    fn auto_flip_off_never_flips() {
        let mut s = StudySession::new(deck(), StudySettings::default(), 1);
        s.tick(60_000);
        assert!(!s.is_flipped());
    }

    #[test]
    fn session_clock_formats_minutes() {
        let mut s = StudySession::new(deck(), StudySettings::default(), 1);
        s.tick(65_000);
        assert_eq!(s.stats().session_time, "01:05");
        assert_eq!(format_clock(0), "00:00");
        assert_eq!(format_clock(600), "10:00");
    }

    #[test]
    fn empty_deck_is_complete_on_first_next() {
        let mut s = StudySession::new(Vec::new(), StudySettings::default(), 1);
        assert!(s.current().is_none());
        s.mark_known();
        assert_eq!(s.stats().answered, 0);
        s.next();
        assert!(s.is_complete());
    }
}
