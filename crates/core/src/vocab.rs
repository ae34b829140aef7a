//! Word list management: search, filter, sort and edit a vocabulary list.
//!
//! A [`WordList`] owns [`VocabEntry`]s (a quiz [`Word`] plus part of speech,
//! difficulty and a learned flag). [`WordList::view`] applies a
//! [`WordFilter`] and a [`SortBy`] order without touching the stored order.
//! Quizzes and flashcards draw their pool from [`WordList::words`].

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::QuizError;
use crate::types::Word;

/// Part of speech given to words added without one
pub const DEFAULT_PART_OF_SPEECH: &str = "noun";

/// Difficulty label; orders Easy < Medium < Hard
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum Difficulty {
    Easy,
    #[default]
    Medium,
    Hard,
}

impl Difficulty {
    pub fn as_str(self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Difficulty {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "easy" => Ok(Difficulty::Easy),
            "medium" => Ok(Difficulty::Medium),
            "hard" => Ok(Difficulty::Hard),
            _ => Err(()),
        }
    }
}

/// One managed word
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VocabEntry {
    #[serde(flatten)]
    pub word: Word,
    pub part_of_speech: String,
    pub difficulty: Difficulty,
    pub learned: bool,
}

impl VocabEntry {
    pub fn id(&self) -> &str {
        &self.word.id
    }
}

/// Fields of a word being added or edited
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WordDraft {
    pub word: String,
    pub meaning: String,
    pub example: Option<String>,
    /// Blank means [`DEFAULT_PART_OF_SPEECH`]
    pub part_of_speech: String,
    pub difficulty: Difficulty,
}

impl WordDraft {
    pub fn new(word: impl Into<String>, meaning: impl Into<String>) -> Self {
        Self {
            word: word.into(),
            meaning: meaning.into(),
            ..Self::default()
        }
    }

    pub fn with_example(mut self, example: impl Into<String>) -> Self {
        self.example = Some(example.into());
        self
    }

    pub fn with_part_of_speech(mut self, part_of_speech: impl Into<String>) -> Self {
        self.part_of_speech = part_of_speech.into();
        self
    }

    pub fn with_difficulty(mut self, difficulty: Difficulty) -> Self {
        self.difficulty = difficulty;
        self
    }

    fn into_entry(self, id: String, learned: bool) -> Result<VocabEntry, QuizError> {
        let word = self.word.trim();
        let meaning = self.meaning.trim();
        if word.is_empty() {
            return Err(QuizError::MissingField { field: "word" });
        }
        if meaning.is_empty() {
            return Err(QuizError::MissingField { field: "meaning" });
        }
        let part_of_speech = match self.part_of_speech.trim() {
            "" => DEFAULT_PART_OF_SPEECH.to_string(),
            pos => pos.to_string(),
        };
        let mut entry = Word::new(id, word, meaning);
        entry.example = self
            .example
            .map(|e| e.trim().to_string())
            .filter(|e| !e.is_empty());
        Ok(VocabEntry {
            word: entry,
            part_of_speech,
            difficulty: self.difficulty,
            learned,
        })
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum LearnedFilter {
    #[default]
    All,
    Learned,
    Unlearned,
}

impl LearnedFilter {
    pub fn as_str(self) -> &'static str {
        match self {
            LearnedFilter::All => "all",
            LearnedFilter::Learned => "learned",
            LearnedFilter::Unlearned => "unlearned",
        }
    }

    /// All -> Learned -> Unlearned -> All
    pub fn next(self) -> Self {
        match self {
            LearnedFilter::All => LearnedFilter::Learned,
            LearnedFilter::Learned => LearnedFilter::Unlearned,
            LearnedFilter::Unlearned => LearnedFilter::All,
        }
    }

    fn accepts(self, learned: bool) -> bool {
        match self {
            LearnedFilter::All => true,
            LearnedFilter::Learned => learned,
            LearnedFilter::Unlearned => !learned,
        }
    }
}

/// Which entries a [`WordList::view`] shows; the default shows everything
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WordFilter {
    /// Case-insensitive substring of the word or its meaning
    pub search: String,
    pub difficulty: Option<Difficulty>,
    /// Exact part of speech
    pub part_of_speech: Option<String>,
    pub learned: LearnedFilter,
}

impl WordFilter {
    pub fn matches(&self, entry: &VocabEntry) -> bool {
        let search = self.search.to_lowercase();
        let found = search.is_empty()
            || entry.word.word.to_lowercase().contains(&search)
            || entry.word.meaning.to_lowercase().contains(&search);
        found
            && self.difficulty.map_or(true, |d| entry.difficulty == d)
            && self
                .part_of_speech
                .as_deref()
                .map_or(true, |pos| entry.part_of_speech == pos)
            && self.learned.accepts(entry.learned)
    }

    /// Cycle the difficulty filter: any -> Easy -> Medium -> Hard -> any
    pub fn cycle_difficulty(&mut self) {
        self.difficulty = match self.difficulty {
            None => Some(Difficulty::Easy),
            Some(Difficulty::Easy) => Some(Difficulty::Medium),
            Some(Difficulty::Medium) => Some(Difficulty::Hard),
            Some(Difficulty::Hard) => None,
        };
    }
}

/// Display order of a [`WordList::view`]; ties keep list order
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum SortBy {
    /// Alphabetical, ignoring case
    #[default]
    Word,
    /// Easy first
    Difficulty,
    PartOfSpeech,
    /// Learned first
    Learned,
}

impl SortBy {
    pub fn as_str(self) -> &'static str {
        match self {
            SortBy::Word => "word",
            SortBy::Difficulty => "difficulty",
            SortBy::PartOfSpeech => "part of speech",
            SortBy::Learned => "learned",
        }
    }

    pub fn next(self) -> Self {
        match self {
            SortBy::Word => SortBy::Difficulty,
            SortBy::Difficulty => SortBy::PartOfSpeech,
            SortBy::PartOfSpeech => SortBy::Learned,
            SortBy::Learned => SortBy::Word,
        }
    }

    fn compare(self, a: &VocabEntry, b: &VocabEntry) -> Ordering {
        match self {
            SortBy::Word => a
                .word
                .word
                .to_lowercase()
                .cmp(&b.word.word.to_lowercase()),
            SortBy::Difficulty => a.difficulty.cmp(&b.difficulty),
            SortBy::PartOfSpeech => a
                .part_of_speech
                .to_lowercase()
                .cmp(&b.part_of_speech.to_lowercase()),
            SortBy::Learned => b.learned.cmp(&a.learned),
        }
    }
}

/// An editable vocabulary list with unique ids
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WordList {
    entries: Vec<VocabEntry>,
    next_id: u64,
}

impl WordList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a list from existing entries; later duplicates of an id are dropped
    pub fn from_entries(entries: impl IntoIterator<Item = VocabEntry>) -> Self {
        let mut list = Self::new();
        for entry in entries {
            if list.get(entry.id()).is_some() {
                debug!(id = entry.id(), "dropping duplicate word id");
                continue;
            }
            if let Ok(n) = entry.id().parse::<u64>() {
                list.next_id = list.next_id.max(n);
            }
            list.entries.push(entry);
        }
        list
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in insertion order
    pub fn entries(&self) -> &[VocabEntry] {
        &self.entries
    }

    pub fn get(&self, id: &str) -> Option<&VocabEntry> {
        self.entries.iter().find(|e| e.id() == id)
    }

    pub fn learned_count(&self) -> usize {
        self.entries.iter().filter(|e| e.learned).count()
    }

    /// Every distinct part of speech, sorted
    pub fn parts_of_speech(&self) -> Vec<&str> {
        let mut parts: Vec<&str> = self
            .entries
            .iter()
            .map(|e| e.part_of_speech.as_str())
            .collect();
        parts.sort_unstable();
        parts.dedup();
        parts
    }

    /// The quiz pool: every word, in list order
    pub fn words(&self) -> Vec<Word> {
        self.entries.iter().map(|e| e.word.clone()).collect()
    }

    /// Entries passing `filter`, ordered by `sort`
    pub fn view(&self, filter: &WordFilter, sort: SortBy) -> Vec<&VocabEntry> {
        let mut shown: Vec<&VocabEntry> =
            self.entries.iter().filter(|e| filter.matches(e)).collect();
        shown.sort_by(|a, b| sort.compare(a, b));
        shown
    }

    /// Add an unlearned word; returns its new id
    pub fn add(&mut self, draft: WordDraft) -> Result<String, QuizError> {
        let id = self.fresh_id();
        let entry = draft.into_entry(id.clone(), false)?;
        debug!(id = %id, word = %entry.word.word, "word added");
        self.entries.push(entry);
        Ok(id)
    }

    /// Replace a word's fields, keeping its id and learned flag
    pub fn update(&mut self, id: &str, draft: WordDraft) -> Result<(), QuizError> {
        let index = self.index_of(id)?;
        let learned = self.entries[index].learned;
        self.entries[index] = draft.into_entry(id.to_string(), learned)?;
        debug!(id, "word updated");
        Ok(())
    }

    pub fn remove(&mut self, id: &str) -> Result<VocabEntry, QuizError> {
        let index = self.index_of(id)?;
        debug!(id, "word removed");
        Ok(self.entries.remove(index))
    }

    /// Flip the learned flag; returns the new value
    pub fn toggle_learned(&mut self, id: &str) -> Result<bool, QuizError> {
        let index = self.index_of(id)?;
        let entry = &mut self.entries[index];
        entry.learned = !entry.learned;
        debug!(id, learned = entry.learned, "learned toggled");
        Ok(entry.learned)
    }

    fn index_of(&self, id: &str) -> Result<usize, QuizError> {
        self.entries
            .iter()
            .position(|e| e.id() == id)
            .ok_or_else(|| QuizError::UnknownWord { id: id.to_string() })
    }

    fn fresh_id(&mut self) -> String {
        loop {
            self.next_id = self.next_id.wrapping_add(1);
            let id = self.next_id.to_string();
            if self.get(&id).is_none() {
                return id;
            }
        }
    }
}

/// Plain quiz words become unlearned entries with default labels
impl From<Vec<Word>> for WordList {
    fn from(words: Vec<Word>) -> Self {
        Self::from_entries(words.into_iter().map(|word| VocabEntry {
            word,
            part_of_speech: DEFAULT_PART_OF_SPEECH.to_string(),
            difficulty: Difficulty::default(),
            learned: false,
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(id: &str, word: &str, meaning: &str, pos: &str, d: Difficulty, learned: bool) -> VocabEntry {
        VocabEntry {
            word: Word::new(id, word, meaning),
            part_of_speech: pos.to_string(),
            difficulty: d,
            learned,
        }
    }

    fn list() -> WordList {
        WordList::from_entries([
            entry("1", "Entrepreneur", "A person who starts a business", "noun", Difficulty::Medium, true),
            entry("2", "Resilient", "Able to recover quickly", "adjective", Difficulty::Hard, false),
            entry("3", "Collaborate", "To work together with others", "verb", Difficulty::Easy, true),
            entry("4", "ambitious", "Wanting success", "adjective", Difficulty::Easy, false),
        ])
    }

    fn ids(view: &[&VocabEntry]) -> Vec<String> {
        view.iter().map(|e| e.id().to_string()).collect()
    }

    #[test]
    fn search_matches_word_or_meaning_ignoring_case() {
        let list = list();
        let mut filter = WordFilter {
            search: "RESIL".into(),
            ..WordFilter::default()
        };
        assert_eq!(ids(&list.view(&filter, SortBy::Word)), ["2"]);

        filter.search = "together".into();
        assert_eq!(ids(&list.view(&filter, SortBy::Word)), ["3"]);

        filter.search = "zzz".into();
        assert!(list.view(&filter, SortBy::Word).is_empty());
    }

    #[test]
    fn filters_combine() {
        let list = list();
        let filter = WordFilter {
            part_of_speech: Some("adjective".into()),
            learned: LearnedFilter::Unlearned,
            ..WordFilter::default()
        };
        assert_eq!(ids(&list.view(&filter, SortBy::Word)), ["4", "2"]);

        let filter = WordFilter {
            difficulty: Some(Difficulty::Easy),
            learned: LearnedFilter::Learned,
            ..WordFilter::default()
        };
        assert_eq!(ids(&list.view(&filter, SortBy::Word)), ["3"]);
    }

    #[test]
    fn sort_orders() {
        let list = list();
        let all = WordFilter::default();
        // case-insensitive: "ambitious" sorts first
        assert_eq!(ids(&list.view(&all, SortBy::Word)), ["4", "3", "1", "2"]);
        // Easy < Medium < Hard, ties in list order
        assert_eq!(ids(&list.view(&all, SortBy::Difficulty)), ["3", "4", "1", "2"]);
        assert_eq!(ids(&list.view(&all, SortBy::PartOfSpeech)), ["2", "4", "1", "3"]);
        assert_eq!(ids(&list.view(&all, SortBy::Learned)), ["1", "3", "2", "4"]);
        // the stored order is untouched
        assert_eq!(list.entries()[0].id(), "1");
    }

    #[test]
    fn add_assigns_fresh_id_and_defaults() {
        let mut list = list();
        let id = list
            .add(WordDraft::new("  Versatile ", "Adaptable").with_example("  "))
            .unwrap();
        assert_eq!(id, "5");

        let added = list.get(&id).unwrap();
        assert_eq!(added.word.word, "Versatile");
        assert_eq!(added.part_of_speech, DEFAULT_PART_OF_SPEECH);
        assert_eq!(added.difficulty, Difficulty::Medium);
        assert!(!added.learned);
        assert!(added.word.example.is_none());
        assert_eq!(list.len(), 5);
    }

    #[test]
    fn add_rejects_blank_fields() {
        let mut list = WordList::new();
        assert_eq!(
            list.add(WordDraft::new(" ", "x")),
            Err(QuizError::MissingField { field: "word" })
        );
        assert_eq!(
            list.add(WordDraft::new("x", "")),
            Err(QuizError::MissingField { field: "meaning" })
        );
        assert!(list.is_empty());
    }

    #[test]
    fn toggle_update_remove() {
        let mut list = list();
        assert_eq!(list.learned_count(), 2);
        assert_eq!(list.toggle_learned("2"), Ok(true));
        assert_eq!(list.learned_count(), 3);

        list.update(
            "2",
            WordDraft::new("Resilience", "Capacity to recover").with_difficulty(Difficulty::Hard),
        )
        .unwrap();
        let updated = list.get("2").unwrap();
        assert_eq!(updated.word.word, "Resilience");
        assert!(updated.learned);

        let removed = list.remove("2").unwrap();
        assert_eq!(removed.word.word, "Resilience");
        assert_eq!(list.learned_count(), 2);
        assert_eq!(
            list.toggle_learned("2"),
            Err(QuizError::UnknownWord { id: "2".into() })
        );
    }

    #[test]
    fn ids_are_never_reused() {
        let mut list = list();
        list.remove("4").unwrap();
        let id = list.add(WordDraft::new("Efficient", "Well organized")).unwrap();
        assert_eq!(id, "5");
    }

    #[test]
    fn duplicate_ids_are_dropped() {
        let list = WordList::from(vec![
            Word::new("a", "apple", "quả táo"),
            Word::new("a", "again", "lại"),
        ]);
        assert_eq!(list.len(), 1);
        assert_eq!(list.words()[0].word, "apple");
    }

    #[test]
    fn filter_cycles() {
        let mut filter = WordFilter::default();
        for expected in [Some(Difficulty::Easy), Some(Difficulty::Medium), Some(Difficulty::Hard), None] {
            filter.cycle_difficulty();
            assert_eq!(filter.difficulty, expected);
        }
        assert_eq!(LearnedFilter::All.next().next().next(), LearnedFilter::All);
        assert_eq!(SortBy::Learned.next(), SortBy::Word);
        assert_eq!(list().parts_of_speech(), ["adjective", "noun", "verb"]);
        assert_eq!("hard".parse::<Difficulty>(), Ok(Difficulty::Hard));
    }
}
