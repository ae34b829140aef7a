//! Built-in demo deck.

use crate::cloze::check_example;
use crate::error::QuizError;
use crate::types::Word;
use crate::vocab::{Difficulty, VocabEntry, WordList};

/// Part of speech, difficulty and learned flag of each `BUILTIN` word
const LABELS: [(&str, Difficulty, bool); 8] = [
    ("noun", Difficulty::Medium, true),
    ("adjective", Difficulty::Hard, false),
    ("verb", Difficulty::Easy, true),
    ("noun", Difficulty::Medium, false),
    ("adjective", Difficulty::Hard, false),
    ("adjective", Difficulty::Medium, false),
    ("adjective", Difficulty::Easy, false),
    ("adjective", Difficulty::Easy, false),
];

const BUILTIN: [(&str, &str, &str); 8] = [
    (
        "Entrepreneur",
        "A person who starts and runs a business",
        "She became a successful entrepreneur after launching her tech startup.",
    ),
    (
        "Resilient",
        "Able to recover quickly from difficulties",
        "The resilient team bounced back from their initial failure.",
    ),
    (
        "Collaborate",
        "To work together with others on a project",
        "We need to collaborate with the marketing team on this campaign.",
    ),
    (
        "Innovation",
        "The introduction of new ideas or methods",
        "The company's innovation in renewable energy impressed investors.",
    ),
    (
        "Meticulous",
        "Showing great attention to detail",
        "Her meticulous planning ensured the event ran smoothly.",
    ),
    (
        "Versatile",
        "Able to adapt to many different functions",
        "He is a versatile player who can perform in multiple positions.",
    ),
    (
        "Ambitious",
        "Having a strong desire for success or achievement",
        "The ambitious young executive worked late every night.",
    ),
    (
        "Efficient",
        "Working in a well-organized way",
        "The new system is much more efficient than the old one.",
    ),
];

/// Business English words, ids `"1"..="8"`
pub fn builtin() -> Vec<Word> {
    BUILTIN
        .iter()
        .enumerate()
        .map(|(i, (word, meaning, example))| {
            Word::new((i + 1).to_string(), *word, *meaning).with_example(*example)
        })
        .collect()
}

/// The built-in words as a managed list
pub fn builtin_list() -> WordList {
    WordList::from_entries(builtin().into_iter().zip(LABELS).map(
        |(word, (part_of_speech, difficulty, learned))| VocabEntry {
            word,
            part_of_speech: part_of_speech.to_string(),
            difficulty,
            learned,
        },
    ))
}

/// Every word whose example sentence would render unmasked
pub fn audit(words: &[Word]) -> Vec<QuizError> {
    words
        .iter()
        .filter_map(|w| check_example(w).err())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_deck_is_clean() {
        let words = builtin();
        assert_eq!(words.len(), 8);
        assert_eq!(words[0].id, "1");
        assert_eq!(words[7].word, "Efficient");
        assert!(audit(&words).is_empty());
    }

    #[test]
    fn builtin_list_carries_labels() {
        let list = builtin_list();
        assert_eq!(list.words(), builtin());
        assert_eq!(list.learned_count(), 2);
        let resilient = list.get("2").unwrap();
        assert_eq!(resilient.part_of_speech, "adjective");
        assert_eq!(resilient.difficulty, Difficulty::Hard);
    }

    #[test]
    fn audit_reports_each_bad_example() {
        let words = vec![
            Word::new("1", "run", "chạy").with_example("She runs 5 kilometers every day."),
            Word::new("2", "apple", "quả táo"),
            Word::new("3", "cat", "con mèo").with_example("The cat sleeps."),
        ];
        assert_eq!(
            audit(&words),
            vec![
                QuizError::MalformedExample { word: "run".into() },
                QuizError::MalformedExample {
                    word: "apple".into()
                },
            ]
        );
    }
}
