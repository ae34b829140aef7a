//! Cloze sentence construction for fill-in-the-blank questions.
//!
//! Every case-insensitive whole-word occurrence of the target is replaced with
//! [`MASK_TOKEN`]. Word characters are alphanumerics and `_`; a boundary sits
//! between a word character and a non-word character (or the sentence edge).
//! Inflected forms are not masked: "run" does not match "runs".

use crate::error::QuizError;
use crate::types::{Word, MASK_TOKEN};

/// A sentence with the target word masked out
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cloze {
    pub text: String,
    /// Number of occurrences replaced
    pub masked: usize,
}

impl Cloze {
    /// False when the sentence is shown as-is because the word never appeared
    pub fn is_masked(&self) -> bool {
        self.masked > 0
    }
}

/// Mask `target` in `sentence`.
///
/// # Examples
///
/// ```
/// use vocab_quiz_core::cloze::cloze;
///
/// let c = cloze("Collaborate early, collaborate often.", "collaborate");
/// assert_eq!(c.text, "______ early, ______ often.");
/// assert_eq!(c.masked, 2);
///
/// let c = cloze("She runs 5 kilometers every day.", "run");
/// assert_eq!(c.text, "She runs 5 kilometers every day.");
/// assert!(!c.is_masked());
/// ```
pub fn cloze(sentence: &str, target: &str) -> Cloze {
    let needle: Vec<char> = target.chars().collect();
    if needle.is_empty() {
        return Cloze {
            text: sentence.to_string(),
            masked: 0,
        };
    }

    let chars: Vec<char> = sentence.chars().collect();
    let mut text = String::with_capacity(sentence.len());
    let mut masked = 0;
    let mut i = 0;

    while i < chars.len() {
        let end = i + needle.len();
        if end <= chars.len()
            && matches_at(&chars[i..end], &needle)
            && is_boundary(i.checked_sub(1).map(|p| chars[p]), Some(chars[i]))
            && is_boundary(Some(chars[end - 1]), chars.get(end).copied())
        {
            text.push_str(MASK_TOKEN);
            masked += 1;
            i = end;
            continue;
        }
        text.push(chars[i]);
        i += 1;
    }

    Cloze { text, masked }
}

/// Cloze for a word's own example sentence (empty when it has none).
pub fn cloze_for(word: &Word) -> Cloze {
    cloze(word.example.as_deref().unwrap_or(""), &word.word)
}

/// Check that a word's example actually contains the word.
pub fn check_example(word: &Word) -> Result<(), QuizError> {
    if cloze_for(word).is_masked() {
        Ok(())
    } else {
        Err(QuizError::MalformedExample {
            word: word.word.clone(),
        })
    }
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

fn is_boundary(left: Option<char>, right: Option<char>) -> bool {
    left.is_some_and(is_word_char) != right.is_some_and(is_word_char)
}

fn matches_at(window: &[char], needle: &[char]) -> bool {
    window
        .iter()
        .zip(needle)
        .all(|(&a, &b)| a == b || a.to_lowercase().eq(b.to_lowercase()))
}
