//! Per-screen input state: the typed answer and the list cursor.

use arrayvec::ArrayString;

use crate::types::QuizInput;

/// Longest answer the text field accepts, in bytes
pub const ANSWER_CAPACITY: usize = 64;

/// Bounded text field for fill-blank answers and the word list search.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AnswerBuffer {
    text: ArrayString<ANSWER_CAPACITY>,
    /// A character was turned away for lack of room
    full: bool,
}

impl AnswerBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// True once a typed character was dropped at `ANSWER_CAPACITY`
    pub fn is_full(&self) -> bool {
        self.full
    }

    /// Append `c`; returns false when the field is full or `c` is a control char
    pub fn push(&mut self, c: char) -> bool {
        if c.is_control() {
            return false;
        }
        let pushed = self.text.try_push(c).is_ok();
        self.full = !pushed;
        pushed
    }

    /// Remove the last character; returns true if there was one
    pub fn erase(&mut self) -> bool {
        self.full = false;
        self.text.pop().is_some()
    }

    pub fn clear(&mut self) {
        self.text.clear();
        self.full = false;
    }

    /// Take the current text, leaving the field empty
    pub fn take(&mut self) -> String {
        let out = self.text.to_string();
        self.clear();
        out
    }

    /// Apply a text-editing input; returns true if the text changed
    pub fn apply(&mut self, input: QuizInput) -> bool {
        match input {
            QuizInput::Type(c) => self.push(c),
            QuizInput::Erase => self.erase(),
            _ => false,
        }
    }
}

/// Wrapping cursor over a list of `len` entries.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ListCursor {
    index: usize,
    len: usize,
}

impl ListCursor {
    pub fn new(len: usize) -> Self {
        Self { index: 0, len }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Resize, keeping the index in range
    pub fn set_len(&mut self, len: usize) {
        self.len = len;
        if self.index >= len {
            self.index = len.saturating_sub(1);
        }
    }

    pub fn reset(&mut self, len: usize) {
        *self = Self::new(len);
    }

    pub fn up(&mut self) {
        if self.len > 0 {
            self.index = (self.index + self.len - 1) % self.len;
        }
    }

    pub fn down(&mut self) {
        if self.len > 0 {
            self.index = (self.index + 1) % self.len;
        }
    }

    /// Jump to `index` if it is in range
    pub fn select(&mut self, index: usize) -> bool {
        if index < self.len {
            self.index = index;
            true
        } else {
            false
        }
    }

    /// Apply a navigation input; returns true if the cursor moved
    pub fn apply(&mut self, input: QuizInput) -> bool {
        let before = self.index;
        match input {
            QuizInput::Up => self.up(),
            QuizInput::Down => self.down(),
            QuizInput::Choose(i) => {
                self.select(i as usize);
            }
            _ => {}
        }
        self.index != before
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn answer_buffer_edits() {
        let mut buf = AnswerBuffer::new();
        for c in "runs".chars() {
            assert!(buf.apply(QuizInput::Type(c)));
        }
        assert!(buf.apply(QuizInput::Erase));
        assert_eq!(buf.as_str(), "run");
        assert!(!buf.apply(QuizInput::Submit));

        assert_eq!(buf.take(), "run");
        assert!(buf.is_empty());
        assert!(!buf.apply(QuizInput::Erase));
    }

    #[test]
    fn answer_buffer_is_bounded() {
        let mut buf = AnswerBuffer::new();
        for _ in 0..ANSWER_CAPACITY {
            assert!(buf.push('a'));
        }
        assert!(!buf.is_full());
        assert!(!buf.push('b'));
        assert!(buf.is_full());
        assert_eq!(buf.as_str().len(), ANSWER_CAPACITY);

        buf.erase();
        assert!(!buf.is_full());
        assert!(buf.push('c'));
        assert!(!buf.push('d'));
        assert_eq!(buf.take().len(), ANSWER_CAPACITY);
        assert!(!buf.is_full());
    }

    #[test]
    fn answer_buffer_accepts_multibyte() {
        let mut buf = AnswerBuffer::new();
        for c in "táo".chars() {
            buf.push(c);
        }
        buf.erase();
        assert_eq!(buf.as_str(), "tá");
        assert!(!buf.push('\n'));
    }

    #[test]
    fn cursor_wraps() {
        let mut cursor = ListCursor::new(3);
        cursor.up();
        assert_eq!(cursor.index(), 2);
        cursor.down();
        assert_eq!(cursor.index(), 0);
        assert!(cursor.apply(QuizInput::Choose(1)));
        assert_eq!(cursor.index(), 1);
        assert!(!cursor.apply(QuizInput::Choose(5)));
    }

    #[test]
    fn cursor_resize_clamps() {
        let mut cursor = ListCursor::new(5);
        cursor.select(4);
        cursor.set_len(2);
        assert_eq!(cursor.index(), 1);
        cursor.set_len(0);
        assert_eq!(cursor.index(), 0);
        cursor.down();
        assert_eq!(cursor.index(), 0);
    }
}
