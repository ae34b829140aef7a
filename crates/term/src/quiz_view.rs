//! QuizView: maps round snapshots, outcomes and study sessions into a framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::flashcard::format_clock;
use crate::core::{
    Outcome, PromptSnapshot, RoundSnapshot, SortBy, StudySession, TileSnapshot, TileState,
    VocabEntry, WordFilter, WordList,
};
use crate::fb::{wrap, Cell, CellStyle, FrameBuffer, Rgb};
use crate::types::{EndReason, Feedback, GameKind, Phase};

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

/// Word-match column holding the cursor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Column {
    #[default]
    Words,
    Meanings,
}

impl Column {
    pub fn toggle(self) -> Self {
        match self {
            Column::Words => Column::Meanings,
            Column::Meanings => Column::Words,
        }
    }
}

/// Host-side input state drawn alongside a round
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundUi<'a> {
    /// Text typed so far (fill blank)
    pub answer: &'a str,
    /// Highlighted option (multiple choice) or tile row (word match)
    pub cursor: usize,
    pub column: Column,
    /// The answer field turned characters away
    pub answer_full: bool,
}

impl Default for RoundUi<'_> {
    fn default() -> Self {
        Self {
            answer: "",
            cursor: 0,
            column: Column::Words,
            answer_full: false,
        }
    }
}

/// Word list controls drawn above the list
#[derive(Debug, Clone, Copy)]
pub struct WordListUi<'a> {
    pub filter: &'a WordFilter,
    pub sort: SortBy,
    /// Highlighted row of the shown entries
    pub cursor: usize,
}

/// Entries of the start menu, in order
pub const MENU_ITEMS: [&str; 5] = [
    "Word Match",
    "Fill in the Blanks",
    "Multiple Choice",
    "Flashcards",
    "Word List",
];

const TEXT: CellStyle = CellStyle::fg(Rgb::new(220, 220, 220));
const MUTED: CellStyle = CellStyle::fg(Rgb::new(140, 140, 150));
const TITLE: CellStyle = CellStyle::fg(Rgb::new(120, 180, 255)).bold();
const BORDER: CellStyle = CellStyle::fg(Rgb::new(90, 90, 110));
const GOOD: CellStyle = CellStyle::fg(Rgb::new(100, 220, 120));
const BAD: CellStyle = CellStyle::fg(Rgb::new(230, 90, 90));
const ACCENT: CellStyle = CellStyle::fg(Rgb::new(240, 200, 80)).bold();
const CURSOR: CellStyle = CellStyle::fg(Rgb::new(20, 20, 30)).on(Rgb::new(120, 180, 255));

/// Stateless renderer for every screen of the app.
#[derive(Debug, Clone, Copy)]
pub struct QuizView {
    /// Widest the content panel grows on large terminals
    max_width: u16,
}

impl Default for QuizView {
    fn default() -> Self {
        Self { max_width: 72 }
    }
}

/// Content area inside the panel border
#[derive(Debug, Clone, Copy)]
struct Area {
    x: u16,
    y: u16,
    w: u16,
    h: u16,
}

impl Area {
    fn bottom(&self) -> u16 {
        self.y + self.h
    }
}

impl QuizView {
    pub fn new(max_width: u16) -> Self {
        Self {
            max_width: max_width.max(24),
        }
    }

    pub fn render_menu(&self, selected: usize, viewport: Viewport, fb: &mut FrameBuffer) {
        let area = self.panel(fb, viewport, "Vocab Quiz");
        let mut y = area.y;

        fb.put_str_max(area.x, y, "Pick a game:", area.w, MUTED);
        y += 2;
        for (i, item) in MENU_ITEMS.iter().enumerate() {
            if y >= area.bottom() {
                break;
            }
            let style = if i == selected { CURSOR } else { TEXT };
            let label = format!(" {}. {} ", i + 1, item);
            fb.put_str_max(area.x + 2, y, &label, area.w.saturating_sub(2), style);
            y += 1;
        }

        if let Some(kind) = GameKind::ALL.get(selected) {
            for line in wrap(kind.instructions(), area.w) {
                y += 1;
                if y >= area.bottom().saturating_sub(1) {
                    break;
                }
                fb.put_str_max(area.x, y, &line, area.w, MUTED);
            }
        }

        self.footer(fb, area, "1-5 choose  ↑/↓ move  Enter start  q quit");
    }

    pub fn render_round(
        &self,
        snap: &RoundSnapshot,
        ui: RoundUi<'_>,
        viewport: Viewport,
        fb: &mut FrameBuffer,
    ) {
        let area = self.panel(fb, viewport, snap.kind.title());
        let mut y = area.y;

        self.status_line(fb, area, y, snap);
        y += 2;

        match &snap.prompt {
            Some(PromptSnapshot::WordMatch { words, meanings }) => {
                self.word_match(fb, area, y, words, meanings, ui);
            }
            Some(PromptSnapshot::FillBlank {
                meaning, sentence, ..
            }) => {
                y = self.labelled(fb, area, y, "Meaning", meaning, TEXT);
                y = self.labelled(fb, area, y + 1, "Sentence", sentence, TEXT);
                y += 1;
                let entry = format!("> {}_", ui.answer);
                fb.put_str_max(area.x, y, &entry, area.w, ACCENT);
                if ui.answer_full {
                    fb.put_str_max(area.x, y + 1, "(answer limit reached)", area.w, MUTED);
                }
            }
            Some(PromptSnapshot::MultipleChoice { word, options }) => {
                let question = format!("What does \"{word}\" mean?");
                for line in wrap(&question, area.w) {
                    fb.put_str_max(area.x, y, &line, area.w, TEXT.bold());
                    y += 1;
                }
                y += 1;
                let expected = match &snap.feedback {
                    Some(Feedback::Incorrect { expected }) => Some(expected.as_str()),
                    _ => None,
                };
                for (i, option) in options.iter().enumerate() {
                    if y >= area.bottom().saturating_sub(2) {
                        break;
                    }
                    let style = match (&snap.feedback, expected) {
                        (Some(_), Some(e)) if e == option.as_str() => GOOD,
                        (Some(Feedback::Correct), _) if i == ui.cursor => GOOD,
                        (Some(Feedback::Incorrect { .. }), _) if i == ui.cursor => BAD,
                        (None, _) if i == ui.cursor => CURSOR,
                        _ => TEXT,
                    };
                    let label = format!(" {}. {} ", i + 1, option);
                    fb.put_str_max(area.x, y, &label, area.w, style);
                    y += 1;
                }
            }
            None => {}
        }

        if let Some(feedback) = &snap.feedback {
            let (text, style) = feedback_line(feedback);
            let fy = area.bottom().saturating_sub(2);
            fb.put_str_max(area.x, fy, &text, area.w, style);
        }

        let help = match snap.kind {
            GameKind::WordMatch => "↑/↓ move  Tab switch column  Enter pick  Esc menu",
            GameKind::FillBlank => "type the word  Enter submit  Esc menu",
            GameKind::MultipleChoice => "↑/↓ move  Enter or 1-8 choose  Esc menu",
        };
        self.footer(fb, area, help);
    }

    pub fn render_summary(&self, outcome: &Outcome, viewport: Viewport, fb: &mut FrameBuffer) {
        let title = match outcome.end_reason {
            EndReason::TimeUp => "Time's up!",
            EndReason::AllMatched => "All pairs matched!",
            EndReason::Exhausted => "Round complete!",
        };
        let area = self.panel(fb, viewport, title);
        let mut y = area.y;

        fb.put_str_max(area.x, y, outcome.kind.title(), area.w, MUTED);
        y += 2;

        let rows = [
            ("Score", outcome.score.to_string()),
            (
                "Correct",
                format!("{}/{}", outcome.correct_count, outcome.question_count),
            ),
            ("Accuracy", format!("{}%", outcome.accuracy)),
            ("Time", format_clock(outcome.time_spent_secs)),
        ];
        for (label, value) in rows {
            fb.put_str(area.x, y, label, MUTED);
            fb.put_str_max(area.x + 10, y, &value, area.w.saturating_sub(10), ACCENT);
            y += 1;
        }
        y += 1;

        for answer in &outcome.answers {
            if y >= area.bottom().saturating_sub(1) {
                break;
            }
            let (mark, style) = if answer.correct {
                ('✓', GOOD)
            } else {
                ('✗', BAD)
            };
            fb.put_char(area.x, y, mark, style);
            let line = format!("{}: {}", answer.word, answer.submitted);
            fb.put_str_max(area.x + 2, y, &line, area.w.saturating_sub(2), TEXT);
            y += 1;
        }

        self.footer(fb, area, "r play again  Esc menu");
    }

    pub fn render_flashcards(&self, session: &StudySession, viewport: Viewport, fb: &mut FrameBuffer) {
        let area = self.panel(fb, viewport, "Flashcards");
        let stats = session.stats();
        let mut y = area.y;

        let status = format!(
            "Card {}/{}  Known {}/{}  Streak {}  {}  Auto-flip {}",
            (session.index() + 1).min(session.len()),
            session.len(),
            stats.correct,
            stats.answered,
            stats.streak,
            stats.session_time,
            if session.settings().auto_flip { "on" } else { "off" }
        );
        fb.put_str_max(area.x, y, &status, area.w, MUTED);
        y += 2;

        if session.is_complete() {
            fb.put_str_max(area.x, y, "Session complete!", area.w, TITLE);
            y += 2;
            let lines = [
                format!("Accuracy     {}%", stats.accuracy),
                format!("Best streak  {}", stats.best_streak),
                format!("Time         {}", stats.session_time),
                format!("To review    {}", session.mistakes().len()),
            ];
            for line in &lines {
                fb.put_str_max(area.x, y, line, area.w, TEXT);
                y += 1;
            }
            self.footer(fb, area, "r restart  m review mistakes  s shuffle  Esc menu");
            return;
        }

        if let Some(card) = session.current() {
            let card_h = area.h.saturating_sub(5).min(9);
            fb.draw_box(area.x, y, area.w, card_h, BORDER);
            let inner_w = area.w.saturating_sub(4);
            let mut cy = y + 1;
            if session.is_flipped() {
                for line in wrap(&card.meaning, inner_w) {
                    if cy + 1 >= y + card_h {
                        break;
                    }
                    fb.put_centered(area.x + 2, cy, inner_w, &line, TEXT.bold());
                    cy += 1;
                }
                if let Some(example) = &card.example {
                    cy += 1;
                    for line in wrap(example, inner_w) {
                        if cy + 1 >= y + card_h {
                            break;
                        }
                        fb.put_centered(area.x + 2, cy, inner_w, &line, MUTED);
                        cy += 1;
                    }
                }
            } else {
                let mid = y + card_h / 2;
                fb.put_centered(area.x + 2, mid, inner_w, &card.word, TITLE);
            }
        }

        self.footer(
            fb,
            area,
            "Space flip  ←/→ move  k known  u unknown  s shuffle  a auto  Esc",
        );
    }

    /// Word list: counts, search field, active filters and the shown entries
    pub fn render_word_list(
        &self,
        list: &WordList,
        shown: &[&VocabEntry],
        ui: WordListUi<'_>,
        viewport: Viewport,
        fb: &mut FrameBuffer,
    ) {
        let area = self.panel(fb, viewport, "Word List");
        let mut y = area.y;

        let counts = format!(
            "Learned {}/{}  Showing {}",
            list.learned_count(),
            list.len(),
            shown.len()
        );
        fb.put_str_max(area.x, y, &counts, area.w, TEXT);
        y += 1;

        let search = format!("Search: {}_", ui.filter.search);
        fb.put_str_max(area.x, y, &search, area.w, ACCENT);
        y += 1;

        let filters = format!(
            "Sort {}  Difficulty {}  Status {}",
            ui.sort.as_str(),
            ui.filter.difficulty.map_or("all", |d| d.as_str()),
            ui.filter.learned.as_str()
        );
        fb.put_str_max(area.x, y, &filters, area.w, MUTED);
        y += 2;

        if shown.is_empty() {
            fb.put_str_max(area.x, y, "No words match.", area.w, MUTED);
        }

        // keep the cursor row on screen
        let rows = area.bottom().saturating_sub(2).saturating_sub(y) as usize;
        let first = (ui.cursor + 1).saturating_sub(rows.max(1));
        for (i, entry) in shown.iter().enumerate().skip(first).take(rows) {
            let (mark, style) = if entry.learned {
                ('✓', GOOD)
            } else {
                (' ', TEXT)
            };
            let style = if i == ui.cursor { CURSOR } else { style };
            let line = format!(
                "{} ({}, {})  {}",
                entry.word.word, entry.part_of_speech, entry.difficulty, entry.word.meaning
            );
            fb.put_char(area.x, y, mark, style);
            fb.put_str_max(area.x + 2, y, &line, area.w.saturating_sub(2), style);
            y += 1;
        }

        if area.h >= 3 {
            let help = "Tab sort  Shift+Tab status  ←/→ difficulty";
            fb.put_str_max(area.x, area.bottom() - 2, help, area.w, MUTED.dim());
        }
        self.footer(fb, area, "type to search  Enter learned  Del delete  Esc menu");
    }

    /// Clear, draw the bordered panel with its title, and return the content area
    fn panel(&self, fb: &mut FrameBuffer, viewport: Viewport, title: &str) -> Area {
        fb.resize(viewport.width, viewport.height);
        fb.clear(Cell::default());

        let w = viewport.width.min(self.max_width);
        let h = viewport.height;
        let x = (viewport.width - w) / 2;
        fb.draw_box(x, 0, w, h, BORDER);

        let label = format!(" {title} ");
        let lw = (label.chars().count() as u16).min(w.saturating_sub(4));
        fb.put_str_max(x + 2, 0, &label, lw, TITLE);

        Area {
            x: x + 2,
            y: 1,
            w: w.saturating_sub(4),
            h: h.saturating_sub(2),
        }
    }

    fn footer(&self, fb: &mut FrameBuffer, area: Area, help: &str) {
        if area.h < 2 {
            return;
        }
        fb.put_str_max(area.x, area.bottom() - 1, help, area.w, MUTED.dim());
    }

    fn status_line(&self, fb: &mut FrameBuffer, area: Area, y: u16, snap: &RoundSnapshot) {
        let progress = match snap.kind {
            GameKind::WordMatch => format!("Matched {}/{}", snap.correct_count, snap.question_count),
            _ => format!("Question {}/{}", snap.question_number(), snap.question_count),
        };
        let left = format!("Score {}  {}", snap.score, progress);
        fb.put_str_max(area.x, y, &left, area.w, TEXT);

        let clock = format_clock(snap.remaining_secs);
        let style = if snap.phase == Phase::InProgress && snap.remaining_secs <= 10 {
            BAD.bold()
        } else {
            ACCENT
        };
        let cw = clock.chars().count() as u16;
        if area.w > cw + left.chars().count() as u16 {
            fb.put_str(area.x + area.w - cw, y, &clock, style);
        }
    }

    fn labelled(
        &self,
        fb: &mut FrameBuffer,
        area: Area,
        mut y: u16,
        label: &str,
        text: &str,
        style: CellStyle,
    ) -> u16 {
        fb.put_str_max(area.x, y, label, area.w, MUTED);
        y += 1;
        for line in wrap(text, area.w.saturating_sub(2)) {
            if y >= area.bottom().saturating_sub(2) {
                break;
            }
            fb.put_str_max(area.x + 2, y, &line, area.w.saturating_sub(2), style);
            y += 1;
        }
        y
    }

    fn word_match(
        &self,
        fb: &mut FrameBuffer,
        area: Area,
        y: u16,
        words: &[TileSnapshot],
        meanings: &[TileSnapshot],
        ui: RoundUi<'_>,
    ) {
        let word_w = (area.w / 3).max(8);
        let meaning_x = area.x + word_w + 2;
        let meaning_w = area.w.saturating_sub(word_w + 2);

        for (row, (column, tiles)) in [(Column::Words, words), (Column::Meanings, meanings)]
            .into_iter()
            .enumerate()
        {
            let (x, w) = if row == 0 {
                (area.x, word_w)
            } else {
                (meaning_x, meaning_w)
            };
            for (i, tile) in tiles.iter().enumerate() {
                let ty = y + i as u16;
                if ty >= area.bottom().saturating_sub(2) {
                    break;
                }
                let focused = column == ui.column && i == ui.cursor;
                let style = match tile.state {
                    TileState::Matched => GOOD.dim(),
                    TileState::Wrong => BAD.bold(),
                    TileState::Selected => ACCENT,
                    TileState::Idle => TEXT,
                };
                let style = if focused { CURSOR } else { style };
                let mark = match tile.state {
                    TileState::Matched => '✓',
                    TileState::Wrong => '✗',
                    _ if focused => '>',
                    _ => ' ',
                };
                fb.put_char(x, ty, mark, style);
                fb.put_str_max(x + 1, ty, &tile.text, w.saturating_sub(1), style);
            }
        }
    }
}

fn feedback_line(feedback: &Feedback) -> (String, CellStyle) {
    match feedback {
        Feedback::Correct => ("Correct!".to_string(), GOOD.bold()),
        Feedback::Incorrect { expected } => (format!("Incorrect. Answer: {expected}"), BAD.bold()),
        Feedback::Matched { .. } => ("Match!".to_string(), GOOD.bold()),
        Feedback::Mismatch { .. } => ("Not a pair, try again".to_string(), BAD.bold()),
        Feedback::Ignored => (String::new(), MUTED),
    }
}
