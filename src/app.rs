//! Screen state machine for the terminal app.
//!
//! `App` owns the current screen and routes [`QuizInput`]s to the engine, the
//! study session or the word list. It does no I/O; `main` feeds it keys and
//! ticks and draws what `render` produces.

use tracing::{info, warn};

use crate::core::{
    deck, Outcome, PromptSnapshot, SimpleRng, SortBy, StudySession, StudySettings, WordFilter,
    WordList,
};
use crate::engine::QuizEngine;
use crate::input::{AnswerBuffer, InputMode, ListCursor};
use crate::term::{Column, FrameBuffer, QuizView, RoundUi, Viewport, WordListUi, MENU_ITEMS};
use crate::types::{GameKind, Phase, QuizInput, Response};
use crate::AppConfig;

/// Menu rows after the three games
const FLASHCARDS_ITEM: usize = 3;
const WORD_LIST_ITEM: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Menu,
    Round,
    Summary,
    Flashcards,
    Words,
}

pub struct App {
    config: AppConfig,
    /// Source of every quiz and study pool
    words: WordList,
    filter: WordFilter,
    sort: SortBy,
    study_settings: StudySettings,
    rng: SimpleRng,
    screen: Screen,
    menu: ListCursor,
    engine: Option<QuizEngine>,
    answer: AnswerBuffer,
    cursor: ListCursor,
    column: Column,
    /// Question index the cursor was last reset for
    cursor_question: usize,
    study: Option<StudySession>,
    outcomes: Vec<Outcome>,
    quit: bool,
}

impl App {
    pub fn new(config: AppConfig, words: impl Into<WordList>) -> Self {
        let words = words.into();
        for problem in deck::audit(&words.words()) {
            warn!(error = %problem, "deck entry will render unmasked");
        }
        Self {
            rng: SimpleRng::new(config.seed),
            config,
            words,
            filter: WordFilter::default(),
            sort: SortBy::default(),
            study_settings: StudySettings::default(),
            screen: Screen::Menu,
            menu: ListCursor::new(MENU_ITEMS.len()),
            engine: None,
            answer: AnswerBuffer::new(),
            cursor: ListCursor::default(),
            column: Column::Words,
            cursor_question: 0,
            study: None,
            outcomes: Vec::new(),
            quit: false,
        }
    }

    pub fn screen(&self) -> Screen {
        self.screen
    }

    pub fn engine(&self) -> Option<&QuizEngine> {
        self.engine.as_ref()
    }

    pub fn study(&self) -> Option<&StudySession> {
        self.study.as_ref()
    }

    pub fn words(&self) -> &WordList {
        &self.words
    }

    pub fn word_filter(&self) -> &WordFilter {
        &self.filter
    }

    pub fn sort(&self) -> SortBy {
        self.sort
    }

    /// Settings new study sessions start with
    pub fn study_settings(&self) -> StudySettings {
        self.study_settings
    }

    /// Every outcome of this run, oldest first
    pub fn outcomes(&self) -> &[Outcome] {
        &self.outcomes
    }

    pub fn quit_requested(&self) -> bool {
        self.quit
    }

    pub fn answer(&self) -> &str {
        self.answer.as_str()
    }

    pub fn cursor(&self) -> usize {
        self.cursor.index()
    }

    pub fn column(&self) -> Column {
        self.column
    }

    pub fn input_mode(&self) -> InputMode {
        match self.screen {
            Screen::Menu => InputMode::Menu,
            Screen::Summary => InputMode::Summary,
            Screen::Flashcards => InputMode::Flashcards,
            Screen::Words => InputMode::WordList,
            Screen::Round => match self.engine.as_ref().map(QuizEngine::kind) {
                Some(GameKind::FillBlank) => InputMode::TextEntry,
                Some(GameKind::MultipleChoice) => InputMode::Choice,
                Some(GameKind::WordMatch) | None => InputMode::Match,
            },
        }
    }

    pub fn handle(&mut self, input: QuizInput) {
        match self.screen {
            Screen::Menu => self.handle_menu(input),
            Screen::Round => self.handle_round(input),
            Screen::Summary => match input {
                QuizInput::Restart => {
                    if let Some(kind) = self.engine.as_ref().map(QuizEngine::kind) {
                        self.start_round(kind);
                    }
                }
                QuizInput::Back => self.to_menu(),
                _ => {}
            },
            Screen::Flashcards => self.handle_flashcards(input),
            Screen::Words => self.handle_words(input),
        }
    }

    /// Advance the active screen's clock; returns true when a redraw is needed
    pub fn tick(&mut self, elapsed_ms: u32) -> bool {
        match self.screen {
            Screen::Round => {
                let changed = self
                    .engine
                    .as_mut()
                    .is_some_and(|engine| engine.tick(elapsed_ms));
                self.sync_round();
                changed
            }
            Screen::Flashcards => self
                .study
                .as_mut()
                .is_some_and(|study| study.tick(elapsed_ms)),
            Screen::Menu | Screen::Summary | Screen::Words => false,
        }
    }

    pub fn render(&self, view: &QuizView, viewport: Viewport, fb: &mut FrameBuffer) {
        match self.screen {
            Screen::Menu => view.render_menu(self.menu.index(), viewport, fb),
            Screen::Round => {
                if let Some(engine) = &self.engine {
                    let ui = RoundUi {
                        answer: self.answer.as_str(),
                        cursor: self.cursor.index(),
                        column: self.column,
                        answer_full: self.answer.is_full(),
                    };
                    view.render_round(&engine.state(), ui, viewport, fb);
                }
            }
            Screen::Summary => {
                if let Some(outcome) = self.outcomes.last() {
                    view.render_summary(outcome, viewport, fb);
                }
            }
            Screen::Flashcards => {
                if let Some(study) = &self.study {
                    view.render_flashcards(study, viewport, fb);
                }
            }
            Screen::Words => {
                let shown = self.words.view(&self.filter, self.sort);
                let ui = WordListUi {
                    filter: &self.filter,
                    sort: self.sort,
                    cursor: self.cursor.index(),
                };
                view.render_word_list(&self.words, &shown, ui, viewport, fb);
            }
        }
    }

    fn handle_menu(&mut self, input: QuizInput) {
        match input {
            QuizInput::Up | QuizInput::Down => {
                self.menu.apply(input);
            }
            QuizInput::Choose(i) => {
                if self.menu.select(i as usize) {
                    self.launch(i as usize);
                }
            }
            QuizInput::Submit => self.launch(self.menu.index()),
            QuizInput::Back => self.quit = true,
            _ => {}
        }
    }

    fn launch(&mut self, item: usize) {
        match (GameKind::ALL.get(item), item) {
            (Some(&kind), _) => self.start_round(kind),
            (None, FLASHCARDS_ITEM) => self.start_flashcards(),
            (None, WORD_LIST_ITEM) => self.open_word_list(),
            _ => {}
        }
    }

    fn start_round(&mut self, kind: GameKind) {
        let seed = self.rng.next_u32();
        let config = self.config.round_config(kind);
        info!(kind = kind.as_str(), seed, ?config, "starting round");

        let mut engine = QuizEngine::new(kind, self.words.words(), seed);
        engine.on_complete(move |score, time_spent_secs| {
            info!(kind = kind.as_str(), score, time_spent_secs, "round complete");
        });
        engine.start(config);

        self.engine = Some(engine);
        self.answer.clear();
        self.column = Column::Words;
        self.cursor_question = usize::MAX;
        self.screen = Screen::Round;
        self.sync_round();
    }

    fn start_flashcards(&mut self) {
        let session = StudySession::new(
            self.words.words(),
            self.study_settings,
            self.rng.next_u32(),
        );
        info!(cards = session.len(), "starting study session");
        self.study = Some(session);
        self.screen = Screen::Flashcards;
    }

    fn open_word_list(&mut self) {
        self.filter = WordFilter::default();
        self.sort = SortBy::default();
        self.answer.clear();
        self.cursor.reset(self.words.len());
        self.screen = Screen::Words;
    }

    fn to_menu(&mut self) {
        // Dropping the engine drops its timers.
        self.engine = None;
        self.study = None;
        self.answer.clear();
        self.screen = Screen::Menu;
    }

    fn handle_round(&mut self, input: QuizInput) {
        if input == QuizInput::Back {
            self.to_menu();
            return;
        }
        let Some(engine) = self.engine.as_mut() else {
            return;
        };

        match engine.kind() {
            GameKind::FillBlank => match input {
                QuizInput::Submit => {
                    if engine.state().playable() && !self.answer.as_str().trim().is_empty() {
                        engine.submit_answer(Response::text(self.answer.take()));
                    }
                }
                _ => {
                    self.answer.apply(input);
                }
            },
            GameKind::MultipleChoice => match input {
                QuizInput::Up | QuizInput::Down => {
                    self.cursor.apply(input);
                }
                QuizInput::Choose(i) => {
                    if self.cursor.select(i as usize) {
                        engine.choose_option(i as usize);
                    }
                }
                QuizInput::Submit => {
                    engine.choose_option(self.cursor.index());
                }
                _ => {}
            },
            GameKind::WordMatch => match input {
                QuizInput::Up | QuizInput::Down => {
                    self.cursor.apply(input);
                }
                QuizInput::SwitchColumn => self.column = self.column.toggle(),
                QuizInput::Submit => {
                    let column = self.column;
                    if let Some(id) = tile_id(engine, column, self.cursor.index()) {
                        match column {
                            Column::Words => engine.select_word(&id),
                            Column::Meanings => engine.select_meaning(&id),
                        };
                    }
                }
                _ => {}
            },
        }

        self.sync_round();
    }

    /// Keep cursors in step with the round and leave for the summary once it ends
    fn sync_round(&mut self) {
        let Some(engine) = &self.engine else {
            return;
        };
        let state = engine.state();

        if state.phase == Phase::Ended {
            if let Some(outcome) = engine.outcome() {
                self.outcomes.push(outcome);
            }
            self.screen = Screen::Summary;
            return;
        }

        if state.current_index != self.cursor_question {
            self.cursor_question = state.current_index;
            let len = match &state.prompt {
                Some(PromptSnapshot::MultipleChoice { options, .. }) => options.len(),
                Some(PromptSnapshot::WordMatch { words, .. }) => words.len(),
                _ => 0,
            };
            self.cursor.reset(len);
        }
    }

    fn handle_flashcards(&mut self, input: QuizInput) {
        if input == QuizInput::Back {
            self.to_menu();
            return;
        }
        let Some(study) = self.study.as_mut() else {
            return;
        };
        match input {
            QuizInput::Flip => study.flip(),
            QuizInput::Next => study.next(),
            QuizInput::Previous => study.previous(),
            QuizInput::MarkKnown => study.mark_known(),
            QuizInput::MarkUnknown => study.mark_unknown(),
            QuizInput::Shuffle => study.shuffle(),
            QuizInput::Restart => study.restart(),
            QuizInput::ToggleAutoFlip => {
                let mut settings = study.settings();
                settings.auto_flip = !settings.auto_flip;
                study.set_settings(settings);
                self.study_settings.auto_flip = settings.auto_flip;
            }
            QuizInput::ReviewMistakes => {
                if let Some(review) = study.review_mistakes() {
                    *study = review;
                }
            }
            _ => {}
        }
    }

    fn handle_words(&mut self, input: QuizInput) {
        let refiltered = match input {
            QuizInput::Back => {
                self.to_menu();
                return;
            }
            QuizInput::Up | QuizInput::Down => {
                self.cursor.apply(input);
                false
            }
            QuizInput::Type(_) | QuizInput::Erase => {
                let changed = self.answer.apply(input);
                if changed {
                    self.filter.search = self.answer.as_str().to_string();
                }
                changed
            }
            QuizInput::CycleSort => {
                self.sort = self.sort.next();
                true
            }
            QuizInput::CycleFilter => {
                self.filter.learned = self.filter.learned.next();
                true
            }
            QuizInput::CycleDifficulty => {
                self.filter.cycle_difficulty();
                true
            }
            QuizInput::Submit | QuizInput::Delete => {
                self.edit_highlighted(input == QuizInput::Delete);
                false
            }
            _ => false,
        };
        if refiltered {
            self.cursor.reset(self.shown_len());
        }
    }

    /// Toggle or delete the highlighted word
    fn edit_highlighted(&mut self, delete: bool) {
        let Some(id) = self.highlighted_word() else {
            return;
        };
        let edited = if delete {
            self.words.remove(&id).map(|_| ())
        } else {
            self.words.toggle_learned(&id).map(|_| ())
        };
        if let Err(e) = edited {
            warn!(error = %e, "word list edit failed");
        }
        self.cursor.set_len(self.shown_len());
    }

    fn shown_len(&self) -> usize {
        self.words.view(&self.filter, self.sort).len()
    }

    /// Id of the word list row under the cursor
    fn highlighted_word(&self) -> Option<String> {
        self.words
            .view(&self.filter, self.sort)
            .get(self.cursor.index())
            .map(|e| e.id().to_string())
    }
}

/// Id of the tile at `row` in `column`
fn tile_id(engine: &QuizEngine, column: Column, row: usize) -> Option<String> {
    let round = engine.round();
    match column {
        Column::Words => round.questions().get(row).map(|w| w.id.clone()),
        Column::Meanings => round.meaning_column().nth(row).map(|w| w.id.clone()),
    }
}
