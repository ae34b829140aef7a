use vocab_quiz::core::{
    deck, Difficulty, LearnedFilter, Outcome, Round, RoundSnapshot, SortBy, StudySession,
    StudySettings, WordFilter,
};
use vocab_quiz::term::{Column, FrameBuffer, QuizView, RoundUi, Viewport, WordListUi};
use vocab_quiz::types::{GameKind, Response, RoundConfig, Word};

const VP: Viewport = Viewport {
    width: 80,
    height: 24,
};

fn render_round(round: &Round, ui: RoundUi<'_>) -> String {
    let mut fb = FrameBuffer::new(0, 0);
    QuizView::default().render_round(&RoundSnapshot::from(round), ui, VP, &mut fb);
    assert_eq!((fb.width(), fb.height()), (80, 24));
    fb.text()
}

fn started(kind: GameKind, seed: u32) -> Round {
    let mut round = Round::new(kind, deck::builtin(), seed);
    round.start(RoundConfig::for_game(kind));
    round
}

#[test]
fn fill_blank_shows_meaning_masked_sentence_and_answer() {
    let round = started(GameKind::FillBlank, 3);
    let question = round.current_question().unwrap().clone();
    let text = render_round(
        &round,
        RoundUi {
            answer: "entre",
            ..RoundUi::default()
        },
    );

    assert!(text.contains("Fill in the Blanks"));
    assert!(text.contains("Question 1/8"));
    assert!(text.contains("01:30"));
    assert!(text.contains("______"));
    assert!(text.contains("> entre_"));
    let first_word = question.meaning.split_whitespace().next().unwrap();
    assert!(text.contains(first_word));
    assert!(!text.to_lowercase().contains(&format!(" {} ", question.word.to_lowercase())));
    assert!(!text.contains("answer limit reached"));
}

#[test]
fn fill_blank_full_answer_shows_limit_hint() {
    let round = started(GameKind::FillBlank, 3);
    let text = render_round(
        &round,
        RoundUi {
            answer: "entrepreneurship",
            answer_full: true,
            ..RoundUi::default()
        },
    );
    assert!(text.contains("> entrepreneurship_"));
    assert!(text.contains("(answer limit reached)"));
}

#[test]
fn multiple_choice_lists_numbered_options() {
    let round = started(GameKind::MultipleChoice, 4);
    let text = render_round(&round, RoundUi::default());

    let word = &round.current_question().unwrap().word;
    assert!(text.contains(&format!("What does \"{word}\" mean?")));
    for i in 1..=4 {
        assert!(text.contains(&format!("{i}. ")), "missing option {i}");
    }
    assert!(text.contains("Question 1/8"));
}

#[test]
fn multiple_choice_shows_feedback_after_answer() {
    let mut round = started(GameKind::MultipleChoice, 4);
    let wrong = round
        .options()
        .iter()
        .position(|o| *o != round.current_question().unwrap().meaning)
        .unwrap();
    round.choose_option(wrong).unwrap();

    let text = render_round(
        &round,
        RoundUi {
            cursor: wrong,
            ..RoundUi::default()
        },
    );
    assert!(text.contains("Incorrect. Answer:"));
}

#[test]
fn word_match_draws_both_columns() {
    let mut round = started(GameKind::WordMatch, 6);
    let first = round.questions()[0].clone();
    round
        .submit_answer(Response::pair(first.id.clone(), first.id.clone()))
        .unwrap();

    let text = render_round(
        &round,
        RoundUi {
            cursor: 1,
            column: Column::Meanings,
            ..RoundUi::default()
        },
    );
    assert!(text.contains("Matched 1/6"));
    for w in round.questions() {
        assert!(text.contains(&w.word), "missing {}", w.word);
    }
    assert!(text.contains('✓'));
    assert!(text.contains("Match!"));
}

#[test]
fn summary_reports_score_accuracy_and_answers() {
    let pool = vec![
        Word::new("1", "apple", "quả táo").with_example("An apple a day."),
        Word::new("2", "book", "quyển sách").with_example("Read a book."),
    ];
    let mut round = Round::new(GameKind::FillBlank, pool, 1);
    round.start(RoundConfig {
        question_count: 2,
        time_limit_secs: 30,
        points_per_correct: 10,
        option_count: None,
    });
    let word = round.current_question().unwrap().word.clone();
    round.submit_answer(Response::text(word)).unwrap();
    round.tick(2000);
    round.submit_answer(Response::text("zebra")).unwrap();
    round.tick(2000);

    let outcome = Outcome::from_round(&round).unwrap();
    let mut fb = FrameBuffer::new(80, 24);
    QuizView::default().render_summary(&outcome, VP, &mut fb);
    let text = fb.text();

    assert!(text.contains("Round complete!"));
    assert!(text.contains("Correct   1/2"));
    assert!(text.contains("Accuracy  50%"));
    assert!(text.contains("Time      00:04"));
    assert!(text.contains("✓"));
    assert!(text.contains("✗"));
    assert!(text.contains(": zebra"));
}

#[test]
fn flashcard_front_back_and_completion() {
    let mut session = StudySession::new(deck::builtin(), StudySettings::default(), 1);
    let view = QuizView::default();
    let mut fb = FrameBuffer::new(80, 24);

    view.render_flashcards(&session, VP, &mut fb);
    assert!(fb.text().contains("Entrepreneur"));
    assert!(fb.text().contains("Card 1/8"));
    assert!(fb.text().contains("Auto-flip off"));

    session.flip();
    view.render_flashcards(&session, VP, &mut fb);
    assert!(fb.text().contains("A person who starts and runs a business"));

    for _ in 0..8 {
        session.mark_known();
    }
    view.render_flashcards(&session, VP, &mut fb);
    assert!(fb.text().contains("Session complete!"));
    assert!(fb.text().contains("Accuracy     100%"));
}

#[test]
fn narrow_terminal_still_renders() {
    let round = started(GameKind::WordMatch, 2);
    let mut fb = FrameBuffer::new(0, 0);
    let snap = RoundSnapshot::from(&round);
    for (w, h) in [(10, 5), (24, 8), (2, 2), (0, 0)] {
        QuizView::default().render_round(&snap, RoundUi::default(), Viewport::new(w, h), &mut fb);
        assert_eq!((fb.width(), fb.height()), (w, h));
    }
}

#[test]
fn flashcard_status_shows_auto_flip() {
    let settings = StudySettings {
        auto_flip: true,
        ..StudySettings::default()
    };
    let session = StudySession::new(deck::builtin(), settings, 1);
    let mut fb = FrameBuffer::new(80, 24);
    QuizView::default().render_flashcards(&session, VP, &mut fb);
    assert!(fb.text().contains("Auto-flip on"));
    assert!(fb.text().contains("a auto"));
}

#[test]
fn word_list_shows_filters_and_learned_marks() {
    let list = deck::builtin_list();
    let filter = WordFilter {
        difficulty: Some(Difficulty::Easy),
        learned: LearnedFilter::Unlearned,
        ..WordFilter::default()
    };
    let shown = list.view(&filter, SortBy::Word);
    let ui = WordListUi {
        filter: &filter,
        sort: SortBy::Word,
        cursor: 0,
    };
    let mut fb = FrameBuffer::new(80, 24);
    QuizView::default().render_word_list(&list, &shown, ui, VP, &mut fb);

    let text = fb.text();
    assert!(text.contains("Word List"));
    assert!(text.contains("Learned 2/8  Showing 2"));
    assert!(text.contains("Sort word  Difficulty Easy  Status unlearned"));
    assert!(text.contains("Ambitious (adjective, Easy)"));
    assert!(text.contains("Efficient (adjective, Easy)"));
    assert!(!text.contains("Collaborate"));
}

#[test]
fn empty_word_list_view_says_so() {
    let list = deck::builtin_list();
    let filter = WordFilter {
        search: "zzz".into(),
        ..WordFilter::default()
    };
    let shown = list.view(&filter, SortBy::Learned);
    let ui = WordListUi {
        filter: &filter,
        sort: SortBy::Learned,
        cursor: 0,
    };
    let mut fb = FrameBuffer::new(80, 24);
    QuizView::default().render_word_list(&list, &shown, ui, VP, &mut fb);
    assert!(fb.text().contains("No words match."));
    assert!(fb.text().contains("Sort learned"));
}
