//! Terminal vocab quiz runner (default binary).
//!
//! Fixed-timestep loop: draw, poll input until the next frame, tick.
//! It uses crossterm for input and the framebuffer renderer from `term`.

use std::time::{Duration, Instant};

use anyhow::{anyhow, Result};
use crossterm::event::{self, Event, KeyEventKind};
use tracing::info;

use vocab_quiz::core::deck;
use vocab_quiz::input::{map_key, should_quit};
use vocab_quiz::term::{FrameBuffer, QuizView, TerminalRenderer, Viewport};
use vocab_quiz::types::FRAME_MS;
use vocab_quiz::{logging, App, AppConfig};

fn main() -> Result<()> {
    let mut config = AppConfig::from_env();
    let flags = config
        .apply_args(std::env::args().skip(1))
        .map_err(|e| anyhow!("{e}\nusage: vocab-quiz [--json] [--seed <n>]"))?;
    logging::init(config.log_path.as_deref())?;
    info!(seed = config.seed, "vocab-quiz starting");

    let mut app = App::new(config, deck::builtin_list());

    let mut term = TerminalRenderer::new();
    let result = term.enter().and_then(|()| run(&mut term, &mut app));

    // Always try to restore terminal state.
    let _ = term.exit();
    result?;

    if flags.json {
        for outcome in app.outcomes() {
            println!("{}", serde_json::to_string(outcome)?);
        }
    }
    Ok(())
}

fn run(term: &mut TerminalRenderer, app: &mut App) -> Result<()> {
    let view = QuizView::default();
    let mut fb = FrameBuffer::new(0, 0);
    let frame = Duration::from_millis(FRAME_MS as u64);
    let mut last_tick = Instant::now();
    let mut dirty = true;

    loop {
        if dirty {
            let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
            app.render(&view, Viewport::new(w, h), &mut fb);
            term.draw(&fb)?;
            dirty = false;
        }

        // Input with timeout until next tick.
        let timeout = frame.saturating_sub(last_tick.elapsed());
        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if should_quit(key, app.input_mode()) {
                        return Ok(());
                    }
                    if let Some(input) = map_key(key, app.input_mode()) {
                        app.handle(input);
                        dirty = true;
                    }
                    if app.quit_requested() {
                        return Ok(());
                    }
                }
                Event::Resize(..) => {
                    term.invalidate();
                    dirty = true;
                }
                _ => {}
            }
        }

        // Tick.
        let elapsed = last_tick.elapsed();
        if elapsed >= frame {
            last_tick = Instant::now();
            let ms = u32::try_from(elapsed.as_millis()).unwrap_or(u32::MAX);
            if app.tick(ms) {
                dirty = true;
            }
        }
    }
}
