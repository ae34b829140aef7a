//! Environment configuration for the terminal app.

use std::env;
use std::time::{SystemTime, UNIX_EPOCH};

use tracing::warn;

use crate::types::{GameKind, RoundConfig, MAX_POINTS_PER_CORRECT};

/// App configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub seed: u32,
    /// Overrides every game's time limit
    pub time_limit_secs: Option<u32>,
    /// Overrides every game's question count
    pub question_count: Option<u32>,
    /// Clamped to `MAX_POINTS_PER_CORRECT`
    pub points_per_correct: Option<u32>,
    pub log_path: Option<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            seed: clock_seed(),
            time_limit_secs: None,
            question_count: None,
            points_per_correct: None,
            log_path: None,
        }
    }
}

impl AppConfig {
    /// Read `VOCAB_QUIZ_*` variables. Missing or unparsable values fall back to defaults.
    pub fn from_env() -> Self {
        let seed = env::var("VOCAB_QUIZ_SEED")
            .ok()
            .and_then(|s| s.trim().parse().ok())
            .unwrap_or_else(clock_seed);

        let time_limit_secs = parse_var("VOCAB_QUIZ_TIME_LIMIT");
        let question_count = parse_var("VOCAB_QUIZ_QUESTIONS");
        let points_per_correct = parse_var("VOCAB_QUIZ_POINTS");

        let log_path = env::var("VOCAB_QUIZ_LOG_PATH")
            .ok()
            .map(|s| s.trim().to_string())
            .and_then(|s| if s.is_empty() { None } else { Some(s) });

        Self {
            seed,
            time_limit_secs,
            question_count,
            points_per_correct,
            log_path,
        }
    }

    /// Apply command-line flags on top of the environment
    pub fn apply_args<I>(&mut self, args: I) -> Result<CliFlags, String>
    where
        I: IntoIterator<Item = String>,
    {
        let mut flags = CliFlags::default();
        let mut args = args.into_iter();
        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--json" => flags.json = true,
                "--seed" => {
                    let value = args.next().ok_or("--seed needs a value")?;
                    self.seed = value
                        .parse()
                        .map_err(|_| format!("invalid seed {value:?}"))?;
                }
                other => return Err(format!("unknown argument {other:?}")),
            }
        }
        Ok(flags)
    }

    /// Per-game defaults with the overrides applied
    pub fn round_config(&self, kind: GameKind) -> RoundConfig {
        let mut config = RoundConfig::for_game(kind);
        if let Some(secs) = self.time_limit_secs {
            config.time_limit_secs = secs;
        }
        if let Some(count) = self.question_count {
            config.question_count = count;
        }
        if let Some(points) = self.points_per_correct {
            if points > MAX_POINTS_PER_CORRECT {
                warn!(points, max = MAX_POINTS_PER_CORRECT, "points per correct clamped");
            }
            config.points_per_correct = points.min(MAX_POINTS_PER_CORRECT);
        }
        config
    }
}

/// Flags that change what the binary does, not how rounds play
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CliFlags {
    /// Print each outcome as a JSON line after exit
    pub json: bool,
}

fn parse_var(name: &str) -> Option<u32> {
    env::var(name).ok().and_then(|s| s.trim().parse().ok())
}

fn clock_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos() ^ (d.as_secs() as u32))
        .unwrap_or(1)
}
