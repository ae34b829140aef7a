//! Multiple-choice option generation.

use arrayvec::ArrayVec;
use tracing::warn;

use crate::rng::SimpleRng;
use crate::types::{Word, MAX_OPTION_COUNT};

/// Option set for one question (fixed capacity, no heap growth)
pub type Options = ArrayVec<String, MAX_OPTION_COUNT>;

/// Build the option set for `question`.
///
/// The set holds the correct meaning plus up to `option_count - 1` distractor
/// meanings drawn without replacement from the other words of `pool` (the
/// question itself is excluded by id), then shuffled. Meanings already in the
/// set are skipped, so a pool with fewer distinct meanings yields a smaller set
/// rather than duplicates.
pub fn build_options(
    question: &Word,
    pool: &[Word],
    option_count: usize,
    rng: &mut SimpleRng,
) -> Options {
    let wanted = option_count.clamp(1, MAX_OPTION_COUNT);

    let mut others: Vec<&Word> = pool.iter().filter(|w| w.id != question.id).collect();
    rng.shuffle(&mut others);

    let mut options = Options::new();
    options.push(question.meaning.clone());
    for other in others {
        if options.len() >= wanted {
            break;
        }
        if options.iter().any(|o| *o == other.meaning) {
            continue;
        }
        options.push(other.meaning.clone());
    }

    if options.len() < wanted {
        warn!(
            word = %question.word,
            wanted,
            available = options.len(),
            "offering fewer options than requested"
        );
    }

    rng.shuffle(&mut options[..]);
    options
}
