//! Word pool sampling.

use tracing::warn;

use crate::error::QuizError;
use crate::rng::SimpleRng;
use crate::types::Word;

/// Pick up to `count` distinct words from `source` in random order.
///
/// The result is a uniform random permutation of a copy of `source` truncated
/// to `min(count, source.len())`. A short pool never fails; it just yields
/// fewer words.
pub fn sample(source: &[Word], count: usize, rng: &mut SimpleRng) -> Vec<Word> {
    if source.len() < count {
        warn!(
            error = %QuizError::InsufficientPool {
                requested: count,
                available: source.len(),
            },
            "sampling short pool"
        );
    }

    let mut pool = source.to_vec();
    rng.shuffle(&mut pool);
    pool.truncate(count);
    pool
}
