//! Question order randomization.

use rand::seq::SliceRandom;
use rand::Rng;

/// Return a shuffled copy of `items`. The input is left untouched, so the
/// cached catalog can be shuffled once per round without reordering it for
/// everyone else.
pub fn shuffle<T: Clone>(items: &[T]) -> Vec<T> {
    shuffle_with(items, &mut rand::thread_rng())
}

/// Like [`shuffle`], but with a caller-supplied rng so tests can pin the
/// resulting order.
pub fn shuffle_with<T: Clone, R: Rng + ?Sized>(items: &[T], rng: &mut R) -> Vec<T> {
    let mut shuffled = items.to_vec();
    shuffled.shuffle(rng);
    shuffled
}
