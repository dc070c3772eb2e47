//! Secret number dealing.
//!
//! Each player receives one integer from the closed range [1,100], drawn
//! without replacement. The draw is assigned positionally: result index i
//! belongs to roster index i.

use rand::seq::index;
use rand::Rng;

/// Lowest dealable number.
pub const DECK_MIN: u8 = 1;

/// Highest dealable number.
pub const DECK_MAX: u8 = 100;

/// Draw `n` distinct numbers uniformly from [DECK_MIN, DECK_MAX].
///
/// Every n-subset is equally likely, and within a subset every assignment
/// to the n positions is equally likely. Callers pass the RNG so tests can
/// seed it; `n` must not exceed the deck size.
pub fn deal_secret_numbers<R: Rng + ?Sized>(n: usize, rng: &mut R) -> Vec<u8> {
    index::sample(rng, DECK_MAX as usize, n)
        .into_iter()
        .map(|i| i as u8 + DECK_MIN)
        .collect()
}
