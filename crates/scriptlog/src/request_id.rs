//! Request id generation.
//!
//! A request id is an opaque correlation token attached to every log line:
//! either one generated at logger construction (shared by all lines of the
//! process), or one supplied per call through the `*_x!` macro variants to
//! tie together the lines of a single externally scoped operation.

use rand::{Rng, distributions::Alphanumeric};

/// Length of a generated request id.
pub const REQUEST_ID_LEN: usize = 8;

/// Generates a request id from the thread-local RNG.
pub fn generate() -> String {
    from_rng(&mut rand::thread_rng())
}

/// Generates a request id from the provided RNG.
///
/// Useful in tests, where a seeded [`rand::rngs::StdRng`] makes the id
/// deterministic.
pub fn from_rng<R: Rng + ?Sized>(rng: &mut R) -> String {
    std::iter::repeat_with(|| rng.sample(Alphanumeric))
        .map(char::from)
        .take(REQUEST_ID_LEN)
        .collect()
}

#[cfg(test)]
mod tests {
    use rand::{SeedableRng, rngs::StdRng};

    use super::*;

    #[test]
    fn generated_id_is_eight_alphanumeric_characters() {
        let id = generate();
        assert_eq!(id.len(), REQUEST_ID_LEN);
        assert!(id.chars().all(|c| c.is_ascii_alphanumeric()));
    }

    #[test]
    fn seeded_rng_yields_a_deterministic_id() {
        let first = from_rng(&mut StdRng::seed_from_u64(42));
        let second = from_rng(&mut StdRng::seed_from_u64(42));
        assert_eq!(first, second);
        assert_eq!(first.len(), REQUEST_ID_LEN);
    }

    #[test]
    fn different_seeds_yield_different_ids() {
        let first = from_rng(&mut StdRng::seed_from_u64(1));
        let second = from_rng(&mut StdRng::seed_from_u64(2));
        assert_ne!(first, second);
    }
}
