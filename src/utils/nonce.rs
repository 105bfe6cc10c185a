// src/utils/nonce.rs
//! Random nonce generation for DID property names.
//!
//! Nonces are collision-resistant but not coordinated: uniqueness is
//! probabilistic, and callers must treat a collision as externally
//! detectable (the ledger rejecting a property that already exists) rather
//! than impossible.

use rand::distributions::Alphanumeric;
use rand::Rng;

/// Generates an alphanumeric nonce of exactly `length` characters using the
/// thread-local randomness source.
pub fn generate(length: usize) -> String {
    generate_with(&mut rand::thread_rng(), length)
}

/// Generates an alphanumeric nonce of exactly `length` characters from the
/// supplied randomness source.
///
/// The `Rng` parameter is the injection seam: tests supply a seeded
/// [`rand::rngs::StdRng`] to get deterministic sequences.
pub fn generate_with<R: Rng>(rng: &mut R, length: usize) -> String {
    rng.sample_iter(&Alphanumeric)
        .take(length)
        .map(char::from)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::DID_ID_LENGTH;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::HashSet;

    #[test]
    fn test_exact_length() {
        for length in [0, 1, DID_ID_LENGTH, 100] {
            assert_eq!(generate(length).len(), length);
        }
    }

    #[test]
    fn test_alphanumeric_alphabet() {
        let nonce = generate(1000);
        assert!(nonce.chars().all(|c| c.is_ascii_alphanumeric()));
    }

    #[test]
    fn test_seeded_rng_is_deterministic() {
        let mut a = StdRng::seed_from_u64(7);
        let mut b = StdRng::seed_from_u64(7);
        assert_eq!(
            generate_with(&mut a, DID_ID_LENGTH),
            generate_with(&mut b, DID_ID_LENGTH)
        );
    }

    #[test]
    fn test_no_collisions_over_many_samples() {
        // 62^20 possible nonces; 10k draws colliding would indicate a
        // broken randomness source, not bad luck.
        let samples: HashSet<String> =
            (0..10_000).map(|_| generate(DID_ID_LENGTH)).collect();
        assert_eq!(samples.len(), 10_000);
    }
}
