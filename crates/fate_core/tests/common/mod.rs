//! Statistical verifier shared by the integration tests.
//!
//! Runs a sampler a fixed number of times, buckets the outcomes and checks
//! each bucket's observed frequency against an expected probability within
//! an absolute tolerance. Samplers are driven by seeded generators, so a
//! given test always sees the same sample.

#![allow(dead_code)]

use approx::abs_diff_eq;
use fate_core::Generator;

/// Samples drawn per frequency check.
pub const TRIALS: usize = 20_000;

/// Absolute tolerance per bucket (several standard errors at `TRIALS`).
pub const TOLERANCE: f64 = 0.02;

/// Seed used by tests that do not care which sequence they get.
pub const TEST_SEED: u64 = 0x5EED_F00D;

/// A generator seeded with [`TEST_SEED`].
pub fn seeded() -> Generator {
    Generator::from_seed(TEST_SEED)
}

/// Asserts that outcome `i` of `sampler` occurs with probability
/// `expected[i]`.
///
/// Outcomes outside `0..expected.len()` count toward the total only, so
/// an expected vector may cover just the head of an unbounded tail.
pub fn assert_frequencies(expected: &[f64], mut sampler: impl FnMut() -> i32) {
    let mut counts = vec![0usize; expected.len()];
    for _ in 0..TRIALS {
        let outcome = sampler();
        if let Ok(index) = usize::try_from(outcome) {
            if let Some(count) = counts.get_mut(index) {
                *count += 1;
            }
        }
    }

    for (bucket, (&count, &want)) in counts.iter().zip(expected).enumerate() {
        let observed = count as f64 / TRIALS as f64;
        assert!(
            abs_diff_eq!(observed, want, epsilon = TOLERANCE),
            "bucket {}: observed frequency {:.4}, expected {:.4} (counts {:?})",
            bucket,
            observed,
            want,
            counts
        );
    }
}

/// Asserts that a boolean sampler returns `true` with probability
/// `expected`.
pub fn assert_frequency(expected: f64, mut sampler: impl FnMut() -> bool) {
    let hits = (0..TRIALS).filter(|_| sampler()).count();
    let observed = hits as f64 / TRIALS as f64;
    assert!(
        abs_diff_eq!(observed, expected, epsilon = TOLERANCE),
        "observed frequency {:.4}, expected {:.4}",
        observed,
        expected
    );
}
