//! Geometric walks.
//!
//! A phase with odds `p > 1` keeps stepping while `one_in(p)` succeeds, so
//! its step count `k` follows `P(k) = (1 - 1/p) (1/p)^k`. Odds of `0` switch
//! the phase off. With both phases on, a fair coin picks the direction
//! first and only that phase runs, which yields a symmetric peak at `start`
//! with the probability mass of `start` equal to the mean of both phases'
//! zero-step chances.

use crate::error::{Result, RngError};
use crate::uniform::UniformSource;

use super::bernoulli::one_in;

pub(crate) fn walk<R: UniformSource + ?Sized>(
    rng: &mut R,
    start: i32,
    dec: i32,
    inc: i32,
) -> Result<i32> {
    check_odds("dec", dec)?;
    check_odds("inc", inc)?;

    let down = match (dec > 0, inc > 0) {
        (false, false) => return Ok(start),
        (true, false) => true,
        (false, true) => false,
        (true, true) => rng.int(2)? == 0,
    };

    let value = if down {
        i64::from(start) - steps(rng, dec)?
    } else {
        i64::from(start) + steps(rng, inc)?
    };
    Ok(value.clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32)
}

fn check_odds(name: &'static str, odds: i32) -> Result<()> {
    if odds == 1 {
        return Err(RngError::invalid_argument(
            name,
            "odds of 1 would never stop walking",
        ));
    }
    if odds < 0 {
        return Err(RngError::invalid_argument(
            name,
            format!("must be 0 (disabled) or greater than 1, got {}", odds),
        ));
    }
    Ok(())
}

/// Consecutive `one_in(odds)` successes before the first failure.
fn steps<R: UniformSource + ?Sized>(rng: &mut R, odds: i32) -> Result<i64> {
    let mut count = 0i64;
    while one_in(rng, odds)? {
        count += 1;
    }
    Ok(count)
}
