//! Symmetric triangular deviates.
//!
//! Subtracting two independent uniform draws over `[0, range]` gives a
//! tent-shaped distribution: a bell-like spread around `center` with
//! bounded support and no real Gaussian sampler involved.

use crate::error::{Result, RngError};
use crate::uniform::UniformSource;

pub(crate) fn triangle_int<R: UniformSource + ?Sized>(
    rng: &mut R,
    center: i32,
    range: i32,
) -> Result<i32> {
    if range < 0 {
        return Err(RngError::invalid_argument(
            "range",
            format!("must be non-negative, got {}", range),
        ));
    }

    // int_inclusive(range) is int(range + 1) without overflowing at i32::MAX.
    let up = rng.int_inclusive(range)?;
    let down = rng.int_inclusive(range)?;
    let offset = i64::from(up) - i64::from(down);
    let value = i64::from(center) + offset;
    Ok(value.clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32)
}
