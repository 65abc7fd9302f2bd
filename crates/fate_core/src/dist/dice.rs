//! Dice sums.

use crate::error::{Result, RngError};
use crate::uniform::UniformSource;

pub(crate) fn roll<R: UniformSource + ?Sized>(rng: &mut R, dice: i32, sides: i32) -> Result<i32> {
    if dice <= 0 {
        return Err(RngError::invalid_argument(
            "dice",
            format!("must be positive, got {}", dice),
        ));
    }
    if sides <= 0 {
        return Err(RngError::invalid_argument(
            "sides",
            format!("must be positive, got {}", sides),
        ));
    }

    let mut total = 0i32;
    for _ in 0..dice {
        total = total.saturating_add(rng.int_inclusive_range(1, sides)?);
    }
    Ok(total)
}
