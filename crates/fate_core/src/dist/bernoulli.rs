//! One-in-N checks.

use crate::error::{Result, RngError};
use crate::uniform::UniformSource;

pub(crate) fn one_in<R: UniformSource + ?Sized>(rng: &mut R, n: i32) -> Result<bool> {
    // "1 in 0" has no meaning, unlike the degenerate int(0).
    if n <= 0 {
        return Err(RngError::invalid_argument(
            "n",
            format!("must be positive, got {}", n),
        ));
    }
    Ok(rng.int(n)? == 0)
}
