//! Geometric tapers.

use crate::error::{Result, RngError};
use crate::uniform::UniformSource;

pub(crate) fn taper<R: UniformSource + ?Sized>(
    rng: &mut R,
    start: i32,
    increment: i32,
    chance: i32,
    out_of: i32,
) -> Result<i32> {
    if increment == 0 {
        return Err(RngError::invalid_argument("increment", "must be non-zero"));
    }
    if chance <= 0 {
        return Err(RngError::invalid_argument(
            "chance",
            format!("must be positive, got {}", chance),
        ));
    }
    if out_of <= 0 {
        return Err(RngError::invalid_argument(
            "out_of",
            format!("must be positive, got {}", out_of),
        ));
    }
    if chance >= out_of {
        return Err(RngError::invalid_argument(
            "chance",
            format!("must be less than out_of ({}), got {}", out_of, chance),
        ));
    }

    let mut value = start;
    while rng.int(out_of)? < chance {
        value = value.saturating_add(increment);
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Generator;

    #[test]
    fn test_taper_moves_in_increment_steps() {
        let mut rng = Generator::from_seed(21);
        for _ in 0..2_000 {
            let value = taper(&mut rng, 1, 2, 3, 6).unwrap();
            assert!(value >= 1 && (value - 1) % 2 == 0, "unexpected {}", value);
        }
    }

    #[test]
    fn test_negative_increment_tapers_down() {
        let mut rng = Generator::from_seed(21);
        for _ in 0..2_000 {
            assert!(taper(&mut rng, 3, -1, 1, 4).unwrap() <= 3);
        }
    }

    #[test]
    fn test_invalid_parameters_rejected() {
        let mut rng = Generator::from_seed(21);
        let cases = [
            (5, 0, 1, 2),
            (5, 1, -2, 2),
            (5, 1, 0, 2),
            (5, 1, 2, 2),
            (5, 1, 3, 2),
            (5, 1, 1, -3),
            (5, 1, 1, 0),
        ];
        for (start, increment, chance, out_of) in cases {
            let err = taper(&mut rng, start, increment, chance, out_of).unwrap_err();
            assert!(err.is_invalid_argument());
        }
    }
}
