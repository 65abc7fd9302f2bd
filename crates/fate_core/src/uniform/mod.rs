//! # Uniform Core
//!
//! Uniformly distributed integers and floats over caller-supplied ranges.
//! Every shaped distribution in [`crate::dist`] is built exclusively on
//! the [`UniformSource`] trait defined here.
//!
//! ## Validation
//!
//! The provided methods of [`UniformSource`] check their bounds before
//! calling into the implementation, so an implementation only ever sees
//! well-formed ranges and a rejected call leaves the state untouched.
//!
//! ## Usage Example
//!
//! ```rust
//! use fate_core::{Generator, UniformSource};
//!
//! let mut rng = Generator::from_seed(12345);
//!
//! let tile = rng.int(16).unwrap(); // [0, 16)
//! assert!((0..16).contains(&tile));
//!
//! let depth = rng.int_inclusive_range(1, 10).unwrap(); // [1, 10]
//! assert!((1..=10).contains(&depth));
//!
//! let jitter = rng.float_range(-0.5, 0.5).unwrap(); // [-0.5, 0.5)
//! assert!((-0.5..0.5).contains(&jitter));
//!
//! assert!(rng.int(-2).is_err());
//! ```

mod generator;

pub use generator::Generator;

use crate::error::{Result, RngError};

/// Source of uniformly distributed values.
///
/// Implementors supply the two unchecked primitives; callers use the
/// validated provided methods. The trait is object safe, so a
/// `&mut dyn UniformSource` can be threaded through game code that does not
/// care which generator backs it.
pub trait UniformSource {
    /// Draws an integer uniformly from `[low, high]`.
    ///
    /// Callers guarantee `low <= high`. A point range still consumes
    /// randomness so the draw is never skipped.
    fn sample_int(&mut self, low: i32, high: i32) -> i32;

    /// Draws a float uniformly from `[low, high)`, or returns `low` when
    /// `low == high`.
    ///
    /// Callers guarantee both bounds are finite, `low <= high`, and that
    /// `high - low` is finite.
    fn sample_float(&mut self, low: f64, high: f64) -> f64;

    /// Uniform integer in `[0, max_exclusive)`.
    ///
    /// `int(0)` and `int(1)` both return `0`.
    ///
    /// # Errors
    ///
    /// `InvalidArgument` if `max_exclusive < 0`.
    fn int(&mut self, max_exclusive: i32) -> Result<i32> {
        if max_exclusive < 0 {
            return Err(RngError::invalid_argument(
                "max_exclusive",
                format!("must be non-negative, got {}", max_exclusive),
            ));
        }
        self.int_range(0, max_exclusive)
    }

    /// Uniform integer in `[min, max_exclusive)`.
    ///
    /// `min == max_exclusive` returns `min`.
    ///
    /// # Errors
    ///
    /// `InvalidArgument` if `max_exclusive < min`.
    fn int_range(&mut self, min: i32, max_exclusive: i32) -> Result<i32> {
        if max_exclusive < min {
            return Err(RngError::invalid_argument(
                "max_exclusive",
                format!("must be at least min ({}), got {}", min, max_exclusive),
            ));
        }
        let high = if max_exclusive == min {
            min
        } else {
            max_exclusive - 1
        };
        Ok(self.sample_int(min, high))
    }

    /// Uniform integer in `[0, max_inclusive]`.
    ///
    /// # Errors
    ///
    /// `InvalidArgument` if `max_inclusive < 0`.
    fn int_inclusive(&mut self, max_inclusive: i32) -> Result<i32> {
        if max_inclusive < 0 {
            return Err(RngError::invalid_argument(
                "max_inclusive",
                format!("must be non-negative, got {}", max_inclusive),
            ));
        }
        Ok(self.sample_int(0, max_inclusive))
    }

    /// Uniform integer in `[min, max_inclusive]`.
    ///
    /// # Errors
    ///
    /// `InvalidArgument` if `max_inclusive < min`.
    fn int_inclusive_range(&mut self, min: i32, max_inclusive: i32) -> Result<i32> {
        if max_inclusive < min {
            return Err(RngError::invalid_argument(
                "max_inclusive",
                format!("must be at least min ({}), got {}", min, max_inclusive),
            ));
        }
        Ok(self.sample_int(min, max_inclusive))
    }

    /// Uniform float in `[0, max_exclusive)`.
    ///
    /// `float(0.0)` returns `0.0`.
    ///
    /// # Errors
    ///
    /// `InvalidArgument` if `max_exclusive` is negative or not finite.
    fn float(&mut self, max_exclusive: f64) -> Result<f64> {
        if max_exclusive.is_nan() || max_exclusive < 0.0 {
            return Err(RngError::invalid_argument(
                "max_exclusive",
                format!("must be non-negative, got {}", max_exclusive),
            ));
        }
        self.float_range(0.0, max_exclusive)
    }

    /// Uniform float in `[min, max_exclusive)`.
    ///
    /// `min == max_exclusive` returns `min`.
    ///
    /// # Errors
    ///
    /// `InvalidArgument` if `max_exclusive < min` or if either bound is not
    /// finite.
    ///
    /// Ranges wider than `f64::MAX`, such as `[-f64::MAX, f64::MAX)`, are
    /// sampled by interpolating between the bounds with a unit draw.
    fn float_range(&mut self, min: f64, max_exclusive: f64) -> Result<f64> {
        if !min.is_finite() || !max_exclusive.is_finite() {
            return Err(RngError::invalid_argument(
                "max_exclusive",
                format!("bounds must be finite, got [{}, {})", min, max_exclusive),
            ));
        }
        if max_exclusive < min {
            return Err(RngError::invalid_argument(
                "max_exclusive",
                format!("must be at least min ({}), got {}", min, max_exclusive),
            ));
        }
        if !(max_exclusive - min).is_finite() {
            // Only reachable with min < 0 < max_exclusive, so neither term
            // overflows and the largest float below max_exclusive is one ulp
            // down in bit space.
            let u = self.sample_float(0.0, 1.0);
            let value = min * (1.0 - u) + max_exclusive * u;
            return Ok(if value < max_exclusive {
                value
            } else {
                f64::from_bits(max_exclusive.to_bits() - 1)
            });
        }
        Ok(self.sample_float(min, max_exclusive))
    }
}

impl<R: UniformSource + ?Sized> UniformSource for &mut R {
    #[inline]
    fn sample_int(&mut self, low: i32, high: i32) -> i32 {
        (**self).sample_int(low, high)
    }

    #[inline]
    fn sample_float(&mut self, low: f64, high: f64) -> f64 {
        (**self).sample_float(low, high)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Replays a fixed script of integers, clamped into the requested range.
    struct Scripted {
        values: Vec<i32>,
        calls: usize,
    }

    impl Scripted {
        fn new(values: Vec<i32>) -> Self {
            Self { values, calls: 0 }
        }
    }

    impl UniformSource for Scripted {
        fn sample_int(&mut self, low: i32, high: i32) -> i32 {
            let value = self.values[self.calls % self.values.len()];
            self.calls += 1;
            value.clamp(low, high)
        }

        fn sample_float(&mut self, low: f64, _high: f64) -> f64 {
            self.calls += 1;
            low
        }
    }

    #[test]
    fn test_int_maps_to_half_open_range() {
        let mut src = Scripted::new(vec![100]);
        assert_eq!(src.int(10).unwrap(), 9);
        assert_eq!(src.int_range(-4, -2).unwrap(), -3);
    }

    #[test]
    fn test_degenerate_ranges_still_sample() {
        let mut src = Scripted::new(vec![7]);
        assert_eq!(src.int(0).unwrap(), 0);
        assert_eq!(src.int(1).unwrap(), 0);
        assert_eq!(src.int_range(5, 5).unwrap(), 5);
        assert_eq!(src.int_inclusive(0).unwrap(), 0);
        assert_eq!(src.calls, 4);
    }

    #[test]
    fn test_rejections_do_not_sample() {
        let mut src = Scripted::new(vec![1]);
        assert!(src.int(-2).is_err());
        assert!(src.int_range(5, 3).is_err());
        assert!(src.int_inclusive(-2).is_err());
        assert!(src.int_inclusive_range(5, 3).is_err());
        assert!(src.float(-2.0).is_err());
        assert!(src.float_range(0.2, 0.1).is_err());
        assert_eq!(src.calls, 0);
    }

    #[test]
    fn test_float_rejects_non_finite_bounds() {
        let mut src = Scripted::new(vec![0]);
        assert!(src.float(f64::NAN).is_err());
        assert!(src.float(f64::INFINITY).is_err());
        assert!(src.float_range(f64::NEG_INFINITY, 0.0).is_err());
        assert_eq!(src.calls, 0);
    }

    #[test]
    fn test_float_range_wider_than_max() {
        let mut src = Scripted::new(vec![0]);
        assert_eq!(src.float_range(-f64::MAX, f64::MAX).unwrap(), -f64::MAX);
        assert_eq!(src.calls, 1);
    }

    #[test]
    fn test_extreme_integer_bounds() {
        let mut src = Scripted::new(vec![i32::MAX]);
        assert_eq!(src.int_range(i32::MIN, i32::MAX).unwrap(), i32::MAX - 1);
        assert_eq!(
            src.int_inclusive_range(i32::MIN, i32::MAX).unwrap(),
            i32::MAX
        );
    }

    #[test]
    fn test_mut_reference_forwards() {
        fn draw(mut source: impl UniformSource) -> i32 {
            source.int_inclusive(10).unwrap()
        }

        let mut src = Scripted::new(vec![3]);
        assert_eq!(draw(&mut src), 3);
        assert_eq!(src.calls, 1);
    }
}
