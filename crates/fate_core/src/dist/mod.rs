//! # Distribution Layer
//!
//! Shaped outcomes built from one or more uniform draws: Bernoulli checks,
//! dice sums, triangular deviates, geometric walks and tapers, plus element
//! selection helpers.
//!
//! The layer holds no state of its own. Every operation validates its
//! arguments, then drives a [`UniformSource`] some number of times; the
//! result is a pure function of the source's state transitions.
//!
//! ## Usage Example
//!
//! ```rust
//! use fate_core::{Distributions, Generator};
//!
//! let mut rng = Generator::from_seed(2024);
//!
//! let damage = rng.roll(2, 6).unwrap(); // 2d6
//! assert!((2..=12).contains(&damage));
//!
//! let width = rng.triangle_int(10, 3).unwrap(); // 7..=13, peaked at 10
//! assert!((7..=13).contains(&width));
//!
//! let depth = rng.taper(1, 1, 1, 4).unwrap(); // 1, sometimes deeper
//! assert!(depth >= 1);
//!
//! let rare = rng.one_in(100).unwrap();
//! # let _ = rare;
//! ```

mod bernoulli;
mod choice;
mod dice;
mod taper;
mod triangle;
mod walk;

use crate::error::Result;
use crate::uniform::UniformSource;

/// Distribution-shaping operations for every [`UniformSource`].
///
/// Blanket-implemented, so bringing the trait into scope is enough to call
/// these on a [`Generator`](crate::Generator) or a `&mut dyn UniformSource`.
pub trait Distributions: UniformSource {
    /// Returns `true` with probability `1/n`, computed as `int(n) == 0`.
    ///
    /// # Errors
    ///
    /// `InvalidArgument` if `n <= 0`.
    fn one_in(&mut self, n: i32) -> Result<bool> {
        bernoulli::one_in(self, n)
    }

    /// Sum of `dice` independent rolls of a die with `sides` faces.
    ///
    /// The result lies in `[dice, dice * sides]`.
    ///
    /// # Errors
    ///
    /// `InvalidArgument` if `dice <= 0` or `sides <= 0`.
    fn roll(&mut self, dice: i32, sides: i32) -> Result<i32> {
        dice::roll(self, dice, sides)
    }

    /// Symmetric triangular deviate in `[center - range, center + range]`.
    ///
    /// Computed as `center + int(range + 1) - int(range + 1)`, giving
    /// `P(center + k) = (range + 1 - |k|) / (range + 1)^2`.
    ///
    /// Outcomes past `i32::MIN` or `i32::MAX` are clamped to that bound, so
    /// near the edges of `i32` the mass piles up on the bound instead.
    ///
    /// # Errors
    ///
    /// `InvalidArgument` if `range < 0`.
    fn triangle_int(&mut self, center: i32, range: i32) -> Result<i32> {
        triangle::triangle_int(self, center, range)
    }

    /// Geometric walk away from `start`.
    ///
    /// `dec` and `inc` are continuation odds: each step continues with
    /// probability `1/p`, and `0` disables that direction. When both
    /// directions are enabled a fair coin picks one of them first, whatever
    /// the two odds are.
    ///
    /// A walk that would pass `i32::MIN` or `i32::MAX` stops at that bound.
    ///
    /// # Errors
    ///
    /// `InvalidArgument` if `dec` or `inc` is `1` or negative.
    fn walk(&mut self, start: i32, dec: i32, inc: i32) -> Result<i32> {
        walk::walk(self, start, dec, inc)
    }

    /// `start` plus `increment` once per consecutive success of
    /// `int(out_of) < chance`.
    ///
    /// # Errors
    ///
    /// `InvalidArgument` if `increment == 0`, `chance <= 0`, `out_of <= 0`
    /// or `chance >= out_of`.
    fn taper(&mut self, start: i32, increment: i32, chance: i32, out_of: i32) -> Result<i32> {
        taper::taper(self, start, increment, chance, out_of)
    }

    /// Uniformly chosen element of `items`.
    ///
    /// # Errors
    ///
    /// `InvalidArgument` if `items` is empty.
    fn item<'a, T>(&mut self, items: &'a [T]) -> Result<&'a T> {
        choice::item(self, items)
    }

    /// Shuffles `items` in place (Fisher-Yates).
    fn shuffle<T>(&mut self, items: &mut [T]) {
        choice::shuffle(self, items)
    }
}

impl<R: UniformSource + ?Sized> Distributions for R {}
