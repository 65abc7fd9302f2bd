//! Process-wide default generator.
//!
//! Convenience free functions that draw from one shared [`Generator`].
//! The instance is created on first use with an entropy-derived seed (the
//! seed is logged at `debug` so the run can be replayed) and is replaced
//! outright by every call to [`seed`].
//!
//! Access is serialised through a mutex. Call order still decides the
//! sequence, so code that needs reproducible draws across threads should
//! own a [`Generator`] per thread (see [`Generator::fork`]) instead.
//!
//! ```rust
//! use fate_core::global;
//!
//! global::seed(7);
//! let first: Vec<i32> = (0..5).map(|_| global::int(100).unwrap()).collect();
//!
//! global::seed(7);
//! let second: Vec<i32> = (0..5).map(|_| global::int(100).unwrap()).collect();
//! assert_eq!(first, second);
//! ```

use std::sync::{Mutex, PoisonError};

use tracing::{debug, trace};

use crate::config::GeneratorConfig;
use crate::dist::Distributions;
use crate::error::Result;
use crate::uniform::{Generator, UniformSource};

static DEFAULT: Mutex<Option<Generator>> = Mutex::new(None);

/// Runs `f` with exclusive access to the default generator, creating it
/// first if needed.
///
/// The lock is held while `f` runs and is not reentrant: `f` must not call
/// any other function in this module, or it will deadlock or panic. Use the
/// `&mut Generator` it receives instead.
///
/// ```rust
/// use fate_core::{global, Distributions};
///
/// let (a, b) = global::with_default(|rng| (rng.roll(1, 6), rng.roll(1, 6)));
/// assert!((1..=6).contains(&a.unwrap()));
/// assert!((1..=6).contains(&b.unwrap()));
/// ```
pub fn with_default<T>(f: impl FnOnce(&mut Generator) -> T) -> T {
    // A panic inside `f` cannot leave the generator half-updated, so a
    // poisoned lock is still safe to reuse.
    let mut guard = DEFAULT.lock().unwrap_or_else(PoisonError::into_inner);
    let rng = guard.get_or_insert_with(|| {
        let rng = Generator::from_entropy();
        debug!(seed = rng.seed(), "default generator seeded from entropy");
        rng
    });
    f(rng)
}

/// Resets the default generator deterministically from `seed`.
pub fn seed(seed: u64) {
    trace!(seed, "reseeding default generator");
    let mut guard = DEFAULT.lock().unwrap_or_else(PoisonError::into_inner);
    match guard.as_mut() {
        Some(rng) => rng.reseed(seed),
        None => *guard = Some(Generator::from_seed(seed)),
    }
}

/// Re-initialises the default generator from a configuration.
///
/// A fixed seed behaves like [`seed`]; entropy seeding draws a fresh seed.
pub fn configure(config: &GeneratorConfig) {
    match config.seed() {
        Some(s) => seed(s),
        None => {
            let rng = Generator::from_entropy();
            debug!(seed = rng.seed(), "default generator seeded from entropy");
            *DEFAULT.lock().unwrap_or_else(PoisonError::into_inner) = Some(rng);
        }
    }
}

/// Seed of the default generator's most recent (re)initialisation.
pub fn current_seed() -> u64 {
    with_default(|rng| rng.seed())
}

/// Splits an independent generator off the default one.
pub fn fork() -> Generator {
    with_default(Generator::fork)
}

/// [`UniformSource::int`] on the default generator.
pub fn int(max_exclusive: i32) -> Result<i32> {
    with_default(|rng| rng.int(max_exclusive))
}

/// [`UniformSource::int_range`] on the default generator.
pub fn int_range(min: i32, max_exclusive: i32) -> Result<i32> {
    with_default(|rng| rng.int_range(min, max_exclusive))
}

/// [`UniformSource::int_inclusive`] on the default generator.
pub fn int_inclusive(max_inclusive: i32) -> Result<i32> {
    with_default(|rng| rng.int_inclusive(max_inclusive))
}

/// [`UniformSource::int_inclusive_range`] on the default generator.
pub fn int_inclusive_range(min: i32, max_inclusive: i32) -> Result<i32> {
    with_default(|rng| rng.int_inclusive_range(min, max_inclusive))
}

/// [`UniformSource::float`] on the default generator.
pub fn float(max_exclusive: f64) -> Result<f64> {
    with_default(|rng| rng.float(max_exclusive))
}

/// [`UniformSource::float_range`] on the default generator.
pub fn float_range(min: f64, max_exclusive: f64) -> Result<f64> {
    with_default(|rng| rng.float_range(min, max_exclusive))
}

/// [`Distributions::one_in`] on the default generator.
pub fn one_in(n: i32) -> Result<bool> {
    with_default(|rng| rng.one_in(n))
}

/// [`Distributions::roll`] on the default generator.
pub fn roll(dice: i32, sides: i32) -> Result<i32> {
    with_default(|rng| rng.roll(dice, sides))
}

/// [`Distributions::triangle_int`] on the default generator.
pub fn triangle_int(center: i32, range: i32) -> Result<i32> {
    with_default(|rng| rng.triangle_int(center, range))
}

/// [`Distributions::walk`] on the default generator.
pub fn walk(start: i32, dec: i32, inc: i32) -> Result<i32> {
    with_default(|rng| rng.walk(start, dec, inc))
}

/// [`Distributions::taper`] on the default generator.
pub fn taper(start: i32, increment: i32, chance: i32, out_of: i32) -> Result<i32> {
    with_default(|rng| rng.taper(start, increment, chance, out_of))
}

/// [`Distributions::item`] on the default generator.
pub fn item<T>(items: &[T]) -> Result<&T> {
    with_default(|rng| rng.item(items))
}

/// [`Distributions::shuffle`] on the default generator.
pub fn shuffle<T>(items: &mut [T]) {
    with_default(|rng| rng.shuffle(items))
}
