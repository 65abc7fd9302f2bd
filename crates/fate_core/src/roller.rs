//! Roll notation.
//!
//! [`Roller`] describes a random quantity as data, so loot tables, monster
//! definitions and level recipes can carry strings like `"3d6"` instead of
//! code. The notation:
//!
//! | Notation  | Meaning                                   | Operation                       |
//! |-----------|-------------------------------------------|---------------------------------|
//! | `5`       | always 5                                  | none                            |
//! | `3-7`     | uniform over 3..=7                        | `int_inclusive_range(3, 7)`     |
//! | `2d6`     | sum of two six-sided dice                 | `roll(2, 6)`                    |
//! | `4t2`     | triangle around 4, spread 2               | `triangle_int(4, 2)`            |
//! | `…^1:3`   | then +1 while a 1-in-3 check keeps passing | `taper(value, 1, 1, 3)`        |
//!
//! ```rust
//! use fate_core::{Generator, Roller};
//!
//! let roller: Roller = "2d6^1:4".parse().unwrap();
//! assert_eq!(roller.to_string(), "2d6^1:4");
//! assert_eq!(roller.min(), 2);
//! assert_eq!(roller.max(), None);
//!
//! let mut rng = Generator::from_seed(99);
//! assert!(roller.roll(&mut rng).unwrap() >= 2);
//! ```

use std::fmt;
use std::str::FromStr;

use crate::dist::Distributions;
use crate::error::{Result, RngError};
use crate::uniform::UniformSource;

/// The base shape of a roll.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RollKind {
    /// Constant value.
    Fixed(i32),
    /// Uniform over an inclusive range.
    Range {
        /// Smallest value.
        min: i32,
        /// Largest value.
        max: i32,
    },
    /// Sum of dice.
    Dice {
        /// Number of dice.
        dice: i32,
        /// Faces per die.
        sides: i32,
    },
    /// Symmetric triangular deviate.
    Triangle {
        /// Peak of the distribution.
        center: i32,
        /// Maximum distance from the peak.
        range: i32,
    },
}

/// Geometric tail added after the base roll: `+1` per consecutive
/// success of a `chance`-in-`out_of` check.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct TaperSuffix {
    /// Successful outcomes.
    pub chance: i32,
    /// Total outcomes.
    pub out_of: i32,
}

/// A validated roll description.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Roller {
    kind: RollKind,
    taper: Option<TaperSuffix>,
}

impl Roller {
    /// A roll that always yields `value`.
    pub fn fixed(value: i32) -> Self {
        Self {
            kind: RollKind::Fixed(value),
            taper: None,
        }
    }

    /// Uniform over `[min, max]`.
    ///
    /// # Errors
    ///
    /// `InvalidArgument` if `max < min`.
    pub fn range(min: i32, max: i32) -> Result<Self> {
        if max < min {
            return Err(RngError::invalid_argument(
                "max",
                format!("must be at least min ({}), got {}", min, max),
            ));
        }
        Ok(Self {
            kind: RollKind::Range { min, max },
            taper: None,
        })
    }

    /// `dice` dice with `sides` faces each.
    ///
    /// # Errors
    ///
    /// `InvalidArgument` if either count is not positive.
    pub fn dice(dice: i32, sides: i32) -> Result<Self> {
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
        Ok(Self {
            kind: RollKind::Dice { dice, sides },
            taper: None,
        })
    }

    /// Triangle around `center` with spread `range`.
    ///
    /// # Errors
    ///
    /// `InvalidArgument` if `range < 0`.
    pub fn triangle(center: i32, range: i32) -> Result<Self> {
        if range < 0 {
            return Err(RngError::invalid_argument(
                "range",
                format!("must be non-negative, got {}", range),
            ));
        }
        Ok(Self {
            kind: RollKind::Triangle { center, range },
            taper: None,
        })
    }

    /// Adds a `+1` taper with odds `chance / out_of`.
    ///
    /// # Errors
    ///
    /// `InvalidArgument` unless `0 < chance < out_of`.
    pub fn with_taper(mut self, chance: i32, out_of: i32) -> Result<Self> {
        if chance <= 0 || out_of <= 0 || chance >= out_of {
            return Err(RngError::invalid_argument(
                "chance",
                format!("taper odds must satisfy 0 < chance < out_of, got {}:{}", chance, out_of),
            ));
        }
        self.taper = Some(TaperSuffix { chance, out_of });
        Ok(self)
    }

    /// The base shape.
    pub fn kind(&self) -> RollKind {
        self.kind
    }

    /// The taper suffix, if any.
    pub fn taper(&self) -> Option<TaperSuffix> {
        self.taper
    }

    /// Smallest possible result.
    pub fn min(&self) -> i32 {
        match self.kind {
            RollKind::Fixed(value) => value,
            RollKind::Range { min, .. } => min,
            RollKind::Dice { dice, .. } => dice,
            RollKind::Triangle { center, range } => center.saturating_sub(range),
        }
    }

    /// Largest possible result, or `None` when a taper makes it unbounded.
    pub fn max(&self) -> Option<i32> {
        if self.taper.is_some() {
            return None;
        }
        Some(match self.kind {
            RollKind::Fixed(value) => value,
            RollKind::Range { max, .. } => max,
            RollKind::Dice { dice, sides } => dice.saturating_mul(sides),
            RollKind::Triangle { center, range } => center.saturating_add(range),
        })
    }

    /// Draws one result from `rng`.
    pub fn roll<R: UniformSource + ?Sized>(&self, rng: &mut R) -> Result<i32> {
        let base = match self.kind {
            RollKind::Fixed(value) => value,
            RollKind::Range { min, max } => rng.int_inclusive_range(min, max)?,
            RollKind::Dice { dice, sides } => rng.roll(dice, sides)?,
            RollKind::Triangle { center, range } => rng.triangle_int(center, range)?,
        };
        match self.taper {
            Some(TaperSuffix { chance, out_of }) => rng.taper(base, 1, chance, out_of),
            None => Ok(base),
        }
    }
}

impl fmt::Display for Roller {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            RollKind::Fixed(value) => write!(f, "{}", value)?,
            RollKind::Range { min, max } => write!(f, "{}-{}", min, max)?,
            RollKind::Dice { dice, sides } => write!(f, "{}d{}", dice, sides)?,
            RollKind::Triangle { center, range } => write!(f, "{}t{}", center, range)?,
        }
        if let Some(TaperSuffix { chance, out_of }) = self.taper {
            write!(f, "^{}:{}", chance, out_of)?;
        }
        Ok(())
    }
}

impl FromStr for Roller {
    type Err = RngError;

    fn from_str(s: &str) -> Result<Self> {
        let compact: String = s.chars().filter(|c| !c.is_whitespace()).collect();
        if compact.is_empty() {
            return Err(RngError::invalid_notation("empty notation"));
        }
        parse_compact(&compact).map_err(|err| match err {
            RngError::InvalidNotation(_) => err,
            other => RngError::invalid_notation(format!("\"{}\": {}", s.trim(), other)),
        })
    }
}

fn parse_compact(s: &str) -> Result<Roller> {
    let (base, suffix) = match s.split_once('^') {
        Some((base, suffix)) => (base, Some(suffix)),
        None => (s, None),
    };

    let roller = if let Some((dice, sides)) = base.split_once('d') {
        Roller::dice(number(dice, s)?, number(sides, s)?)?
    } else if let Some((center, range)) = base.split_once('t') {
        Roller::triangle(number(center, s)?, number(range, s)?)?
    } else if let Some(pos) = base.get(1..).and_then(|rest| rest.find('-')) {
        // Skip the first character so a leading minus sign stays with `min`.
        let (min, max) = base.split_at(pos + 1);
        Roller::range(number(min, s)?, number(&max[1..], s)?)?
    } else {
        Roller::fixed(number(base, s)?)
    };

    match suffix {
        Some(suffix) => {
            let (chance, out_of) = suffix.split_once(':').ok_or_else(|| {
                RngError::invalid_notation(format!(
                    "\"{}\": taper suffix must look like ^chance:out_of",
                    s
                ))
            })?;
            roller.with_taper(number(chance, s)?, number(out_of, s)?)
        }
        None => Ok(roller),
    }
}

fn number(text: &str, notation: &str) -> Result<i32> {
    text.parse().map_err(|_| {
        RngError::invalid_notation(format!("\"{}\": expected an integer, found \"{}\"", notation, text))
    })
}

#[cfg(feature = "serde")]
impl serde::Serialize for Roller {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Roller {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let notation = String::deserialize(deserializer)?;
        notation.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Generator;

    #[test]
    fn test_parse_each_kind() {
        assert_eq!("5".parse::<Roller>().unwrap().kind(), RollKind::Fixed(5));
        assert_eq!("-4".parse::<Roller>().unwrap().kind(), RollKind::Fixed(-4));
        assert_eq!(
            "3-7".parse::<Roller>().unwrap().kind(),
            RollKind::Range { min: 3, max: 7 }
        );
        assert_eq!(
            "-5--2".parse::<Roller>().unwrap().kind(),
            RollKind::Range { min: -5, max: -2 }
        );
        assert_eq!(
            "2d6".parse::<Roller>().unwrap().kind(),
            RollKind::Dice { dice: 2, sides: 6 }
        );
        assert_eq!(
            "4t2".parse::<Roller>().unwrap().kind(),
            RollKind::Triangle { center: 4, range: 2 }
        );
    }

    #[test]
    fn test_parse_taper_suffix() {
        let roller: Roller = " 1d4 ^ 1:3 ".parse().unwrap();
        assert_eq!(roller.kind(), RollKind::Dice { dice: 1, sides: 4 });
        assert_eq!(
            roller.taper(),
            Some(TaperSuffix {
                chance: 1,
                out_of: 3
            })
        );
    }

    #[test]
    fn test_display_is_canonical() {
        for notation in ["5", "-4", "3-7", "-5--2", "2d6", "4t2", "2d6^1:4", "0t0^2:3"] {
            let roller: Roller = notation.parse().unwrap();
            assert_eq!(roller.to_string(), notation);
        }
    }

    #[test]
    fn test_parse_errors_are_notation_errors() {
        for bad in ["", "d6", "2d", "2x6", "7-3", "0d6", "2d0", "3t-1", "2d6^", "2d6^1", "2d6^3:3", "1.5"] {
            let err = bad.parse::<Roller>().unwrap_err();
            assert!(
                matches!(err, RngError::InvalidNotation(_)),
                "{:?} gave {:?}",
                bad,
                err
            );
        }
    }

    #[test]
    fn test_bounds() {
        let dice: Roller = "3d6".parse().unwrap();
        assert_eq!((dice.min(), dice.max()), (3, Some(18)));

        let triangle: Roller = "10t3".parse().unwrap();
        assert_eq!((triangle.min(), triangle.max()), (7, Some(13)));

        let tapered: Roller = "1-2^1:2".parse().unwrap();
        assert_eq!((tapered.min(), tapered.max()), (1, None));
    }

    #[test]
    fn test_rolls_respect_bounds() {
        let mut rng = Generator::from_seed(314);
        for notation in ["5", "3-7", "2d6", "4t2"] {
            let roller: Roller = notation.parse().unwrap();
            for _ in 0..1_000 {
                let value = roller.roll(&mut rng).unwrap();
                assert!(value >= roller.min());
                assert!(value <= roller.max().unwrap());
            }
        }
    }

    #[test]
    fn test_roll_matches_direct_calls() {
        let roller: Roller = "2d6^1:4".parse().unwrap();
        let mut via_roller = Generator::from_seed(8);
        let mut direct = Generator::from_seed(8);

        for _ in 0..50 {
            let expected = {
                let base = direct.roll(2, 6).unwrap();
                direct.taper(base, 1, 1, 4).unwrap()
            };
            assert_eq!(roller.roll(&mut via_roller).unwrap(), expected);
        }
    }

    #[test]
    fn test_constructors_validate() {
        assert!(Roller::range(5, 3).is_err());
        assert!(Roller::dice(0, 6).is_err());
        assert!(Roller::triangle(5, -1).is_err());
        assert!(Roller::fixed(1).with_taper(2, 2).is_err());
        assert!(Roller::fixed(1).with_taper(0, 2).is_err());
    }
}
