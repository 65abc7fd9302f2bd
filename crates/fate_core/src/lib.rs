//! # fate_core: Deterministic Randomness for Procedural Generation
//!
//! ## Layers
//!
//! fate_core is organised in two tiers plus convenience plumbing:
//! - Uniform Core (`uniform`): the [`UniformSource`] trait and the seedable
//!   [`Generator`]
//! - Distribution Layer (`dist`): [`Distributions`], shaped draws built only
//!   on the uniform core (one-in-N checks, dice, triangles, walks, tapers)
//! - Default instance (`global`): a process-wide generator behind free
//!   functions, re-seedable on demand
//! - Roll notation (`roller`): [`Roller`] values parsed from strings such as
//!   `"3d6"` or `"4t2^1:3"`
//!
//! Control flows one way: distributions call the uniform core, never the
//! reverse.
//!
//! ## Determinism
//!
//! Two generators seeded alike and driven with the same call sequence yield
//! identical results. Invalid arguments are rejected before any state
//! advances, so a failed call never shifts the sequence.
//!
//! ## Usage Examples
//!
//! ```rust
//! use fate_core::{Distributions, Generator, UniformSource};
//!
//! let mut rng = Generator::from_seed(12345);
//!
//! let room_width = rng.int_inclusive_range(4, 12).unwrap();
//! let gold = rng.roll(3, 6).unwrap();
//! let monster_level = rng.triangle_int(5, 2).unwrap();
//! let extra_exits = rng.walk(0, 0, 3).unwrap();
//!
//! assert!((4..=12).contains(&room_width));
//! assert!((3..=18).contains(&gold));
//! assert!((3..=7).contains(&monster_level));
//! assert!(extra_exits >= 0);
//!
//! assert!(rng.roll(0, 6).is_err());
//! ```
//!
//! ## Feature Flags
//!
//! - `serde`: Serialisation for [`GeneratorConfig`] and [`Roller`]

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod config;
pub mod dist;
pub mod error;
pub mod global;
pub mod roller;
pub mod uniform;

pub use config::{GeneratorConfig, GeneratorConfigBuilder, SeedSource};
pub use dist::Distributions;
pub use error::{Result, RngError};
pub use roller::{RollKind, Roller, TaperSuffix};
pub use uniform::{Generator, UniformSource};
