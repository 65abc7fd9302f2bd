//! Roll command implementation
//!
//! Parses a roll notation and prints one result per line.

use std::io::Write;

use fate_core::{Generator, Roller};
use tracing::{debug, info};

use crate::{CliError, Result};

/// Run the roll command
pub fn run(notation: &str, count: usize, rng: &mut Generator, out: &mut impl Write) -> Result<()> {
    if count == 0 {
        return Err(CliError::InvalidArgument(
            "count must be at least 1".to_string(),
        ));
    }

    let roller: Roller = notation.parse()?;
    info!(%roller, count, seed = rng.seed(), "rolling");

    for _ in 0..count {
        let value = roller.roll(rng)?;
        debug!(value, "rolled");
        writeln!(out, "{value}")?;
    }

    Ok(())
}
