//! Histogram command implementation
//!
//! Rolls a notation many times and reports the observed frequency of each
//! outcome, as a text table or JSON.

use std::io::Write;

use fate_core::{Generator, Roller};
use serde::Serialize;
use tracing::info;

use crate::histogram::{Bucket, Histogram};
use crate::{CliError, Result};

/// JSON document written by `--format json`.
#[derive(Debug, Serialize)]
struct Report {
    notation: String,
    seed: u64,
    trials: usize,
    buckets: Vec<Bucket>,
}

/// Run the histogram command
pub fn run(
    notation: &str,
    trials: usize,
    format: &str,
    rng: &mut Generator,
    out: &mut impl Write,
) -> Result<()> {
    if trials == 0 {
        return Err(CliError::InvalidArgument(
            "trials must be at least 1".to_string(),
        ));
    }
    if !matches!(format, "table" | "json") {
        return Err(CliError::InvalidArgument(format!(
            "Unknown format: {}. Supported: table, json",
            format
        )));
    }

    let roller: Roller = notation.parse()?;
    let seed = rng.seed();
    info!(%roller, trials, seed, "sampling");

    let mut histogram = Histogram::new();
    for _ in 0..trials {
        histogram.record(roller.roll(rng)?);
    }

    match format {
        "json" => {
            let report = Report {
                notation: roller.to_string(),
                seed,
                trials,
                buckets: histogram.buckets(),
            };
            serde_json::to_writer_pretty(&mut *out, &report)?;
            writeln!(out)?;
        }
        _ => {
            writeln!(out, "{} x {} (seed {})", roller, trials, seed)?;
            write!(out, "{}", histogram.to_table())?;
        }
    }

    info!(recorded = histogram.total(), "Sampling complete");
    Ok(())
}
