//! Check command implementation
//!
//! Prints the resolved configuration so a run can be reproduced.

use std::io::Write;

use fate_core::{Generator, SeedSource};
use tracing::info;

use crate::config::FileConfig;
use crate::Result;

/// Run the check command
pub fn run(config: &FileConfig, rng: &Generator, out: &mut impl Write) -> Result<()> {
    info!("Checking configuration...");

    let source = match config.generator.source() {
        SeedSource::Entropy => "entropy",
        SeedSource::Fixed => "fixed",
    };
    writeln!(out, "seed source: {}", source)?;
    writeln!(out, "seed:        {}", rng.seed())?;
    writeln!(out, "trials:      {}", config.trials)?;
    writeln!(out, "version:     {}", env!("CARGO_PKG_VERSION"))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reports_fixed_seed() {
        let config = FileConfig::default().with_seed_override(Some(1234)).unwrap();
        let rng = Generator::from_config(&config.generator);
        let mut out = Vec::new();
        run(&config, &rng, &mut out).unwrap();

        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("seed source: fixed"));
        assert!(text.contains("seed:        1234"));
        assert!(text.contains("trials:      10000"));
    }

    #[test]
    fn test_reports_entropy_source() {
        let config = FileConfig::default();
        let rng = Generator::from_config(&config.generator);
        let mut out = Vec::new();
        run(&config, &rng, &mut out).unwrap();

        assert!(String::from_utf8(out).unwrap().contains("seed source: entropy"));
    }
}
