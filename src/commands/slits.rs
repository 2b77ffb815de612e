use std::path::Path;

use anyhow::{Context, Result};
use colored::Colorize;

use super::read_json;
use crate::core::matrix::ComplexMatrix;
use crate::quantum::experiments;

pub fn main(input: &Path, slits: usize, targets: usize, photon: bool) -> Result<()> {
    if photon {
        let base: ComplexMatrix = read_json(input)?;
        let report = experiments::photon_slit_experiment(slits, targets, &base)
            .context("photon slit experiment failed")?;
        println!("{}", "photon slits".cyan().bold());
        println!("{report}");
        if !report.interference.is_empty() {
            println!(
                "{} destructive interference at {} target(s)",
                "note:".yellow().bold(),
                report.interference.len()
            );
        }
    } else {
        let base: Vec<Vec<f64>> = read_json(input)?;
        let report = experiments::bullet_slit_experiment(slits, targets, &base)
            .context("bullet slit experiment failed")?;
        println!("{}", "bullet slits".cyan().bold());
        println!("{report}");
    }
    Ok(())
}
