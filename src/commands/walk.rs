use std::path::Path;

use anyhow::{Context, Result};
use colored::Colorize;
use serde::Deserialize;

use super::read_json;
use crate::cli::Domain;
use crate::core::complex::Complex;
use crate::core::matrix::ComplexMatrix;
use crate::core::vector;
use crate::quantum::experiments;

#[derive(Debug, Deserialize)]
struct WalkInput<M, S> {
    adjacency: M,
    state: Vec<S>,
}

pub fn main(input: &Path, domain: Domain, clicks: usize) -> Result<()> {
    let rendered = match domain {
        Domain::Marble => {
            let w: WalkInput<Vec<Vec<i64>>, i64> = read_json(input)?;
            let out = experiments::marble_walk(&w.adjacency, &w.state, clicks)
                .context("marble walk failed")?;
            format!("{:?}", out)
        }
        Domain::Probability => {
            let w: WalkInput<Vec<Vec<f64>>, f64> = read_json(input)?;
            let out = experiments::probability_walk(&w.adjacency, &w.state, clicks)
                .context("probability walk failed")?;
            format!("{:?}", out)
        }
        Domain::Photon => {
            let w: WalkInput<ComplexMatrix, Complex> = read_json(input)?;
            let out = experiments::photon_walk(&w.adjacency, &w.state, clicks)
                .context("photon walk failed")?;
            vector::display_string(&out)
        }
    };
    println!("{} after {} click(s)", "state".cyan().bold(), clicks);
    println!("{rendered}");
    Ok(())
}
