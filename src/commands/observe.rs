use std::path::Path;

use anyhow::{Context, Result};
use colored::Colorize;
use serde::Deserialize;

use super::read_json;
use crate::config::Config;
use crate::core::complex::Complex;
use crate::core::matrix::ComplexMatrix;
use crate::core::vector;
use crate::eigen::SolverRegistry;
use crate::quantum::system;

#[derive(Debug, Deserialize)]
struct ObserveInput {
    ket: Vec<Complex>,
    #[serde(default)]
    observable: Option<ComplexMatrix>,
}

pub fn main(
    input: &Path,
    position: Option<usize>,
    eigen: bool,
    solver: Option<&str>,
    config: &Config,
) -> Result<()> {
    let obs: ObserveInput = read_json(input)?;

    println!("{} {}", "norm:".cyan().bold(), vector::norm(&obs.ket));
    match position {
        Some(x) => {
            let p = system::probability_at_position(&obs.ket, x)
                .with_context(|| format!("probability at position {x}"))?;
            println!("{} P({x}) = {p}", "probability:".cyan().bold());
        }
        None => {
            let ps = system::probabilities(&obs.ket).context("born distribution")?;
            println!("{} {:?}", "probabilities:".cyan().bold(), ps);
        }
    }

    let Some(observable) = obs.observable else {
        if eigen {
            anyhow::bail!("--eigen needs an \"observable\" in {}", input.display());
        }
        return Ok(());
    };

    let mean = system::observable_mean(&observable, &obs.ket).context("observable mean")?;
    let variance = system::observable_variance(&observable, &obs.ket).context("observable variance")?;
    println!("{} {mean}", "mean:".cyan().bold());
    println!("{} {variance}", "variance:".cyan().bold());

    if eigen {
        let registry = SolverRegistry::new(config);
        let solver = registry.pick(solver)?;
        let values = system::eigenvalues_of_observable(solver, &observable)
            .with_context(|| format!("eigenvalues via '{}' solver", solver.name()))?;
        println!("{} {}", "eigenvalues:".cyan().bold(), vector::display_string(&values));
    }
    Ok(())
}
