//! Eigenvalue boundary: the engine has no decomposition of its own and asks a solver.
use anyhow::{bail, Result};

use crate::config::Config;
use crate::core::matrix::ComplexMatrix;

pub trait EigenSolver: Send + Sync {
    fn name(&self) -> &'static str;
    fn eigenvalues(&self, observable: &ComplexMatrix) -> Result<Vec<f64>>;
}

#[cfg(feature = "eigen-http")]
pub mod http;
#[cfg(feature = "local-eigen")]
pub mod local;

/// Solvers compiled into this build, remote first.
pub struct SolverRegistry {
    solvers: Vec<Box<dyn EigenSolver>>,
}

impl SolverRegistry {
    #[allow(unused_mut, unused_variables)]
    pub fn new(config: &Config) -> Self {
        let mut r = Self { solvers: Vec::new() };
        #[cfg(feature = "eigen-http")]
        {
            if let Some(endpoint) = config.eigen_endpoint() {
                r.solvers.push(Box::new(http::HttpEigenSolver::new(endpoint)));
            }
        }
        #[cfg(feature = "local-eigen")]
        {
            r.solvers.push(Box::new(local::LocalEigenSolver));
        }
        r
    }

    pub fn list(&self) -> Vec<&'static str> {
        self.solvers.iter().map(|s| s.name()).collect()
    }

    pub fn get(&self, name: &str) -> Option<&dyn EigenSolver> {
        self.solvers.iter().find(|s| s.name() == name).map(|b| b.as_ref())
    }

    /// The named solver, or the first one available.
    pub fn pick(&self, name: Option<&str>) -> Result<&dyn EigenSolver> {
        match name {
            Some(n) => match self.get(n) {
                Some(s) => Ok(s),
                None => bail!("eigen solver '{n}' is not available (have: {:?})", self.list()),
            },
            None => match self.solvers.first() {
                Some(s) => Ok(s.as_ref()),
                None => bail!(
                    "no eigen solver available; set eigen.endpoint in the config or build with --features local-eigen"
                ),
            },
        }
    }
}
