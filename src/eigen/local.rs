//! In-process eigenvalues via nalgebra (feature: `local-eigen`).
use anyhow::{bail, Result};
use nalgebra::DMatrix;
use num_complex::Complex64 as C64;

use super::EigenSolver;
use crate::core::matrix::{self, ComplexMatrix};

/// Hermitian eigen-decomposition on the caller's thread.
#[derive(Default)]
pub struct LocalEigenSolver;

fn to_dmatrix(m: &ComplexMatrix) -> DMatrix<C64> {
    DMatrix::from_fn(m.rows(), m.cols(), |i, j| {
        let z = m[(i, j)];
        C64::new(z.re, z.im)
    })
}

impl EigenSolver for LocalEigenSolver {
    fn name(&self) -> &'static str {
        "local"
    }

    /// Ascending eigenvalues of a hermitian matrix.
    fn eigenvalues(&self, observable: &ComplexMatrix) -> Result<Vec<f64>> {
        if !matrix::is_hermitian(observable)? {
            bail!("local eigen solver needs a hermitian matrix");
        }
        if observable.rows() == 0 {
            return Ok(Vec::new());
        }
        let mut values: Vec<f64> = to_dmatrix(observable)
            .symmetric_eigenvalues()
            .iter()
            .copied()
            .collect();
        values.sort_by(|a, b| a.total_cmp(b));
        Ok(values)
    }
}
