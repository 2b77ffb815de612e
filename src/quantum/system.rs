//! Measurement statistics and dynamics of a discrete quantum system.

use rand::Rng;
use tracing::debug;

use crate::core::complex::Complex;
use crate::core::error::{MathError, MathResult, QuantumError, QuantumResult};
use crate::core::matrix::{self, ComplexMatrix};
use crate::core::vector;
use crate::eigen::EigenSolver;

/// Born rule on a possibly un-normalized ket: `|ket[x]|² / ‖ket‖²`.
pub fn probability_at_position(ket: &[Complex], x: usize) -> MathResult<f64> {
    let amplitude = ket.get(x).ok_or(MathError::IndexOutOfBounds {
        index: x,
        len: ket.len(),
    })?;
    let norm = vector::norm(ket);
    if norm == 0.0 {
        return Err(MathError::DivisionByZero);
    }
    Ok(amplitude.modulus().powi(2) / norm.powi(2))
}

/// Full Born distribution over the basis positions.
pub fn probabilities(ket: &[Complex]) -> MathResult<Vec<f64>> {
    (0..ket.len())
        .map(|x| probability_at_position(ket, x))
        .collect()
}

/// Samples a basis position according to the Born distribution.
pub fn measure<R: Rng + ?Sized>(ket: &[Complex], rng: &mut R) -> MathResult<usize> {
    let probabilities = probabilities(ket)?;
    if probabilities.is_empty() {
        return Err(MathError::DivisionByZero);
    }
    let random_value: f64 = rng.gen();
    let mut cumulative = 0.0;
    for (index, &p) in probabilities.iter().enumerate() {
        cumulative += p;
        if random_value < cumulative {
            return Ok(index);
        }
    }
    // Rounding can leave the cumulative sum just below 1.
    Ok(probabilities
        .iter()
        .rposition(|&p| p > 0.0)
        .unwrap_or(probabilities.len() - 1))
}

/// `<ket2|ket1>`: amplitude of finding `ket1` in state `ket2`.
pub fn transition_amplitude(ket1: &[Complex], ket2: &[Complex]) -> MathResult<Complex> {
    vector::inner_product(ket2, ket1)
}

fn require_hermitian(observable: &ComplexMatrix) -> QuantumResult<()> {
    if !matrix::is_hermitian(observable)? {
        return Err(QuantumError::NotHermitian);
    }
    Ok(())
}

/// `<Ω ket, ket>` for a hermitian observable `Ω`.
pub fn observable_mean(observable: &ComplexMatrix, ket: &[Complex]) -> QuantumResult<Complex> {
    require_hermitian(observable)?;
    let applied = matrix::action(observable, ket)?;
    Ok(vector::inner_product(&applied, ket)?)
}

/// `<Δ² ket, ket>` with `Δ = Ω − mean·I`.
pub fn observable_variance(observable: &ComplexMatrix, ket: &[Complex]) -> QuantumResult<Complex> {
    let mean = observable_mean(observable, ket)?;
    let shifted = matrix::scalar_multiply(mean, &matrix::identity(observable.rows()));
    let delta = matrix::add(observable, &matrix::additive_inverse(&shifted))?;
    let delta_squared = matrix::multiply(&delta, &delta)?;
    let applied = matrix::action(&delta_squared, ket)?;
    Ok(vector::inner_product(&applied, ket)?)
}

/// Applies `sequence[0..times]` to `ket` in order and returns the final state.
pub fn dynamics(
    times: usize,
    ket: &[Complex],
    sequence: &[ComplexMatrix],
) -> QuantumResult<Vec<Complex>> {
    if times > sequence.len() {
        return Err(QuantumError::SequenceTooShort {
            times,
            available: sequence.len(),
        });
    }
    let state = sequence[..times]
        .iter()
        .try_fold(ket.to_vec(), |state, u| matrix::action(u, &state))?;
    debug!(times, "dynamics finished");
    Ok(state)
}

/// Eigenvalues of an observable as real-valued complex scalars.
///
/// The remote solver receives the matrix in its display form (see
/// [`matrix::to_display_string`]). Whatever the solver returns is wrapped with
/// a zero imaginary part; solver failures are returned untouched.
pub fn eigenvalues_of_observable(
    solver: &dyn EigenSolver,
    observable: &ComplexMatrix,
) -> anyhow::Result<Vec<Complex>> {
    let values = solver.eigenvalues(observable)?;
    Ok(values.into_iter().map(|re| Complex::new(re, 0.0)).collect())
}
