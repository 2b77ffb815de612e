//! Iterated linear-map drivers: marbles, probabilistic marbles and photons,
//! plus the multi-slit setup built on top of them.
//!
//! All three walks are the same loop ([`iterate`]); they differ only in the
//! scalar domain and in which matrix-vector product advances the state.

use std::fmt;

use tracing::debug;

use crate::core::complex::Complex;
use crate::core::error::{MathResult, QuantumError, QuantumResult};
use crate::core::matrix::{self, ComplexMatrix};
use crate::core::vector;
use crate::quantum::ring::{self, Ring};

/// Applies `step` to the state `clicks` times and returns only the last state.
pub fn iterate<T, F>(initial: &[T], clicks: usize, mut step: F) -> MathResult<Vec<T>>
where
    T: Clone,
    F: FnMut(&[T]) -> MathResult<Vec<T>>,
{
    let mut state = initial.to_vec();
    for _ in 0..clicks {
        state = step(&state)?;
    }
    debug!(clicks, len = state.len(), "walk finished");
    Ok(state)
}

/// Ring-generic walk: `state ← adjacency · state`, `clicks` times.
pub fn walk<T: Ring>(adjacency: &[Vec<T>], initial: &[T], clicks: usize) -> MathResult<Vec<T>> {
    iterate(initial, clicks, |state| ring::apply(adjacency, state))
}

/// Marble counts moving along a boolean (0/1) adjacency matrix.
pub fn marble_walk(adjacency: &[Vec<i64>], initial: &[i64], clicks: usize) -> MathResult<Vec<i64>> {
    walk(adjacency, initial, clicks)
}

/// Probability mass moving along a weighted adjacency matrix.
pub fn probability_walk(
    adjacency: &[Vec<f64>],
    initial: &[f64],
    clicks: usize,
) -> MathResult<Vec<f64>> {
    walk(adjacency, initial, clicks)
}

/// Photon amplitudes moving along a complex adjacency matrix.
pub fn photon_walk(
    adjacency: &ComplexMatrix,
    initial: &[Complex],
    clicks: usize,
) -> MathResult<Vec<Complex>> {
    iterate(initial, clicks, |state| matrix::action(adjacency, state))
}

fn check_layout(slits: usize, targets: usize, shape: (usize, usize)) -> QuantumResult<usize> {
    let n = slits + targets + 1;
    if slits == 0 || shape != (n, n) {
        return Err(QuantumError::SlitLayout {
            slits,
            expected: n,
            rows: shape.0,
            cols: shape.1,
        });
    }
    Ok(n)
}

// Row count, and the first row length that breaks squareness (if any).
fn grid_shape<T>(m: &[Vec<T>]) -> (usize, usize) {
    let cols = m
        .iter()
        .map(Vec::len)
        .find(|&len| len != m.len())
        .unwrap_or(m.len());
    (m.len(), cols)
}

/// Outcome of the classical (bullet) slit experiment.
#[derive(Debug, Clone, PartialEq)]
pub struct BulletSlitReport {
    pub slits: usize,
    pub targets: usize,
    /// Adjacency matrix after two clicks (`M · M`).
    pub squared: Vec<Vec<f64>>,
    /// `M² · e₀`.
    pub state: Vec<f64>,
}

/// Outcome of the quantum (photon) slit experiment.
#[derive(Debug, Clone, PartialEq)]
pub struct PhotonSlitReport {
    pub slits: usize,
    pub targets: usize,
    pub squared: ComplexMatrix,
    pub state: Vec<Complex>,
    /// Target entries `(row, 0)` of `M²` that cancelled to exactly zero.
    pub interference: Vec<(usize, usize)>,
}

/// Classical multi-slit experiment.
///
/// Row 0 is the source, rows `1..=slits` the slits and the rest the targets.
/// `base` supplies the slit-to-target probabilities; the source fan-out
/// (`1/slits` per slit) and the absorbing target self-loops are injected here.
pub fn bullet_slit_experiment(
    slits: usize,
    targets: usize,
    base: &[Vec<f64>],
) -> QuantumResult<BulletSlitReport> {
    let n = check_layout(slits, targets, grid_shape(base))?;
    let mut adjacency = base.to_vec();
    for row in adjacency.iter_mut().take(slits + 1).skip(1) {
        row[0] = 1.0 / slits as f64;
    }
    for i in slits + 1..n {
        adjacency[i][i] = 1.0;
    }

    let squared = ring::multiply(&adjacency, &adjacency)?;
    let state = ring::apply(&squared, &ring::basis::<f64>(n, 0))?;
    debug!(slits, targets, "bullet slit experiment done");
    Ok(BulletSlitReport {
        slits,
        targets,
        squared,
        state,
    })
}

/// Quantum multi-slit experiment over complex amplitudes.
///
/// Same layout as [`bullet_slit_experiment`] with a `sqrt(1/slits)` fan-out.
/// Target entries of `M²` in column 0 that are exactly zero are reported as
/// interference points; the comparison is the exact scalar equality.
pub fn photon_slit_experiment(
    slits: usize,
    targets: usize,
    base: &ComplexMatrix,
) -> QuantumResult<PhotonSlitReport> {
    let n = check_layout(slits, targets, base.shape())?;
    let fan_out = Complex::new((1.0 / slits as f64).sqrt(), 0.0);
    let mut rows = base.clone().into_rows();
    for row in rows.iter_mut().take(slits + 1).skip(1) {
        row[0] = fan_out;
    }
    for i in slits + 1..n {
        rows[i][i] = Complex::ONE;
    }
    let adjacency = ComplexMatrix::from_rows(rows)?;

    let squared = matrix::multiply(&adjacency, &adjacency)?;
    let state = matrix::action(&squared, &vector::basis(n, 0))?;
    let interference: Vec<(usize, usize)> = (slits + 1..n)
        .filter(|&i| squared[(i, 0)] == Complex::ZERO)
        .map(|i| (i, 0))
        .collect();
    debug!(slits, targets, points = interference.len(), "photon slit experiment done");
    Ok(PhotonSlitReport {
        slits,
        targets,
        squared,
        state,
        interference,
    })
}

impl fmt::Display for BulletSlitReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "bullets through {} slits onto {} targets", self.slits, self.targets)?;
        for row in &self.squared {
            write!(f, "|")?;
            for x in row {
                write!(f, "{:.3}|", x)?;
            }
            writeln!(f)?;
        }
        write!(f, "state: |")?;
        for x in &self.state {
            write!(f, "{:.3}|", x)?;
        }
        Ok(())
    }
}

impl fmt::Display for PhotonSlitReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "photons through {} slits onto {} targets", self.slits, self.targets)?;
        for row in self.squared.iter_rows() {
            write!(f, "|")?;
            for c in row {
                write!(f, "{:.3} {:+.3}i|", c.re, c.im)?;
            }
            writeln!(f)?;
        }
        write!(f, "state: |")?;
        for c in &self.state {
            write!(f, "{:.3} {:+.3}i|", c.re, c.im)?;
        }
        writeln!(f)?;
        if self.interference.is_empty() {
            write!(f, "interference: none")
        } else {
            let points: Vec<String> = self
                .interference
                .iter()
                .map(|(i, j)| format!("[{},{}]", i, j))
                .collect();
            write!(f, "interference: {}", points.join(" "))
        }
    }
}
