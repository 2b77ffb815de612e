//! Dense complex matrices and the operations over them.
//!
//! A [`ComplexMatrix`] is rectangular by construction. Element-wise operations
//! delegate row by row to [`crate::core::vector`]; products are the plain
//! O(n³) triple loop.
#![allow(clippy::needless_range_loop)]

use std::ops::Index;

use serde::{Deserialize, Serialize};

use crate::core::complex::Complex;
use crate::core::error::{MathError, MathResult};
use crate::core::vector;

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "Vec<Vec<Complex>>", into = "Vec<Vec<Complex>>")]
pub struct ComplexMatrix {
    rows: Vec<Vec<Complex>>,
    cols: usize,
}

impl ComplexMatrix {
    /// Builds a matrix from its rows, rejecting ragged input.
    pub fn from_rows(rows: Vec<Vec<Complex>>) -> MathResult<Self> {
        let cols = rows.first().map_or(0, Vec::len);
        if let Some((row, r)) = rows.iter().enumerate().find(|(_, r)| r.len() != cols) {
            return Err(MathError::RaggedRows {
                row,
                expected: cols,
                found: r.len(),
            });
        }
        Ok(Self { rows, cols })
    }

    /// Convenience constructor from `(re, im)` pairs.
    pub fn from_pairs(rows: &[Vec<(f64, f64)>]) -> MathResult<Self> {
        Self::from_rows(
            rows.iter()
                .map(|r| r.iter().map(|&p| Complex::from(p)).collect())
                .collect(),
        )
    }

    pub fn zeros(rows: usize, cols: usize) -> Self {
        Self::from_rows_unchecked(vec![vec![Complex::ZERO; cols]; rows], cols)
    }

    pub fn rows(&self) -> usize {
        self.rows.len()
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn shape(&self) -> (usize, usize) {
        (self.rows(), self.cols)
    }

    pub fn is_square(&self) -> bool {
        self.rows() == self.cols
    }

    pub fn row(&self, i: usize) -> &[Complex] {
        &self.rows[i]
    }

    pub fn iter_rows(&self) -> impl Iterator<Item = &[Complex]> {
        self.rows.iter().map(Vec::as_slice)
    }

    pub fn into_rows(self) -> Vec<Vec<Complex>> {
        self.rows
    }

    /// Returns a copy with one entry replaced.
    pub fn with_entry(&self, i: usize, j: usize, value: Complex) -> Self {
        let mut out = self.clone();
        out.rows[i][j] = value;
        out
    }

    // Rows produced by row-wise delegation always share one length.
    // A matrix without rows has no columns either.
    fn from_rows_unchecked(rows: Vec<Vec<Complex>>, cols: usize) -> Self {
        let cols = if rows.is_empty() { 0 } else { cols };
        Self { rows, cols }
    }
}

impl Index<(usize, usize)> for ComplexMatrix {
    type Output = Complex;

    fn index(&self, (i, j): (usize, usize)) -> &Complex {
        &self.rows[i][j]
    }
}

impl TryFrom<Vec<Vec<Complex>>> for ComplexMatrix {
    type Error = MathError;

    fn try_from(rows: Vec<Vec<Complex>>) -> MathResult<Self> {
        Self::from_rows(rows)
    }
}

impl From<ComplexMatrix> for Vec<Vec<Complex>> {
    fn from(m: ComplexMatrix) -> Self {
        m.rows
    }
}

pub fn add(m1: &ComplexMatrix, m2: &ComplexMatrix) -> MathResult<ComplexMatrix> {
    if m1.shape() != m2.shape() {
        return Err(MathError::MatrixSumDimensionMismatch {
            left: m1.shape(),
            right: m2.shape(),
        });
    }
    let rows = m1
        .iter_rows()
        .zip(m2.iter_rows())
        .map(|(a, b)| vector::add(a, b))
        .collect::<MathResult<Vec<_>>>()?;
    Ok(ComplexMatrix::from_rows_unchecked(rows, m1.cols()))
}

pub fn additive_inverse(m: &ComplexMatrix) -> ComplexMatrix {
    let rows = m.iter_rows().map(vector::additive_inverse).collect();
    ComplexMatrix::from_rows_unchecked(rows, m.cols())
}

pub fn scalar_multiply(c: Complex, m: &ComplexMatrix) -> ComplexMatrix {
    let rows = m.iter_rows().map(|r| vector::scalar_multiply(c, r)).collect();
    ComplexMatrix::from_rows_unchecked(rows, m.cols())
}

pub fn conjugate(m: &ComplexMatrix) -> ComplexMatrix {
    let rows = m.iter_rows().map(vector::conjugate).collect();
    ComplexMatrix::from_rows_unchecked(rows, m.cols())
}

pub fn transpose(m: &ComplexMatrix) -> ComplexMatrix {
    let (rows, cols) = m.shape();
    let mut transposed = vec![vec![Complex::ZERO; rows]; cols];
    for i in 0..rows {
        for j in 0..cols {
            transposed[j][i] = m[(i, j)];
        }
    }
    ComplexMatrix::from_rows_unchecked(transposed, rows)
}

/// Conjugate transpose.
pub fn adjoint(m: &ComplexMatrix) -> ComplexMatrix {
    conjugate(&transpose(m))
}

pub fn multiply(m1: &ComplexMatrix, m2: &ComplexMatrix) -> MathResult<ComplexMatrix> {
    if m1.cols() != m2.rows() {
        return Err(MathError::MatrixProductDimensionMismatch {
            cols: m1.cols(),
            rows: m2.rows(),
        });
    }
    let (result_rows, result_cols) = (m1.rows(), m2.cols());
    let mut result = vec![vec![Complex::ZERO; result_cols]; result_rows];
    for i in 0..result_rows {
        for j in 0..result_cols {
            result[i][j] = (0..m1.cols()).fold(Complex::ZERO, |acc, k| {
                acc.add(m1[(i, k)].mult(m2[(k, j)]))
            });
        }
    }
    Ok(ComplexMatrix::from_rows_unchecked(result, result_cols))
}

/// Sum of the diagonal entries that exist; a non-square matrix gives a partial trace.
pub fn trace(m: &ComplexMatrix) -> Complex {
    let n = m.rows().min(m.cols());
    (0..n).fold(Complex::ZERO, |acc, i| acc.add(m[(i, i)]))
}

/// `trace(adjoint(m1) · m2)`.
pub fn matrix_inner_product(m1: &ComplexMatrix, m2: &ComplexMatrix) -> MathResult<Complex> {
    Ok(trace(&multiply(&adjoint(m1), m2)?))
}

/// Matrix-vector product.
pub fn action(m: &ComplexMatrix, v: &[Complex]) -> MathResult<Vec<Complex>> {
    if m.cols() != v.len() {
        return Err(MathError::MatrixProductDimensionMismatch {
            cols: m.cols(),
            rows: v.len(),
        });
    }
    Ok(m.iter_rows()
        .map(|row| {
            row.iter()
                .zip(v)
                .fold(Complex::ZERO, |acc, (a, b)| acc.add(a.mult(*b)))
        })
        .collect())
}

pub fn identity(size: usize) -> ComplexMatrix {
    let mut identity = vec![vec![Complex::ZERO; size]; size];
    for i in 0..size {
        identity[i][i] = Complex::ONE;
    }
    ComplexMatrix::from_rows_unchecked(identity, size)
}

fn require_square(m: &ComplexMatrix) -> MathResult<()> {
    if !m.is_square() {
        return Err(MathError::NotSquare {
            rows: m.rows(),
            cols: m.cols(),
        });
    }
    Ok(())
}

pub fn is_hermitian(m: &ComplexMatrix) -> MathResult<bool> {
    require_square(m)?;
    equals(&adjoint(m), m)
}

/// `m · m† == I`, compared exactly.
pub fn is_unitary(m: &ComplexMatrix) -> MathResult<bool> {
    require_square(m)?;
    let product = multiply(m, &adjoint(m))?;
    equals(&product, &identity(m.rows()))
}

/// Kronecker product: block `(i, j)` of the result is `m1[i][j] · m2`.
pub fn tensor_product(m1: &ComplexMatrix, m2: &ComplexMatrix) -> ComplexMatrix {
    let (ar, ac) = m1.shape();
    let (br, bc) = m2.shape();
    let mut out = vec![vec![Complex::ZERO; ac * bc]; ar * br];
    for i in 0..ar {
        for j in 0..ac {
            let aij = m1[(i, j)];
            for k in 0..br {
                for l in 0..bc {
                    out[i * br + k][j * bc + l] = aij.mult(m2[(k, l)]);
                }
            }
        }
    }
    ComplexMatrix::from_rows_unchecked(out, ac * bc)
}

/// Exact element-wise equality. Shapes must match, as for [`add`].
pub fn equals(m1: &ComplexMatrix, m2: &ComplexMatrix) -> MathResult<bool> {
    if m1.shape() != m2.shape() {
        return Err(MathError::MatrixSumDimensionMismatch {
            left: m1.shape(),
            right: m2.shape(),
        });
    }
    Ok(m1
        .iter_rows()
        .zip(m2.iter_rows())
        .all(|(a, b)| vector::equals(a, b)))
}

/// Wire format shared with the eigenvalue service: `{{a,bi},{c,d}}`.
///
/// Entries print as `<re>` when the imaginary part is zero, `<im>i` when the
/// real part is zero, `<re><im>i` when the imaginary part is negative and
/// `<re>+<im>i` otherwise. The explicit `+` departs from a bare
/// `<re><im>i` concatenation so that a positive imaginary part stays
/// separable from the real part (`1.0+2.0i`, not `1.02.0i`).
pub fn to_display_string(m: &ComplexMatrix) -> String {
    let rows: Vec<String> = m.iter_rows().map(vector::display_string).collect();
    format!("{{{}}}", rows.join(","))
}
