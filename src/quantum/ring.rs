//! Scalar domains the walk drivers can run over.

use crate::core::complex::Complex;
use crate::core::error::{MathError, MathResult};

/// Addition and multiplication with their identities; enough for a matrix-vector product.
///
/// `plus` and `times` return `None` when the result does not fit the domain
/// (integer overflow). Floating-point domains always succeed.
pub trait Ring: Copy {
    fn zero() -> Self;
    fn one() -> Self;
    fn plus(self, other: Self) -> Option<Self>;
    fn times(self, other: Self) -> Option<Self>;
}

impl Ring for i64 {
    fn zero() -> Self {
        0
    }
    fn one() -> Self {
        1
    }
    fn plus(self, other: Self) -> Option<Self> {
        self.checked_add(other)
    }
    fn times(self, other: Self) -> Option<Self> {
        self.checked_mul(other)
    }
}

impl Ring for f64 {
    fn zero() -> Self {
        0.0
    }
    fn one() -> Self {
        1.0
    }
    fn plus(self, other: Self) -> Option<Self> {
        Some(self + other)
    }
    fn times(self, other: Self) -> Option<Self> {
        Some(self * other)
    }
}

impl Ring for Complex {
    fn zero() -> Self {
        Complex::ZERO
    }
    fn one() -> Self {
        Complex::ONE
    }
    fn plus(self, other: Self) -> Option<Self> {
        Some(self.add(other))
    }
    fn times(self, other: Self) -> Option<Self> {
        Some(self.mult(other))
    }
}

fn dot<'a, T, I>(mut pairs: I) -> MathResult<T>
where
    T: Ring + 'a,
    I: Iterator<Item = (&'a T, T)>,
{
    pairs.try_fold(T::zero(), |acc, (&a, b)| {
        a.times(b)
            .and_then(|p| acc.plus(p))
            .ok_or(MathError::Overflow)
    })
}

/// Matrix-vector product over any ring. Every row must be as long as `v`.
pub fn apply<T: Ring>(m: &[Vec<T>], v: &[T]) -> MathResult<Vec<T>> {
    if let Some(row) = m.iter().find(|row| row.len() != v.len()) {
        return Err(MathError::MatrixProductDimensionMismatch {
            cols: row.len(),
            rows: v.len(),
        });
    }
    m.iter()
        .map(|row| dot(row.iter().zip(v.iter().copied())))
        .collect()
}

/// Square-matrix product over any ring; `m · m` for the slit experiments.
pub fn multiply<T: Ring>(m1: &[Vec<T>], m2: &[Vec<T>]) -> MathResult<Vec<Vec<T>>> {
    let inner = m1.first().map_or(0, Vec::len);
    if inner != m2.len() || m1.iter().any(|r| r.len() != inner) {
        return Err(MathError::MatrixProductDimensionMismatch {
            cols: inner,
            rows: m2.len(),
        });
    }
    let cols = m2.first().map_or(0, Vec::len);
    if let Some((row, r)) = m2.iter().enumerate().find(|(_, r)| r.len() != cols) {
        return Err(MathError::RaggedRows {
            row,
            expected: cols,
            found: r.len(),
        });
    }
    m1.iter()
        .map(|row| {
            (0..cols)
                .map(|j| dot(row.iter().zip(m2.iter().map(|r| r[j]))))
                .collect::<MathResult<Vec<T>>>()
        })
        .collect()
}

/// `e_k` of length `n` in any ring.
pub fn basis<T: Ring>(n: usize, k: usize) -> Vec<T> {
    (0..n)
        .map(|i| if i == k { T::one() } else { T::zero() })
        .collect()
}
