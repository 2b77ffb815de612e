//! Free functions over complex vectors (`&[Complex]`).
//!
//! Every operation allocates a fresh `Vec`; inputs are never modified.

use crate::core::complex::{self, Complex};
use crate::core::error::{MathError, MathResult};

fn check_lengths(v1: &[Complex], v2: &[Complex]) -> MathResult<()> {
    if v1.len() != v2.len() {
        return Err(MathError::VectorLengthMismatch {
            left: v1.len(),
            right: v2.len(),
        });
    }
    Ok(())
}

pub fn add(v1: &[Complex], v2: &[Complex]) -> MathResult<Vec<Complex>> {
    check_lengths(v1, v2)?;
    Ok(v1.iter().zip(v2).map(|(a, b)| a.add(*b)).collect())
}

pub fn additive_inverse(v: &[Complex]) -> Vec<Complex> {
    v.iter().map(|c| c.additive_inverse()).collect()
}

pub fn conjugate(v: &[Complex]) -> Vec<Complex> {
    v.iter().map(|c| c.conjugate()).collect()
}

pub fn scalar_multiply(c: Complex, v: &[Complex]) -> Vec<Complex> {
    v.iter().map(|x| c.mult(*x)).collect()
}

/// `Σ conj(v1[i]) · v2[i]`; conjugate-linear in the first argument (bra-ket order).
pub fn inner_product(v1: &[Complex], v2: &[Complex]) -> MathResult<Complex> {
    check_lengths(v1, v2)?;
    Ok(v1
        .iter()
        .zip(v2)
        .fold(Complex::ZERO, |acc, (a, b)| acc.add(a.conjugate().mult(*b))))
}

pub fn norm(v: &[Complex]) -> f64 {
    // <v|v> is real for any v, lengths always match.
    let sum = v
        .iter()
        .fold(Complex::ZERO, |acc, c| acc.add(c.conjugate().mult(*c)));
    sum.re.sqrt()
}

pub fn normalize(v: &[Complex]) -> MathResult<Vec<Complex>> {
    let n = norm(v);
    if n == 0.0 {
        return Err(MathError::DivisionByZero);
    }
    Ok(v.iter().map(|c| Complex::new(c.re / n, c.im / n)).collect())
}

pub fn distance(v1: &[Complex], v2: &[Complex]) -> MathResult<f64> {
    let diff = add(v1, &additive_inverse(v2))?;
    Ok(norm(&diff))
}

pub fn equals(v1: &[Complex], v2: &[Complex]) -> bool {
    v1.len() == v2.len() && v1.iter().zip(v2).all(|(a, b)| a.equals(*b))
}

/// Standard basis vector `e_k` of length `n`.
pub fn basis(n: usize, k: usize) -> Vec<Complex> {
    (0..n)
        .map(|i| if i == k { Complex::ONE } else { Complex::ZERO })
        .collect()
}

/// `{a,b,...}` using the matrix entry format.
pub fn display_string(v: &[Complex]) -> String {
    let entries: Vec<String> = v.iter().map(|c| display_entry(*c)).collect();
    format!("{{{}}}", entries.join(","))
}

pub(crate) fn display_entry(c: Complex) -> String {
    if c.im == 0.0 {
        complex::real(c.re)
    } else if c.re == 0.0 {
        format!("{}i", complex::real(c.im))
    } else if c.im < 0.0 {
        format!("{}{}i", complex::real(c.re), complex::real(c.im))
    } else {
        format!("{}+{}i", complex::real(c.re), complex::real(c.im))
    }
}
