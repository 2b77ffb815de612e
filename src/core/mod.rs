//! Linear-algebra kernel over complex scalars.
//! Nothing in here depends on the quantum layer, the eigen boundary or the CLI.

pub mod complex;
pub mod error;
pub mod matrix;
pub mod vector;

pub use complex::Complex;
pub use error::{MathError, MathResult, QuantumError, QuantumResult};
pub use matrix::ComplexMatrix;
