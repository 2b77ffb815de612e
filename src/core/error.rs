use thiserror::Error;

/// Precondition failures raised by the scalar, vector and matrix kernel.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MathError {
    #[error("Division by zero is not defined for complex numbers")]
    DivisionByZero,

    #[error("Vectors must have the same length (got {left} and {right})")]
    VectorLengthMismatch { left: usize, right: usize },

    #[error("Matrices must have the same dimensions to be added ({left:?} vs {right:?})")]
    MatrixSumDimensionMismatch {
        left: (usize, usize),
        right: (usize, usize),
    },

    #[error("Column count of the left operand ({cols}) must equal the row count of the right operand ({rows})")]
    MatrixProductDimensionMismatch { cols: usize, rows: usize },

    #[error("Matrix must be square for this operation (got {rows}x{cols})")]
    NotSquare { rows: usize, cols: usize },

    #[error("Matrix rows must all have the same length (row {row} has {found}, expected {expected})")]
    RaggedRows {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("Position {index} is out of bounds for a state of length {len}")]
    IndexOutOfBounds { index: usize, len: usize },

    #[error("Integer arithmetic overflowed")]
    Overflow,
}

/// Failures raised by measurement statistics, dynamics and the experiment drivers.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QuantumError {
    #[error("The given matrix is not hermitian")]
    NotHermitian,

    #[error("Dynamics asked for {times} steps but only {available} transformations were given")]
    SequenceTooShort { times: usize, available: usize },

    #[error("Slit layout needs {slits} slit(s) and a {expected}x{expected} base matrix (got {rows}x{cols})")]
    SlitLayout {
        slits: usize,
        expected: usize,
        rows: usize,
        cols: usize,
    },

    #[error(transparent)]
    Math(#[from] MathError),
}

pub type MathResult<T> = Result<T, MathError>;
pub type QuantumResult<T> = Result<T, QuantumError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn division_by_zero_message() {
        let err = MathError::DivisionByZero;
        assert_eq!(format!("{}", err), "Division by zero is not defined for complex numbers");
    }

    #[test]
    fn vector_mismatch_message() {
        let err = MathError::VectorLengthMismatch { left: 2, right: 3 };
        assert_eq!(format!("{}", err), "Vectors must have the same length (got 2 and 3)");
    }

    #[test]
    fn not_square_message() {
        let err = MathError::NotSquare { rows: 2, cols: 3 };
        assert_eq!(format!("{}", err), "Matrix must be square for this operation (got 2x3)");
    }

    #[test]
    fn math_errors_pass_through_quantum_errors() {
        let err: QuantumError = MathError::DivisionByZero.into();
        assert_eq!(err, QuantumError::Math(MathError::DivisionByZero));
        assert_eq!(format!("{}", err), format!("{}", MathError::DivisionByZero));
    }
}
