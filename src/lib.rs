//! qwalk: a complex-number linear-algebra kernel with the quantum statistics
//! and marble/photon walk experiments built on it.
pub mod cli;
pub mod commands;
pub mod config;
pub mod core;
pub mod eigen;
pub mod logging;
pub mod quantum;

pub use crate::core::{Complex, ComplexMatrix, MathError, QuantumError};
