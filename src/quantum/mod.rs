//! Quantum layer: state statistics, dynamics and the walk experiments.

pub mod experiments;
pub mod ring;
pub mod system;
