// src/core/mod.rs

//! Core data structures and types

pub mod config;
pub mod error;
pub mod state;

// Re-export public types for convenient access via `wigner_plotter::core::TypeName`
pub use config::PlotterConfig;
pub use error::{Result, WignerError};
pub use state::{DensityOperator, Ket, QuantumState};

pub mod constants;
pub use constants::plot_constants::{DEFAULT_DIMENSION, DEFAULT_MAX_AMPLITUDE}; // Re-export
