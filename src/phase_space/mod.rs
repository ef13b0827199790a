// src/phase_space/mod.rs

//! Evaluates the Wigner quasi-probability distribution of a state over a
//! square window of the complex amplitude plane.
//!
//! Coordinates are `x = Re(α)` and `y = Im(α)`. With this convention the
//! vacuum is `W(α) = (2/π) exp(−2|α|²)`, a coherent state `|β⟩` peaks at `β`,
//! and `∫ W d²α = 1`.

mod results;
pub(crate) mod engine;

pub use results::WignerGrid;

use crate::core::{QuantumState, Result, WignerError};
use engine::WignerEngine;
use num_complex::Complex64;
use tracing::debug;

/// Sample positions of a square grid `[-max_amplitude, max_amplitude]²`.
#[derive(Debug, Clone, PartialEq)]
pub struct PhaseSpaceGrid {
    max_amplitude: f64,
    points: usize,
}

impl PhaseSpaceGrid {
    /// # Errors
    /// * `OutOfRange` for fewer than 2 points or a non-positive radius.
    pub fn new(max_amplitude: f64, points: usize) -> Result<Self> {
        if !max_amplitude.is_finite() || max_amplitude <= 0.0 {
            return Err(WignerError::out_of_range(format!(
                "Phase-space radius must be positive and finite, got {}",
                max_amplitude
            )));
        }
        if points < 2 {
            return Err(WignerError::out_of_range(format!(
                "Phase-space grid needs at least 2 points per axis, got {}",
                points
            )));
        }
        Ok(Self { max_amplitude, points })
    }

    pub fn max_amplitude(&self) -> f64 {
        self.max_amplitude
    }

    pub fn points(&self) -> usize {
        self.points
    }

    /// Evenly spaced samples from `-max_amplitude` to `max_amplitude` inclusive.
    pub fn axis(&self) -> Vec<f64> {
        let span = 2.0 * self.max_amplitude;
        let last = (self.points - 1) as f64;
        (0..self.points)
            .map(|i| -self.max_amplitude + span * i as f64 / last)
            .collect()
    }
}

/// Samples `W` of `state` on `grid`. Kets are coerced to `|ψ⟩⟨ψ|` first.
pub fn wigner(state: &QuantumState, grid: &PhaseSpaceGrid) -> Result<WignerGrid> {
    let rho = state.to_operator();
    let axis = grid.axis();
    debug!(dimension = rho.dim(), points = grid.points(), "evaluating Wigner function");

    let mut engine = WignerEngine::new(rho.matrix());
    let mut values = Vec::with_capacity(axis.len() * axis.len());
    for &y in &axis {
        for &x in &axis {
            values.push(engine.value_at(Complex64::new(x, y)));
        }
    }

    if values.iter().any(|w| !w.is_finite()) {
        return Err(WignerError::NotPhysical {
            message: "Wigner function evaluation produced non-finite values".to_string(),
        });
    }
    Ok(WignerGrid::new(axis, values))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn axis_is_symmetric_and_inclusive() -> Result<()> {
        let axis = PhaseSpaceGrid::new(5.0, 201)?.axis();
        assert_eq!(axis.len(), 201);
        assert_abs_diff_eq!(axis[0], -5.0, epsilon = 1e-12);
        assert_abs_diff_eq!(axis[100], 0.0, epsilon = 1e-12);
        assert_abs_diff_eq!(axis[200], 5.0, epsilon = 1e-12);
        Ok(())
    }

    #[test]
    fn degenerate_grids_are_rejected() {
        assert!(matches!(PhaseSpaceGrid::new(5.0, 1), Err(WignerError::OutOfRange { .. })));
        assert!(matches!(PhaseSpaceGrid::new(0.0, 10), Err(WignerError::OutOfRange { .. })));
    }
}
