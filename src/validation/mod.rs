// src/validation/mod.rs

//! Provides functions to validate that a `QuantumState` is physical.

use crate::core::{DensityOperator, Ket, QuantumState, Result, WignerError};

// Default tolerance values (can be overridden by caller)
const DEFAULT_NORM_TOLERANCE: f64 = 1e-9;
const DEFAULT_HERMITIAN_TOLERANCE: f64 = 1e-9;
const DEFAULT_EIGENVALUE_FLOOR: f64 = -1e-9;

/// Checks that a ket has unit norm.
///
/// # Arguments
/// * `ket` - The `Ket` to check.
/// * `tolerance` - Allowed deviation of `‖ψ‖²` from 1.0. Defaults to 1e-9.
///
/// # Returns
/// * `Ok(())` if normalized within tolerance.
/// * `Err(WignerError::Normalization)` otherwise.
pub fn check_normalization(ket: &Ket, tolerance: Option<f64>) -> Result<()> {
    let effective_tolerance = tolerance.unwrap_or(DEFAULT_NORM_TOLERANCE);
    let norm_sq = ket.norm().powi(2);
    if (norm_sq - 1.0).abs() > effective_tolerance {
        Err(WignerError::normalization(format!(
            "Ket normalization failed. Sum(|c_i|^2) = {} (Deviation > {})",
            norm_sq, effective_tolerance
        )))
    } else {
        Ok(())
    }
}

/// Checks that an operator has unit trace.
pub fn check_unit_trace(op: &DensityOperator, tolerance: Option<f64>) -> Result<()> {
    let effective_tolerance = tolerance.unwrap_or(DEFAULT_NORM_TOLERANCE);
    let trace = op.trace();
    if (trace - 1.0).abs() > effective_tolerance {
        Err(WignerError::normalization(format!(
            "Operator trace check failed. Tr(ρ) = {} (Deviation > {})",
            trace, effective_tolerance
        )))
    } else {
        Ok(())
    }
}

/// Checks `ρ = ρ†` element-wise.
pub fn check_hermitian(op: &DensityOperator, tolerance: Option<f64>) -> Result<()> {
    let effective_tolerance = tolerance.unwrap_or(DEFAULT_HERMITIAN_TOLERANCE);
    let error = op.hermiticity_error();
    if error > effective_tolerance {
        Err(WignerError::NotPhysical {
            message: format!("Operator is not Hermitian. max|ρ - ρ†| = {:e}", error),
        })
    } else {
        Ok(())
    }
}

/// Checks that no eigenvalue falls below `floor` (default -1e-9).
///
/// Only meaningful for Hermitian operators; run `check_hermitian` first.
pub fn check_positive_semidefinite(op: &DensityOperator, floor: Option<f64>) -> Result<()> {
    let effective_floor = floor.unwrap_or(DEFAULT_EIGENVALUE_FLOOR);
    let min_eigenvalue = op.eigenvalues().into_iter().fold(f64::INFINITY, f64::min);
    if min_eigenvalue < effective_floor {
        Err(WignerError::NotPhysical {
            message: format!(
                "Operator is not positive semi-definite. Smallest eigenvalue {:e} < {:e}",
                min_eigenvalue, effective_floor
            ),
        })
    } else {
        Ok(())
    }
}

/// Performs all checks appropriate to the state's variant.
///
/// Kets: unit norm. Operators: unit trace, Hermitian, positive semi-definite.
/// `tolerance` applies to every check; `None` uses the defaults.
pub fn validate_state(state: &QuantumState, tolerance: Option<f64>) -> Result<()> {
    match state {
        QuantumState::Ket(ket) => check_normalization(ket, tolerance),
        QuantumState::Operator(op) => {
            check_unit_trace(op, tolerance)?;
            check_hermitian(op, tolerance)?;
            check_positive_semidefinite(op, tolerance.map(|t| -t))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::DMatrix;
    use num_complex::Complex64;

    fn op(entries: [[f64; 2]; 2]) -> DensityOperator {
        DensityOperator::from_matrix(DMatrix::from_fn(2, 2, |r, c| Complex64::new(entries[r][c], 0.0))).unwrap()
    }

    #[test]
    fn unnormalized_ket_fails() {
        let ket = Ket::from_amplitudes(vec![Complex64::new(1.0, 0.0), Complex64::new(1.0, 0.0)]).unwrap();
        assert!(matches!(check_normalization(&ket, None), Err(WignerError::Normalization { .. })));
        assert!(check_normalization(&ket.unit().unwrap(), None).is_ok());
    }

    #[test]
    fn maximally_mixed_qubit_is_valid() {
        let state = QuantumState::Operator(op([[0.5, 0.0], [0.0, 0.5]]));
        assert!(validate_state(&state, None).is_ok());
    }

    #[test]
    fn negative_eigenvalue_is_rejected() {
        // Trace 1, Hermitian, eigenvalues 1.5 and -0.5
        let bad = op([[0.5, 1.0], [1.0, 0.5]]);
        assert!(check_hermitian(&bad, None).is_ok());
        assert!(matches!(check_positive_semidefinite(&bad, None), Err(WignerError::NotPhysical { .. })));
    }

    #[test]
    fn asymmetric_operator_is_rejected() {
        let bad = op([[0.5, 0.3], [0.0, 0.5]]);
        assert!(matches!(check_hermitian(&bad, None), Err(WignerError::NotPhysical { .. })));
    }

    #[test]
    fn trace_two_is_rejected() {
        let bad = op([[1.0, 0.0], [0.0, 1.0]]);
        assert!(matches!(check_unit_trace(&bad, None), Err(WignerError::Normalization { .. })));
    }
}
