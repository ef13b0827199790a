// src/factory/mod.rs

//! Builds a single quantum state from a menu selection and its parameters.

use crate::core::{QuantumState, Result};
use crate::operations::{basis, coherent, displace, squeeze, thermal_dm};
use num_complex::Complex64;
use num_traits::Zero;
use std::fmt;
use tracing::debug;

/// The base state selected in the state-kind menu, with its kind-specific
/// parameter.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum StateKind {
    /// `|0⟩`
    Vacuum,
    /// Bose-Einstein mixture with the given mean photon number.
    Thermal {
        /// Mean photon number `n̄ >= 0`.
        mean_photons: f64,
    },
    /// `|α⟩`
    Coherent {
        /// Complex amplitude `α`.
        alpha: Complex64,
    },
    /// `|n⟩`
    Fock {
        /// Occupation number, must be below the truncation dimension.
        n: usize,
    },
}

impl StateKind {
    /// Menu label of this kind.
    pub fn label(&self) -> &'static str {
        match self {
            StateKind::Vacuum => "vacuum",
            StateKind::Thermal { .. } => "thermal",
            StateKind::Coherent { .. } => "coherent",
            StateKind::Fock { .. } => "fock",
        }
    }
}

impl fmt::Display for StateKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StateKind::Vacuum => write!(f, "vacuum"),
            StateKind::Thermal { mean_photons } => write!(f, "thermal(n̄={})", mean_photons),
            StateKind::Coherent { alpha } => write!(f, "coherent(α={})", alpha),
            StateKind::Fock { n } => write!(f, "fock(n={})", n),
        }
    }
}

/// Full description of one state: base kind, then squeeze, then displace.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StateSpec {
    pub kind: StateKind,
    /// Squeezing parameter `z = r e^{iθ}`.
    pub squeeze: Complex64,
    /// Displacement `β`.
    pub displace: Complex64,
}

impl StateSpec {
    /// A base state with no squeezing and no displacement.
    pub fn new(kind: StateKind) -> Self {
        Self {
            kind,
            squeeze: Complex64::zero(),
            displace: Complex64::zero(),
        }
    }

    pub fn with_squeeze(mut self, z: Complex64) -> Self {
        self.squeeze = z;
        self
    }

    pub fn with_displacement(mut self, beta: Complex64) -> Self {
        self.displace = beta;
        self
    }

    /// Builds the state in a space truncated to `dimension` levels.
    pub fn build(&self, dimension: usize) -> Result<QuantumState> {
        build_state(self.kind, self.squeeze, self.displace, dimension)
    }
}

impl fmt::Display for StateSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "D({}) S({}) {}", self.displace, self.squeeze, self.kind)
    }
}

/// Constructs `D(β) · S(z) · base` in a space of `dimension` levels.
///
/// Squeezing is applied before the displacement. Kets are left-multiplied by
/// `U = D(β)S(z)`; an operator base (thermal) is conjugated, `UρU†`, which
/// keeps it a density operator.
///
/// # Errors
/// * `OutOfRange` for a Fock index `n >= dimension`, a negative thermal mean,
///   a non-finite amplitude or a zero dimension.
pub fn build_state(
    kind: StateKind,
    squeeze_param: Complex64,
    displace_param: Complex64,
    dimension: usize,
) -> Result<QuantumState> {
    debug!(%kind, squeeze = %squeeze_param, displace = %displace_param, dimension, "building state");

    let base = match kind {
        StateKind::Vacuum => QuantumState::Ket(basis(dimension, 0)?),
        StateKind::Thermal { mean_photons } => QuantumState::Operator(thermal_dm(dimension, mean_photons)?),
        StateKind::Coherent { alpha } => QuantumState::Ket(coherent(dimension, alpha)?),
        StateKind::Fock { n } => QuantumState::Ket(basis(dimension, n)?),
    };

    let transform = displace(dimension, displace_param)? * squeeze(dimension, squeeze_param)?;
    base.transformed(&transform)
}
