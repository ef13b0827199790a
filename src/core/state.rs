// src/core/state.rs

use super::constants::plot_constants::ZERO_NORM_TOLERANCE;
use super::error::{Result, WignerError};
use nalgebra::{DMatrix, DVector};
use num_complex::Complex64;
use std::fmt;

/// A pure state vector in a truncated Fock space.
///
/// Amplitude `k` belongs to the number state `|k⟩`. Kets produced by the
/// factory and the combinator have unit norm; `from_amplitudes` accepts any
/// non-empty vector so that callers can build a raw sum and `unit()` it.
#[derive(Debug, Clone, PartialEq)]
pub struct Ket {
    amplitudes: DVector<Complex64>,
}

impl Ket {
    /// Creates a ket from raw amplitudes. The vector is not normalized.
    pub fn from_amplitudes(amplitudes: Vec<Complex64>) -> Result<Self> {
        if amplitudes.is_empty() {
            return Err(WignerError::out_of_range("A ket needs at least one basis level"));
        }
        Ok(Self { amplitudes: DVector::from_vec(amplitudes) })
    }

    pub(crate) fn from_vector(amplitudes: DVector<Complex64>) -> Self {
        Self { amplitudes }
    }

    /// Provides read-only access to the amplitude vector.
    pub fn amplitudes(&self) -> &DVector<Complex64> {
        &self.amplitudes
    }

    /// Gets the truncation dimension of the space this ket lives in.
    pub fn dim(&self) -> usize {
        self.amplitudes.len()
    }

    /// Euclidean norm `‖ψ‖`.
    pub fn norm(&self) -> f64 {
        self.amplitudes.norm()
    }

    /// Returns `ψ / ‖ψ‖`, failing on a (numerically) zero vector.
    pub fn unit(&self) -> Result<Self> {
        let norm = self.norm();
        if !norm.is_finite() || norm < ZERO_NORM_TOLERANCE {
            return Err(WignerError::normalization(format!(
                "Cannot renormalize a ket with norm {:e}",
                norm
            )));
        }
        Ok(Self::from_vector(self.amplitudes.map(|c| c / norm)))
    }

    /// Inner product `⟨self|other⟩`.
    pub fn inner(&self, other: &Ket) -> Complex64 {
        self.amplitudes.dotc(&other.amplitudes)
    }

    /// Outer product `|ψ⟩⟨ψ|`.
    pub fn to_density(&self) -> DensityOperator {
        DensityOperator::from_square(&self.amplitudes * self.amplitudes.adjoint())
    }

    pub(crate) fn scaled(&self, weight: f64) -> DVector<Complex64> {
        self.amplitudes.map(|c| c * weight)
    }
}

impl fmt::Display for Ket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Ket[")?;
        let mut first = true;
        for (k, c) in self.amplitudes.iter().enumerate() {
            // Only populated levels, a 40-entry vector is unreadable otherwise
            if c.norm_sqr() < 1e-8 {
                continue;
            }
            write!(f, "{}{:.4}|{}⟩", if first { "" } else { " + " }, c, k)?;
            first = false;
        }
        write!(f, "]")
    }
}

/// A density operator in a truncated Fock space.
///
/// Operators built by this crate are Hermitian, positive semi-definite and
/// have unit trace; `validation::validate_state` checks all three.
#[derive(Debug, Clone, PartialEq)]
pub struct DensityOperator {
    matrix: DMatrix<Complex64>,
}

impl DensityOperator {
    /// Wraps a square matrix. The matrix is not checked for physicality.
    pub fn from_matrix(matrix: DMatrix<Complex64>) -> Result<Self> {
        if matrix.nrows() == 0 {
            return Err(WignerError::out_of_range("A density operator needs at least one basis level"));
        }
        if matrix.nrows() != matrix.ncols() {
            return Err(WignerError::DimensionMismatch {
                expected: matrix.nrows(),
                actual: matrix.ncols(),
            });
        }
        Ok(Self { matrix })
    }

    pub(crate) fn from_square(matrix: DMatrix<Complex64>) -> Self {
        Self { matrix }
    }

    /// Provides read-only access to the matrix elements `ρ[m, n] = ⟨m|ρ|n⟩`.
    pub fn matrix(&self) -> &DMatrix<Complex64> {
        &self.matrix
    }

    pub fn dim(&self) -> usize {
        self.matrix.nrows()
    }

    /// Real part of `Tr ρ`.
    pub fn trace(&self) -> f64 {
        self.matrix.trace().re
    }

    /// `Tr ρ²`, equal to 1 exactly for pure states.
    pub fn purity(&self) -> f64 {
        self.matrix.iter().map(|c| c.norm_sqr()).sum()
    }

    /// Returns `ρ / Tr ρ`, failing on a (numerically) zero trace.
    pub fn unit(&self) -> Result<Self> {
        let trace = self.trace();
        if !trace.is_finite() || trace.abs() < ZERO_NORM_TOLERANCE {
            return Err(WignerError::normalization(format!(
                "Cannot renormalize an operator with trace {:e}",
                trace
            )));
        }
        Ok(Self::from_square(self.matrix.map(|c| c / trace)))
    }

    /// Eigenvalues of the Hermitian part, ascending order not guaranteed.
    pub fn eigenvalues(&self) -> Vec<f64> {
        self.matrix.symmetric_eigenvalues().iter().copied().collect()
    }

    /// Largest element-wise deviation `|ρ[m,n] − conj(ρ[n,m])|`.
    pub fn hermiticity_error(&self) -> f64 {
        let adjoint = self.matrix.adjoint();
        (&self.matrix - adjoint)
            .iter()
            .map(|c| c.norm())
            .fold(0.0, f64::max)
    }

    /// Frobenius distance `‖ρ − σ‖`.
    pub fn distance(&self, other: &DensityOperator) -> f64 {
        (&self.matrix - &other.matrix).norm()
    }

    pub(crate) fn scaled(&self, weight: f64) -> DMatrix<Complex64> {
        self.matrix.map(|c| c * weight)
    }
}

impl fmt::Display for DensityOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Operator[dim={}, trace={:.4}, purity={:.4}]",
            self.dim(),
            self.trace(),
            self.purity()
        )
    }
}

/// A quantum state: either pure (ket) or possibly mixed (operator).
///
/// The variant is the type tag: the coercion `Ket -> Operator` is explicit
/// and operations that only make sense for pure states can reject operators
/// without inspecting values at run time.
#[derive(Debug, Clone, PartialEq)]
pub enum QuantumState {
    /// Pure state vector.
    Ket(Ket),
    /// Density operator.
    Operator(DensityOperator),
}

impl QuantumState {
    pub fn dim(&self) -> usize {
        match self {
            QuantumState::Ket(ket) => ket.dim(),
            QuantumState::Operator(op) => op.dim(),
        }
    }

    pub fn is_ket(&self) -> bool {
        matches!(self, QuantumState::Ket(_))
    }

    /// Returns the ket if this state is pure-typed.
    pub fn as_ket(&self) -> Option<&Ket> {
        match self {
            QuantumState::Ket(ket) => Some(ket),
            QuantumState::Operator(_) => None,
        }
    }

    /// Coerces to operator form, taking the outer product of a ket.
    pub fn to_operator(&self) -> DensityOperator {
        match self {
            QuantumState::Ket(ket) => ket.to_density(),
            QuantumState::Operator(op) => op.clone(),
        }
    }

    /// Consuming variant of [`QuantumState::to_operator`].
    pub fn into_operator(self) -> DensityOperator {
        match self {
            QuantumState::Ket(ket) => ket.to_density(),
            QuantumState::Operator(op) => op,
        }
    }

    /// Renormalizes to unit norm (ket) or unit trace (operator).
    pub fn unit(&self) -> Result<Self> {
        match self {
            QuantumState::Ket(ket) => ket.unit().map(QuantumState::Ket),
            QuantumState::Operator(op) => op.unit().map(QuantumState::Operator),
        }
    }

    /// Applies a unitary: `Uψ` for kets, `UρU†` for operators.
    pub(crate) fn transformed(&self, unitary: &DMatrix<Complex64>) -> Result<Self> {
        if unitary.nrows() != self.dim() {
            return Err(WignerError::DimensionMismatch {
                expected: self.dim(),
                actual: unitary.nrows(),
            });
        }
        Ok(match self {
            QuantumState::Ket(ket) => QuantumState::Ket(Ket::from_vector(unitary * ket.amplitudes())),
            QuantumState::Operator(op) => {
                QuantumState::Operator(DensityOperator::from_square(unitary * op.matrix() * unitary.adjoint()))
            }
        })
    }
}

impl From<Ket> for QuantumState {
    fn from(ket: Ket) -> Self {
        QuantumState::Ket(ket)
    }
}

impl From<DensityOperator> for QuantumState {
    fn from(op: DensityOperator) -> Self {
        QuantumState::Operator(op)
    }
}

impl fmt::Display for QuantumState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QuantumState::Ket(ket) => write!(f, "{}", ket),
            QuantumState::Operator(op) => write!(f, "{}", op),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use num_traits::Zero;

    fn c(re: f64, im: f64) -> Complex64 {
        Complex64::new(re, im)
    }

    #[test]
    fn unit_rescales_raw_ket() {
        let ket = Ket::from_amplitudes(vec![c(3.0, 0.0), c(0.0, 4.0)]).unwrap();
        let unit = ket.unit().unwrap();
        assert_abs_diff_eq!(unit.norm(), 1.0, epsilon = 1e-12);
        assert_abs_diff_eq!(unit.amplitudes()[1].im, 0.8, epsilon = 1e-12);
    }

    #[test]
    fn zero_ket_cannot_be_normalized() {
        let ket = Ket::from_amplitudes(vec![Complex64::zero(); 3]).unwrap();
        assert!(matches!(ket.unit(), Err(WignerError::Normalization { .. })));
    }

    #[test]
    fn empty_ket_is_rejected() {
        assert!(matches!(Ket::from_amplitudes(vec![]), Err(WignerError::OutOfRange { .. })));
    }

    #[test]
    fn outer_product_is_pure_projector() {
        let ket = Ket::from_amplitudes(vec![c(0.6, 0.0), c(0.0, 0.8)]).unwrap();
        let rho = ket.to_density();
        assert_abs_diff_eq!(rho.trace(), 1.0, epsilon = 1e-12);
        assert_abs_diff_eq!(rho.purity(), 1.0, epsilon = 1e-12);
        assert!(rho.hermiticity_error() < 1e-12);
        // ρ[0,1] = ψ0 conj(ψ1) = 0.6 * (-0.8i)
        assert_abs_diff_eq!(rho.matrix()[(0, 1)].im, -0.48, epsilon = 1e-12);
    }

    #[test]
    fn operator_eigenvalues_of_projector() {
        let ket = Ket::from_amplitudes(vec![c(1.0, 0.0), c(1.0, 0.0)]).unwrap().unit().unwrap();
        let mut eig = ket.to_density().eigenvalues();
        eig.sort_by(|a, b| a.partial_cmp(b).unwrap());
        assert_abs_diff_eq!(eig[0], 0.0, epsilon = 1e-12);
        assert_abs_diff_eq!(eig[1], 1.0, epsilon = 1e-12);
    }

    #[test]
    fn non_square_matrix_is_rejected() {
        let m = DMatrix::<Complex64>::zeros(2, 3);
        assert!(matches!(
            DensityOperator::from_matrix(m),
            Err(WignerError::DimensionMismatch { expected: 2, actual: 3 })
        ));
    }

    #[test]
    fn zero_trace_operator_cannot_be_normalized() {
        let op = DensityOperator::from_matrix(DMatrix::zeros(2, 2)).unwrap();
        assert!(matches!(op.unit(), Err(WignerError::Normalization { .. })));
    }

    #[test]
    fn coercion_preserves_operator_variant() {
        let op = DensityOperator::from_matrix(DMatrix::identity(2, 2)).unwrap().unit().unwrap();
        let state = QuantumState::from(op.clone());
        assert!(!state.is_ket());
        assert!(state.as_ket().is_none());
        assert_eq!(state.into_operator(), op);
    }
}
