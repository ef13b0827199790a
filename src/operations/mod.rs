// src/operations/mod.rs

//! Ladder operators, phase-space transformations and the base states of a
//! single bosonic mode in a truncated Fock space.
//!
//! Every function takes the truncation `dim` explicitly. Matrices are indexed
//! `[row, col] = ⟨row|·|col⟩`, i.e. the annihilation operator has `√n` on the
//! first super-diagonal.

use crate::core::{DensityOperator, Ket, Result, WignerError};
use nalgebra::{DMatrix, DVector};
use num_complex::Complex64;
use num_traits::Zero;

fn check_dim(dim: usize) -> Result<()> {
    if dim == 0 {
        return Err(WignerError::out_of_range("Truncation dimension must be at least 1"));
    }
    Ok(())
}

/// Annihilation operator `a` with `a|n⟩ = √n |n−1⟩`.
pub fn annihilation(dim: usize) -> Result<DMatrix<Complex64>> {
    check_dim(dim)?;
    Ok(DMatrix::from_fn(dim, dim, |row, col| {
        if col == row + 1 {
            Complex64::new((col as f64).sqrt(), 0.0)
        } else {
            Complex64::zero()
        }
    }))
}

/// Creation operator `a†`.
pub fn creation(dim: usize) -> Result<DMatrix<Complex64>> {
    Ok(annihilation(dim)?.adjoint())
}

/// Number operator `a†a`, diagonal `0, 1, …, dim−1`.
pub fn number(dim: usize) -> Result<DMatrix<Complex64>> {
    check_dim(dim)?;
    Ok(DMatrix::from_fn(dim, dim, |row, col| {
        if row == col {
            Complex64::new(row as f64, 0.0)
        } else {
            Complex64::zero()
        }
    }))
}

/// Displacement operator `D(β) = exp(β a† − β* a)`.
///
/// Shifts a state by `β` in the complex amplitude plane.
pub fn displace(dim: usize, beta: Complex64) -> Result<DMatrix<Complex64>> {
    let a = annihilation(dim)?;
    let a_dag = a.adjoint();
    let generator = a_dag * beta - a * beta.conj();
    Ok(generator.exp())
}

/// Squeezing operator `S(z) = exp((z* a² − z a†²) / 2)` with `z = r e^{iθ}`.
///
/// Reduces the uncertainty of the quadrature along `θ/2` by `e^{−r}`.
pub fn squeeze(dim: usize, z: Complex64) -> Result<DMatrix<Complex64>> {
    let a = annihilation(dim)?;
    let a_dag = a.adjoint();
    let a2 = &a * &a;
    let a_dag2 = &a_dag * &a_dag;
    let generator = (a2 * z.conj() - a_dag2 * z) * Complex64::new(0.5, 0.0);
    Ok(generator.exp())
}

/// Number state `|n⟩`.
///
/// An index at or beyond the truncation is an error: cutting it off silently
/// would hand back a state that is not the requested one.
pub fn basis(dim: usize, n: usize) -> Result<Ket> {
    check_dim(dim)?;
    if n >= dim {
        return Err(WignerError::out_of_range(format!(
            "Fock index {} is outside the truncated space [0, {}]",
            n,
            dim - 1
        )));
    }
    let mut amplitudes = DVector::from_element(dim, Complex64::zero());
    amplitudes[n] = Complex64::new(1.0, 0.0);
    Ok(Ket::from_vector(amplitudes))
}

/// Coherent state `|α⟩ = D(α)|0⟩`, built in the truncated space.
pub fn coherent(dim: usize, alpha: Complex64) -> Result<Ket> {
    if !alpha.re.is_finite() || !alpha.im.is_finite() {
        return Err(WignerError::out_of_range(format!("Coherent amplitude {} is not finite", alpha)));
    }
    let vacuum = basis(dim, 0)?;
    Ok(Ket::from_vector(displace(dim, alpha)? * vacuum.amplitudes()))
}

/// Thermal state with mean photon number `mean_photons`.
///
/// Populations follow the Bose-Einstein distribution `p_k ∝ (n̄/(1+n̄))^k`,
/// renormalized over the kept levels.
pub fn thermal_dm(dim: usize, mean_photons: f64) -> Result<DensityOperator> {
    check_dim(dim)?;
    if !mean_photons.is_finite() || mean_photons < 0.0 {
        return Err(WignerError::out_of_range(format!(
            "Thermal mean photon number must be a finite value >= 0, got {}",
            mean_photons
        )));
    }
    if mean_photons == 0.0 {
        return Ok(basis(dim, 0)?.to_density());
    }
    let beta = (1.0 / mean_photons + 1.0).ln();
    let weights: Vec<f64> = (0..dim).map(|k| (-beta * k as f64).exp()).collect();
    let total: f64 = weights.iter().sum();
    let diagonal = DVector::from_iterator(dim, weights.iter().map(|w| Complex64::new(w / total, 0.0)));
    Ok(DensityOperator::from_square(DMatrix::from_diagonal(&diagonal)))
}
