// src/phase_space/engine.rs
use nalgebra::DMatrix;
use num_complex::Complex64;
use num_traits::Zero;
use std::f64::consts::PI;

/// Evaluates `W(α)` for one density matrix, point by point.
///
/// Uses the Laguerre recurrence over the matrix elements: `terms[n]` holds the
/// Wigner function of the outer product `|m⟩⟨n|` for the row `m` being
/// processed, starting from the vacuum Gaussian `exp(−2|α|²)/π` and updated in
/// place as `m` advances. Only the upper triangle of `ρ` is read; hermiticity
/// supplies the rest through the factor 2 on off-diagonal terms.
/// (Internal visibility)
pub(crate) struct WignerEngine<'a> {
    rho: &'a DMatrix<Complex64>,
    /// Scratch row reused across grid points.
    terms: Vec<Complex64>,
    /// `sqrt_n[k] = √k`, hoisted out of the inner loop.
    sqrt_n: Vec<f64>,
}

impl<'a> WignerEngine<'a> {
    pub(crate) fn new(rho: &'a DMatrix<Complex64>) -> Self {
        let dim = rho.nrows();
        Self {
            rho,
            terms: vec![Complex64::zero(); dim],
            sqrt_n: (0..dim).map(|k| (k as f64).sqrt()).collect(),
        }
    }

    /// `W(α)` normalized so that `∫ W d²α = 1` over the amplitude plane.
    pub(crate) fn value_at(&mut self, alpha: Complex64) -> f64 {
        let dim = self.rho.nrows();
        let rho = self.rho;
        let terms = &mut self.terms;
        let two_alpha = alpha * 2.0;
        let two_alpha_conj = alpha.conj() * 2.0;

        terms[0] = Complex64::new((-2.0 * alpha.norm_sqr()).exp() / PI, 0.0);
        let mut w = rho[(0, 0)].re * terms[0].re;
        for n in 1..dim {
            terms[n] = two_alpha * terms[n - 1] / self.sqrt_n[n];
            w += 2.0 * (rho[(0, n)] * terms[n]).re;
        }

        for m in 1..dim {
            let sqrt_m = self.sqrt_n[m];
            let mut previous = terms[m];
            terms[m] = (two_alpha_conj * previous - terms[m - 1] * sqrt_m) / sqrt_m;
            w += (rho[(m, m)] * terms[m]).re;
            for n in (m + 1)..dim {
                let next = (two_alpha * terms[n - 1] - previous * sqrt_m) / self.sqrt_n[n];
                previous = terms[n];
                terms[n] = next;
                w += 2.0 * (rho[(m, n)] * terms[n]).re;
            }
        }

        // Jacobian of the quadrature-to-amplitude change of variables
        2.0 * w
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::operations::{basis, coherent};
    use approx::assert_abs_diff_eq;
    use std::f64::consts::FRAC_2_PI;

    #[test]
    fn vacuum_is_gaussian() {
        let rho = basis(10, 0).unwrap().to_density();
        let mut engine = WignerEngine::new(rho.matrix());
        assert_abs_diff_eq!(engine.value_at(Complex64::zero()), FRAC_2_PI, epsilon = 1e-12);
        let alpha = Complex64::new(0.3, -0.4);
        let expected = FRAC_2_PI * (-2.0 * alpha.norm_sqr()).exp();
        assert_abs_diff_eq!(engine.value_at(alpha), expected, epsilon = 1e-12);
    }

    #[test]
    fn single_photon_is_negative_at_origin() {
        let rho = basis(10, 1).unwrap().to_density();
        let mut engine = WignerEngine::new(rho.matrix());
        assert_abs_diff_eq!(engine.value_at(Complex64::zero()), -FRAC_2_PI, epsilon = 1e-12);
        // (2/π)(4|α|² − 1)e^{−2|α|²}
        let alpha = Complex64::new(0.5, 0.5);
        let expected = FRAC_2_PI * (4.0 * alpha.norm_sqr() - 1.0) * (-2.0 * alpha.norm_sqr()).exp();
        assert_abs_diff_eq!(engine.value_at(alpha), expected, epsilon = 1e-12);
    }

    #[test]
    fn coherent_state_is_displaced_gaussian() {
        let beta = Complex64::new(1.0, -0.5);
        let rho = coherent(30, beta).unwrap().to_density();
        let mut engine = WignerEngine::new(rho.matrix());
        assert_abs_diff_eq!(engine.value_at(beta), FRAC_2_PI, epsilon = 1e-8);
        let alpha = Complex64::new(0.0, 0.0);
        let expected = FRAC_2_PI * (-2.0 * (alpha - beta).norm_sqr()).exp();
        assert_abs_diff_eq!(engine.value_at(alpha), expected, epsilon = 1e-8);
    }
}
