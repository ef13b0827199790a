// src/lib.rs

//! `wigner_plotter` - builds quantum optical states and plots their Wigner
//! quasi-probability distribution
//!
//! States live in a truncated Fock space. A base state (vacuum, thermal,
//! coherent or Fock) is squeezed and displaced, optionally combined with
//! further states as a superposition or a mixture, and its Wigner function is
//! sampled on a square grid of the complex amplitude plane and drawn as a
//! contour plot next to a 3D surface.

pub mod core;
pub mod operations;
pub mod factory;
pub mod composition;
pub mod phase_space;
pub mod validation;
pub mod controls;
pub mod render;
pub mod session;

// Re-export the most common types for easier top-level use
pub use core::{DensityOperator, Ket, PlotterConfig, QuantumState, Result, WignerError};
pub use factory::{StateKind, StateSpec, build_state};
pub use composition::{
    CombinationMode,
    CombinationStep,
    StateProvider,
    combine_mixture,
    combine_superposition,
    compose,
};
pub use phase_space::{PhaseSpaceGrid, WignerGrid, wigner};
pub use controls::StateControls;
pub use render::{Renderer, WignerFigure, render};
pub use session::{PlotRequest, Session};
pub use validation::{
    check_hermitian,
    check_normalization,
    check_positive_semidefinite,
    check_unit_trace,
    validate_state,
};

// Example 1: Vacuum Wigner function
// The vacuum is a Gaussian centred on the origin with peak value 2/π.
/// ```
/// use wigner_plotter::{build_state, wigner, PhaseSpaceGrid, StateKind, WignerError};
/// use num_complex::Complex64;
///
/// let zero = Complex64::new(0.0, 0.0);
/// let vacuum = build_state(StateKind::Vacuum, zero, zero, 20)?;
///
/// let grid = PhaseSpaceGrid::new(3.0, 61)?;
/// let w = wigner(&vacuum, &grid)?;
/// println!("{}", w);
///
/// let (x, y, peak) = w.peak();
/// assert!(x.abs() < 1e-9 && y.abs() < 1e-9);
/// assert!((peak - 2.0 / std::f64::consts::PI).abs() < 1e-9);
/// # Ok::<(), WignerError>(())
/// ```
#[doc(hidden)]
const _: () = (); // Attaches the preceding doc comment block to a hidden item

// Example 2: Cat state from two coherent states
// The superposition shows interference fringes with negative values between
// the two lobes. The mixture of the same two states does not.
/// ```
/// use wigner_plotter::{
///     build_state, compose, wigner, CombinationMode, CombinationStep, PhaseSpaceGrid,
///     StateKind, WignerError,
/// };
/// use num_complex::Complex64;
///
/// let zero = Complex64::new(0.0, 0.0);
/// let coherent = |re: f64| build_state(StateKind::Coherent { alpha: Complex64::new(re, 0.0) }, zero, zero, 30);
/// let grid = PhaseSpaceGrid::new(4.0, 41)?;
///
/// for mode in [CombinationMode::Superposition, CombinationMode::Mixture] {
///     let mut steps = CombinationStep::sequence([coherent(-2.0)?]).into_iter().map(Ok);
///     let cat = compose(coherent(2.0)?, mode, true, &mut steps)?;
///     let w = wigner(&cat, &grid)?;
///     println!("{}: min W = {:.4}", mode, w.min());
///     match mode {
///         CombinationMode::Superposition => assert!(w.min() < -0.2),
///         CombinationMode::Mixture => assert!(w.min() > -1e-6),
///     }
/// }
/// # Ok::<(), WignerError>(())
/// ```
#[doc(hidden)]
const _: () = (); // Attaches the preceding doc comment block to a hidden item
