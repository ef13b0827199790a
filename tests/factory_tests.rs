// tests/factory_tests.rs

use approx::assert_abs_diff_eq;
use num_complex::Complex64;
use wigner_plotter::{
    QuantumState, StateKind, StateSpec, WignerError, build_state, operations::basis, validate_state,
};

const DIM: usize = 30;

fn c(re: f64, im: f64) -> Complex64 {
    Complex64::new(re, im)
}

fn all_kinds() -> Vec<StateKind> {
    vec![
        StateKind::Vacuum,
        StateKind::Thermal { mean_photons: 1.5 },
        StateKind::Coherent { alpha: c(1.0, -0.6) },
        StateKind::Fock { n: 3 },
    ]
}

#[test]
fn test_every_base_kind_is_normalized() -> Result<(), WignerError> {
    for kind in all_kinds() {
        let state = build_state(kind, c(0.0, 0.0), c(0.0, 0.0), DIM)?;
        validate_state(&state, Some(1e-9))?;
    }
    Ok(())
}

#[test]
fn test_squeezed_and_displaced_states_stay_physical() -> Result<(), WignerError> {
    for kind in all_kinds() {
        let state = build_state(kind, c(0.3, 0.2), c(-0.8, 0.4), DIM)?;
        validate_state(&state, Some(1e-8))?;
    }
    Ok(())
}

#[test]
fn test_thermal_is_operator_and_others_are_kets() -> Result<(), WignerError> {
    for kind in all_kinds() {
        let state = build_state(kind, c(0.5, 0.0), c(1.0, 0.0), DIM)?;
        assert_eq!(state.is_ket(), !matches!(kind, StateKind::Thermal { .. }), "{}", kind);
    }
    Ok(())
}

#[test]
fn test_zero_transform_is_identity() -> Result<(), WignerError> {
    let state = build_state(StateKind::Fock { n: 2 }, c(0.0, 0.0), c(0.0, 0.0), DIM)?;
    let expected = basis(DIM, 2)?;
    let Some(ket) = state.as_ket() else {
        panic!("Fock state should be a ket");
    };
    assert_abs_diff_eq!(ket.inner(&expected).norm(), 1.0, epsilon = 1e-12);
    Ok(())
}

#[test]
fn test_displaced_vacuum_is_coherent_state() -> Result<(), WignerError> {
    let beta = c(1.2, 0.7);
    let displaced = build_state(StateKind::Vacuum, c(0.0, 0.0), beta, DIM)?;
    let coherent = build_state(StateKind::Coherent { alpha: beta }, c(0.0, 0.0), c(0.0, 0.0), DIM)?;
    let distance = displaced.to_operator().distance(&coherent.to_operator());
    assert!(distance < 1e-9, "distance {}", distance);
    Ok(())
}

#[test]
fn test_fock_index_is_bounded_by_truncation() {
    let zero = c(0.0, 0.0);
    assert!(matches!(
        build_state(StateKind::Fock { n: DIM }, zero, zero, DIM),
        Err(WignerError::OutOfRange { .. })
    ));
    let top = build_state(StateKind::Fock { n: DIM - 1 }, zero, zero, DIM);
    assert!(matches!(top, Ok(QuantumState::Ket(_))));
}

#[test]
fn test_state_spec_builds_like_build_state() -> Result<(), WignerError> {
    let spec = StateSpec::new(StateKind::Coherent { alpha: c(0.5, 0.5) })
        .with_squeeze(c(0.2, 0.0))
        .with_displacement(c(0.0, -1.0));
    let a = spec.build(DIM)?;
    let b = build_state(spec.kind, spec.squeeze, spec.displace, DIM)?;
    assert_eq!(a, b);
    Ok(())
}
