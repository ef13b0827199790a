// src/session/mod.rs

//! One interaction cycle: read the state menus, build each state, fold the
//! additions into the base state and render the result.

use crate::composition::{CombinationMode, CombinationStep, compose};
use crate::controls::StateControls;
use crate::core::{PlotterConfig, QuantumState, Result};
use crate::render::{Renderer, WignerFigure};
use tracing::debug;

/// Everything the user entered for one cycle.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PlotRequest {
    /// The first state menu.
    pub base: StateControls,
    pub mode: CombinationMode,
    /// Menus opened by answering "add another state?", in order.
    pub additions: Vec<StateControls>,
}

impl PlotRequest {
    pub fn new(base: StateControls) -> Self {
        Self { base, ..Self::default() }
    }

    pub fn with_mode(mut self, mode: CombinationMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn with_addition(mut self, controls: StateControls) -> Self {
        self.additions.push(controls);
        self
    }
}

/// Runs plot requests against a fixed configuration.
#[derive(Debug, Clone, Default)]
pub struct Session {
    config: PlotterConfig,
}

impl Session {
    pub fn new(config: PlotterConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &PlotterConfig {
        &self.config
    }

    /// Builds the aggregate state for `request`.
    ///
    /// Additions are built lazily, one per combination step, so an invalid
    /// menu stops the cycle at the point it is reached.
    pub fn prepare(&self, request: &PlotRequest) -> Result<QuantumState> {
        self.config.validate()?;
        let dimension = self.config.dimension;
        let base = request.base.to_spec()?.build(dimension)?;

        let count = request.additions.len();
        debug!(mode = %request.mode, additions = count, dimension, "preparing state");
        let mut steps = request.additions.iter().enumerate().map(|(i, controls)| -> Result<CombinationStep> {
            let state = controls.to_spec()?.build(dimension)?;
            Ok(CombinationStep::new(state, i + 1 < count).with_weight(controls.weight))
        });
        compose(base, request.mode, count > 0, &mut steps)
    }

    /// Prepares the state and renders its Wigner function.
    pub fn render(&self, request: &PlotRequest) -> Result<WignerFigure> {
        let state = self.prepare(request)?;
        Renderer::new(self.config.clone()).render(&state)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::WignerError;
    use approx::assert_abs_diff_eq;

    fn session() -> Session {
        Session::new(PlotterConfig::default().with_dimension(12).with_grid_points(11))
    }

    #[test]
    fn single_menu_mixture_is_coerced_to_operator() -> Result<()> {
        let state = session().prepare(&PlotRequest::new(StateControls::new("fock")))?;
        let QuantumState::Operator(rho) = state else {
            panic!("mixture mode should yield an operator");
        };
        assert_abs_diff_eq!(rho.matrix()[(1, 1)].re, 1.0, epsilon = 1e-12);
        Ok(())
    }

    #[test]
    fn superposition_without_additions_keeps_ket() -> Result<()> {
        let request = PlotRequest::new(StateControls::new("vacuum")).with_mode(CombinationMode::Superposition);
        assert!(session().prepare(&request)?.is_ket());
        Ok(())
    }

    #[test]
    fn additions_are_weighted_equally() -> Result<()> {
        let request = PlotRequest::new(StateControls::new("vacuum"))
            .with_addition(StateControls::new("fock"))
            .with_addition(StateControls { fock_n: 2, ..StateControls::new("fock") });
        let rho = session().prepare(&request)?.into_operator();
        for n in 0..3 {
            assert_abs_diff_eq!(rho.matrix()[(n, n)].re, 1.0 / 3.0, epsilon = 1e-12);
        }
        Ok(())
    }

    #[test]
    fn invalid_addition_ends_the_cycle() {
        let request = PlotRequest::new(StateControls::new("vacuum")).with_addition(StateControls::new("cat"));
        assert!(matches!(session().prepare(&request), Err(WignerError::InvalidSelection { .. })));
    }

    #[test]
    fn thermal_base_cannot_be_superposed() {
        let request = PlotRequest::new(StateControls::new("thermal"))
            .with_mode(CombinationMode::Superposition)
            .with_addition(StateControls::new("vacuum"));
        assert!(matches!(session().prepare(&request), Err(WignerError::TypeMismatch { .. })));
    }
}
