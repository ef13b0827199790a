// src/core/config.rs

//! Run-time configuration threaded through the factory and the renderer.

use super::constants::plot_constants::*;
use super::error::{Result, WignerError};
use std::fmt;

/// Parameters for one render cycle.
///
/// The truncation dimension is carried here rather than as a process-wide
/// constant so that the factory and the phase-space evaluation always agree
/// on the space they work in.
#[derive(Debug, Clone, PartialEq)]
pub struct PlotterConfig {
    /// Fock levels in the truncated Hilbert space.
    pub dimension: usize,
    /// Phase-space window is `[-max_amplitude, max_amplitude]` on both axes.
    pub max_amplitude: f64,
    /// Samples per axis of the phase-space grid.
    pub grid_points: usize,
    /// Filled bands drawn by the contour panel.
    pub contour_levels: usize,
    /// Every `surface_stride`-th grid sample is used for the surface mesh.
    pub surface_stride: usize,
    /// Width and height of the combined figure in pixels.
    pub figure_size: (u32, u32),
}

impl Default for PlotterConfig {
    fn default() -> Self {
        Self {
            dimension: DEFAULT_DIMENSION,
            max_amplitude: DEFAULT_MAX_AMPLITUDE,
            grid_points: DEFAULT_GRID_POINTS,
            contour_levels: DEFAULT_CONTOUR_LEVELS,
            surface_stride: DEFAULT_SURFACE_STRIDE,
            figure_size: DEFAULT_FIGURE_SIZE,
        }
    }
}

impl PlotterConfig {
    /// Creates the default configuration (40 levels, radius 5, 200x200 grid).
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_dimension(mut self, dimension: usize) -> Self {
        self.dimension = dimension;
        self
    }

    pub fn with_max_amplitude(mut self, max_amplitude: f64) -> Self {
        self.max_amplitude = max_amplitude;
        self
    }

    pub fn with_grid_points(mut self, grid_points: usize) -> Self {
        self.grid_points = grid_points;
        self
    }

    pub fn with_contour_levels(mut self, contour_levels: usize) -> Self {
        self.contour_levels = contour_levels;
        self
    }

    pub fn with_surface_stride(mut self, surface_stride: usize) -> Self {
        self.surface_stride = surface_stride;
        self
    }

    pub fn with_figure_size(mut self, width: u32, height: u32) -> Self {
        self.figure_size = (width, height);
        self
    }

    /// Rejects settings no render cycle can work with.
    pub fn validate(&self) -> Result<()> {
        if self.dimension == 0 {
            return Err(WignerError::out_of_range("Truncation dimension must be at least 1"));
        }
        if !self.max_amplitude.is_finite() || self.max_amplitude <= 0.0 {
            return Err(WignerError::out_of_range(format!(
                "Phase-space radius must be positive and finite, got {}",
                self.max_amplitude
            )));
        }
        if self.grid_points < 2 {
            return Err(WignerError::out_of_range(format!(
                "Phase-space grid needs at least 2 points per axis, got {}",
                self.grid_points
            )));
        }
        if self.contour_levels == 0 {
            return Err(WignerError::out_of_range("Contour plot needs at least one level"));
        }
        if self.surface_stride == 0 {
            return Err(WignerError::out_of_range("Surface stride must be at least 1"));
        }
        if self.figure_size.0 == 0 || self.figure_size.1 == 0 {
            return Err(WignerError::out_of_range("Figure size must be non-zero"));
        }
        Ok(())
    }
}

impl fmt::Display for PlotterConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "PlotterConfig[dim={}, |α|≤{}, grid={}x{}]",
            self.dimension, self.max_amplitude, self.grid_points, self.grid_points
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_matches_fixed_plot_settings() {
        let config = PlotterConfig::default();
        assert_eq!(config.dimension, 40);
        assert_eq!(config.max_amplitude, 5.0);
        assert_eq!(config.grid_points, 200);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn rejects_degenerate_settings() {
        assert!(matches!(
            PlotterConfig::new().with_dimension(0).validate(),
            Err(WignerError::OutOfRange { .. })
        ));
        assert!(PlotterConfig::new().with_grid_points(1).validate().is_err());
        assert!(PlotterConfig::new().with_max_amplitude(f64::NAN).validate().is_err());
        assert!(PlotterConfig::new().with_max_amplitude(-1.0).validate().is_err());
        assert!(PlotterConfig::new().with_surface_stride(0).validate().is_err());
        assert!(PlotterConfig::new().with_contour_levels(0).validate().is_err());
    }
}
