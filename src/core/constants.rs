//! Numerical defaults shared by the factory, the renderer and the driver.

/// Defaults describing the truncated space and the phase-space window.
pub mod plot_constants {
    /// Number of Fock levels kept in the truncated Hilbert space.
    pub const DEFAULT_DIMENSION: usize = 40;
    /// Half-width of the square phase-space window, in units of |α|.
    pub const DEFAULT_MAX_AMPLITUDE: f64 = 5.0;
    /// Samples per quadrature axis.
    pub const DEFAULT_GRID_POINTS: usize = 200;
    /// Number of filled bands in the contour panel.
    pub const DEFAULT_CONTOUR_LEVELS: usize = 100;
    /// Grid stride used when sampling the surface panel.
    pub const DEFAULT_SURFACE_STRIDE: usize = 5;
    /// Pixel size of the combined figure (wide layout, 17x8 aspect).
    pub const DEFAULT_FIGURE_SIZE: (u32, u32) = (1700, 800);
    /// Norms and traces below this are treated as zero.
    pub const ZERO_NORM_TOLERANCE: f64 = 1e-12;
}
