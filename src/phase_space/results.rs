// src/phase_space/results.rs
use std::fmt;

/// The Wigner function sampled on a square phase-space grid.
///
/// Values are stored row-major: row `iy` runs along Re(α) at fixed
/// `Im(α) = axis[iy]`. Both axes share the same sample positions.
#[derive(Debug, Clone, PartialEq)]
pub struct WignerGrid {
    axis: Vec<f64>,
    values: Vec<f64>,
}

impl WignerGrid {
    /// (Internal visibility)
    pub(crate) fn new(axis: Vec<f64>, values: Vec<f64>) -> Self {
        debug_assert_eq!(values.len(), axis.len() * axis.len());
        Self { axis, values }
    }

    /// Sample positions shared by the Re(α) and Im(α) axes.
    pub fn axis(&self) -> &[f64] {
        &self.axis
    }

    /// Samples per axis.
    pub fn points(&self) -> usize {
        self.axis.len()
    }

    /// Half-width of the sampled window.
    pub fn max_amplitude(&self) -> f64 {
        self.axis.last().copied().unwrap_or(0.0)
    }

    /// Spacing between neighbouring samples.
    pub fn step(&self) -> f64 {
        match self.axis.as_slice() {
            [first, second, ..] => second - first,
            _ => 0.0,
        }
    }

    /// `W` at `(Re α, Im α) = (axis[ix], axis[iy])`.
    pub fn value(&self, ix: usize, iy: usize) -> f64 {
        self.values[iy * self.axis.len() + ix]
    }

    /// `W` at the sample closest to `(x, y)`, clamped to the window.
    pub fn value_near(&self, x: f64, y: f64) -> f64 {
        self.value(self.nearest_index(x), self.nearest_index(y))
    }

    fn nearest_index(&self, coordinate: f64) -> usize {
        let last = self.axis.len().saturating_sub(1);
        let step = self.step();
        if step <= 0.0 {
            return 0;
        }
        let raw = ((coordinate - self.axis[0]) / step).round();
        if raw <= 0.0 { 0 } else { (raw as usize).min(last) }
    }

    /// Iterates `(x, y, W)` over every sample.
    pub fn cells(&self) -> impl Iterator<Item = (f64, f64, f64)> + '_ {
        let n = self.axis.len();
        self.values
            .iter()
            .enumerate()
            .map(move |(k, &w)| (self.axis[k % n], self.axis[k / n], w))
    }

    /// Coordinates and value of the largest sample.
    pub fn peak(&self) -> (f64, f64, f64) {
        self.cells()
            .fold((0.0, 0.0, f64::NEG_INFINITY), |best, cell| if cell.2 > best.2 { cell } else { best })
    }

    pub fn min(&self) -> f64 {
        self.values.iter().copied().fold(f64::INFINITY, f64::min)
    }

    pub fn max(&self) -> f64 {
        self.values.iter().copied().fold(f64::NEG_INFINITY, f64::max)
    }

    /// `max |W|`, the half-range of the shared color scale.
    pub fn abs_max(&self) -> f64 {
        self.values.iter().fold(0.0, |m: f64, w| m.max(w.abs()))
    }

    /// Riemann-sum estimate of `∫ W d²α` over the window.
    pub fn integral(&self) -> f64 {
        let step = self.step();
        self.values.iter().sum::<f64>() * step * step
    }
}

impl fmt::Display for WignerGrid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (x, y, w) = self.peak();
        writeln!(f, "Wigner Function [{}x{} on |α| ≤ {}]:", self.points(), self.points(), self.max_amplitude())?;
        writeln!(f, "  Peak:  W({:.3}, {:.3}) = {:.5}", x, y, w)?;
        writeln!(f, "  Range: [{:.5}, {:.5}]", self.min(), self.max())?;
        writeln!(f, "  Integral: {:.5}", self.integral())
    }
}
