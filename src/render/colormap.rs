// src/render/colormap.rs

use plotters::style::RGBColor;

const NEGATIVE: (f64, f64, f64) = (33.0, 102.0, 172.0);
const ZERO: (f64, f64, f64) = (255.0, 255.0, 255.0);
const POSITIVE: (f64, f64, f64) = (178.0, 24.0, 43.0);

/// Diverging scale shared by both panels: blue below zero, white at zero,
/// red above, saturating at `±limit`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorScale {
    limit: f64,
}

impl ColorScale {
    /// Scale symmetric about zero with half-range `limit`.
    pub fn symmetric(limit: f64) -> Self {
        // Keeps the scale usable for an identically zero function
        Self { limit: if limit.is_finite() && limit > 0.0 { limit } else { f64::EPSILON } }
    }

    pub fn limit(&self) -> f64 {
        self.limit
    }

    /// Position of `value` on the scale, in `[-1, 1]`.
    pub fn normalized(&self, value: f64) -> f64 {
        (value / self.limit).clamp(-1.0, 1.0)
    }

    /// Snaps `value` to the centre of one of `levels` equal bands.
    pub fn quantize(&self, value: f64, levels: usize) -> f64 {
        let levels = levels.max(1) as f64;
        let t = (self.normalized(value) + 1.0) / 2.0;
        let band = (t * levels).floor().min(levels - 1.0);
        ((band + 0.5) / levels * 2.0 - 1.0) * self.limit
    }

    pub fn color(&self, value: f64) -> RGBColor {
        let t = self.normalized(value);
        let (from, to, s) = if t >= 0.0 { (ZERO, POSITIVE, t) } else { (ZERO, NEGATIVE, -t) };
        let mix = |a: f64, b: f64| (a + (b - a) * s).round() as u8;
        RGBColor(mix(from.0, to.0), mix(from.1, to.1), mix(from.2, to.2))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_is_white_and_extremes_saturate() {
        let scale = ColorScale::symmetric(2.0);
        assert_eq!(scale.color(0.0), RGBColor(255, 255, 255));
        assert_eq!(scale.color(2.0), RGBColor(178, 24, 43));
        assert_eq!(scale.color(-5.0), RGBColor(33, 102, 172));
    }

    #[test]
    fn quantize_returns_band_centres() {
        let scale = ColorScale::symmetric(1.0);
        assert!((scale.quantize(0.9, 2) - 0.5).abs() < 1e-12);
        assert!((scale.quantize(-0.1, 2) + 0.5).abs() < 1e-12);
        assert!((scale.quantize(1.0, 4) - 0.75).abs() < 1e-12);
    }

    #[test]
    fn degenerate_limit_is_replaced() {
        assert!(ColorScale::symmetric(0.0).limit() > 0.0);
    }
}
