// src/controls/mod.rs

//! The widget model behind one state menu: a kind selector, bounded sliders,
//! and the validation that turns raw widget values into a [`StateSpec`].
//!
//! Slider ranges are part of the observable behaviour and are kept exactly.
//! The squeezing angle slider is in units of π.

use crate::core::{Result, WignerError};
use crate::factory::{StateKind, StateSpec};
use num_complex::Complex64;
use std::f64::consts::PI;
use std::fmt;
use std::str::FromStr;

/// A bounded numeric input.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Slider<T> {
    pub label: &'static str,
    pub min: T,
    pub max: T,
    pub step: T,
    pub default: T,
}

impl<T> Slider<T>
where
    T: PartialOrd + Copy + fmt::Display,
{
    pub const fn new(label: &'static str, min: T, max: T, step: T, default: T) -> Self {
        Self { label, min, max, step, default }
    }

    /// Returns `value` if it lies in `[min, max]`. NaN is never in range.
    pub fn validate(&self, value: T) -> Result<T> {
        if value >= self.min && value <= self.max {
            Ok(value)
        } else {
            Err(WignerError::out_of_range(format!(
                "Slider '{}' value {} outside [{}, {}]",
                self.label, value, self.min, self.max
            )))
        }
    }
}

pub const SQUEEZE_R: Slider<f64> = Slider::new("r", 0.0, 2.0, 0.5, 0.0);
pub const SQUEEZE_THETA: Slider<f64> = Slider::new("theta (•π)", -2.0, 2.0, 0.1, 0.0);
pub const DISPLACE_RE: Slider<f64> = Slider::new("Re{β}", -5.0, 5.0, 0.2, 0.0);
pub const DISPLACE_IM: Slider<f64> = Slider::new("Im{β}", -5.0, 5.0, 0.2, 0.0);
pub const THERMAL_MEAN: Slider<f64> = Slider::new("Mean number", 0.0, 5.0, 0.5, 0.0);
pub const COHERENT_RE: Slider<f64> = Slider::new("Re{α}", -5.0, 5.0, 0.2, 0.0);
pub const COHERENT_IM: Slider<f64> = Slider::new("Im{α}", -5.0, 5.0, 0.2, 0.0);
pub const FOCK_N: Slider<i64> = Slider::new("n", 0, 5, 1, 1);

/// Entries of the state-kind selector, in display order.
pub const MENU: [&str; 4] = ["vacuum", "thermal", "coherent", "fock"];

/// `z = r (cos πθ + i sin πθ)` from the squeezing sliders.
pub fn squeeze_parameter(r: f64, theta_over_pi: f64) -> Complex64 {
    Complex64::from_polar(r, theta_over_pi * PI)
}

/// Raw values of every widget in one state menu, plus the weight this state
/// carries when it is combined with others.
///
/// Only the sliders visible for the current selection are validated; the rest
/// keep whatever value they hold, as hidden widgets do.
#[derive(Debug, Clone, PartialEq)]
pub struct StateControls {
    pub selection: String,
    pub mean_photons: f64,
    pub alpha_re: f64,
    pub alpha_im: f64,
    pub fock_n: i64,
    pub squeeze_r: f64,
    pub squeeze_theta: f64,
    pub displace_re: f64,
    pub displace_im: f64,
    pub weight: f64,
}

impl Default for StateControls {
    fn default() -> Self {
        Self {
            selection: MENU[0].to_string(),
            mean_photons: THERMAL_MEAN.default,
            alpha_re: COHERENT_RE.default,
            alpha_im: COHERENT_IM.default,
            fock_n: FOCK_N.default,
            squeeze_r: SQUEEZE_R.default,
            squeeze_theta: SQUEEZE_THETA.default,
            displace_re: DISPLACE_RE.default,
            displace_im: DISPLACE_IM.default,
            weight: 1.0,
        }
    }
}

impl StateControls {
    /// Widgets at their defaults with `selection` chosen in the menu.
    pub fn new(selection: impl Into<String>) -> Self {
        Self { selection: selection.into(), ..Self::default() }
    }

    /// Validates the visible sliders and produces the state description.
    ///
    /// # Errors
    /// * `InvalidSelection` if the selection is not one of [`MENU`].
    /// * `OutOfRange` if a visible slider holds a value outside its bounds.
    pub fn to_spec(&self) -> Result<StateSpec> {
        let kind = match self.selection.as_str() {
            "vacuum" => StateKind::Vacuum,
            "thermal" => StateKind::Thermal { mean_photons: THERMAL_MEAN.validate(self.mean_photons)? },
            "coherent" => StateKind::Coherent {
                alpha: Complex64::new(COHERENT_RE.validate(self.alpha_re)?, COHERENT_IM.validate(self.alpha_im)?),
            },
            "fock" => {
                let n = FOCK_N.validate(self.fock_n)?;
                // validated non-negative above
                StateKind::Fock { n: n as usize }
            }
            other => {
                return Err(WignerError::invalid_selection(format!(
                    "Unknown state kind '{}', expected one of {:?}",
                    other, MENU
                )));
            }
        };
        let squeeze = squeeze_parameter(
            SQUEEZE_R.validate(self.squeeze_r)?,
            SQUEEZE_THETA.validate(self.squeeze_theta)?,
        );
        let displace = Complex64::new(DISPLACE_RE.validate(self.displace_re)?, DISPLACE_IM.validate(self.displace_im)?);
        Ok(StateSpec::new(kind).with_squeeze(squeeze).with_displacement(displace))
    }
}

fn parse_number<T: FromStr>(key: &str, raw: &str) -> Result<T> {
    raw.trim()
        .parse()
        .map_err(|_| WignerError::invalid_selection(format!("Value '{}' for '{}' is not a number", raw, key)))
}

/// Parses `kind[:key=value,...]`, e.g. `coherent:re=2,im=0,r=0.5`.
///
/// Keys: `mean`, `re`, `im`, `n`, `r`, `theta`, `beta_re`, `beta_im`, `w`.
/// Range checks happen later in [`StateControls::to_spec`].
impl FromStr for StateControls {
    type Err = WignerError;

    fn from_str(s: &str) -> Result<Self> {
        let (selection, params) = match s.split_once(':') {
            Some((kind, rest)) => (kind, rest),
            None => (s, ""),
        };
        let mut controls = StateControls::new(selection.trim().to_ascii_lowercase());

        for pair in params.split(',').filter(|p| !p.trim().is_empty()) {
            let Some((key, value)) = pair.split_once('=') else {
                return Err(WignerError::invalid_selection(format!("Expected key=value, got '{}'", pair)));
            };
            let key = key.trim();
            match key {
                "mean" => controls.mean_photons = parse_number(key, value)?,
                "re" => controls.alpha_re = parse_number(key, value)?,
                "im" => controls.alpha_im = parse_number(key, value)?,
                "n" => controls.fock_n = parse_number(key, value)?,
                "r" => controls.squeeze_r = parse_number(key, value)?,
                "theta" => controls.squeeze_theta = parse_number(key, value)?,
                "beta_re" => controls.displace_re = parse_number(key, value)?,
                "beta_im" => controls.displace_im = parse_number(key, value)?,
                "w" => controls.weight = parse_number(key, value)?,
                other => {
                    return Err(WignerError::invalid_selection(format!("Unknown control '{}'", other)));
                }
            }
        }
        Ok(controls)
    }
}

impl fmt::Display for StateControls {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.selection)?;
        match self.selection.as_str() {
            "thermal" => write!(f, ":mean={}", self.mean_photons)?,
            "coherent" => write!(f, ":re={},im={}", self.alpha_re, self.alpha_im)?,
            "fock" => write!(f, ":n={}", self.fock_n)?,
            _ => write!(f, ":")?,
        }
        write!(
            f,
            ",r={},theta={},beta_re={},beta_im={},w={}",
            self.squeeze_r, self.squeeze_theta, self.displace_re, self.displace_im, self.weight
        )
    }
}
