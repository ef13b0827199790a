// src/composition/mod.rs

//! Folds a sequence of user-supplied states into one aggregate state.
//!
//! The "add another state?" decision is not polled here. The caller supplies
//! it: once as the initial `more` flag, then as the `more` flag carried by
//! each [`CombinationStep`]. Steps come from a [`StateProvider`], which any
//! iterator of `Result<CombinationStep>` already is.
//!
//! Both folds keep the raw weighted sum and renormalize it after every step,
//! so the result is `Σ wᵢψᵢ / ‖Σ wᵢψᵢ‖` (or the trace-normalized sum of
//! operators) no matter how many steps were taken.

use crate::core::{DensityOperator, Ket, QuantumState, Result, WignerError};
use std::fmt;
use std::str::FromStr;
use tracing::{debug, warn};

/// How successive states are combined with the accumulator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CombinationMode {
    /// Coherent sum of kets.
    Superposition,
    /// Incoherent sum of density operators.
    #[default]
    Mixture,
}

impl fmt::Display for CombinationMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CombinationMode::Superposition => write!(f, "Superposition"),
            CombinationMode::Mixture => write!(f, "Mixture"),
        }
    }
}

impl FromStr for CombinationMode {
    type Err = WignerError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "superposition" | "sup" => Ok(CombinationMode::Superposition),
            "mixture" | "mix" => Ok(CombinationMode::Mixture),
            other => Err(WignerError::invalid_selection(format!(
                "Unknown combination mode '{}', expected Superposition or Mixture",
                other
            ))),
        }
    }
}

/// One state offered to the combinator.
#[derive(Debug, Clone, PartialEq)]
pub struct CombinationStep {
    pub state: QuantumState,
    /// Amplitude weight (superposition) or probability weight (mixture).
    pub weight: f64,
    /// Whether the user asked for another state after this one.
    pub more: bool,
}

impl CombinationStep {
    /// A step with unit weight.
    pub fn new(state: QuantumState, more: bool) -> Self {
        Self { state, weight: 1.0, more }
    }

    pub fn with_weight(mut self, weight: f64) -> Self {
        self.weight = weight;
        self
    }

    /// Turns a list of states into steps, requesting continuation after every
    /// state except the last.
    pub fn sequence<I>(states: I) -> Vec<CombinationStep>
    where
        I: IntoIterator<Item = QuantumState>,
    {
        let mut steps: Vec<CombinationStep> = states.into_iter().map(|s| CombinationStep::new(s, true)).collect();
        if let Some(last) = steps.last_mut() {
            last.more = false;
        }
        steps
    }
}

/// Source of combination steps.
///
/// `None` means no further input is available; the combinator then stops
/// with what it has accumulated.
pub trait StateProvider {
    fn next_step(&mut self) -> Option<Result<CombinationStep>>;
}

impl<I> StateProvider for I
where
    I: Iterator<Item = Result<CombinationStep>>,
{
    fn next_step(&mut self) -> Option<Result<CombinationStep>> {
        self.next()
    }
}

fn check_dims(expected: usize, actual: usize) -> Result<()> {
    if expected != actual {
        return Err(WignerError::DimensionMismatch { expected, actual });
    }
    Ok(())
}

fn check_weight(weight: f64, mode: CombinationMode) -> Result<()> {
    let valid = match mode {
        CombinationMode::Superposition => weight.is_finite(),
        CombinationMode::Mixture => weight.is_finite() && weight >= 0.0,
    };
    if !valid {
        return Err(WignerError::out_of_range(format!("Invalid {} weight {}", mode, weight)));
    }
    Ok(())
}

/// Coherently adds kets supplied by `provider` to `acc`.
///
/// # Errors
/// * `TypeMismatch` if `acc` or any supplied state is an operator.
/// * `Normalization` if the running sum vanishes.
/// * `DimensionMismatch` if a supplied ket has a different truncation.
/// * Any error yielded by the provider.
pub fn combine_superposition<P>(acc: QuantumState, more: bool, provider: &mut P) -> Result<Ket>
where
    P: StateProvider + ?Sized,
{
    let QuantumState::Ket(acc) = acc else {
        return Err(WignerError::type_mismatch(
            "Superposition is only defined for pure states, accumulator is an operator",
        ));
    };
    let dim = acc.dim();
    let mut raw = acc.amplitudes().clone();
    let mut current = Ket::from_vector(raw.clone()).unit()?;
    let mut more = more;
    let mut depth = 0usize;

    while more {
        let Some(step) = provider.next_step() else {
            warn!(depth, "state provider exhausted before the superposition was closed");
            break;
        };
        let step = step?;
        let QuantumState::Ket(ket) = step.state else {
            return Err(WignerError::type_mismatch(format!(
                "Superposition step {} supplied an operator, only kets can be superposed",
                depth + 1
            )));
        };
        check_dims(dim, ket.dim())?;
        check_weight(step.weight, CombinationMode::Superposition)?;

        raw += ket.scaled(step.weight);
        current = Ket::from_vector(raw.clone()).unit()?;
        depth += 1;
        debug!(depth, weight = step.weight, more = step.more, "superposed state");
        more = step.more;
    }

    Ok(current)
}

/// Incoherently mixes states supplied by `provider` into `acc`.
///
/// The result is always operator-typed: a ket accumulator is coerced even
/// when no step is taken, and the final trace renormalization runs at depth
/// zero as well.
///
/// # Errors
/// * `OutOfRange` for a negative or non-finite weight.
/// * `Normalization` if the total weight is zero.
/// * `DimensionMismatch` if a supplied state has a different truncation.
/// * Any error yielded by the provider.
pub fn combine_mixture<P>(acc: QuantumState, more: bool, provider: &mut P) -> Result<DensityOperator>
where
    P: StateProvider + ?Sized,
{
    let acc = acc.into_operator();
    let dim = acc.dim();
    let mut raw = acc.matrix().clone();
    let mut more = more;
    let mut depth = 0usize;

    while more {
        let Some(step) = provider.next_step() else {
            warn!(depth, "state provider exhausted before the mixture was closed");
            break;
        };
        let step = step?;
        check_dims(dim, step.state.dim())?;
        check_weight(step.weight, CombinationMode::Mixture)?;

        raw += step.state.into_operator().scaled(step.weight);
        // Fail on a vanishing total as soon as it happens
        DensityOperator::from_square(raw.clone()).unit()?;
        depth += 1;
        debug!(depth, weight = step.weight, more = step.more, "mixed state");
        more = step.more;
    }

    DensityOperator::from_square(raw).unit()
}

/// Dispatches to the fold selected by `mode`.
pub fn compose<P>(base: QuantumState, mode: CombinationMode, more: bool, provider: &mut P) -> Result<QuantumState>
where
    P: StateProvider + ?Sized,
{
    match mode {
        CombinationMode::Superposition => combine_superposition(base, more, provider).map(QuantumState::Ket),
        CombinationMode::Mixture => combine_mixture(base, more, provider).map(QuantumState::Operator),
    }
}
