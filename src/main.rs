// src/main.rs

use anyhow::{Context, Result};
use clap::{Parser, ValueHint};
use std::fs;
use std::io::IsTerminal;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::{EnvFilter, Registry, layer::SubscriberExt, util::SubscriberInitExt};
use wigner_plotter::{CombinationMode, PlotRequest, PlotterConfig, Session, StateControls};

/// Build a quantum optical state and plot its Wigner function.
///
/// A STATE is `kind[:key=value,...]` where kind is one of vacuum, thermal,
/// coherent or fock. Keys: mean (thermal), re/im (coherent), n (fock),
/// r/theta for squeezing with theta in units of pi, beta_re/beta_im for the
/// displacement, and w for the combination weight.
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Cli {
    /// First state, e.g. `coherent:re=2,r=0.5`
    #[arg(default_value = "vacuum")]
    state: StateControls,

    /// How added states are combined with the first: superposition or mixture
    #[arg(long, default_value = "mixture")]
    mode: CombinationMode,

    /// Another state to combine, may be repeated
    #[arg(long = "add", value_name = "STATE")]
    additions: Vec<StateControls>,

    /// Fock levels kept in the truncated Hilbert space
    #[arg(long, default_value_t = wigner_plotter::core::DEFAULT_DIMENSION)]
    dimension: usize,

    /// Samples per phase-space axis
    #[arg(long, default_value_t = 200)]
    grid_points: usize,

    /// Where the SVG figure is written
    #[arg(long, default_value = "wigner.svg", value_hint = ValueHint::FilePath)]
    output: PathBuf,
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_target(true)
        .with_ansi(std::io::stderr().is_terminal())
        .with_writer(std::io::stderr);
    // A subscriber may already be installed by an embedding process
    let _ = Registry::default().with(filter).with(fmt_layer).try_init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing();

    let config = PlotterConfig::default()
        .with_dimension(cli.dimension)
        .with_grid_points(cli.grid_points);
    let request = PlotRequest {
        base: cli.state,
        mode: cli.mode,
        additions: cli.additions,
    };

    let figure = Session::new(config)
        .render(&request)
        .context("Failed to build and render the requested state")?;

    fs::write(&cli.output, figure.svg())
        .with_context(|| format!("Failed to write figure to {}", cli.output.display()))?;

    let (x, y, w) = figure.grid().peak();
    info!(output = %cli.output.display(), peak.re = x, peak.im = y, peak.w = w, "figure written");
    println!("{}", figure.grid());
    Ok(())
}
