// src/render/mod.rs

//! Draws the Wigner function of a state as a filled contour plot and a 3D
//! surface, side by side in one SVG figure.
//!
//! Both panels are drawn from the same [`WignerGrid`], over the same extents
//! and with the same [`ColorScale`], so they can be read against each other.
//! Subplots carry no titles; the figure has a single page-level title.

mod colormap;

pub use colormap::ColorScale;

use crate::core::{PlotterConfig, QuantumState, Result, WignerError};
use crate::phase_space::{PhaseSpaceGrid, WignerGrid, wigner};
use plotters::coord::Shift;
use plotters::prelude::*;
use std::fmt;
use tracing::info;

/// Page-level title of the figure.
pub const PAGE_TITLE: &str = "Wigner Function Plotter";

const AXIS_RE: &str = "Re(α)";
const AXIS_IM: &str = "Im(α)";

fn plot_error<E: fmt::Display>(err: E) -> WignerError {
    WignerError::Render { message: err.to_string() }
}

/// A rendered figure: the sampled data and its SVG drawing.
#[derive(Debug, Clone, PartialEq)]
pub struct WignerFigure {
    grid: WignerGrid,
    svg: String,
}

impl WignerFigure {
    /// The data both panels were drawn from.
    pub fn grid(&self) -> &WignerGrid {
        &self.grid
    }

    /// SVG document of the combined figure.
    pub fn svg(&self) -> &str {
        &self.svg
    }

    pub fn into_svg(self) -> String {
        self.svg
    }
}

/// Renders states with a fixed configuration.
#[derive(Debug, Clone, Default)]
pub struct Renderer {
    config: PlotterConfig,
}

impl Renderer {
    pub fn new(config: PlotterConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &PlotterConfig {
        &self.config
    }

    /// Evaluates `W` once and draws both panels from it.
    ///
    /// # Errors
    /// * `OutOfRange` for an invalid configuration.
    /// * `Render` if the plotting backend fails.
    pub fn render(&self, state: &QuantumState) -> Result<WignerFigure> {
        self.config.validate()?;
        let grid = PhaseSpaceGrid::new(self.config.max_amplitude, self.config.grid_points)?;
        let values = wigner(state, &grid)?;
        let svg = self.draw(&values)?;
        info!(
            points = values.points(),
            w_min = values.min(),
            w_max = values.max(),
            bytes = svg.len(),
            "rendered Wigner figure"
        );
        Ok(WignerFigure { grid: values, svg })
    }

    fn draw(&self, values: &WignerGrid) -> Result<String> {
        let scale = ColorScale::symmetric(values.abs_max());
        let mut svg = String::new();
        {
            let root = SVGBackend::with_string(&mut svg, self.config.figure_size).into_drawing_area();
            root.fill(&WHITE).map_err(plot_error)?;
            let page = root.titled(PAGE_TITLE, ("sans-serif", 28.0)).map_err(plot_error)?;
            let panels = page.split_evenly((1, 2));
            draw_contour(&panels[0], values, &scale, self.config.contour_levels)?;
            draw_surface(&panels[1], values, &scale, self.config.surface_stride)?;
            root.present().map_err(plot_error)?;
        }
        Ok(svg)
    }
}

/// Renders `state` over `[-max_amplitude, max_amplitude]²` with the default
/// truncation, resolution and figure size.
pub fn render(state: &QuantumState, max_amplitude: f64) -> Result<WignerFigure> {
    Renderer::new(PlotterConfig::default().with_max_amplitude(max_amplitude)).render(state)
}

fn draw_contour<DB: DrawingBackend>(
    area: &DrawingArea<DB, Shift>,
    values: &WignerGrid,
    scale: &ColorScale,
    levels: usize,
) -> Result<()> {
    let r = values.max_amplitude();
    let mut chart = ChartBuilder::on(area)
        .margin(20)
        .x_label_area_size(40)
        .y_label_area_size(50)
        .build_cartesian_2d(-r..r, -r..r)
        .map_err(plot_error)?;

    chart
        .configure_mesh()
        .disable_mesh()
        .x_desc(AXIS_RE)
        .y_desc(AXIS_IM)
        .draw()
        .map_err(plot_error)?;

    let half = values.step() / 2.0;
    chart
        .draw_series(values.cells().map(|(x, y, w)| {
            let color = scale.color(scale.quantize(w, levels));
            Rectangle::new([(x - half, y - half), (x + half, y + half)], color.filled())
        }))
        .map_err(plot_error)?;
    Ok(())
}

fn draw_surface<DB: DrawingBackend>(
    area: &DrawingArea<DB, Shift>,
    values: &WignerGrid,
    scale: &ColorScale,
    stride: usize,
) -> Result<()> {
    let r = values.max_amplitude();
    let limit = scale.limit();
    let mut chart = ChartBuilder::on(area)
        .margin(20)
        .build_cartesian_3d(-r..r, -limit..limit, -r..r)
        .map_err(plot_error)?;

    chart.with_projection(|mut pb| {
        pb.yaw = 0.5;
        pb.pitch = 0.35;
        pb.scale = 0.85;
        pb.into_matrix()
    });

    chart
        .configure_axes()
        .light_grid_style(BLACK.mix(0.15))
        .max_light_lines(3)
        .draw()
        .map_err(plot_error)?;

    // Height is W; the horizontal plane is (Re α, Im α)
    let samples: Vec<f64> = values.axis().iter().step_by(stride.max(1)).copied().collect();
    let shade = |w: &f64| scale.color(*w).filled();
    chart
        .draw_series(
            SurfaceSeries::xoz(samples.iter().copied(), samples.iter().copied(), |x, y| values.value_near(x, y))
                .style_func(&shade),
        )
        .map_err(plot_error)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::operations::basis;

    fn small() -> Renderer {
        Renderer::new(
            PlotterConfig::default()
                .with_dimension(6)
                .with_grid_points(21)
                .with_contour_levels(10)
                .with_surface_stride(2)
                .with_figure_size(600, 300),
        )
    }

    #[test]
    fn figure_has_one_page_title_and_no_panel_titles() -> Result<()> {
        let state = QuantumState::from(basis(6, 1)?);
        let figure = small().render(&state)?;
        assert!(figure.svg().contains("<svg"));
        assert_eq!(figure.svg().matches(PAGE_TITLE).count(), 1);
        assert!(figure.svg().contains(AXIS_RE));
        assert_eq!(figure.grid().points(), 21);
        Ok(())
    }

    #[test]
    fn invalid_configuration_is_reported_before_drawing() -> Result<()> {
        let renderer = Renderer::new(PlotterConfig::default().with_grid_points(1));
        let state = QuantumState::from(basis(4, 0)?);
        assert!(matches!(renderer.render(&state), Err(WignerError::OutOfRange { .. })));
        Ok(())
    }
}
