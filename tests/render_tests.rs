// tests/render_tests.rs

use wigner_plotter::render::PAGE_TITLE;
use wigner_plotter::{
    CombinationMode, PlotRequest, PlotterConfig, Result, Session, StateControls, WignerError,
};

fn small_session() -> Session {
    Session::new(
        PlotterConfig::default()
            .with_dimension(20)
            .with_grid_points(31)
            .with_contour_levels(20)
            .with_surface_stride(3)
            .with_figure_size(800, 400),
    )
}

#[test]
fn test_figure_carries_only_the_page_title() -> Result<()> {
    let request: PlotRequest = PlotRequest::new("coherent:re=2".parse()?);
    let figure = small_session().render(&request)?;
    let svg = figure.svg();
    assert!(svg.contains("<svg"));
    assert!(svg.contains("width=\"800\""));
    assert_eq!(svg.matches(PAGE_TITLE).count(), 1);
    assert!(!svg.contains("Mixture") && !svg.contains("Superposition"));
    Ok(())
}

#[test]
fn test_figure_grid_matches_configuration() -> Result<()> {
    let request = PlotRequest::new(StateControls::new("fock"))
        .with_mode(CombinationMode::Superposition)
        .with_addition(StateControls::new("vacuum"));
    let figure = small_session().render(&request)?;
    assert_eq!(figure.grid().points(), 31);
    assert_eq!(figure.grid().max_amplitude(), 5.0);
    Ok(())
}

#[test]
fn test_render_errors_end_the_cycle() {
    let request = PlotRequest::new(StateControls { fock_n: 9, ..StateControls::new("fock") });
    assert!(matches!(small_session().render(&request), Err(WignerError::OutOfRange { .. })));
}
