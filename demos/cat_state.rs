//! Compares the Wigner function of a Schrödinger cat superposition with the
//! mixture of the same two coherent states, and writes both figures.

use wigner_plotter::{
    CombinationMode, PlotRequest, PlotterConfig, Session, StateControls, WignerError,
};

fn coherent(re: f64) -> StateControls {
    StateControls { alpha_re: re, ..StateControls::new("coherent") }
}

fn main() -> Result<(), WignerError> {
    println!("--- wigner_plotter Example: Cat State vs Mixture ---");

    let session = Session::new(PlotterConfig::default().with_dimension(30).with_grid_points(121));

    for mode in [CombinationMode::Superposition, CombinationMode::Mixture] {
        // |2⟩ combined with |-2⟩
        let request = PlotRequest::new(coherent(2.0)).with_mode(mode).with_addition(coherent(-2.0));
        let figure = session.render(&request)?;

        println!("\n{}:", mode);
        println!("{}", figure.grid());
        if figure.grid().min() < 0.0 {
            println!("  Negative regions present: the state is non-classical.");
        }

        let path = format!("cat_{}.svg", mode.to_string().to_lowercase());
        match std::fs::write(&path, figure.svg()) {
            Ok(()) => println!("  Written to {}", path),
            Err(e) => eprintln!("  Could not write {}: {}", path, e),
        }
    }
    Ok(())
}
