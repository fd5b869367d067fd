//! Measures a 100 Ω resistor, fits its I-V curve and plots the result with
//! the fitted line and its uncertainty band.
//!
//! ```text
//! cargo run -p ohmic-demos --example plot_iv [bench.toml]
//! ```

use std::error::Error;

use ohmic_demos::BenchConfig;
use ohmic_fit::format;
use ohmic_plot::IvFigure;
use ohmic_sim::{MeasuringCircuit, Resistor};
use ohmic_sweep::SweepExecutor;
use tracing::info;

fn main() -> Result<(), Box<dyn Error>> {
    ohmic_demos::init_tracing();
    let config = BenchConfig::from_args()?;

    let circuit = MeasuringCircuit::new(Resistor::default(), config.noise);
    let mut executor =
        SweepExecutor::new(circuit.generator(), circuit.voltmeter(), circuit.ammeter());

    let sweep = executor.run_sweep_unobserved(&config.voltages.values())?;
    let fit = ohmic_fit::fit(&sweep)?;
    let resistance = format(fit.slope, fit.slope_stderr)?;
    info!(%resistance, intercept = fit.intercept, "resistor fitted");

    let figure = IvFigure::with_fit(
        &sweep,
        &fit,
        executor.stimulus_uncertainty(),
        executor.response_uncertainty(),
    )?;

    ohmic_plot::show("I-V curve", vec![figure.into()])?;
    Ok(())
}
