//! Measures a thermistor at each configured temperature and plots the I-V
//! curves next to the resulting R(T) relation.
//!
//! ```text
//! cargo run -p ohmic-demos --example plot_rt [bench.toml]
//! ```

use std::error::Error;

use ohmic_demos::BenchConfig;
use ohmic_plot::{CurveRecorder, RtFigure};
use ohmic_sim::{MeasuringCircuit, Thermistor};
use ohmic_sweep::{SweepExecutor, sweep_temperatures};

fn main() -> Result<(), Box<dyn Error>> {
    ohmic_demos::init_tracing();
    let config = BenchConfig::from_args()?;

    let circuit = MeasuringCircuit::new(Thermistor::default(), config.noise);
    let mut chamber = circuit.chamber();
    let mut executor =
        SweepExecutor::new(circuit.generator(), circuit.voltmeter(), circuit.ammeter());

    let mut recorder = CurveRecorder::new();
    let curve = sweep_temperatures(
        &mut chamber,
        &mut executor,
        &config.temperatures.values(),
        &config.voltages.values(),
        &mut recorder,
    )?;

    for point in &curve {
        println!("T = {:>6.1} K  R = {:>8.2} Ohm", point.condition, point.parameter());
    }

    let iv = recorder.iv_figure(
        executor.stimulus_uncertainty(),
        executor.response_uncertainty(),
    )?;
    let rt = RtFigure::new(&curve)?;

    ohmic_plot::show("Thermistor characterization", vec![iv.into(), rt.into()])?;
    Ok(())
}
