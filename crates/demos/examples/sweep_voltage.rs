//! Sweeps a 100 Ω resistor across the configured voltages and prints the
//! readings.
//!
//! ```text
//! cargo run -p ohmic-demos --example sweep_voltage [bench.toml]
//! ```

use std::error::Error;

use ohmic_demos::BenchConfig;
use ohmic_sim::{MeasuringCircuit, Resistor};
use ohmic_sweep::SweepExecutor;

fn main() -> Result<(), Box<dyn Error>> {
    ohmic_demos::init_tracing();
    let config = BenchConfig::from_args()?;

    let circuit = MeasuringCircuit::new(Resistor::default(), config.noise);
    let mut executor =
        SweepExecutor::new(circuit.generator(), circuit.voltmeter(), circuit.ammeter());

    let sweep = executor.run_sweep_unobserved(&config.voltages.values())?;

    println!("{:>10}  {:>12}  {:>12}", "setpoint", "voltage (V)", "current (A)");
    for (setpoint, reading) in sweep.setpoints().iter().zip(sweep.readings()) {
        println!(
            "{setpoint:>10.3}  {:>12.4}  {:>12.6}",
            reading.stimulus, reading.response
        );
    }

    Ok(())
}
