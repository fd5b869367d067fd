//! Shared bench setup for the end-to-end tests.

use ohmic_sim::{
    Ammeter, Component, Generator, MeasuringCircuit, NoiseConfig, TemperatureChamber, Voltmeter,
};
use ohmic_sweep::SweepExecutor;

/// Executor driving the simulated generator and meters.
pub type SimExecutor<C> = SweepExecutor<Generator<C>, Voltmeter<C>, Ammeter<C>>;

/// A simulated circuit with its chamber and a ready executor.
pub struct Bench<C> {
    pub circuit: MeasuringCircuit<C>,
    pub chamber: TemperatureChamber<C>,
    pub executor: SimExecutor<C>,
}

impl<C: Component> Bench<C> {
    pub fn new(component: C, noise: NoiseConfig) -> Self {
        let circuit = MeasuringCircuit::new(component, noise);
        let chamber = circuit.chamber();
        let executor =
            SweepExecutor::new(circuit.generator(), circuit.voltmeter(), circuit.ammeter());
        Self {
            circuit,
            chamber,
            executor,
        }
    }
}

/// The integer voltages from −5 V to 5 V.
pub fn standard_voltages() -> Vec<f64> {
    (-5..=5).map(f64::from).collect()
}

/// 270 K to 295 K in 5 K steps.
pub fn standard_temperatures() -> Vec<f64> {
    (0..6).map(|i| 270.0 + 5.0 * f64::from(i)).collect()
}
