use std::{cell::RefCell, rc::Rc};

use ohmic_core::{AmbientActuator, Sensor, StimulusActuator};
use tracing::debug;
use uom::si::{
    electric_current::ampere,
    electric_potential::volt,
    f64::{ElectricCurrent, ElectricPotential, ThermodynamicTemperature},
    thermodynamic_temperature::kelvin,
};

use crate::{Component, Error, Instrument, NoiseConfig, noise::NoiseSource};

/// Output range of the generator, in volts (symmetric).
const GENERATOR_LIMIT: f64 = 10.0;

/// Reachable chamber temperatures, in kelvin.
const CHAMBER_RANGE: (f64, f64) = (200.0, 400.0);

/// Initial chamber temperature, in kelvin.
const ROOM_TEMPERATURE: f64 = 298.15;

#[derive(Debug)]
struct State<C> {
    component: C,
    voltage: ElectricPotential,
    temperature: ThermodynamicTemperature,
    config: NoiseConfig,
    noise: NoiseSource,
    voltmeter_reads: usize,
    ammeter_reads: usize,
    faults: Vec<(Instrument, usize)>,
}

impl<C> State<C> {
    /// Counts a meter read and fails if a fault was scheduled for it.
    fn count_read(&mut self, instrument: Instrument) -> Result<(), Error> {
        let reads = match instrument {
            Instrument::Voltmeter => &mut self.voltmeter_reads,
            Instrument::Ammeter => &mut self.ammeter_reads,
            Instrument::Generator | Instrument::Chamber => return Ok(()),
        };
        let read = *reads;
        *reads += 1;

        if self.faults.contains(&(instrument, read)) {
            return Err(Error::TransientFault { instrument });
        }
        Ok(())
    }
}

/// A component wired to a source, two meters and a temperature chamber.
///
/// The circuit itself only hands out instrument handles; all state changes
/// go through them. Cloning the circuit clones the handle, not the state.
#[derive(Debug)]
pub struct MeasuringCircuit<C> {
    state: Rc<RefCell<State<C>>>,
}

impl<C> Clone for MeasuringCircuit<C> {
    fn clone(&self) -> Self {
        Self {
            state: Rc::clone(&self.state),
        }
    }
}

impl<C: Component> MeasuringCircuit<C> {
    /// Builds a circuit at 0 V and room temperature.
    pub fn new(component: C, config: NoiseConfig) -> Self {
        let state = State {
            component,
            voltage: ElectricPotential::new::<volt>(0.0),
            temperature: ThermodynamicTemperature::new::<kelvin>(ROOM_TEMPERATURE),
            config,
            noise: NoiseSource::new(config.seed),
            voltmeter_reads: 0,
            ammeter_reads: 0,
            faults: Vec::new(),
        };
        Self {
            state: Rc::new(RefCell::new(state)),
        }
    }

    /// Returns a handle to the voltage source.
    #[must_use]
    pub fn generator(&self) -> Generator<C> {
        Generator(self.clone())
    }

    /// Returns a handle to the voltmeter across the component.
    #[must_use]
    pub fn voltmeter(&self) -> Voltmeter<C> {
        Voltmeter(self.clone())
    }

    /// Returns a handle to the ammeter in series with the component.
    #[must_use]
    pub fn ammeter(&self) -> Ammeter<C> {
        Ammeter(self.clone())
    }

    /// Returns a handle to the temperature chamber around the circuit.
    #[must_use]
    pub fn chamber(&self) -> TemperatureChamber<C> {
        TemperatureChamber(self.clone())
    }

    /// Makes the `read`-th read (0-based) of a meter fail with a transient fault.
    ///
    /// Only the voltmeter and ammeter count reads; faults scheduled for other
    /// instruments never fire.
    pub fn schedule_fault(&self, instrument: Instrument, read: usize) {
        self.state.borrow_mut().faults.push((instrument, read));
    }

    /// The voltage last applied by the generator.
    #[must_use]
    pub fn applied_voltage(&self) -> ElectricPotential {
        self.state.borrow().voltage
    }

    /// The chamber temperature.
    #[must_use]
    pub fn temperature(&self) -> ThermodynamicTemperature {
        self.state.borrow().temperature
    }

    /// The noise-free current through the component.
    #[must_use]
    pub fn true_current(&self) -> ElectricCurrent {
        let state = self.state.borrow();
        state.voltage / state.component.resistance(state.temperature)
    }
}

/// Voltage source handle.
#[derive(Debug, Clone)]
pub struct Generator<C>(MeasuringCircuit<C>);

impl<C: Component> StimulusActuator for Generator<C> {
    type Error = Error;

    fn set(&mut self, value: f64) -> Result<(), Self::Error> {
        if !(-GENERATOR_LIMIT..=GENERATOR_LIMIT).contains(&value) {
            return Err(Error::OutOfRange {
                instrument: Instrument::Generator,
                value,
                min: -GENERATOR_LIMIT,
                max: GENERATOR_LIMIT,
            });
        }
        self.0.state.borrow_mut().voltage = ElectricPotential::new::<volt>(value);
        Ok(())
    }
}

/// Voltmeter handle, reading volts.
#[derive(Debug, Clone)]
pub struct Voltmeter<C>(MeasuringCircuit<C>);

impl<C: Component> Sensor for Voltmeter<C> {
    type Error = Error;

    fn read(&mut self) -> Result<f64, Self::Error> {
        let mut state = self.0.state.borrow_mut();
        state.count_read(Instrument::Voltmeter)?;

        let sigma = state.config.voltmeter_sigma;
        let truth = state.voltage.get::<volt>();
        Ok(truth + state.noise.sample(sigma))
    }

    fn uncertainty(&self) -> f64 {
        self.0.state.borrow().config.voltmeter_sigma
    }
}

/// Ammeter handle, reading amperes.
#[derive(Debug, Clone)]
pub struct Ammeter<C>(MeasuringCircuit<C>);

impl<C: Component> Sensor for Ammeter<C> {
    type Error = Error;

    fn read(&mut self) -> Result<f64, Self::Error> {
        let truth = self.0.true_current().get::<ampere>();

        let mut state = self.0.state.borrow_mut();
        state.count_read(Instrument::Ammeter)?;

        let sigma = state.config.ammeter_sigma;
        Ok(truth + state.noise.sample(sigma))
    }

    fn uncertainty(&self) -> f64 {
        self.0.state.borrow().config.ammeter_sigma
    }
}

/// Temperature chamber handle, taking kelvin.
///
/// The simulated chamber settles instantly.
#[derive(Debug, Clone)]
pub struct TemperatureChamber<C>(MeasuringCircuit<C>);

impl<C: Component> AmbientActuator for TemperatureChamber<C> {
    type Error = Error;

    fn set(&mut self, condition: f64) -> Result<(), Self::Error> {
        let (min, max) = CHAMBER_RANGE;
        if !(min..=max).contains(&condition) {
            return Err(Error::OutOfRange {
                instrument: Instrument::Chamber,
                value: condition,
                min,
                max,
            });
        }
        self.0.state.borrow_mut().temperature = ThermodynamicTemperature::new::<kelvin>(condition);
        debug!(temperature_k = condition, "chamber settled");
        Ok(())
    }
}
