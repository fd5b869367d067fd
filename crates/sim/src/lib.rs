//! A simulated measuring bench for Ohmic.
//!
//! The bench wires a two-terminal [`Component`] to a voltage source, a
//! voltmeter across it and an ammeter in series, all inside a temperature
//! chamber. Each instrument is a handle implementing the matching
//! `ohmic-core` trait, so the simulator can stand in for real hardware:
//!
//! - [`Generator`] — [`StimulusActuator`](ohmic_core::StimulusActuator)
//! - [`Voltmeter`], [`Ammeter`] — [`Sensor`](ohmic_core::Sensor)
//! - [`TemperatureChamber`] — [`AmbientActuator`](ohmic_core::AmbientActuator)
//!
//! Handles share one circuit through `Rc<RefCell<_>>`, so a bench is
//! single-threaded by construction.
//!
//! # Example
//!
//! ```
//! use ohmic_core::{Sensor, StimulusActuator};
//! use ohmic_sim::{MeasuringCircuit, NoiseConfig, Resistor};
//!
//! let circuit = MeasuringCircuit::new(Resistor::default(), NoiseConfig::noiseless());
//! let (mut generator, mut voltmeter, mut ammeter) =
//!     (circuit.generator(), circuit.voltmeter(), circuit.ammeter());
//!
//! generator.set(5.0).unwrap();
//! assert_eq!(voltmeter.read().unwrap(), 5.0);
//! assert!((ammeter.read().unwrap() - 0.05).abs() < 1e-12);
//! ```

mod circuit;
mod component;
mod error;
mod noise;

pub use circuit::{Ammeter, Generator, MeasuringCircuit, TemperatureChamber, Voltmeter};
pub use component::{Component, Resistor, Thermistor};
pub use error::{Error, Instrument};
pub use noise::NoiseConfig;
