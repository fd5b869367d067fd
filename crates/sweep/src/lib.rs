//! Measurement sweeps for Ohmic.
//!
//! - [`executor`] — drives a stimulus actuator across setpoints and records
//!   paired sensor readings
//! - [`aggregate`] — repeats sweep and fit at each ambient condition to build
//!   a [`TemperatureCurve`]
//!
//! Both run synchronously: every actuator command and sensor read blocks
//! until it completes, and nothing is retried.

pub mod aggregate;
pub mod executor;

pub use aggregate::{CurvePoint, TemperatureCurve, sweep_temperatures};
pub use executor::{SweepExecutor, run_sweep};
