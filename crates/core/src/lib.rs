//! Core traits and types for the Ohmic measurement toolkit.
//!
//! This crate defines the shared abstractions that the sweep, fit and plot
//! crates build on:
//!
//! - [`StimulusActuator`], [`Sensor`], [`AmbientActuator`] — the contracts an
//!   instrument adapter implements, real or simulated
//! - [`Reading`] and [`SweepResult`] — paired sensor readings in setpoint order
//! - [`LinearRange`] — an evenly spaced, validated range of setpoints
//! - [`Observer`] — receives pipeline events as they happen

mod instrument;
mod observer;
mod range;
mod reading;

pub use instrument::{AmbientActuator, Sensor, StimulusActuator};
pub use observer::Observer;
pub use range::{LinearRange, RangeError};
pub use reading::{Reading, SweepResult};
