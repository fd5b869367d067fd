//! Resistance-vs-temperature curves from repeated sweeps.
//!
//! [`sweep_temperatures`] visits each ambient condition in order: it
//! commands the ambient actuator, runs one sweep with the shared setpoints,
//! fits the sweep and appends `(condition, slope)` to a [`TemperatureCurve`].
//!
//! No settling wait happens here. An [`AmbientActuator`] that controls a
//! slow physical quantity should block in `set` until the condition holds.
//!
//! # Failure
//!
//! The first failure aborts the remaining conditions. The returned
//! [`Error`] carries the curve completed up to that point, so the caller can
//! keep or discard it.

mod curve;
mod error;


pub use curve::{CurvePoint, TemperatureCurve};
pub use error::{Cause, Error};

use ohmic_core::{AmbientActuator, Observer, Sensor, StimulusActuator, SweepResult};
use ohmic_fit::{LinearFit, linear};
use tracing::{info, warn};

use crate::executor::SweepExecutor;

/// Control actions supported by the temperature sweep.
///
/// There are none: every condition is visited unless one fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {}

/// Event emitted after each condition is swept and fitted.
#[derive(Debug, Clone, Copy)]
pub struct Event<'a> {
    /// Position of the condition in the visitation order (0-based).
    pub index: usize,
    /// The ambient condition, e.g. a temperature in kelvin.
    pub condition: f64,
    /// The sweep recorded at this condition.
    pub sweep: &'a SweepResult,
    /// The fit of that sweep.
    pub fit: &'a LinearFit,
}

/// Sweeps `setpoints` at each of `conditions` and collects the fitted slopes.
///
/// The observer receives an [`Event`] for each completed condition, including
/// the full sweep, which is what a per-condition I-V plot needs.
///
/// # Errors
///
/// Returns an [`Error`] holding the partial curve if the ambient actuator
/// rejects a condition, a sweep fails, or a fit fails.
pub fn sweep_temperatures<C, A, V, I, Obs>(
    ambient: &mut C,
    executor: &mut SweepExecutor<A, V, I>,
    conditions: &[f64],
    setpoints: &[f64],
    mut observer: Obs,
) -> Result<TemperatureCurve, Error>
where
    C: AmbientActuator,
    A: StimulusActuator,
    V: Sensor,
    I: Sensor,
    Obs: for<'a> Observer<Event<'a>, Action>,
{
    let mut curve = TemperatureCurve::with_capacity(conditions.len());

    for (index, &condition) in conditions.iter().enumerate() {
        let (sweep, fit) = match measure_condition(ambient, executor, condition, setpoints) {
            Ok(measured) => measured,
            Err(cause) => {
                warn!(index, condition, error = %cause, "temperature sweep aborted");
                return Err(Error {
                    index,
                    condition,
                    partial: curve,
                    cause,
                });
            }
        };

        info!(
            index,
            condition,
            slope = fit.slope,
            slope_stderr = fit.slope_stderr,
            "condition fitted"
        );

        let event = Event {
            index,
            condition,
            sweep: &sweep,
            fit: &fit,
        };
        if let Some(action) = observer.observe(&event) {
            match action {}
        }

        curve.push(CurvePoint { condition, fit });
    }

    Ok(curve)
}

/// Sweeps `setpoints` at each of `conditions` without observation.
///
/// # Errors
///
/// Returns an [`Error`] holding the partial curve if the ambient actuator
/// rejects a condition, a sweep fails, or a fit fails.
pub fn sweep_temperatures_unobserved<C, A, V, I>(
    ambient: &mut C,
    executor: &mut SweepExecutor<A, V, I>,
    conditions: &[f64],
    setpoints: &[f64],
) -> Result<TemperatureCurve, Error>
where
    C: AmbientActuator,
    A: StimulusActuator,
    V: Sensor,
    I: Sensor,
{
    sweep_temperatures(ambient, executor, conditions, setpoints, ())
}

/// Sets one condition, sweeps, and fits.
fn measure_condition<C, A, V, I>(
    ambient: &mut C,
    executor: &mut SweepExecutor<A, V, I>,
    condition: f64,
    setpoints: &[f64],
) -> Result<(SweepResult, LinearFit), Cause>
where
    C: AmbientActuator,
    A: StimulusActuator,
    V: Sensor,
    I: Sensor,
{
    ambient.set(condition).map_err(Cause::actuation)?;
    let sweep = executor.run_sweep_unobserved(setpoints)?;
    let fit = linear::fit(&sweep)?;
    Ok((sweep, fit))
}
