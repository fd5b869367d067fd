//! Stimulus sweeps with paired sensor readings.
//!
//! A [`SweepExecutor`] owns (or borrows, through `&mut`) one stimulus
//! actuator and two sensors. For each setpoint, in order, it commands the
//! actuator and then reads the stimulus sensor followed by the response
//! sensor. The returned [`SweepResult`] has exactly one [`Reading`] per
//! setpoint.
//!
//! # Failure
//!
//! Each setpoint is commanded and read exactly once. The first actuator
//! rejection or sensor fault aborts the sweep and the readings gathered so
//! far are dropped; there is no partial result.
//!
//! # Observer Events
//!
//! The executor emits one [`Event`] per recorded reading. Observers can log
//! or plot readings as they arrive, but [`Action`] has no variants, so an
//! observer cannot stop or alter a sweep.

mod error;

pub use error::{Error, SensorRole};

use ohmic_core::{Observer, Reading, Sensor, StimulusActuator, SweepResult};
use tracing::{debug, info, warn};

/// Control actions supported by the sweep executor.
///
/// There are none: sweeps always visit every setpoint or fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {}

/// Event emitted after each reading.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Event {
    /// Position of the setpoint in the sweep (0-based).
    pub index: usize,
    /// The commanded setpoint.
    pub setpoint: f64,
    /// The reading taken at this setpoint.
    pub reading: Reading,
}

/// Drives a stimulus actuator and records readings from two sensors.
///
/// The stimulus sensor reads back the applied stimulus (a voltmeter for a
/// voltage sweep); the response sensor reads the component's response (an
/// ammeter).
#[derive(Debug)]
pub struct SweepExecutor<A, V, I> {
    actuator: A,
    stimulus_sensor: V,
    response_sensor: I,
}

impl<A, V, I> SweepExecutor<A, V, I>
where
    A: StimulusActuator,
    V: Sensor,
    I: Sensor,
{
    /// Creates an executor from its instrument handles.
    pub fn new(actuator: A, stimulus_sensor: V, response_sensor: I) -> Self {
        Self {
            actuator,
            stimulus_sensor,
            response_sensor,
        }
    }

    /// Runs one sweep over `setpoints`, in order.
    ///
    /// The observer receives an [`Event`] after each reading.
    ///
    /// # Errors
    ///
    /// Returns an error if `setpoints` is empty, the actuator rejects a
    /// setpoint, or either sensor fails to read.
    pub fn run_sweep<Obs>(
        &mut self,
        setpoints: &[f64],
        mut observer: Obs,
    ) -> Result<SweepResult, Error>
    where
        Obs: Observer<Event, Action>,
    {
        if setpoints.is_empty() {
            return Err(Error::NoSetpoints);
        }

        let mut readings = Vec::with_capacity(setpoints.len());

        for (index, &setpoint) in setpoints.iter().enumerate() {
            let reading = self.measure(index, setpoint).inspect_err(|err| {
                warn!(index, setpoint, error = %err, "sweep aborted");
            })?;

            debug!(
                index,
                setpoint,
                stimulus = reading.stimulus,
                response = reading.response,
                "reading recorded"
            );

            let event = Event {
                index,
                setpoint,
                reading,
            };
            if let Some(action) = observer.observe(&event) {
                match action {}
            }

            readings.push(reading);
        }

        info!(points = readings.len(), "sweep complete");

        Ok(SweepResult::new(setpoints.to_vec(), readings))
    }

    /// Runs one sweep without observation.
    ///
    /// # Errors
    ///
    /// Returns an error if `setpoints` is empty, the actuator rejects a
    /// setpoint, or either sensor fails to read.
    pub fn run_sweep_unobserved(&mut self, setpoints: &[f64]) -> Result<SweepResult, Error> {
        self.run_sweep(setpoints, ())
    }

    /// Nominal uncertainty of the stimulus sensor.
    #[must_use]
    pub fn stimulus_uncertainty(&self) -> f64 {
        self.stimulus_sensor.uncertainty()
    }

    /// Nominal uncertainty of the response sensor.
    #[must_use]
    pub fn response_uncertainty(&self) -> f64 {
        self.response_sensor.uncertainty()
    }

    /// Returns the instrument handles.
    pub fn into_parts(self) -> (A, V, I) {
        (self.actuator, self.stimulus_sensor, self.response_sensor)
    }

    /// Commands one setpoint and reads both sensors.
    fn measure(&mut self, index: usize, setpoint: f64) -> Result<Reading, Error> {
        self.actuator
            .set(setpoint)
            .map_err(|err| Error::actuation(index, setpoint, err))?;

        let stimulus = self
            .stimulus_sensor
            .read()
            .map_err(|err| Error::acquisition(index, setpoint, SensorRole::Stimulus, err))?;

        let response = self
            .response_sensor
            .read()
            .map_err(|err| Error::acquisition(index, setpoint, SensorRole::Response, err))?;

        Ok(Reading::new(stimulus, response))
    }
}

/// Runs one sweep over `setpoints` with borrowed instrument handles.
///
/// This is a convenience for callers that keep their instruments and only
/// need a single sweep.
///
/// # Errors
///
/// Returns an error if `setpoints` is empty, the actuator rejects a
/// setpoint, or either sensor fails to read.
pub fn run_sweep<A, V, I>(
    actuator: &mut A,
    stimulus_sensor: &mut V,
    response_sensor: &mut I,
    setpoints: &[f64],
) -> Result<SweepResult, Error>
where
    A: StimulusActuator,
    V: Sensor,
    I: Sensor,
{
    SweepExecutor::new(actuator, stimulus_sensor, response_sensor).run_sweep_unobserved(setpoints)
}

#[cfg(test)]
mod tests;
