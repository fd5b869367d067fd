/// A pair of measurements taken at one stimulus setpoint.
///
/// `stimulus` is the readback of the applied stimulus (for example a
/// voltmeter across the component) and `response` is the resulting quantity
/// (for example an ammeter in series).
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Reading {
    pub stimulus: f64,
    pub response: f64,
}

impl Reading {
    /// Creates a reading from its stimulus and response values.
    #[must_use]
    pub fn new(stimulus: f64, response: f64) -> Self {
        Self { stimulus, response }
    }
}

/// The readings of one sweep, one per setpoint, in setpoint order.
///
/// A `SweepResult` is only produced by a sweep that visited every setpoint,
/// so `setpoints()[i]` is the commanded value behind `readings()[i]`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SweepResult {
    setpoints: Vec<f64>,
    readings: Vec<Reading>,
}

impl SweepResult {
    /// Pairs each setpoint with the reading taken there.
    ///
    /// # Panics
    ///
    /// Panics if `setpoints` and `readings` differ in length.
    #[must_use]
    pub fn new(setpoints: Vec<f64>, readings: Vec<Reading>) -> Self {
        assert_eq!(
            setpoints.len(),
            readings.len(),
            "every setpoint needs exactly one reading"
        );
        Self {
            setpoints,
            readings,
        }
    }

    /// Returns the commanded setpoints in visitation order.
    #[must_use]
    pub fn setpoints(&self) -> &[f64] {
        &self.setpoints
    }

    /// Returns the readings in setpoint order.
    #[must_use]
    pub fn readings(&self) -> &[Reading] {
        &self.readings
    }

    /// Returns the number of readings.
    #[must_use]
    pub fn len(&self) -> usize {
        self.readings.len()
    }

    /// Returns `true` if the sweep holds no readings.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.readings.is_empty()
    }

    /// Iterates over the stimulus readbacks.
    pub fn stimuli(&self) -> impl Iterator<Item = f64> + '_ {
        self.readings.iter().map(|reading| reading.stimulus)
    }

    /// Iterates over the responses.
    pub fn responses(&self) -> impl Iterator<Item = f64> + '_ {
        self.readings.iter().map(|reading| reading.response)
    }
}
