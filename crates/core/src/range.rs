use thiserror::Error;

/// Largest number of points a [`LinearRange`] will produce.
const MAX_POINTS: usize = 1_000_000;

/// An evenly spaced, inclusive range of real values.
///
/// The range starts at `start` and advances by `step` for as long as the
/// next value does not pass `stop`. `stop` itself is included when it lies
/// on the grid, so `LinearRange::new(-5.0, 5.0, 1.0)` yields the eleven
/// integers from −5 to 5.
///
/// A negative `step` walks downward and requires `stop <= start`.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawRange"))]
pub struct LinearRange {
    start: f64,
    stop: f64,
    step: f64,
}

/// Errors that can occur when validating a [`LinearRange`].
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum RangeError {
    #[error("range bound is not finite: {value}")]
    NonFinite { value: f64 },

    #[error("range step must be non-zero")]
    ZeroStep,

    #[error("step {step} never reaches stop {stop} from start {start}")]
    WrongDirection { start: f64, stop: f64, step: f64 },

    #[error("range would produce more than {max} points")]
    TooManyPoints { max: usize },
}

impl LinearRange {
    /// Creates a validated range.
    ///
    /// # Errors
    ///
    /// Returns an error if any bound is non-finite, the step is zero, the
    /// step points away from `stop`, or the range is unreasonably long.
    pub fn new(start: f64, stop: f64, step: f64) -> Result<Self, RangeError> {
        for value in [start, stop, step] {
            if !value.is_finite() {
                return Err(RangeError::NonFinite { value });
            }
        }

        #[allow(clippy::float_cmp)]
        if step == 0.0 {
            return Err(RangeError::ZeroStep);
        }

        if (stop - start) * step < 0.0 {
            return Err(RangeError::WrongDirection { start, stop, step });
        }

        let range = Self { start, stop, step };
        if range.steps() >= MAX_POINTS {
            return Err(RangeError::TooManyPoints { max: MAX_POINTS });
        }

        Ok(range)
    }

    /// Returns the first value of the range.
    #[must_use]
    pub fn start(&self) -> f64 {
        self.start
    }

    /// Returns the inclusive upper (or lower, for negative steps) bound.
    #[must_use]
    pub fn stop(&self) -> f64 {
        self.stop
    }

    /// Returns the spacing between consecutive values.
    #[must_use]
    pub fn step(&self) -> f64 {
        self.step
    }

    /// Returns the number of values in the range.
    #[must_use]
    pub fn len(&self) -> usize {
        self.steps() + 1
    }

    /// A validated range always holds at least `start`.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Returns the values of the range in order.
    #[must_use]
    pub fn values(&self) -> Vec<f64> {
        #[allow(clippy::cast_precision_loss)]
        (0..self.len())
            .map(|i| self.start + i as f64 * self.step)
            .collect()
    }

    /// Number of whole steps between `start` and `stop`.
    ///
    /// A relative slack absorbs rounding, so `0.0..=0.3` by `0.1` keeps its
    /// last point even though `0.3 / 0.1` is slightly below 3.
    fn steps(&self) -> usize {
        let ratio = (self.stop - self.start) / self.step;
        let slack = 1e-9 * ratio.abs().max(1.0);

        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let steps = (ratio + slack).floor().min(MAX_POINTS as f64) as usize;
        steps
    }
}

#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawRange {
    start: f64,
    stop: f64,
    step: f64,
}

#[cfg(feature = "serde")]
impl TryFrom<RawRange> for LinearRange {
    type Error = RangeError;

    fn try_from(raw: RawRange) -> Result<Self, Self::Error> {
        Self::new(raw.start, raw.stop, raw.step)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn integer_voltage_sweep_includes_both_ends() {
        let range = LinearRange::new(-5.0, 5.0, 1.0).unwrap();

        assert_eq!(range.len(), 11);
        assert_eq!(
            range.values(),
            [-5.0, -4.0, -3.0, -2.0, -1.0, 0.0, 1.0, 2.0, 3.0, 4.0, 5.0]
        );
    }

    #[test]
    fn temperature_grid_stops_on_last_point_at_or_below_stop() {
        let range = LinearRange::new(270.0, 297.0, 5.0).unwrap();
        assert_eq!(range.values(), [270.0, 275.0, 280.0, 285.0, 290.0, 295.0]);
    }

    #[test]
    fn fractional_step_keeps_final_point() {
        let values = LinearRange::new(0.0, 0.3, 0.1).unwrap().values();

        assert_eq!(values.len(), 4);
        assert_relative_eq!(values[3], 0.3, epsilon = 1e-12);
    }

    #[test]
    fn negative_step_walks_downward() {
        let range = LinearRange::new(2.0, -2.0, -2.0).unwrap();
        assert_eq!(range.values(), [2.0, 0.0, -2.0]);
    }

    #[test]
    fn single_point_range() {
        let range = LinearRange::new(1.5, 1.5, 0.5).unwrap();
        assert_eq!(range.values(), [1.5]);
        assert!(!range.is_empty());
    }

    #[test]
    fn rejects_invalid_ranges() {
        assert_eq!(
            LinearRange::new(0.0, 1.0, 0.0),
            Err(RangeError::ZeroStep)
        );
        assert!(matches!(
            LinearRange::new(f64::NAN, 1.0, 0.1),
            Err(RangeError::NonFinite { .. })
        ));
        assert!(matches!(
            LinearRange::new(0.0, f64::INFINITY, 0.1),
            Err(RangeError::NonFinite { .. })
        ));
        assert!(matches!(
            LinearRange::new(0.0, 1.0, -0.1),
            Err(RangeError::WrongDirection { .. })
        ));
        assert!(matches!(
            LinearRange::new(0.0, 1.0, 1e-12),
            Err(RangeError::TooManyPoints { .. })
        ));
    }
}
