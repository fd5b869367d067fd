use ohmic_core::{Observer, SweepResult};
use ohmic_fit::LinearFit;
use ohmic_sweep::aggregate::{Action, Event};

use crate::{Error, IvFigure, Series};

/// One condition's sweep as kept by a [`CurveRecorder`].
#[derive(Debug, Clone, PartialEq)]
pub struct RecordedSweep {
    pub condition: f64,
    pub sweep: SweepResult,
    pub fit: LinearFit,
}

impl RecordedSweep {
    /// Legend label, e.g. `"T = 270 K, R = 181 Ohm"`.
    #[must_use]
    pub fn label(&self) -> String {
        format!(
            "T = {:.0} K, R = {:.0} Ohm",
            self.condition, self.fit.slope
        )
    }
}

/// An observer that keeps every sweep of a temperature run.
///
/// Pass `&mut recorder` to
/// [`sweep_temperatures`](ohmic_sweep::sweep_temperatures), then build the
/// multi-curve I-V figure with [`iv_figure`](CurveRecorder::iv_figure).
#[derive(Debug, Clone, Default)]
pub struct CurveRecorder {
    sweeps: Vec<RecordedSweep>,
}

impl CurveRecorder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the recorded sweeps in visitation order.
    #[must_use]
    pub fn sweeps(&self) -> &[RecordedSweep] {
        &self.sweeps
    }

    /// Builds one I-V series per recorded condition.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NoMeasurements`] if nothing was recorded.
    pub fn iv_figure(&self, x_err: f64, y_err: f64) -> Result<IvFigure, Error> {
        let series = self
            .sweeps
            .iter()
            .map(|recorded| Series::from_sweep(recorded.label(), &recorded.sweep, x_err, y_err))
            .collect();

        IvFigure::from_series("I-V curves of the thermistor", series)
    }
}

impl Observer<Event<'_>, Action> for CurveRecorder {
    fn observe(&mut self, event: &Event<'_>) -> Option<Action> {
        self.sweeps.push(RecordedSweep {
            condition: event.condition,
            sweep: event.sweep.clone(),
            fit: *event.fit,
        });
        None
    }
}

/// Allows `&mut CurveRecorder` to be passed by value, so the recorder can be
/// read after the run completes.
impl Observer<Event<'_>, Action> for &mut CurveRecorder {
    fn observe(&mut self, event: &Event<'_>) -> Option<Action> {
        (*self).observe(event)
    }
}
