use std::error::Error as StdError;

use ohmic_fit::linear;

use crate::executor;

use super::TemperatureCurve;

/// A temperature sweep that stopped at a failing condition.
///
/// Points completed before the failure are kept in `partial`.
#[derive(Debug, thiserror::Error)]
#[error("temperature sweep aborted at condition {condition} (index {index})")]
pub struct Error {
    /// Position of the failing condition.
    pub index: usize,
    /// The failing condition.
    pub condition: f64,
    /// Curve points completed before the failure, in visitation order.
    pub partial: TemperatureCurve,
    /// What went wrong at the failing condition.
    #[source]
    pub cause: Cause,
}

impl Error {
    /// Returns the curve points completed before the failure.
    #[must_use]
    pub fn into_partial(self) -> TemperatureCurve {
        self.partial
    }
}

/// The reason a condition could not be measured.
#[derive(Debug, thiserror::Error)]
pub enum Cause {
    #[error("ambient actuator rejected the condition")]
    Actuation(#[source] Box<dyn StdError + Send + Sync>),

    #[error("sweep failed")]
    Sweep(#[from] executor::Error),

    #[error("fit failed")]
    Fit(#[from] linear::Error),
}

impl Cause {
    pub(crate) fn actuation<E: StdError + Send + Sync + 'static>(err: E) -> Self {
        Self::Actuation(Box::new(err))
    }
}
