use thiserror::Error;

use super::MIN_SAMPLES;

/// Errors that can occur when fitting a line.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    #[error("need at least {MIN_SAMPLES} samples to estimate errors, got {samples}")]
    InsufficientData { samples: usize },

    #[error("sample {index} is not finite")]
    NonFiniteSample { index: usize },

    #[error("degenerate fit: {reason}")]
    Degenerate { reason: &'static str },
}
