//! Linear fitting and parameter reporting for Ohmic.
//!
//! - [`linear`] — ordinary least-squares fit of a straight line, with the
//!   standard errors of slope and intercept
//! - [`format`] — renders a fitted value and its uncertainty with one shared
//!   power of ten

pub mod format;
pub mod linear;

pub use format::{FormattedParameter, format};
pub use linear::{LinearFit, fit, regress};
