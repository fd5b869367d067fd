//! Shared-exponent rendering of a value and its uncertainty.
//!
//! A fitted resistance of `1234.5 ± 12.3` is reported as
//! `1.23 +/- 0.01 x 10^3`: the value is rounded to two decimals of mantissa
//! and the uncertainty is scaled by the same power of ten, so both read
//! against one exponent.

use std::fmt;

use thiserror::Error;

/// Errors that can occur when formatting a parameter.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum Error {
    #[error("cannot format non-finite parameter: value = {value}, stderr = {stderr}")]
    NonFinite { value: f64, stderr: f64 },

    #[error("cannot express {value} +/- {stderr} with a shared power of ten")]
    Unrepresentable { value: f64, stderr: f64 },
}

/// A value and its standard error in scientific notation with one exponent.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FormattedParameter {
    /// Normalized mantissa, e.g. `"1.23"` or `"-4.70"`.
    pub mantissa: String,
    /// Base-10 exponent without padding, e.g. `"3"` or `"-4"`.
    pub exponent: String,
    /// Standard error in units of `10^exponent`, e.g. `"0.01"`.
    pub error: String,
}

impl fmt::Display for FormattedParameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} +/- {} x 10^{}",
            self.mantissa, self.error, self.exponent
        )
    }
}

/// Formats `value ± stderr` with a shared power of ten.
///
/// The exponent is taken from the rounded mantissa, so `9.999` becomes
/// `"1.00"` with exponent `"1"` rather than `"10.00"` with exponent `"0"`.
///
/// # Errors
///
/// Returns [`Error::NonFinite`] if `value` or `stderr` is NaN or infinite,
/// and [`Error::Unrepresentable`] if `stderr` overflows once expressed in
/// units of the value's power of ten (a tiny value with a large error).
pub fn format(value: f64, stderr: f64) -> Result<FormattedParameter, Error> {
    if !value.is_finite() || !stderr.is_finite() {
        return Err(Error::NonFinite { value, stderr });
    }
    let unrepresentable = Error::Unrepresentable { value, stderr };

    let scientific = format!("{value:.2e}");
    let (mantissa, exponent) = scientific.split_once('e').ok_or(unrepresentable)?;
    let power: i32 = exponent.parse().map_err(|_| unrepresentable)?;

    // Two half steps, since 10^power alone underflows near the subnormal range.
    let half = power / 2;
    let scaled = stderr / 10_f64.powi(half) / 10_f64.powi(power - half);
    if !scaled.is_finite() {
        return Err(unrepresentable);
    }

    Ok(FormattedParameter {
        mantissa: mantissa.to_owned(),
        exponent: exponent.to_owned(),
        error: format!("{scaled:.2}"),
    })
}
