//! Ordinary least-squares fit of a straight line.
//!
//! # Algorithm
//!
//! Given `n` pairs `(xᵢ, yᵢ)`, the fit minimizes the squared vertical
//! residuals of `y = slope · x + intercept`:
//!
//! ```text
//! slope            = Σ(xᵢ − x̄)(yᵢ − ȳ) / Σ(xᵢ − x̄)²
//! intercept        = ȳ − slope · x̄
//! s                = √( Σ(yᵢ − ŷᵢ)² / (n − 2) )
//! slope_stderr     = s / √Σ(xᵢ − x̄)²
//! intercept_stderr = s · √( 1/n + x̄² / Σ(xᵢ − x̄)² )
//! ```
//!
//! The computation is closed-form and takes two passes over the samples:
//! one for the means and one for the centered sums.
//!
//! # Variable roles
//!
//! [`fit`] regresses the stimulus readback on the response, so for a
//! voltage sweep across a resistor the fitted slope is the resistance in
//! ohms and the standard errors apply to it directly. Regressing current on
//! voltage and inverting would give a different, biased uncertainty.

mod error;


pub use error::Error;

use ohmic_core::SweepResult;

/// Fewest samples that leave at least one residual degree of freedom.
pub const MIN_SAMPLES: usize = 3;

/// Slope and intercept of a fitted line, with their standard errors.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LinearFit {
    pub slope: f64,
    pub intercept: f64,
    pub slope_stderr: f64,
    pub intercept_stderr: f64,
}

impl LinearFit {
    /// Evaluates the fitted line at `x`.
    #[must_use]
    pub fn predict(&self, x: f64) -> f64 {
        self.slope * x + self.intercept
    }

    /// Returns the `x` at which the fitted line reaches `y`.
    ///
    /// For a resistance fit this maps a voltage back to the expected current.
    #[must_use]
    pub fn invert(&self, y: f64) -> f64 {
        (y - self.intercept) / self.slope
    }
}

/// Fits the stimulus readback of a sweep as a linear function of its response.
///
/// The response (sensor 2) is the independent variable and the stimulus
/// readback (sensor 1) the dependent one; see the [module docs](self).
///
/// # Errors
///
/// Returns an error if the sweep has fewer than [`MIN_SAMPLES`] readings,
/// holds a non-finite reading, or has no spread to fit.
pub fn fit(sweep: &SweepResult) -> Result<LinearFit, Error> {
    let points: Vec<[f64; 2]> = sweep
        .readings()
        .iter()
        .map(|reading| [reading.response, reading.stimulus])
        .collect();

    regress(&points)
}

/// Fits `y = slope · x + intercept` to `[x, y]` pairs.
///
/// # Errors
///
/// Returns an error if there are fewer than [`MIN_SAMPLES`] points, any
/// coordinate is non-finite, `x` has zero spread, or the fitted slope is
/// exactly zero.
pub fn regress(points: &[[f64; 2]]) -> Result<LinearFit, Error> {
    let samples = points.len();
    if samples < MIN_SAMPLES {
        return Err(Error::InsufficientData { samples });
    }

    if let Some(index) = points
        .iter()
        .position(|[x, y]| !x.is_finite() || !y.is_finite())
    {
        return Err(Error::NonFiniteSample { index });
    }

    let x0 = points[0][0];

    #[allow(clippy::float_cmp)]
    if points.iter().all(|[x, _]| *x == x0) {
        return Err(Error::Degenerate {
            reason: "independent variable has zero spread",
        });
    }

    #[allow(clippy::cast_precision_loss)]
    let n = samples as f64;

    let (sum_x, sum_y) = points
        .iter()
        .fold((0.0, 0.0), |(sx, sy), [x, y]| (sx + x, sy + y));
    let mean_x = sum_x / n;
    let mean_y = sum_y / n;

    let (sxx, sxy) = points.iter().fold((0.0, 0.0), |(sxx, sxy), [x, y]| {
        let dx = x - mean_x;
        (sxx + dx * dx, sxy + dx * (y - mean_y))
    });

    // Distinct but nearly equal x values can still underflow to zero here.
    if sxx <= 0.0 {
        return Err(Error::Degenerate {
            reason: "independent variable spread underflows",
        });
    }

    let slope = sxy / sxx;

    // A flat line carries no resistance; it also covers a constant y.
    #[allow(clippy::float_cmp)]
    if slope == 0.0 {
        return Err(Error::Degenerate {
            reason: "fitted slope is exactly zero",
        });
    }
    let intercept = mean_y - slope * mean_x;

    let ssr: f64 = points
        .iter()
        .map(|[x, y]| {
            let residual = y - (slope * x + intercept);
            residual * residual
        })
        .sum();
    let s = (ssr / (n - 2.0)).sqrt();

    Ok(LinearFit {
        slope,
        intercept,
        slope_stderr: s / sxx.sqrt(),
        intercept_stderr: s * (1.0 / n + mean_x * mean_x / sxx).sqrt(),
    })
}
