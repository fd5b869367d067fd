
use ohmic_core::SweepResult;
use ohmic_fit::{LinearFit, format};
use ohmic_sweep::TemperatureCurve;
use thiserror::Error;

/// Fraction of the data span added on each side of an axis.
const PADDING: f64 = 0.1;

/// Errors that can occur when building a figure.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum Error {
    #[error("cannot plot a figure without measurements")]
    NoMeasurements,

    #[error("cannot label the fitted parameter: {0}")]
    Format(#[from] format::Error),
}

/// Inclusive axis limits.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Limits {
    pub min: f64,
    pub max: f64,
}

impl Limits {
    /// Spans `values` and pads both ends by 10% of the span.
    ///
    /// Returns `None` for an empty iterator. A zero span stays unpadded.
    pub fn padded(values: impl IntoIterator<Item = f64>) -> Option<Self> {
        let (min, max) = values
            .into_iter()
            .fold(None, |acc: Option<(f64, f64)>, value| match acc {
                None => Some((value, value)),
                Some((min, max)) => Some((min.min(value), max.max(value))),
            })?;

        let pad = PADDING * (max - min);
        Some(Self {
            min: min - pad,
            max: max + pad,
        })
    }
}

/// A measured point with symmetric error bars.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Measurement {
    pub x: f64,
    pub y: f64,
    pub x_err: f64,
    pub y_err: f64,
}

/// A named set of measurements drawn in one color.
#[derive(Debug, Clone, PartialEq)]
pub struct Series {
    pub name: String,
    pub points: Vec<Measurement>,
}

impl Series {
    /// Builds an I-V series: stimulus readback on x, response on y.
    #[must_use]
    pub fn from_sweep(
        name: impl Into<String>,
        sweep: &SweepResult,
        x_err: f64,
        y_err: f64,
    ) -> Self {
        let points = sweep
            .readings()
            .iter()
            .map(|reading| Measurement {
                x: reading.stimulus,
                y: reading.response,
                x_err,
                y_err,
            })
            .collect();

        Self {
            name: name.into(),
            points,
        }
    }
}

/// The region between two lines, drawn as a filled polygon.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Band {
    pub upper: [[f64; 2]; 2],
    pub lower: [[f64; 2]; 2],
}

impl Band {
    /// Returns the band as convex polygons.
    ///
    /// Both edges span the same x interval. When they cross inside it the
    /// band is split at the crossing into two triangles, since a single
    /// outline would intersect itself.
    #[must_use]
    pub fn polygons(&self) -> Vec<Vec<[f64; 2]>> {
        let [u0, u1] = self.upper;
        let [l0, l1] = self.lower;
        let gap_start = u0[1] - l0[1];
        let gap_end = u1[1] - l1[1];

        if gap_start * gap_end < 0.0 {
            let t = gap_start / (gap_start - gap_end);
            let crossing = [u0[0] + t * (u1[0] - u0[0]), u0[1] + t * (u1[1] - u0[1])];
            vec![vec![u0, crossing, l0], vec![crossing, u1, l1]]
        } else {
            vec![vec![u0, u1, l1, l0]]
        }
    }
}

/// Current against voltage for one or more sweeps.
#[derive(Debug, Clone, PartialEq)]
pub struct IvFigure {
    pub title: String,
    pub series: Vec<Series>,
    pub x_limits: Limits,
    pub y_limits: Limits,
    /// Fitted line `I = (V − b) / R` across the x limits.
    pub fit_line: Option<[[f64; 2]; 2]>,
    /// One-sigma band around the fitted line.
    pub band: Option<Band>,
}

impl IvFigure {
    pub const X_LABEL: &'static str = "Voltage (V)";
    pub const Y_LABEL: &'static str = "Current (A)";

    /// Builds the figure of a single sweep and its fit.
    ///
    /// The fit is the resistance fit of [`ohmic_fit::fit`]: slope `R` in
    /// ohms and intercept `b` in volts. The band runs between
    /// `(V − b + σb) / (R − σR)` and `(V − b − σb) / (R + σR)`, and the title
    /// reports `R` with its standard error.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NoMeasurements`] for an empty sweep and
    /// [`Error::Format`] if the fitted resistance cannot be formatted.
    pub fn with_fit(
        sweep: &SweepResult,
        fit: &LinearFit,
        x_err: f64,
        y_err: f64,
    ) -> Result<Self, Error> {
        let resistance = format(fit.slope, fit.slope_stderr)?;
        let title = format!("I-V curve of the resistor (R = {resistance})");
        let measurements = Series::from_sweep("Measurements", sweep, x_err, y_err);

        let mut figure = Self::from_series(title, vec![measurements])?;

        let LinearFit {
            slope: r,
            intercept: b,
            slope_stderr: sr,
            intercept_stderr: sb,
        } = *fit;
        let ends = [figure.x_limits.min, figure.x_limits.max];

        figure.fit_line = Some(ends.map(|v| [v, (v - b) / r]));
        figure.band = Some(Band {
            upper: ends.map(|v| [v, (v - b + sb) / (r - sr)]),
            lower: ends.map(|v| [v, (v - b - sb) / (r + sr)]),
        });
        Ok(figure)
    }

    /// Builds a figure of several series with shared padded limits.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NoMeasurements`] if no series holds a point.
    pub fn from_series(title: impl Into<String>, series: Vec<Series>) -> Result<Self, Error> {
        let points = || series.iter().flat_map(|s| s.points.iter());

        let x_limits = Limits::padded(points().map(|p| p.x)).ok_or(Error::NoMeasurements)?;
        let y_limits = Limits::padded(points().map(|p| p.y)).ok_or(Error::NoMeasurements)?;

        Ok(Self {
            title: title.into(),
            series,
            x_limits,
            y_limits,
            fit_line: None,
            band: None,
        })
    }
}

/// Fitted resistance against temperature.
#[derive(Debug, Clone, PartialEq)]
pub struct RtFigure {
    pub title: String,
    /// One point per condition; the y error is the slope's standard error.
    pub points: Vec<Measurement>,
    pub x_limits: Limits,
    pub y_limits: Limits,
}

impl RtFigure {
    pub const TITLE: &'static str = "R(T) relation";
    pub const X_LABEL: &'static str = "Temperature (K)";
    pub const Y_LABEL: &'static str = "Resistance (Ohm)";

    /// Builds the scatter of a temperature curve.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NoMeasurements`] for an empty curve.
    pub fn new(curve: &TemperatureCurve) -> Result<Self, Error> {
        let points: Vec<Measurement> = curve
            .iter()
            .map(|point| Measurement {
                x: point.condition,
                y: point.parameter(),
                x_err: 0.0,
                y_err: point.fit.slope_stderr,
            })
            .collect();

        let x_limits = Limits::padded(points.iter().map(|p| p.x)).ok_or(Error::NoMeasurements)?;
        let y_limits = Limits::padded(points.iter().map(|p| p.y)).ok_or(Error::NoMeasurements)?;

        Ok(Self {
            title: Self::TITLE.to_owned(),
            points,
            x_limits,
            y_limits,
        })
    }
}

/// Any figure this crate can draw.
#[derive(Debug, Clone, PartialEq)]
pub enum Figure {
    Iv(IvFigure),
    Rt(RtFigure),
}

impl Figure {
    /// The figure's title.
    #[must_use]
    pub fn title(&self) -> &str {
        match self {
            Figure::Iv(figure) => &figure.title,
            Figure::Rt(figure) => &figure.title,
        }
    }
}

impl From<IvFigure> for Figure {
    fn from(figure: IvFigure) -> Self {
        Figure::Iv(figure)
    }
}

impl From<RtFigure> for Figure {
    fn from(figure: RtFigure) -> Self {
        Figure::Rt(figure)
    }
}
