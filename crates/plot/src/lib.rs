//! Figures for Ohmic sweeps and temperature curves.
//!
//! The figure types hold plain numbers (points, error bars, axis limits,
//! fitted line, uncertainty band) and never touch a GUI, so they can be
//! built and checked anywhere:
//!
//! - [`IvFigure`] — current against voltage for one or more sweeps, with an
//!   optional fitted line and uncertainty band
//! - [`RtFigure`] — fitted resistance against temperature
//! - [`CurveRecorder`] — an observer for
//!   [`sweep_temperatures`](ohmic_sweep::sweep_temperatures) that keeps each
//!   condition's sweep for a multi-curve I-V figure
//!
//! With the `plot` feature, [`show`] opens the figures side by side in an
//! egui window.

mod figure;
mod recorder;

#[cfg(feature = "plot")]
mod app;

pub use figure::{Band, Error, Figure, IvFigure, Limits, Measurement, RtFigure, Series};
pub use recorder::{CurveRecorder, RecordedSweep};

#[cfg(feature = "plot")]
pub use app::{PlotApp, show};
