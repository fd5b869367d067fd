//! Shared setup for the Ohmic demos.
//!
//! Each demo takes an optional TOML file as its first argument:
//!
//! ```toml
//! voltages = { start = -5.0, stop = 5.0, step = 1.0 }
//! temperatures = { start = 270.0, stop = 295.0, step = 5.0 }
//!
//! [noise]
//! voltmeter_sigma = 0.1
//! ammeter_sigma = 5e-4
//! seed = 7
//! ```
//!
//! Without one, [`BenchConfig::standard`] is used.

use std::{fs, io, path::Path, path::PathBuf};

use ohmic_core::{LinearRange, RangeError};
use ohmic_sim::NoiseConfig;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing_subscriber::{EnvFilter, fmt};

/// Errors that can occur when loading a [`BenchConfig`].
#[derive(Debug, Error)]
pub enum Error {
    #[error("failed to read {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid bench config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid range: {0}")]
    Range(#[from] RangeError),
}

/// Sweep ranges and instrument noise for a bench run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BenchConfig {
    /// Generator setpoints, in volts.
    pub voltages: LinearRange,
    /// Chamber temperatures, in kelvin.
    pub temperatures: LinearRange,
    #[serde(default)]
    pub noise: NoiseConfig,
}

impl BenchConfig {
    /// −5 V to 5 V in 1 V steps, 270 K to 295 K in 5 K steps, nominal noise.
    ///
    /// # Errors
    ///
    /// Never fails in practice; the ranges are validated like any other.
    pub fn standard() -> Result<Self, Error> {
        Ok(Self {
            voltages: LinearRange::new(-5.0, 5.0, 1.0)?,
            temperatures: LinearRange::new(270.0, 295.0, 5.0)?,
            noise: NoiseConfig::default(),
        })
    }

    /// Parses a config from TOML text.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Parse`] for malformed TOML, missing ranges or ranges
    /// that fail validation.
    pub fn from_toml(text: &str) -> Result<Self, Error> {
        Ok(toml::from_str(text)?)
    }

    /// Reads a config from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Read`] if the file cannot be read, otherwise as
    /// [`from_toml`](Self::from_toml).
    pub fn load(path: impl AsRef<Path>) -> Result<Self, Error> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| Error::Read {
            path: path.to_owned(),
            source,
        })?;
        Self::from_toml(&text)
    }

    /// Loads the file named by the first command-line argument, if any.
    ///
    /// # Errors
    ///
    /// As [`load`](Self::load).
    pub fn from_args() -> Result<Self, Error> {
        match std::env::args_os().nth(1) {
            Some(path) => Self::load(path),
            None => Self::standard(),
        }
    }
}

/// Installs a `tracing` subscriber for the demos.
///
/// Use the `RUST_LOG` environment variable to override the default `info`
/// filter, e.g. `RUST_LOG=ohmic_sweep=debug`.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    fmt().with_env_filter(filter).with_target(false).init();
}
