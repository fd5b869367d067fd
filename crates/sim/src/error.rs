use std::fmt;

use thiserror::Error;

/// The simulated instruments.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Instrument {
    Generator,
    Voltmeter,
    Ammeter,
    Chamber,
}

impl fmt::Display for Instrument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Generator => "generator",
            Self::Voltmeter => "voltmeter",
            Self::Ammeter => "ammeter",
            Self::Chamber => "temperature chamber",
        };
        f.write_str(name)
    }
}

/// Errors reported by simulated instruments.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum Error {
    #[error("{instrument} cannot reach {value}: range is [{min}, {max}]")]
    OutOfRange {
        instrument: Instrument,
        value: f64,
        min: f64,
        max: f64,
    },

    #[error("{instrument} reported a transient fault")]
    TransientFault { instrument: Instrument },
}
