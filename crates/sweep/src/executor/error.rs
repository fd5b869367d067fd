use std::{error::Error as StdError, fmt};

/// Which of the two sensors failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SensorRole {
    /// The sensor reading back the applied stimulus.
    Stimulus,
    /// The sensor reading the component's response.
    Response,
}

impl fmt::Display for SensorRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Stimulus => f.write_str("stimulus"),
            Self::Response => f.write_str("response"),
        }
    }
}

/// Errors that can occur during a sweep.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("sweep needs at least one setpoint")]
    NoSetpoints,

    #[error("actuator rejected setpoint {setpoint} at index {index}")]
    Actuation {
        index: usize,
        setpoint: f64,
        #[source]
        source: Box<dyn StdError + Send + Sync>,
    },

    #[error("{sensor} sensor failed at setpoint {setpoint} (index {index})")]
    Acquisition {
        index: usize,
        setpoint: f64,
        sensor: SensorRole,
        #[source]
        source: Box<dyn StdError + Send + Sync>,
    },
}

impl Error {
    pub(crate) fn actuation<E: StdError + Send + Sync + 'static>(
        index: usize,
        setpoint: f64,
        err: E,
    ) -> Self {
        Self::Actuation {
            index,
            setpoint,
            source: Box::new(err),
        }
    }

    pub(crate) fn acquisition<E: StdError + Send + Sync + 'static>(
        index: usize,
        setpoint: f64,
        sensor: SensorRole,
        err: E,
    ) -> Self {
        Self::Acquisition {
            index,
            setpoint,
            sensor,
            source: Box::new(err),
        }
    }
}
