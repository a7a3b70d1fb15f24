//! Centralised error types used across the crate.

use std::{error::Error, fmt, io};

use crate::core::{color::ColorError, data::ParseSeriesError};

/// Precise configuration faults.
#[derive(Debug, PartialEq)]
pub enum ConfigError {
    /// `width` or `height` was zero
    ZeroDimension(&'static str),
    BlankMarker,
    InvalidSimulation { field: &'static str, value: f64 },
    /// Fewer than two samples would be generated
    TooFewSamples(usize),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::ZeroDimension(x) => write!(f, "chart {x} must be at least 1"),
            ConfigError::BlankMarker => f.write_str("marker must be a visible character"),
            ConfigError::InvalidSimulation { field, value } => {
                write!(f, "invalid {field}: {value}")
            }
            ConfigError::TooFewSamples(n) => {
                write!(f, "duration × sample rate gives {n} samples, need at least 2")
            }
        }
    }
}
impl Error for ConfigError {}

/// Top-level error type bubbled up by public APIs.
#[derive(Debug)]
pub enum ChartError {
    Io(io::Error),
    Parse(ParseSeriesError),
    Color(ColorError),
    Config(ConfigError),
    EmptySeries,
    NonFinite { index: usize, value: f64 },
}

impl fmt::Display for ChartError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChartError::Io(e) => write!(f, "{e}"),
            ChartError::Parse(e) => write!(f, "{e}"),
            ChartError::Color(e) => write!(f, "{e}"),
            ChartError::Config(e) => write!(f, "{e}"),
            ChartError::EmptySeries => write!(f, "sample series is empty"),
            ChartError::NonFinite { index, value } => {
                write!(f, "sample {index} is not finite ({value})")
            }
        }
    }
}

impl Error for ChartError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            ChartError::Io(e) => Some(e),
            ChartError::Parse(e) => Some(e),
            ChartError::Color(e) => Some(e),
            ChartError::Config(e) => Some(e),
            ChartError::EmptySeries | ChartError::NonFinite { .. } => None,
        }
    }
}

// automatic conversions
impl From<io::Error> for ChartError {
    fn from(e: io::Error) -> Self {
        Self::Io(e)
    }
}
impl From<ParseSeriesError> for ChartError {
    fn from(e: ParseSeriesError) -> Self {
        Self::Parse(e)
    }
}
impl From<ColorError> for ChartError {
    fn from(e: ColorError) -> Self {
        Self::Color(e)
    }
}
impl From<ConfigError> for ChartError {
    fn from(e: ConfigError) -> Self {
        Self::Config(e)
    }
}
