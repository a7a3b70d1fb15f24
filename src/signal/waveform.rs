//! Closed-form periodic waveforms sampled over a time vector.

use std::{error::Error, f64::consts::TAU, fmt, str::FromStr};

use crate::core::{config::SimConfig, error::ChartError, series::Series};

/// The three demo signals, each swinging between -1 and 1.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Waveform {
    Sine,
    Square,
    Sawtooth,
}

impl Waveform {
    /// Heading used in chart titles.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Sine => "Sine Wave",
            Self::Square => "Square Wave",
            Self::Sawtooth => "Sawtooth Wave",
        }
    }

    /// Value at time `t` (seconds) for frequency `freq` (Hz).
    #[inline]
    #[must_use]
    pub fn sample(self, t: f64, freq: f64) -> f64 {
        match self {
            Self::Sine => (TAU * freq * t).sin(),
            // sign(0) is 0 here, unlike f64::signum
            Self::Square => {
                let s = (TAU * freq * t).sin();
                if s > 0.0 {
                    1.0
                } else if s < 0.0 {
                    -1.0
                } else {
                    0.0
                }
            }
            // ramp -1 -> 1 once per period
            Self::Sawtooth => 2.0 * (t * freq).rem_euclid(1.0) - 1.0,
        }
    }

    /// Sample the waveform over `sim`'s time vector.
    pub fn generate(self, sim: &SimConfig) -> Result<Series, ChartError> {
        sim.validate()?;
        let samples: Vec<f64> = time_vector(sim)
            .map(|t| self.sample(t, sim.frequency_hz))
            .collect();
        log::debug!(
            "generated {} {} samples at {} Hz",
            samples.len(),
            self.name(),
            sim.sample_rate
        );
        Series::new(samples)
    }
}

/// `N` evenly spaced instants over `[0, duration)`; the endpoint is excluded.
#[allow(clippy::cast_precision_loss)]
pub fn time_vector(sim: &SimConfig) -> impl Iterator<Item = f64> + use<> {
    let n = sim.sample_count();
    let step = sim.duration_s / n as f64;
    (0..n).map(move |i| i as f64 * step)
}

impl fmt::Display for Waveform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct UnknownWaveform(pub String);

impl fmt::Display for UnknownWaveform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown waveform '{}' (expected sine, square or sawtooth)",
            self.0
        )
    }
}
impl Error for UnknownWaveform {}

impl FromStr for Waveform {
    type Err = UnknownWaveform;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "sine" | "sin" => Ok(Self::Sine),
            "square" | "sq" => Ok(Self::Square),
            "sawtooth" | "saw" => Ok(Self::Sawtooth),
            _ => Err(UnknownWaveform(s.to_owned())),
        }
    }
}

#[cfg(test)]
mod tests {
    use assert_approx_eq::assert_approx_eq;

    use super::*;

    #[test]
    fn sine_quarter_period_peaks() {
        assert_approx_eq!(Waveform::Sine.sample(0.25, 1.0), 1.0);
        assert_approx_eq!(Waveform::Sine.sample(0.75, 1.0), -1.0);
        assert_approx_eq!(Waveform::Sine.sample(0.0, 3.0), 0.0);
    }

    #[test]
    fn square_is_sign_of_sine() {
        assert_eq!(Waveform::Square.sample(0.0, 3.0), 0.0);
        assert_eq!(Waveform::Square.sample(0.1, 1.0), 1.0);
        assert_eq!(Waveform::Square.sample(0.6, 1.0), -1.0);
    }

    #[test]
    fn sawtooth_ramps_and_wraps() {
        assert_approx_eq!(Waveform::Sawtooth.sample(0.0, 1.0), -1.0);
        assert_approx_eq!(Waveform::Sawtooth.sample(0.5, 1.0), 0.0);
        assert_approx_eq!(Waveform::Sawtooth.sample(0.75, 1.0), 0.5);
        // second period starts again at the bottom
        assert_approx_eq!(Waveform::Sawtooth.sample(1.25, 1.0), -0.5);
    }

    #[test]
    fn time_vector_excludes_endpoint() {
        let sim = SimConfig {
            duration_s: 1.0,
            sample_rate: 4,
            ..SimConfig::default()
        };
        let t: Vec<f64> = time_vector(&sim).collect();
        assert_eq!(t, vec![0.0, 0.25, 0.5, 0.75]);
    }

    #[test]
    fn generate_uses_simulation_parameters() {
        let s = Waveform::Sine.generate(&SimConfig::default()).unwrap();
        assert_eq!(s.len(), 1000);
        let (lo, hi) = s.extrema();
        assert!(lo >= -1.0 && hi <= 1.0);
        assert!(hi > 0.99 && lo < -0.99);
    }

    #[test]
    fn generate_rejects_invalid_simulation() {
        let sim = SimConfig {
            frequency_hz: 0.0,
            ..SimConfig::default()
        };
        assert!(matches!(
            Waveform::Square.generate(&sim),
            Err(ChartError::Config(_))
        ));
    }

    #[test]
    fn parse_names() {
        assert_eq!("Sine".parse::<Waveform>(), Ok(Waveform::Sine));
        assert_eq!("saw".parse::<Waveform>(), Ok(Waveform::Sawtooth));
        assert!("triangle".parse::<Waveform>().is_err());
        assert_eq!(Waveform::Square.to_string(), "Square Wave");
    }
}
