//! Run-time configuration objects: chart layout + fluent builder, and the
//! simulation parameters fed to waveform generation.

use crate::core::{
    color::Tint,
    constants::{
        DEFAULT_DURATION_S, DEFAULT_FREQUENCY_HZ, DEFAULT_HEIGHT, DEFAULT_MARKER,
        DEFAULT_MAX_DISPLAY_HZ, DEFAULT_SAMPLE_RATE, DEFAULT_WIDTH,
    },
    error::ConfigError,
};

/// Immutable parameters handed to the rasterizer and printer.
#[derive(Debug, Clone)]
pub struct Config {
    pub title: String,
    pub subtitle: Option<String>,
    pub width: usize,
    pub height: usize,
    pub marker: char,
    pub tint: Option<Tint>,
    /// Size the plot area to the terminal once the label width is known;
    /// `width` is ignored when set.
    pub fit_terminal: bool,
}

impl Config {
    #[inline]
    #[must_use]
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::new()
    }

    /// Same layout, different heading.  Used to print the time-domain and
    /// spectrum charts with one set of options.
    #[must_use]
    pub fn retitled(&self, title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..self.clone()
        }
    }
}

/// Fluent builder; unset fields fall back to the 70×15 `*` chart.
#[derive(Debug, Default)]
pub struct ConfigBuilder {
    width: Option<usize>,
    height: Option<usize>,
    title: Option<String>,
    subtitle: Option<String>,
    marker: Option<char>,
    tint: Option<Tint>,
    fit_terminal: bool,
}

impl ConfigBuilder {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    #[inline]
    #[must_use]
    pub fn title(mut self, t: impl Into<String>) -> Self {
        self.title = Some(t.into());
        self
    }
    #[inline]
    #[must_use]
    pub fn subtitle_opt(mut self, s: Option<&str>) -> Self {
        self.subtitle = s.map(str::to_owned);
        self
    }
    #[inline]
    #[must_use]
    pub fn width(mut self, w: usize) -> Self {
        self.width = Some(w);
        self
    }
    #[inline]
    #[must_use]
    pub fn height(mut self, h: usize) -> Self {
        self.height = Some(h);
        self
    }
    #[inline]
    #[must_use]
    pub fn dims(self, w: usize, h: usize) -> Self {
        self.width(w).height(h)
    }
    #[inline]
    #[must_use]
    pub fn marker(mut self, m: char) -> Self {
        self.marker = Some(m);
        self
    }
    #[inline]
    #[must_use]
    pub fn tint(mut self, t: Option<Tint>) -> Self {
        self.tint = t;
        self
    }
    #[inline]
    #[must_use]
    pub fn fit_terminal(mut self, fit: bool) -> Self {
        self.fit_terminal = fit;
        self
    }

    pub fn build(self) -> Result<Config, ConfigError> {
        let width = self.width.unwrap_or(DEFAULT_WIDTH);
        let height = self.height.unwrap_or(DEFAULT_HEIGHT);
        if width == 0 {
            return Err(ConfigError::ZeroDimension("width"));
        }
        if height == 0 {
            return Err(ConfigError::ZeroDimension("height"));
        }
        let marker = self.marker.unwrap_or(DEFAULT_MARKER);
        if marker.is_whitespace() || marker.is_control() {
            return Err(ConfigError::BlankMarker);
        }
        Ok(Config {
            title: self.title.unwrap_or_default(),
            subtitle: self.subtitle,
            width,
            height,
            marker,
            tint: self.tint,
            fit_terminal: self.fit_terminal,
        })
    }
}

/// Ergonomic `?` on a builder chain.
impl From<ConfigBuilder> for Result<Config, ConfigError> {
    fn from(b: ConfigBuilder) -> Self {
        b.build()
    }
}

/// Parameters of the generated signal.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SimConfig {
    pub duration_s: f64,
    pub sample_rate: u32,
    pub frequency_hz: f64,
    /// Spectrum chart keeps bins at or below this frequency
    pub max_display_hz: f64,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            duration_s: DEFAULT_DURATION_S,
            sample_rate: DEFAULT_SAMPLE_RATE,
            frequency_hz: DEFAULT_FREQUENCY_HZ,
            max_display_hz: DEFAULT_MAX_DISPLAY_HZ,
        }
    }
}

impl SimConfig {
    /// `floor(duration × sample_rate)`
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn sample_count(&self) -> usize {
        (self.duration_s * f64::from(self.sample_rate)).floor().max(0.0) as usize
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let positive = |field: &'static str, value: f64| {
            if value.is_finite() && value > 0.0 {
                Ok(())
            } else {
                Err(ConfigError::InvalidSimulation { field, value })
            }
        };
        positive("duration", self.duration_s)?;
        positive("sample rate", f64::from(self.sample_rate))?;
        positive("frequency", self.frequency_hz)?;
        if !(self.max_display_hz.is_finite() && self.max_display_hz >= 0.0) {
            return Err(ConfigError::InvalidSimulation {
                field: "max display frequency",
                value: self.max_display_hz,
            });
        }
        match self.sample_count() {
            n if n < 2 => Err(ConfigError::TooFewSamples(n)),
            _ => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_defaults_to_seventy_by_fifteen() {
        let cfg = Config::builder().title("t").build().unwrap();
        assert_eq!((cfg.width, cfg.height, cfg.marker), (70, 15, '*'));
        assert!(cfg.tint.is_none());
        assert!(cfg.subtitle.is_none());
        assert!(!cfg.fit_terminal);
    }

    #[test]
    fn zero_dimensions_are_rejected() {
        assert_eq!(
            Config::builder().dims(0, 5).build().unwrap_err(),
            ConfigError::ZeroDimension("width")
        );
        assert_eq!(
            Config::builder().dims(5, 0).build().unwrap_err(),
            ConfigError::ZeroDimension("height")
        );
    }

    #[test]
    fn blank_marker_is_rejected() {
        assert_eq!(
            Config::builder().marker(' ').build().unwrap_err(),
            ConfigError::BlankMarker
        );
    }

    #[test]
    fn retitled_keeps_layout() {
        let cfg = Config::builder().dims(12, 4).marker('o').build().unwrap();
        let other = cfg.retitled("spectrum");
        assert_eq!(other.title, "spectrum");
        assert_eq!((other.width, other.height, other.marker), (12, 4, 'o'));
    }

    #[test]
    fn default_simulation_has_a_thousand_samples() {
        let sim = SimConfig::default();
        assert_eq!(sim.sample_count(), 1000);
        assert!(sim.validate().is_ok());
    }

    #[test]
    fn simulation_rejects_bad_values() {
        let sim = SimConfig {
            frequency_hz: f64::NAN,
            ..SimConfig::default()
        };
        assert!(matches!(
            sim.validate(),
            Err(ConfigError::InvalidSimulation { field: "frequency", .. })
        ));

        let sim = SimConfig {
            duration_s: 0.001,
            ..SimConfig::default()
        };
        assert_eq!(sim.validate(), Err(ConfigError::TooFewSamples(1)));

        let sim = SimConfig {
            max_display_hz: -1.0,
            ..SimConfig::default()
        };
        assert!(sim.validate().is_err());
    }
}
