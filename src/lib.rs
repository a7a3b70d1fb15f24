//! Public-facing crate root – re-exports + one-shot helpers.

pub mod cli;
pub mod core;
pub mod render;
pub mod signal;

pub use crate::core::{
    color::{ColorError, Tint},
    config::{Config, ConfigBuilder, SimConfig},
    constants::{DECIMAL_PRECISION, DEFAULT_HEIGHT, DEFAULT_WIDTH},
    error::{ChartError, ConfigError},
    series::Series,
};

pub use render::{AxisLabels, Chart, Renderer};
pub use signal::{Spectrum, Waveform};

/// Chart `values` as text, `width` × `height` plot area.
pub fn render_series(
    values: &[f64],
    title: &str,
    width: usize,
    height: usize,
) -> Result<String, ChartError> {
    let series = Series::try_from(values)?;
    let cfg = Config::builder()
        .title(title)
        .dims(width, height)
        .build()?;
    Ok(Renderer::new().render_to_string(&cfg, &Chart::with_config(&series, &cfg)))
}

/// Convenience function: prints a **static** in-memory series to stdout at
/// the default 70×15 size.
pub fn plot_series(values: &[f64], title: &str) -> Result<(), ChartError> {
    let series = Series::try_from(values)?;
    let cfg = Config::builder().title(title).build()?;
    Renderer::new().render(&cfg, &Chart::with_config(&series, &cfg))
}
