//! Aggregates the “business logic” layer.

pub mod bounds;
pub mod color;
pub mod config;
pub mod constants;
pub mod data;
pub mod error;
pub mod series;

// re-export frequently-used items for convenience
pub use bounds::ValueRange;
pub use color::{ColorError, Tint};
pub use config::{Config, ConfigBuilder, SimConfig};
pub use constants::{DECIMAL_PRECISION, DEFAULT_HEIGHT, DEFAULT_MARKER, DEFAULT_WIDTH, LABEL_WIDTH};
pub use data::{ParseSeriesError, read_series, read_series_from_path};
pub use error::{ChartError, ConfigError};
pub use series::Series;
