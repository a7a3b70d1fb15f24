//! A collection of constants.

/// Default chart width in columns
pub const DEFAULT_WIDTH: usize = 70;
/// Default chart height in rows
pub const DEFAULT_HEIGHT: usize = 15;

/// Character placed on the grid for each sampled point
pub const DEFAULT_MARKER: char = '*';

/// Minimum width of the value labels on the left of each row.
///
/// `-1.00` and `1234.56` both fit, wider numbers grow the field.
pub const LABEL_WIDTH: usize = 7;
/// Labels are printed with two decimals.
///
/// 0.5 becomes 0.50
pub const DECIMAL_PRECISION: usize = 2;

/// The ` |` between a label and its row
pub const LABEL_GUTTER: usize = 2;

/// `--fit` never shrinks a chart below this many columns
pub const MIN_FIT_WIDTH: usize = 10;

// --- Simulation defaults ---

/// Length of the generated signal in seconds
pub const DEFAULT_DURATION_S: f64 = 1.0;
/// Samples per second
pub const DEFAULT_SAMPLE_RATE: u32 = 1000;
/// Frequency of the generated waveform in Hz
pub const DEFAULT_FREQUENCY_HZ: f64 = 3.0;
/// Highest frequency shown on the spectrum chart
pub const DEFAULT_MAX_DISPLAY_HZ: f64 = 50.0;
