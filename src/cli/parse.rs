use clap::{Args, Parser, Subcommand};

use crate::{
    core::{
        config::SimConfig,
        constants::{
            DEFAULT_DURATION_S, DEFAULT_FREQUENCY_HZ, DEFAULT_HEIGHT, DEFAULT_MARKER,
            DEFAULT_MAX_DISPLAY_HZ, DEFAULT_SAMPLE_RATE, DEFAULT_WIDTH,
        },
    },
    signal::Waveform,
};

/// Top-level CLI structure.
#[derive(Parser, Debug)]
#[command(
    name = "fourier-demo",
    version,
    about = "Waveforms and their frequency spectra as text charts"
)]
pub struct Cli {
    /// Runs the interactive menu when omitted
    #[command(subcommand)]
    pub cmd: Option<Command>,

    #[command(flatten)]
    pub chart: ChartArgs,

    #[command(flatten)]
    pub sim: SimArgs,

    /// Log timings and sample counts to stderr
    #[arg(long, global = true)]
    pub debug: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Interactive waveform menu
    Menu,
    /// Chart one waveform and its spectrum, then exit
    Wave(WaveArgs),
    /// Chart a column of numbers from a file
    Plot(PlotArgs),
    /// Print example invocations
    Examples,
}

/// Chart layout shared by every subcommand.
#[derive(Args, Debug, Clone)]
pub struct ChartArgs {
    /// Plot columns
    #[arg(long, global = true, default_value_t = DEFAULT_WIDTH)]
    pub width: usize,
    /// Plot rows
    #[arg(long, global = true, default_value_t = DEFAULT_HEIGHT)]
    pub height: usize,
    /// Character drawn for each point
    #[arg(long, global = true, default_value_t = DEFAULT_MARKER)]
    pub marker: char,
    /// Marker color (name or `#RRGGBB`); plain text when omitted
    #[arg(long, global = true)]
    pub color: Option<String>,
    /// Size each chart to the terminal width (minus its labels) instead of `--width`
    #[arg(long, global = true)]
    pub fit: bool,
}

/// Signal generation parameters.
#[derive(Args, Debug, Clone)]
pub struct SimArgs {
    /// Signal length in seconds
    #[arg(long, global = true, default_value_t = DEFAULT_DURATION_S)]
    pub duration: f64,
    /// Samples per second
    #[arg(long, global = true, default_value_t = DEFAULT_SAMPLE_RATE)]
    pub sample_rate: u32,
    /// Waveform frequency in Hz
    #[arg(long, global = true, default_value_t = DEFAULT_FREQUENCY_HZ)]
    pub frequency: f64,
    /// Highest frequency on the spectrum chart
    #[arg(long, global = true, default_value_t = DEFAULT_MAX_DISPLAY_HZ)]
    pub max_freq: f64,
}

impl From<&SimArgs> for SimConfig {
    fn from(a: &SimArgs) -> Self {
        Self {
            duration_s: a.duration,
            sample_rate: a.sample_rate,
            frequency_hz: a.frequency,
            max_display_hz: a.max_freq,
        }
    }
}

/// `fourier-demo wave …`
#[derive(Args, Debug)]
pub struct WaveArgs {
    /// sine, square or sawtooth
    #[arg(value_name = "WAVEFORM")]
    pub waveform: Waveform,
}

/// `fourier-demo plot …`
#[derive(Args, Debug)]
pub struct PlotArgs {
    /// Input path (use `-` for stdin)
    #[arg(value_name = "FILE", default_value = "-")]
    pub file: String,

    /// Zero-based CSV column to plot
    #[arg(short, long, default_value_t = 0)]
    pub column: usize,

    /// Chart title
    #[arg(short, long, default_value = "Series")]
    pub title: String,

    /// Chart the magnitude spectrum (uses `--sample-rate`, `--max-freq`)
    #[arg(long)]
    pub spectrum: bool,
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn cli_is_well_formed() {
        Cli::command().debug_assert();
    }

    #[test]
    fn no_subcommand_means_menu_with_defaults() {
        let cli = Cli::try_parse_from(["fourier-demo"]).unwrap();
        assert!(cli.cmd.is_none());
        assert_eq!((cli.chart.width, cli.chart.height), (70, 15));
        assert_eq!(SimConfig::from(&cli.sim), SimConfig::default());
    }

    #[test]
    fn wave_with_global_options_after_subcommand() {
        let cli =
            Cli::try_parse_from(["fourier-demo", "wave", "saw", "--width", "40", "--frequency", "5"])
                .unwrap();
        match cli.cmd {
            Some(Command::Wave(a)) => assert_eq!(a.waveform, Waveform::Sawtooth),
            other => panic!("unexpected {other:?}"),
        }
        assert_eq!(cli.chart.width, 40);
        assert_eq!(cli.sim.frequency, 5.0);
    }

    #[test]
    fn unknown_waveform_is_a_parse_error() {
        assert!(Cli::try_parse_from(["fourier-demo", "wave", "triangle"]).is_err());
    }
}
