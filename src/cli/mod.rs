mod handlers;
pub mod menu;
pub mod parse;

use clap::Parser;
use log::LevelFilter;
pub use parse::Cli;

use crate::core::{config::SimConfig, error::ChartError};

pub use handlers::show_waveform;

/// stderr logger; `RUST_LOG` wins unless `--debug` is given.
fn init_logging(debug: bool) {
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"));
    if debug {
        builder.filter_level(LevelFilter::Debug);
    }
    // a second init (tests, embedding) keeps the first logger
    let _ = builder.try_init();
}

pub fn run() -> Result<(), ChartError> {
    let cli = parse::Cli::parse();
    init_logging(cli.debug);
    let sim = SimConfig::from(&cli.sim);
    log::debug!("{sim:?}");

    match cli.cmd.unwrap_or(parse::Command::Menu) {
        parse::Command::Menu => handlers::menu(&sim, &cli.chart),
        parse::Command::Wave(a) => handlers::wave(&a, &sim, &cli.chart),
        parse::Command::Plot(a) => handlers::plot(&a, &sim, &cli.chart),
        parse::Command::Examples => {
            handlers::examples();
            Ok(())
        }
    }
}
