use std::{
    io::{Write, stdin, stdout},
    time::Instant,
};

use crate::{
    core::{
        color::Tint,
        config::{Config, SimConfig},
        data::read_series_from_path,
        error::ChartError,
    },
    render::{Chart, Renderer},
    signal::{Spectrum, Waveform},
};

use super::{
    menu::run_menu,
    parse::{ChartArgs, PlotArgs, WaveArgs},
};

/// Layout options → validated chart config (title filled in per chart).
pub(crate) fn base_config(a: &ChartArgs) -> Result<Config, ChartError> {
    let tint = a.color.as_deref().map(Tint::parse).transpose()?;
    Ok(Config::builder()
        .dims(a.width, a.height)
        .marker(a.marker)
        .tint(tint)
        .fit_terminal(a.fit)
        .build()?)
}

/// Time-domain chart followed by the spectrum chart of `wave`.
pub fn show_waveform<W: Write>(
    out: &mut W,
    wave: Waveform,
    sim: &SimConfig,
    cfg: &Config,
) -> Result<(), ChartError> {
    let renderer = Renderer::new();

    let t_gen = Instant::now();
    let signal = wave.generate(sim)?;
    let dur_gen = t_gen.elapsed().as_micros();

    let time_cfg = cfg.retitled(format!("Time Domain - {}", wave.name()));
    renderer.render_to(out, &time_cfg, &Chart::with_config(&signal, &time_cfg))?;

    let t_fft = Instant::now();
    let spectrum = Spectrum::of(&signal, sim.sample_rate).up_to(sim.max_display_hz);
    let dur_fft = t_fft.elapsed().as_micros();
    if let Some((hz, mag)) = spectrum.peak() {
        log::debug!("{} spectrum peak: {mag:.3} at {hz:.2} Hz", wave.name());
    }

    let t_render = Instant::now();
    let freq_cfg = cfg.retitled(format!("Frequency Domain - {} (magnitude)", wave.name()));
    let chart = Chart::with_config(&spectrum.magnitudes()?, &freq_cfg);
    renderer.render_to(out, &freq_cfg, &chart)?;
    let dur_render = t_render.elapsed().as_micros();

    log::debug!(
        "generate {dur_gen} µs ({} samples)   fft {dur_fft} µs ({} bins ≤ {} Hz)   spectrum chart {dur_render} µs",
        signal.len(),
        spectrum.len(),
        sim.max_display_hz
    );
    Ok(())
}

pub fn menu(sim: &SimConfig, chart: &ChartArgs) -> Result<(), ChartError> {
    sim.validate()?;
    let cfg = base_config(chart)?;
    let mut out = stdout().lock();
    run_menu(stdin().lock(), &mut out, sim, &cfg)
}

pub fn wave(a: &WaveArgs, sim: &SimConfig, chart: &ChartArgs) -> Result<(), ChartError> {
    let cfg = base_config(chart)?;
    let mut out = stdout().lock();
    show_waveform(&mut out, a.waveform, sim, &cfg)
}

pub fn plot(a: &PlotArgs, sim: &SimConfig, chart: &ChartArgs) -> Result<(), ChartError> {
    let t_ingest = Instant::now();
    let series = read_series_from_path(&a.file, a.column)?;
    log::debug!(
        "ingest: {} µs   ({} samples)",
        t_ingest.elapsed().as_micros(),
        series.len()
    );

    let source = if a.file == "-" { "stdin" } else { a.file.as_str() };
    let base = base_config(chart)?;

    let (series, title, subtitle) = if a.spectrum {
        let spectrum = Spectrum::of(&series, sim.sample_rate).up_to(sim.max_display_hz);
        let subtitle = format!(
            "{} bins ≤ {} Hz from {source} at {} Hz",
            spectrum.len(),
            sim.max_display_hz,
            sim.sample_rate
        );
        (
            spectrum.magnitudes()?,
            format!("{} (magnitude)", a.title),
            subtitle,
        )
    } else {
        let subtitle = format!("{} samples from {source}", series.len());
        (series, a.title.clone(), subtitle)
    };
    let cfg = Config {
        subtitle: Some(subtitle),
        ..base.retitled(title)
    };

    Renderer::new().render(&cfg, &Chart::with_config(&series, &cfg))
}

/// Print handy invocations for new users.
pub fn examples() {
    let bin = "fourier-demo";
    println!(
        "
Example invocations
-------------------
• Interactive menu  : {bin}
• One waveform      : {bin} wave square
• Narrow chart      : {bin} wave sine --width 40 --height 9
• Terminal width    : {bin} wave sawtooth --fit
• Faster signal     : {bin} wave sine --frequency 12 --max-freq 100
• Colored markers   : {bin} wave sine --color cyan --marker o
• Plot a CSV column : {bin} plot data.csv --column 1 --title \"Temperature\"
• Spectrum of data  : {bin} plot samples.txt --spectrum --sample-rate 8000
• Debug timings     : {bin} wave square --debug
"
    );
}
