//! Text chart printer.
//!
//! ```text
//!
//!   === Title ===
//!
//!    1.00 |      **
//!         |    **  **
//!    0.00 |  **      **
//!         | *          *
//!   -1.00 |*            *
//!         +--------------
//! ```
//!
//! The whole chart is assembled in one `String` and handed to the writer in a
//! single `write_all`.

use std::io::{Write, stdout};

use crate::{
    core::{bounds::label_width, config::Config, constants::DECIMAL_PRECISION, error::ChartError},
    render::raster::Chart,
};

/// Row prefix between label and plot area
const GUTTER: &str = " |";
const AXIS_CORNER: char = '+';
const AXIS_RULE: char = '-';

// --- Helpers ---

/// Right-aligned label, or blanks of the same width.
fn push_label(buf: &mut String, value: Option<f64>, width: usize) {
    match value {
        Some(v) => buf.push_str(&format!("{v:>width$.p$}", p = DECIMAL_PRECISION)),
        None => buf.push_str(&" ".repeat(width)),
    }
}

/// Row with markers wrapped in the configured tint.
fn push_row(buf: &mut String, chart: &Chart, row: usize, cfg: &Config) {
    let text = chart.row_text(row, cfg.marker);
    match &cfg.tint {
        None => buf.push_str(&text),
        Some(tint) => {
            let marker = cfg.marker.to_string();
            let painted = tint.paint(&marker);
            buf.push_str(&text.replace(cfg.marker, &painted));
        }
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct Renderer;

impl Renderer {
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Build the printable chart: title block, one line per row, axis line.
    #[must_use]
    pub fn render_to_string(&self, cfg: &Config, chart: &Chart) -> String {
        let label_w = label_width(chart.range());
        let line_len = label_w + GUTTER.len() + chart.width() + 1;
        let mut buf = String::with_capacity(line_len * (chart.height() + 6));

        // --- title ---
        buf.push_str(&format!("\n  === {} ===\n", cfg.title));
        if let Some(sub) = &cfg.subtitle {
            buf.push_str(&format!("  {sub}\n"));
        }
        buf.push('\n');

        // --- rows ---
        for row in 0..chart.height() {
            push_label(&mut buf, chart.row_label(row), label_w);
            buf.push_str(GUTTER);
            push_row(&mut buf, chart, row, cfg);
            buf.push('\n');
        }

        // --- x axis ---
        buf.push_str(&" ".repeat(label_w + 1));
        buf.push(AXIS_CORNER);
        buf.extend(std::iter::repeat_n(AXIS_RULE, chart.width()));
        buf.push('\n');
        buf
    }

    /// Write the chart to `out`.
    pub fn render_to<W: Write>(
        &self,
        out: &mut W,
        cfg: &Config,
        chart: &Chart,
    ) -> Result<(), ChartError> {
        out.write_all(self.render_to_string(cfg, chart).as_bytes())?;
        out.flush()?;
        Ok(())
    }

    /// Write the chart to stdout.
    pub fn render(&self, cfg: &Config, chart: &Chart) -> Result<(), ChartError> {
        let mut term = stdout().lock();
        self.render_to(&mut term, cfg, chart)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{color::Tint, series::Series};

    fn render(values: &[f64], cfg: &Config) -> String {
        let chart = Chart::with_config(&Series::try_from(values).unwrap(), cfg);
        Renderer::new().render_to_string(cfg, &chart)
    }

    #[test]
    fn three_by_three_layout() {
        let cfg = Config::builder().title("Diag").dims(3, 3).build().unwrap();
        let out = render(&[-1.0, 0.0, 1.0], &cfg);
        let expected = "\n  === Diag ===\n\n   \
                        1.00 |  *\n   \
                        0.00 | * \n  \
                        -1.00 |*  \n        \
                        +---\n";
        assert_eq!(out, expected);
    }

    #[test]
    fn blank_rows_get_blank_labels() {
        let cfg = Config::builder().title("T").dims(4, 5).build().unwrap();
        let out = render(&[0.0, 4.0], &cfg);
        let lines: Vec<&str> = out.lines().skip(3).collect();
        assert_eq!(lines.len(), 6);
        assert_eq!(lines[0], "   4.00 |   *");
        assert_eq!(lines[1], "        |    ");
        assert_eq!(lines[2], "   2.00 |    ");
        assert_eq!(lines[4], "   0.00 |*** ");
        assert_eq!(lines[5], "        +----");
    }

    #[test]
    fn wide_labels_keep_rows_aligned() {
        let cfg = Config::builder().title("Big").dims(2, 3).build().unwrap();
        let out = render(&[-100_000.0, 100_000.0], &cfg);
        let lines: Vec<&str> = out.lines().skip(3).collect();
        assert_eq!(lines[0], " 100000.00 | *");
        assert_eq!(lines[2], "-100000.00 |* ");
        assert_eq!(lines[3], "           +--");
    }

    #[test]
    fn subtitle_and_tint() {
        let cfg = Config::builder()
            .title("T")
            .subtitle_opt(Some("peak 3.00 Hz"))
            .dims(2, 2)
            .tint(Some(Tint::Basic(31)))
            .build()
            .unwrap();
        let out = render(&[0.0, 1.0], &cfg);
        assert!(out.starts_with("\n  === T ===\n  peak 3.00 Hz\n\n"));
        assert!(out.contains("   1.00 | \x1b[31m*\x1b[0m\n"));
    }

    #[test]
    fn render_to_writer() {
        let cfg = Config::builder().title("W").dims(1, 1).build().unwrap();
        let chart = Chart::with_config(&Series::try_from(&[7.0][..]).unwrap(), &cfg);
        let mut out = Vec::new();
        Renderer::new().render_to(&mut out, &cfg, &chart).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "\n  === W ===\n\n   7.00 |*\n        +-\n"
        );
    }
}
