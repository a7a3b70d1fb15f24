//! Sample series to fixed-size character grid.
//!
//! ### Workflow
//! 1. The value range is taken from the whole series; a flat series
//!    normalises to 0 everywhere and sits on the bottom row.
//! 2. Each of the `width` columns point-samples one source index, evenly
//!    spaced over `[0, N-1]` and rounded down.  Narrow charts drop points,
//!    wide charts repeat them.  Nothing is averaged or interpolated.
//! 3. The sampled value is normalised and mapped to a row, top row = max.
//!
//! A [`Chart`] stores one row index per column, so "exactly one marker per
//! column" holds by construction.

use crate::core::{
    bounds::{ValueRange, fit_width, label_width, terminal_geometry},
    config::Config,
    error::ConfigError,
    series::Series,
};

/// Values printed beside the top, middle and bottom rows.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AxisLabels {
    pub max: f64,
    pub mid: f64,
    pub min: f64,
}

/// Rasterized series.
#[derive(Clone, Debug, PartialEq)]
pub struct Chart {
    width: usize,
    height: usize,
    /// `marks[c]` is the row holding column `c`'s marker
    marks: Vec<usize>,
    range: ValueRange,
}

/// Source index sampled by column `col` of a `width`-wide chart over `n`
/// samples.
#[inline]
#[must_use]
pub fn column_index(col: usize, width: usize, n: usize) -> usize {
    if width > 1 {
        col * (n - 1) / (width - 1)
    } else {
        0
    }
}

/// Row for a value already normalised to `[0, 1]`; row 0 is the top.
#[inline]
#[must_use]
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_precision_loss
)]
pub fn value_row(norm: f64, height: usize) -> usize {
    let bottom = height - 1;
    let r = (bottom as f64 * (1.0 - norm)).floor().max(0.0) as usize;
    r.min(bottom)
}

impl Chart {
    /// Rasterize `series` onto a `width` × `height` grid.
    pub fn rasterize(series: &Series, width: usize, height: usize) -> Result<Self, ConfigError> {
        if width == 0 {
            return Err(ConfigError::ZeroDimension("width"));
        }
        if height == 0 {
            return Err(ConfigError::ZeroDimension("height"));
        }

        Ok(Self::build(series, ValueRange::of(series), width, height))
    }

    /// Rasterize with the dimensions of an already validated [`Config`].
    ///
    /// With `fit_terminal` the width is whatever the terminal leaves after
    /// this series' labels and the gutter.
    #[must_use]
    pub fn with_config(series: &Series, cfg: &Config) -> Self {
        let range = ValueRange::of(series);
        let width = if cfg.fit_terminal {
            let w = fit_width(terminal_geometry(), label_width(&range));
            log::debug!("fit width to terminal: {w} columns");
            w
        } else {
            cfg.width
        };
        Self::build(series, range, width, cfg.height)
    }

    fn build(series: &Series, range: ValueRange, width: usize, height: usize) -> Self {
        let values = series.values();
        let marks = (0..width)
            .map(|c| {
                let v = values[column_index(c, width, values.len())];
                value_row(range.normalize(v), height)
            })
            .collect();

        Self {
            width,
            height,
            marks,
            range,
        }
    }

    #[inline]
    #[must_use]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    #[must_use]
    pub fn height(&self) -> usize {
        self.height
    }

    #[inline]
    #[must_use]
    pub fn range(&self) -> &ValueRange {
        &self.range
    }

    /// Marker row of every column, left to right.
    #[inline]
    #[must_use]
    pub fn marks(&self) -> &[usize] {
        &self.marks
    }

    #[inline]
    #[must_use]
    pub fn is_marked(&self, row: usize, col: usize) -> bool {
        self.marks.get(col) == Some(&row)
    }

    #[must_use]
    pub fn labels(&self) -> AxisLabels {
        AxisLabels {
            max: self.range.max,
            mid: self.range.mid(),
            min: self.range.min,
        }
    }

    /// Label value shown on `row`, if any.  Top wins over bottom, bottom over
    /// middle, which only matters for charts 1 or 2 rows tall.
    #[must_use]
    pub fn row_label(&self, row: usize) -> Option<f64> {
        if row == 0 {
            Some(self.range.max)
        } else if row == self.height - 1 {
            Some(self.range.min)
        } else if row == self.height / 2 {
            Some(self.range.mid())
        } else {
            None
        }
    }

    /// Columns of `row` with `marker` where a point landed, blanks elsewhere.
    #[must_use]
    pub fn row_text(&self, row: usize, marker: char) -> String {
        self.marks
            .iter()
            .map(|&r| if r == row { marker } else { ' ' })
            .collect()
    }
}
