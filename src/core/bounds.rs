//! Geometry helpers: value range, label width + terminal size plumbing.

use terminal_size::{Height, Width, terminal_size};

use crate::core::{
    constants::{DECIMAL_PRECISION, LABEL_GUTTER, LABEL_WIDTH, MIN_FIT_WIDTH},
    series::Series,
};

/// Vertical extent of a series.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ValueRange {
    pub min: f64,
    pub max: f64,
    /// `(max - min) / 2`, taken as `max/2 - min/2` so it stays finite for
    /// any pair of finite samples.  `0.5` for a flat series, which then
    /// normalises to 0 and lands on the bottom row.
    pub half_span: f64,
}

impl ValueRange {
    #[must_use]
    pub fn of(series: &Series) -> Self {
        let (min, max) = series.extrema();
        let half_span = max / 2.0 - min / 2.0;
        Self {
            min,
            max,
            half_span: if half_span == 0.0 { 0.5 } else { half_span },
        }
    }

    #[inline]
    #[must_use]
    pub fn mid(&self) -> f64 {
        self.max / 2.0 + self.min / 2.0
    }

    /// `v` mapped into `[0, 1]` for values inside the range.
    #[inline]
    #[must_use]
    pub fn normalize(&self, v: f64) -> f64 {
        (v / 2.0 - self.min / 2.0) / self.half_span
    }
}

/// Current terminal geometry (80×30 fallback).
#[inline]
#[must_use]
pub fn terminal_geometry() -> (Width, Height) {
    terminal_size().unwrap_or((Width(80), Height(30)))
}

/// Columns left for plotting once labels and the ` |` gutter are taken.
#[inline]
#[must_use]
pub fn fit_width((w, _): (Width, Height), label_width: usize) -> usize {
    usize::from(w.0)
        .saturating_sub(label_width + LABEL_GUTTER)
        .max(MIN_FIT_WIDTH)
}

/// How wide will the value labels be for this range?  Never narrower than
/// [`LABEL_WIDTH`].
#[must_use]
pub fn label_width(range: &ValueRange) -> usize {
    [range.max, range.mid(), range.min]
        .iter()
        .map(|v| format!("{v:.p$}", p = DECIMAL_PRECISION).len())
        .fold(LABEL_WIDTH, usize::max)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn series(v: &[f64]) -> Series {
        Series::try_from(v).unwrap()
    }

    #[test]
    fn flat_series_normalises_to_zero() {
        let r = ValueRange::of(&series(&[5.0, 5.0, 5.0]));
        assert_eq!((r.min, r.max, r.half_span), (5.0, 5.0, 0.5));
        assert_eq!(r.normalize(5.0), 0.0);
    }

    #[test]
    fn span_and_mid() {
        let r = ValueRange::of(&series(&[-1.0, 0.25, 3.0]));
        assert_eq!(r.half_span, 2.0);
        assert_eq!(r.mid(), 1.0);
        assert_eq!(r.normalize(3.0), 1.0);
    }

    #[test]
    fn extreme_magnitudes_stay_finite() {
        let r = ValueRange::of(&series(&[-1e308, 0.0, 1e308]));
        assert!(r.half_span.is_finite());
        assert_eq!(r.mid(), 0.0);
        assert_eq!(r.normalize(-1e308), 0.0);
        assert_eq!(r.normalize(0.0), 0.5);
        assert_eq!(r.normalize(1e308), 1.0);

        let top = ValueRange::of(&series(&[f64::MAX, f64::MAX / 2.0]));
        assert!(top.mid().is_finite());
        assert_eq!(top.normalize(f64::MAX), 1.0);
    }

    #[test]
    fn labels_widen_for_large_values() {
        let small = ValueRange::of(&series(&[-1.0, 1.0]));
        assert_eq!(label_width(&small), LABEL_WIDTH);
        let big = ValueRange::of(&series(&[-123_456.0, 1.0]));
        // "-123456.00"
        assert_eq!(label_width(&big), 10);
    }

    #[test]
    fn fit_width_leaves_room_for_labels() {
        assert_eq!(fit_width((Width(80), Height(24)), 7), 71);
        assert_eq!(fit_width((Width(5), Height(24)), 7), MIN_FIT_WIDTH);
    }
}
