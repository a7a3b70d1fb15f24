//! Validated sample series.

use crate::core::error::ChartError;

/// Ordered, non-empty run of finite samples.
///
/// Either a time-domain signal or a magnitude spectrum; the rasterizer does
/// not care which.
#[derive(Debug, Clone, PartialEq)]
pub struct Series(Vec<f64>);

impl Series {
    /// Rejects empty input and any NaN / infinity.
    pub fn new(values: Vec<f64>) -> Result<Self, ChartError> {
        if values.is_empty() {
            return Err(ChartError::EmptySeries);
        }
        if let Some((index, &value)) = values.iter().enumerate().find(|(_, v)| !v.is_finite()) {
            return Err(ChartError::NonFinite { index, value });
        }
        Ok(Self(values))
    }

    #[inline]
    #[must_use]
    pub fn values(&self) -> &[f64] {
        &self.0
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always false for a constructed series.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// `(min, max)` of the samples.
    #[must_use]
    pub fn extrema(&self) -> (f64, f64) {
        self.0
            .iter()
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &v| {
                (lo.min(v), hi.max(v))
            })
    }
}

impl TryFrom<Vec<f64>> for Series {
    type Error = ChartError;

    fn try_from(values: Vec<f64>) -> Result<Self, Self::Error> {
        Self::new(values)
    }
}

impl TryFrom<&[f64]> for Series {
    type Error = ChartError;

    fn try_from(values: &[f64]) -> Result<Self, Self::Error> {
        Self::new(values.to_vec())
    }
}

impl From<Series> for Vec<f64> {
    fn from(s: Series) -> Self {
        s.0
    }
}
