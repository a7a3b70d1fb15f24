//! One-sided magnitude spectrum via `rustfft`.
//!
//! Magnitudes are scaled by `2 / N` so a unit sine shows up as a peak of
//! about 1.0 at its frequency.  The DC bin gets the same factor.

use rustfft::{FftPlanner, num_complex::Complex};

use crate::core::{error::ChartError, series::Series};

/// Parallel frequency / magnitude vectors, ascending in frequency.
#[derive(Debug, Clone, PartialEq)]
pub struct Spectrum {
    freqs: Vec<f64>,
    mags: Vec<f64>,
}

impl Spectrum {
    /// Forward FFT of `signal`; keeps the positive-frequency half
    /// (`k < N / 2`).
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn of(signal: &Series, sample_rate: u32) -> Self {
        let n = signal.len();
        let mut buffer: Vec<Complex<f64>> = signal
            .values()
            .iter()
            .map(|&v| Complex::new(v, 0.0))
            .collect();

        let mut planner = FftPlanner::<f64>::new();
        let fft = planner.plan_fft_forward(n);
        fft.process(&mut buffer);

        let half = n / 2;
        let scale = 2.0 / n as f64;
        let bin_hz = f64::from(sample_rate) / n as f64;

        let freqs = (0..half).map(|k| k as f64 * bin_hz).collect();
        let mags = buffer[..half].iter().map(|c| c.norm() * scale).collect();
        Self { freqs, mags }
    }

    /// Drop every bin above `max_hz`.
    #[must_use]
    pub fn up_to(mut self, max_hz: f64) -> Self {
        let keep = self.freqs.partition_point(|&f| f <= max_hz);
        self.freqs.truncate(keep);
        self.mags.truncate(keep);
        self
    }

    #[inline]
    #[must_use]
    pub fn freqs(&self) -> &[f64] {
        &self.freqs
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.mags.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.mags.is_empty()
    }

    /// Strongest bin above DC as `(frequency, magnitude)`.
    #[must_use]
    pub fn peak(&self) -> Option<(f64, f64)> {
        self.freqs
            .iter()
            .copied()
            .zip(self.mags.iter().copied())
            .skip(1)
            .max_by(|a, b| a.1.total_cmp(&b.1))
    }

    /// Magnitudes as a series ready for the rasterizer.
    pub fn magnitudes(&self) -> Result<Series, ChartError> {
        Series::new(self.mags.clone())
    }
}
