//! Signal side: waveform generation + frequency analysis.

pub mod spectrum;
pub mod waveform;

pub use spectrum::Spectrum;
pub use waveform::{UnknownWaveform, Waveform, time_vector};
