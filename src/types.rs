//! Shared types used across the band player
//!
//! This module defines domain-specific types that keep units and
//! ownership explicit throughout the codebase.

use core::fmt;

use crate::config::FULL_SCALE;

/// Frequency in Hertz
///
/// Catalog pass-frequencies are whole Hz values; validation against the
/// sample rate happens in the filter designer, not here.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Frequency(u32);

impl Frequency {
    /// Create a frequency from Hz
    #[must_use]
    pub const fn from_hz(hz: u32) -> Self {
        Self(hz)
    }

    /// Create a frequency from kHz
    #[must_use]
    pub const fn from_khz(khz: u32) -> Self {
        Self(khz * 1000)
    }

    /// Get the frequency in Hz
    #[must_use]
    pub const fn as_hz(self) -> u32 {
        self.0
    }

    /// Get the frequency in Hz as floating point
    #[must_use]
    pub fn as_hz_f64(self) -> f64 {
        f64::from(self.0)
    }

    /// Get the frequency in kHz as floating point
    #[must_use]
    pub fn as_khz_f64(self) -> f64 {
        f64::from(self.0) / 1000.0
    }
}

impl fmt::Debug for Frequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Frequency({} Hz)", self.0)
    }
}

impl fmt::Display for Frequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.1} kHz", self.as_khz_f64())
    }
}

/// Quantized waveform ready for playback
///
/// Every sample lies in `[-FULL_SCALE, FULL_SCALE]`. The waveform is moved
/// into the playback driver; nothing else keeps a reference to it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Waveform {
    samples: Vec<i16>,
    sample_rate: u32,
}

impl Waveform {
    /// Wrap quantized samples at the given rate
    #[must_use]
    pub fn new(samples: Vec<i16>, sample_rate: u32) -> Self {
        debug_assert!(samples.iter().all(|&s| s != i16::MIN));
        Self {
            samples,
            sample_rate,
        }
    }

    /// Samples
    #[must_use]
    pub fn samples(&self) -> &[i16] {
        &self.samples
    }

    /// Sample rate in Hz
    #[must_use]
    pub const fn sample_rate(&self) -> u32 {
        self.sample_rate
    }

    /// Number of samples
    #[must_use]
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// True when there are no samples
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Largest absolute sample value
    #[must_use]
    pub fn peak(&self) -> i16 {
        self.samples.iter().map(|s| s.abs()).max().unwrap_or(0)
    }

    /// True when at least one sample reaches full scale
    #[must_use]
    pub fn reaches_full_scale(&self) -> bool {
        self.peak() == FULL_SCALE
    }

    /// Playback length in seconds
    #[must_use]
    pub fn duration_secs(&self) -> f64 {
        if self.sample_rate == 0 {
            0.0
        } else {
            self.samples.len() as f64 / f64::from(self.sample_rate)
        }
    }

    /// Take the samples, consuming the waveform
    #[must_use]
    pub fn into_samples(self) -> Vec<i16> {
        self.samples
    }
}
