//! System configuration and signal constants
//!
//! This module defines the fixed parameters of the band player.
//! The recording format, mixer offset and filter order are centralized here;
//! everything downstream receives them through [`PipelineConfig`].

/// Sample rate of the input recording (10 kHz)
pub const SAMPLE_RATE_HZ: u32 = 10_000;

/// Offset applied by the heterodyne mixer to reach the audible range (5 kHz)
pub const SHIFT_FREQUENCY_HZ: f64 = 5_000.0;

/// Number of samples in the input recording
pub const SAMPLE_COUNT: usize = 48_000;

/// Butterworth low-pass order
pub const FILTER_ORDER: usize = 6;

/// Largest magnitude of a quantized sample (symmetric 16-bit range)
pub const FULL_SCALE: i16 = 32_767;

/// Default location of the recording, one sample per line
pub const DEFAULT_INPUT_PATH: &str = "input.txt";

/// Longest rendered menu line in bytes
pub const MENU_LINE_LEN: usize = 96;

/// Parameters that flow through one pipeline run
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PipelineConfig {
    /// Sample rate of the recording in Hz
    pub sample_rate_hz: u32,
    /// Mixer offset in Hz
    pub shift_hz: f64,
    /// Low-pass order
    pub filter_order: usize,
}

impl PipelineConfig {
    /// Nyquist frequency for the configured sample rate
    #[must_use]
    pub fn nyquist_hz(&self) -> f64 {
        f64::from(self.sample_rate_hz) / 2.0
    }

    /// Same configuration at a different sample rate
    #[must_use]
    pub const fn with_sample_rate(self, sample_rate_hz: u32) -> Self {
        Self {
            sample_rate_hz,
            ..self
        }
    }

    /// Same configuration with a different mixer offset
    #[must_use]
    pub const fn with_shift(self, shift_hz: f64) -> Self {
        Self { shift_hz, ..self }
    }

    /// Same configuration with a different filter order
    #[must_use]
    pub const fn with_filter_order(self, filter_order: usize) -> Self {
        Self {
            filter_order,
            ..self
        }
    }
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            sample_rate_hz: SAMPLE_RATE_HZ,
            shift_hz: SHIFT_FREQUENCY_HZ,
            filter_order: FILTER_ORDER,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_matches_constants() {
        let config = PipelineConfig::default();
        assert_eq!(config.sample_rate_hz, SAMPLE_RATE_HZ);
        assert_eq!(config.shift_hz, SHIFT_FREQUENCY_HZ);
        assert_eq!(config.filter_order, FILTER_ORDER);
    }

    #[test]
    fn nyquist_is_half_rate() {
        assert_eq!(PipelineConfig::default().nyquist_hz(), 5_000.0);
        let wide = PipelineConfig::default().with_sample_rate(1_000_000);
        assert_eq!(wide.nyquist_hz(), 500_000.0);
    }
}
