//! Audio DSP Processing Chain
//!
//! Turns the raw recording into a playable rendering of one band:
//!
//! ```text
//! recording ─► low-pass design ─► zero-phase filter ─► mixer ─► quantizer ─► waveform
//! ```
//!
//! Each stage consumes the full output of the previous one before the next
//! begins. The recording is only borrowed; every intermediate buffer belongs
//! to a single run.

use std::time::Instant;

use tracing::debug;

use super::filter_design::design_lowpass;
use super::oscillator::LocalOscillator;
use super::quantize::quantize;
use crate::config::PipelineConfig;
use crate::error::DspError;
use crate::types::{Frequency, Waveform};

/// Band rendering pipeline
#[derive(Clone, Copy, Debug, Default)]
pub struct AudioChain {
    config: PipelineConfig,
}

impl AudioChain {
    /// Create a chain for the given configuration
    #[must_use]
    pub const fn new(config: PipelineConfig) -> Self {
        Self { config }
    }

    /// Configuration used by every run
    #[must_use]
    pub const fn config(&self) -> &PipelineConfig {
        &self.config
    }

    /// Render the band below `pass` into a playable waveform
    ///
    /// # Errors
    ///
    /// - [`DspError::InvalidFrequency`] if `pass` is not below Nyquist
    /// - [`DspError::InvalidFilter`] if the configured order is unusable
    /// - [`DspError::SilentSignal`] if nothing survives filtering and mixing
    /// - [`DspError::NonFiniteSample`] if the recording holds NaN or infinity
    pub fn render(&self, recording: &[f64], pass: Frequency) -> Result<Waveform, DspError> {
        let started = Instant::now();
        let fs = f64::from(self.config.sample_rate_hz);

        // Stage 1: filter design
        let spec = design_lowpass(
            pass.as_hz_f64(),
            self.config.sample_rate_hz,
            self.config.filter_order,
        )?;

        // Stage 2: zero-phase low-pass
        let filtered = spec.apply_zero_phase(recording)?;
        debug!(
            samples = filtered.len(),
            elapsed_ms = started.elapsed().as_secs_f64() * 1000.0,
            "filtered recording"
        );

        // Stage 3: heterodyne into the audible range
        let shifted = LocalOscillator::new(self.config.shift_hz, fs).mix(&filtered);
        debug!(shift_hz = self.config.shift_hz, "shifted band");

        // Stage 4: normalize and quantize
        let waveform = quantize(&shifted, self.config.sample_rate_hz)?;
        debug!(
            samples = waveform.len(),
            peak = waveform.peak(),
            elapsed_ms = started.elapsed().as_secs_f64() * 1000.0,
            "rendered band"
        );

        Ok(waveform)
    }
}
