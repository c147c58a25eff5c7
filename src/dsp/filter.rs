//! Digital Filters
//!
//! Runs low-pass specifications over whole recordings.
//! Filtering is done forward and then backward so the passband carries no
//! net delay, which keeps the later frequency shift aligned with the input.

use super::filter_design::{BiquadCoeffs, LowpassSpec};
use crate::error::DspError;

/// Biquad filter state
///
/// Implements Direct Form II Transposed for numerical stability.
#[derive(Clone, Copy, Debug)]
pub struct Biquad {
    coeffs: BiquadCoeffs,
    /// State variables
    z1: f64,
    z2: f64,
}

impl Biquad {
    /// Create a new biquad filter with given coefficients
    #[must_use]
    pub fn new(coeffs: BiquadCoeffs) -> Self {
        Self {
            coeffs,
            z1: 0.0,
            z2: 0.0,
        }
    }

    /// Create a biquad already settled on a constant input of `level`
    #[must_use]
    pub fn settled(coeffs: BiquadCoeffs, level: f64) -> Self {
        let (z1, z2) = coeffs.step_state();
        Self {
            coeffs,
            z1: z1 * level,
            z2: z2 * level,
        }
    }

    /// Process a single sample through the filter
    pub fn process(&mut self, input: f64) -> f64 {
        let output = self.coeffs.b0 * input + self.z1;
        self.z1 = self.coeffs.b1 * input - self.coeffs.a1 * output + self.z2;
        self.z2 = self.coeffs.b2 * input - self.coeffs.a2 * output;
        output
    }

    /// Process a block of samples in-place
    pub fn process_block(&mut self, samples: &mut [f64]) {
        for sample in samples.iter_mut() {
            *sample = self.process(*sample);
        }
    }

    /// Reset filter state
    pub fn reset(&mut self) {
        self.z1 = 0.0;
        self.z2 = 0.0;
    }

    /// Get current coefficients
    #[must_use]
    pub fn coeffs(&self) -> BiquadCoeffs {
        self.coeffs
    }
}

impl Default for Biquad {
    fn default() -> Self {
        Self::new(BiquadCoeffs::UNITY)
    }
}

/// Number of samples reflected onto each end before zero-phase filtering
#[must_use]
pub fn edge_padding(sections: usize) -> usize {
    3 * (2 * sections + 1)
}

/// Run the cascade once over `samples`, starting settled on `samples[0]`
fn filter_pass(sections: &[BiquadCoeffs], samples: &mut [f64]) {
    let Some(&first) = samples.first() else {
        return;
    };

    // Each section settles on what the previous one passes at DC
    let mut level = first;
    for &coeffs in sections {
        let mut section = Biquad::settled(coeffs, level);
        section.process_block(samples);
        level *= coeffs.dc_gain();
    }
}

/// Odd extension of `input` by `pad` samples on both ends
fn odd_extend(input: &[f64], pad: usize) -> Vec<f64> {
    let n = input.len();
    let first = input[0];
    let last = input[n - 1];

    let mut out = Vec::with_capacity(n + 2 * pad);
    out.extend((1..=pad).rev().map(|i| 2.0 * first - input[i]));
    out.extend_from_slice(input);
    out.extend((1..=pad).map(|i| 2.0 * last - input[n - 1 - i]));
    out
}

/// Filter `input` forward and backward through `sections`
///
/// The output has the same length as the input and zero phase shift.
///
/// # Errors
///
/// [`DspError::InvalidFilter`] when the sections are empty, non-finite or unstable.
pub fn filtfilt(sections: &[BiquadCoeffs], input: &[f64]) -> Result<Vec<f64>, DspError> {
    if sections.is_empty() {
        return Err(DspError::InvalidFilter("no filter sections".into()));
    }
    if let Some(i) = sections.iter().position(|s| !s.is_stable()) {
        return Err(DspError::InvalidFilter(format!(
            "section {i} is non-finite or unstable"
        )));
    }
    if input.is_empty() {
        return Ok(Vec::new());
    }

    let pad = edge_padding(sections.len()).min(input.len() - 1);
    let mut work = odd_extend(input, pad);

    filter_pass(sections, &mut work);
    work.reverse();
    filter_pass(sections, &mut work);
    work.reverse();

    Ok(work[pad..pad + input.len()].to_vec())
}

impl LowpassSpec {
    /// Apply this specification with zero net phase
    ///
    /// # Errors
    ///
    /// [`DspError::InvalidFilter`] when the specification is malformed.
    pub fn apply_zero_phase(&self, input: &[f64]) -> Result<Vec<f64>, DspError> {
        self.validate()?;
        filtfilt(self.sections(), input)
    }
}
