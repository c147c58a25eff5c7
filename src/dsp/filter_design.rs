//! Filter Design Module
//!
//! Provides coefficient calculation for the band-selection low-pass.
//! Coefficients are computed once per selection, never during filtering.
//!
//! # Approach
//!
//! An order-`k` Butterworth low-pass is a cascade of second-order sections
//! (plus one first-order section for odd `k`). Each section is a
//! bilinear-transform low-pass pre-warped at the pass-frequency, with the
//! quality factor of the matching Butterworth pole pair, so the cascade is
//! maximally flat with exactly -3 dB at the pass-frequency.

use core::f64::consts::PI;

use crate::error::DspError;

/// Biquad filter coefficients
///
/// Transfer function: H(z) = (b0 + b1*z^-1 + b2*z^-2) / (1 + a1*z^-1 + a2*z^-2)
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BiquadCoeffs {
    /// Numerator coefficient b0
    pub b0: f64,
    /// Numerator coefficient b1
    pub b1: f64,
    /// Numerator coefficient b2
    pub b2: f64,
    /// Denominator coefficient a1 (note: a0 is normalized to 1)
    pub a1: f64,
    /// Denominator coefficient a2
    pub a2: f64,
}

impl BiquadCoeffs {
    /// Unity (pass-through) coefficients
    pub const UNITY: Self = Self {
        b0: 1.0,
        b1: 0.0,
        b2: 0.0,
        a1: 0.0,
        a2: 0.0,
    };

    /// Design a second-order low-pass section
    ///
    /// # Arguments
    /// * `fc` - Cutoff frequency in Hz
    /// * `fs` - Sample rate in Hz
    /// * `q` - Quality factor (0.707 for a single Butterworth section)
    #[must_use]
    pub fn lowpass(fc: f64, fs: f64, q: f64) -> Self {
        let omega = 2.0 * PI * fc / fs;
        let sin_omega = omega.sin();
        let cos_omega = omega.cos();
        let alpha = sin_omega / (2.0 * q);

        let b0 = (1.0 - cos_omega) / 2.0;
        let b1 = 1.0 - cos_omega;
        let b2 = (1.0 - cos_omega) / 2.0;
        let a0 = 1.0 + alpha;
        let a1 = -2.0 * cos_omega;
        let a2 = 1.0 - alpha;

        Self::normalize(b0, b1, b2, a0, a1, a2)
    }

    /// Design a first-order low-pass section (b2 = a2 = 0)
    ///
    /// # Arguments
    /// * `fc` - Cutoff frequency in Hz
    /// * `fs` - Sample rate in Hz
    #[must_use]
    pub fn first_order_lowpass(fc: f64, fs: f64) -> Self {
        // Pre-warped analog cutoff
        let k = (PI * fc / fs).tan();

        Self::normalize(k, k, 0.0, k + 1.0, k - 1.0, 0.0)
    }

    /// Normalize coefficients by a0
    fn normalize(b0: f64, b1: f64, b2: f64, a0: f64, a1: f64, a2: f64) -> Self {
        Self {
            b0: b0 / a0,
            b1: b1 / a0,
            b2: b2 / a0,
            a1: a1 / a0,
            a2: a2 / a0,
        }
    }

    /// Gain at 0 Hz
    #[must_use]
    pub fn dc_gain(&self) -> f64 {
        (self.b0 + self.b1 + self.b2) / (1.0 + self.a1 + self.a2)
    }

    /// Direct Form II Transposed state after a unit step has settled
    ///
    /// Scaling both values by the first input sample starts the section
    /// without a turn-on transient.
    #[must_use]
    pub fn step_state(&self) -> (f64, f64) {
        let y = self.dc_gain();
        let z2 = self.b2 - self.a2 * y;
        let z1 = self.b1 - self.a1 * y + z2;
        (z1, z2)
    }

    /// True when every coefficient is finite and both poles lie inside the unit circle
    #[must_use]
    pub fn is_stable(&self) -> bool {
        let finite = [self.b0, self.b1, self.b2, self.a1, self.a2]
            .iter()
            .all(|c| c.is_finite());

        finite && self.a2.abs() < 1.0 && self.a1.abs() < 1.0 + self.a2
    }

    /// Calculate magnitude response at a given frequency
    #[must_use]
    pub fn magnitude_at(&self, freq: f64, fs: f64) -> f64 {
        let omega = 2.0 * PI * freq / fs;
        let cos_omega = omega.cos();
        let cos_2omega = (2.0 * omega).cos();

        // |H(e^jw)|^2 = |B(e^jw)|^2 / |A(e^jw)|^2
        let num = self.b0 * self.b0 + self.b1 * self.b1 + self.b2 * self.b2
            + 2.0 * (self.b0 * self.b1 + self.b1 * self.b2) * cos_omega
            + 2.0 * self.b0 * self.b2 * cos_2omega;

        let den = 1.0 + self.a1 * self.a1 + self.a2 * self.a2
            + 2.0 * (self.a1 + self.a1 * self.a2) * cos_omega
            + 2.0 * self.a2 * cos_2omega;

        if den > 0.0 {
            (num / den).sqrt()
        } else {
            0.0
        }
    }
}

impl Default for BiquadCoeffs {
    fn default() -> Self {
        Self::UNITY
    }
}

/// Quality factors of the conjugate pole pairs of an order-`order` Butterworth prototype
///
/// Ordered from the pair nearest the real axis (lowest Q) outwards.
pub fn butterworth_q(order: usize) -> impl Iterator<Item = f64> {
    (order.div_ceil(2)..order).map(move |m| {
        let theta = PI * (2 * m + 1 - order) as f64 / (2 * order) as f64;
        1.0 / (2.0 * theta.cos())
    })
}

/// Butterworth low-pass filter specification
///
/// Immutable once designed; the applicator only reads it.
#[derive(Clone, Debug, PartialEq)]
pub struct LowpassSpec {
    sections: Vec<BiquadCoeffs>,
    order: usize,
    pass_hz: f64,
    sample_rate: f64,
}

impl LowpassSpec {
    /// Build a specification from precomputed sections
    ///
    /// Nothing is checked here; [`LowpassSpec::validate`] does that.
    #[must_use]
    pub fn from_sections(sections: Vec<BiquadCoeffs>, pass_hz: f64, sample_rate: f64) -> Self {
        let order = sections
            .iter()
            .map(|s| if s.b2 == 0.0 && s.a2 == 0.0 { 1 } else { 2 })
            .sum();
        Self {
            sections,
            order,
            pass_hz,
            sample_rate,
        }
    }

    /// Cascaded sections, applied in order
    #[must_use]
    pub fn sections(&self) -> &[BiquadCoeffs] {
        &self.sections
    }

    /// Filter order
    #[must_use]
    pub const fn order(&self) -> usize {
        self.order
    }

    /// Pass-frequency in Hz
    #[must_use]
    pub const fn pass_hz(&self) -> f64 {
        self.pass_hz
    }

    /// Sample rate the coefficients were designed for
    #[must_use]
    pub const fn sample_rate(&self) -> f64 {
        self.sample_rate
    }

    /// Cascade magnitude response at a given frequency
    #[must_use]
    pub fn magnitude_at(&self, freq: f64) -> f64 {
        self.sections
            .iter()
            .map(|s| s.magnitude_at(freq, self.sample_rate))
            .product()
    }

    /// Cascade magnitude response in dB at a given frequency
    #[must_use]
    pub fn magnitude_db_at(&self, freq: f64) -> f64 {
        let mag = self.magnitude_at(freq);
        if mag > 0.0 {
            20.0 * mag.log10()
        } else {
            -240.0
        }
    }

    /// Check that the specification can be applied
    ///
    /// # Errors
    ///
    /// [`DspError::InvalidFilter`] when there are no sections or a section
    /// is non-finite or unstable.
    pub fn validate(&self) -> Result<(), DspError> {
        if self.sections.is_empty() {
            return Err(DspError::InvalidFilter("no filter sections".into()));
        }
        if let Some(i) = self.sections.iter().position(|s| !s.is_stable()) {
            return Err(DspError::InvalidFilter(format!(
                "section {i} is non-finite or unstable"
            )));
        }
        Ok(())
    }
}

/// Design an order-`order` Butterworth low-pass
///
/// # Errors
///
/// [`DspError::InvalidFilter`] for `order == 0`, and
/// [`DspError::InvalidFrequency`] unless `0 < pass_hz < sample_rate / 2`.
pub fn design_lowpass(pass_hz: f64, sample_rate: u32, order: usize) -> Result<LowpassSpec, DspError> {
    let fs = f64::from(sample_rate);
    let nyquist_hz = fs / 2.0;

    if order == 0 {
        return Err(DspError::InvalidFilter("filter order must be at least 1".into()));
    }
    if !(pass_hz.is_finite() && pass_hz > 0.0 && pass_hz < nyquist_hz) {
        return Err(DspError::InvalidFrequency {
            pass_hz,
            nyquist_hz,
        });
    }

    let mut sections = Vec::with_capacity(order.div_ceil(2));
    if order % 2 == 1 {
        sections.push(BiquadCoeffs::first_order_lowpass(pass_hz, fs));
    }
    sections.extend(butterworth_q(order).map(|q| BiquadCoeffs::lowpass(pass_hz, fs, q)));

    let spec = LowpassSpec {
        sections,
        order,
        pass_hz,
        sample_rate: fs,
    };
    spec.validate()?;

    tracing::debug!(
        order,
        pass_hz,
        normalized_cutoff = pass_hz / nyquist_hz,
        "designed Butterworth low-pass"
    );

    Ok(spec)
}
