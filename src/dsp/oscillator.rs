//! Local Oscillator
//!
//! Complex local oscillator for heterodyne frequency shifting.
//! Multiplying a real signal by `exp(-j*2*pi*f*t/fs)` and keeping the real
//! part translates its spectrum by `f`.

use core::f64::consts::PI;

use num_complex::Complex64;

/// Complex local oscillator at a fixed frequency
///
/// The phase of every sample is computed directly from its index, so long
/// recordings do not accumulate amplitude or phase drift.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LocalOscillator {
    /// Phase advance per sample in radians (negative: downward rotation)
    phase_inc: f64,
}

impl LocalOscillator {
    /// Create an oscillator at `freq_hz` for the given sample rate
    #[must_use]
    pub fn new(freq_hz: f64, sample_rate: f64) -> Self {
        Self {
            phase_inc: -2.0 * PI * freq_hz / sample_rate,
        }
    }

    /// Phase advance per sample in radians
    #[must_use]
    pub const fn phase_increment(&self) -> f64 {
        self.phase_inc
    }

    /// Unit phasor at sample index `t`
    #[must_use]
    pub fn phasor(&self, t: usize) -> Complex64 {
        Complex64::from_polar(1.0, self.phase_inc * t as f64)
    }

    /// Mix a real signal with the oscillator, keeping the real part
    #[must_use]
    pub fn mix(&self, signal: &[f64]) -> Vec<f64> {
        signal
            .iter()
            .enumerate()
            .map(|(t, &x)| (self.phasor(t) * x).re)
            .collect()
    }
}

/// Shift `signal` by `shift_hz` at `sample_rate`
#[must_use]
pub fn shift_frequency(signal: &[f64], shift_hz: f64, sample_rate: f64) -> Vec<f64> {
    LocalOscillator::new(shift_hz, sample_rate).mix(signal)
}

#[cfg(test)]
mod tests {
    use super::*;

    const FS: f64 = 10_000.0;

    #[test]
    fn phasor_has_unit_magnitude() {
        let lo = LocalOscillator::new(5_000.0, FS);
        for t in [0, 1, 17, 47_999] {
            let p = lo.phasor(t);
            assert!((p.norm() - 1.0).abs() < 1e-12, "|p({})| = {}", t, p.norm());
        }
    }

    #[test]
    fn phasor_rotates_downward() {
        let lo = LocalOscillator::new(2_500.0, FS);
        let p = lo.phasor(1);
        // Quarter turn clockwise
        assert!(p.re.abs() < 1e-12);
        assert!((p.im + 1.0).abs() < 1e-12);
    }

    #[test]
    fn zero_shift_is_identity() {
        let signal = [0.3, -1.2, 7.0, 0.0, 1e-9];
        assert_eq!(shift_frequency(&signal, 0.0, FS), signal.to_vec());
    }

    #[test]
    fn half_rate_shift_alternates_sign() {
        let signal = vec![1.0; 8];
        let out = shift_frequency(&signal, 5_000.0, FS);
        for (t, y) in out.iter().enumerate() {
            let expected = if t % 2 == 0 { 1.0 } else { -1.0 };
            assert!((y - expected).abs() < 1e-9, "t {}: {}", t, y);
        }
    }

    #[test]
    fn shifting_tone_onto_itself_gives_dc() {
        let f0 = 1_000.0;
        let n = 10_000;
        let signal: Vec<f64> = (0..n)
            .map(|t| (2.0 * PI * f0 * t as f64 / FS).cos())
            .collect();
        let out = shift_frequency(&signal, f0, FS);
        let mean = out.iter().sum::<f64>() / n as f64;
        assert!((mean - 0.5).abs() < 1e-6, "Mean: {}", mean);
    }
}
