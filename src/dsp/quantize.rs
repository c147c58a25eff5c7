//! Peak normalization and 16-bit quantization

use crate::config::FULL_SCALE;
use crate::error::DspError;
use crate::types::Waveform;

/// Largest absolute sample value
///
/// # Errors
///
/// [`DspError::NonFiniteSample`] if any sample is NaN or infinite.
pub fn peak_abs(signal: &[f64]) -> Result<f64, DspError> {
    signal.iter().enumerate().try_fold(0.0_f64, |peak, (index, &x)| {
        if x.is_finite() {
            Ok(peak.max(x.abs()))
        } else {
            Err(DspError::NonFiniteSample { index })
        }
    })
}

/// Scale `signal` so its peak lands on full scale and round to 16-bit integers
///
/// Values are rounded half away from zero and clamped to
/// `[-FULL_SCALE, FULL_SCALE]`.
///
/// # Errors
///
/// [`DspError::SilentSignal`] when every sample is zero (or there are none),
/// [`DspError::NonFiniteSample`] when a sample is NaN or infinite.
pub fn quantize(signal: &[f64], sample_rate: u32) -> Result<Waveform, DspError> {
    let peak = peak_abs(signal)?;
    if peak == 0.0 {
        return Err(DspError::SilentSignal);
    }

    let full_scale = f64::from(FULL_SCALE);
    let gain = full_scale / peak;
    let samples = signal
        .iter()
        .map(|&x| (x * gain).round().clamp(-full_scale, full_scale) as i16)
        .collect();

    Ok(Waveform::new(samples, sample_rate))
}
