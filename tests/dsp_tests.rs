//! DSP Algorithm Tests
//!
//! Host tests for the filter, mixer and quantizer stages.

use band_player::config::FULL_SCALE;
use band_player::dsp::filter::filtfilt;
use band_player::dsp::filter_design::design_lowpass;
use band_player::dsp::oscillator::shift_frequency;
use band_player::dsp::quantize::quantize;
use band_player::{AudioChain, DspError, Frequency, PipelineConfig};

/// Deterministic pseudo-random samples in [-1, 1)
fn noise(len: usize, seed: u64) -> Vec<f64> {
    let mut state = seed;
    (0..len)
        .map(|_| {
            state = state
                .wrapping_mul(6_364_136_223_846_793_005)
                .wrapping_add(1_442_695_040_888_963_407);
            ((state >> 11) as f64 / (1_u64 << 53) as f64) * 2.0 - 1.0
        })
        .collect()
}

// =============================================================================
// Zero-Phase Filter Tests
// =============================================================================

#[test]
fn test_zero_phase_preserves_length() {
    let spec = design_lowpass(1_000.0, 10_000, 6).unwrap();
    for len in [1, 2, 5, 21, 22, 1000] {
        let input = noise(len, len as u64);
        let output = filtfilt(spec.sections(), &input).unwrap();
        assert_eq!(output.len(), len, "length changed for N={len}");
        assert!(output.iter().all(|x| x.is_finite()), "non-finite output for N={len}");
    }
}

#[test]
fn test_zero_phase_empty_input() {
    let spec = design_lowpass(1_000.0, 10_000, 6).unwrap();
    assert!(spec.apply_zero_phase(&[]).unwrap().is_empty());
}

#[test]
fn test_zero_phase_impulse_is_symmetric() {
    let spec = design_lowpass(1_000.0, 10_000, 6).unwrap();
    let mut impulse = vec![0.0; 401];
    impulse[200] = 1.0;

    let response = spec.apply_zero_phase(&impulse).unwrap();

    let (argmax, peak) = response
        .iter()
        .enumerate()
        .fold((0, f64::MIN), |best, (i, &v)| if v > best.1 { (i, v) } else { best });
    assert_eq!(argmax, 200, "zero-phase response must peak on the impulse");

    for k in 1..=200 {
        let diff = (response[200 - k] - response[200 + k]).abs();
        assert!(diff <= 1e-9 * peak, "asymmetry {diff} at lag {k}");
    }
}

#[test]
fn test_zero_phase_passes_dc() {
    let spec = design_lowpass(500.0, 10_000, 6).unwrap();
    let output = spec.apply_zero_phase(&[0.25; 300]).unwrap();
    for &y in &output {
        assert!((y - 0.25).abs() < 1e-9, "DC level drifted to {y}");
    }
}

#[test]
fn test_zero_phase_attenuates_stopband_tone() {
    let fs = 10_000.0;
    let spec = design_lowpass(500.0, 10_000, 6).unwrap();
    let tone: Vec<f64> = (0..4000)
        .map(|t| (2.0 * std::f64::consts::PI * 3_000.0 * t as f64 / fs).sin())
        .collect();

    let output = spec.apply_zero_phase(&tone).unwrap();
    let interior = &output[500..3500];
    let peak = interior.iter().fold(0.0_f64, |m, &x| m.max(x.abs()));
    assert!(peak < 1e-4, "stopband tone leaked with amplitude {peak}");
}

// =============================================================================
// Designer Tests
// =============================================================================

#[test]
fn test_designer_rejects_pass_at_or_above_nyquist() {
    for pass in [5_000.0, 6_000.0, 144_000.0] {
        assert!(matches!(
            design_lowpass(pass, 10_000, 6),
            Err(DspError::InvalidFrequency { .. })
        ));
    }
}

#[test]
fn test_designer_rejects_non_positive_pass() {
    assert!(matches!(
        design_lowpass(0.0, 10_000, 6),
        Err(DspError::InvalidFrequency { .. })
    ));
    assert!(matches!(
        design_lowpass(-10.0, 10_000, 6),
        Err(DspError::InvalidFrequency { .. })
    ));
}

#[test]
fn test_designer_three_db_at_pass() {
    let spec = design_lowpass(1_000.0, 10_000, 6).unwrap();
    assert_eq!(spec.order(), 6);
    assert_eq!(spec.sections().len(), 3);
    assert!((spec.magnitude_db_at(1_000.0) + 3.01).abs() < 0.05);
}

// =============================================================================
// Frequency Shifter Tests
// =============================================================================

#[test]
fn test_shift_zero_is_identity() {
    let input = noise(512, 7);
    let output = shift_frequency(&input, 0.0, 10_000.0);
    for (x, y) in input.iter().zip(&output) {
        assert!((x - y).abs() < 1e-12);
    }
}

#[test]
fn test_shift_preserves_length_and_bounds() {
    let input = noise(777, 3);
    let output = shift_frequency(&input, 5_000.0, 10_000.0);
    assert_eq!(output.len(), input.len());
    for (x, y) in input.iter().zip(&output) {
        assert!(y.abs() <= x.abs() + 1e-12);
    }
}

// =============================================================================
// Quantizer Tests
// =============================================================================

#[test]
fn test_quantizer_hits_full_scale_and_keeps_sign() {
    let input = noise(2000, 11);
    let waveform = quantize(&input, 10_000).unwrap();

    assert_eq!(waveform.len(), input.len());
    assert_eq!(waveform.peak(), FULL_SCALE);
    for (&x, &q) in input.iter().zip(waveform.samples()) {
        assert!(q >= -FULL_SCALE && q <= FULL_SCALE);
        assert!(x * f64::from(q) >= 0.0, "sign flipped: {x} -> {q}");
    }
}

#[test]
fn test_quantizer_rejects_silence() {
    assert_eq!(quantize(&[0.0; 64], 10_000), Err(DspError::SilentSignal));
    assert_eq!(quantize(&[], 10_000), Err(DspError::SilentSignal));
}

#[test]
fn test_quantizer_rejects_nan() {
    assert_eq!(
        quantize(&[0.5, f64::NAN, 0.1], 10_000),
        Err(DspError::NonFiniteSample { index: 1 })
    );
}

// =============================================================================
// Full Chain Tests
// =============================================================================

#[test]
fn test_chain_renders_full_length() {
    let chain = AudioChain::new(PipelineConfig::default().with_sample_rate(1_000_000));
    let recording = noise(48_000, 42);

    let waveform = chain.render(&recording, Frequency::from_hz(144_000)).unwrap();
    assert_eq!(waveform.len(), 48_000);
    assert_eq!(waveform.sample_rate(), 1_000_000);
    assert_eq!(waveform.peak(), FULL_SCALE);
}

#[test]
fn test_chain_rejects_catalog_band_at_default_rate() {
    let chain = AudioChain::default();
    let recording = noise(1000, 1);
    assert!(matches!(
        chain.render(&recording, Frequency::from_hz(144_000)),
        Err(DspError::InvalidFrequency { .. })
    ));
}

#[test]
fn test_chain_silent_recording() {
    let chain = AudioChain::new(PipelineConfig::default().with_sample_rate(1_000_000));
    assert_eq!(
        chain.render(&[0.0; 48_000], Frequency::from_hz(288_000)),
        Err(DspError::SilentSignal)
    );
}
