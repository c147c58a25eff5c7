//! Digital Signal Processing
//!
//! Provides the band rendering pipeline:
//! - Butterworth low-pass design
//! - Zero-phase (forward/backward) filtering
//! - Heterodyne frequency shifting
//! - Peak normalization and 16-bit quantization

pub mod filter_design;
pub mod filter;
pub mod oscillator;
pub mod quantize;
pub mod audio_chain;
