//! Band Player Library
//!
//! This library isolates one named broadcast band from a fixed signal
//! recording and renders it as audible, playback-ready 16-bit audio.
//! A catalog maps (network, band) choices to low-pass cutoffs; the DSP
//! chain filters, shifts and quantizes the recording for each choice.
//!
//! # Architecture
//!
//! The library is organized in layers:
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                    APPLICATION LAYER                         │
//! │  Selection Session  │  Console Menus  │  Catalog             │
//! ├─────────────────────────────────────────────────────────────┤
//! │                      DSP LAYER                               │
//! │  Butterworth Design │ Zero-Phase Filter │ Mixer │ Quantizer  │
//! ├─────────────────────────────────────────────────────────────┤
//! │                    DRIVER LAYER                              │
//! │  Recording Source  │  Playback Device (cpal)                 │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Design Principles
//!
//! - **Immutable-by-default**: State transitions return new values
//! - **Functional core, imperative shell**: The pipeline never touches I/O
//! - **Explicit error handling**: All fallible operations return `Result`
//! - **Capabilities at the seams**: Console and playback are traits

#![deny(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]

/// Digital Signal Processing
///
/// Filter design, zero-phase filtering, mixing and quantization.
pub mod dsp;

/// Radio Control Logic
///
/// Catalog, selection state machine and session loop.
pub mod radio;

/// External Collaborators
///
/// Recording source and playback device.
pub mod drivers;

/// User Interface
///
/// Console capability and menu rendering.
pub mod ui;

/// Error types
pub mod error;

/// Shared types used across modules
pub mod types;

/// System configuration and constants
pub mod config;

pub use config::PipelineConfig;
pub use dsp::audio_chain::AudioChain;
pub use error::{DspError, PlaybackError, SelectionError, SessionError, SourceError};
pub use radio::catalog::{Catalog, STANDARD_CATALOG};
pub use radio::session::Session;
pub use types::{Frequency, Waveform};
