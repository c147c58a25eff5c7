//! Error types for the band player
//!
//! Three families, matching how the selection loop treats them:
//! selection errors are re-prompted, pipeline errors abandon the current
//! selection, source errors end the process.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while reading a menu choice
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SelectionError {
    /// Response was not a number
    #[error("invalid input {0:?}, please enter a number")]
    InvalidInput(String),

    /// Number outside the menu
    #[error("choice must be between 1 and {max}, got {value}")]
    OutOfRange {
        /// Number the user entered
        value: i64,
        /// Number of entries in the menu
        max: usize,
    },
}

/// Errors raised inside the signal pipeline
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DspError {
    /// Pass-frequency outside `(0, fs/2)`
    #[error("pass frequency {pass_hz} Hz must lie strictly between 0 and the Nyquist frequency {nyquist_hz} Hz")]
    InvalidFrequency {
        /// Requested pass-frequency
        pass_hz: f64,
        /// Half the sample rate
        nyquist_hz: f64,
    },

    /// Filter specification cannot be applied
    #[error("invalid filter: {0}")]
    InvalidFilter(String),

    /// Every sample is zero, so there is nothing to normalize
    #[error("signal is silent after processing")]
    SilentSignal,

    /// A sample is NaN or infinite
    #[error("non-finite sample at index {index}")]
    NonFiniteSample {
        /// Position of the first offending sample
        index: usize,
    },
}

/// Errors raised while loading the input recording
#[derive(Debug, Error)]
pub enum SourceError {
    /// Recording file does not exist
    #[error("recording not found: {}", .0.display())]
    SourceNotFound(PathBuf),

    /// A line could not be used as a sample
    #[error("invalid recording data at line {line}: {reason}")]
    InvalidInputData {
        /// 1-based line number (0 when the error concerns the whole file)
        line: usize,
        /// What was wrong with it
        reason: String,
    },

    /// Any other read failure
    #[error("failed to read recording: {0}")]
    Io(#[from] io::Error),
}

/// Errors raised by the playback device
#[derive(Debug, Error)]
pub enum PlaybackError {
    /// No output device is available
    #[error("no audio output device available")]
    NoDevice,

    /// Device rejected the stream
    #[error("audio backend error: {0}")]
    Backend(String),
}

/// Errors that end a selection session
#[derive(Debug, Error)]
pub enum SessionError {
    /// Console could not be read or written
    #[error("console I/O failed: {0}")]
    Console(#[from] io::Error),
}
