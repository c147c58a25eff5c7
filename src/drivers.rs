//! External Collaborators
//!
//! Drivers for the input recording and the audio output device.

pub mod playback;
pub mod recording;
