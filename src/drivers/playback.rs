//! Playback Driver
//!
//! Hands quantized waveforms to an audio device. Playback runs
//! asynchronously; the session only starts, stops and resets it.

use tracing::info;

use crate::error::PlaybackError;
use crate::types::Waveform;

/// Audio output capability
pub trait Playback {
    /// Start playing `waveform`; returns without waiting for it to finish
    ///
    /// # Errors
    ///
    /// [`PlaybackError`] if the device cannot start the stream.
    fn play(&mut self, waveform: Waveform) -> Result<(), PlaybackError>;

    /// Stop whatever is playing
    fn stop(&mut self);

    /// Release the device on shutdown
    fn reset(&mut self);

    /// Check if a waveform is still being played
    fn is_playing(&self) -> bool;
}

impl<P: Playback + ?Sized> Playback for Box<P> {
    fn play(&mut self, waveform: Waveform) -> Result<(), PlaybackError> {
        (**self).play(waveform)
    }

    fn stop(&mut self) {
        (**self).stop();
    }

    fn reset(&mut self) {
        (**self).reset();
    }

    fn is_playing(&self) -> bool {
        (**self).is_playing()
    }
}

/// Playback call, as recorded by [`NullPlayback`]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PlaybackCall {
    /// `play` with a waveform of this many samples at this rate
    Play {
        /// Waveform length
        samples: usize,
        /// Waveform sample rate
        sample_rate: u32,
    },
    /// `stop`
    Stop,
    /// `reset`
    Reset,
}

/// Playback that produces no sound
///
/// Keeps the last waveform and the call sequence for inspection.
#[derive(Debug, Default)]
pub struct NullPlayback {
    calls: Vec<PlaybackCall>,
    last: Option<Waveform>,
    playing: bool,
}

impl NullPlayback {
    /// Create an idle driver
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Calls received so far, in order
    #[must_use]
    pub fn calls(&self) -> &[PlaybackCall] {
        &self.calls
    }

    /// Number of received calls equal to `call`
    #[must_use]
    pub fn count(&self, call: PlaybackCall) -> usize {
        self.calls.iter().filter(|&&c| c == call).count()
    }

    /// Number of `play` calls
    #[must_use]
    pub fn play_count(&self) -> usize {
        self.calls
            .iter()
            .filter(|c| matches!(c, PlaybackCall::Play { .. }))
            .count()
    }

    /// Most recently played waveform
    #[must_use]
    pub fn last_waveform(&self) -> Option<&Waveform> {
        self.last.as_ref()
    }
}

impl Playback for NullPlayback {
    fn play(&mut self, waveform: Waveform) -> Result<(), PlaybackError> {
        info!(
            samples = waveform.len(),
            sample_rate = waveform.sample_rate(),
            "playback (no audio device)"
        );
        self.calls.push(PlaybackCall::Play {
            samples: waveform.len(),
            sample_rate: waveform.sample_rate(),
        });
        self.last = Some(waveform);
        self.playing = true;
        Ok(())
    }

    fn stop(&mut self) {
        self.calls.push(PlaybackCall::Stop);
        self.playing = false;
    }

    fn reset(&mut self) {
        self.calls.push(PlaybackCall::Reset);
        self.playing = false;
    }

    fn is_playing(&self) -> bool {
        self.playing
    }
}

#[cfg(feature = "audio")]
pub use device::CpalPlayback;

#[cfg(feature = "audio")]
mod device {
    use std::sync::atomic::{AtomicBool, Ordering};
    use std::sync::Arc;

    use cpal::traits::{DeviceTrait, HostTrait, StreamTrait};
    use cpal::{FromSample, SizedSample};
    use tracing::{error, info};

    use super::Playback;
    use crate::config::FULL_SCALE;
    use crate::error::PlaybackError;
    use crate::types::Waveform;

    /// Playback through the default output device
    pub struct CpalPlayback {
        device: Option<cpal::Device>,
        stream: Option<cpal::Stream>,
        finished: Arc<AtomicBool>,
    }

    impl CpalPlayback {
        /// Open the default output device
        ///
        /// # Errors
        ///
        /// [`PlaybackError::NoDevice`] if the host has no output device.
        pub fn new() -> Result<Self, PlaybackError> {
            let device = default_device()?;
            if let Ok(name) = device.name() {
                info!(device = %name, "opened audio output");
            }
            Ok(Self {
                device: Some(device),
                stream: None,
                finished: Arc::new(AtomicBool::new(true)),
            })
        }

        fn run_stream<T>(
            device: &cpal::Device,
            config: &cpal::StreamConfig,
            waveform: Waveform,
            finished: Arc<AtomicBool>,
        ) -> Result<cpal::Stream, PlaybackError>
        where
            T: SizedSample + FromSample<f32>,
        {
            let channels = usize::from(config.channels);
            // Device frames per waveform sample; the waveform is held, not resampled
            let step = f64::from(waveform.sample_rate()) / f64::from(config.sample_rate.0);
            let samples = waveform.into_samples();
            let full_scale = f32::from(FULL_SCALE);
            let mut cursor = 0.0_f64;

            let stream = device
                .build_output_stream(
                    config,
                    move |data: &mut [T], _: &cpal::OutputCallbackInfo| {
                        for frame in data.chunks_mut(channels) {
                            let value = samples
                                .get(cursor as usize)
                                .map_or(0.0, |&s| f32::from(s) / full_scale);
                            if cursor as usize >= samples.len() {
                                finished.store(true, Ordering::Relaxed);
                            }
                            for sample in frame.iter_mut() {
                                *sample = T::from_sample(value);
                            }
                            cursor += step;
                        }
                    },
                    |err| error!(%err, "audio stream error"),
                    None,
                )
                .map_err(|e| PlaybackError::Backend(e.to_string()))?;

            Ok(stream)
        }
    }

    fn default_device() -> Result<cpal::Device, PlaybackError> {
        cpal::default_host()
            .default_output_device()
            .ok_or(PlaybackError::NoDevice)
    }

    impl Playback for CpalPlayback {
        fn play(&mut self, waveform: Waveform) -> Result<(), PlaybackError> {
            self.stop();

            if self.device.is_none() {
                self.device = Some(default_device()?);
            }
            let device = self.device.as_ref().ok_or(PlaybackError::NoDevice)?;
            let supported = device
                .default_output_config()
                .map_err(|e| PlaybackError::Backend(e.to_string()))?;
            let config = supported.config();

            info!(
                samples = waveform.len(),
                source_rate = waveform.sample_rate(),
                device_rate = config.sample_rate.0,
                channels = config.channels,
                "starting playback"
            );

            let finished = Arc::new(AtomicBool::new(false));
            let stream = match supported.sample_format() {
                cpal::SampleFormat::F32 => {
                    Self::run_stream::<f32>(device, &config, waveform, Arc::clone(&finished))?
                }
                cpal::SampleFormat::I16 => {
                    Self::run_stream::<i16>(device, &config, waveform, Arc::clone(&finished))?
                }
                cpal::SampleFormat::U16 => {
                    Self::run_stream::<u16>(device, &config, waveform, Arc::clone(&finished))?
                }
                other => {
                    return Err(PlaybackError::Backend(format!(
                        "unsupported sample format {other:?}"
                    )))
                }
            };
            stream
                .play()
                .map_err(|e| PlaybackError::Backend(e.to_string()))?;

            self.stream = Some(stream);
            self.finished = finished;
            Ok(())
        }

        fn stop(&mut self) {
            if self.stream.take().is_some() {
                info!("stopped playback");
            }
            self.finished.store(true, Ordering::Relaxed);
        }

        fn reset(&mut self) {
            self.stop();
            self.device = None;
        }

        fn is_playing(&self) -> bool {
            self.stream.is_some() && !self.finished.load(Ordering::Relaxed)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn null_playback_records_calls() {
        let mut playback = NullPlayback::new();
        assert!(!playback.is_playing());

        playback.play(Waveform::new(vec![1, 2, 3], 10_000)).unwrap();
        assert!(playback.is_playing());
        assert_eq!(playback.last_waveform().map(Waveform::len), Some(3));

        playback.stop();
        playback.reset();
        assert!(!playback.is_playing());
        assert_eq!(
            playback.calls(),
            &[
                PlaybackCall::Play {
                    samples: 3,
                    sample_rate: 10_000
                },
                PlaybackCall::Stop,
                PlaybackCall::Reset,
            ]
        );
    }
}
