//! Selection Session
//!
//! Drives the selection state machine against a console, runs the audio
//! chain for each valid choice and hands the result to playback.
//!
//! Playback ordering: a waveform still playing is stopped before the next
//! one starts, and quitting stops and resets the device exactly once.

use tracing::{info, warn};

use super::catalog::Catalog;
use super::state::{apply_event, parse_choice, SelectionEvent, SelectionState};
use crate::drivers::playback::Playback;
use crate::dsp::audio_chain::AudioChain;
use crate::error::SessionError;
use crate::ui::{Console, MenuRenderer, BAND_PROMPT, NETWORK_PROMPT};

/// Interactive selection session over one recording
pub struct Session<'a, C, P> {
    catalog: Catalog,
    chain: AudioChain,
    recording: &'a [f64],
    console: C,
    playback: P,
    state: SelectionState,
}

impl<'a, C: Console, P: Playback> Session<'a, C, P> {
    /// Create a session waiting for a network choice
    pub fn new(catalog: Catalog, chain: AudioChain, recording: &'a [f64], console: C, playback: P) -> Self {
        Self {
            catalog,
            chain,
            recording,
            console,
            playback,
            state: SelectionState::AwaitingNetwork,
        }
    }

    /// Current state
    #[must_use]
    pub const fn state(&self) -> SelectionState {
        self.state
    }

    /// Console collaborator
    pub fn console(&self) -> &C {
        &self.console
    }

    /// Playback collaborator
    pub fn playback(&self) -> &P {
        &self.playback
    }

    /// Take the collaborators back
    pub fn into_parts(self) -> (C, P) {
        (self.console, self.playback)
    }

    /// Run until the user quits or input ends
    ///
    /// # Errors
    ///
    /// [`SessionError::Console`] if the console cannot be read or written.
    pub fn run(&mut self) -> Result<(), SessionError> {
        while !self.state.is_stopped() {
            self.step()?;
        }
        Ok(())
    }

    /// Perform the action of the current state and move to the next one
    ///
    /// # Errors
    ///
    /// [`SessionError::Console`] if the console cannot be read or written.
    pub fn step(&mut self) -> Result<SelectionState, SessionError> {
        let event = match self.state {
            SelectionState::AwaitingNetwork => {
                MenuRenderer::show_networks(&mut self.console, &self.catalog)?;
                self.read_choice(NETWORK_PROMPT)?
            }
            SelectionState::AwaitingBand { network } => {
                let Ok(entry) = self.catalog.network(network) else {
                    // Only reachable with a catalog swapped under a live state
                    self.state = SelectionState::AwaitingNetwork;
                    return Ok(self.state);
                };
                MenuRenderer::show_stations(&mut self.console, entry)?;
                self.read_choice(BAND_PROMPT)?
            }
            SelectionState::Processing { network, band } => {
                self.process(network, band)?;
                SelectionEvent::Processed
            }
            SelectionState::Stopped => return Ok(self.state),
        };

        let transition = apply_event(&self.catalog, self.state, event);
        if let Some(err) = &transition.error {
            warn!(%err, "rejected selection");
            self.console.show(&err.to_string())?;
        }
        if transition.state.is_stopped() {
            self.shut_down();
        }

        self.state = transition.state;
        Ok(self.state)
    }

    fn read_choice(&mut self, prompt: &str) -> Result<SelectionEvent, SessionError> {
        Ok(self
            .console
            .prompt(prompt)?
            .map_or(SelectionEvent::EndOfInput, |line| parse_choice(&line)))
    }

    /// Render the chosen band and start playing it
    ///
    /// Pipeline and playback failures are reported and abandon this choice.
    fn process(&mut self, network: i64, band: i64) -> Result<(), SessionError> {
        let (network_name, station) = match (self.catalog.network(network), self.catalog.station(network, band)) {
            (Ok(n), Ok(s)) => (n.name, s),
            (Err(err), _) | (_, Err(err)) => {
                self.console.show(&err.to_string())?;
                return Ok(());
            }
        };
        info!(network = network_name, band = station.name, pass = %station.pass, "rendering band");

        let waveform = match self.chain.render(self.recording, station.pass) {
            Ok(waveform) => waveform,
            Err(err) => {
                warn!(%err, "pipeline rejected selection");
                self.console
                    .show(&format!("Cannot play {network_name} / {}: {err}", station.name))?;
                return Ok(());
            }
        };

        if self.playback.is_playing() {
            self.playback.stop();
        }
        if let Err(err) = self.playback.play(waveform) {
            warn!(%err, "playback failed");
            self.console.show(&format!("Playback failed: {err}"))?;
            return Ok(());
        }

        self.console
            .show(&format!("Playing {network_name} / {} ({})", station.name, station.pass))?;
        Ok(())
    }

    fn shut_down(&mut self) {
        info!("stopping playback and releasing the audio device");
        self.playback.stop();
        self.playback.reset();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::PipelineConfig;
    use crate::drivers::playback::{NullPlayback, PlaybackCall};
    use crate::radio::catalog::STANDARD_CATALOG;
    use crate::ui::TextConsole;

    fn session<'a>(input: &'a str, recording: &'a [f64]) -> Session<'a, TextConsole<&'a [u8], Vec<u8>>, NullPlayback> {
        Session::new(
            STANDARD_CATALOG,
            AudioChain::new(PipelineConfig::default()),
            recording,
            TextConsole::new(input.as_bytes(), Vec::new()),
            NullPlayback::new(),
        )
    }

    #[test]
    fn steps_through_prompts() {
        let recording = [0.0; 8];
        let mut s = session("2\n0\n", &recording);
        assert_eq!(s.step().unwrap(), SelectionState::AwaitingBand { network: 2 });
        assert_eq!(s.step().unwrap(), SelectionState::AwaitingNetwork);
        assert_eq!(s.step().unwrap(), SelectionState::Stopped);
        assert_eq!(s.playback().count(PlaybackCall::Stop), 1);
        assert_eq!(s.playback().count(PlaybackCall::Reset), 1);
    }

    #[test]
    fn band_out_of_range_stays_on_band_prompt() {
        let recording = [0.0; 8];
        let mut s = session("1\n7\n", &recording);
        s.step().unwrap();
        assert_eq!(s.step().unwrap(), SelectionState::AwaitingBand { network: 1 });
    }
}
