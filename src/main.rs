//! Band Player Main Application
//!
//! Loads the recording, then lets the user pick a network and band and
//! plays the extracted band until they quit.

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

use band_player::config::{
    DEFAULT_INPUT_PATH, FILTER_ORDER, SAMPLE_COUNT, SAMPLE_RATE_HZ, SHIFT_FREQUENCY_HZ,
};
use band_player::drivers::playback::{NullPlayback, Playback};
use band_player::drivers::recording::load_recording;
use band_player::ui::TextConsole;
use band_player::{AudioChain, PipelineConfig, Session, STANDARD_CATALOG};

/// Listen to one band of a recorded broadcast signal
#[derive(Debug, Parser)]
#[command(version, about)]
struct Args {
    /// Recording with one sample per line
    #[arg(short, long, default_value = DEFAULT_INPUT_PATH)]
    input: PathBuf,

    /// Number of samples the recording must contain
    #[arg(long, default_value_t = SAMPLE_COUNT)]
    samples: usize,

    /// Sample rate of the recording in Hz
    #[arg(long, default_value_t = SAMPLE_RATE_HZ)]
    sample_rate: u32,

    /// Frequency shift into the audible range in Hz
    #[arg(long, default_value_t = SHIFT_FREQUENCY_HZ)]
    shift: f64,

    /// Butterworth low-pass order
    #[arg(long, default_value_t = FILTER_ORDER)]
    order: usize,
}

impl Args {
    fn pipeline_config(&self) -> PipelineConfig {
        PipelineConfig::default()
            .with_sample_rate(self.sample_rate)
            .with_shift(self.shift)
            .with_filter_order(self.order)
    }
}

#[cfg(feature = "audio")]
fn open_playback() -> Box<dyn Playback> {
    match band_player::drivers::playback::CpalPlayback::new() {
        Ok(device) => Box::new(device),
        Err(err) => {
            warn!(%err, "no usable audio output; selections are rendered but not heard");
            Box::new(NullPlayback::new())
        }
    }
}

#[cfg(not(feature = "audio"))]
fn open_playback() -> Box<dyn Playback> {
    warn!("built without the `audio` feature; selections are rendered but not heard");
    Box::new(NullPlayback::new())
}

fn run(args: &Args) -> anyhow::Result<()> {
    let recording = load_recording(&args.input, args.samples)
        .with_context(|| format!("loading {}", args.input.display()))?;

    let config = args.pipeline_config();
    info!(?config, "pipeline configured");

    let playback = open_playback();
    let mut session = Session::new(
        STANDARD_CATALOG,
        AudioChain::new(config),
        &recording,
        TextConsole::stdio(),
        playback,
    );
    session.run()?;
    Ok(())
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    info!("Band Player v{}", env!("CARGO_PKG_VERSION"));

    let args = Args::parse();
    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{err:#}");
            eprintln!("error: {err:#}");
            ExitCode::FAILURE
        }
    }
}
