//! User Interface
//!
//! Console capability and menu rendering for the band player.
//! The session loop only talks to [`Console`]; the pipeline never sees it.

use std::io::{self, BufRead, Write};

use heapless::String;

use crate::config::MENU_LINE_LEN;
use crate::radio::catalog::{Catalog, Network, Station};

/// Prompt shown when choosing a network
pub const NETWORK_PROMPT: &str =
    "Enter the number corresponding to the desired radio network or 0 to quit: ";

/// Prompt shown when choosing a band
pub const BAND_PROMPT: &str =
    "Enter the number corresponding to the desired frequency or 0 to go back: ";

/// Line-oriented text console
pub trait Console {
    /// Print one line
    fn show(&mut self, line: &str) -> io::Result<()>;

    /// Print `message` and read one line; `None` once input has ended
    fn prompt(&mut self, message: &str) -> io::Result<Option<std::string::String>>;
}

/// Console over any reader/writer pair
pub struct TextConsole<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> TextConsole<R, W> {
    /// Create a console reading from `input` and writing to `output`
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Give back the writer (tests inspect what was printed)
    pub fn into_output(self) -> W {
        self.output
    }
}

impl TextConsole<io::StdinLock<'static>, io::Stdout> {
    /// Console on the process stdin/stdout
    #[must_use]
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> Console for TextConsole<R, W> {
    fn show(&mut self, line: &str) -> io::Result<()> {
        writeln!(self.output, "{line}")
    }

    fn prompt(&mut self, message: &str) -> io::Result<Option<std::string::String>> {
        write!(self.output, "{message}")?;
        self.output.flush()?;

        let mut line = std::string::String::new();
        if self.input.read_line(&mut line)? == 0 {
            // Keep the terminal tidy when input ends mid-prompt
            writeln!(self.output)?;
            return Ok(None);
        }
        Ok(Some(line))
    }
}

/// Menu line renderer
pub struct MenuRenderer;

impl MenuRenderer {
    /// Render one network entry, e.g. `1. AWA-96`
    #[must_use]
    pub fn network_line(choice: usize, network: &Network) -> String<MENU_LINE_LEN> {
        let mut s: String<MENU_LINE_LEN> = String::new();
        core::fmt::write(&mut s, format_args!("{choice}. {}", network.name)).ok();
        s
    }

    /// Render one band entry, e.g. `1. economy (144.0 kHz)`
    #[must_use]
    pub fn station_line(choice: usize, station: &Station) -> String<MENU_LINE_LEN> {
        let mut s: String<MENU_LINE_LEN> = String::new();
        core::fmt::write(
            &mut s,
            format_args!("{choice}. {} ({})", station.name, station.pass),
        )
        .ok();
        s
    }

    /// Print the network menu
    ///
    /// # Errors
    ///
    /// Propagates console write failures.
    pub fn show_networks(console: &mut impl Console, catalog: &Catalog) -> io::Result<()> {
        console.show("Available radio networks:")?;
        for (i, network) in catalog.networks().iter().enumerate() {
            console.show(&Self::network_line(i + 1, network))?;
        }
        console.show("")
    }

    /// Print the band menu of one network
    ///
    /// # Errors
    ///
    /// Propagates console write failures.
    pub fn show_stations(console: &mut impl Console, network: &Network) -> io::Result<()> {
        let mut title: String<MENU_LINE_LEN> = String::new();
        core::fmt::write(&mut title, format_args!("Available frequencies for {}:", network.name)).ok();
        console.show(&title)?;
        for (i, station) in network.stations.iter().enumerate() {
            console.show(&Self::station_line(i + 1, station))?;
        }
        console.show("")
    }
}
