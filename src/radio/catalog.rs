//! Broadcast Catalog
//!
//! Static table of networks and their bands. A two-step 1-based menu choice
//! (network, then band) resolves to exactly one pass-frequency.

use crate::error::SelectionError;
use crate::types::Frequency;

/// One band carried by a network
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Station {
    /// Band label shown in the menu
    pub name: &'static str,
    /// Low-pass cutoff used to isolate the band
    pub pass: Frequency,
}

impl Station {
    /// Create a station entry
    #[must_use]
    pub const fn new(name: &'static str, pass_hz: u32) -> Self {
        Self {
            name,
            pass: Frequency::from_hz(pass_hz),
        }
    }
}

/// Broadcast network with its bands, in menu order
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Network {
    /// Network label shown in the menu
    pub name: &'static str,
    /// Bands in insertion order
    pub stations: &'static [Station],
}

/// Ordered set of networks
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Catalog {
    networks: &'static [Network],
}

/// Networks available by default
pub const STANDARD_NETWORKS: &[Network] = &[
    Network {
        name: "AWA-96",
        stations: &[
            Station::new("economy", 144_000),
            Station::new("conversation", 288_000),
            Station::new("culture", 240_000),
        ],
    },
    Network {
        name: "Radio Free Europe",
        stations: &[
            Station::new("news", 144_000),
            Station::new("music", 288_000),
            Station::new("talk", 240_000),
        ],
    },
    Network {
        name: "Voice of America",
        stations: &[
            Station::new("english", 144_000),
            Station::new("spanish", 288_000),
            Station::new("french", 240_000),
        ],
    },
];

/// Catalog over [`STANDARD_NETWORKS`]
pub const STANDARD_CATALOG: Catalog = Catalog::new(STANDARD_NETWORKS);

/// Check a 1-based choice against a menu of `count` entries
fn checked_index(choice: i64, count: usize) -> Result<usize, SelectionError> {
    usize::try_from(choice)
        .ok()
        .filter(|&c| (1..=count).contains(&c))
        .map(|c| c - 1)
        .ok_or(SelectionError::OutOfRange {
            value: choice,
            max: count,
        })
}

impl Catalog {
    /// Create a catalog over a network table
    #[must_use]
    pub const fn new(networks: &'static [Network]) -> Self {
        Self { networks }
    }

    /// All networks in menu order
    #[must_use]
    pub const fn networks(&self) -> &'static [Network] {
        self.networks
    }

    /// Number of networks
    #[must_use]
    pub const fn len(&self) -> usize {
        self.networks.len()
    }

    /// True when there are no networks
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.networks.is_empty()
    }

    /// Network by 1-based menu choice
    ///
    /// # Errors
    ///
    /// [`SelectionError::OutOfRange`] unless `1 <= choice <= len()`.
    pub fn network(&self, choice: i64) -> Result<&'static Network, SelectionError> {
        let networks = self.networks;
        checked_index(choice, networks.len()).map(|i| &networks[i])
    }

    /// Band of a network, both by 1-based menu choice
    ///
    /// # Errors
    ///
    /// [`SelectionError::OutOfRange`] if either choice is outside its menu.
    pub fn station(&self, network: i64, band: i64) -> Result<&'static Station, SelectionError> {
        let stations = self.network(network)?.stations;
        checked_index(band, stations.len()).map(|i| &stations[i])
    }

    /// Pass-frequency for a (network, band) choice
    ///
    /// # Errors
    ///
    /// [`SelectionError::OutOfRange`] if either choice is outside its menu.
    pub fn resolve(&self, network: i64, band: i64) -> Result<Frequency, SelectionError> {
        self.station(network, band).map(|s| s.pass)
    }
}

impl Default for Catalog {
    fn default() -> Self {
        STANDARD_CATALOG
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_catalog_shape() {
        assert_eq!(STANDARD_CATALOG.len(), 3);
        for network in STANDARD_CATALOG.networks() {
            assert_eq!(network.stations.len(), 3, "{}", network.name);
        }
    }

    #[test]
    fn zero_and_negative_are_out_of_range() {
        for choice in [0, -1, 4, i64::MAX] {
            assert_eq!(
                STANDARD_CATALOG.network(choice),
                Err(SelectionError::OutOfRange {
                    value: choice,
                    max: 3
                })
            );
        }
    }

    #[test]
    fn resolve_first_band() {
        let pass = STANDARD_CATALOG.resolve(1, 1).unwrap();
        assert_eq!(pass.as_hz(), 144_000);
    }
}
