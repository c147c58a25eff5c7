//! Catalog Tests
//!
//! Every (network, band) pair of the standard catalog and its menu bounds.

use band_player::error::SelectionError;
use band_player::{Frequency, STANDARD_CATALOG};

#[test]
fn all_pairs_resolve() {
    let expected = [144_000, 288_000, 240_000];
    for network in 1..=3 {
        for (band, &hz) in (1..=3).zip(&expected) {
            assert_eq!(
                STANDARD_CATALOG.resolve(network, band),
                Ok(Frequency::from_hz(hz)),
                "network {network} band {band}"
            );
        }
    }
}

#[test]
fn network_names_in_menu_order() {
    let names: Vec<_> = STANDARD_CATALOG.networks().iter().map(|n| n.name).collect();
    assert_eq!(names, ["AWA-96", "Radio Free Europe", "Voice of America"]);
}

#[test]
fn station_names() {
    assert_eq!(STANDARD_CATALOG.station(1, 2).unwrap().name, "conversation");
    assert_eq!(STANDARD_CATALOG.station(2, 3).unwrap().name, "talk");
    assert_eq!(STANDARD_CATALOG.station(3, 1).unwrap().name, "english");
}

#[test]
fn out_of_range_network() {
    for choice in [0, 4, -1, i64::MAX] {
        assert_eq!(
            STANDARD_CATALOG.network(choice).unwrap_err(),
            SelectionError::OutOfRange { value: choice, max: 3 }
        );
    }
}

#[test]
fn out_of_range_band() {
    assert_eq!(
        STANDARD_CATALOG.resolve(2, 4),
        Err(SelectionError::OutOfRange { value: 4, max: 3 })
    );
}
