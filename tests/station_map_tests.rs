//! Station Map Tests
//!
//! Tests for laying streams out across the dial and nearest-center lookup.
//! Run with: cargo test --test station_map_tests

use dial_radio::config::{DEFAULT_RANGE, MAX_STATIONS};
use dial_radio::radio::station_map::{StationCenter, StationMap};
use dial_radio::radio::stations::{StationCatalog, BBC_STREAMS, CBC_STREAMS};
use dial_radio::types::{Band, SensorRange, StreamId};

fn range(min: u16, max: u16) -> SensorRange {
    SensorRange::new(min, max).unwrap()
}

fn positions(map: &StationMap) -> Vec<u16> {
    map.centers().iter().map(|c| c.position).collect()
}

// =============================================================================
// Layout Tests
// =============================================================================

#[test]
fn bbc_band_on_factory_calibration() {
    let map = StationMap::build(Band::A, DEFAULT_RANGE, BBC_STREAMS);

    // 319 / 10 = 31
    let expected: Vec<u16> = (0..11).map(|i| 473 + 31 * i).collect();
    assert_eq!(positions(&map), expected);
    assert_eq!(map.centers()[0].stream, BBC_STREAMS[0]);
    assert_eq!(map.centers()[10].stream, BBC_STREAMS[10]);
    assert_eq!(map.band(), Band::A);
}

#[test]
fn cbc_band_on_factory_calibration() {
    let map = StationMap::build(Band::B, DEFAULT_RANGE, CBC_STREAMS);

    // 319 / 7 = 45
    assert_eq!(positions(&map), [473, 518, 563, 608, 653, 698, 743, 788]);
}

#[test]
fn single_station_sits_at_left_end() {
    let map = StationMap::build(Band::A, range(100, 200), &["only"]);
    assert_eq!(positions(&map), [100]);
}

#[test]
fn two_stations_span_the_dial() {
    let map = StationMap::build(Band::A, range(100, 200), &["left", "right"]);
    assert_eq!(positions(&map), [100, 200]);
}

#[test]
fn centers_stay_within_range() {
    let r = range(473, 792);
    for count in 1..=MAX_STATIONS {
        let streams: Vec<StreamId> = vec!["s"; count];
        let map = StationMap::build(Band::A, r, &streams);
        assert_eq!(map.len(), count);
        assert!(map.centers().iter().all(|c| r.contains(c.position)));
        assert!(map.centers().windows(2).all(|w| w[0].position < w[1].position));
    }
}

#[test]
fn empty_band_has_no_centers() {
    let map = StationMap::build(Band::C, DEFAULT_RANGE, &[]);
    assert!(map.is_empty());
    assert_eq!(map.nearest(600), None);
}

#[test]
fn extra_streams_are_dropped() {
    let streams = [""; MAX_STATIONS + 8];
    let map = StationMap::build(Band::A, DEFAULT_RANGE, &streams);
    assert_eq!(map.len(), MAX_STATIONS);
}

#[test]
fn build_is_deterministic() {
    let first = StationMap::build(Band::A, DEFAULT_RANGE, BBC_STREAMS);
    let second = StationMap::build(Band::A, DEFAULT_RANGE, BBC_STREAMS);
    assert_eq!(first, second);
}

// =============================================================================
// Nearest Center Tests
// =============================================================================

#[test]
fn nearest_picks_closest_center() {
    let map = StationMap::build(Band::A, range(500, 600), &["a", "b", "c"]);

    assert_eq!(map.nearest(510).map(|c| c.stream), Some("a"));
    assert_eq!(map.nearest(540).map(|c| c.stream), Some("b"));
    assert_eq!(map.nearest(580).map(|c| c.stream), Some("c"));
}

#[test]
fn nearest_outside_range_clamps_to_ends() {
    let map = StationMap::build(Band::A, range(500, 600), &["a", "b", "c"]);

    assert_eq!(map.nearest(0).map(|c| c.stream), Some("a"));
    assert_eq!(map.nearest(1023).map(|c| c.stream), Some("c"));
}

#[test]
fn nearest_tie_goes_to_first_center() {
    let map = StationMap::build(Band::A, range(500, 600), &["a", "b", "c"]);

    assert_eq!(map.nearest(525).map(|c| c.stream), Some("a"));
    assert_eq!(map.nearest(575).map(|c| c.stream), Some("b"));
}

#[test]
fn center_distance_is_symmetric() {
    let center = StationCenter {
        position: 550,
        stream: "b",
    };
    assert_eq!(center.distance(543), 7);
    assert_eq!(center.distance(557), 7);
    assert_eq!(center.distance(550), 0);
}

// =============================================================================
// Catalog Tests
// =============================================================================

#[test]
fn default_catalog_bands() {
    let catalog = StationCatalog::default();

    assert_eq!(catalog.streams(Band::A).len(), 11);
    assert_eq!(catalog.streams(Band::B).len(), 8);
    assert!(catalog.streams(Band::C).is_empty());
    assert!(catalog.streams(Band::Off).is_empty());
}

#[test]
fn catalog_fits_station_limit() {
    let catalog = StationCatalog::DEFAULT;
    for band in Band::ALL {
        assert!(catalog.streams(band).len() <= MAX_STATIONS);
    }
}
