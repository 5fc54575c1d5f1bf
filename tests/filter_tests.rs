//! Moving Average Filter Tests
//!
//! Run with: cargo test --test filter_tests

use dial_radio::config::{ADC_FULL_SCALE, FILTER_WINDOW_SIZE};
use dial_radio::dsp::filter::MovingAverage;

#[test]
fn new_filter_is_empty() {
    let filter = MovingAverage::<8>::new();
    assert!(filter.is_empty());
    assert_eq!(filter.value(), None);
    assert_eq!(filter.len(), 8);
    assert_eq!(filter.samples().count(), 0);
}

#[test]
fn first_observation_seeds_window() {
    let mut filter = MovingAverage::<FILTER_WINDOW_SIZE>::new();

    assert_eq!(filter.observe(612), 612);
    assert!(!filter.is_empty());
    assert_eq!(filter.sum(), 612 * FILTER_WINDOW_SIZE as u32);
    assert!(filter.samples().all(|s| s == 612));
}

#[test]
fn average_rounds_down() {
    let mut filter = MovingAverage::<4>::new();
    filter.seed(10);

    // 41 / 4
    assert_eq!(filter.observe(11), 10);
    // 44 / 4
    assert_eq!(filter.observe(13), 11);
    // 46 / 4
    assert_eq!(filter.observe(12), 11);
    assert_eq!(filter.value(), Some(11));
}

#[test]
fn step_settles_after_one_window() {
    let mut filter = MovingAverage::<FILTER_WINDOW_SIZE>::new();
    filter.seed(500);

    let mut last = 500;
    for _ in 0..FILTER_WINDOW_SIZE - 1 {
        let value = filter.observe(700);
        assert!(value >= last && value < 700);
        last = value;
    }
    assert_eq!(filter.observe(700), 700);
}

#[test]
fn sum_tracks_window_contents() {
    let mut filter = MovingAverage::<5>::new();
    filter.seed(100);

    for raw in [3, 1000, 47, 512, 0, 999, 88] {
        let value = filter.observe(raw);
        let sum = filter.samples().map(u32::from).sum::<u32>();
        assert_eq!(filter.sum(), sum);
        assert_eq!(u32::from(value), sum / 5);
    }
}

#[test]
fn samples_oldest_first() {
    let mut filter = MovingAverage::<3>::new();
    filter.seed(1);
    filter.observe(2);
    filter.observe(3);

    assert_eq!(filter.samples().collect::<Vec<_>>(), [1, 2, 3]);

    filter.observe(4);
    assert_eq!(filter.samples().collect::<Vec<_>>(), [2, 3, 4]);
}

#[test]
fn reseed_discards_history() {
    let mut filter = MovingAverage::<4>::new();
    filter.seed(900);
    filter.observe(100);

    filter.seed(200);
    assert_eq!(filter.value(), Some(200));
    assert_eq!(filter.samples().collect::<Vec<_>>(), [200; 4]);
}

#[test]
fn full_scale_does_not_overflow() {
    let mut filter = MovingAverage::<64>::new();
    for _ in 0..200 {
        filter.observe(ADC_FULL_SCALE);
    }
    assert_eq!(filter.value(), Some(ADC_FULL_SCALE));
}

#[test]
fn unit_window_passes_through() {
    let mut filter = MovingAverage::<1>::default();
    for raw in [0, 473, 792, 1023] {
        assert_eq!(filter.observe(raw), raw);
    }
}
