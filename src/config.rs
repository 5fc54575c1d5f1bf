//! System configuration and hardware constants
//!
//! This module defines compile-time constants for the tuner hardware.
//! All pin mappings, calibration values, and timing parameters are centralized here.
//! [`TunerConfig`] collects the subset that may be overridden at startup.

use embassy_time::Duration;

use crate::error::ConfigError;
use crate::types::{Sample, SensorRange, StreamId, Volume};

/// Largest value the 10-bit tuning ADC can report
pub const ADC_FULL_SCALE: Sample = 1023;

/// ADC value at the left end of the tuning dial
pub const ADC_MIN_CALIBRATED: Sample = 473;

/// ADC value at the right end of the tuning dial
pub const ADC_MAX_CALIBRATED: Sample = 792;

/// Factory calibration range (checked at compile time)
pub const DEFAULT_RANGE: SensorRange = match SensorRange::new(ADC_MIN_CALIBRATED, ADC_MAX_CALIBRATED) {
    Some(range) => range,
    None => panic!("factory calibration must satisfy min < max"),
};

/// Moving average window length in samples
pub const FILTER_WINDOW_SIZE: usize = 20;

/// How close the dial must come to a station center to lock onto it
pub const PULL_IN_THRESHOLD: u16 = 3;

/// How far the dial must wander from a locked center to unlock
pub const PULL_OFF_THRESHOLD: u16 = 7;

/// Poll interval while a band is selected
pub const TUNING_TICK_MS: u64 = 100;

/// Poll interval while the band switch is off
pub const IDLE_TICK_MS: u64 = 500;

/// Interval between readings in calibration mode
pub const CALIBRATION_TICK_MS: u64 = 250;

/// Program channel volume (percent)
pub const PROGRAM_VOLUME: u8 = 80;

/// Filler channel volume (percent)
pub const FILLER_VOLUME: u8 = 100;

/// Static noise asset played while searching
pub const STATIC_FILE: &str = "/static.wav";

/// Largest number of stations mapped onto one band
pub const MAX_STATIONS: usize = 32;

/// Tuning ADC (MCP3008) wiring
pub mod adc {
    //! SPI parameters for the tuning ADC

    /// spidev device node (bus 0, chip select 0)
    pub const SPI_DEVICE: &str = "/dev/spidev0.0";

    /// ADC input channel the dial wiper is connected to
    pub const CHANNEL: u8 = 0;

    /// SPI clock
    pub const SPEED_HZ: u32 = 500_000;
}

/// Pin assignments for GPIO
pub mod pins {
    //! sysfs GPIO numbers matching the front panel wiring

    /// Band switch position A (active low)
    pub const BAND_A: u64 = 492;

    /// Band switch position B (active low)
    pub const BAND_B: u64 = 493;

    /// Band switch position C (active low)
    pub const BAND_C: u64 = 494;

    /// Power LED
    pub const LED_POWER: u64 = 495;

    /// Tuning lock LED
    pub const LED_TUNING: u64 = 480;
}

/// External player process
pub mod player {
    //! mplayer invocation

    /// Player binary
    pub const BINARY: &str = "mplayer";

    /// Audio output driver
    pub const AUDIO_OUTPUT: &str = "pulse";

    /// Options passed ahead of the audio output and volume
    pub const BASE_OPTIONS: &[&str] = &["-loop", "0", "-slave", "-really-quiet"];
}

/// Runtime tuner configuration
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TunerConfig {
    /// Calibrated dial travel
    pub range: SensorRange,
    /// Lock acquisition distance
    pub pull_in: u16,
    /// Lock release distance
    pub pull_off: u16,
    /// Delay between ticks while tuning
    pub tuning_tick: Duration,
    /// Delay between ticks while off
    pub idle_tick: Duration,
    /// Program channel volume
    pub program_volume: Volume,
    /// Filler channel volume
    pub filler_volume: Volume,
    /// Audio played on the filler channel
    pub filler_source: StreamId,
}

impl TunerConfig {
    /// Build a config for the given calibration, other values default
    pub fn with_range(min: Sample, max: Sample) -> Result<Self, ConfigError> {
        let range = SensorRange::new(min, max).ok_or(ConfigError::DegenerateRange { min, max })?;
        Ok(Self {
            range,
            ..Self::default()
        })
    }

    /// Check the invariants the tuner relies on
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.range.min() >= self.range.max() {
            return Err(ConfigError::DegenerateRange {
                min: self.range.min(),
                max: self.range.max(),
            });
        }
        if self.pull_in >= self.pull_off {
            return Err(ConfigError::ThresholdOrder {
                pull_in: self.pull_in,
                pull_off: self.pull_off,
            });
        }
        if self.tuning_tick.as_ticks() == 0 || self.idle_tick.as_ticks() == 0 {
            return Err(ConfigError::ZeroTick);
        }
        Ok(())
    }
}

impl Default for TunerConfig {
    fn default() -> Self {
        Self {
            range: DEFAULT_RANGE,
            pull_in: PULL_IN_THRESHOLD,
            pull_off: PULL_OFF_THRESHOLD,
            tuning_tick: Duration::from_millis(TUNING_TICK_MS),
            idle_tick: Duration::from_millis(IDLE_TICK_MS),
            program_volume: Volume::from_percent(PROGRAM_VOLUME),
            filler_volume: Volume::from_percent(FILLER_VOLUME),
            filler_source: STATIC_FILE,
        }
    }
}

