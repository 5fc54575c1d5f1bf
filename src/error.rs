//! Error types
//!
//! Collaborator failures are reported to the tuner as values and logged;
//! none of them terminate the tuning loop. Only [`ConfigError`] is fatal,
//! and only at startup.

use embedded_hal::{digital, spi};
use thiserror::Error;

use crate::types::Sample;

/// Tuning sensor read failure
#[derive(Error, Clone, Copy, Debug, PartialEq, Eq)]
pub enum SensorError {
    /// SPI transfer to the ADC failed
    #[error("ADC bus error: {0}")]
    Bus(spi::ErrorKind),

    /// The converter returned a value it cannot produce
    #[error("ADC sample {raw} exceeds full scale {full_scale}")]
    OutOfRange {
        /// Value read
        raw: Sample,
        /// Largest valid value
        full_scale: Sample,
    },
}

/// Band switch read failure
#[derive(Error, Clone, Copy, Debug, PartialEq, Eq)]
pub enum SwitchError {
    /// A switch input pin could not be read
    #[error("band switch pin error: {0}")]
    Pin(digital::ErrorKind),
}

/// Indicator write failure
#[derive(Error, Clone, Copy, Debug, PartialEq, Eq)]
pub enum IndicatorError {
    /// An LED output pin could not be driven
    #[error("indicator pin error: {0}")]
    Pin(digital::ErrorKind),
}

/// Invalid tuner configuration, detected before the loop starts
#[derive(Error, Clone, Copy, Debug, PartialEq, Eq)]
pub enum ConfigError {
    /// Calibration range is empty or inverted
    #[error("degenerate sensor range: min {min} must be below max {max}")]
    DegenerateRange {
        /// Configured minimum
        min: Sample,
        /// Configured maximum
        max: Sample,
    },

    /// Hysteresis requires pull-in strictly tighter than pull-off
    #[error("pull-in threshold {pull_in} must be below pull-off threshold {pull_off}")]
    ThresholdOrder {
        /// Configured pull-in threshold
        pull_in: u16,
        /// Configured pull-off threshold
        pull_off: u16,
    },

    /// A tick interval of zero would spin the loop
    #[error("tick interval must be non-zero")]
    ZeroTick,
}
