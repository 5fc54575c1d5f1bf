//! Hardware Abstraction Layer
//!
//! Collaborator interfaces the tuner is built against, plus `embedded-hal`
//! backed implementations for the front panel. Hardware handles are passed
//! in at construction; nothing here is a global.

pub mod adc;
pub mod gpio;

pub use adc::TuningSensor;
pub use gpio::{BandSwitch, IndicatorPanel};
