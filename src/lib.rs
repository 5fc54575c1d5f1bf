//! Dial Radio Controller Library
//!
//! This library provides the control core of a streaming internet-radio
//! appliance built to look and feel like a vintage tube set. A physical
//! tuning dial moves a potentiometer read through an `MCP3008` ADC, a
//! three-position band switch picks a catalog of streams, and two front
//! panel LEDs show power and tuning lock. Between stations the radio plays
//! static.
//!
//! # Architecture
//!
//! The controller is organized in layers:
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                    APPLICATION LAYER                         │
//! │  Tuning State Machine  │  Station Map  │  Station Catalog    │
//! ├─────────────────────────────────────────────────────────────┤
//! │                  SIGNAL / PLAYBACK LAYER                     │
//! │  Moving Average  │  Channel Slots (program / filler)         │
//! ├─────────────────────────────────────────────────────────────┤
//! │                   HAL / DRIVER LAYER                         │
//! │  MCP3008 (SPI)  │  Band Switch  │  LEDs  │  mplayer          │
//! ├─────────────────────────────────────────────────────────────┤
//! │                    RUNTIME / SCHEDULER                       │
//! │      embassy-time ticks  │  embassy std executor (binary)    │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Design Principles
//!
//! - **Collaborators behind traits**: the tuner only sees [`hal::TuningSensor`],
//!   [`hal::BandSwitch`], [`hal::IndicatorPanel`] and
//!   [`playback::PlaybackTransport`], so host tests drive it with fakes
//! - **Type-driven design**: custom types enforce invariants at construction
//! - **No unsafe code**
//! - **Functional core, imperative shell**: station layout and filtering are
//!   pure; I/O lives in drivers and the binary
//! - **Faults are values**: collaborator failures are logged and survived,
//!   only a bad configuration is refused

#![cfg_attr(not(feature = "std"), no_std)]
#![deny(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub use embassy_time;

/// Hardware Abstraction Layer
///
/// Collaborator traits plus `embedded-hal` backed switch and LED types.
pub mod hal;

/// Peripheral Drivers
///
/// The tuning dial ADC.
pub mod drivers;

/// Signal conditioning
pub mod dsp;

/// Radio Control Logic
///
/// Station layout and the tuning state machine.
pub mod radio;

/// Audio playback channels and backends
pub mod playback;

/// Error types
pub mod error;

/// Shared types used across modules
pub mod types;

/// System configuration and constants
pub mod config;

/// Prelude module for common imports
pub mod prelude {
    //! Convenient re-exports for common types and traits.

    pub use crate::config::*;
    pub use crate::error::*;
    pub use crate::types::*;

    pub use crate::hal::{BandSwitch, IndicatorPanel, TuningSensor};
    pub use crate::playback::{ChannelSlot, PlaybackTransport};
    pub use crate::radio::state::{LockState, TickOutcome, TunerStatus};
    pub use crate::radio::station_map::{StationCenter, StationMap};
    pub use crate::radio::stations::StationCatalog;
    pub use crate::radio::tuner::Tuner;

    // Embassy
    pub use embassy_time::{Duration, Instant, Timer};

    // Logging
    pub use log::{debug, error, info, trace, warn};
}
