//! Tuner State
//!
//! Lock state and the read-only snapshot the tuner exposes after each tick.

use crate::radio::station_map::StationCenter;
use crate::types::{Band, Sample};

/// Whether the dial is parked on a station
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum LockState {
    /// Between stations, filler plays
    #[default]
    Searching,
    /// Close enough to a center, its stream plays
    Locked(StationCenter),
}

impl LockState {
    /// Check if locked onto any station
    #[must_use]
    pub const fn is_locked(&self) -> bool {
        matches!(self, Self::Locked(_))
    }

    /// The locked station, if any
    #[must_use]
    pub const fn center(&self) -> Option<StationCenter> {
        match self {
            Self::Searching => None,
            Self::Locked(center) => Some(*center),
        }
    }
}

/// What a tick did, which decides how long to sleep before the next one
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TickOutcome {
    /// Band switch is off, nothing else was evaluated
    Idle,
    /// Sensor was sampled and the lock decision evaluated
    Tuned,
    /// Sensor read failed, state left unchanged
    SensorFault,
}

impl TickOutcome {
    /// Check if the tick ran the idle branch
    #[must_use]
    pub const fn is_idle(self) -> bool {
        matches!(self, Self::Idle)
    }
}

/// Snapshot of the tuner after a tick
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TunerStatus {
    /// Band switch position last seen
    pub band: Band,
    /// Current lock
    pub lock: LockState,
    /// Last filtered dial position
    pub filtered: Option<Sample>,
    /// Stations mapped on the current band
    pub stations: usize,
    /// Program channel is audible
    pub program_audible: bool,
    /// Filler channel is audible
    pub filler_audible: bool,
}
