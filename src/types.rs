//! Shared types used across the tuner
//!
//! This module defines domain-specific types that enforce invariants
//! at construction time and provide type safety throughout the codebase.

use core::fmt;

/// Raw dial position as reported by the tuning ADC
pub type Sample = u16;

/// Opaque stream identifier (URL or local audio asset path)
pub type StreamId = &'static str;

/// Calibrated sensor range
///
/// The raw samples read at the two physical ends of the dial travel.
/// Always satisfies `min < max`.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct SensorRange {
    min: Sample,
    max: Sample,
}

impl SensorRange {
    /// Create a new range, returns None if `min >= max`
    #[must_use]
    pub const fn new(min: Sample, max: Sample) -> Option<Self> {
        if min < max {
            Some(Self { min, max })
        } else {
            None
        }
    }

    /// Sample at the left end of the dial
    #[must_use]
    pub const fn min(self) -> Sample {
        self.min
    }

    /// Sample at the right end of the dial
    #[must_use]
    pub const fn max(self) -> Sample {
        self.max
    }

    /// Width of the range in sample units
    #[must_use]
    pub const fn span(self) -> u16 {
        self.max - self.min
    }

    /// Check whether a sample lies within the calibrated travel
    #[must_use]
    pub const fn contains(self, sample: Sample) -> bool {
        sample >= self.min && sample <= self.max
    }
}

impl fmt::Debug for SensorRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SensorRange({}..={})", self.min, self.max)
    }
}

/// Band switch position
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum Band {
    /// Switch in the off position, nothing plays
    #[default]
    Off,
    /// Band A
    A,
    /// Band B
    B,
    /// Band C
    C,
}

impl Band {
    /// All positions in switch order
    pub const ALL: [Self; 4] = [Self::Off, Self::A, Self::B, Self::C];

    /// Check if this position selects a playable band
    #[must_use]
    pub const fn is_on(self) -> bool {
        !matches!(self, Self::Off)
    }

    /// Single-letter label used on the front panel
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Off => "OFF",
            Self::A => "A",
            Self::B => "B",
            Self::C => "C",
        }
    }
}

impl fmt::Display for Band {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Logical playback channel
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Channel {
    /// The selected station
    Program,
    /// Static noise played between stations
    Filler,
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Program => f.write_str("program"),
            Self::Filler => f.write_str("filler"),
        }
    }
}

/// Front panel status light
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Indicator {
    /// Lit whenever a band is selected
    Power,
    /// Lit while locked onto a station
    TuningLock,
}

impl fmt::Display for Indicator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Power => f.write_str("power"),
            Self::TuningLock => f.write_str("tuning"),
        }
    }
}

/// Playback volume setting
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct Volume(u8);

impl Volume {
    /// Silent
    pub const MIN: Self = Self(0);

    /// Full scale
    pub const MAX: Self = Self(100);

    /// Create a volume from percentage (0-100), clamped
    #[must_use]
    pub const fn from_percent(percent: u8) -> Self {
        if percent > 100 {
            Self(100)
        } else {
            Self(percent)
        }
    }

    /// Get the volume as a percentage
    #[must_use]
    pub const fn as_percent(self) -> u8 {
        self.0
    }
}

impl Default for Volume {
    fn default() -> Self {
        Self::MAX
    }
}

impl fmt::Display for Volume {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.0)
    }
}
