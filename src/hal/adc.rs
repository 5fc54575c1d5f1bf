//! ADC Abstractions
//!
//! The tuning dial is a potentiometer read through an external converter.
//! The tuner only sees [`TuningSensor`]; the converter driver lives in
//! [`crate::drivers::mcp3008`].

use core::fmt;

use crate::config::ADC_FULL_SCALE;
use crate::error::SensorError;
use crate::types::Sample;

/// Source of raw dial position samples
pub trait TuningSensor {
    /// Read one raw sample
    fn read_sample(&mut self) -> Result<Sample, SensorError>;
}

/// ADC reading result
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct AdcReading {
    /// Raw 10-bit ADC value (0-1023)
    raw: Sample,
}

impl AdcReading {
    /// Create a reading, rejecting values the converter cannot produce
    pub const fn new(raw: Sample) -> Result<Self, SensorError> {
        if raw > ADC_FULL_SCALE {
            Err(SensorError::OutOfRange {
                raw,
                full_scale: ADC_FULL_SCALE,
            })
        } else {
            Ok(Self { raw })
        }
    }

    /// Get the raw value
    #[must_use]
    pub const fn raw(self) -> Sample {
        self.raw
    }

    /// Fraction of full scale (0.0 to 1.0)
    #[must_use]
    pub fn as_fraction(self) -> f32 {
        f32::from(self.raw) / f32::from(ADC_FULL_SCALE)
    }
}

impl fmt::Debug for AdcReading {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ADC({})", self.raw)
    }
}
