//! GPIO Abstractions
//!
//! Type-safe wrappers for the band switch and front panel LEDs.
//! Generic over `embedded-hal` pins so the same code drives sysfs GPIO on
//! the appliance and plain fakes in host tests.

use embedded_hal::digital::{Error as _, InputPin, OutputPin};
use log::debug;

use crate::error::{IndicatorError, SwitchError};
use crate::types::{Band, Indicator};

/// Source of the band switch position
pub trait BandSwitch {
    /// Read the current switch position
    fn read_band(&mut self) -> Result<Band, SwitchError>;
}

/// Sink for the front panel status lights
pub trait IndicatorPanel {
    /// Turn one indicator on or off
    fn set_indicator(&mut self, indicator: Indicator, on: bool) -> Result<(), IndicatorError>;
}

/// LED state
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum LedState {
    /// LED is off
    #[default]
    Off,
    /// LED is on
    On,
}

impl LedState {
    /// Toggle the LED state
    #[must_use]
    pub const fn toggle(self) -> Self {
        match self {
            Self::Off => Self::On,
            Self::On => Self::Off,
        }
    }

    /// State for a boolean `on`
    #[must_use]
    pub const fn from_on(on: bool) -> Self {
        if on {
            Self::On
        } else {
            Self::Off
        }
    }
}

/// Single status LED (active high)
pub struct StatusLed<P> {
    pin: P,
    state: LedState,
}

impl<P: OutputPin> StatusLed<P> {
    /// Create a status LED, driven off
    pub fn new(pin: P) -> Result<Self, IndicatorError> {
        let mut led = Self {
            pin,
            state: LedState::Off,
        };
        led.off()?;
        Ok(led)
    }

    /// Turn LED on
    pub fn on(&mut self) -> Result<(), IndicatorError> {
        self.pin
            .set_high()
            .map_err(|e| IndicatorError::Pin(e.kind()))?;
        self.state = LedState::On;
        Ok(())
    }

    /// Turn LED off
    pub fn off(&mut self) -> Result<(), IndicatorError> {
        self.pin
            .set_low()
            .map_err(|e| IndicatorError::Pin(e.kind()))?;
        self.state = LedState::Off;
        Ok(())
    }

    /// Drive to a given state
    pub fn set(&mut self, state: LedState) -> Result<(), IndicatorError> {
        match state {
            LedState::On => self.on(),
            LedState::Off => self.off(),
        }
    }

    /// Get current state
    #[must_use]
    pub const fn state(&self) -> LedState {
        self.state
    }

    /// Release the pin
    pub fn into_inner(self) -> P {
        self.pin
    }
}

/// Power and tuning-lock LEDs
pub struct FrontPanelLeds<P> {
    power: StatusLed<P>,
    tuning: StatusLed<P>,
}

impl<P: OutputPin> FrontPanelLeds<P> {
    /// Take both LED pins, turning both lights off
    pub fn new(power: P, tuning: P) -> Result<Self, IndicatorError> {
        Ok(Self {
            power: StatusLed::new(power)?,
            tuning: StatusLed::new(tuning)?,
        })
    }

    /// State of one light
    #[must_use]
    pub const fn state(&self, indicator: Indicator) -> LedState {
        match indicator {
            Indicator::Power => self.power.state(),
            Indicator::TuningLock => self.tuning.state(),
        }
    }
}

impl<P: OutputPin> IndicatorPanel for FrontPanelLeds<P> {
    fn set_indicator(&mut self, indicator: Indicator, on: bool) -> Result<(), IndicatorError> {
        debug!("{} LED {}", indicator, if on { "on" } else { "off" });
        let led = match indicator {
            Indicator::Power => &mut self.power,
            Indicator::TuningLock => &mut self.tuning,
        };
        led.set(LedState::from_on(on))
    }
}

/// Three-position band switch plus off
///
/// Each of the A/B/C contacts pulls its input low when selected. The switch
/// is wired so at most one of them is low; when none is, the switch is off.
/// Inputs are checked in A, B, C order and the first low one wins.
pub struct BandSelector<P> {
    band_a: P,
    band_b: P,
    band_c: P,
}

impl<P: InputPin> BandSelector<P> {
    /// Create a selector from the three switch contacts
    #[must_use]
    pub const fn new(band_a: P, band_b: P, band_c: P) -> Self {
        Self {
            band_a,
            band_b,
            band_c,
        }
    }
}

impl<P: InputPin> BandSwitch for BandSelector<P> {
    fn read_band(&mut self) -> Result<Band, SwitchError> {
        let contacts = [
            (Band::A, &mut self.band_a),
            (Band::B, &mut self.band_b),
            (Band::C, &mut self.band_c),
        ];

        for (band, pin) in contacts {
            if pin.is_low().map_err(|e| SwitchError::Pin(e.kind()))? {
                return Ok(band);
            }
        }

        Ok(Band::Off)
    }
}
