//! HAL and Driver Tests
//!
//! Exercises the MCP3008 driver, band selector and front panel LEDs against
//! in-memory `embedded-hal` pins and SPI devices.
//! Run with: cargo test --test hal_tests

use std::cell::Cell;
use std::rc::Rc;

use embedded_hal::digital::{self, InputPin, OutputPin};
use embedded_hal::spi::{self, Operation, SpiDevice};

use dial_radio::drivers::mcp3008::{decode_response, AdcChannel, Mcp3008};
use dial_radio::error::{IndicatorError, SensorError, SwitchError};
use dial_radio::hal::adc::AdcReading;
use dial_radio::hal::gpio::{BandSelector, FrontPanelLeds, LedState, StatusLed};
use dial_radio::hal::{BandSwitch, IndicatorPanel, TuningSensor};
use dial_radio::types::{Band, Indicator};

// =============================================================================
// Fakes
// =============================================================================

#[derive(Debug)]
struct FakeBusError;

impl spi::Error for FakeBusError {
    fn kind(&self) -> spi::ErrorKind {
        spi::ErrorKind::Other
    }
}

#[derive(Default)]
struct FakeSpi {
    response: [u8; 3],
    written: Vec<u8>,
    fail: bool,
}

impl spi::ErrorType for FakeSpi {
    type Error = FakeBusError;
}

impl SpiDevice for FakeSpi {
    fn transaction(&mut self, operations: &mut [Operation<'_, u8>]) -> Result<(), FakeBusError> {
        if self.fail {
            return Err(FakeBusError);
        }
        for op in operations {
            if let Operation::Transfer(read, write) = op {
                self.written.extend_from_slice(&write[..]);
                let n = read.len();
                read.copy_from_slice(&self.response[..n]);
            }
        }
        Ok(())
    }
}

#[derive(Debug)]
struct FakePinError;

impl digital::Error for FakePinError {
    fn kind(&self) -> digital::ErrorKind {
        digital::ErrorKind::Other
    }
}

/// Switch contact, `low` when selected
struct FakeInput {
    low: bool,
    fail: bool,
}

impl FakeInput {
    fn open() -> Self {
        Self { low: false, fail: false }
    }

    fn closed() -> Self {
        Self { low: true, fail: false }
    }

    fn broken() -> Self {
        Self { low: false, fail: true }
    }
}

impl digital::ErrorType for FakeInput {
    type Error = FakePinError;
}

impl InputPin for FakeInput {
    fn is_high(&mut self) -> Result<bool, FakePinError> {
        self.is_low().map(|low| !low)
    }

    fn is_low(&mut self) -> Result<bool, FakePinError> {
        if self.fail {
            Err(FakePinError)
        } else {
            Ok(self.low)
        }
    }
}

/// LED pin whose level is observable from the test
#[derive(Clone, Default)]
struct FakeOutput {
    high: Rc<Cell<bool>>,
    fail: bool,
}

impl digital::ErrorType for FakeOutput {
    type Error = FakePinError;
}

impl OutputPin for FakeOutput {
    fn set_low(&mut self) -> Result<(), FakePinError> {
        if self.fail {
            return Err(FakePinError);
        }
        self.high.set(false);
        Ok(())
    }

    fn set_high(&mut self) -> Result<(), FakePinError> {
        if self.fail {
            return Err(FakePinError);
        }
        self.high.set(true);
        Ok(())
    }
}

// =============================================================================
// MCP3008 Tests
// =============================================================================

#[test]
fn channel_bounds() {
    assert!(AdcChannel::new(0).is_some());
    assert!(AdcChannel::new(7).is_some());
    assert!(AdcChannel::new(8).is_none());
}

#[test]
fn request_frame_encodes_channel() {
    assert_eq!(AdcChannel::new(0).unwrap().request(), [0x01, 0x80, 0x00]);
    assert_eq!(AdcChannel::new(5).unwrap().request(), [0x01, 0xD0, 0x00]);
    assert_eq!(AdcChannel::new(7).unwrap().request(), [0x01, 0xF0, 0x00]);
}

#[test]
fn response_keeps_ten_bits() {
    assert_eq!(decode_response([0x00, 0x00, 0x00]), 0);
    assert_eq!(decode_response([0x00, 0x01, 0x2C]), 300);
    assert_eq!(decode_response([0xFF, 0x03, 0xFF]), 1023);
    // Undefined high bits are masked off
    assert_eq!(decode_response([0xFF, 0xFE, 0x00]), 0x200);
}

#[test]
fn read_sample_over_spi() {
    let spi = FakeSpi {
        response: [0x00, 0x02, 0x1C],
        ..FakeSpi::default()
    };
    let mut adc = Mcp3008::new(spi, AdcChannel::new(0).unwrap());

    assert_eq!(adc.read_sample(), Ok(540));
    assert_eq!(adc.release().written, [0x01, 0x80, 0x00]);
}

#[test]
fn bus_failure_is_reported() {
    let spi = FakeSpi {
        fail: true,
        ..FakeSpi::default()
    };
    let mut adc = Mcp3008::new(spi, AdcChannel::new(0).unwrap());

    assert_eq!(
        adc.read_sample(),
        Err(SensorError::Bus(spi::ErrorKind::Other))
    );
}

#[test]
fn reading_rejects_values_past_full_scale() {
    assert!(AdcReading::new(1023).is_ok());
    assert_eq!(
        AdcReading::new(1024),
        Err(SensorError::OutOfRange {
            raw: 1024,
            full_scale: 1023
        })
    );
}

#[test]
fn reading_fraction() {
    assert!((AdcReading::new(1023).unwrap().as_fraction() - 1.0).abs() < f32::EPSILON);
    assert!(AdcReading::new(0).unwrap().as_fraction().abs() < f32::EPSILON);
}

// =============================================================================
// Band Selector Tests
// =============================================================================

#[test]
fn each_contact_selects_its_band() {
    let cases = [
        (FakeInput::closed(), FakeInput::open(), FakeInput::open(), Band::A),
        (FakeInput::open(), FakeInput::closed(), FakeInput::open(), Band::B),
        (FakeInput::open(), FakeInput::open(), FakeInput::closed(), Band::C),
        (FakeInput::open(), FakeInput::open(), FakeInput::open(), Band::Off),
    ];

    for (a, b, c, expected) in cases {
        let mut selector = BandSelector::new(a, b, c);
        assert_eq!(selector.read_band(), Ok(expected));
    }
}

#[test]
fn first_closed_contact_wins() {
    let mut selector = BandSelector::new(FakeInput::open(), FakeInput::closed(), FakeInput::closed());
    assert_eq!(selector.read_band(), Ok(Band::B));

    let mut selector = BandSelector::new(FakeInput::closed(), FakeInput::closed(), FakeInput::closed());
    assert_eq!(selector.read_band(), Ok(Band::A));
}

#[test]
fn pin_failure_is_reported() {
    let mut selector = BandSelector::new(FakeInput::open(), FakeInput::broken(), FakeInput::open());
    assert_eq!(
        selector.read_band(),
        Err(SwitchError::Pin(digital::ErrorKind::Other))
    );
}

#[test]
fn earlier_contact_masks_later_failure() {
    let mut selector = BandSelector::new(FakeInput::closed(), FakeInput::broken(), FakeInput::open());
    assert_eq!(selector.read_band(), Ok(Band::A));
}

// =============================================================================
// LED Tests
// =============================================================================

#[test]
fn led_state_toggle() {
    assert_eq!(LedState::Off.toggle(), LedState::On);
    assert_eq!(LedState::On.toggle(), LedState::Off);
    assert_eq!(LedState::from_on(true), LedState::On);
    assert_eq!(LedState::default(), LedState::Off);
}

#[test]
fn status_led_starts_off() {
    let pin = FakeOutput::default();
    pin.high.set(true);

    let mut led = StatusLed::new(pin.clone()).unwrap();
    assert!(!pin.high.get());
    assert_eq!(led.state(), LedState::Off);

    led.on().unwrap();
    assert!(pin.high.get());
    assert_eq!(led.state(), LedState::On);
}

#[test]
fn panel_drives_the_right_pin() {
    let power = FakeOutput::default();
    let tuning = FakeOutput::default();
    let mut panel = FrontPanelLeds::new(power.clone(), tuning.clone()).unwrap();

    panel.set_indicator(Indicator::Power, true).unwrap();
    assert!(power.high.get());
    assert!(!tuning.high.get());
    assert_eq!(panel.state(Indicator::Power), LedState::On);
    assert_eq!(panel.state(Indicator::TuningLock), LedState::Off);

    panel.set_indicator(Indicator::TuningLock, true).unwrap();
    panel.set_indicator(Indicator::Power, false).unwrap();
    assert!(!power.high.get());
    assert!(tuning.high.get());
}

#[test]
fn panel_reports_pin_failure() {
    let power = FakeOutput::default();
    let mut tuning = FakeOutput::default();
    tuning.fail = true;

    assert!(matches!(
        FrontPanelLeds::new(power, tuning),
        Err(IndicatorError::Pin(digital::ErrorKind::Other))
    ));
}
