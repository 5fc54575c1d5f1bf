//! `MCP3008` 10-bit ADC Driver
//!
//! Reads the tuning dial potentiometer over SPI.
//!
//! A single-ended conversion is one 3-byte full-duplex transfer:
//!
//! ```text
//! MOSI: 0000_0001  1ccc_0000  xxxx_xxxx     (start bit, SGL + channel)
//! MISO: xxxx_xxxx  xxxx_x0BB  BBBB_BBBB     (null bit, 10-bit result)
//! ```

use embedded_hal::spi::{Error as _, SpiDevice};

use crate::error::SensorError;
use crate::hal::adc::{AdcReading, TuningSensor};
use crate::types::Sample;

/// Command byte constants
mod cmd {
    pub const START: u8 = 0x01;
    pub const SINGLE_ENDED: u8 = 0x80;
}

/// Input channel (0-7)
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AdcChannel(u8);

impl AdcChannel {
    /// Number of inputs on the chip
    pub const COUNT: u8 = 8;

    /// Create a channel, returns None if out of range
    #[must_use]
    pub const fn new(channel: u8) -> Option<Self> {
        if channel < Self::COUNT {
            Some(Self(channel))
        } else {
            None
        }
    }

    /// Get the channel index
    #[must_use]
    pub const fn index(self) -> u8 {
        self.0
    }

    /// Request frame for a single-ended read of this channel
    #[must_use]
    pub const fn request(self) -> [u8; 3] {
        [cmd::START, cmd::SINGLE_ENDED | (self.0 << 4), 0x00]
    }
}

/// Extract the 10-bit result from a response frame
#[must_use]
pub const fn decode_response(frame: [u8; 3]) -> Sample {
    (((frame[1] as u16) << 8) | frame[2] as u16) & 0x03FF
}

/// `MCP3008` on an SPI device
pub struct Mcp3008<SPI> {
    spi: SPI,
    channel: AdcChannel,
}

impl<SPI: SpiDevice> Mcp3008<SPI> {
    /// Create a driver reading one channel
    #[must_use]
    pub const fn new(spi: SPI, channel: AdcChannel) -> Self {
        Self { spi, channel }
    }

    /// Channel being read
    #[must_use]
    pub const fn channel(&self) -> AdcChannel {
        self.channel
    }

    /// Perform one conversion
    pub fn read(&mut self) -> Result<AdcReading, SensorError> {
        let request = self.channel.request();
        let mut response = [0u8; 3];
        self.spi
            .transfer(&mut response, &request)
            .map_err(|e| SensorError::Bus(e.kind()))?;
        AdcReading::new(decode_response(response))
    }

    /// Release the SPI device
    pub fn release(self) -> SPI {
        self.spi
    }
}

impl<SPI: SpiDevice> TuningSensor for Mcp3008<SPI> {
    fn read_sample(&mut self) -> Result<Sample, SensorError> {
        self.read().map(AdcReading::raw)
    }
}
