//! Dial Radio Main Application
//!
//! Entry point for the Linux appliance. Wires the sysfs GPIO band switch and
//! LEDs, the spidev tuning ADC and the mplayer backend into the tuner, then
//! polls forever on the embassy std executor.

use anyhow::{anyhow, Context, Result};
use clap::{Parser, Subcommand};
use embassy_executor::Spawner;
use embassy_time::{Duration, Timer};
use embedded_hal::digital::PinState;
use env_logger::Env;
use linux_embedded_hal::spidev::{SpiModeFlags, SpidevOptions};
use linux_embedded_hal::{SpidevDevice, SysfsPin};
use log::{error, info, warn};

use dial_radio::config::{adc, pins, player, CALIBRATION_TICK_MS, STATIC_FILE};
use dial_radio::drivers::mcp3008::{AdcChannel, Mcp3008};
use dial_radio::dsp::filter::MovingAverage;
use dial_radio::hal::gpio::{BandSelector, FrontPanelLeds};
use dial_radio::playback::mplayer::MplayerTransport;
use dial_radio::prelude::*;

#[derive(Parser, Debug)]
#[command(author, version, about = "Tuning-dial controller for a streaming internet radio", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,

    /// spidev node the tuning ADC is attached to
    #[arg(long, default_value = adc::SPI_DEVICE)]
    spi_device: String,

    /// ADC input the dial wiper is wired to (0-7)
    #[arg(long, default_value_t = adc::CHANNEL)]
    adc_channel: u8,

    /// Raw ADC value at the left end of the dial
    #[arg(long, default_value_t = ADC_MIN_CALIBRATED)]
    adc_min: u16,

    /// Raw ADC value at the right end of the dial
    #[arg(long, default_value_t = ADC_MAX_CALIBRATED)]
    adc_max: u16,

    /// Audio file played between stations
    #[arg(long, default_value = STATIC_FILE)]
    static_file: String,

    /// Player binary
    #[arg(long, default_value = player::BINARY)]
    player: String,

    /// Player audio output driver
    #[arg(long, default_value = player::AUDIO_OUTPUT)]
    audio_output: String,
}

#[derive(Subcommand, Debug, Clone, Copy, Default)]
enum Command {
    /// Run the radio (default)
    #[default]
    Run,
    /// Print raw and filtered dial readings for calibration
    Calibrate,
}

/// Main entry point
#[embassy_executor::main]
async fn main(_spawner: Spawner) {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    info!("Dial Radio v{}", env!("CARGO_PKG_VERSION"));

    let result = match cli.command.unwrap_or_default() {
        Command::Run => run(&cli).await,
        Command::Calibrate => calibrate(&cli).await,
    };

    if let Err(e) = result {
        error!("{e:#}");
        std::process::exit(1);
    }
}

async fn run(cli: &Cli) -> Result<()> {
    let config = TunerConfig {
        filler_source: cli.static_file.clone().leak(),
        ..TunerConfig::with_range(cli.adc_min, cli.adc_max)?
    };

    let sensor = open_adc(cli)?;
    let switch = BandSelector::new(
        input_pin(pins::BAND_A)?,
        input_pin(pins::BAND_B)?,
        input_pin(pins::BAND_C)?,
    );
    let leds = FrontPanelLeds::new(output_pin(pins::LED_POWER)?, output_pin(pins::LED_TUNING)?)
        .context("initializing front panel LEDs")?;
    let transport = MplayerTransport::new(&cli.player, &cli.audio_output);

    info!("Front panel initialized");

    let mut tuner: Tuner<_, _, _, _> = Tuner::new(
        config,
        StationCatalog::DEFAULT,
        sensor,
        switch,
        leds,
        transport,
    )?;

    tuner.run().await;
    Ok(())
}

async fn calibrate(cli: &Cli) -> Result<()> {
    let mut adc = open_adc(cli)?;
    let mut filter = MovingAverage::<FILTER_WINDOW_SIZE>::new();

    info!("Calibration mode, turn the dial to both ends and note the filtered values");

    loop {
        match adc.read() {
            Ok(reading) => {
                let filtered = filter.observe(reading.raw());
                println!("raw: {:4}  filtered: {:4}", reading.raw(), filtered);
            }
            Err(e) => warn!("Tuning sensor read failed: {e}"),
        }
        Timer::after(Duration::from_millis(CALIBRATION_TICK_MS)).await;
    }
}

fn open_adc(cli: &Cli) -> Result<Mcp3008<SpidevDevice>> {
    let channel = AdcChannel::new(cli.adc_channel)
        .ok_or_else(|| anyhow!("ADC channel {} out of range (0-7)", cli.adc_channel))?;

    let mut spi = SpidevDevice::open(&cli.spi_device)
        .map_err(|e| anyhow!("opening {}: {e:?}", cli.spi_device))?;
    let options = SpidevOptions::new()
        .bits_per_word(8)
        .max_speed_hz(adc::SPEED_HZ)
        .mode(SpiModeFlags::SPI_MODE_3)
        .build();
    spi.0
        .configure(&options)
        .with_context(|| format!("configuring {}", cli.spi_device))?;

    info!(
        "Tuning ADC on {} channel {} at {} Hz",
        cli.spi_device,
        channel.index(),
        adc::SPEED_HZ
    );

    Ok(Mcp3008::new(spi, channel))
}

fn input_pin(number: u64) -> Result<SysfsPin> {
    let pin = SysfsPin::new(number);
    pin.export()
        .map_err(|e| anyhow!("exporting GPIO {number}: {e:?}"))?;
    pin.into_input_pin()
        .map_err(|e| anyhow!("configuring GPIO {number} as input: {e:?}"))
}

fn output_pin(number: u64) -> Result<SysfsPin> {
    let pin = SysfsPin::new(number);
    pin.export()
        .map_err(|e| anyhow!("exporting GPIO {number}: {e:?}"))?;
    pin.into_output_pin(PinState::Low)
        .map_err(|e| anyhow!("configuring GPIO {number} as output: {e:?}"))
}
