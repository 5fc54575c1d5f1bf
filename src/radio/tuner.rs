//! Tuning State Machine
//!
//! Polls the band switch and the tuning dial on a fixed tick and decides
//! whether the dial is locked onto a station or drifting between stations.
//!
//! ```text
//!                 |filtered - nearest| <= pull_in
//!   ┌───────────┐ ─────────────────────────────▶ ┌──────────────┐
//!   │ Searching │                                │ Locked(c)    │
//!   │ filler on │ ◀───────────────────────────── │ program on c │
//!   └───────────┘   |filtered - c| > pull_off    └──────────────┘
//! ```
//!
//! `pull_in < pull_off` gives the lock hysteresis, so a dial resting near a
//! station edge does not flap between the two states. Any band change clears
//! the lock; switching off stops both players and darkens the panel.

use embassy_time::{Duration, Timer};
use log::{debug, info, trace, warn};

use crate::config::{TunerConfig, FILTER_WINDOW_SIZE};
use crate::dsp::filter::MovingAverage;
use crate::error::{ConfigError, SensorError};
use crate::hal::adc::{AdcReading, TuningSensor};
use crate::hal::gpio::{BandSwitch, IndicatorPanel};
use crate::playback::{ChannelSlot, PlaybackTransport};
use crate::radio::state::{LockState, TickOutcome, TunerStatus};
use crate::radio::station_map::StationMap;
use crate::radio::stations::StationCatalog;
use crate::types::{Band, Channel, Indicator, Sample};

/// Dial tuner driving the playback channels and front panel
///
/// Owns its collaborators; all state is private to the tuner.
pub struct Tuner<S, B, I, P, const N: usize = FILTER_WINDOW_SIZE>
where
    P: PlaybackTransport,
{
    config: TunerConfig,
    catalog: StationCatalog,
    sensor: S,
    switch: B,
    indicators: I,
    transport: P,
    band: Band,
    stations: StationMap,
    lock: LockState,
    filter: MovingAverage<N>,
    filtered: Option<Sample>,
    program: ChannelSlot<P::Handle>,
    filler: ChannelSlot<P::Handle>,
}

impl<S, B, I, P, const N: usize> Tuner<S, B, I, P, N>
where
    S: TuningSensor,
    B: BandSwitch,
    I: IndicatorPanel,
    P: PlaybackTransport,
{
    /// Create a tuner, refusing an invalid configuration
    ///
    /// The tuner starts with the band switch assumed off; the first tick
    /// picks up the real position.
    pub fn new(
        config: TunerConfig,
        catalog: StationCatalog,
        sensor: S,
        switch: B,
        indicators: I,
        transport: P,
    ) -> Result<Self, ConfigError> {
        config.validate()?;

        Ok(Self {
            program: ChannelSlot::new(Channel::Program, config.program_volume),
            filler: ChannelSlot::new(Channel::Filler, config.filler_volume),
            config,
            catalog,
            sensor,
            switch,
            indicators,
            transport,
            band: Band::Off,
            stations: StationMap::empty(Band::Off),
            lock: LockState::Searching,
            filter: MovingAverage::new(),
            filtered: None,
        })
    }

    /// Run one evaluation of the control loop
    pub fn tick(&mut self) -> TickOutcome {
        self.poll_band();

        if !self.band.is_on() {
            return TickOutcome::Idle;
        }

        let raw = match self.read_sensor() {
            Ok(raw) => raw,
            Err(e) => {
                warn!("Tuning sensor read failed: {}", e);
                return TickOutcome::SensorFault;
            }
        };

        let filtered = if self.filter.is_empty() {
            debug!("Seeding filter with {}", raw);
            self.filter.seed(raw);
            raw
        } else {
            self.filter.observe(raw)
        };
        trace!("ADC: {}, filtered: {}", raw, filtered);
        self.filtered = Some(filtered);

        match self.lock {
            LockState::Locked(center) => {
                if center.distance(filtered) > self.config.pull_off {
                    info!(
                        "Unlocking, filtered: {} last locked: {}",
                        filtered, center.position
                    );
                    self.unlock();
                }
            }
            LockState::Searching => {
                if let Some(nearest) = self.stations.nearest(filtered) {
                    if nearest.distance(filtered) <= self.config.pull_in {
                        info!(
                            "Locking, center: {} filtered: {} {}",
                            nearest.position, filtered, nearest.stream
                        );
                        self.lock = LockState::Locked(nearest);
                        self.set_indicator(Indicator::TuningLock, true);
                        self.filler.pause(&mut self.transport);
                        self.program.tune(&mut self.transport, nearest.stream);
                    }
                }
            }
        }

        TickOutcome::Tuned
    }

    /// Delay to wait before the tick following `outcome`
    #[must_use]
    pub fn delay_after(&self, outcome: TickOutcome) -> Duration {
        if outcome.is_idle() {
            self.config.idle_tick
        } else {
            self.config.tuning_tick
        }
    }

    /// Poll forever
    ///
    /// Sleeps at the start of every tick: the tuning interval while a band is
    /// selected, the longer idle interval while the switch is off.
    pub async fn run(&mut self) {
        info!(
            "Tuner running, range {:?}, pull-in {}, pull-off {}",
            self.config.range, self.config.pull_in, self.config.pull_off
        );

        let mut delay = self.config.tuning_tick;
        loop {
            Timer::after(delay).await;
            let outcome = self.tick();
            delay = self.delay_after(outcome);
        }
    }

    /// Current band
    #[must_use]
    pub const fn band(&self) -> Band {
        self.band
    }

    /// Current lock
    #[must_use]
    pub const fn lock_state(&self) -> LockState {
        self.lock
    }

    /// Last filtered dial position
    #[must_use]
    pub const fn filtered(&self) -> Option<Sample> {
        self.filtered
    }

    /// Station layout for the current band
    #[must_use]
    pub const fn stations(&self) -> &StationMap {
        &self.stations
    }

    /// Program channel state
    #[must_use]
    pub const fn program(&self) -> &ChannelSlot<P::Handle> {
        &self.program
    }

    /// Filler channel state
    #[must_use]
    pub const fn filler(&self) -> &ChannelSlot<P::Handle> {
        &self.filler
    }

    /// Active configuration
    #[must_use]
    pub const fn config(&self) -> &TunerConfig {
        &self.config
    }

    /// Snapshot of the tuner
    #[must_use]
    pub fn status(&self) -> TunerStatus {
        TunerStatus {
            band: self.band,
            lock: self.lock,
            filtered: self.filtered,
            stations: self.stations.len(),
            program_audible: self.program.is_audible(),
            filler_audible: self.filler.is_audible(),
        }
    }

    /// Tuning sensor
    pub fn sensor_mut(&mut self) -> &mut S {
        &mut self.sensor
    }

    /// Band switch
    pub fn switch_mut(&mut self) -> &mut B {
        &mut self.switch
    }

    /// Indicator panel
    #[must_use]
    pub const fn indicators(&self) -> &I {
        &self.indicators
    }

    /// Playback transport
    #[must_use]
    pub const fn transport(&self) -> &P {
        &self.transport
    }

    fn read_sensor(&mut self) -> Result<Sample, SensorError> {
        let raw = self.sensor.read_sample()?;
        AdcReading::new(raw).map(AdcReading::raw)
    }

    fn poll_band(&mut self) {
        let band = match self.switch.read_band() {
            Ok(band) => band,
            Err(e) => {
                warn!("Band switch read failed: {}", e);
                return;
            }
        };

        if band == self.band {
            return;
        }

        info!("Switching band from {} to {}", self.band, band);
        self.band = band;
        self.lock = LockState::Searching;

        if band.is_on() {
            self.stations = StationMap::build(band, self.config.range, self.catalog.streams(band));
            self.program.pause(&mut self.transport);
            self.set_indicator(Indicator::Power, true);
            self.set_indicator(Indicator::TuningLock, false);
            self.filler
                .play(&mut self.transport, self.config.filler_source);
        } else {
            self.stations = StationMap::empty(band);
            self.program.stop(&mut self.transport);
            self.filler.stop(&mut self.transport);
            self.set_indicator(Indicator::Power, false);
            self.set_indicator(Indicator::TuningLock, false);
        }
    }

    fn unlock(&mut self) {
        self.lock = LockState::Searching;
        self.set_indicator(Indicator::TuningLock, false);
        self.program.pause(&mut self.transport);
        self.filler
            .play(&mut self.transport, self.config.filler_source);
    }

    fn set_indicator(&mut self, indicator: Indicator, on: bool) {
        if let Err(e) = self.indicators.set_indicator(indicator, on) {
            warn!("Failed to set {} indicator: {}", indicator, e);
        }
    }
}
