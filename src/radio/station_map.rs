//! Station Map
//!
//! Spreads a band's streams evenly across the calibrated dial travel.
//! Center `i` sits at `min + step * i`, where
//! `step = floor((max - min) / max(count - 1, 1))`, so the first station is
//! at the left end of the dial and the last one at (or just short of) the right.

use heapless::Vec;
use log::{debug, info, warn};

use crate::config::MAX_STATIONS;
use crate::types::{Band, Sample, SensorRange, StreamId};

/// A station's position on the dial
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StationCenter {
    /// Filtered ADC value the station is centered on
    pub position: Sample,
    /// Stream played when locked here
    pub stream: StreamId,
}

impl StationCenter {
    /// Distance from a dial position to this center
    #[must_use]
    pub const fn distance(&self, position: Sample) -> u16 {
        self.position.abs_diff(position)
    }
}

/// Station centers for the selected band, in dial order
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StationMap {
    band: Band,
    centers: Vec<StationCenter, MAX_STATIONS>,
}

impl StationMap {
    /// Map with no stations (nothing can lock)
    #[must_use]
    pub const fn empty(band: Band) -> Self {
        Self {
            band,
            centers: Vec::new(),
        }
    }

    /// Lay out `streams` across `range`
    ///
    /// Deterministic: the same inputs always give the same map. Streams past
    /// [`MAX_STATIONS`] are dropped.
    #[must_use]
    pub fn build(band: Band, range: SensorRange, streams: &[StreamId]) -> Self {
        let mut map = Self::empty(band);

        if streams.is_empty() {
            info!("Band {} has no stations", band);
            return map;
        }

        if streams.len() > MAX_STATIONS {
            warn!(
                "Band {} lists {} stations, mapping the first {}",
                band,
                streams.len(),
                MAX_STATIONS
            );
        }

        let streams = &streams[..streams.len().min(MAX_STATIONS)];
        let count = streams.len() as u16;
        let step = range.span() / (count - 1).max(1);
        info!(
            "Mapping {} stations on band {}, step {} between {} and {}",
            count,
            band,
            step,
            range.min(),
            range.max()
        );

        for (i, &stream) in streams.iter().enumerate() {
            let position = range.min() + step * i as u16;
            debug!("Mapping center {} to {}", position, stream);
            // Capacity was checked above
            let _ = map.centers.push(StationCenter { position, stream });
        }

        map
    }

    /// Band this map was built for
    #[must_use]
    pub const fn band(&self) -> Band {
        self.band
    }

    /// Number of stations
    #[must_use]
    pub fn len(&self) -> usize {
        self.centers.len()
    }

    /// Check if no station can ever lock
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.centers.is_empty()
    }

    /// All centers in dial order
    #[must_use]
    pub fn centers(&self) -> &[StationCenter] {
        &self.centers
    }

    /// Center closest to `position`
    ///
    /// Ties go to the first center in dial order.
    #[must_use]
    pub fn nearest(&self, position: Sample) -> Option<StationCenter> {
        self.centers.iter().copied().reduce(|best, candidate| {
            if candidate.distance(position) < best.distance(position) {
                candidate
            } else {
                best
            }
        })
    }
}
