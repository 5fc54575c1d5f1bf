//! Station Catalog
//!
//! The ordered list of streams assigned to each band switch position.
//! Stations are laid out across the dial in table order, left to right.

use crate::types::{Band, StreamId};

/// BBC national and digital stations
pub const BBC_STREAMS: &[StreamId] = &[
    "http://a.files.bbci.co.uk/media/live/manifesto/audio/simulcast/hls/nonuk/sbr_low/ak/bbc_radio_one.m3u8",
    "http://a.files.bbci.co.uk/media/live/manifesto/audio/simulcast/hls/nonuk/sbr_low/ak/bbc_1xtra.m3u8",
    "http://a.files.bbci.co.uk/media/live/manifesto/audio/simulcast/hls/nonuk/sbr_low/ak/bbc_radio_one_dance.m3u8",
    "http://a.files.bbci.co.uk/media/live/manifesto/audio/simulcast/hls/nonuk/sbr_low/ak/bbc_radio_one_relax.m3u8",
    "http://a.files.bbci.co.uk/media/live/manifesto/audio/simulcast/hls/nonuk/sbr_low/ak/bbc_radio_two.m3u8",
    "http://a.files.bbci.co.uk/media/live/manifesto/audio/simulcast/hls/nonuk/sbr_low/ak/bbc_radio_three.m3u8",
    "http://a.files.bbci.co.uk/media/live/manifesto/audio/simulcast/hls/nonuk/sbr_low/ak/bbc_radio_fourfm.m3u8",
    "http://a.files.bbci.co.uk/media/live/manifesto/audio/simulcast/hls/nonuk/sbr_low/ak/bbc_radio_four_extra.m3u8",
    "http://a.files.bbci.co.uk/media/live/manifesto/audio/simulcast/hls/nonuk/sbr_low/ak/bbc_radio_five_live.m3u8",
    "http://a.files.bbci.co.uk/media/live/manifesto/audio/simulcast/hls/nonuk/sbr_low/ak/bbc_6music.m3u8",
    "http://a.files.bbci.co.uk/media/live/manifesto/audio/simulcast/hls/nonuk/sbr_low/ak/bbc_world_service.m3u8",
];

/// CBC / Radio-Canada stations
pub const CBC_STREAMS: &[StreamId] = &[
    // CBC Music (Toronto)
    "http://cbcmp3.ic.llnwd.net/stream/cbcmp3_cbc_r2_tor",
    // CBC Music (Eastern)
    "https://cbcradiolive.akamaized.net/hls/live/2041057/ES_R2ETR/master.m3u8",
    // CBC Radio One (Saint John)
    "http://cbcmp3.ic.llnwd.net/stream/cbcmp3_cbc_r1_snb",
    // CBC Radio One (Vancouver)
    "http://cbcmp3.ic.llnwd.net/stream/cbcmp3_cbc_r1_vcr",
    // CBC Radio One (Toronto)
    "http://cbcmp3.ic.llnwd.net/stream/cbcmp3_cbc_r1_tor",
    // CBC Radio One (Montreal)
    "http://cbcmp3.ic.llnwd.net/stream/cbcmp3_cbc_r1_mtl",
    // CBC Radio One (Halifax)
    "http://cbcmp3.ic.llnwd.net/stream/cbcmp3_cbc_r1_hfx",
    // Ici Musique (Montreal)
    "https://rcavliveaudio.akamaized.net/hls/live/2006979/M-7QMTL0_MTL/master.m3u8",
];

/// Stream table keyed by band
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StationCatalog {
    band_a: &'static [StreamId],
    band_b: &'static [StreamId],
    band_c: &'static [StreamId],
}

impl StationCatalog {
    /// Factory table: BBC on A, CBC on B, C unassigned
    pub const DEFAULT: Self = Self::new(BBC_STREAMS, CBC_STREAMS, &[]);

    /// Create a catalog from per-band stream lists
    #[must_use]
    pub const fn new(
        band_a: &'static [StreamId],
        band_b: &'static [StreamId],
        band_c: &'static [StreamId],
    ) -> Self {
        Self {
            band_a,
            band_b,
            band_c,
        }
    }

    /// Ordered streams for a band; `Off` has none
    #[must_use]
    pub const fn streams(&self, band: Band) -> &'static [StreamId] {
        match band {
            Band::Off => &[],
            Band::A => self.band_a,
            Band::B => self.band_b,
            Band::C => self.band_c,
        }
    }
}

impl Default for StationCatalog {
    fn default() -> Self {
        Self::DEFAULT
    }
}
