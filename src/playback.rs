//! Playback Subsystem
//!
//! The tuner drives two logical channels, program and filler, through a
//! [`PlaybackTransport`]. Each channel owns at most one live transport
//! handle at a time; the [`ChannelSlot`] bookkeeping enforces that and keeps
//! every command idempotent.

use core::fmt;

use log::{info, warn};

use crate::types::{Channel, StreamId, Volume};

#[cfg(feature = "std")]
pub mod mplayer;

/// Audio playback backend
///
/// Handles are owned by the caller. A handle that has been stopped
/// successfully must not be used again.
pub trait PlaybackTransport {
    /// Identity of one live player
    type Handle;
    /// Command failure
    type Error: fmt::Display;

    /// Start playing `source` on a new handle
    fn start(
        &mut self,
        channel: Channel,
        source: StreamId,
        volume: Volume,
    ) -> Result<Self::Handle, Self::Error>;

    /// Switch a running handle to a different source without a stop/start gap
    fn retarget(&mut self, handle: &mut Self::Handle, source: StreamId) -> Result<(), Self::Error>;

    /// Silence a handle, keeping it ready to resume
    fn pause(&mut self, handle: &mut Self::Handle) -> Result<(), Self::Error>;

    /// Make a paused handle audible again
    fn resume(&mut self, handle: &mut Self::Handle) -> Result<(), Self::Error>;

    /// Tear a handle down
    fn stop(&mut self, handle: &mut Self::Handle) -> Result<(), Self::Error>;
}

/// One logical channel's playback state
#[derive(Debug)]
pub struct ChannelSlot<H> {
    channel: Channel,
    volume: Volume,
    handle: Option<H>,
    source: Option<StreamId>,
    audible: bool,
}

impl<H> ChannelSlot<H> {
    /// Create an idle slot
    #[must_use]
    pub const fn new(channel: Channel, volume: Volume) -> Self {
        Self {
            channel,
            volume,
            handle: None,
            source: None,
            audible: false,
        }
    }

    /// Channel this slot drives
    #[must_use]
    pub const fn channel(&self) -> Channel {
        self.channel
    }

    /// Check if the channel is currently playing
    #[must_use]
    pub const fn is_audible(&self) -> bool {
        self.audible
    }

    /// Check if a transport handle is held
    #[must_use]
    pub const fn has_handle(&self) -> bool {
        self.handle.is_some()
    }

    /// Source loaded on the handle
    #[must_use]
    pub const fn source(&self) -> Option<StreamId> {
        self.source
    }

    /// Make `source` audible, reusing the existing handle
    ///
    /// A handle already on `source` is simply resumed.
    pub fn play<T>(&mut self, transport: &mut T, source: StreamId)
    where
        T: PlaybackTransport<Handle = H>,
    {
        if self.audible && self.source == Some(source) {
            return;
        }
        self.load(transport, source, false);
    }

    /// Make `source` audible, always reloading it on an existing handle
    ///
    /// Live streams would otherwise resume from stale buffered audio.
    pub fn tune<T>(&mut self, transport: &mut T, source: StreamId)
    where
        T: PlaybackTransport<Handle = H>,
    {
        self.load(transport, source, true);
    }

    /// Silence the channel, keeping its handle
    pub fn pause<T>(&mut self, transport: &mut T)
    where
        T: PlaybackTransport<Handle = H>,
    {
        if !self.audible {
            return;
        }
        let Some(handle) = self.handle.as_mut() else {
            self.audible = false;
            return;
        };

        match transport.pause(handle) {
            Ok(()) => {
                info!("Pausing {}", self.channel);
                self.audible = false;
            }
            Err(e) => warn!("Failed to pause {}: {}", self.channel, e),
        }
    }

    /// Tear the channel down; no-op when nothing is held
    pub fn stop<T>(&mut self, transport: &mut T)
    where
        T: PlaybackTransport<Handle = H>,
    {
        let Some(handle) = self.handle.as_mut() else {
            self.audible = false;
            return;
        };

        match transport.stop(handle) {
            Ok(()) => {
                info!("Stopped {}", self.channel);
                self.handle = None;
                self.source = None;
                self.audible = false;
            }
            Err(e) => warn!("Failed to stop {}: {}", self.channel, e),
        }
    }

    fn load<T>(&mut self, transport: &mut T, source: StreamId, reload: bool)
    where
        T: PlaybackTransport<Handle = H>,
    {
        if self.handle.is_none() {
            match transport.start(self.channel, source, self.volume) {
                Ok(handle) => {
                    info!("Started {} on {}", self.channel, source);
                    self.handle = Some(handle);
                    self.source = Some(source);
                    self.audible = true;
                }
                Err(e) => warn!("Failed to start {} on {}: {}", self.channel, source, e),
            }
            return;
        }
        let Some(handle) = self.handle.as_mut() else {
            return;
        };

        if reload || self.source != Some(source) {
            if let Err(e) = transport.retarget(handle, source) {
                warn!("Failed to retarget {} to {}: {}", self.channel, source, e);
                return;
            }
            self.source = Some(source);
        }

        if !self.audible {
            if let Err(e) = transport.resume(handle) {
                warn!("Failed to resume {}: {}", self.channel, e);
                return;
            }
        }

        info!("Playing {} on {}", self.channel, source);
        self.audible = true;
    }
}
