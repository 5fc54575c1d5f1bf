//! mplayer Slave-Mode Transport
//!
//! Each handle is one `mplayer -slave` child process controlled through its
//! stdin. Keeping a separate process per channel makes switching between
//! static and a station near-instant, at the cost of two live players.

use std::fmt;
use std::io::{self, Write};
use std::process::{Child, ChildStdin, Command, Stdio};

use log::debug;
use thiserror::Error;

use crate::config::player::{AUDIO_OUTPUT, BASE_OPTIONS, BINARY};
use crate::playback::PlaybackTransport;
use crate::types::{Channel, StreamId, Volume};

/// Slave-mode command
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SlaveCommand<'a> {
    /// Toggle pause
    Pause,
    /// Replace the playing file, keeping the current pause state
    LoadFile(&'a str),
    /// Exit the player
    Quit,
}

impl fmt::Display for SlaveCommand<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Pause => f.write_str("pause"),
            Self::LoadFile(source) => write!(f, "pausing_keep_force loadfile {source}"),
            Self::Quit => f.write_str("quit"),
        }
    }
}

/// Player command failure
#[derive(Error, Debug)]
pub enum PlayerError {
    /// The player binary could not be launched
    #[error("failed to launch {binary}: {source}")]
    Spawn {
        /// Binary that was run
        binary: String,
        /// Underlying error
        #[source]
        source: io::Error,
    },

    /// The player was launched without a stdin pipe
    #[error("player stdin not available")]
    NoStdin,

    /// Writing a slave command failed
    #[error("failed to send `{command}`: {source}")]
    Command {
        /// Command text
        command: String,
        /// Underlying error
        #[source]
        source: io::Error,
    },

    /// Reaping the player process failed
    #[error("failed to stop player: {0}")]
    Reap(#[source] io::Error),
}

/// One running player process
#[derive(Debug)]
pub struct MplayerProcess {
    channel: Channel,
    child: Child,
    stdin: ChildStdin,
    paused: bool,
    source: String,
}

impl MplayerProcess {
    /// Channel the process was started for
    #[must_use]
    pub fn channel(&self) -> Channel {
        self.channel
    }

    /// OS process id
    #[must_use]
    pub fn id(&self) -> u32 {
        self.child.id()
    }

    /// Check if playback is paused
    #[must_use]
    pub fn is_paused(&self) -> bool {
        self.paused
    }

    /// Source currently loaded
    #[must_use]
    pub fn source(&self) -> &str {
        &self.source
    }

    fn send(&mut self, command: SlaveCommand<'_>) -> Result<(), PlayerError> {
        debug!("{} player <- {}", self.channel, command);
        writeln!(self.stdin, "{command}")
            .and_then(|()| self.stdin.flush())
            .map_err(|source| PlayerError::Command {
                command: command.to_string(),
                source,
            })
    }

    fn reap(&mut self) -> Result<(), PlayerError> {
        // Already exited is fine; the kill is only for a player ignoring `quit`
        let _ = self.child.kill();
        self.child.wait().map(|_| ()).map_err(PlayerError::Reap)
    }
}

impl Drop for MplayerProcess {
    fn drop(&mut self) {
        let _ = self.reap();
    }
}

/// Playback transport that spawns `mplayer` processes
#[derive(Clone, Debug)]
pub struct MplayerTransport {
    binary: String,
    audio_output: String,
}

impl MplayerTransport {
    /// Create a transport for a given binary and audio output driver
    #[must_use]
    pub fn new(binary: impl Into<String>, audio_output: impl Into<String>) -> Self {
        Self {
            binary: binary.into(),
            audio_output: audio_output.into(),
        }
    }

    /// Player binary
    #[must_use]
    pub fn binary(&self) -> &str {
        &self.binary
    }

    /// Command-line arguments for playing `source` at `volume`
    #[must_use]
    pub fn args(&self, source: &str, volume: Volume) -> Vec<String> {
        BASE_OPTIONS
            .iter()
            .map(|opt| (*opt).to_string())
            .chain([
                "-ao".to_string(),
                self.audio_output.clone(),
                "-volume".to_string(),
                volume.as_percent().to_string(),
                source.to_string(),
            ])
            .collect()
    }
}

impl Default for MplayerTransport {
    fn default() -> Self {
        Self::new(BINARY, AUDIO_OUTPUT)
    }
}

impl PlaybackTransport for MplayerTransport {
    type Handle = MplayerProcess;
    type Error = PlayerError;

    fn start(
        &mut self,
        channel: Channel,
        source: StreamId,
        volume: Volume,
    ) -> Result<MplayerProcess, PlayerError> {
        let args = self.args(source, volume);
        debug!("Spawning {} {}", self.binary, args.join(" "));

        let mut child = Command::new(&self.binary)
            .args(&args)
            .stdin(Stdio::piped())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .map_err(|source| PlayerError::Spawn {
                binary: self.binary.clone(),
                source,
            })?;

        let Some(stdin) = child.stdin.take() else {
            let _ = child.kill();
            let _ = child.wait();
            return Err(PlayerError::NoStdin);
        };

        Ok(MplayerProcess {
            channel,
            child,
            stdin,
            paused: false,
            source: source.to_string(),
        })
    }

    fn retarget(&mut self, handle: &mut MplayerProcess, source: StreamId) -> Result<(), PlayerError> {
        handle.send(SlaveCommand::LoadFile(source))?;
        handle.source = source.to_string();
        Ok(())
    }

    fn pause(&mut self, handle: &mut MplayerProcess) -> Result<(), PlayerError> {
        if handle.paused {
            return Ok(());
        }
        handle.send(SlaveCommand::Pause)?;
        handle.paused = true;
        Ok(())
    }

    fn resume(&mut self, handle: &mut MplayerProcess) -> Result<(), PlayerError> {
        if !handle.paused {
            return Ok(());
        }
        handle.send(SlaveCommand::Pause)?;
        handle.paused = false;
        Ok(())
    }

    fn stop(&mut self, handle: &mut MplayerProcess) -> Result<(), PlayerError> {
        // A dead player cannot take `quit`; reaping below still succeeds
        if let Err(e) = handle.send(SlaveCommand::Quit) {
            debug!("{}", e);
        }
        handle.reap()
    }
}
