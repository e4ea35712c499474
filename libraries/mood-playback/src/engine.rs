//! Platform-agnostic playback engine seam
//!
//! Abstracts the actual audio machinery (a web audio wrapper in the browser
//! build, rodio on desktop, a silent stub when no device exists). The
//! sequencer and player only ever talk to this trait, so the whole crate
//! stays free of device and network code.

use tokio::sync::mpsc;

/// What the engine is asked to play
#[derive(Debug, Clone)]
pub enum PlaySource {
    /// Stream directly from a URL
    Url(String),

    /// Play from raw bytes already fetched into memory
    ///
    /// Dropping the value releases the in-memory handle.
    Bytes(Vec<u8>),
}

impl PlaySource {
    /// Short description for logging
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Url(_) => "direct",
            Self::Bytes(_) => "bytes",
        }
    }
}

/// Per-play settings
#[derive(Debug, Clone, Copy)]
pub struct PlaySettings {
    /// Loop the source at the engine level
    pub looped: bool,
    /// Volume in [0.0, 1.0]
    pub volume: f32,
}

/// Events an engine reports for one play request
///
/// Sent on the channel handed to [`PlaybackEngine::play`]. A well-behaved
/// engine sends exactly one of `Started` or `LoadError` first; `Ended` only
/// follows a `Started` and only on natural completion, never in response to
/// [`PlaybackEngine::stop`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineEvent {
    /// The source is audibly playing
    Started,

    /// The source could not be loaded or decoded
    LoadError(String),

    /// The source reached its natural end
    Ended,
}

/// Playback engine capability
///
/// Mirrors the callback contract of browser audio wrappers: one logical
/// "current playback object" at a time, constructed per play request.
/// Callers must `stop` and `unload` before issuing a new `play`, so that
/// two sources never sound at once.
pub trait PlaybackEngine: Send {
    /// Begin playback of a source, reporting progress on `events`
    ///
    /// Never blocks; outcomes arrive asynchronously on the channel. The
    /// sender is per-request - events from a previous request must not be
    /// delivered on a newer request's channel.
    fn play(
        &mut self,
        source: PlaySource,
        settings: PlaySettings,
        events: mpsc::UnboundedSender<EngineEvent>,
    );

    /// Stop the current playback, if any
    ///
    /// Must not produce an `Ended` event.
    fn stop(&mut self);

    /// Release resources held by the current playback, if any
    fn unload(&mut self);

    /// Adjust the volume of the current playback
    fn set_volume(&mut self, volume: f32);
}
