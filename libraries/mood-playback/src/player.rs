//! Single-track player
//!
//! Plays exactly one track end-to-end, walking the candidate URL ladder
//! until one candidate starts or all are exhausted. Each candidate gets a
//! direct-streaming attempt first and a fetched-bytes attempt second.

use crate::engine::{EngineEvent, PlaySettings, PlaySource, PlaybackEngine};
use crate::error::{PlaybackError, Result};
use crate::fetch::ByteFetcher;
use crate::resolver;
use crate::session::PlaybackSession;
use chrono::{DateTime, Utc};
use mood_core::Group;
use std::sync::Arc;
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

/// A successfully started track
#[derive(Debug, Clone)]
pub struct StartedTrack {
    /// The group whose music is playing
    pub group: Group,
    /// The candidate URL that played - the original URL even when the
    /// bytes fallback carried the audio
    pub track: String,
    /// Wall-clock time the playback request was made
    pub started_at: DateTime<Utc>,
}

/// A started track plus its engine event stream
///
/// The caller owns the ended notification: awaiting [`ActivePlayback::ended`]
/// resolves on genuine end-of-track.
#[derive(Debug)]
pub struct ActivePlayback {
    /// Details of the started track
    pub started: StartedTrack,
    events: mpsc::UnboundedReceiver<EngineEvent>,
}

impl ActivePlayback {
    /// Wait for the engine to report this track's natural end
    ///
    /// Returns `false` if the engine dropped its event channel without one,
    /// which callers treat the same as a track that never ends.
    pub async fn ended(&mut self) -> bool {
        while let Some(event) = self.events.recv().await {
            if event == EngineEvent::Ended {
                return true;
            }
        }
        false
    }
}

/// Outcome of waiting for one play request to report in
enum StartOutcome {
    Started,
    Failed(String),
}

/// Plays one track at a time through the engine seam
pub struct TrackPlayer {
    engine: Box<dyn PlaybackEngine>,
    fetcher: Arc<dyn ByteFetcher>,
    settings: PlaySettings,
    session: Option<PlaybackSession>,
}

impl TrackPlayer {
    /// Create a player over an engine and a byte fetcher
    pub fn new(
        engine: Box<dyn PlaybackEngine>,
        fetcher: Arc<dyn ByteFetcher>,
        settings: PlaySettings,
    ) -> Self {
        Self {
            engine,
            fetcher,
            settings,
            session: None,
        }
    }

    /// The session of the most recent playback request, if any
    pub fn session(&self) -> Option<&PlaybackSession> {
        self.session.as_ref()
    }

    /// Adjust volume for current and subsequent playback
    pub fn set_volume(&mut self, volume: f32) {
        self.settings.volume = volume.clamp(0.0, 1.0);
        self.engine.set_volume(self.settings.volume);
    }

    /// Stop and release whatever is currently playing
    pub fn release(&mut self) {
        self.engine.stop();
        self.engine.unload();
    }

    /// Record a genuine end-of-track on the current session
    pub fn note_natural_end(&mut self) {
        if let Some(session) = &mut self.session {
            session.note_natural_end();
        }
    }

    /// Play one track, trying candidate URLs in order until one starts
    ///
    /// On success the returned [`ActivePlayback`] reports the candidate URL
    /// that played (never the in-memory bytes handle) and carries the ended
    /// notification. Fails only when every candidate has been exhausted.
    pub async fn play_track(&mut self, group: Group, track: &str) -> Result<ActivePlayback> {
        let list = resolver::candidates(track);
        let mut session = PlaybackSession::new(group, track);

        for (index, url) in list.iter().enumerate() {
            session.attempts = index + 1;
            debug!(
                candidate = %url,
                attempt = index + 1,
                total = list.len(),
                "Trying candidate"
            );

            // Direct streaming first
            self.release();
            let (tx, mut rx) = mpsc::unbounded_channel();
            self.engine
                .play(PlaySource::Url(url.clone()), self.settings, tx);

            let direct = wait_for_start(&mut rx).await;
            let reason = match direct {
                StartOutcome::Started => {
                    return Ok(self.finish_start(session, group, url, rx));
                }
                StartOutcome::Failed(reason) => reason,
            };
            debug!(candidate = %url, reason = %reason, "Direct playback failed, fetching bytes");

            // Fall back to fetching the raw bytes and playing from memory
            let bytes = match self.fetcher.fetch_bytes(url).await {
                Ok(bytes) => bytes,
                Err(err) => {
                    warn!(candidate = %url, error = %err, "Byte fetch failed");
                    continue;
                }
            };

            self.release();
            let (tx, mut rx) = mpsc::unbounded_channel();
            self.engine
                .play(PlaySource::Bytes(bytes), self.settings, tx);

            match wait_for_start(&mut rx).await {
                StartOutcome::Started => {
                    return Ok(self.finish_start(session, group, url, rx));
                }
                StartOutcome::Failed(reason) => {
                    warn!(candidate = %url, reason = %reason, "Bytes playback failed");
                    // Release the in-memory handle before moving on
                    self.engine.unload();
                }
            }
        }

        warn!(group = %group, track = %track, tried = list.len(), "All candidates failed");
        self.session = Some(session);
        Err(PlaybackError::CandidatesExhausted {
            track: track.to_string(),
            tried: list.len(),
        })
    }

    fn finish_start(
        &mut self,
        mut session: PlaybackSession,
        group: Group,
        url: &str,
        events: mpsc::UnboundedReceiver<EngineEvent>,
    ) -> ActivePlayback {
        session.note_started(url);
        let started = StartedTrack {
            group,
            track: url.to_string(),
            started_at: session.started_at,
        };
        info!(group = %group, track = %url, "Playback started");
        self.session = Some(session);
        ActivePlayback { started, events }
    }
}

/// Wait for the first engine report on a fresh play request
async fn wait_for_start(rx: &mut mpsc::UnboundedReceiver<EngineEvent>) -> StartOutcome {
    match rx.recv().await {
        Some(EngineEvent::Started) => StartOutcome::Started,
        Some(EngineEvent::LoadError(reason)) => StartOutcome::Failed(reason),
        Some(EngineEvent::Ended) => StartOutcome::Failed("ended before start".to_string()),
        None => StartOutcome::Failed("engine closed the event channel".to_string()),
    }
}
