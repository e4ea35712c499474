//! Playback sequencer
//!
//! Drives the single-track player across a group's track list for a bounded
//! wall-clock duration. One generation counter distinguishes the live
//! sequence from superseded ones: every step re-checks its token after each
//! suspension point and goes silent the moment it is stale. A step parked
//! on an in-flight pick is woken by supersession, releases the engine, and
//! returns; no external task is ever force-aborted.

use crate::engine::{PlaySettings, PlaybackEngine};
use crate::error::{PlaybackError, Result};
use crate::events::MusicEvent;
use crate::fetch::ByteFetcher;
use crate::player::TrackPlayer;
use crate::session::PlaybackSession;
use crate::types::{LoopMode, SequencerConfig};
use async_trait::async_trait;
use mood_core::{Group, MusicManifest};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::{mpsc, watch, Mutex};
use tokio::time::{sleep, sleep_until, timeout, Instant};
use tracing::{debug, info};

/// Source of the group-to-track-list manifest
///
/// Loading must not fail: implementations degrade through fallback tiers
/// down to a built-in manifest rather than erroring.
#[async_trait]
pub trait ManifestSource: Send + Sync {
    /// Load the manifest
    async fn load(&self) -> MusicManifest;
}

/// Marker for one generation of sequence callbacks
///
/// Exactly one generation is current at a time; a token minted earlier
/// stops matching as soon as a newer sequence starts, and every callback
/// belonging to it becomes a no-op.
#[derive(Debug, Clone)]
pub struct SequenceToken {
    current: watch::Receiver<u64>,
    generation: u64,
}

impl SequenceToken {
    /// Whether this token still belongs to the live sequence
    pub fn is_current(&self) -> bool {
        *self.current.borrow() == self.generation
    }

    /// The generation this token was minted for
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Resolve once this token has been superseded
    ///
    /// A dropped sequencer counts as supersession.
    async fn superseded(&mut self) {
        let generation = self.generation;
        let _ = self.current.wait_for(|g| *g != generation).await;
    }
}

/// Sequenced background-music playback over a duration budget
///
/// Owns the player, the lazily loaded manifest (scoped to this sequencer's
/// lifetime), and the event channel the host page observes.
pub struct MusicSequencer {
    player: Arc<Mutex<TrackPlayer>>,
    manifest: Arc<Mutex<Option<MusicManifest>>>,
    loader: Arc<dyn ManifestSource>,
    events: mpsc::UnboundedSender<MusicEvent>,
    config: SequencerConfig,
    generation: watch::Sender<u64>,
}

impl MusicSequencer {
    /// Create a sequencer and the event stream it notifies
    pub fn new(
        engine: Box<dyn PlaybackEngine>,
        fetcher: Arc<dyn ByteFetcher>,
        loader: Arc<dyn ManifestSource>,
        config: SequencerConfig,
    ) -> (Self, mpsc::UnboundedReceiver<MusicEvent>) {
        let settings = PlaySettings {
            looped: config.loop_mode == LoopMode::Single,
            volume: config.volume,
        };
        let (events, receiver) = mpsc::unbounded_channel();
        let sequencer = Self {
            player: Arc::new(Mutex::new(TrackPlayer::new(engine, fetcher, settings))),
            manifest: Arc::new(Mutex::new(None)),
            loader,
            events,
            config,
            generation: watch::Sender::new(0),
        };
        (sequencer, receiver)
    }

    /// Start a sequence for `group`, superseding any active one
    ///
    /// Loads the manifest on first use. Rejects with
    /// [`PlaybackError::NoTrackAvailable`] before any playback is attempted
    /// when the group's track list is empty; a rejected start leaves the
    /// active sequence untouched and still owning its playback. Returns the
    /// minted token; the sequence itself runs on a spawned task and reports
    /// through the event stream.
    pub async fn start(&self, group: Group, duration: Duration) -> Result<SequenceToken> {
        let tracks = {
            let mut manifest = self.manifest.lock().await;
            if manifest.is_none() {
                *manifest = Some(self.loader.load().await);
            }
            manifest
                .as_ref()
                .map(|m| m.tracks(group).to_vec())
                .unwrap_or_default()
        };

        // Validate before superseding: the live sequence survives a
        // rejected start
        if tracks.is_empty() {
            debug!(group = %group, "No track available");
            return Err(PlaybackError::NoTrackAvailable(group));
        }

        let token = self.mint();
        info!(group = %group, duration_ms = duration.as_millis() as u64, "Starting sequence");

        tokio::spawn(run_sequence(
            Arc::clone(&self.player),
            tracks,
            group,
            duration,
            self.config.clone(),
            self.events.clone(),
            token.clone(),
        ));

        Ok(token)
    }

    /// Cancel the active sequence, if any, and silence the engine
    pub async fn stop(&self) {
        self.mint();
        let mut player = self.player.lock().await;
        player.release();
        debug!("Sequence stopped");
    }

    /// Adjust playback volume
    pub async fn set_volume(&self, volume: f32) {
        self.player.lock().await.set_volume(volume);
    }

    /// Snapshot of the most recent playback session, if any
    pub async fn session(&self) -> Option<PlaybackSession> {
        self.player.lock().await.session().cloned()
    }

    /// Supersede all outstanding tokens and mint the next one
    ///
    /// The watch update also wakes a sequence step parked on a hung pick,
    /// so supersession never waits out the start-timeout.
    fn mint(&self) -> SequenceToken {
        let mut generation = 0;
        self.generation.send_modify(|g| {
            *g += 1;
            generation = *g;
        });
        SequenceToken {
            current: self.generation.subscribe(),
            generation,
        }
    }
}

/// The sequence loop: one bounded-duration run for one group
#[allow(clippy::too_many_lines)]
async fn run_sequence(
    player: Arc<Mutex<TrackPlayer>>,
    tracks: Vec<String>,
    group: Group,
    duration: Duration,
    config: SequencerConfig,
    events: mpsc::UnboundedSender<MusicEvent>,
    mut token: SequenceToken,
) {
    let deadline = Instant::now() + duration;
    let mut index = 0usize;

    loop {
        if !token.is_current() {
            debug!(generation = token.generation(), "Sequence superseded");
            return;
        }
        if Instant::now() >= deadline {
            finish(&player, &events, group, &token).await;
            return;
        }

        let track = match config.loop_mode {
            LoopMode::Single => tracks[0].clone(),
            LoopMode::Sequence => tracks[index % tracks.len()].clone(),
        };

        // The start-timeout bounds one whole pick, candidate ladder
        // included. The lock is held across the attempt, so supersession
        // must be able to interrupt it rather than wait out the timeout.
        let attempt = {
            let mut player = player.lock().await;
            if !token.is_current() {
                return;
            }
            tokio::select! {
                attempt = timeout(config.start_timeout, player.play_track(group, &track)) => attempt,
                () = token.superseded() => {
                    player.release();
                    return;
                }
            }
        };

        match attempt {
            Err(_elapsed) => {
                // Playback neither started nor errored within the window:
                // release the stalled attempt and advance immediately
                debug!(track = %track, "Start timed out, advancing");
                let mut player = player.lock().await;
                if !token.is_current() {
                    return;
                }
                player.release();
            }
            Ok(Err(err)) => {
                if !token.is_current() {
                    return;
                }
                debug!(track = %track, error = %err, "Pick failed, advancing");
                let _ = events.send(MusicEvent::TrackUnplayable {
                    track: track.clone(),
                });
                sleep(config.advance_delay).await;
            }
            Ok(Ok(mut active)) => {
                if !token.is_current() {
                    return;
                }
                let _ = events.send(MusicEvent::Started {
                    group,
                    track: active.started.track.clone(),
                    started_at: active.started.started_at,
                });

                tokio::select! {
                    ended = active.ended() => {
                        if !token.is_current() {
                            return;
                        }
                        {
                            let mut player = player.lock().await;
                            if !token.is_current() {
                                return;
                            }
                            if ended {
                                player.note_natural_end();
                            }
                            player.release();
                        }
                        if ended {
                            let _ = events.send(MusicEvent::TrackFinished {
                                track: active.started.track.clone(),
                            });
                        }
                        sleep(config.advance_delay).await;
                    }
                    () = sleep_until(deadline) => {
                        finish(&player, &events, group, &token).await;
                        return;
                    }
                }
            }
        }

        index += 1;
    }
}

/// Natural completion: the duration budget elapsed
async fn finish(
    player: &Arc<Mutex<TrackPlayer>>,
    events: &mpsc::UnboundedSender<MusicEvent>,
    group: Group,
    token: &SequenceToken,
) {
    let mut player = player.lock().await;
    if !token.is_current() {
        return;
    }
    player.release();
    info!(group = %group, "Sequence ended");
    let _ = events.send(MusicEvent::SequenceEnded { group });
}
