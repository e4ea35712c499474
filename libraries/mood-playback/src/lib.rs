//! Mood Player - Background-Music Playback
//!
//! Platform-agnostic playback of group-conditioned background music for a
//! timed listening phase.
//!
//! This crate provides:
//! - Candidate URL resolution (shape variants + percent-encoded forms)
//! - A single-track player with a direct-stream -> fetched-bytes ladder
//! - A duration-bounded sequencer with cooperative cancellation tokens
//! - Per-session interruption capture for data export
//!
//! # Architecture
//!
//! `mood-playback` is completely platform-agnostic: no audio device code
//! and no HTTP client live here. The actual machinery is injected through
//! three seams:
//! - [`PlaybackEngine`] - the audio backend (web audio, rodio, a silent stub)
//! - [`ByteFetcher`] - raw byte fetches for the blob fallback
//! - [`ManifestSource`] - the group-to-track-list manifest
//!
//! `mood-client` implements the two network seams over reqwest.
//!
//! # Example
//!
//! ```rust,no_run
//! use mood_core::{Group, MusicManifest};
//! use mood_playback::{
//!     ByteFetcher, FetchError, ManifestSource, MusicEvent, MusicSequencer, PlaybackEngine,
//!     PlaySettings, PlaySource, SequencerConfig,
//! };
//! use std::sync::Arc;
//! use std::time::Duration;
//!
//! # struct MyEngine;
//! # impl PlaybackEngine for MyEngine {
//! #     fn play(&mut self, _: PlaySource, _: PlaySettings,
//! #             _: tokio::sync::mpsc::UnboundedSender<mood_playback::EngineEvent>) {}
//! #     fn stop(&mut self) {}
//! #     fn unload(&mut self) {}
//! #     fn set_volume(&mut self, _: f32) {}
//! # }
//! # struct MyFetcher;
//! # #[async_trait::async_trait]
//! # impl ByteFetcher for MyFetcher {
//! #     async fn fetch_bytes(&self, _: &str) -> Result<Vec<u8>, FetchError> { Ok(vec![]) }
//! # }
//! # struct MyManifest;
//! # #[async_trait::async_trait]
//! # impl ManifestSource for MyManifest {
//! #     async fn load(&self) -> MusicManifest { MusicManifest::builtin() }
//! # }
//! # async fn run() -> mood_playback::Result<()> {
//! let (sequencer, mut events) = MusicSequencer::new(
//!     Box::new(MyEngine),
//!     Arc::new(MyFetcher),
//!     Arc::new(MyManifest),
//!     SequencerConfig::default(),
//! );
//!
//! sequencer.start(Group::Neutral, Duration::from_secs(300)).await?;
//!
//! while let Some(event) = events.recv().await {
//!     match event {
//!         MusicEvent::Started { track, started_at, .. } => {
//!             // persist with the response data
//!         }
//!         MusicEvent::SequenceEnded { .. } => break, // advance the phase
//!         _ => {}
//!     }
//! }
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]

mod engine;
mod error;
mod events;
mod fetch;
mod player;
pub mod resolver;
mod sequencer;
mod session;
pub mod types;

// Public exports
pub use engine::{EngineEvent, PlaySettings, PlaySource, PlaybackEngine};
pub use error::{PlaybackError, Result};
pub use events::MusicEvent;
pub use fetch::{ByteFetcher, FetchError};
pub use player::{ActivePlayback, StartedTrack, TrackPlayer};
pub use sequencer::{ManifestSource, MusicSequencer, SequenceToken};
pub use session::PlaybackSession;
pub use types::{LoopMode, SequencerConfig};
