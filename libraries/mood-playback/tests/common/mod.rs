//! Shared fakes for playback scenario tests

use async_trait::async_trait;
use mood_core::MusicManifest;
use mood_playback::{
    ByteFetcher, EngineEvent, FetchError, ManifestSource, PlaySettings, PlaySource, PlaybackEngine,
};
use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::sync::mpsc;

/// What one play request should do
#[derive(Debug, Clone)]
pub enum PlayScript {
    /// Report Started and keep playing forever
    Start,
    /// Report Started, then Ended after the delay
    StartThenEnd(Duration),
    /// Report a load error
    Fail(&'static str),
    /// Report nothing at all, ever (a hung load)
    Silent,
}

/// Engine that follows a per-play script and records every call
pub struct FakeEngine {
    script: Mutex<VecDeque<PlayScript>>,
    log: Arc<Mutex<Vec<String>>>,
    // Keeps channels of Start/Silent plays open so they never look closed
    held: Mutex<Vec<mpsc::UnboundedSender<EngineEvent>>>,
}

impl FakeEngine {
    pub fn new(script: Vec<PlayScript>) -> (Self, Arc<Mutex<Vec<String>>>) {
        let log = Arc::new(Mutex::new(Vec::new()));
        (
            Self {
                script: Mutex::new(script.into()),
                log: Arc::clone(&log),
                held: Mutex::new(Vec::new()),
            },
            log,
        )
    }
}

impl PlaybackEngine for FakeEngine {
    fn play(
        &mut self,
        source: PlaySource,
        _settings: PlaySettings,
        events: mpsc::UnboundedSender<EngineEvent>,
    ) {
        let label = match &source {
            PlaySource::Url(url) => format!("play direct {url}"),
            PlaySource::Bytes(bytes) => format!("play bytes ({} bytes)", bytes.len()),
        };
        self.log.lock().unwrap().push(label);

        let step = self
            .script
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or(PlayScript::Fail("script exhausted"));

        match step {
            PlayScript::Start => {
                let _ = events.send(EngineEvent::Started);
                self.held.lock().unwrap().push(events);
            }
            PlayScript::StartThenEnd(delay) => {
                let _ = events.send(EngineEvent::Started);
                tokio::spawn(async move {
                    tokio::time::sleep(delay).await;
                    let _ = events.send(EngineEvent::Ended);
                });
            }
            PlayScript::Fail(reason) => {
                let _ = events.send(EngineEvent::LoadError(reason.to_string()));
            }
            PlayScript::Silent => {
                self.held.lock().unwrap().push(events);
            }
        }
    }

    fn stop(&mut self) {
        self.log.lock().unwrap().push("stop".to_string());
    }

    fn unload(&mut self) {
        self.log.lock().unwrap().push("unload".to_string());
    }

    fn set_volume(&mut self, volume: f32) {
        self.log.lock().unwrap().push(format!("volume {volume}"));
    }
}

/// Fetcher driven by a plain function
pub struct FnFetcher<F>(pub F);

#[async_trait]
impl<F> ByteFetcher for FnFetcher<F>
where
    F: Fn(&str) -> Result<Vec<u8>, FetchError> + Send + Sync,
{
    async fn fetch_bytes(&self, url: &str) -> Result<Vec<u8>, FetchError> {
        (self.0)(url)
    }
}

/// Fetcher for tests where the blob path must not be reached
pub fn no_fetch() -> Arc<dyn ByteFetcher> {
    Arc::new(FnFetcher(|_url: &str| Err(FetchError::Status(404))))
}

/// Manifest source serving a fixed manifest and counting loads
pub struct FixedManifest {
    manifest: MusicManifest,
    loads: AtomicUsize,
}

impl FixedManifest {
    pub fn new(manifest: MusicManifest) -> Arc<Self> {
        Arc::new(Self {
            manifest,
            loads: AtomicUsize::new(0),
        })
    }

    pub fn load_count(&self) -> usize {
        self.loads.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ManifestSource for FixedManifest {
    async fn load(&self) -> MusicManifest {
        self.loads.fetch_add(1, Ordering::SeqCst);
        self.manifest.clone()
    }
}
