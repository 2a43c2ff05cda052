use super::media::{MediaEvent, MediaOutput, Subscription};
use super::state::{LoadState, PlayerEvent};
use crate::domain::audio::{AudioService, AudioServiceApi, CacheKey};
use crate::domain::content::{chunk_text, normalize, LanguageCode, MAX_CHUNK_CHARS};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;
use uuid::Uuid;

/// Brief hold in the queued state so short cache lookups do not flash the
/// loading UI.
const QUEUE_SMOOTHING: Duration = Duration::from_millis(500);

/// After this long in the preparing phase the session emits an informational
/// slow-synthesis notice. The pipeline itself is not interrupted.
const SLOW_SYNTHESIS_WARNING: Duration = Duration::from_secs(25);

pub type PlayerListener = Arc<dyn Fn(PlayerEvent) + Send + Sync>;

type SharedListener = Arc<Mutex<Option<PlayerListener>>>;

/// One playback session per player instance: owns the loading-state machine
/// and the media transport holding the attached audio. Never shared across
/// players;
/// independent sessions for the same content converge through the shared
/// cache instead.
pub struct PlaybackSession {
    id: Uuid,
    speakable: String,
    voice_id: String,
    cache_key: CacheKey,
    state: LoadState,
    is_playing: Arc<AtomicBool>,
    volume: f32,
    prefetch_done: bool,
    service: Arc<AudioService>,
    media: Arc<dyn MediaOutput>,
    listener: SharedListener,
    warning_timer: Option<tokio::task::JoinHandle<()>>,
    _media_subscription: Subscription,
}

impl PlaybackSession {
    /// Create a session for a piece of rich content. The content is
    /// normalized to speakable text immediately; if nothing speakable
    /// remains, the session stays permanently idle.
    pub fn new(
        rich_content: &str,
        slug: &str,
        language: LanguageCode,
        voice_id: &str,
        service: Arc<AudioService>,
        media: Arc<dyn MediaOutput>,
    ) -> Self {
        let id = Uuid::new_v4();
        let speakable = normalize(rich_content);
        let cache_key = CacheKey::for_content(slug, language, &speakable);

        let listener: SharedListener = Arc::new(Mutex::new(None));
        let is_playing = Arc::new(AtomicBool::new(false));

        let media_subscription = media.subscribe({
            let listener = Arc::clone(&listener);
            let is_playing = Arc::clone(&is_playing);
            Arc::new(move |event| match event {
                MediaEvent::Ended => {
                    is_playing.store(false, Ordering::SeqCst);
                }
                MediaEvent::PlaybackError(message) => {
                    tracing::warn!(error = %message, "Media playback failed");
                    is_playing.store(false, Ordering::SeqCst);
                    notify(&listener, PlayerEvent::PlaybackFailed(message.clone()));
                }
                MediaEvent::LoadedMetadata { .. } | MediaEvent::TimeUpdate { .. } => {}
            })
        });

        tracing::info!(
            session_id = %id,
            slug = slug,
            language = %language,
            speakable_chars = speakable.len(),
            "Playback session created"
        );

        Self {
            id,
            speakable,
            voice_id: voice_id.to_string(),
            cache_key,
            state: LoadState::Idle,
            is_playing,
            volume: 1.0,
            prefetch_done: false,
            service,
            media,
            listener,
            warning_timer: None,
            _media_subscription: media_subscription,
        }
    }

    pub fn set_listener(&mut self, listener: PlayerListener) {
        if let Ok(mut guard) = self.listener.lock() {
            *guard = Some(listener);
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn state(&self) -> &LoadState {
        &self.state
    }

    pub fn cache_key(&self) -> &CacheKey {
        &self.cache_key
    }

    /// False when the content had no speakable text; the host should disable
    /// the play control.
    pub fn can_play(&self) -> bool {
        !self.speakable.is_empty()
    }

    pub fn is_playing(&self) -> bool {
        self.is_playing.load(Ordering::SeqCst)
    }

    /// Whether the media transport already has a source attached.
    pub fn has_audio(&self) -> bool {
        self.media.has_source()
    }

    /// Handle a play press. With audio already attached this toggles the
    /// transport; otherwise it runs the generation pipeline and starts
    /// playback once ready. At most one pipeline runs per session.
    pub async fn request_play(&mut self) {
        if self.media.has_source() {
            self.toggle_play();
            return;
        }

        if !self.can_play() {
            tracing::debug!(session_id = %self.id, "No speakable text, ignoring play request");
            return;
        }

        if self.state.is_busy() {
            tracing::debug!(session_id = %self.id, "Generation already in flight");
            return;
        }

        if self.state.is_error() {
            // The UI offers an explicit retry control for this state.
            tracing::debug!(session_id = %self.id, "Session is in error state, waiting for retry");
            return;
        }

        self.run_pipeline().await;

        if self.state == LoadState::Ready {
            self.toggle_play();
        }
    }

    /// Manual retry from the error state. Discards all partial state and
    /// re-enters the pipeline from a fresh cache lookup.
    pub async fn retry(&mut self) {
        if !self.state.is_error() {
            return;
        }

        tracing::info!(session_id = %self.id, "Retrying audio generation");
        self.is_playing.store(false, Ordering::SeqCst);
        self.set_state(LoadState::Idle);
        self.request_play().await;
    }

    /// Viewport-triggered, cache-only lookup. Runs at most once per session
    /// lifetime and never synthesizes: generation costs money and stays
    /// user-initiated.
    pub async fn prefetch(&mut self) {
        if self.prefetch_done {
            return;
        }
        self.prefetch_done = true;

        if self.media.has_source() || self.state != LoadState::Idle || !self.can_play() {
            return;
        }

        match self.service.lookup_cached(&self.cache_key).await {
            Some(audio) => {
                tracing::info!(
                    session_id = %self.id,
                    key = %self.cache_key,
                    audio_size = audio.len(),
                    "Prefetch hit, audio attached"
                );
                self.attach(Arc::new(audio));
                self.set_state(LoadState::Ready);
            }
            None => {
                tracing::debug!(session_id = %self.id, key = %self.cache_key, "Prefetch miss");
            }
        }
    }

    async fn run_pipeline(&mut self) {
        self.set_state(LoadState::Queued);
        tokio::time::sleep(QUEUE_SMOOTHING).await;

        if let Some(audio) = self.service.lookup_cached(&self.cache_key).await {
            tracing::info!(
                session_id = %self.id,
                key = %self.cache_key,
                audio_size = audio.len(),
                "Cache hit, skipping synthesis"
            );
            self.attach(Arc::new(audio));
            self.set_state(LoadState::Ready);
            return;
        }

        self.set_state(LoadState::Preparing);
        self.arm_slow_synthesis_warning();

        let chunks = chunk_text(&self.speakable, MAX_CHUNK_CHARS);
        tracing::info!(
            session_id = %self.id,
            chunk_count = chunks.len(),
            speakable_chars = self.speakable.len(),
            "Starting synthesis"
        );

        let payloads = match self
            .service
            .synthesize_chunks(&chunks, &self.voice_id)
            .await
        {
            Ok(payloads) => payloads,
            Err(e) => {
                self.fail(e.to_string());
                return;
            }
        };

        self.set_state(LoadState::Finalizing);

        let audio = match AudioService::decode_and_merge(payloads) {
            Ok(audio) => Arc::new(audio),
            Err(e) => {
                self.fail(e.to_string());
                return;
            }
        };

        // The audio is playable now; persisting it is a side effect that may
        // still be pending when playback starts.
        self.service
            .store_in_background(self.cache_key.clone(), Arc::clone(&audio));

        self.attach(audio);
        self.set_state(LoadState::Ready);
    }

    fn fail(&mut self, message: String) {
        tracing::error!(session_id = %self.id, error = %message, "Audio generation failed");
        self.set_state(LoadState::Error(message));
    }

    fn attach(&mut self, audio: Arc<Vec<u8>>) {
        self.media.load(audio);
        self.media.set_volume(self.volume);
    }

    fn set_state(&mut self, state: LoadState) {
        if state != LoadState::Preparing {
            self.disarm_slow_synthesis_warning();
        }

        tracing::debug!(
            session_id = %self.id,
            from = ?self.state,
            to = ?state,
            "Load state transition"
        );
        self.state = state.clone();
        notify(&self.listener, PlayerEvent::StateChanged(state));
    }

    fn arm_slow_synthesis_warning(&mut self) {
        self.disarm_slow_synthesis_warning();

        let listener = Arc::clone(&self.listener);
        let session_id = self.id;
        self.warning_timer = Some(tokio::spawn(async move {
            tokio::time::sleep(SLOW_SYNTHESIS_WARNING).await;
            tracing::info!(
                session_id = %session_id,
                "Synthesis is taking longer than usual, next plays will hit the cache"
            );
            notify(&listener, PlayerEvent::SlowSynthesis);
        }));
    }

    fn disarm_slow_synthesis_warning(&mut self) {
        if let Some(timer) = self.warning_timer.take() {
            timer.abort();
        }
    }

    // --- transport; none of these touch the loading state ---

    pub fn toggle_play(&mut self) {
        if !self.media.has_source() {
            return;
        }

        if self.is_playing() {
            self.media.pause();
            self.is_playing.store(false, Ordering::SeqCst);
        } else {
            match self.media.play() {
                Ok(()) => {
                    self.is_playing.store(true, Ordering::SeqCst);
                }
                Err(message) => {
                    tracing::warn!(session_id = %self.id, error = %message, "Playback failed to start");
                    notify(&self.listener, PlayerEvent::PlaybackFailed(message));
                }
            }
        }
    }

    pub fn pause(&mut self) {
        if self.is_playing() {
            self.media.pause();
            self.is_playing.store(false, Ordering::SeqCst);
        }
    }

    /// Seek to a fraction of the duration, e.g. from a progress-bar tap.
    pub fn seek_to_fraction(&mut self, fraction: f32) {
        let duration = self.media.duration();
        if duration > 0.0 {
            self.media.seek(fraction.clamp(0.0, 1.0) * duration);
        }
    }

    pub fn set_volume(&mut self, volume: f32) {
        self.volume = volume.clamp(0.0, 1.0);
        self.media.set_volume(self.volume);
    }

    pub fn volume(&self) -> f32 {
        self.volume
    }

    pub fn position(&self) -> f32 {
        self.media.current_time()
    }

    pub fn duration(&self) -> f32 {
        self.media.duration()
    }

    /// Rewind to the start and pause.
    pub fn reset(&mut self) {
        self.media.seek(0.0);
        self.media.pause();
        self.is_playing.store(false, Ordering::SeqCst);
    }
}

impl Drop for PlaybackSession {
    fn drop(&mut self) {
        // An in-flight background store keeps running; only the warning
        // timer and the media subscription are torn down.
        self.disarm_slow_synthesis_warning();
    }
}

fn notify(listener: &SharedListener, event: PlayerEvent) {
    if let Ok(guard) = listener.lock() {
        if let Some(listener) = guard.as_ref() {
            listener(event);
        }
    }
}
