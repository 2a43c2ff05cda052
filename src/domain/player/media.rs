use std::sync::Arc;

/// Events emitted by a media output while a source is loaded.
#[derive(Debug, Clone, PartialEq)]
pub enum MediaEvent {
    LoadedMetadata { duration: f32 },
    TimeUpdate { position: f32 },
    Ended,
    PlaybackError(String),
}

pub type MediaListener = Arc<dyn Fn(MediaEvent) + Send + Sync>;

/// Playback transport provided by the host platform (an audio element, a
/// native sink, a test fake). The session owns exactly one and never shares
/// it.
///
/// Implementations deliver [`MediaEvent`]s to subscribed listeners and must
/// stop delivering once the returned [`Subscription`] is dropped.
pub trait MediaOutput: Send + Sync {
    /// Attach a new audio source, replacing any previous one. Resets the
    /// position to zero.
    fn load(&self, audio: Arc<Vec<u8>>);

    /// Begin playback of the loaded source. Errors here are transient media
    /// failures, not loading-state failures.
    fn play(&self) -> Result<(), String>;

    fn pause(&self);

    /// Seek to an absolute position in seconds.
    fn seek(&self, position_secs: f32);

    /// Volume in `0.0..=1.0`.
    fn set_volume(&self, volume: f32);

    fn current_time(&self) -> f32;

    /// Duration of the loaded source in seconds, `0.0` when nothing is
    /// loaded or metadata is not available yet.
    fn duration(&self) -> f32;

    fn has_source(&self) -> bool;

    fn subscribe(&self, listener: MediaListener) -> Subscription;
}

/// RAII handle for a media event subscription; dropping it unsubscribes.
pub struct Subscription {
    cancel: Option<Box<dyn FnOnce() + Send>>,
}

impl Subscription {
    pub fn new(cancel: impl FnOnce() + Send + 'static) -> Self {
        Self {
            cancel: Some(Box::new(cancel)),
        }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(cancel) = self.cancel.take() {
            cancel();
        }
    }
}

impl std::fmt::Debug for Subscription {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Subscription")
            .field("active", &self.cancel.is_some())
            .finish()
    }
}
