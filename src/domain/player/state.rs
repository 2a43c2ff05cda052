/// Loading state of a playback session.
///
/// `idle → queued → preparing → finalizing → ready`, with a cache hit
/// jumping straight from `queued` to `ready`. Any in-flight phase can fall
/// into `error`; a manual retry goes back through `idle`. Transport
/// operations (play/pause/seek/volume) never change this state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadState {
    Idle,
    Queued,
    Preparing,
    Finalizing,
    Ready,
    Error(String),
}

impl LoadState {
    /// True while a generation pipeline is in flight.
    pub fn is_busy(&self) -> bool {
        matches!(
            self,
            LoadState::Queued | LoadState::Preparing | LoadState::Finalizing
        )
    }

    pub fn is_error(&self) -> bool {
        matches!(self, LoadState::Error(_))
    }

    /// User-facing message for the current phase, if any.
    pub fn status_message(&self) -> Option<&str> {
        match self {
            LoadState::Idle | LoadState::Ready => None,
            LoadState::Queued => Some("Starting audio..."),
            LoadState::Preparing => Some("Generating audio..."),
            LoadState::Finalizing => Some("Almost ready..."),
            LoadState::Error(_) => Some("Audio failed. Tap to retry."),
        }
    }
}

/// Notifications a session pushes to its host UI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlayerEvent {
    StateChanged(LoadState),
    /// Synthesis is taking unusually long. Informational; the state machine
    /// is not affected and the pipeline keeps running.
    SlowSynthesis,
    /// The media layer failed to play an already loaded source. Transient;
    /// the loading state stays `Ready`.
    PlaybackFailed(String),
}
