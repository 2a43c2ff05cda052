use crate::helpers::TestHarness;
use pretty_assertions::assert_eq;
use std::sync::atomic::Ordering;
use std::sync::Arc;
use tma_voices::domain::player::{LoadState, MediaEvent, MediaOutput, PlayerEvent};

/// Session with cached audio already attached, ready for transport calls.
async fn ready_session(harness: &TestHarness) -> tma_voices::domain::player::PlaybackSession {
    let mut session = harness.session("<p>Hello world.</p>", "my-article");
    harness.seed_cache(&session, b"cached-mp3");
    session.prefetch().await;
    assert_eq!(session.state(), &LoadState::Ready);
    session
}

#[tokio::test(start_paused = true)]
async fn it_should_seek_to_a_fraction_of_the_duration() {
    let harness = TestHarness::new();
    let mut session = ready_session(&harness).await;
    harness.media.set_duration(100.0);

    session.seek_to_fraction(0.25);
    assert_eq!(harness.media.position(), 25.0);

    // Fractions are clamped
    session.seek_to_fraction(1.5);
    assert_eq!(harness.media.position(), 100.0);
    session.seek_to_fraction(-0.5);
    assert_eq!(harness.media.position(), 0.0);
}

#[tokio::test(start_paused = true)]
async fn it_should_ignore_seek_without_duration() {
    let harness = TestHarness::new();
    let mut session = ready_session(&harness).await;

    harness.media.seek(10.0);
    session.seek_to_fraction(0.5);
    // Duration is 0.0; the seek request is dropped
    assert_eq!(harness.media.position(), 10.0);
}

#[tokio::test(start_paused = true)]
async fn it_should_clamp_volume() {
    let harness = TestHarness::new();
    let mut session = ready_session(&harness).await;

    session.set_volume(1.7);
    assert_eq!(session.volume(), 1.0);
    assert_eq!(harness.media.volume(), 1.0);

    session.set_volume(-0.2);
    assert_eq!(session.volume(), 0.0);
    assert_eq!(harness.media.volume(), 0.0);

    session.set_volume(0.4);
    assert_eq!(harness.media.volume(), 0.4);
}

#[tokio::test(start_paused = true)]
async fn it_should_reset_to_zero_and_pause() {
    let harness = TestHarness::new();
    let mut session = ready_session(&harness).await;

    session.toggle_play();
    assert!(session.is_playing());
    harness.media.seek(42.0);

    session.reset();

    assert_eq!(harness.media.position(), 0.0);
    assert!(!session.is_playing());
    // Transport never touches the loading state
    assert_eq!(session.state(), &LoadState::Ready);
}

#[tokio::test(start_paused = true)]
async fn it_should_keep_ready_state_when_playback_fails() {
    let harness = TestHarness::new();
    let mut session = ready_session(&harness).await;
    harness.media.fail_play.store(true, Ordering::SeqCst);

    session.toggle_play();

    assert!(!session.is_playing());
    assert_eq!(session.state(), &LoadState::Ready);
    assert!(harness
        .recorder
        .events()
        .iter()
        .any(|e| matches!(e, PlayerEvent::PlaybackFailed(_))));
}

#[tokio::test(start_paused = true)]
async fn it_should_stop_on_media_ended_event() {
    let harness = TestHarness::new();
    let mut session = ready_session(&harness).await;

    session.toggle_play();
    assert!(session.is_playing());

    harness.media.emit(MediaEvent::Ended);
    assert!(!session.is_playing());
}

#[tokio::test(start_paused = true)]
async fn it_should_surface_async_media_errors_without_state_change() {
    let harness = TestHarness::new();
    let mut session = ready_session(&harness).await;
    session.toggle_play();

    harness
        .media
        .emit(MediaEvent::PlaybackError("decoder stalled".to_string()));

    assert!(!session.is_playing());
    assert_eq!(session.state(), &LoadState::Ready);
    assert!(harness
        .recorder
        .contains(&PlayerEvent::PlaybackFailed("decoder stalled".to_string())));
}

#[tokio::test(start_paused = true)]
async fn it_should_ignore_transport_without_audio() {
    let harness = TestHarness::new();
    let mut session = harness.session("<p>Hello world.</p>", "my-article");

    session.toggle_play();
    assert!(!session.is_playing());
    assert!(!harness.media.playing());
}

#[tokio::test(start_paused = true)]
async fn it_should_treat_a_loaded_transport_source_as_attached_audio() {
    let harness = TestHarness::new();
    let mut session = harness.session("<p>Hello world.</p>", "my-article");
    assert!(!session.has_audio());

    // The transport is the single source of truth for attached audio
    harness.media.load(Arc::new(b"already-loaded".to_vec()));
    assert!(session.has_audio());

    // A play press now toggles the transport instead of running the pipeline
    session.request_play().await;
    assert!(session.is_playing());
    assert_eq!(harness.invoker.invocation_count(), 0);
    assert_eq!(harness.store.download_count(), 0);
}

#[tokio::test(start_paused = true)]
async fn it_should_unsubscribe_from_media_events_on_drop() {
    let harness = TestHarness::new();
    let session = harness.session("<p>Hello world.</p>", "my-article");

    assert_eq!(harness.media.listener_count(), 1);
    drop(session);
    assert_eq!(harness.media.listener_count(), 0);
}
