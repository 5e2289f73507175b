use crate::{CoreError, CpalRecorder, Recorder, SessionHandle, SoundBank};

use uuid::Uuid;

/// WHAT: Stopping a capture the recorder never started fails
/// WHY: Each native capture is released exactly once
#[tokio::test]
#[allow(clippy::unwrap_used)]
async fn given_unknown_handle_when_stopping_then_capture_stop_failed() {
    // Given: A recorder with no captures
    let dir = tempfile::tempdir().unwrap();
    let bank = SoundBank::new();
    let recorder = CpalRecorder::new(dir.path().to_path_buf(), None, bank.clone());

    // When: Stopping an unknown handle
    let result = recorder.stop(SessionHandle::new(Uuid::new_v4())).await;

    // Then: CaptureStopFailed and nothing was loaded
    assert!(matches!(result, Err(CoreError::CaptureStopFailed { .. })));
    assert!(bank.is_empty());
}

/// WHAT: A real capture is finalized into a WAV file and loaded
/// WHY: End-to-end check of the desktop recorder
#[tokio::test]
#[cfg_attr(not(feature = "integration-tests"), ignore)]
#[allow(clippy::unwrap_used)]
async fn given_microphone_when_recording_then_wav_written_and_sound_loaded() {
    // Given: A recorder writing into a temp dir
    let dir = tempfile::tempdir().unwrap();
    let bank = SoundBank::new();
    let recorder = CpalRecorder::new(dir.path().join("recordings"), None, bank.clone());

    // When: Recording for 300ms
    let handle = recorder
        .start(&crate::RecordingPreset::HIGH_QUALITY)
        .await
        .unwrap();
    tokio::time::sleep(std::time::Duration::from_millis(300)).await;
    let capture = recorder.stop(handle).await.unwrap();

    // Then: File exists in the recordings dir and the sound is playable
    assert!(std::path::Path::new(&capture.locator).exists());
    assert!(capture.locator.ends_with(".wav"));
    assert!(bank.get(&capture.playable).is_ok());
    assert_eq!(
        recorder.recordings_dir(),
        dir.path().join("recordings").as_path()
    );
}
