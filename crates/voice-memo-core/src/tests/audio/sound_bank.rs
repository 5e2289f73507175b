use crate::{CapturedAudio, CoreError, PlayableHandle, SoundBank};

use uuid::Uuid;

/// WHAT: Inserted sounds are retrievable by handle
/// WHY: Recorder and player share loaded sounds through the bank
#[test]
#[allow(clippy::unwrap_used)]
fn given_inserted_sound_when_looked_up_then_same_audio_returned() {
    // Given: A bank with one sound
    let bank = SoundBank::new();
    let audio = CapturedAudio {
        samples: vec![0.25; 16],
        sample_rate: 16_000,
        channels: 1,
    };
    let handle = bank.insert(audio.clone());

    // When: Looking it up through a clone of the bank
    let found = bank.clone().get(&handle).unwrap();

    // Then: Same audio
    assert_eq!(*found, audio);
    assert_eq!(bank.len(), 1);
}

/// WHAT: Unknown handles fail playback
/// WHY: A handle from another bank cannot be played
#[test]
fn given_unknown_handle_when_looked_up_then_playback_failed() {
    let bank = SoundBank::new();
    assert!(bank.is_empty());

    let result = bank.get(&PlayableHandle::new(Uuid::new_v4()));

    assert!(matches!(result, Err(CoreError::PlaybackFailed { .. })));
}
