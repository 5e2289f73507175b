use crate::{
    AudioCapturer, CapturedAudio,
    audio::capture::{MAX_CAPTURE_SECONDS, append_capped, max_samples},
};

/// WHAT: Buffer stops growing at the cap and keeps the earliest samples
/// WHY: A memo must keep its beginning when the capture limit is hit
#[test]
fn given_buffer_near_cap_when_appending_then_newest_samples_dropped() {
    // Given: A buffer 2 samples below a cap of 10
    let mut buf = vec![0.0f32; 8];

    // When: Appending 4 samples
    let dropped = append_capped(&mut buf, &[1.0, 2.0, 3.0, 4.0], 10);

    // Then: Only 2 fit and the drop is reported
    assert!(dropped);
    assert_eq!(buf.len(), 10);
    assert_eq!(&buf[8..], &[1.0, 2.0]);
}

/// WHAT: Appending below the cap keeps everything
/// WHY: Normal recordings are untouched by the limit
#[test]
fn given_room_in_buffer_when_appending_then_nothing_dropped() {
    let mut buf = Vec::new();

    let dropped = append_capped(&mut buf, &[0.5; 48], 1_000);

    assert!(!dropped);
    assert_eq!(buf.len(), 48);
}

/// WHAT: The cap scales with rate and channels
/// WHY: The limit is a duration, not a sample count
#[test]
fn given_stereo_48khz_when_computing_cap_then_one_hour_of_frames() {
    assert_eq!(
        max_samples(48_000, 2),
        MAX_CAPTURE_SECONDS * 48_000 * 2
    );
}

/// WHAT: Duration is derived from frames and sample rate
/// WHY: Recorder reports integer milliseconds to the ledger
#[test]
fn given_stereo_audio_when_measuring_then_frames_and_millis_correct() {
    // Given: 1.5 seconds of 44.1kHz stereo
    let audio = CapturedAudio {
        samples: vec![0.0; 44_100 * 2 * 3 / 2],
        sample_rate: 44_100,
        channels: 2,
    };

    // When/Then: 66150 frames, 1500ms
    assert_eq!(audio.frames(), 66_150);
    assert_eq!(audio.duration_millis(), 1_500);
}

/// WHAT: Degenerate layouts report zero length
/// WHY: Avoids division by zero on malformed input
#[test]
fn given_zero_rate_or_channels_when_measuring_then_zero() {
    let no_channels = CapturedAudio {
        samples: vec![0.0; 10],
        sample_rate: 48_000,
        channels: 0,
    };
    let no_rate = CapturedAudio {
        samples: vec![0.0; 10],
        sample_rate: 0,
        channels: 1,
    };

    assert_eq!(no_channels.duration_millis(), 0);
    assert_eq!(no_rate.duration_millis(), 0);
}

/// WHAT: Capturer opens the default input device
/// WHY: Verifies cpal integration on a machine with a microphone
#[test]
#[cfg_attr(not(feature = "integration-tests"), ignore)]
#[allow(clippy::unwrap_used)]
fn given_default_device_when_capturing_briefly_then_samples_returned() {
    // Given: Capturer on the default input device
    let mut capturer = AudioCapturer::new(None).unwrap();

    // When: Capturing for 200ms
    capturer.start().unwrap();
    std::thread::sleep(std::time::Duration::from_millis(200));
    let audio = capturer.stop().unwrap();

    // Then: Some audio with a valid layout came back
    assert!(audio.sample_rate > 0);
    assert!(audio.channels > 0);
    assert!(!audio.samples.is_empty());
}
