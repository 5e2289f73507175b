use crate::{CapturedAudio, CoreError, read_wav, write_wav};

fn tone(channels: u16) -> CapturedAudio {
    let samples = (0..4_800 * usize::from(channels))
        .map(|i| (i as f32 * 0.01).sin() * 0.5)
        .collect();
    CapturedAudio {
        samples,
        sample_rate: 48_000,
        channels,
    }
}

/// WHAT: 16-bit PCM preserves layout and length
/// WHY: The high quality preset finalizes to 16-bit files
#[test]
#[allow(clippy::unwrap_used)]
fn given_stereo_tone_when_written_as_16_bit_then_loaded_with_same_layout() {
    // Given: 100ms stereo tone and a temp file
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("tone.wav");
    let audio = tone(2);

    // When: Writing and loading
    write_wav(&path, &audio, 16).unwrap();
    let loaded = read_wav(&path).unwrap();

    // Then: Same layout, duration and close sample values
    assert_eq!(loaded.sample_rate, 48_000);
    assert_eq!(loaded.channels, 2);
    assert_eq!(loaded.samples.len(), audio.samples.len());
    assert_eq!(loaded.duration_millis(), 100);
    assert!(
        loaded
            .samples
            .iter()
            .zip(&audio.samples)
            .all(|(a, b)| (a - b).abs() < 1e-3)
    );
}

/// WHAT: 32-bit output is float PCM and exact
/// WHY: Float samples need no quantization
#[test]
#[allow(clippy::unwrap_used)]
fn given_mono_tone_when_written_as_32_bit_then_samples_exact() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("tone.wav");
    let audio = tone(1);

    write_wav(&path, &audio, 32).unwrap();
    let loaded = read_wav(&path).unwrap();

    assert_eq!(loaded, audio);
}

/// WHAT: Out-of-range samples are clamped when quantizing
/// WHY: Clipping input must not wrap around
#[test]
#[allow(clippy::unwrap_used)]
fn given_clipping_samples_when_written_as_16_bit_then_clamped() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("clip.wav");
    let audio = CapturedAudio {
        samples: vec![2.0, -2.0],
        sample_rate: 8_000,
        channels: 1,
    };

    write_wav(&path, &audio, 16).unwrap();
    let loaded = read_wav(&path).unwrap();

    assert!(loaded.samples[0] > 0.99);
    assert!(loaded.samples[1] < -0.99);
}

/// WHAT: Unsupported bit depth is rejected before touching disk
/// WHY: Presets must map to a real PCM format
#[test]
#[allow(clippy::unwrap_used)]
fn given_unsupported_bit_depth_when_writing_then_file_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("bad.wav");

    let result = write_wav(&path, &tone(1), 12);

    assert!(matches!(result, Err(CoreError::FileError { .. })));
    assert!(!path.exists());
}

/// WHAT: Missing file is reported with its path
/// WHY: Loading a deleted recording must fail cleanly
#[test]
#[allow(clippy::unwrap_used)]
fn given_missing_file_when_reading_then_file_error_with_path() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing.wav");

    let result = read_wav(&path);

    assert!(matches!(result, Err(CoreError::FileError { path: ref p, .. }) if *p == path));
}
