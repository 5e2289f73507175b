//! WAV finalization and loading for desktop recordings.

use crate::{CapturedAudio, CoreError, CoreResult};

use std::{panic::Location, path::Path};

use error_location::ErrorLocation;
use hound::{SampleFormat, WavReader, WavSpec, WavWriter};
use tracing::{debug, instrument};

#[track_caller]
fn file_error(path: &Path, e: hound::Error) -> CoreError {
    CoreError::FileError {
        path: path.to_path_buf(),
        reason: e.to_string(),
        location: ErrorLocation::from(Location::caller()),
    }
}

/// Write `audio` to `path` as PCM with `bit_depth` bits per sample.
///
/// 16 and 24 bit produce integer PCM, 32 bit produces float PCM.
///
/// # Errors
///
/// Returns error for any other bit depth or if the file cannot be written.
#[track_caller]
#[instrument(skip(audio), fields(samples = audio.samples.len()))]
pub fn write_wav(path: &Path, audio: &CapturedAudio, bit_depth: u16) -> CoreResult<()> {
    let sample_format = match bit_depth {
        16 | 24 => SampleFormat::Int,
        32 => SampleFormat::Float,
        other => {
            return Err(CoreError::FileError {
                path: path.to_path_buf(),
                reason: format!("Unsupported bit depth: {}", other),
                location: ErrorLocation::from(Location::caller()),
            });
        }
    };

    let spec = WavSpec {
        channels: audio.channels,
        sample_rate: audio.sample_rate,
        bits_per_sample: bit_depth,
        sample_format,
    };

    let mut writer = WavWriter::create(path, spec).map_err(|e| file_error(path, e))?;

    match sample_format {
        SampleFormat::Float => {
            for &sample in &audio.samples {
                writer
                    .write_sample(sample)
                    .map_err(|e| file_error(path, e))?;
            }
        }
        SampleFormat::Int => {
            let scale = ((1_i64 << (bit_depth - 1)) - 1) as f32;
            for &sample in &audio.samples {
                let value = (sample.clamp(-1.0, 1.0) * scale).round() as i32;
                writer
                    .write_sample(value)
                    .map_err(|e| file_error(path, e))?;
            }
        }
    }

    writer.finalize().map_err(|e| file_error(path, e))?;

    debug!(path = ?path, "WAV written");

    Ok(())
}

/// Load a WAV file as interleaved `f32` samples in `[-1.0, 1.0]`.
///
/// # Errors
///
/// Returns error if the file is missing or not a readable WAV.
#[track_caller]
#[instrument]
pub fn read_wav(path: &Path) -> CoreResult<CapturedAudio> {
    let mut reader = WavReader::open(path).map_err(|e| file_error(path, e))?;
    let spec = reader.spec();

    let samples = match spec.sample_format {
        SampleFormat::Float => reader
            .samples::<f32>()
            .collect::<Result<Vec<_>, _>>()
            .map_err(|e| file_error(path, e))?,
        SampleFormat::Int => {
            let scale = (1_i64 << (spec.bits_per_sample - 1)) as f32;
            reader
                .samples::<i32>()
                .map(|s| s.map(|v| v as f32 / scale))
                .collect::<Result<Vec<_>, _>>()
                .map_err(|e| file_error(path, e))?
        }
    };

    debug!(
        path = ?path,
        sample_rate = spec.sample_rate,
        channels = spec.channels,
        sample_count = samples.len(),
        "WAV loaded"
    );

    Ok(CapturedAudio {
        samples,
        sample_rate: spec.sample_rate,
        channels: spec.channels,
    })
}
