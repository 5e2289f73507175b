//! cpal-backed [`Player`].

use crate::{CapturedAudio, CoreError, CoreResult, PlayableHandle, Player, SoundBank};

use std::{panic::Location, sync::Arc, time::Duration};

use async_trait::async_trait;
use cpal::{
    BufferSize, Device, StreamConfig,
    traits::{DeviceTrait, HostTrait, StreamTrait},
};
use error_location::ErrorLocation;
use tracing::{debug, error, info, instrument};

/// Extra time the output stream is kept alive after the last sample.
const PLAYBACK_TAIL: Duration = Duration::from_millis(200);

/// Desktop player on the default output device.
///
/// Every call opens its own output stream on a detached thread, so repeated
/// plays restart from zero and overlap.
pub struct CpalPlayer {
    bank: SoundBank,
}

impl CpalPlayer {
    /// Play sounds registered in `bank`.
    pub fn new(bank: SoundBank) -> Self {
        Self { bank }
    }
}

fn play_to_end(device: Device, sound: Arc<CapturedAudio>) -> CoreResult<()> {
    let config = StreamConfig {
        channels: sound.channels,
        sample_rate: sound.sample_rate,
        buffer_size: BufferSize::Default,
    };

    let samples = Arc::clone(&sound);
    let mut position = 0usize;

    let stream = device
        .build_output_stream(
            &config,
            move |data: &mut [f32], _: &cpal::OutputCallbackInfo| {
                for out in data.iter_mut() {
                    *out = samples.samples.get(position).copied().unwrap_or(0.0);
                    position += 1;
                }
            },
            |err| {
                error!("Playback stream error: {}", err);
            },
            None,
        )
        .map_err(|e| CoreError::PlaybackFailed {
            reason: format!("Failed to build output stream: {}", e),
            location: ErrorLocation::from(Location::caller()),
        })?;

    stream.play().map_err(|e| CoreError::PlaybackFailed {
        reason: format!("Failed to start output stream: {}", e),
        location: ErrorLocation::from(Location::caller()),
    })?;

    std::thread::sleep(Duration::from_millis(sound.duration_millis()) + PLAYBACK_TAIL);
    drop(stream);

    debug!("Playback finished");

    Ok(())
}

#[async_trait]
impl Player for CpalPlayer {
    #[instrument(skip(self))]
    async fn play(&self, sound: &PlayableHandle) -> CoreResult<()> {
        let audio = self.bank.get(sound)?;

        let device = cpal::default_host()
            .default_output_device()
            .ok_or_else(|| CoreError::PlaybackFailed {
                reason: "No output device found".to_string(),
                location: ErrorLocation::from(Location::caller()),
            })?;

        std::thread::Builder::new()
            .name("voice-memo-playback".to_string())
            .spawn(move || {
                if let Err(e) = play_to_end(device, audio) {
                    error!(error = ?e, "Playback failed");
                }
            })
            .map_err(|e| CoreError::PlaybackFailed {
                reason: format!("Failed to spawn playback thread: {}", e),
                location: ErrorLocation::from(Location::caller()),
            })?;

        info!(sound_id = %sound.id(), "Playback started");

        Ok(())
    }
}
