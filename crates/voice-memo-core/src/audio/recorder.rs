//! cpal-backed [`Recorder`] that finalizes captures into WAV files.

use crate::{
    AudioCapturer, CoreError, CoreResult, FinalizedCapture, Recorder, RecordingPreset,
    SessionHandle, SoundBank,
    audio::wav::{read_wav, write_wav},
};

use std::{
    collections::HashMap,
    panic::Location,
    path::{Path, PathBuf},
    sync::Mutex,
};

use async_trait::async_trait;
use error_location::ErrorLocation;
use tracing::{error, info, instrument};
use uuid::Uuid;

struct ActiveCapture {
    capturer: AudioCapturer,
    preset: RecordingPreset,
}

/// Desktop recorder writing `recording-<id>.wav` files.
pub struct CpalRecorder {
    recordings_dir: PathBuf,
    device_name: Option<String>,
    captures: Mutex<HashMap<Uuid, ActiveCapture>>,
    bank: SoundBank,
}

impl CpalRecorder {
    /// Record from `device_name` (default input when `None`) into
    /// `recordings_dir`, registering finished sounds in `bank`.
    pub fn new(recordings_dir: PathBuf, device_name: Option<String>, bank: SoundBank) -> Self {
        Self {
            recordings_dir,
            device_name,
            captures: Mutex::new(HashMap::new()),
            bank,
        }
    }

    /// Directory recordings are written to.
    pub fn recordings_dir(&self) -> &Path {
        &self.recordings_dir
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, HashMap<Uuid, ActiveCapture>> {
        self.captures.lock().unwrap_or_else(|e| {
            error!("Capture table lock poisoned, recovering: {}", e);
            e.into_inner()
        })
    }
}

#[async_trait]
impl Recorder for CpalRecorder {
    #[instrument(skip(self))]
    async fn start(&self, preset: &RecordingPreset) -> CoreResult<SessionHandle> {
        let mut capturer = AudioCapturer::new(self.device_name.as_deref())?;
        capturer.start()?;

        let id = Uuid::new_v4();
        self.lock().insert(
            id,
            ActiveCapture {
                capturer,
                preset: *preset,
            },
        );

        info!(capture_id = %id, "Native capture started");

        Ok(SessionHandle::new(id))
    }

    #[instrument(skip(self))]
    async fn stop(&self, handle: SessionHandle) -> CoreResult<FinalizedCapture> {
        let id = handle.id();
        // The capturer is dropped here, before any await.
        let (audio, bit_depth) = {
            let ActiveCapture {
                mut capturer,
                preset,
            } = self
                .lock()
                .remove(&id)
                .ok_or_else(|| CoreError::CaptureStopFailed {
                    reason: format!("Unknown capture {}", id),
                    location: ErrorLocation::from(Location::caller()),
                })?;

            (capturer.stop()?, preset.bit_depth)
        };

        std::fs::create_dir_all(&self.recordings_dir).map_err(|e| CoreError::FileError {
            path: self.recordings_dir.clone(),
            reason: e.to_string(),
            location: ErrorLocation::from(Location::caller()),
        })?;

        let path = self.recordings_dir.join(format!("recording-{}.wav", id));

        let write_path = path.clone();
        let loaded = tokio::task::spawn_blocking(move || {
            write_wav(&write_path, &audio, bit_depth)?;
            read_wav(&write_path)
        })
        .await
        .map_err(|e| CoreError::CaptureStopFailed {
            reason: format!("Finalize task panicked: {}", e),
            location: ErrorLocation::from(Location::caller()),
        })??;

        let duration_millis = loaded.duration_millis();
        let playable = self.bank.insert(loaded);

        info!(capture_id = %id, duration_ms = duration_millis, path = ?path, "Capture finalized");

        Ok(FinalizedCapture {
            playable,
            duration_millis,
            locator: path.display().to_string(),
        })
    }
}
