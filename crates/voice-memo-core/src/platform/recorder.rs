use crate::{CoreResult, RecordingPreset};

use async_trait::async_trait;
use uuid::Uuid;

/// Opaque handle to a native capture in progress.
///
/// Neither `Clone` nor `Copy`: the handle is owned by exactly one
/// [`Session`](crate::Session) and handed back to [`Recorder::stop`] once.
#[derive(Debug, PartialEq, Eq, Hash)]
pub struct SessionHandle(Uuid);

impl SessionHandle {
    /// Wrap a platform-assigned capture id.
    pub fn new(id: Uuid) -> Self {
        Self(id)
    }

    /// Platform-assigned capture id.
    pub fn id(&self) -> Uuid {
        self.0
    }
}

/// Handle to a loaded, replayable sound.
///
/// Cheap to clone; entries share it with the UI for replay.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PlayableHandle(Uuid);

impl PlayableHandle {
    /// Wrap a platform-assigned sound id.
    pub fn new(id: Uuid) -> Self {
        Self(id)
    }

    /// Platform-assigned sound id.
    pub fn id(&self) -> Uuid {
        self.0
    }
}

/// Everything the platform hands back when a capture is finalized.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FinalizedCapture {
    /// Loaded sound ready for playback.
    pub playable: PlayableHandle,
    /// Length of the recording in milliseconds.
    pub duration_millis: u64,
    /// Stable locator (path or URI) of the recorded media.
    pub locator: String,
}

/// Native audio capture subsystem.
#[async_trait]
pub trait Recorder: Send + Sync {
    /// Begin capturing with `preset`.
    ///
    /// # Errors
    ///
    /// Returns error if the device is missing, busy, or fails to start.
    async fn start(&self, preset: &RecordingPreset) -> CoreResult<SessionHandle>;

    /// End the capture behind `handle`, release its resources and load the
    /// result for playback.
    ///
    /// # Errors
    ///
    /// Returns error if the capture cannot be finalized. The handle is
    /// consumed either way.
    async fn stop(&self, handle: SessionHandle) -> CoreResult<FinalizedCapture>;
}
