use crate::{RecordingPreset, SessionHandle};

use std::time::{Duration, Instant};

use uuid::Uuid;

/// A live, in-progress capture.
///
/// Owns the native capture handle exclusively. Not `Clone`: the only way to
/// end a session is to move it into
/// [`RecordingSession::stop`](crate::RecordingSession::stop).
#[derive(Debug)]
pub struct Session {
    id: Uuid,
    handle: SessionHandle,
    preset: RecordingPreset,
    started_at: Instant,
}

impl Session {
    pub(crate) fn new(handle: SessionHandle, preset: RecordingPreset) -> Self {
        Self {
            id: Uuid::new_v4(),
            handle,
            preset,
            started_at: Instant::now(),
        }
    }

    /// Unique id for log correlation.
    pub fn id(&self) -> Uuid {
        self.id
    }

    /// Preset the capture was started with.
    pub fn preset(&self) -> &RecordingPreset {
        &self.preset
    }

    /// When capture began.
    pub fn started_at(&self) -> Instant {
        self.started_at
    }

    /// Wall-clock time since capture began.
    pub fn elapsed(&self) -> Duration {
        self.started_at.elapsed()
    }

    pub(crate) fn into_handle(self) -> SessionHandle {
        self.handle
    }
}
