//! Immutable screen state and its reducer.

use crate::{
    CAPTURE_FAILED_MESSAGE, PERMISSION_DENIED_MESSAGE, RecordingsLedger, SAVE_FAILED_MESSAGE,
    ScreenEvent,
};

use std::time::Instant;

use uuid::Uuid;

/// Marker for a recording in progress.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActiveRecording {
    /// Id of the live session.
    pub session_id: Uuid,
    /// When capture began.
    pub started_at: Instant,
}

/// Snapshot of everything the renderer shows.
#[derive(Debug, Clone, Default)]
pub struct UiState {
    message: String,
    recording: Option<ActiveRecording>,
    ledger: RecordingsLedger,
}

impl UiState {
    /// Idle state with no message and no recordings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Latest status message, empty if none was ever set.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Whether a recording is in progress.
    pub fn is_recording(&self) -> bool {
        self.recording.is_some()
    }

    /// The recording in progress, if any.
    pub fn recording(&self) -> Option<&ActiveRecording> {
        self.recording.as_ref()
    }

    /// Finalized recordings.
    pub fn ledger(&self) -> &RecordingsLedger {
        &self.ledger
    }

    /// State name used in logs and errors.
    pub fn state_name(&self) -> &'static str {
        if self.is_recording() {
            "recording"
        } else {
            "idle"
        }
    }

    /// Produce the state that follows `event`.
    ///
    /// The message is latest-wins and is only replaced by events that carry
    /// one; a successful start leaves it as it was.
    pub fn apply(self, event: ScreenEvent) -> Self {
        let Self {
            message,
            recording,
            mut ledger,
        } = self;

        match event {
            ScreenEvent::RecordingStarted(active) => Self {
                message,
                recording: Some(active),
                ledger,
            },
            ScreenEvent::PermissionDenied => Self {
                message: PERMISSION_DENIED_MESSAGE.to_string(),
                recording,
                ledger,
            },
            ScreenEvent::CaptureStartFailed => Self {
                message: CAPTURE_FAILED_MESSAGE.to_string(),
                recording,
                ledger,
            },
            ScreenEvent::RecordingFinished(entry) => {
                ledger.append(entry);
                Self {
                    message,
                    recording: None,
                    ledger,
                }
            }
            ScreenEvent::RecordingLost => Self {
                message: SAVE_FAILED_MESSAGE.to_string(),
                recording: None,
                ledger,
            },
        }
    }
}
