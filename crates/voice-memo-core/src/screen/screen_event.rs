use crate::{ActiveRecording, RecordingEntry};

/// Settled outcomes that move the UI state forward.
///
/// Produced by the controller only after the triggering platform call has
/// completed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScreenEvent {
    /// Capture began.
    RecordingStarted(ActiveRecording),
    /// The microphone permission was denied.
    PermissionDenied,
    /// Capture failed to start for another reason.
    CaptureStartFailed,
    /// The active recording was finalized into an entry.
    RecordingFinished(RecordingEntry),
    /// The active recording ended but could not be finalized.
    RecordingLost,
}
