use std::path::PathBuf;

use error_location::ErrorLocation;
use thiserror::Error;

/// Recording, playback and sharing errors with source location tracking.
#[derive(Error, Debug)]
pub enum CoreError {
    /// The microphone permission request was denied.
    #[error("Microphone permission denied {location}")]
    PermissionDenied {
        /// Source location where error occurred.
        location: ErrorLocation,
    },

    /// Capture could not be started for a reason other than permission.
    #[error("Failed to start capture: {source} {location}")]
    CaptureStartFailed {
        /// Underlying platform error.
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
        /// Source location where error occurred.
        location: ErrorLocation,
    },

    /// Capture could not be finalized into a playable recording.
    #[error("Failed to finalize capture: {reason} {location}")]
    CaptureStopFailed {
        /// Description of the failure.
        reason: String,
        /// Source location where error occurred.
        location: ErrorLocation,
    },

    /// No audio input device found.
    #[error("No microphone found {location}")]
    NoMicrophoneFound {
        /// Source location where error occurred.
        location: ErrorLocation,
    },

    /// Audio device operation failed.
    #[error("Audio device error: {reason} {location}")]
    DeviceError {
        /// Description of the device error.
        reason: String,
        /// Source location where error occurred.
        location: ErrorLocation,
    },

    /// Reading or writing a recording file failed.
    #[error("Recording file error at {path:?}: {reason} {location}")]
    FileError {
        /// Path of the recording file.
        path: PathBuf,
        /// Description of the failure.
        reason: String,
        /// Source location where error occurred.
        location: ErrorLocation,
    },

    /// Playback could not be triggered.
    #[error("Playback failed: {reason} {location}")]
    PlaybackFailed {
        /// Description of the failure.
        reason: String,
        /// Source location where error occurred.
        location: ErrorLocation,
    },

    /// The share capability rejected or failed to present the file.
    #[error("Share failed for {locator}: {reason} {location}")]
    ShareFailed {
        /// Locator that was being shared.
        locator: String,
        /// Description of the failure.
        reason: String,
        /// Source location where error occurred.
        location: ErrorLocation,
    },

    /// No ledger entry exists at the requested index.
    #[error("No recording at index {index} {location}")]
    EntryNotFound {
        /// Requested 0-based index.
        index: usize,
        /// Source location where error occurred.
        location: ErrorLocation,
    },

    /// The intent is not valid in the current screen state.
    #[error("Cannot {intent} while {state} {location}")]
    InvalidTransition {
        /// Screen state name when the intent arrived.
        state: &'static str,
        /// Rejected intent name.
        intent: &'static str,
        /// Source location where error occurred.
        location: ErrorLocation,
    },
}

/// Result type alias using [`CoreError`].
pub type Result<T> = std::result::Result<T, CoreError>;
