mod intent;
mod screen_controller;
mod screen_event;
mod ui_state;
mod view;

pub use {
    intent::ScreenIntent,
    screen_controller::{ControllerOptions, ScreenController},
    screen_event::ScreenEvent,
    ui_state::{ActiveRecording, UiState},
    view::{RecordingRow, ScreenView},
};

/// Message shown when the microphone permission is denied.
pub const PERMISSION_DENIED_MESSAGE: &str = "Please grant permission to app to access microphone";

/// Message shown when capture fails to start for a non-permission reason.
pub const CAPTURE_FAILED_MESSAGE: &str = "Failed to start recording";

/// Message shown when a stopped capture could not be finalized.
pub const SAVE_FAILED_MESSAGE: &str = "Failed to save recording";
