//! Voice Memo Core Library
//!
//! Recording lifecycle and recordings-list state machine for a voice memo
//! screen, written against capability traits so it runs on any host. A cpal
//! and hound desktop backend is included.
//!
//! # Example
//!
//! ```no_run
//! use voice_memo_core::{Capabilities, ControllerOptions, CoreResult, ScreenController, ScreenView};
//!
//! async fn record_once(capabilities: Capabilities) -> CoreResult<()> {
//!     let mut controller = ScreenController::new(capabilities, ControllerOptions::default());
//!
//!     controller.toggle().await?; // start
//!     tokio::time::sleep(std::time::Duration::from_secs(3)).await;
//!     controller.toggle().await?; // stop
//!
//!     print!("{}", ScreenView::from(controller.state()));
//!     Ok(())
//! }
//! ```

mod audio;
mod duration;
mod error;
mod ledger;
mod platform;
mod screen;
mod session;

pub use {
    audio::{
        AudioCapturer, CapturedAudio, CpalPlayer, CpalRecorder, SoundBank, read_wav, write_wav,
    },
    duration::format_duration,
    error::{CoreError, Result as CoreResult},
    ledger::{RecordingEntry, RecordingsLedger},
    platform::{
        AudioModeConfigurator, AudioModeOptions, Capabilities, FinalizedCapture, PermissionBroker,
        PermissionKind, PermissionResponse, PlayableHandle, Player, Recorder, RecordingPreset,
        SessionHandle, ShareSheet,
    },
    screen::{
        ActiveRecording, CAPTURE_FAILED_MESSAGE, ControllerOptions, PERMISSION_DENIED_MESSAGE,
        RecordingRow, SAVE_FAILED_MESSAGE, ScreenController, ScreenEvent, ScreenIntent,
        ScreenView, UiState,
    },
    session::{RecordingSession, Session},
};

#[cfg(test)]
mod tests;
