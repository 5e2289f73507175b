//! Lifecycle of a single recording: permission, audio mode, capture, finalize.

use crate::{
    AudioModeConfigurator, AudioModeOptions, Capabilities, CoreError, CoreResult,
    FinalizedCapture, PermissionBroker, PermissionKind, Recorder, RecordingPreset, Session,
};

use std::{panic::Location, sync::Arc};

use error_location::ErrorLocation;
use tracing::{error, info, instrument, warn};

/// Starts and stops captures against the host platform.
///
/// Holds no session state itself; the caller owns the returned [`Session`]
/// and is responsible for never holding more than one.
#[derive(Clone)]
pub struct RecordingSession {
    permissions: Arc<dyn PermissionBroker>,
    audio_mode: Arc<dyn AudioModeConfigurator>,
    recorder: Arc<dyn Recorder>,
    preset: RecordingPreset,
}

impl RecordingSession {
    /// Create a session driver using the high quality preset.
    pub fn new(capabilities: &Capabilities) -> Self {
        Self {
            permissions: Arc::clone(&capabilities.permissions),
            audio_mode: Arc::clone(&capabilities.audio_mode),
            recorder: Arc::clone(&capabilities.recorder),
            preset: RecordingPreset::HIGH_QUALITY,
        }
    }

    /// Request microphone permission and begin capture.
    ///
    /// # Errors
    ///
    /// - [`CoreError::PermissionDenied`] if the broker denies the microphone.
    /// - [`CoreError::CaptureStartFailed`] for any other failure, including
    ///   the broker itself failing. Logged here; no session is left behind.
    #[instrument(skip(self))]
    pub async fn start(&self) -> CoreResult<Session> {
        let location = ErrorLocation::from(Location::caller());

        let response = match self.permissions.request(PermissionKind::Microphone).await {
            Ok(response) => response,
            Err(e) => {
                error!(error = ?e, "Failed to start recording");
                return Err(CoreError::CaptureStartFailed {
                    source: Box::new(e),
                    location,
                });
            }
        };

        if !response.granted {
            warn!("Microphone permission denied");
            return Err(CoreError::PermissionDenied { location });
        }

        match self.begin_capture().await {
            Ok(session) => {
                info!(session_id = %session.id(), "Recording started");
                Ok(session)
            }
            Err(e) => {
                error!(error = ?e, "Failed to start recording");
                Err(CoreError::CaptureStartFailed {
                    source: Box::new(e),
                    location,
                })
            }
        }
    }

    /// Finalize `session` into a playable recording.
    ///
    /// The session is consumed even on failure; its native resources are
    /// handed to the recorder exactly once.
    ///
    /// # Errors
    ///
    /// Returns error if the recorder cannot finalize the capture.
    #[instrument(skip(self, session), fields(session_id = %session.id()))]
    pub async fn stop(&self, session: Session) -> CoreResult<FinalizedCapture> {
        let elapsed = session.elapsed();
        let capture = self.recorder.stop(session.into_handle()).await?;

        info!(
            elapsed_ms = elapsed.as_millis(),
            duration_ms = capture.duration_millis,
            locator = %capture.locator,
            "Recording stopped"
        );

        Ok(capture)
    }

    async fn begin_capture(&self) -> CoreResult<Session> {
        self.audio_mode
            .configure(AudioModeOptions::recording())
            .await?;

        // Nothing fallible may follow this call, or the handle would leak.
        let handle = self.recorder.start(&self.preset).await?;

        Ok(Session::new(handle, self.preset))
    }
}
