//! Screen controller: the recording state machine.
//!
//! ```text
//! IDLE --start ok--------> RECORDING --stop--> IDLE (+ entry appended)
//! IDLE --start denied----> IDLE (+ message)
//! IDLE --start failed----> IDLE (+ message when reporting is enabled)
//! ```
//!
//! Intents are processed one at a time. Each platform call settles before the
//! next [`UiState`] snapshot is published.

use crate::{
    ActiveRecording, Capabilities, CoreError, CoreResult, RecordingEntry, RecordingSession,
    RecordingsLedger, ScreenEvent, ScreenIntent, Session, UiState,
};

use std::panic::Location;

use error_location::ErrorLocation;
use tokio::sync::watch;
use tracing::{debug, error, info, instrument, warn};

/// Behavior switches for [`ScreenController`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ControllerOptions {
    /// Show a message when capture fails to start for a non-permission
    /// reason. When false such failures are only logged.
    pub report_capture_failures: bool,
}

impl Default for ControllerOptions {
    fn default() -> Self {
        Self {
            report_capture_failures: true,
        }
    }
}

/// Owns the UI state and the (at most one) live [`Session`].
pub struct ScreenController {
    capabilities: Capabilities,
    recording_session: RecordingSession,
    active: Option<Session>,
    state: UiState,
    options: ControllerOptions,
    state_tx: watch::Sender<UiState>,
}

impl ScreenController {
    /// Create an idle controller.
    pub fn new(capabilities: Capabilities, options: ControllerOptions) -> Self {
        let recording_session = RecordingSession::new(&capabilities);
        let state = UiState::new();
        let (state_tx, _) = watch::channel(state.clone());

        Self {
            capabilities,
            recording_session,
            active: None,
            state,
            options,
            state_tx,
        }
    }

    /// Current snapshot.
    pub fn state(&self) -> &UiState {
        &self.state
    }

    /// Receive every published snapshot.
    pub fn subscribe(&self) -> watch::Receiver<UiState> {
        self.state_tx.subscribe()
    }

    /// Current status message.
    pub fn message(&self) -> &str {
        self.state.message()
    }

    /// Whether a session is live.
    pub fn is_recording(&self) -> bool {
        self.active.is_some()
    }

    /// Finalized recordings.
    pub fn ledger(&self) -> &RecordingsLedger {
        self.state.ledger()
    }

    /// The intent bound to the single record button in the current state.
    pub fn primary_intent(&self) -> ScreenIntent {
        if self.is_recording() {
            ScreenIntent::Stop
        } else {
            ScreenIntent::Start
        }
    }

    /// Dispatch the record button's current intent.
    ///
    /// # Errors
    ///
    /// See [`ScreenController::dispatch`].
    pub async fn toggle(&mut self) -> CoreResult<()> {
        self.dispatch(self.primary_intent()).await
    }

    /// Run `intent` to completion and publish the resulting state.
    ///
    /// Permission denials, capture start failures and finalize failures are
    /// handled here and reflected in the message slot.
    ///
    /// # Errors
    ///
    /// - [`CoreError::InvalidTransition`] for `Start` while recording or
    ///   `Stop` while idle. State is left untouched.
    /// - Play and share errors, including
    ///   [`CoreError::EntryNotFound`], are returned unchanged.
    #[instrument(skip(self), fields(state = self.state.state_name()))]
    pub async fn dispatch(&mut self, intent: ScreenIntent) -> CoreResult<()> {
        match intent {
            ScreenIntent::Start => self.start().await,
            ScreenIntent::Stop => self.stop().await,
            ScreenIntent::Play(index) => {
                self.state
                    .ledger()
                    .play(index, self.capabilities.player.as_ref())
                    .await
            }
            ScreenIntent::Share(index) => {
                self.state
                    .ledger()
                    .share(index, self.capabilities.share_sheet.as_ref())
                    .await
            }
        }
    }

    /// Finalize a live session before the host goes away.
    ///
    /// Returns whether a session was finalized.
    ///
    /// # Errors
    ///
    /// Never fails on its own; present for symmetry with `dispatch`.
    #[instrument(skip(self))]
    pub async fn finalize_on_teardown(&mut self) -> CoreResult<bool> {
        if self.active.is_none() {
            return Ok(false);
        }

        warn!("Recording still active at teardown, finalizing");
        self.stop().await?;

        Ok(true)
    }

    #[track_caller]
    fn invalid(&self, intent: ScreenIntent) -> CoreError {
        CoreError::InvalidTransition {
            state: self.state.state_name(),
            intent: intent.name(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    async fn start(&mut self) -> CoreResult<()> {
        if self.active.is_some() {
            return Err(self.invalid(ScreenIntent::Start));
        }

        match self.recording_session.start().await {
            Ok(session) => {
                let active = ActiveRecording {
                    session_id: session.id(),
                    started_at: session.started_at(),
                };
                self.active = Some(session);
                self.commit(ScreenEvent::RecordingStarted(active));
            }
            Err(CoreError::PermissionDenied { .. }) => {
                self.commit(ScreenEvent::PermissionDenied);
            }
            Err(e) => {
                // Already logged by the recording session.
                debug!(error = %e, "Capture start failure handled");
                if self.options.report_capture_failures {
                    self.commit(ScreenEvent::CaptureStartFailed);
                }
            }
        }

        Ok(())
    }

    async fn stop(&mut self) -> CoreResult<()> {
        let Some(session) = self.active.take() else {
            return Err(self.invalid(ScreenIntent::Stop));
        };
        let session_id = session.id();

        match self.recording_session.stop(session).await {
            Ok(capture) => {
                let entry = RecordingEntry::from_capture(capture);
                info!(
                    session_id = %session_id,
                    duration = entry.duration(),
                    "Recording added"
                );
                self.commit(ScreenEvent::RecordingFinished(entry));
            }
            Err(e) => {
                error!(session_id = %session_id, error = ?e, "Failed to stop recording");
                self.commit(ScreenEvent::RecordingLost);
            }
        }

        Ok(())
    }

    fn commit(&mut self, event: ScreenEvent) {
        self.state = std::mem::take(&mut self.state).apply(event);
        self.state_tx.send_replace(self.state.clone());
    }
}
