use crate::CoreResult;

use async_trait::async_trait;

/// Audio session routing options applied before capture begins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AudioModeOptions {
    /// Route the recording input through the playback session.
    pub allow_recording_on_playback_channel: bool,
    /// Keep capture and playback audible when a hardware silent switch is on.
    pub allow_playback_during_silent_switch: bool,
}

impl AudioModeOptions {
    /// Options required for recording: both flags enabled.
    pub fn recording() -> Self {
        Self {
            allow_recording_on_playback_channel: true,
            allow_playback_during_silent_switch: true,
        }
    }
}

/// Configures the host audio session.
#[async_trait]
pub trait AudioModeConfigurator: Send + Sync {
    /// Apply `options` to the audio session.
    ///
    /// # Errors
    ///
    /// Returns error if the host rejects the configuration.
    async fn configure(&self, options: AudioModeOptions) -> CoreResult<()>;
}
