use std::sync::Mutex;

use async_trait::async_trait;
use tracing::{debug, error, instrument};
use voice_memo_core::{AudioModeConfigurator, AudioModeOptions, CoreResult};

/// Records the requested audio mode.
///
/// Desktop hosts route input and output independently and have no silent
/// switch, so there is nothing to reconfigure; the options are kept for
/// inspection.
#[derive(Default)]
pub struct DesktopAudioMode {
    applied: Mutex<Option<AudioModeOptions>>,
}

impl DesktopAudioMode {
    /// No mode applied yet.
    pub fn new() -> Self {
        Self::default()
    }

    /// Options from the most recent `configure` call.
    #[cfg(test)]
    pub(crate) fn applied(&self) -> Option<AudioModeOptions> {
        *self.applied.lock().unwrap_or_else(|e| e.into_inner())
    }
}

#[async_trait]
impl AudioModeConfigurator for DesktopAudioMode {
    #[instrument(skip(self))]
    async fn configure(&self, options: AudioModeOptions) -> CoreResult<()> {
        let previous = self
            .applied
            .lock()
            .unwrap_or_else(|e| {
                error!("Audio mode lock poisoned, recovering: {}", e);
                e.into_inner()
            })
            .replace(options);

        debug!(changed = previous != Some(options), "Audio mode applied");

        Ok(())
    }
}
