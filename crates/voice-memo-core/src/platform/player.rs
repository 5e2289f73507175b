use crate::{CoreResult, PlayableHandle};

use async_trait::async_trait;

/// Audio playback engine.
#[async_trait]
pub trait Player: Send + Sync {
    /// Play `sound` from its first sample.
    ///
    /// Fire-and-forget: returns once playback has been triggered. Repeated
    /// calls restart from zero and may overlap.
    ///
    /// # Errors
    ///
    /// Returns error if the sound is unknown or playback cannot be triggered.
    async fn play(&self, sound: &PlayableHandle) -> CoreResult<()>;
}
