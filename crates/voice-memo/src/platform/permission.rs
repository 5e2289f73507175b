use async_trait::async_trait;
use tracing::{debug, instrument};
use voice_memo_core::{CoreResult, PermissionBroker, PermissionKind, PermissionResponse};

/// Answers permission requests from the `audio.allow_microphone` setting.
///
/// Desktop audio stacks have no runtime prompt to arbitrate, so the user's
/// configuration stands in for one.
pub struct ConfigPermissionBroker {
    allow_microphone: bool,
}

impl ConfigPermissionBroker {
    /// Grant the microphone iff `allow_microphone`.
    pub fn new(allow_microphone: bool) -> Self {
        Self { allow_microphone }
    }
}

#[async_trait]
impl PermissionBroker for ConfigPermissionBroker {
    #[instrument(skip(self))]
    async fn request(&self, kind: PermissionKind) -> CoreResult<PermissionResponse> {
        let response = match kind {
            PermissionKind::Microphone if self.allow_microphone => PermissionResponse::granted(),
            PermissionKind::Microphone => PermissionResponse::denied(),
        };

        debug!(granted = response.granted, "Permission answered from config");

        Ok(response)
    }
}
