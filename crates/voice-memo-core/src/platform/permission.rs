use crate::CoreResult;

use async_trait::async_trait;

/// Kind of OS permission the screen asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PermissionKind {
    /// Access to the audio input device.
    Microphone,
}

/// Outcome of a permission request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PermissionResponse {
    /// Whether the user (or OS policy) granted the permission.
    pub granted: bool,
}

impl PermissionResponse {
    /// A granted response.
    pub fn granted() -> Self {
        Self { granted: true }
    }

    /// A denied response.
    pub fn denied() -> Self {
        Self { granted: false }
    }
}

/// Arbitrates OS-level permissions.
#[async_trait]
pub trait PermissionBroker: Send + Sync {
    /// Ask for `kind`, suspending while any permission prompt is shown.
    ///
    /// # Errors
    ///
    /// Returns error if the platform could not answer the request at all.
    /// A denial is a normal [`PermissionResponse`], not an error.
    async fn request(&self, kind: PermissionKind) -> CoreResult<PermissionResponse>;
}
