use crate::CoreResult;

use async_trait::async_trait;

/// Platform share/export sheet.
#[async_trait]
pub trait ShareSheet: Send + Sync {
    /// Present the media at `locator` for sharing.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::ShareFailed`](crate::CoreError::ShareFailed) when
    /// sharing is unsupported or fails.
    async fn present(&self, locator: &str) -> CoreResult<()>;
}
