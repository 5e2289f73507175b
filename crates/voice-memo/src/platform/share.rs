//! Desktop share sheet: export into a folder and hand off to the system.

use std::{
    fs,
    panic::Location,
    path::{Path, PathBuf},
};

use async_trait::async_trait;
use error_location::ErrorLocation;
use tracing::{info, instrument};
use voice_memo_core::{CoreError, CoreResult, ShareSheet};

/// Copies a recording into the export directory and optionally opens it.
pub struct ExportShareSheet {
    export_dir: PathBuf,
    reveal: bool,
}

impl ExportShareSheet {
    /// Export into `export_dir`; open the copy when `reveal` is set.
    pub fn new(export_dir: PathBuf, reveal: bool) -> Self {
        Self { export_dir, reveal }
    }

    /// Path a recording at `locator` is exported to.
    #[track_caller]
    pub fn export_path(&self, locator: &str) -> CoreResult<PathBuf> {
        let file_name = Path::new(locator)
            .file_name()
            .ok_or_else(|| CoreError::ShareFailed {
                locator: locator.to_string(),
                reason: "Locator has no file name".to_string(),
                location: ErrorLocation::from(Location::caller()),
            })?;

        Ok(self.export_dir.join(file_name))
    }
}

#[track_caller]
fn share_failed(locator: &str, reason: String) -> CoreError {
    CoreError::ShareFailed {
        locator: locator.to_string(),
        reason,
        location: ErrorLocation::from(Location::caller()),
    }
}

#[async_trait]
impl ShareSheet for ExportShareSheet {
    #[instrument(skip(self))]
    async fn present(&self, locator: &str) -> CoreResult<()> {
        let destination = self.export_path(locator)?;

        fs::create_dir_all(&self.export_dir)
            .map_err(|e| share_failed(locator, format!("Failed to create export dir: {}", e)))?;

        fs::copy(locator, &destination)
            .map_err(|e| share_failed(locator, format!("Failed to copy recording: {}", e)))?;

        info!(destination = ?destination, "Recording exported");

        if self.reveal {
            open::that(&destination)
                .map_err(|e| share_failed(locator, format!("Failed to open export: {}", e)))?;
        }

        Ok(())
    }
}
