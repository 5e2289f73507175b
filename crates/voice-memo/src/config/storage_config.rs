use crate::config::default_reveal_after_export;

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Where recordings are written and exported.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Directory finalized WAV files are written to.
    pub recordings_dir: PathBuf,

    /// Directory shared recordings are copied into.
    pub export_dir: PathBuf,

    /// Open an exported file with the system handler after copying.
    #[serde(default = "default_reveal_after_export")]
    pub reveal_after_export: bool,
}
