use crate::config::default_allow_microphone;

use serde::{Deserialize, Serialize};

/// Audio device configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AudioConfig {
    /// Selected input device name (None = default device).
    #[serde(default)]
    pub selected_device: Option<String>,

    /// Whether the app may use the microphone. Answers permission requests.
    #[serde(default = "default_allow_microphone")]
    pub allow_microphone: bool,
}
