use crate::config::default_report_capture_failures;

use serde::{Deserialize, Serialize};

/// Application behavior configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BehaviourConfig {
    /// Show a message when recording fails to start for a reason other than
    /// permission. When false the failure is only logged.
    #[serde(default = "default_report_capture_failures")]
    pub report_capture_failures: bool,
}
