mod audio_config;
mod behaviour_config;
#[allow(clippy::module_inception)]
mod config;
mod storage_config;

pub(crate) use {
    audio_config::AudioConfig, behaviour_config::BehaviourConfig, config::Config,
    storage_config::StorageConfig,
};

pub(crate) const DEFAULT_ALLOW_MICROPHONE: bool = true;
pub(crate) const DEFAULT_REPORT_CAPTURE_FAILURES: bool = true;
pub(crate) const DEFAULT_REVEAL_AFTER_EXPORT: bool = true;

pub(crate) fn default_allow_microphone() -> bool {
    DEFAULT_ALLOW_MICROPHONE
}

pub(crate) fn default_report_capture_failures() -> bool {
    DEFAULT_REPORT_CAPTURE_FAILURES
}

pub(crate) fn default_reveal_after_export() -> bool {
    DEFAULT_REVEAL_AFTER_EXPORT
}
