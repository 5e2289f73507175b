//! Desktop implementations of the screen's platform capabilities.

mod audio_mode;
mod permission;
mod share;

pub(crate) use {
    audio_mode::DesktopAudioMode, permission::ConfigPermissionBroker, share::ExportShareSheet,
};

use crate::config::Config;

use std::sync::Arc;

use voice_memo_core::{Capabilities, CpalPlayer, CpalRecorder, SoundBank};

/// Wire every desktop capability from `config`.
pub(crate) fn desktop_capabilities(config: &Config) -> Capabilities {
    let bank = SoundBank::new();

    Capabilities {
        permissions: Arc::new(ConfigPermissionBroker::new(config.audio.allow_microphone)),
        audio_mode: Arc::new(DesktopAudioMode::new()),
        recorder: Arc::new(CpalRecorder::new(
            config.storage.recordings_dir.clone(),
            config.audio.selected_device.clone(),
            bank.clone(),
        )),
        player: Arc::new(CpalPlayer::new(bank)),
        share_sheet: Arc::new(ExportShareSheet::new(
            config.storage.export_dir.clone(),
            config.storage.reveal_after_export,
        )),
    }
}
