use crate::{AudioModeConfigurator, PermissionBroker, Player, Recorder, ShareSheet};

use std::sync::Arc;

/// The full set of platform services the screen needs.
#[derive(Clone)]
pub struct Capabilities {
    /// Permission prompts.
    pub permissions: Arc<dyn PermissionBroker>,
    /// Audio session routing.
    pub audio_mode: Arc<dyn AudioModeConfigurator>,
    /// Native capture.
    pub recorder: Arc<dyn Recorder>,
    /// Playback engine.
    pub player: Arc<dyn Player>,
    /// Share sheet.
    pub share_sheet: Arc<dyn ShareSheet>,
}
