//! Host platform capabilities consumed by the recording screen.
//!
//! Every platform service the screen touches (permission prompts, audio
//! routing, capture, playback and sharing) sits behind one of these traits so
//! the state machine can run against any host, including in-memory fakes.

mod audio_mode;
mod capabilities;
mod permission;
mod player;
mod preset;
mod recorder;
mod share_sheet;

pub use {
    audio_mode::{AudioModeConfigurator, AudioModeOptions},
    capabilities::Capabilities,
    permission::{PermissionBroker, PermissionKind, PermissionResponse},
    player::Player,
    preset::RecordingPreset,
    recorder::{FinalizedCapture, PlayableHandle, Recorder, SessionHandle},
    share_sheet::ShareSheet,
};
