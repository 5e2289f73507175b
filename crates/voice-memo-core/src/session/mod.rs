mod recording_session;
#[allow(clippy::module_inception)]
mod session;

pub use {recording_session::RecordingSession, session::Session};
