use crate::{FinalizedCapture, PlayableHandle, format_duration};

/// A finalized, playable, shareable recording.
///
/// Immutable once built: the display duration is derived a single time from
/// the raw length reported by the recorder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordingEntry {
    playable: PlayableHandle,
    duration: String,
    duration_millis: u64,
    locator: String,
}

impl RecordingEntry {
    /// Build an entry from a finalized capture.
    pub fn from_capture(capture: FinalizedCapture) -> Self {
        Self {
            playable: capture.playable,
            duration: format_duration(capture.duration_millis),
            duration_millis: capture.duration_millis,
            locator: capture.locator,
        }
    }

    /// Handle used to replay the sound.
    pub fn playable(&self) -> &PlayableHandle {
        &self.playable
    }

    /// Formatted `M:SS` duration.
    pub fn duration(&self) -> &str {
        &self.duration
    }

    /// Raw duration reported by the recorder.
    pub fn duration_millis(&self) -> u64 {
        self.duration_millis
    }

    /// Locator of the underlying media, used for sharing.
    pub fn locator(&self) -> &str {
        &self.locator
    }

    /// 1-based display label for the entry stored at `index`.
    pub fn label(index: usize) -> String {
        format!("Recording {}", index + 1)
    }
}
