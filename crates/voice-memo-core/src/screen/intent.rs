use std::fmt;

/// User intents the screen accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScreenIntent {
    /// Begin a new recording.
    Start,
    /// Finish the active recording.
    Stop,
    /// Replay the recording at a 0-based index.
    Play(usize),
    /// Share the recording at a 0-based index.
    Share(usize),
}

impl ScreenIntent {
    /// Short name used in logs and errors.
    pub fn name(&self) -> &'static str {
        match self {
            ScreenIntent::Start => "start",
            ScreenIntent::Stop => "stop",
            ScreenIntent::Play(_) => "play",
            ScreenIntent::Share(_) => "share",
        }
    }
}

impl fmt::Display for ScreenIntent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScreenIntent::Play(index) | ScreenIntent::Share(index) => {
                write!(f, "{} {}", self.name(), index + 1)
            }
            _ => f.write_str(self.name()),
        }
    }
}
