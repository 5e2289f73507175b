/// Commands sent from the input handler to the main application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppCommand {
    /// Press the record button: start when idle, stop when recording.
    ToggleRecording,
    /// Replay a recording.
    Play {
        /// 0-based ledger index.
        index: usize,
    },
    /// Share (export) a recording.
    Share {
        /// 0-based ledger index.
        index: usize,
    },
    /// Request application shutdown.
    Shutdown,
}
