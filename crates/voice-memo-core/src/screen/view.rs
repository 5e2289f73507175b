use crate::{RecordingEntry, UiState};

use std::fmt;

/// One rendered ledger row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordingRow {
    /// 0-based ledger index, used to address play/share.
    pub index: usize,
    /// "Recording N".
    pub label: String,
    /// "M:SS".
    pub duration: String,
}

/// Presentation model derived from a [`UiState`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScreenView {
    /// Status message line.
    pub message: String,
    /// Label of the single record button.
    pub button_label: &'static str,
    /// Whether the button is in its "recording" style.
    pub recording: bool,
    /// Ledger rows in completion order.
    pub rows: Vec<RecordingRow>,
}

impl From<&UiState> for ScreenView {
    fn from(state: &UiState) -> Self {
        let rows = state
            .ledger()
            .iter()
            .enumerate()
            .map(|(index, entry)| RecordingRow {
                index,
                label: RecordingEntry::label(index),
                duration: entry.duration().to_string(),
            })
            .collect();

        Self {
            message: state.message().to_string(),
            button_label: if state.is_recording() {
                "Stop Recording"
            } else {
                "Start Recording"
            },
            recording: state.is_recording(),
            rows,
        }
    }
}

impl fmt::Display for RecordingRow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} - {}  [p {n}: Play] [s {n}: Save]",
            self.label,
            self.duration,
            n = self.index + 1
        )
    }
}

impl fmt::Display for ScreenView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.message.is_empty() {
            writeln!(f, "{}", self.message)?;
        }

        let marker = if self.recording { "(*)" } else { "( )" };
        writeln!(f, "{} [r: {}]", marker, self.button_label)?;

        for row in &self.rows {
            writeln!(f, "{}", row)?;
        }

        Ok(())
    }
}
