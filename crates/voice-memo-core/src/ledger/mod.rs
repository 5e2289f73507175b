mod recording_entry;
mod recordings_ledger;

pub use {recording_entry::RecordingEntry, recordings_ledger::RecordingsLedger};
