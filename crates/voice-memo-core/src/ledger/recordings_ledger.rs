//! Append-only list of finalized recordings.

use crate::{CoreError, CoreResult, Player, RecordingEntry, ShareSheet};

use std::{panic::Location, sync::Arc};

use error_location::ErrorLocation;
use tracing::{debug, info, instrument};

/// Recordings in completion order.
///
/// Entries are reference counted so cloning the ledger into a new UI snapshot
/// shares every existing entry instead of rebuilding it. Nothing is ever
/// removed or reordered.
#[derive(Debug, Clone, Default)]
pub struct RecordingsLedger {
    entries: Vec<Arc<RecordingEntry>>,
}

impl RecordingsLedger {
    /// An empty ledger.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `entry` after every existing entry.
    pub fn append(&mut self, entry: RecordingEntry) {
        self.entries.push(Arc::new(entry));
        debug!(len = self.entries.len(), "Recording appended to ledger");
    }

    /// Entry at 0-based `index`.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::EntryNotFound`] if `index` is out of range.
    #[track_caller]
    pub fn entry_at(&self, index: usize) -> CoreResult<&Arc<RecordingEntry>> {
        self.entries.get(index).ok_or(CoreError::EntryNotFound {
            index,
            location: ErrorLocation::from(Location::caller()),
        })
    }

    /// Number of recordings.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no recording has been completed yet.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate entries in completion order.
    pub fn iter(&self) -> impl Iterator<Item = &Arc<RecordingEntry>> {
        self.entries.iter()
    }

    /// Replay the entry at `index` from the start.
    ///
    /// # Errors
    ///
    /// Returns error if the index is out of range or the player fails.
    #[instrument(skip(self, player))]
    pub async fn play(&self, index: usize, player: &dyn Player) -> CoreResult<()> {
        let entry = self.entry_at(index)?;
        player.play(entry.playable()).await?;

        info!(index, duration = entry.duration(), "Playback triggered");

        Ok(())
    }

    /// Hand the entry at `index` to the share sheet.
    ///
    /// Share failures are returned untouched to the caller.
    ///
    /// # Errors
    ///
    /// Returns error if the index is out of range or sharing fails.
    #[instrument(skip(self, share_sheet))]
    pub async fn share(&self, index: usize, share_sheet: &dyn ShareSheet) -> CoreResult<()> {
        let entry = self.entry_at(index)?;
        share_sheet.present(entry.locator()).await?;

        info!(index, locator = entry.locator(), "Recording shared");

        Ok(())
    }
}
