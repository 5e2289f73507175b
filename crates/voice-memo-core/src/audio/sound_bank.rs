use crate::{CapturedAudio, CoreError, CoreResult, PlayableHandle};

use std::{
    collections::HashMap,
    panic::Location,
    sync::{Arc, Mutex},
};

use error_location::ErrorLocation;
use tracing::error;
use uuid::Uuid;

/// Loaded sounds shared between the desktop recorder and player.
#[derive(Debug, Clone, Default)]
pub struct SoundBank {
    sounds: Arc<Mutex<HashMap<Uuid, Arc<CapturedAudio>>>>,
}

impl SoundBank {
    /// An empty bank.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `audio` and return its playback handle.
    pub fn insert(&self, audio: CapturedAudio) -> PlayableHandle {
        let id = Uuid::new_v4();
        self.lock().insert(id, Arc::new(audio));
        PlayableHandle::new(id)
    }

    /// Sound behind `handle`.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::PlaybackFailed`] if the handle is unknown.
    #[track_caller]
    pub fn get(&self, handle: &PlayableHandle) -> CoreResult<Arc<CapturedAudio>> {
        self.lock()
            .get(&handle.id())
            .cloned()
            .ok_or_else(|| CoreError::PlaybackFailed {
                reason: format!("Unknown sound {}", handle.id()),
                location: ErrorLocation::from(Location::caller()),
            })
    }

    /// Number of loaded sounds.
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    /// Whether no sound is loaded.
    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, HashMap<Uuid, Arc<CapturedAudio>>> {
        self.sounds.lock().unwrap_or_else(|e| {
            error!("Sound bank lock poisoned, recovering: {}", e);
            e.into_inner()
        })
    }
}
