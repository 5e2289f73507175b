//! In-memory capability fakes.

use crate::{
    AudioModeConfigurator, AudioModeOptions, Capabilities, CoreError, CoreResult,
    FinalizedCapture, PermissionBroker, PermissionKind, PermissionResponse, PlayableHandle,
    Player, Recorder, RecordingPreset, SessionHandle, ShareSheet,
};

use std::{
    collections::{HashSet, VecDeque},
    panic::Location,
    sync::{
        Arc, Mutex, MutexGuard,
        atomic::{AtomicBool, AtomicUsize, Ordering},
    },
};

use async_trait::async_trait;
use error_location::ErrorLocation;
use uuid::Uuid;

fn lock<T>(m: &Mutex<T>) -> MutexGuard<'_, T> {
    m.lock().unwrap_or_else(|e| e.into_inner())
}

#[track_caller]
fn here() -> ErrorLocation {
    ErrorLocation::from(Location::caller())
}

/// Scripted answer from [`FakePermissionBroker`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum PermissionAnswer {
    Grant,
    Deny,
    Fail,
}

#[derive(Default)]
pub(crate) struct FakePermissionBroker {
    answers: Mutex<VecDeque<PermissionAnswer>>,
    pub(crate) requests: AtomicUsize,
}

impl FakePermissionBroker {
    /// Queue answers; once exhausted every request is granted.
    pub(crate) fn script(&self, answers: &[PermissionAnswer]) {
        lock(&self.answers).extend(answers.iter().copied());
    }
}

#[async_trait]
impl PermissionBroker for FakePermissionBroker {
    async fn request(&self, kind: PermissionKind) -> CoreResult<PermissionResponse> {
        assert_eq!(kind, PermissionKind::Microphone);
        self.requests.fetch_add(1, Ordering::SeqCst);

        match lock(&self.answers)
            .pop_front()
            .unwrap_or(PermissionAnswer::Grant)
        {
            PermissionAnswer::Grant => Ok(PermissionResponse::granted()),
            PermissionAnswer::Deny => Ok(PermissionResponse::denied()),
            PermissionAnswer::Fail => Err(CoreError::DeviceError {
                reason: "permission service unavailable".to_string(),
                location: here(),
            }),
        }
    }
}

#[derive(Default)]
pub(crate) struct FakeAudioMode {
    pub(crate) calls: Mutex<Vec<AudioModeOptions>>,
    pub(crate) fail: AtomicBool,
}

#[async_trait]
impl AudioModeConfigurator for FakeAudioMode {
    async fn configure(&self, options: AudioModeOptions) -> CoreResult<()> {
        if self.fail.load(Ordering::SeqCst) {
            return Err(CoreError::DeviceError {
                reason: "audio session rejected".to_string(),
                location: here(),
            });
        }
        lock(&self.calls).push(options);
        Ok(())
    }
}

#[derive(Default)]
pub(crate) struct FakeRecorder {
    durations: Mutex<VecDeque<u64>>,
    live: Mutex<HashSet<Uuid>>,
    pub(crate) presets: Mutex<Vec<RecordingPreset>>,
    pub(crate) fail_start: AtomicBool,
    pub(crate) fail_stop: AtomicBool,
    pub(crate) started: AtomicUsize,
    pub(crate) stopped: AtomicUsize,
    pub(crate) max_live: AtomicUsize,
}

impl FakeRecorder {
    /// Queue durations for upcoming stops; defaults to 1000ms when empty.
    pub(crate) fn script_durations(&self, durations: &[u64]) {
        lock(&self.durations).extend(durations.iter().copied());
    }

    pub(crate) fn live_count(&self) -> usize {
        lock(&self.live).len()
    }
}

#[async_trait]
impl Recorder for FakeRecorder {
    async fn start(&self, preset: &RecordingPreset) -> CoreResult<SessionHandle> {
        if self.fail_start.load(Ordering::SeqCst) {
            return Err(CoreError::DeviceError {
                reason: "device busy".to_string(),
                location: here(),
            });
        }

        let id = Uuid::new_v4();
        let mut live = lock(&self.live);
        live.insert(id);
        self.max_live.fetch_max(live.len(), Ordering::SeqCst);
        self.started.fetch_add(1, Ordering::SeqCst);
        lock(&self.presets).push(*preset);

        Ok(SessionHandle::new(id))
    }

    async fn stop(&self, handle: SessionHandle) -> CoreResult<FinalizedCapture> {
        if !lock(&self.live).remove(&handle.id()) {
            return Err(CoreError::CaptureStopFailed {
                reason: "capture stopped twice".to_string(),
                location: here(),
            });
        }
        let n = self.stopped.fetch_add(1, Ordering::SeqCst) + 1;

        if self.fail_stop.load(Ordering::SeqCst) {
            return Err(CoreError::CaptureStopFailed {
                reason: "encoder failed".to_string(),
                location: here(),
            });
        }

        let duration_millis = lock(&self.durations).pop_front().unwrap_or(1000);

        Ok(FinalizedCapture {
            playable: PlayableHandle::new(Uuid::new_v4()),
            duration_millis,
            locator: format!("memory://recording-{}", n),
        })
    }
}

#[derive(Default)]
pub(crate) struct FakePlayer {
    pub(crate) plays: Mutex<Vec<PlayableHandle>>,
}

#[async_trait]
impl Player for FakePlayer {
    async fn play(&self, sound: &PlayableHandle) -> CoreResult<()> {
        lock(&self.plays).push(*sound);
        Ok(())
    }
}

#[derive(Default)]
pub(crate) struct FakeShareSheet {
    pub(crate) shared: Mutex<Vec<String>>,
    pub(crate) fail: AtomicBool,
}

#[async_trait]
impl ShareSheet for FakeShareSheet {
    async fn present(&self, locator: &str) -> CoreResult<()> {
        if self.fail.load(Ordering::SeqCst) {
            return Err(CoreError::ShareFailed {
                locator: locator.to_string(),
                reason: "user cancelled".to_string(),
                location: here(),
            });
        }
        lock(&self.shared).push(locator.to_string());
        Ok(())
    }
}

/// Every fake, kept alongside the capability bundle built from them.
#[derive(Default)]
pub(crate) struct Fakes {
    pub(crate) permissions: Arc<FakePermissionBroker>,
    pub(crate) audio_mode: Arc<FakeAudioMode>,
    pub(crate) recorder: Arc<FakeRecorder>,
    pub(crate) player: Arc<FakePlayer>,
    pub(crate) share_sheet: Arc<FakeShareSheet>,
}

impl Fakes {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn capabilities(&self) -> Capabilities {
        Capabilities {
            permissions: self.permissions.clone(),
            audio_mode: self.audio_mode.clone(),
            recorder: self.recorder.clone(),
            player: self.player.clone(),
            share_sheet: self.share_sheet.clone(),
        }
    }

    pub(crate) fn plays(&self) -> Vec<PlayableHandle> {
        lock(&self.player.plays).clone()
    }

    pub(crate) fn shared(&self) -> Vec<String> {
        lock(&self.share_sheet.shared).clone()
    }

    pub(crate) fn audio_mode_calls(&self) -> Vec<AudioModeOptions> {
        lock(&self.audio_mode.calls).clone()
    }

    pub(crate) fn presets(&self) -> Vec<RecordingPreset> {
        lock(&self.recorder.presets).clone()
    }
}
