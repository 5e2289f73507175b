use crate::{CoreError, CoreResult};

use std::{
    panic::Location,
    sync::{
        atomic::{AtomicBool, Ordering},
        {Arc, Mutex},
    },
};

use cpal::{
    Device, Stream, StreamConfig,
    traits::{DeviceTrait, HostTrait, StreamTrait},
};
use error_location::ErrorLocation;
use tracing::{debug, error, info, instrument, warn};

/// Longest capture kept, in seconds. Samples past this are discarded.
pub(crate) const MAX_CAPTURE_SECONDS: usize = 60 * 60;

/// Interleaved samples collected from one capture.
#[derive(Debug, Clone, PartialEq)]
pub struct CapturedAudio {
    /// Interleaved `f32` samples.
    pub samples: Vec<f32>,
    /// Device sample rate in Hz.
    pub sample_rate: u32,
    /// Interleaved channel count.
    pub channels: u16,
}

impl CapturedAudio {
    /// Number of frames (samples per channel).
    pub fn frames(&self) -> usize {
        if self.channels == 0 {
            return 0;
        }
        self.samples.len() / usize::from(self.channels)
    }

    /// Length in whole milliseconds.
    pub fn duration_millis(&self) -> u64 {
        if self.sample_rate == 0 {
            return 0;
        }
        self.frames() as u64 * 1000 / u64::from(self.sample_rate)
    }
}

/// Sample cap for a stream with the given layout.
pub(crate) fn max_samples(sample_rate: u32, channels: u16) -> usize {
    MAX_CAPTURE_SECONDS * sample_rate as usize * usize::from(channels)
}

/// Append `data` to `buf` without growing past `cap`.
///
/// Returns whether anything had to be dropped.
pub(crate) fn append_capped(buf: &mut Vec<f32>, data: &[f32], cap: usize) -> bool {
    let room = cap.saturating_sub(buf.len());
    let take = room.min(data.len());
    buf.extend_from_slice(&data[..take]);
    take < data.len()
}

/// Microphone capture on a single cpal input device.
pub struct AudioCapturer {
    device: Device,
    config: StreamConfig,
    stream: Option<Stream>,
    samples: Arc<Mutex<Vec<f32>>>,
    /// Signals the audio callback to stop writing. Set to `true` before
    /// dropping the stream so no in-flight callback writes after `stop()`
    /// takes the buffer.
    shutdown: Arc<AtomicBool>,
}

impl AudioCapturer {
    /// Open the input device named `device_name`, or the default input
    /// device when `None`.
    ///
    /// # Errors
    ///
    /// Returns error if no matching device exists or its config is
    /// unavailable.
    #[track_caller]
    #[instrument]
    pub fn new(device_name: Option<&str>) -> CoreResult<Self> {
        let host = cpal::default_host();

        let device = match device_name {
            Some(name) => Self::find_input_device(&host, name)?,
            None => host.default_input_device(),
        }
        .ok_or(CoreError::NoMicrophoneFound {
            location: ErrorLocation::from(Location::caller()),
        })?;

        let config = device
            .default_input_config()
            .map_err(|e| CoreError::DeviceError {
                reason: format!("Failed to get config: {}", e),
                location: ErrorLocation::from(Location::caller()),
            })?;

        info!(
            device_id = ?device.id(),
            sample_rate = config.sample_rate(),
            channels = config.channels(),
            "AudioCapturer initialized"
        );

        Ok(Self {
            device,
            config: config.into(),
            stream: None,
            samples: Arc::new(Mutex::new(Vec::new())),
            shutdown: Arc::new(AtomicBool::new(false)),
        })
    }

    #[track_caller]
    #[allow(deprecated)]
    fn find_input_device(host: &cpal::Host, name: &str) -> CoreResult<Option<Device>> {
        let mut devices = host.input_devices().map_err(|e| CoreError::DeviceError {
            reason: format!("Failed to enumerate input devices: {}", e),
            location: ErrorLocation::from(Location::caller()),
        })?;

        Ok(devices.find(|d| d.name().map(|n| n == name).unwrap_or(false)))
    }

    /// Start filling the sample buffer.
    ///
    /// # Errors
    ///
    /// Returns error if the input stream cannot be built or started.
    #[track_caller]
    #[instrument(skip(self))]
    pub fn start(&mut self) -> CoreResult<()> {
        let samples = Arc::clone(&self.samples);
        let shutdown = Arc::clone(&self.shutdown);
        let cap = max_samples(self.config.sample_rate, self.config.channels);

        self.shutdown.store(false, Ordering::Release);

        samples
            .lock()
            .map_err(|e| CoreError::DeviceError {
                reason: format!("Failed to lock samples: {}", e),
                location: ErrorLocation::from(Location::caller()),
            })?
            .clear();

        let mut overflow_reported = false;

        let stream = self
            .device
            .build_input_stream(
                &self.config,
                move |data: &[f32], _: &cpal::InputCallbackInfo| {
                    if shutdown.load(Ordering::Acquire) {
                        return;
                    }
                    // A poisoned mutex still holds valid samples.
                    let mut buf = samples.lock().unwrap_or_else(|e| {
                        error!("Sample buffer lock poisoned, recovering: {}", e);
                        e.into_inner()
                    });
                    if append_capped(&mut buf, data, cap) && !overflow_reported {
                        overflow_reported = true;
                        warn!(max_seconds = MAX_CAPTURE_SECONDS, "Capture limit reached");
                    }
                },
                |err| {
                    error!("Audio stream error: {}", err);
                },
                None,
            )
            .map_err(|e| CoreError::DeviceError {
                reason: format!("Failed to build stream: {}", e),
                location: ErrorLocation::from(Location::caller()),
            })?;

        stream.play().map_err(|e| CoreError::DeviceError {
            reason: format!("Failed to start stream: {}", e),
            location: ErrorLocation::from(Location::caller()),
        })?;

        self.stream = Some(stream);
        info!("Audio capture started");

        Ok(())
    }

    /// Stop the stream and take everything captured.
    ///
    /// # Errors
    ///
    /// Returns error if the sample buffer cannot be locked.
    #[track_caller]
    #[instrument(skip(self))]
    pub fn stop(&mut self) -> CoreResult<CapturedAudio> {
        self.shutdown.store(true, Ordering::Release);

        if let Some(stream) = self.stream.take() {
            drop(stream);
            // Lets a callback that raced the flag finish before we drain.
            std::thread::sleep(std::time::Duration::from_millis(5));
            info!("Audio capture stopped");
        }

        let samples = std::mem::take(
            &mut *self
                .samples
                .lock()
                .map_err(|e| CoreError::DeviceError {
                    reason: format!("Failed to lock samples: {}", e),
                    location: ErrorLocation::from(Location::caller()),
                })?,
        );

        debug!(sample_count = samples.len(), "Captured audio samples");

        Ok(CapturedAudio {
            samples,
            sample_rate: self.config.sample_rate,
            channels: self.config.channels,
        })
    }
}
