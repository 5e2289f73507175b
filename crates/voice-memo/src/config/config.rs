//! Configuration management for voice-memo.
//!
//! Handles loading and saving TOML configuration files with cross-platform
//! paths and atomic write operations.

use crate::{
    AppError, AppResult,
    config::{AudioConfig, BehaviourConfig, StorageConfig},
};

use std::{
    fs,
    io::Write,
    panic::Location,
    path::{Path, PathBuf},
};

use crate::config::{
    DEFAULT_ALLOW_MICROPHONE, DEFAULT_REPORT_CAPTURE_FAILURES, DEFAULT_REVEAL_AFTER_EXPORT,
};
use directories::{ProjectDirs, UserDirs};
use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};
use voice_memo_core::ControllerOptions;

/// Main configuration struct.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Audio device configuration.
    pub audio: AudioConfig,
    /// Application behavior settings.
    pub behavior: BehaviourConfig,
    /// Recording and export locations.
    pub storage: StorageConfig,
}

impl Config {
    /// Load configuration from disk, creating default if not found.
    #[track_caller]
    #[instrument]
    pub fn load() -> AppResult<Self> {
        let config_path = Self::config_path()?;

        if config_path.exists() {
            Self::load_from(&config_path)
        } else {
            info!("No config found, creating default");
            Self::create_default(&config_path)
        }
    }

    /// Load configuration from an explicit file.
    #[track_caller]
    #[instrument]
    pub fn load_from(config_path: &Path) -> AppResult<Self> {
        let contents = fs::read_to_string(config_path).map_err(|e| AppError::ConfigError {
            reason: format!("Failed to read config: {}", e),
            location: ErrorLocation::from(Location::caller()),
        })?;

        let config: Config = toml::from_str(&contents).map_err(|e| AppError::ConfigError {
            reason: format!("Failed to parse config: {}", e),
            location: ErrorLocation::from(Location::caller()),
        })?;

        info!(config_path = ?config_path, "Configuration loaded");

        Ok(config)
    }

    /// Defaults rooted at `data_dir`. Exports go to `download_dir` when the
    /// platform has one.
    pub fn with_dirs(data_dir: &Path, download_dir: Option<&Path>) -> Self {
        let export_dir = download_dir
            .map(Path::to_path_buf)
            .unwrap_or_else(|| data_dir.join("exports"));

        Config {
            audio: AudioConfig {
                selected_device: None,
                allow_microphone: DEFAULT_ALLOW_MICROPHONE,
            },
            behavior: BehaviourConfig {
                report_capture_failures: DEFAULT_REPORT_CAPTURE_FAILURES,
            },
            storage: StorageConfig {
                recordings_dir: data_dir.join("recordings"),
                export_dir,
                reveal_after_export: DEFAULT_REVEAL_AFTER_EXPORT,
            },
        }
    }

    /// Screen controller switches derived from this config.
    pub fn controller_options(&self) -> ControllerOptions {
        ControllerOptions {
            report_capture_failures: self.behavior.report_capture_failures,
        }
    }

    /// Create the recordings and export directories if missing.
    #[track_caller]
    #[instrument(skip(self))]
    pub fn ensure_directories(&self) -> AppResult<()> {
        for dir in [&self.storage.recordings_dir, &self.storage.export_dir] {
            if !dir.exists() {
                fs::create_dir_all(dir)?;
                debug!(dir = ?dir, "Created directory");
            }
        }
        Ok(())
    }

    /// Save configuration to `config_path` using atomic write pattern.
    ///
    /// Writes to a temporary file first, then renames to prevent corruption
    /// if the process crashes during the write.
    #[track_caller]
    #[instrument(skip(self))]
    pub fn save_to(&self, config_path: &Path) -> AppResult<()> {
        let contents = toml::to_string_pretty(self).map_err(|e| AppError::ConfigError {
            reason: format!("Failed to serialize config: {}", e),
            location: ErrorLocation::from(Location::caller()),
        })?;

        let temp_path = config_path.with_extension("toml.tmp");

        let mut temp_file = fs::File::create(&temp_path).map_err(|e| AppError::ConfigError {
            reason: format!("Failed to create temp config file: {}", e),
            location: ErrorLocation::from(Location::caller()),
        })?;

        temp_file
            .write_all(contents.as_bytes())
            .map_err(|e| AppError::ConfigError {
                reason: format!("Failed to write temp config file: {}", e),
                location: ErrorLocation::from(Location::caller()),
            })?;

        temp_file.sync_all().map_err(|e| AppError::ConfigError {
            reason: format!("Failed to sync temp config file: {}", e),
            location: ErrorLocation::from(Location::caller()),
        })?;

        fs::rename(&temp_path, config_path).map_err(|e| AppError::ConfigError {
            reason: format!("Failed to rename temp config to final: {}", e),
            location: ErrorLocation::from(Location::caller()),
        })?;

        info!(config_path = ?config_path, "Configuration saved (atomic write)");

        Ok(())
    }

    #[track_caller]
    fn project_dirs() -> AppResult<ProjectDirs> {
        ProjectDirs::from("com", "voice-memo", "Voice-Memo").ok_or_else(|| {
            AppError::ConfigError {
                reason: "Failed to get project directories".to_string(),
                location: ErrorLocation::from(Location::caller()),
            }
        })
    }

    #[track_caller]
    fn config_path() -> AppResult<PathBuf> {
        let proj_dirs = Self::project_dirs()?;
        let config_dir = proj_dirs.config_dir();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir)?;
            debug!(config_dir = ?config_dir, "Created config directory");
        }

        Ok(config_dir.join("config.toml"))
    }

    #[track_caller]
    fn create_default(config_path: &Path) -> AppResult<Self> {
        let proj_dirs = Self::project_dirs()?;
        let user_dirs = UserDirs::new();
        let download_dir = user_dirs.as_ref().and_then(UserDirs::download_dir);

        let config = Self::with_dirs(proj_dirs.data_dir(), download_dir);
        config.save_to(config_path)?;

        info!(
            recordings_dir = ?config.storage.recordings_dir,
            export_dir = ?config.storage.export_dir,
            "Default config created"
        );

        Ok(config)
    }
}
