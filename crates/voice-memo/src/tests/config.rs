use crate::config::Config;

use std::path::Path;

/// WHAT: Defaults are rooted in the data dir and export to downloads
/// WHY: Recordings stay in app storage while exports land where users look
#[test]
fn given_data_and_download_dirs_when_building_defaults_then_paths_derived() {
    // Given/When: Defaults with a download dir
    let config = Config::with_dirs(Path::new("/data"), Some(Path::new("/home/u/Downloads")));

    // Then: Recordings under data, exports in downloads, switches on
    assert_eq!(config.storage.recordings_dir, Path::new("/data/recordings"));
    assert_eq!(config.storage.export_dir, Path::new("/home/u/Downloads"));
    assert!(config.storage.reveal_after_export);
    assert!(config.audio.allow_microphone);
    assert!(config.audio.selected_device.is_none());
    assert!(config.behavior.report_capture_failures);
    assert!(config.controller_options().report_capture_failures);
}

/// WHAT: Without a download dir exports go under the data dir
/// WHY: Headless systems have no user download folder
#[test]
fn given_no_download_dir_when_building_defaults_then_exports_under_data() {
    let config = Config::with_dirs(Path::new("/data"), None);

    assert_eq!(config.storage.export_dir, Path::new("/data/exports"));
}

/// WHAT: Saved config loads back with the same values
/// WHY: Atomic save must produce a parseable file and leave no temp file
#[test]
#[allow(clippy::unwrap_used)]
fn given_saved_config_when_loading_then_values_preserved() {
    // Given: A modified config saved to a temp dir
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    let mut config = Config::with_dirs(dir.path(), None);
    config.audio.selected_device = Some("USB Mic".to_string());
    config.behavior.report_capture_failures = false;

    // When: Saving and loading
    config.save_to(&path).unwrap();
    let loaded = Config::load_from(&path).unwrap();

    // Then: Values survive and the temp file is gone
    assert_eq!(loaded.audio.selected_device.as_deref(), Some("USB Mic"));
    assert!(!loaded.behavior.report_capture_failures);
    assert_eq!(loaded.storage.recordings_dir, config.storage.recordings_dir);
    assert!(!path.with_extension("toml.tmp").exists());
}

/// WHAT: Omitted optional keys take their defaults
/// WHY: Hand-edited configs only need the storage paths
#[test]
#[allow(clippy::unwrap_used)]
fn given_minimal_toml_when_loading_then_defaults_filled() {
    // Given: A config with only required keys
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(
        &path,
        "[audio]\n\n[behavior]\n\n[storage]\nrecordings_dir = \"/r\"\nexport_dir = \"/e\"\n",
    )
    .unwrap();

    // When: Loading
    let config = Config::load_from(&path).unwrap();

    // Then: Defaults applied
    assert!(config.audio.allow_microphone);
    assert!(config.behavior.report_capture_failures);
    assert!(config.storage.reveal_after_export);
    assert_eq!(config.storage.recordings_dir, Path::new("/r"));
}

/// WHAT: Malformed TOML is a config error
/// WHY: Startup must report a broken config instead of panicking
#[test]
#[allow(clippy::unwrap_used)]
fn given_invalid_toml_when_loading_then_config_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "not = [valid").unwrap();

    let result = Config::load_from(&path);

    assert!(matches!(result, Err(crate::AppError::ConfigError { .. })));
}

/// WHAT: Storage directories are created on demand
/// WHY: The recorder writes into recordings_dir on the first stop
#[test]
#[allow(clippy::unwrap_used)]
fn given_missing_dirs_when_ensuring_then_created() {
    let dir = tempfile::tempdir().unwrap();
    let config = Config::with_dirs(dir.path(), None);

    config.ensure_directories().unwrap();

    assert!(config.storage.recordings_dir.is_dir());
    assert!(config.storage.export_dir.is_dir());
}
