use stitchkit_formats::ExportFormat;
use stitchkit_settings::{Config, SettingsManager};
use tempfile::tempdir;

fn customized() -> Config {
    let mut config = Config::default();
    config.machine.max_x = 200.0;
    config.machine.bounds_checking = false;
    config.optimizer.enabled = true;
    config.optimizer.pull_compensation = 0.05;
    config.export.design_name = "rose".to_string();
    config.export.default_format = ExportFormat::Gcode;
    config
}

#[test]
fn test_toml_save_and_load() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("config.toml");

    let config = customized();
    config.save_to_file(&path).unwrap();
    let text = std::fs::read_to_string(&path).unwrap();
    assert!(text.contains("[machine]"));
    assert!(text.contains("default_format = \"gcode\""));

    assert_eq!(Config::load_from_file(&path).unwrap(), config);
}

#[test]
fn test_json_save_and_load() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("config.json");

    let config = customized();
    config.save_to_file(&path).unwrap();
    assert_eq!(Config::load_from_file(&path).unwrap(), config);
}

#[test]
fn test_unknown_extension_rejected() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("config.yaml");

    assert!(Config::default().save_to_file(&path).is_err());
    std::fs::write(&path, "machine: {}").unwrap();
    assert!(Config::load_from_file(&path).is_err());
}

#[test]
fn test_invalid_values_rejected_on_load() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "[export]\nchunk_size = 0\n").unwrap();

    let err = Config::load_from_file(&path).unwrap_err();
    assert!(err.to_string().contains("Chunk size"));
}

#[test]
fn test_invalid_config_not_saved() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("config.toml");
    let mut config = Config::default();
    config.machine.max_y = -1.0;

    assert!(config.save_to_file(&path).is_err());
    assert!(!path.exists());
}

#[test]
fn test_load_or_default_missing_file() {
    let dir = tempdir().unwrap();
    let config = SettingsManager::load_or_default(&dir.path().join("absent.toml")).unwrap();
    assert_eq!(config, Config::default());
}

#[test]
fn test_explicit_missing_file_is_error() {
    let dir = tempdir().unwrap();
    let missing = dir.path().join("absent.toml");
    assert!(SettingsManager::load(Some(&missing)).is_err());
}
