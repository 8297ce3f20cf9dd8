// tests/config_load.rs
use std::env;
use std::fs;

use rfp_gatherer::config::{Config, ENV_CONFIG_PATH};

const RAW: &str = r#"{
    "output_file": "out.json",
    "sources": [
        { "id": "indiana-idoa", "label": "Indiana IDOA", "url": "https://www.in.gov/idoa/" }
    ]
}"#;

#[test]
fn from_path_reads_json() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.json");
    fs::write(&path, RAW).unwrap();

    let cfg = Config::from_path(&path).unwrap();
    assert_eq!(cfg.output_file, "out.json");
    assert_eq!(cfg.sources[0].label, "Indiana IDOA");
}

#[test]
fn missing_file_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nope.json");
    assert!(Config::from_path(&path).is_err());
}

#[serial_test::serial]
#[test]
fn env_var_overrides_default_path() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("elsewhere.json");
    fs::write(&path, RAW).unwrap();

    env::set_var(ENV_CONFIG_PATH, path.display().to_string());
    let cfg = Config::load_default().unwrap();
    env::remove_var(ENV_CONFIG_PATH);

    assert_eq!(cfg.sources.len(), 1);
    assert_eq!(cfg.sources[0].id, "indiana-idoa");
}
