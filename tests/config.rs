use std::io::Write;

use riverbed::{load_config_or_default, Config, Error};
use tempfile::NamedTempFile;

fn write_config(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

#[test]
fn loads_full_file() {
    let file = write_config(
        r#"
[logging]
level = "debug"
format = "json"

[builder]
chain_depth_warning = 250
"#,
    );

    let config = Config::from_file(file.path()).unwrap();
    assert_eq!(config.logging.level, "debug");
    assert_eq!(config.logging.format, "json");
    assert_eq!(config.builder.chain_depth_warning, 250);
    assert_eq!(config.builder.fold_settings().chain_depth_warning, 250);
}

#[test]
fn missing_sections_fall_back_to_defaults() {
    let file = write_config("[logging]\nlevel = \"warn\"\n");
    let config = Config::from_file(file.path()).unwrap();
    assert_eq!(config.logging.level, "warn");
    assert_eq!(config.builder, Config::default().builder);
}

#[test]
fn malformed_file_is_a_config_error() {
    let file = write_config("[builder]\nchain_depth_warning = \"deep\"\n");
    let err = Config::from_file(file.path()).unwrap_err();
    assert!(matches!(err, Error::Config(_)));
    assert!(err.is_client_error());
}

#[test]
fn missing_file_is_an_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = Config::from_file(dir.path().join("absent.toml")).unwrap_err();
    assert!(matches!(err, Error::Io(_)));
}

#[test]
fn load_validates_the_file() {
    let file = write_config("[logging]\nlevel = \"chatty\"\n");
    assert!(Config::from_file(file.path()).is_ok());
    assert!(Config::load(Some(file.path())).is_err());
}

#[test]
fn load_or_default_recovers_from_bad_files() {
    let file = write_config("not toml at all [");
    let path = file.path().to_str().unwrap();
    assert_eq!(load_config_or_default(Some(path)), Config::default());
    assert_eq!(load_config_or_default(None), Config::default());
}

#[test]
fn load_or_default_uses_a_good_file() {
    let file = write_config("[builder]\nchain_depth_warning = 3\n");
    let config = load_config_or_default(file.path().to_str());
    assert_eq!(config.builder.chain_depth_warning, 3);
}
