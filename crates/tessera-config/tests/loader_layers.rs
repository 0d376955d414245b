//! File and environment layering.

use std::io::Write;

use tessera_config::{ConfigError, ConfigLoader, LogFormat};
use tessera_core::ReportStyle;
use tessera_parse::Language;

fn write_temp(suffix: &str, content: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::Builder::new().suffix(suffix).tempfile().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file
}

#[test]
fn loads_toml_file() {
    let file = write_temp(
        ".toml",
        r#"
            [parsing]
            list_delimiter = "|"
            default_language = "FR_FR"

            [logging]
            level = "warn"
            format = "pretty"
        "#,
    );

    let config = ConfigLoader::new().with_file(file.path()).unwrap().load().unwrap();

    assert_eq!(config.parsing.list_delimiter, '|');
    assert_eq!(config.parsing.default_language, Language::FrFr);
    assert_eq!(config.logging.level, "warn");
    assert_eq!(config.logging.format, LogFormat::Pretty);
}

#[test]
fn loads_json_file() {
    let file = write_temp(".json", r#"{"reporting": {"style": "minimal", "include_causes": false}}"#);

    let config = ConfigLoader::new().with_optional_file(file.path()).unwrap().load().unwrap();

    assert_eq!(config.reporting.style, ReportStyle::Minimal);
    assert!(!config.reporting.include_causes);
}

#[test]
fn rejects_unknown_extension() {
    let file = write_temp(".yaml", "parsing: {}");
    let result = ConfigLoader::new().with_file(file.path());

    assert!(matches!(result, Err(ConfigError::ValidationError(_))));
}

#[test]
fn rejects_unknown_fields_in_file() {
    let file = write_temp(".toml", "[logging]\ncolour = true\n");
    let result = ConfigLoader::new().with_file(file.path());

    assert!(matches!(result, Err(ConfigError::TomlError(_))));
}

#[test]
fn environment_overrides_file() {
    let file = write_temp(".toml", "[logging]\nlevel = \"warn\"\n");

    std::env::set_var("TESSERA_LAYER_TEST__LOGGING__LEVEL", "debug");
    std::env::set_var("TESSERA_LAYER_TEST__PARSING__DEFAULT_LANGUAGE", "nl_nl");

    let config = ConfigLoader::new()
        .with_file(file.path())
        .unwrap()
        .with_env_prefix("tessera_layer_test")
        .load()
        .unwrap();

    assert_eq!(config.logging.level, "debug");
    assert_eq!(config.parsing.default_language, Language::NlNl);
}

#[test]
fn invalid_environment_value_fails_load() {
    std::env::set_var("TESSERA_BAD_ENV_TEST__LOGGING__FORMAT", "xml");

    let result = ConfigLoader::new().with_env_prefix("TESSERA_BAD_ENV_TEST").load();

    assert!(matches!(result, Err(ConfigError::EnvParseError { .. })));
}

#[test]
fn unrelated_variables_sharing_the_prefix_are_ignored() {
    std::env::set_var("TESSERA_SHARED_PFX_HOME", "/srv/game");
    std::env::set_var("TESSERA_SHARED_PFX__LOGGING__LEVEL", "debug");

    let config = ConfigLoader::new().with_env_prefix("TESSERA_SHARED_PFX").load().unwrap();

    assert_eq!(config.logging.level, "debug");
}
