//! Configuration loading tests: TOML file, environment overrides,
//! required-field validation.

use rollbar_notify::RollbarConfig;
use serial_test::serial;
use std::io::Write;
use std::path::PathBuf;
use tempfile::NamedTempFile;

/// Runs a test with a temporary config file.
fn with_config_file<F>(toml_content: &str, test_fn: F)
where
    F: FnOnce(PathBuf),
{
    let mut file = NamedTempFile::new().unwrap();
    write!(file, "{}", toml_content).unwrap();
    let path = file.path().to_path_buf();
    test_fn(path);
}

#[test]
#[serial]
fn loads_account_and_project_from_toml() {
    with_config_file(
        r#"
        account = "acme"
        project = "web"
        "#,
        |path| {
            let config = RollbarConfig::load(path.to_str().unwrap()).unwrap();
            assert_eq!(config.account, "acme");
            assert_eq!(config.project, "web");
        },
    );
}

#[test]
#[serial]
fn environment_variables_override_the_file() {
    with_config_file(
        r#"
        account = "acme"
        project = "web"
        "#,
        |path| {
            std::env::set_var("ROLLBAR_PROJECT", "mobile");
            let result = RollbarConfig::load(path.to_str().unwrap());
            std::env::remove_var("ROLLBAR_PROJECT");

            let config = result.unwrap();
            assert_eq!(config.account, "acme");
            assert_eq!(config.project, "mobile");
        },
    );
}

#[test]
#[serial]
fn missing_required_key_is_an_error() {
    with_config_file(
        r#"
        account = "acme"
        "#,
        |path| {
            assert!(RollbarConfig::load(path.to_str().unwrap()).is_err());
        },
    );
}

#[test]
#[serial]
fn empty_identifier_is_rejected() {
    with_config_file(
        r#"
        account = ""
        project = "web"
        "#,
        |path| {
            assert!(RollbarConfig::load(path.to_str().unwrap()).is_err());
        },
    );
}
