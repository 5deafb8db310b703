use std::{fs, time::Duration};

use once_cell::sync::Lazy;
use tempfile::tempdir;
use vagdevi_config::{
    ConfigLoadError, ConfigLoader, EnvConfig,
    constants::{DEFAULT_RELAY_URL, MANAGED_KEYS},
};

static ENV_LOCK: Lazy<tokio::sync::Mutex<()>> =
    Lazy::new(|| tokio::sync::Mutex::new(()));

fn clear_managed_keys() {
    for key in MANAGED_KEYS {
        unsafe { std::env::remove_var(key) };
    }
}

const FULL_FILE: &str = r#"
[mail_relay]
service_id = "service_file"
template_id = "template_file"
public_key = "key_file"

[carousel]
visibility_radius = 1
swipe_threshold = 60.0

[contact]
reset_delay_secs = 3
"#;

#[test]
fn defaults_without_any_source() {
    let load = ConfigLoader::new()
        .with_env(EnvConfig::default())
        .without_default_locations()
        .load()
        .expect("defaults load");

    assert!(load.config.mail_relay.is_none());
    assert_eq!(load.config.carousel.visibility_radius, 2);
    assert_eq!(load.config.carousel.swipe_threshold, 100.0);
    assert_eq!(load.config.contact.reset_delay, Duration::from_secs(6));
    assert!(load.warnings.mentions("Mail relay not configured"));
}

#[test]
fn file_values_apply_when_env_is_silent() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("vagdevi.toml");
    fs::write(&path, FULL_FILE).expect("write config");

    let load = ConfigLoader::new()
        .with_config_path(&path)
        .with_env(EnvConfig::default())
        .load()
        .expect("file load");

    let relay = load.config.mail_relay.expect("relay configured");
    assert_eq!(relay.credentials.service_id, "service_file");
    assert_eq!(relay.api_url.as_str(), DEFAULT_RELAY_URL);
    assert_eq!(load.config.carousel.visibility_radius, 1);
    assert_eq!(load.config.carousel.swipe_threshold, 60.0);
    assert_eq!(load.config.contact.reset_delay, Duration::from_secs(3));
    assert_eq!(load.config.metadata.config_path.as_deref(), Some(path.as_path()));
    assert!(load.warnings.is_empty());
}

#[test]
fn env_overrides_file() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("vagdevi.toml");
    fs::write(&path, FULL_FILE).expect("write config");

    let env = EnvConfig::from_pairs([
        ("EMAILJS_SERVICE_ID", "service_env"),
        ("VAGDEVI_SWIPE_THRESHOLD", "140"),
        ("VAGDEVI_CONTACT_RESET_SECS", "10"),
    ]);

    let load = ConfigLoader::new()
        .with_config_path(&path)
        .with_env(env)
        .load()
        .expect("merged load");

    let relay = load.config.mail_relay.expect("relay configured");
    assert_eq!(relay.credentials.service_id, "service_env");
    assert_eq!(relay.credentials.template_id, "template_file");
    assert_eq!(load.config.carousel.swipe_threshold, 140.0);
    assert_eq!(load.config.carousel.visibility_radius, 1);
    assert_eq!(load.config.contact.reset_delay, Duration::from_secs(10));
}

#[test]
fn partial_relay_yields_warning_and_no_credentials() {
    let env = EnvConfig::from_pairs([
        ("EMAILJS_SERVICE_ID", "service_env"),
        ("EMAILJS_PUBLIC_KEY", "key_env"),
    ]);

    let load = ConfigLoader::new()
        .with_env(env)
        .without_default_locations()
        .load()
        .expect("partial load");

    assert!(load.config.relay_credentials().is_none());
    assert!(load.warnings.mentions("partially configured"));
    assert!(load.warnings.mentions("EMAILJS_TEMPLATE_ID"));
    assert!(!load.warnings.mentions("EMAILJS_SERVICE_ID"));
}

#[test]
fn oversized_radius_is_clamped_with_warning() {
    let env = EnvConfig::from_pairs([("VAGDEVI_CAROUSEL_RADIUS", "5")]);
    let load = ConfigLoader::new()
        .with_env(env)
        .without_default_locations()
        .load()
        .expect("clamped load");

    assert_eq!(load.config.carousel.visibility_radius, 2);
    assert!(load.warnings.mentions("clamped"));
}

#[test]
fn invalid_toml_is_a_parse_error() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("vagdevi.toml");
    fs::write(&path, "[carousel\nvisibility_radius = ").expect("write config");

    let err = ConfigLoader::new()
        .with_config_path(&path)
        .with_env(EnvConfig::default())
        .load()
        .unwrap_err();
    assert!(matches!(err, ConfigLoadError::Parse { .. }), "{err:?}");
}

#[test]
fn explicit_missing_file_is_an_error() {
    let dir = tempdir().expect("tempdir");
    let err = ConfigLoader::new()
        .with_config_path(dir.path().join("absent.toml"))
        .with_env(EnvConfig::default())
        .load()
        .unwrap_err();
    assert!(matches!(err, ConfigLoadError::MissingConfig { .. }));
}

#[test]
fn numeric_and_range_errors_are_typed() {
    let bad_number = ConfigLoader::new()
        .with_env(EnvConfig::from_pairs([("VAGDEVI_CONTACT_RESET_SECS", "soon")]))
        .without_default_locations()
        .load()
        .unwrap_err();
    assert!(matches!(
        bad_number,
        ConfigLoadError::InvalidNumber { key: "VAGDEVI_CONTACT_RESET_SECS", .. }
    ));

    let zero_threshold = ConfigLoader::new()
        .with_env(EnvConfig::from_pairs([("VAGDEVI_SWIPE_THRESHOLD", "0")]))
        .without_default_locations()
        .load()
        .unwrap_err();
    assert!(matches!(
        zero_threshold,
        ConfigLoadError::NonPositiveSwipeThreshold { .. }
    ));

    let bad_url = ConfigLoader::new()
        .with_env(EnvConfig::from_pairs([("EMAILJS_API_URL", "not a url")]))
        .without_default_locations()
        .load()
        .unwrap_err();
    assert!(matches!(bad_url, ConfigLoadError::InvalidRelayUrl { .. }));

    let ftp_url = ConfigLoader::new()
        .with_env(EnvConfig::from_pairs([("EMAILJS_API_URL", "ftp://relay.example/send")]))
        .without_default_locations()
        .load()
        .unwrap_err();
    assert!(matches!(ftp_url, ConfigLoadError::UnsupportedRelayScheme { .. }));
}

#[tokio::test]
async fn env_file_populates_process_environment() {
    let _guard = ENV_LOCK.lock().await;
    clear_managed_keys();

    let dir = tempdir().expect("tempdir");
    let env_path = dir.path().join(".env");
    fs::write(
        &env_path,
        "EMAILJS_SERVICE_ID=service_dotenv\nEMAILJS_TEMPLATE_ID=template_dotenv\nEMAILJS_PUBLIC_KEY=key_dotenv\n",
    )
    .expect("write env file");

    let load = ConfigLoader::new()
        .with_env_file(&env_path)
        .without_default_locations()
        .load()
        .expect("env file load");

    clear_managed_keys();

    assert!(load.config.metadata.env_file_loaded);
    let credentials = load.config.relay_credentials().expect("relay configured");
    assert_eq!(credentials.service_id, "service_dotenv");
    assert_eq!(credentials.public_key, "key_dotenv");
}

#[tokio::test]
async fn process_environment_wins_over_env_file() {
    let _guard = ENV_LOCK.lock().await;
    clear_managed_keys();
    unsafe { std::env::set_var("VAGDEVI_CAROUSEL_RADIUS", "0") };

    let dir = tempdir().expect("tempdir");
    let env_path = dir.path().join(".env");
    fs::write(&env_path, "VAGDEVI_CAROUSEL_RADIUS=1\n").expect("write env file");

    let load = ConfigLoader::new()
        .with_env_file(&env_path)
        .without_default_locations()
        .load()
        .expect("env load");

    clear_managed_keys();

    assert_eq!(load.config.carousel.visibility_radius, 0);
}

#[tokio::test]
async fn missing_env_file_is_not_an_error() {
    let _guard = ENV_LOCK.lock().await;
    clear_managed_keys();

    let dir = tempdir().expect("tempdir");
    let load = ConfigLoader::new()
        .with_env_file(dir.path().join("nope.env"))
        .without_default_locations()
        .load()
        .expect("load without env file");

    assert!(!load.config.metadata.env_file_loaded);
}
