use crate::config::{Config, Mode};
use std::str::FromStr;

#[test]
fn mode_parses_case_insensitively() {
    assert!(matches!(Mode::from_str("mock"), Ok(Mode::Mock)));
    assert!(matches!(Mode::from_str("MOCK"), Ok(Mode::Mock)));
    assert!(Mode::from_str("live").is_err());
}

#[test]
fn default_config_points_at_public_api() {
    let config = Config::default();
    assert_eq!(config.auth_base_url, "https://joyboryangi.pythonanywhere.com");
    assert!(config.demo_login);
    assert_eq!(config.default_language, "uz");
    assert_eq!(config.application_expiry_days, 30);
}

#[test]
fn cli_overrides_take_precedence() {
    let config = Config::default().with_overrides(
        Some("http://localhost:8000".to_string()),
        Some("ru".to_string()),
        true,
    );
    assert_eq!(config.auth_base_url, "http://localhost:8000");
    assert_eq!(config.default_language, "ru");
    assert!(!config.demo_login);

    let untouched = Config::default().with_overrides(None, None, false);
    assert_eq!(untouched.default_language, "uz");
    assert!(untouched.demo_login);
}
