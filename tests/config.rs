use iron_capital_web::config::{ANON_KEY_VAR, AppConfig, BACKEND_URL_VAR};
use iron_capital_web::domain::errors::ConfigurationError;
use iron_capital_web::domain::logging::LogLevel;

#[test]
fn missing_backend_settings_name_both_variables() {
    for (url, key) in [(None, Some("anon")), (Some("https://x.example.co"), None), (Some("  "), Some("anon"))] {
        let err = AppConfig::from_values(url, key, None).unwrap_err();
        let ConfigurationError::MissingConfiguration(message) = err else {
            panic!("expected a missing configuration error");
        };
        assert!(message.contains(BACKEND_URL_VAR));
        assert!(message.contains(ANON_KEY_VAR));
    }
}

#[test]
fn url_is_normalized_and_endpoints_built() {
    let config = AppConfig::from_values(Some("https://abc.example.co/"), Some("anon"), Some("debug")).unwrap();
    assert_eq!(config.backend_url, "https://abc.example.co");
    assert_eq!(config.log_level, LogLevel::Debug);
    assert_eq!(config.auth_url("signup"), "https://abc.example.co/auth/v1/signup");
    assert_eq!(
        config.rest_url("/user_notes?select=*"),
        "https://abc.example.co/rest/v1/user_notes?select=*"
    );
}

#[test]
fn rejects_bad_url_and_level() {
    assert!(matches!(
        AppConfig::from_values(Some("ftp://abc"), Some("anon"), None),
        Err(ConfigurationError::InvalidParameter(_))
    ));
    assert!(matches!(
        AppConfig::from_values(Some("https://abc.example.co"), Some("anon"), Some("loud")),
        Err(ConfigurationError::InvalidParameter(_))
    ));
}

#[test]
fn json_overrides_defaults() {
    let config = AppConfig::from_json(
        r#"{"backendUrl":"http://localhost:54321","anonKey":"k","logLevel":"warn","searchLatencyMs":0,"sessionStorageKey":"test.session"}"#,
    )
    .unwrap();
    assert_eq!(config.log_level, LogLevel::Warn);
    assert_eq!(config.search_latency_ms, 0);
    assert_eq!(config.session_storage_key, "test.session");

    let defaults = AppConfig::from_json(r#"{"backendUrl":"http://localhost:54321","anonKey":"k"}"#).unwrap();
    assert_eq!(defaults.log_level, LogLevel::Info);
    assert_eq!(defaults.search_latency_ms, 500);
    assert_eq!(defaults.with_search_latency_ms(50).search_latency_ms, 50);

    assert!(AppConfig::from_json("not json").is_err());
}
