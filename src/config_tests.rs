//! Unit tests for configuration structures and parsing.

#[cfg(test)]
mod config_tests {
    use crate::config::*;
    use crate::error::PriceError;
    use crate::exchange::types::Exchange;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();

        assert_eq!(config.request_timeout_secs, 10);
        assert!(config.refresh_on_start);
        assert_eq!(config.binance.base_url, "https://api.binance.com");
        assert_eq!(config.bitget.base_url, "https://api.bitget.com");
        assert_eq!(config.okx.base_url, "https://www.okx.com");
    }

    #[test]
    fn test_full_config_deserialize() {
        let yaml = r#"
request_timeout_secs: 3
refresh_on_start: false
binance:
  base_url: "https://api1.binance.com"
bitget:
  base_url: "http://localhost:9001"
okx:
  base_url: "https://aws.okx.com"
"#;
        let config = AppConfig::from_yaml(yaml).unwrap();

        assert_eq!(config.request_timeout_secs, 3);
        assert!(!config.refresh_on_start);
        assert_eq!(config.endpoint(Exchange::Binance).base_url, "https://api1.binance.com");
        assert_eq!(config.endpoint(Exchange::Bitget).base_url, "http://localhost:9001");
        assert_eq!(config.endpoint(Exchange::Okx).base_url, "https://aws.okx.com");
        assert_eq!(config.request_timeout().as_secs(), 3);
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        // Missing fields should use defaults
        let yaml = r#"
okx:
  base_url: "https://my.okx.com"
"#;
        let config = AppConfig::from_yaml(yaml).unwrap();

        assert_eq!(config.request_timeout_secs, 10);
        assert!(config.refresh_on_start);
        assert_eq!(config.binance.base_url, "https://api.binance.com");
        assert_eq!(config.okx.base_url, "https://my.okx.com");
    }

    #[test]
    fn test_empty_config_is_default() {
        assert_eq!(AppConfig::from_yaml("").unwrap(), AppConfig::default());
        assert_eq!(AppConfig::from_yaml("\u{feff}").unwrap(), AppConfig::default());
    }

    #[test]
    fn test_zero_timeout_rejected() {
        let err = AppConfig::from_yaml("request_timeout_secs: 0").unwrap_err();
        assert!(matches!(err, PriceError::Config(_)));
    }

    #[test]
    fn test_invalid_base_url_rejected() {
        let yaml = r#"
bitget:
  base_url: "not a url"
"#;
        let err = AppConfig::from_yaml(yaml).unwrap_err();
        assert!(matches!(err, PriceError::Config(ref msg) if msg.contains("Bitget")));
    }

    #[test]
    fn test_malformed_yaml_is_config_error() {
        let err = AppConfig::from_yaml("request_timeout_secs: [").unwrap_err();
        assert!(matches!(err, PriceError::Config(_)));
    }

    #[test]
    fn test_load_from_missing_file() {
        let err = AppConfig::load_from(std::path::Path::new("/nonexistent/spotquote.yaml")).unwrap_err();
        assert!(err.to_string().contains("Failed to read"));
    }

    #[test]
    fn test_explicit_missing_path_is_error() {
        let err = AppConfig::load_path(Some("/nonexistent/spotquote.yaml")).unwrap_err();
        assert!(matches!(err, PriceError::Config(ref msg) if msg.contains(CONFIG_PATH_ENV)));
    }

    #[test]
    fn test_explicit_path_is_loaded() {
        let path = std::env::temp_dir().join(format!("spotquote-config-{}.yaml", std::process::id()));
        std::fs::write(&path, "request_timeout_secs: 3\nrefresh_on_start: false\n").unwrap();

        let config = AppConfig::load_path(path.to_str()).unwrap();
        std::fs::remove_file(&path).unwrap();

        assert_eq!(config.request_timeout_secs, 3);
        assert!(!config.refresh_on_start);
    }
}
