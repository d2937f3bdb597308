use super::*;

#[test]
fn from_values_defaults_when_unset() {
    let cfg = ClientConfig::from_values(None, None).unwrap();
    assert_eq!(cfg, ClientConfig::default());
    assert_eq!(cfg.api_base_url, DEFAULT_API_BASE_URL);
    assert_eq!(cfg.modal_close_delay_ms, 3000);
}

#[test]
fn from_values_trims_trailing_slashes() {
    let cfg = ClientConfig::from_values(Some(" https://sniugb.test/api/v1// "), None).unwrap();
    assert_eq!(cfg.api_base_url, "https://sniugb.test/api/v1");
}

#[test]
fn from_values_rejects_blank_base_url() {
    assert_eq!(
        ClientConfig::from_values(Some(" / "), None),
        Err(ConfigError::Empty { var: "SNIUGB_API_BASE_URL" })
    );
}

#[test]
fn from_values_parses_delay() {
    let cfg = ClientConfig::from_values(None, Some("1500")).unwrap();
    assert_eq!(cfg.modal_close_delay_ms, 1500);
}

#[test]
fn from_values_rejects_non_numeric_delay() {
    let err = ClientConfig::from_values(None, Some("soon")).unwrap_err();
    assert_eq!(
        err,
        ConfigError::InvalidNumber { var: "SNIUGB_RESET_CLOSE_DELAY_MS", value: "soon".to_owned() }
    );
    assert_eq!(err.to_string(), "SNIUGB_RESET_CLOSE_DELAY_MS is not a valid number: soon");
}

#[test]
fn endpoint_joins_path() {
    let cfg = ClientConfig::from_values(Some("http://h/api"), None).unwrap();
    assert_eq!(cfg.endpoint("/auth/login"), "http://h/api/auth/login");
}
