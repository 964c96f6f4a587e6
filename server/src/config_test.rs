use super::*;
use std::collections::HashMap;

fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs.iter().map(|(k, v)| ((*k).to_owned(), (*v).to_owned())).collect();
    move |key| map.get(key).cloned()
}

const REQUIRED: &[(&str, &str)] = &[
    ("DATABASE_URL", "postgres://u:p@localhost/db"),
    ("AUTH_URL", "https://project.supabase.co/"),
    ("AUTH_ANON_KEY", "anon"),
];

/// Parse with the required keys present; `extra` entries override them.
fn parse(extra: &[(&str, &str)]) -> Result<AppConfig, ConfigError> {
    let mut pairs: Vec<(&str, &str)> = REQUIRED.to_vec();
    pairs.retain(|(key, _)| !extra.iter().any(|(k, _)| k == key));
    pairs.extend_from_slice(extra);
    AppConfig::from_lookup(lookup(&pairs))
}

// =============================================================================
// parse_bool
// =============================================================================

#[test]
fn parse_bool_variants() {
    for raw in ["1", "true", "YES", " on "] {
        assert_eq!(parse_bool(raw), Some(true), "{raw}");
    }
    for raw in ["0", "false", "No", "OFF"] {
        assert_eq!(parse_bool(raw), Some(false), "{raw}");
    }
    assert_eq!(parse_bool("maybe"), None);
    assert_eq!(parse_bool(""), None);
}

// =============================================================================
// AppConfig
// =============================================================================

#[test]
fn defaults_apply_when_optional_vars_missing() {
    let cfg = parse(&[]).unwrap();
    assert_eq!(cfg.port, DEFAULT_PORT);
    assert_eq!(cfg.site_url, DEFAULT_SITE_URL);
    assert_eq!(cfg.session_cookie, DEFAULT_SESSION_COOKIE);
    assert_eq!(cfg.exchange_rate_url, DEFAULT_EXCHANGE_RATE_URL);
    assert_eq!(cfg.upstream_timeout, Duration::from_secs(DEFAULT_UPSTREAM_TIMEOUT_SECS));
    assert_eq!(cfg.db_max_connections, DEFAULT_DB_MAX_CONNECTIONS);
    assert!(!cfg.cookie_secure);
    assert!(cfg.flags.is_none());
    assert!(cfg.payments.is_none());
}

#[test]
fn auth_url_trailing_slash_trimmed() {
    let cfg = parse(&[]).unwrap();
    assert_eq!(cfg.auth.base_url, "https://project.supabase.co");
    assert_eq!(cfg.auth.login_provider, DEFAULT_LOGIN_PROVIDER);
}

#[test]
fn missing_required_var_is_reported() {
    let err = AppConfig::from_lookup(lookup(&[("AUTH_URL", "x"), ("AUTH_ANON_KEY", "k")])).unwrap_err();
    assert_eq!(err, ConfigError::Missing("DATABASE_URL"));
}

#[test]
fn blank_required_var_counts_as_missing() {
    let err = parse(&[("AUTH_ANON_KEY", "   ")]).unwrap_err();
    assert_eq!(err, ConfigError::Missing("AUTH_ANON_KEY"));
}

#[test]
fn invalid_port_is_rejected() {
    let err = parse(&[("PORT", "eighty")]).unwrap_err();
    assert_eq!(err, ConfigError::Invalid { key: "PORT", value: "eighty".to_owned() });
}

#[test]
fn zero_timeout_is_rejected() {
    assert!(matches!(
        parse(&[("UPSTREAM_TIMEOUT_SECS", "0")]),
        Err(ConfigError::Invalid { key: "UPSTREAM_TIMEOUT_SECS", .. })
    ));
}

#[test]
fn db_max_connections_parsed() {
    assert_eq!(parse(&[("DB_MAX_CONNECTIONS", "12")]).unwrap().db_max_connections, 12);
}

#[test]
fn bad_db_max_connections_is_rejected() {
    let err = parse(&[("DB_MAX_CONNECTIONS", "lots")]).unwrap_err();
    assert_eq!(err, ConfigError::Invalid { key: "DB_MAX_CONNECTIONS", value: "lots".to_owned() });
    assert!(matches!(
        parse(&[("DB_MAX_CONNECTIONS", "0")]),
        Err(ConfigError::Invalid { key: "DB_MAX_CONNECTIONS", .. })
    ));
}

#[test]
fn cookie_secure_inferred_from_https_site() {
    let cfg = parse(&[("SITE_URL", "https://devstudio.example/")]).unwrap();
    assert!(cfg.cookie_secure);
    assert_eq!(cfg.site_url, "https://devstudio.example");
}

#[test]
fn cookie_secure_explicit_override() {
    let cfg = parse(&[("SITE_URL", "https://devstudio.example"), ("COOKIE_SECURE", "false")]).unwrap();
    assert!(!cfg.cookie_secure);
}

#[test]
fn payments_require_both_keys() {
    assert!(parse(&[("PAYMENT_KEY_ID", "rzp_live_x")]).unwrap().payments.is_none());
    let cfg = parse(&[("PAYMENT_KEY_ID", "rzp_live_x"), ("PAYMENT_KEY_SECRET", "s")]).unwrap();
    let payments = cfg.payments.unwrap();
    assert_eq!(payments.key_id, "rzp_live_x");
    assert_eq!(payments.api_url, DEFAULT_PAYMENT_API_URL);
}

#[test]
fn flags_enabled_by_server_key() {
    let cfg = parse(&[("FLAGS_SERVER_KEY", "secret-abc"), ("FLAGS_URL", "https://flags.local/v1/")]).unwrap();
    let flags = cfg.flags.unwrap();
    assert_eq!(flags.base_url, "https://flags.local/v1");
    assert_eq!(flags.server_key, "secret-abc");
}
