use super::*;

#[test]
fn from_vars_defaults() {
    let cfg = ServerConfig::from_vars(None, None, None).unwrap();
    assert_eq!(cfg, ServerConfig::default());
    assert_eq!(cfg.port, 3000);
    assert_eq!(cfg.static_dir, PathBuf::from("static"));
    assert_eq!(cfg.bot_name, "bot");
}

#[test]
fn from_vars_reads_overrides() {
    let cfg = ServerConfig::from_vars(Some("8080"), Some("/srv/chat"), Some(" helper ")).unwrap();
    assert_eq!(cfg.port, 8080);
    assert_eq!(cfg.static_dir, PathBuf::from("/srv/chat"));
    assert_eq!(cfg.bot_name, "helper");
}

#[test]
fn from_vars_rejects_bad_port() {
    let err = ServerConfig::from_vars(Some("eighty"), None, None).unwrap_err();
    assert!(matches!(err, ConfigError::InvalidPort(ref raw) if raw == "eighty"));
    assert!(ServerConfig::from_vars(Some("70000"), None, None).is_err());
}

#[test]
fn from_vars_rejects_user_or_blank_bot_name() {
    assert!(matches!(ServerConfig::from_vars(None, None, Some("user")), Err(ConfigError::InvalidBotName)));
    assert!(matches!(ServerConfig::from_vars(None, None, Some("   ")), Err(ConfigError::InvalidBotName)));
}
