use super::*;

#[test]
fn with_echo_copies_config_fields() {
    let config = ServerConfig { bot_name: "helper".into(), static_dir: PathBuf::from("/srv/www"), ..ServerConfig::default() };
    let state = AppState::with_echo(&config);
    assert_eq!(&*state.bot_name, "helper");
    assert_eq!(state.static_dir, PathBuf::from("/srv/www"));
    assert_eq!(state.responder.reply("hi"), "You said: hi");
}

#[test]
fn test_app_state_uses_default_bot_name() {
    let state = test_helpers::test_app_state();
    assert_eq!(&*state.bot_name, "bot");
}
