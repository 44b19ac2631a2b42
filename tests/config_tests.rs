//! Integration tests for the configuration system.

use htmlquill::config::Config;

#[test]
fn defaults_are_sensible() {
    let config = Config::default();
    assert_eq!(config.theme, "default-dark");
    assert!(config.show_toolbar);
    assert!(config.enable_mouse);
    assert!(!config.create_backup);
}

#[test]
fn full_toml_round_trip() {
    let config = Config {
        theme: "nord".to_string(),
        show_toolbar: false,
        enable_mouse: false,
        create_backup: true,
    };

    let toml_string = toml::to_string_pretty(&config).unwrap();
    let parsed: Config = toml::from_str(&toml_string).unwrap();

    assert_eq!(parsed.theme, "nord");
    assert!(!parsed.show_toolbar);
    assert!(!parsed.enable_mouse);
    assert!(parsed.create_backup);
}

#[test]
fn missing_fields_take_defaults() {
    let parsed: Config = toml::from_str("theme = \"gruvbox-dark\"").unwrap();
    assert_eq!(parsed.theme, "gruvbox-dark");
    assert!(parsed.show_toolbar);
    assert!(parsed.enable_mouse);
    assert!(!parsed.create_backup);
}

#[test]
fn empty_toml_is_all_defaults() {
    let parsed: Config = toml::from_str("").unwrap();
    assert_eq!(parsed.theme, Config::default().theme);
}

#[test]
fn unknown_theme_name_survives_config() {
    // The config layer does not validate theme names; resolution happens
    // at startup with a fallback
    let parsed: Config = toml::from_str("theme = \"no-such-theme\"").unwrap();
    assert_eq!(parsed.theme, "no-such-theme");
    assert!(htmlquill::theme::get_builtin_theme(&parsed.theme).is_none());
}

#[test]
fn config_path_lives_under_home() {
    if let Some(path) = Config::config_path() {
        let path_str = path.to_string_lossy();
        assert!(path_str.ends_with(".config/htmlquill/config.toml"));
    }
}
