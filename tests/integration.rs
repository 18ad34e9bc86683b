// SPDX-License-Identifier: MPL-2.0
use storefront::config::{self, Config, NavigationConfig};
use storefront::i18n::fluent::I18n;
use storefront::navigation::{Screen, ALL_SCREENS};
use storefront::ui::theming::ThemeMode;
use tempfile::tempdir;

#[test]
fn language_change_via_config() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let path = dir.path().join("settings.toml");

    let mut settings = Config::default();
    settings.general.language = Some("en-US".to_string());
    config::save_to_path(&settings, &path).expect("Failed to write initial config");

    let loaded = config::load_from_path(&path).expect("Failed to load initial config");
    let i18n = I18n::new(None, &loaded);
    assert_eq!(i18n.current_locale().to_string(), "en-US");
    assert_eq!(i18n.label(Screen::Browse), "Browse");

    settings.general.language = Some("fr".to_string());
    config::save_to_path(&settings, &path).expect("Failed to write updated config");

    let loaded = config::load_from_path(&path).expect("Failed to load updated config");
    let i18n = I18n::new(None, &loaded);
    assert_eq!(i18n.current_locale().to_string(), "fr");
    assert_eq!(i18n.label(Screen::Browse), "Parcourir");
}

#[test]
fn cli_language_beats_config_language() {
    let mut settings = Config::default();
    settings.general.language = Some("fr".to_string());
    let i18n = I18n::new(Some("en-US".to_string()), &settings);
    assert_eq!(i18n.current_locale().to_string(), "en-US");
}

#[test]
fn every_screen_label_is_translated() {
    for locale in ["en-US", "fr"] {
        let i18n = I18n::new(Some(locale.to_string()), &Config::default());
        for screen in ALL_SCREENS {
            let label = i18n.label(screen);
            assert!(!label.starts_with("MISSING"), "{locale}: {screen}");
        }
    }
}

#[test]
fn navigation_section_round_trips() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let settings = Config {
        navigation: NavigationConfig {
            animations_enabled: Some(false),
            transition_duration_ms: Some(450),
        },
        ..Config::default()
    };
    config::save_to_path(&settings, &dir.path().join("settings.toml"))
        .expect("Failed to save config");

    let (loaded, warning) = config::load_with_override(Some(dir.path().to_path_buf()));
    assert!(warning.is_none());
    assert!(!loaded.navigation.animations_enabled());
    assert_eq!(loaded.navigation.transition_duration().as_millis(), 450);
    assert_eq!(loaded.general.theme_mode, ThemeMode::System);
}

#[test]
fn hand_written_settings_file_is_understood() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let path = dir.path().join("settings.toml");
    std::fs::write(
        &path,
        "[general]\ntheme_mode = \"dark\"\n\n[navigation]\ntransition_duration_ms = 9000\n",
    )
    .expect("Failed to write settings");

    let loaded = config::load_from_path(&path).expect("Failed to parse settings");
    assert_eq!(loaded.general.theme_mode, ThemeMode::Dark);
    assert!(loaded.navigation.animations_enabled());
    assert_eq!(loaded.navigation.transition_duration().as_millis(), 2_000);
}
