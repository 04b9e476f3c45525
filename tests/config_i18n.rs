// SPDX-License-Identifier: MPL-2.0
//! Settings file round-trips and locale resolution.

use campaign_studio::app::config::{self, Config};
use campaign_studio::app::Screen;
use campaign_studio::i18n::fluent::I18n;
use campaign_studio::ui::theming::ThemeMode;
use std::time::Duration;

#[test]
fn settings_round_trip_through_toml() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("settings.toml");

    let mut config = Config::default();
    config.general.language = Some("fr".into());
    config.general.theme_mode = ThemeMode::Dark;
    config.general.start_screen = Some(Screen::Gallery);
    config.server.base_url = Some("http://backend.local:9000".into());
    config.server.timeout_secs = Some(45);
    config.notifications.dismiss_secs = Some(12);
    config.gallery.image_cache_capacity = Some(128);

    config::save_to_path(&config, &path).unwrap();
    let loaded = config::load_from_path(&path).unwrap();

    assert_eq!(loaded, config);
    assert_eq!(loaded.request_timeout(), Some(Duration::from_secs(45)));
    assert_eq!(loaded.notification_dismiss_delay(), Duration::from_secs(12));
    assert_eq!(loaded.image_cache_capacity(), 128);
}

#[test]
fn defaults_match_backend_and_toast_lifetime() {
    let config = Config::default();
    assert_eq!(config.server.base_url.as_deref(), Some(config::DEFAULT_SERVER_URL));
    assert_eq!(config.request_timeout(), None);
    assert_eq!(config.notification_dismiss_delay(), Duration::from_secs(8));
}

#[test]
fn cli_language_overrides_config() {
    let mut config = Config::default();
    config.general.language = Some("fr".into());

    let i18n = I18n::new(Some("en-US".into()), &config);
    assert_eq!(i18n.tr("gallery-fetch-failed"), "Failed to fetch campaign data.");
}

#[test]
fn config_language_is_used_without_cli() {
    let mut config = Config::default();
    config.general.language = Some("fr".into());

    let i18n = I18n::new(None, &config);
    assert_eq!(i18n.current_locale().to_string(), "fr");
}

#[test]
fn every_locale_translates_notification_keys() {
    let keys = [
        "notification-no-products",
        "notification-generation-success",
        "notification-no-images",
        "notification-unknown-error",
        "notification-download-success",
    ];
    for lang in ["en-US", "fr"] {
        let i18n = I18n::new(Some(lang.into()), &Config::default());
        for key in keys {
            assert!(
                !i18n.tr(key).starts_with("MISSING"),
                "{lang} lacks {key}"
            );
        }
    }
}
