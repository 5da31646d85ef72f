// SPDX-License-Identifier: MPL-2.0
use iced_folio::config::{self, Config};
use iced_folio::i18n::{Direction, Localizer, DEFAULT_LOCALE};
use iced_folio::ui::theming::ThemeMode;
use tempfile::tempdir;

#[test]
fn language_choice_survives_a_restart() {
    let dir = tempdir().expect("Failed to create temporary directory");

    // First run: the user picks Turkish.
    let mut first_run = Localizer::new(None, Some(dir.path().to_path_buf()));
    assert_eq!(first_run.tr("nav.home"), "Home");
    first_run.switch_locale("tr");
    assert_eq!(first_run.tr("nav.home"), "Ana Sayfa");

    // Second run: no CLI override, the persisted choice wins.
    let second_run = Localizer::new(None, Some(dir.path().to_path_buf()));
    assert_eq!(second_run.active_locale().code, "tr");
    assert_eq!(second_run.tr("nav.home"), "Ana Sayfa");

    dir.close().expect("Failed to close temporary directory");
}

#[test]
fn cli_language_overrides_the_persisted_one() {
    let dir = tempdir().expect("Failed to create temporary directory");

    let mut persisting = Localizer::new(None, Some(dir.path().to_path_buf()));
    persisting.switch_locale("it");

    let overridden = Localizer::new(Some("ar".to_string()), Some(dir.path().to_path_buf()));
    assert_eq!(overridden.active_locale().code, "ar");
    assert_eq!(overridden.attributes().direction, Direction::RightToLeft);
}

#[test]
fn unknown_persisted_language_falls_back_to_the_default() {
    let dir = tempdir().expect("Failed to create temporary directory");
    std::fs::write(dir.path().join("preferred-language"), "tlh").expect("write file");

    let localizer = Localizer::new(None, Some(dir.path().to_path_buf()));
    assert_eq!(localizer.active_locale().code, DEFAULT_LOCALE);
}

#[test]
fn theme_preference_round_trips_through_settings_file() {
    let dir = tempdir().expect("Failed to create temporary directory");

    let config = Config {
        theme_mode: ThemeMode::Dark,
    };
    config::save(&config, Some(dir.path().to_path_buf())).expect("save config");

    let (loaded, warning) = config::load(Some(dir.path().to_path_buf()));
    assert!(warning.is_none());
    assert_eq!(loaded.theme_mode, ThemeMode::Dark);
}

#[test]
fn language_and_theme_files_coexist_in_the_config_directory() {
    let dir = tempdir().expect("Failed to create temporary directory");

    let mut localizer = Localizer::new(None, Some(dir.path().to_path_buf()));
    localizer.switch_locale("it");
    config::save(
        &Config {
            theme_mode: ThemeMode::Light,
        },
        Some(dir.path().to_path_buf()),
    )
    .expect("save config");

    assert!(dir.path().join("preferred-language").exists());
    assert!(dir.path().join("settings.toml").exists());

    // Each file stays independent of the other.
    let reloaded = Localizer::new(None, Some(dir.path().to_path_buf()));
    assert_eq!(reloaded.active_locale().code, "it");
    let (config, _) = config::load(Some(dir.path().to_path_buf()));
    assert_eq!(config.theme_mode, ThemeMode::Light);
}
