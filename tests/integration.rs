// SPDX-License-Identifier: MPL-2.0
use iced_gallery::config::{self, Config, SortBy, SortDirection};
use iced_gallery::gallery::scanner::{scan_gallery, ScanOptions};
use iced_gallery::gallery::{prefetch, GalleryNavigator};
use iced_gallery::i18n::fluent::I18n;
use iced_gallery::media::MediaKind;
use std::fs;
use tempfile::tempdir;

#[test]
fn test_language_change_via_config() {
    // Create a temporary directory for the config file
    let dir = tempdir().expect("Failed to create temporary directory");
    let temp_config_file_path = dir.path().join("settings.toml");

    // 1. Initial config: en-US
    let initial_config = Config {
        language: Some("en-US".to_string()),
        ..Config::default()
    };
    config::save_to_path(&initial_config, &temp_config_file_path)
        .expect("Failed to write initial config file");

    let loaded_initial_config = config::load_from_path(&temp_config_file_path)
        .expect("Failed to load initial config from path");
    let i18n_en = I18n::new(None, &loaded_initial_config);
    assert_eq!(i18n_en.current_locale().to_string(), "en-US");

    // 2. Change config to fr
    let french_config = Config {
        language: Some("fr".to_string()),
        ..Config::default()
    };
    config::save_to_path(&french_config, &temp_config_file_path)
        .expect("Failed to write french config file");

    let loaded_french_config = config::load_from_path(&temp_config_file_path)
        .expect("Failed to load french config from path");
    let i18n_fr = I18n::new(None, &loaded_french_config);
    assert_eq!(i18n_fr.current_locale().to_string(), "fr");

    dir.close().expect("Failed to close temporary directory");
}

#[test]
fn test_scan_then_navigate_across_gaps() {
    let dir = tempdir().expect("Failed to create temporary directory");
    fs::write(dir.path().join("a.txt"), b"not media").expect("write");
    fs::write(dir.path().join("b.png"), b"fake image").expect("write");
    fs::write(dir.path().join("c.log"), b"not media").expect("write");
    fs::write(dir.path().join("d.mp4"), b"fake video").expect("write");
    fs::write(dir.path().join("e.dat"), b"not media").expect("write");

    let entries = scan_gallery(dir.path(), ScanOptions::default()).expect("scan failed");
    let mut navigator = GalleryNavigator::with_entries(entries);

    assert_eq!(navigator.len(), 5);
    assert_eq!(navigator.previewable_count(), 2);

    // Open the image at index 1, step across the gaps to the video at 3,
    // then wrap back around.
    assert!(navigator.open(1).is_some());
    assert_eq!(navigator.current_entry().map(|e| e.name.as_str()), Some("b.png"));
    assert_eq!(navigator.next(), Some(3));
    assert_eq!(navigator.current_entry().map(|e| e.kind), Some(Some(MediaKind::Video)));
    assert_eq!(navigator.next(), Some(1));
}

#[test]
fn test_prefetch_hints_follow_navigation() {
    let dir = tempdir().expect("Failed to create temporary directory");
    fs::write(dir.path().join("a.png"), b"fake image").expect("write");
    fs::write(dir.path().join("b.txt"), b"not media").expect("write");
    fs::write(dir.path().join("c.png"), b"fake image").expect("write");
    fs::write(dir.path().join("d.png"), b"fake image").expect("write");

    let entries = scan_gallery(dir.path(), ScanOptions::default()).expect("scan failed");
    let mut navigator = GalleryNavigator::with_entries(entries);

    navigator.open(2);
    let hints = prefetch::hints(&navigator);
    let hinted: Vec<_> = hints
        .iter()
        .map(|h| h.path.file_name().unwrap().to_string_lossy().into_owned())
        .collect();
    assert_eq!(hinted, ["a.png", "d.png"]);

    navigator.first();
    let hints = prefetch::hints(&navigator);
    assert_eq!(hints.len(), 1);
    assert!(hints[0].path.ends_with("c.png"));
}

#[test]
fn test_sort_direction_reverses_listing() {
    let dir = tempdir().expect("Failed to create temporary directory");
    fs::write(dir.path().join("a.png"), b"x").expect("write");
    fs::write(dir.path().join("b.png"), b"x").expect("write");

    let descending = ScanOptions {
        sort_by: SortBy::Name,
        sort_direction: SortDirection::Descending,
        exclude_dotfiles: false,
    };
    let entries = scan_gallery(dir.path(), descending).expect("scan failed");
    let names: Vec<_> = entries.iter().map(|e| e.name.as_str()).collect();
    assert_eq!(names, ["b.png", "a.png"]);
}
