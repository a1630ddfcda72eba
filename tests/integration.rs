// SPDX-License-Identifier: MPL-2.0
use smp::application::{playlist, DeleteOutcome, DeletionMethod, Playlist};
use smp::config::{self, Config, GeneralConfig};
use smp::domain::{NavigationDirection, OptionToggle, PlaybackOptions, Selection};
use smp::i18n::fluent::I18n;
use smp::infrastructure::SystemDeletion;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::tempdir;

fn create_files(dir: &Path, names: &[&str]) -> Vec<PathBuf> {
    names
        .iter()
        .map(|name| {
            let path = dir.join(name);
            fs::write(&path, b"fake media data").expect("failed to write test file");
            path
        })
        .collect()
}

fn ordered() -> PlaybackOptions {
    PlaybackOptions {
        shuffle: false,
        prompt_delete: false,
        permanent_delete: true,
    }
}

#[test]
fn directory_playlist_steps_and_wraps() {
    let dir = tempdir().expect("failed to create temp dir");
    create_files(dir.path(), &["a.png", "b.txt", "c.jpg", "d.webm"]);

    let mut slot = Playlist::populate(&Selection::Directory(dir.path().to_path_buf()), ordered())
        .expect("scan failed");
    let len = slot.as_ref().map(Playlist::len).expect("playlist");
    assert_eq!(len, 3);

    for _ in 0..len {
        playlist::advance(&mut slot, NavigationDirection::Next);
    }
    assert_eq!(slot.as_ref().map(Playlist::current_index), Some(0));

    assert_eq!(
        playlist::advance(&mut slot, NavigationDirection::Previous),
        Some(len - 1)
    );
}

#[test]
fn shuffled_playlist_keeps_every_item() {
    let dir = tempdir().expect("failed to create temp dir");
    let created = create_files(
        dir.path(),
        &["1.png", "2.png", "3.png", "4.png", "5.png", "6.png"],
    );
    let options = PlaybackOptions {
        shuffle: true,
        ..ordered()
    };

    let shuffled = Playlist::populate(&Selection::Directory(dir.path().to_path_buf()), options)
        .expect("scan failed")
        .expect("playlist");

    let mut items = shuffled.items().to_vec();
    items.sort();
    let mut expected = created;
    expected.sort();
    assert_eq!(items, expected);
}

#[test]
fn unsupported_single_file_yields_no_playlist() {
    let dir = tempdir().expect("failed to create temp dir");
    let notes = create_files(dir.path(), &["notes.txt"]);

    let result = Playlist::populate(&Selection::File(notes[0].clone()), ordered())
        .expect("scan failed");

    assert!(result.is_none());
}

#[test]
fn deleting_every_item_empties_the_playlist() {
    let dir = tempdir().expect("failed to create temp dir");
    let created = create_files(dir.path(), &["a.png", "b.gif"]);
    let mut slot = Playlist::populate(&Selection::Directory(dir.path().to_path_buf()), ordered())
        .expect("scan failed");

    let first = playlist::delete_current(&mut slot, &SystemDeletion, true).expect("delete failed");
    assert_eq!(first, Some(DeleteOutcome::Removed(DeletionMethod::Unlinked)));
    assert_eq!(slot.as_ref().map(Playlist::len), Some(1));

    let second = playlist::delete_current(&mut slot, &SystemDeletion, true).expect("delete failed");
    assert_eq!(second, Some(DeleteOutcome::Emptied(DeletionMethod::Unlinked)));
    assert!(slot.is_none());
    assert!(created.iter().all(|path| !path.exists()));
}

#[test]
fn option_toggles_are_not_written_to_settings() {
    let dir = tempdir().expect("failed to create temp dir");
    let mut options = PlaybackOptions::default();
    options.toggle(OptionToggle::Shuffle);
    options.toggle(OptionToggle::PermanentDelete);

    let config = Config {
        general: GeneralConfig {
            language: Some("fr".to_string()),
        },
    };
    config::save_with_override(&config, Some(dir.path().to_path_buf()))
        .expect("failed to save settings");

    let written = fs::read_to_string(dir.path().join(config::CONFIG_FILE))
        .expect("failed to read settings");
    assert!(!written.contains("playback"));
    assert!(!written.contains("shuffle"));

    let (loaded, warning) = config::load_with_override(Some(dir.path().to_path_buf()));
    assert!(warning.is_none());
    assert_eq!(loaded, config);
    assert_ne!(options, PlaybackOptions::default());
}

#[test]
fn language_setting_selects_locale() {
    let config = Config {
        general: GeneralConfig {
            language: Some("fr".to_string()),
        },
    };

    let i18n = I18n::new(None, &config);

    assert_eq!(i18n.current_locale().to_string(), "fr");
    assert_eq!(i18n.tr("dialog-dismiss"), "Fermer");
}
