use jiff::Timestamp;
use sri_core::keys::{PROGRESS_KEY, STORAGE_KEY};
use sri_core::models::demographics::Demographics;
use sri_core::models::session::{AssessmentSession, AssessmentType};
use sri_storage::backend::{FileStore, KeyValueStore};
use sri_storage::config::{StoreConfig, load_config, load_or_default, save_config};
use sri_storage::error::StorageError;
use sri_storage::store::wipe_all;

#[test]
fn missing_key_reads_none() {
    let dir = tempfile::tempdir().unwrap();
    let store = FileStore::new(dir.path().join("nested"));
    assert_eq!(store.get(STORAGE_KEY).unwrap(), None);
    assert!(store.keys().unwrap().is_empty());
    store.remove(STORAGE_KEY).unwrap();
}

#[test]
fn set_get_remove() {
    let dir = tempfile::tempdir().unwrap();
    let store = FileStore::new(dir.path());
    store.set(STORAGE_KEY, r#"{"a":1}"#).unwrap();
    store.set(STORAGE_KEY, r#"{"a":2}"#).unwrap();
    assert_eq!(store.get(STORAGE_KEY).unwrap().as_deref(), Some(r#"{"a":2}"#));
    assert_eq!(store.keys().unwrap(), vec![STORAGE_KEY.to_string()]);

    store.remove(STORAGE_KEY).unwrap();
    assert_eq!(store.get(STORAGE_KEY).unwrap(), None);
}

#[test]
fn no_temp_files_left_behind() {
    let dir = tempfile::tempdir().unwrap();
    let store = FileStore::new(dir.path());
    store.set(PROGRESS_KEY, "{}").unwrap();
    let names: Vec<String> = std::fs::read_dir(dir.path())
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    assert_eq!(names, vec![format!("{PROGRESS_KEY}.json")]);
}

#[test]
fn path_like_keys_are_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let store = FileStore::new(dir.path());
    for key in ["../escape", "a/b", "", ".hidden"] {
        let err = store.set(key, "x").unwrap_err();
        assert!(matches!(err, StorageError::Backend(_)), "{key}");
    }
}

#[test]
fn configured_store_persists_across_opens() {
    let dir = tempfile::tempdir().unwrap();
    let config = StoreConfig {
        data_dir: Some(dir.path().to_path_buf()),
        ..StoreConfig::default()
    };
    let demographics = Demographics {
        age: "3".to_string(),
        sexual_activity: "2".to_string(),
        consent_to_participate: true,
        ..Demographics::default()
    };
    let session = AssessmentSession::start(
        "session_file",
        AssessmentType::Full,
        demographics,
        Timestamp::from_second(1_700_000_000).unwrap(),
    )
    .unwrap();

    config.open_store().unwrap().upsert_session(&session).unwrap();

    let reopened = config.open_store().unwrap();
    assert_eq!(reopened.get_session("session_file").unwrap(), Some(session));

    let files = FileStore::new(dir.path());
    assert_eq!(wipe_all(&files).unwrap(), 1);
    assert!(reopened.list_sessions().unwrap().is_empty());
}

#[test]
fn config_round_trips() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.json");
    let config = StoreConfig {
        max_sessions: 25,
        ..StoreConfig::default()
    };
    save_config(&path, &config).unwrap();
    assert_eq!(load_config(&path).unwrap(), config);
}

#[test]
fn missing_config_uses_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let config = load_or_default(&dir.path().join("absent.json")).unwrap();
    assert_eq!(config, StoreConfig::default());
    assert_eq!(config.max_sessions, 50);
    assert_eq!(config.max_bytes, 5 * 1024 * 1024);
}

#[test]
fn unversioned_config_is_backfilled() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.json");
    std::fs::write(&path, r#"{"max_sessions": 5}"#).unwrap();

    let config = load_config(&path).unwrap();
    assert_eq!(config.config_version, 1);
    assert_eq!(config.autosave_debounce_ms, 1000);
    assert_eq!(config.max_bytes, 5 * 1024 * 1024);
    assert_eq!(config.max_sessions, 5);
}

#[cfg(unix)]
#[test]
fn saved_config_is_owner_only() {
    use std::os::unix::fs::PermissionsExt;

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.json");
    save_config(&path, &StoreConfig::default()).unwrap();

    let mode = std::fs::metadata(&path).unwrap().permissions().mode();
    assert_eq!(mode & 0o777, 0o600);
    assert!(!dir.path().join("config.json.tmp").exists());
}

#[test]
fn newer_config_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.json");
    std::fs::write(
        &path,
        r#"{"config_version": 9, "max_bytes": 1, "max_sessions": 1, "autosave_debounce_ms": 1}"#,
    )
    .unwrap();
    assert!(matches!(load_config(&path), Err(StorageError::Config(_))));
}

#[test]
fn autosaver_opens_in_data_dir() {
    let dir = tempfile::tempdir().unwrap();
    let config = StoreConfig {
        data_dir: Some(dir.path().to_path_buf()),
        ..StoreConfig::default()
    };
    let autosaver = config.open_autosaver().unwrap();
    assert!(!autosaver.has_pending());
    assert!(autosaver.drafts().load().unwrap().is_none());
}
