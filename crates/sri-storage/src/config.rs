use std::path::{Path, PathBuf};

use jiff::SignedDuration;
use serde::{Deserialize, Serialize};

use crate::backend::FileStore;
use crate::draft::{DraftAutosaver, DraftStore};
use crate::error::StorageError;
use crate::policy::{DEFAULT_MAX_BYTES, EvictionPolicy};
use crate::repository::JsonRepository;
use crate::store::{MAX_SESSIONS, SessionStore};

/// Version stamped into every saved config.
const CURRENT_VERSION: u32 = 1;

const APP_DIR: &str = "sri-assessment";

pub type FileSessionStore = SessionStore<EvictionPolicy<JsonRepository<FileStore>>>;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Missing or 0 marks a hand-written file without a version.
    #[serde(default)]
    pub config_version: u32,
    /// Where the key files live. `None` uses the platform data directory.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_dir: Option<PathBuf>,
    pub max_bytes: usize,
    pub max_sessions: usize,
    pub autosave_debounce_ms: i64,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            config_version: CURRENT_VERSION,
            data_dir: None,
            max_bytes: DEFAULT_MAX_BYTES,
            max_sessions: MAX_SESSIONS,
            autosave_debounce_ms: crate::draft::DEFAULT_DEBOUNCE.as_millis() as i64,
        }
    }
}

impl StoreConfig {
    pub fn data_dir(&self) -> Result<PathBuf, StorageError> {
        match &self.data_dir {
            Some(dir) => Ok(dir.clone()),
            None => default_data_dir(),
        }
    }

    pub fn open_store(&self) -> Result<FileSessionStore, StorageError> {
        let files = FileStore::new(self.data_dir()?);
        let policy = EvictionPolicy::new(JsonRepository::new(files)).with_max_bytes(self.max_bytes);
        Ok(SessionStore::new(policy).with_max_sessions(self.max_sessions))
    }

    pub fn open_autosaver(&self) -> Result<DraftAutosaver<FileStore>, StorageError> {
        let drafts = DraftStore::new(FileStore::new(self.data_dir()?));
        Ok(DraftAutosaver::with_debounce(
            drafts,
            SignedDuration::from_millis(self.autosave_debounce_ms),
        ))
    }
}

pub fn default_data_dir() -> Result<PathBuf, StorageError> {
    let base = dirs::data_dir()
        .ok_or_else(|| StorageError::Config("no data directory found".to_string()))?;
    Ok(base.join(APP_DIR))
}

pub fn load_config(path: &Path) -> Result<StoreConfig, StorageError> {
    let contents = std::fs::read_to_string(path).map_err(|e| {
        StorageError::Config(format!("cannot read {}: {e}", path.display()))
    })?;

    let mut json: serde_json::Value = serde_json::from_str(&contents)?;
    let version = json
        .get("config_version")
        .and_then(|v| v.as_u64())
        .unwrap_or(0) as u32;
    upgrade(&mut json, version)?;
    Ok(serde_json::from_value(json)?)
}

/// The config at `path`, or the defaults when no file exists yet.
pub fn load_or_default(path: &Path) -> Result<StoreConfig, StorageError> {
    if path.exists() {
        load_config(path)
    } else {
        Ok(StoreConfig::default())
    }
}

/// Bring a raw config document up to [`CURRENT_VERSION`] in place.
///
/// A file without `config_version` was written by hand; every field it
/// leaves out that has no serde default is backfilled here.
fn upgrade(json: &mut serde_json::Value, version: u32) -> Result<(), StorageError> {
    if version > CURRENT_VERSION {
        return Err(StorageError::Config(format!(
            "config_version {version} is newer than supported version {CURRENT_VERSION}"
        )));
    }
    if version == CURRENT_VERSION {
        return Ok(());
    }

    let defaults = serde_json::to_value(StoreConfig::default())?;
    let (Some(fields), Some(defaults)) = (json.as_object_mut(), defaults.as_object()) else {
        return Err(StorageError::Config("config is not a JSON object".to_string()));
    };
    let mut filled = Vec::new();
    for (name, value) in defaults {
        if !fields.contains_key(name) {
            fields.insert(name.clone(), value.clone());
            filled.push(name.as_str());
        }
    }
    fields.insert("config_version".to_string(), CURRENT_VERSION.into());
    tracing::info!(from = version, ?filled, "backfilled unversioned store config");
    Ok(())
}

pub fn save_config(path: &Path, config: &StoreConfig) -> Result<(), StorageError> {
    if let Some(dir) = path.parent() {
        std::fs::create_dir_all(dir)?;
    }

    let stamped = StoreConfig {
        config_version: CURRENT_VERSION,
        ..config.clone()
    };
    let json = serde_json::to_string_pretty(&stamped)?;

    let tmp_path = path.with_extension("json.tmp");
    std::fs::write(&tmp_path, json.as_bytes())?;
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        std::fs::set_permissions(&tmp_path, std::fs::Permissions::from_mode(0o600))?;
    }
    std::fs::rename(&tmp_path, path)?;

    tracing::info!(path = %path.display(), "store config saved");
    Ok(())
}
