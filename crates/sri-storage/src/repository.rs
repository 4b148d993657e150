use sri_core::keys::{STORAGE_KEY, STORAGE_VERSION};
use sri_core::models::storage::StorageData;

use crate::backend::KeyValueStore;
use crate::error::StorageError;

/// Load/save of the whole persisted root.
pub trait SessionRepository {
    /// A missing root loads as an empty store.
    fn load(&self) -> Result<StorageData, StorageError>;
    fn save(&self, data: &StorageData) -> Result<(), StorageError>;
    fn delete(&self) -> Result<(), StorageError>;
}

impl<R: SessionRepository + ?Sized> SessionRepository for &R {
    fn load(&self) -> Result<StorageData, StorageError> {
        (**self).load()
    }

    fn save(&self, data: &StorageData) -> Result<(), StorageError> {
        (**self).save(data)
    }

    fn delete(&self) -> Result<(), StorageError> {
        (**self).delete()
    }
}

/// Stores [`StorageData`] as one JSON document under a single key.
#[derive(Debug)]
pub struct JsonRepository<S> {
    store: S,
    key: String,
}

impl<S: KeyValueStore> JsonRepository<S> {
    pub fn new(store: S) -> Self {
        Self::with_key(store, STORAGE_KEY)
    }

    pub fn with_key(store: S, key: impl Into<String>) -> Self {
        Self {
            store,
            key: key.into(),
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    fn corrupt(&self, source: serde_json::Error) -> StorageError {
        StorageError::Deserialization {
            key: self.key.clone(),
            source,
        }
    }
}

impl<S: KeyValueStore> SessionRepository for JsonRepository<S> {
    fn load(&self) -> Result<StorageData, StorageError> {
        let Some(contents) = self.store.get(&self.key)? else {
            return Ok(StorageData::default());
        };

        // Parse as raw JSON so the version can be checked before deserializing.
        let json: serde_json::Value =
            serde_json::from_str(&contents).map_err(|e| self.corrupt(e))?;
        let found = json
            .get("version")
            .and_then(|v| v.as_str())
            .unwrap_or_default();
        if found != STORAGE_VERSION {
            return Err(StorageError::VersionMismatch {
                found: found.to_string(),
                expected: STORAGE_VERSION.to_string(),
            });
        }

        let data: StorageData = serde_json::from_value(json).map_err(|e| self.corrupt(e))?;
        tracing::debug!(key = %self.key, sessions = data.sessions.len(), "loaded storage root");
        Ok(data)
    }

    fn save(&self, data: &StorageData) -> Result<(), StorageError> {
        // Always write the current version, regardless of what was loaded.
        let json = if data.version == STORAGE_VERSION {
            serde_json::to_string(data)?
        } else {
            let mut stamped = data.clone();
            stamped.version = STORAGE_VERSION.to_string();
            serde_json::to_string(&stamped)?
        };
        self.store.set(&self.key, &json)
    }

    fn delete(&self) -> Result<(), StorageError> {
        self.store.remove(&self.key)
    }
}
