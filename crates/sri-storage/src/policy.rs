use sri_core::models::storage::StorageData;

use crate::error::StorageError;
use crate::repository::SessionRepository;

/// Serialized size above which old sessions are dropped before saving.
pub const DEFAULT_MAX_BYTES: usize = 5 * 1024 * 1024;

/// Sessions kept when the root outgrows `max_bytes`.
pub const SIZE_TRIM_KEEP: usize = 20;

/// Sessions kept when the backend reports its quota is exhausted.
pub const QUOTA_TRIM_KEEP: usize = 10;

/// Size and quota limits applied around another repository.
///
/// Loading is lossy: a root written by another version, or one that no
/// longer parses, is logged and replaced by an empty store.
#[derive(Debug)]
pub struct EvictionPolicy<R> {
    inner: R,
    max_bytes: usize,
    size_trim_keep: usize,
    quota_trim_keep: usize,
}

impl<R: SessionRepository> EvictionPolicy<R> {
    pub fn new(inner: R) -> Self {
        Self {
            inner,
            max_bytes: DEFAULT_MAX_BYTES,
            size_trim_keep: SIZE_TRIM_KEEP,
            quota_trim_keep: QUOTA_TRIM_KEEP,
        }
    }

    pub fn with_max_bytes(mut self, max_bytes: usize) -> Self {
        self.max_bytes = max_bytes;
        self
    }

    pub fn with_trim_counts(mut self, size_trim_keep: usize, quota_trim_keep: usize) -> Self {
        self.size_trim_keep = size_trim_keep;
        self.quota_trim_keep = quota_trim_keep;
        self
    }

    pub fn inner(&self) -> &R {
        &self.inner
    }
}

impl<R: SessionRepository> SessionRepository for EvictionPolicy<R> {
    fn load(&self) -> Result<StorageData, StorageError> {
        match self.inner.load() {
            Ok(data) => Ok(data),
            Err(e) if e.is_unreadable() => {
                tracing::warn!(error = %e, "discarding unreadable storage root");
                Ok(StorageData::default())
            }
            Err(e) => Err(e),
        }
    }

    fn save(&self, data: &StorageData) -> Result<(), StorageError> {
        let mut data = data.clone();

        let size = serde_json::to_string(&data)?.len();
        if size > self.max_bytes {
            let dropped = data.retain_most_recent(self.size_trim_keep);
            tracing::warn!(
                size,
                max_bytes = self.max_bytes,
                dropped,
                "storage root too large, dropped oldest sessions"
            );
        }

        match self.inner.save(&data) {
            Ok(()) => Ok(()),
            Err(StorageError::QuotaExceeded { key }) => {
                let dropped = data.retain_most_recent(self.quota_trim_keep);
                tracing::warn!(%key, dropped, "storage quota exceeded, retrying with fewer sessions");
                self.inner.save(&data).map_err(|e| {
                    tracing::error!(error = %e, "retry after trimming failed");
                    StorageError::CannotPersist(e.to_string())
                })
            }
            Err(e) => Err(e),
        }
    }

    fn delete(&self) -> Result<(), StorageError> {
        self.inner.delete()
    }
}
