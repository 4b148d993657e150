//! Storage key conventions.
//!
//! Pure constants. These define the layout of the local key-value slots the
//! session store and the draft autosaver write to.

/// Every key owned by this system starts with this prefix.
pub const KEY_PREFIX: &str = "sri_";

/// The single persisted `StorageData` root.
pub const STORAGE_KEY: &str = "sri_assessment_data";

/// The ephemeral in-progress draft used for resume-on-reload.
pub const PROGRESS_KEY: &str = "sri_assessment_progress";

/// Version tag written into every persisted root.
pub const STORAGE_VERSION: &str = "1.0.0";

pub fn is_owned(key: &str) -> bool {
    key.starts_with(KEY_PREFIX)
}
