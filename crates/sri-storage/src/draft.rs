//! Resume-on-reload drafts of an assessment in progress.

use jiff::{SignedDuration, Timestamp};
use sri_core::keys::PROGRESS_KEY;
use sri_core::models::session::AssessmentType;
use sri_core::models::storage::AssessmentDraft;

use crate::backend::KeyValueStore;
use crate::error::StorageError;

/// Quiet period after the last change before a draft is written.
pub const DEFAULT_DEBOUNCE: SignedDuration = SignedDuration::from_millis(1000);

#[derive(Debug)]
pub struct DraftStore<S> {
    store: S,
}

impl<S: KeyValueStore> DraftStore<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn save(&self, draft: &AssessmentDraft) -> Result<(), StorageError> {
        let json = serde_json::to_string(draft)?;
        self.store.set(PROGRESS_KEY, &json)?;
        tracing::debug!(
            responses = draft.responses.len(),
            page = draft.current_page,
            "draft saved"
        );
        Ok(())
    }

    /// A draft that no longer parses is dropped and reported as absent.
    pub fn load(&self) -> Result<Option<AssessmentDraft>, StorageError> {
        let Some(contents) = self.store.get(PROGRESS_KEY)? else {
            return Ok(None);
        };
        match serde_json::from_str(&contents) {
            Ok(draft) => Ok(Some(draft)),
            Err(e) => {
                tracing::warn!(error = %e, "discarding unreadable draft");
                self.store.remove(PROGRESS_KEY)?;
                Ok(None)
            }
        }
    }

    /// The saved draft, only if it was started for the same tier.
    pub fn resume(&self, tier: AssessmentType) -> Result<Option<AssessmentDraft>, StorageError> {
        Ok(self.load()?.filter(|draft| draft.kind == tier))
    }

    pub fn clear(&self) -> Result<(), StorageError> {
        self.store.remove(PROGRESS_KEY)
    }
}

/// Coalesces draft updates so that storage is written once the respondent
/// pauses, not on every answer.
#[derive(Debug)]
pub struct DraftAutosaver<S> {
    drafts: DraftStore<S>,
    debounce: SignedDuration,
    pending: Option<AssessmentDraft>,
    last_change: Option<Timestamp>,
}

impl<S: KeyValueStore> DraftAutosaver<S> {
    pub fn new(drafts: DraftStore<S>) -> Self {
        Self::with_debounce(drafts, DEFAULT_DEBOUNCE)
    }

    pub fn with_debounce(drafts: DraftStore<S>, debounce: SignedDuration) -> Self {
        Self {
            drafts,
            debounce,
            pending: None,
            last_change: None,
        }
    }

    pub fn drafts(&self) -> &DraftStore<S> {
        &self.drafts
    }

    pub fn has_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Replace the pending draft and restart the quiet period.
    pub fn record(&mut self, draft: AssessmentDraft, now: Timestamp) {
        self.pending = Some(draft);
        self.last_change = Some(now);
    }

    /// Write the pending draft if the quiet period has elapsed. Returns
    /// whether anything was written.
    pub fn flush_due(&mut self, now: Timestamp) -> Result<bool, StorageError> {
        let due = self
            .last_change
            .is_some_and(|last| now.duration_since(last) >= self.debounce);
        if !due {
            return Ok(false);
        }
        self.flush()
    }

    /// Write the pending draft now.
    pub fn flush(&mut self) -> Result<bool, StorageError> {
        let Some(draft) = self.pending.take() else {
            return Ok(false);
        };
        if let Err(e) = self.drafts.save(&draft) {
            self.pending = Some(draft);
            return Err(e);
        }
        self.last_change = None;
        Ok(true)
    }

    /// Drop any pending draft and the stored one; called on completion.
    pub fn clear(&mut self) -> Result<(), StorageError> {
        self.pending = None;
        self.last_change = None;
        self.drafts.clear()
    }
}
