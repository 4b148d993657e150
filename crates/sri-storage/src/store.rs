use serde::{Deserialize, Serialize};
use sri_core::keys;
use sri_core::models::norms::NormativeData;
use sri_core::models::session::{AssessmentSession, AssessmentType};
use sri_core::models::storage::StorageData;

use crate::backend::KeyValueStore;
use crate::error::StorageError;
use crate::repository::SessionRepository;

/// Most sessions kept in the history.
pub const MAX_SESSIONS: usize = 50;

/// Assessment history on top of a repository. Every mutation is a full
/// load-modify-save of the root.
#[derive(Debug)]
pub struct SessionStore<R> {
    repo: R,
    max_sessions: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StorageStats {
    pub total_sessions: usize,
    pub completed_sessions: usize,
    /// Completed quick assessments.
    pub quick_tests: usize,
    /// Completed full assessments.
    pub full_tests: usize,
    pub oldest_session: Option<jiff::Timestamp>,
    pub newest_session: Option<jiff::Timestamp>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IntegrityReport {
    pub is_valid: bool,
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
    pub total_sessions: usize,
    pub corrupted_sessions: usize,
    pub missing_results: usize,
}

impl<R: SessionRepository> SessionStore<R> {
    pub fn new(repo: R) -> Self {
        Self {
            repo,
            max_sessions: MAX_SESSIONS,
        }
    }

    pub fn with_max_sessions(mut self, max_sessions: usize) -> Self {
        self.max_sessions = max_sessions;
        self
    }

    pub fn repository(&self) -> &R {
        &self.repo
    }

    pub fn load(&self) -> Result<StorageData, StorageError> {
        self.repo.load()
    }

    pub fn save(&self, data: &StorageData) -> Result<(), StorageError> {
        self.repo.save(data)
    }

    /// Insert or replace by id. The oldest sessions by start time are
    /// dropped beyond the cap. A completed session is never replaced by an
    /// in-progress one.
    pub fn upsert_session(&self, session: &AssessmentSession) -> Result<(), StorageError> {
        let mut data = self.repo.load()?;
        match data.sessions.iter_mut().find(|s| s.id == session.id) {
            Some(existing) if existing.completed && !session.completed => {
                tracing::warn!(
                    session_id = %session.id,
                    "rejected in-progress snapshot of a completed session"
                );
                return Err(StorageError::SessionCompleted(session.id.clone()));
            }
            Some(existing) => *existing = session.clone(),
            None => data.sessions.push(session.clone()),
        }

        if data.sessions.len() > self.max_sessions {
            let dropped = data.retain_most_recent(self.max_sessions);
            tracing::info!(dropped, max = self.max_sessions, "session history capped");
        }

        self.repo.save(&data)?;
        tracing::debug!(session_id = %session.id, completed = session.completed, "session saved");
        Ok(())
    }

    /// Newest first.
    pub fn list_sessions(&self) -> Result<Vec<AssessmentSession>, StorageError> {
        let mut data = self.repo.load()?;
        data.sort_newest_first();
        Ok(data.sessions)
    }

    pub fn get_session(&self, id: &str) -> Result<Option<AssessmentSession>, StorageError> {
        let data = self.repo.load()?;
        let session = data.sessions.into_iter().find(|s| s.id == id);
        if session.is_none() {
            tracing::debug!(session_id = id, "session not found");
        }
        Ok(session)
    }

    /// Returns whether a session was removed.
    pub fn delete_session(&self, id: &str) -> Result<bool, StorageError> {
        let mut data = self.repo.load()?;
        let before = data.sessions.len();
        data.sessions.retain(|s| s.id != id);
        if data.sessions.len() == before {
            return Ok(false);
        }
        self.repo.save(&data)?;
        tracing::info!(session_id = id, "session deleted");
        Ok(true)
    }

    /// Drop every session. Stored norms are kept.
    pub fn clear_all(&self) -> Result<(), StorageError> {
        let mut data = self.repo.load()?;
        data.sessions.clear();
        self.repo.save(&data)?;
        tracing::info!("session history cleared");
        Ok(())
    }

    pub fn save_norms(&self, norms: NormativeData) -> Result<(), StorageError> {
        let mut data = self.repo.load()?;
        data.norms = Some(norms);
        self.repo.save(&data)
    }

    pub fn norms(&self) -> Result<Option<NormativeData>, StorageError> {
        Ok(self.repo.load()?.norms)
    }

    pub fn stats(&self) -> Result<StorageStats, StorageError> {
        let data = self.repo.load()?;
        let completed = || data.sessions.iter().filter(|s| s.completed);
        let starts = || data.sessions.iter().map(|s| s.start_time);

        Ok(StorageStats {
            total_sessions: data.sessions.len(),
            completed_sessions: completed().count(),
            quick_tests: completed().filter(|s| s.kind == AssessmentType::Quick).count(),
            full_tests: completed().filter(|s| s.kind == AssessmentType::Full).count(),
            oldest_session: starts().min(),
            newest_session: starts().max(),
        })
    }

    pub fn validate_integrity(&self) -> Result<IntegrityReport, StorageError> {
        let data = self.repo.load()?;
        let mut report = IntegrityReport {
            is_valid: true,
            total_sessions: data.sessions.len(),
            ..IntegrityReport::default()
        };

        for (index, session) in data.sessions.iter().enumerate() {
            let n = index + 1;
            if session.id.trim().is_empty() {
                report.errors.push(format!("session {n}: missing required fields"));
                report.corrupted_sessions += 1;
                report.is_valid = false;
            }
            if session.completed && session.results.is_none() {
                report
                    .warnings
                    .push(format!("session {n}: marked completed but has no results"));
                report.missing_results += 1;
            }
            if session
                .responses
                .iter()
                .any(|r| r.question_id.trim().is_empty())
            {
                report
                    .errors
                    .push(format!("session {n}: contains invalid response data"));
                report.corrupted_sessions += 1;
                report.is_valid = false;
            }
        }

        Ok(report)
    }
}

/// Remove every key this system owns from `store`. Returns the number of
/// keys removed.
pub fn wipe_all(store: &impl KeyValueStore) -> Result<usize, StorageError> {
    let owned: Vec<String> = store
        .keys()?
        .into_iter()
        .filter(|k| keys::is_owned(k))
        .collect();
    for key in &owned {
        store.remove(key)?;
    }
    tracing::info!(removed = owned.len(), "local assessment data wiped");
    Ok(owned.len())
}
