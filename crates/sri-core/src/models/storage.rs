use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::keys::STORAGE_VERSION;

use super::demographics::Demographics;
use super::norms::NormativeData;
use super::response::Response;
use super::session::{AssessmentSession, AssessmentType};

/// The single persisted root object.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct StorageData {
    pub sessions: Vec<AssessmentSession>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub norms: Option<NormativeData>,
    pub version: String,
}

impl Default for StorageData {
    fn default() -> Self {
        Self {
            sessions: Vec::new(),
            norms: None,
            version: STORAGE_VERSION.to_string(),
        }
    }
}

impl StorageData {
    /// Sort newest-first by start time.
    pub fn sort_newest_first(&mut self) {
        self.sessions
            .sort_by(|a, b| b.start_time.cmp(&a.start_time));
    }

    /// Keep only the `keep` most recent sessions. Returns how many were dropped.
    pub fn retain_most_recent(&mut self, keep: usize) -> usize {
        self.sort_newest_first();
        let before = self.sessions.len();
        self.sessions.truncate(keep);
        before - self.sessions.len()
    }
}

/// In-progress assessment snapshot used to resume after a reload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct AssessmentDraft {
    #[serde(rename = "type")]
    pub kind: AssessmentType,
    pub demographics: Demographics,
    pub responses: Vec<Response>,
    #[serde(default)]
    pub current_page: u32,
    pub timestamp: jiff::Timestamp,
}
