use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::CoreError;

use super::demographics::Demographics;
use super::response::Response;
use super::results::AssessmentResults;

/// Assessment tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum AssessmentType {
    Quick,
    Full,
}

impl AssessmentType {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Quick => "quick",
            Self::Full => "full",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    InProgress,
    Completed,
}

/// One respondent's run through an assessment.
///
/// Lifecycle: [`start`](Self::start) → [`record_responses`](Self::record_responses)
/// any number of times → [`complete`](Self::complete). A completed session
/// rejects further mutation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct AssessmentSession {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: AssessmentType,
    pub demographics: Demographics,
    pub responses: Vec<Response>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub results: Option<AssessmentResults>,
    pub start_time: jiff::Timestamp,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_time: Option<jiff::Timestamp>,
    pub completed: bool,
}

impl AssessmentSession {
    pub fn start(
        id: impl Into<String>,
        kind: AssessmentType,
        demographics: Demographics,
        start_time: jiff::Timestamp,
    ) -> Result<Self, CoreError> {
        if !demographics.consent_to_participate {
            return Err(CoreError::ConsentRequired);
        }
        Ok(Self {
            id: id.into(),
            kind,
            demographics,
            responses: Vec::new(),
            results: None,
            start_time,
            end_time: None,
            completed: false,
        })
    }

    pub fn state(&self) -> SessionState {
        if self.completed {
            SessionState::Completed
        } else {
            SessionState::InProgress
        }
    }

    /// Replace the response set with the collaborator's latest snapshot.
    pub fn record_responses(&mut self, responses: Vec<Response>) -> Result<(), CoreError> {
        self.ensure_open()?;
        self.responses = responses;
        Ok(())
    }

    pub fn complete(
        &mut self,
        results: AssessmentResults,
        end_time: jiff::Timestamp,
    ) -> Result<(), CoreError> {
        self.ensure_open()?;
        self.results = Some(results);
        self.end_time = Some(end_time);
        self.completed = true;
        Ok(())
    }

    fn ensure_open(&self) -> Result<(), CoreError> {
        match self.state() {
            SessionState::InProgress => Ok(()),
            SessionState::Completed => Err(CoreError::SessionCompleted(self.id.clone())),
        }
    }
}
