use std::collections::BTreeMap;

use sha2::{Digest, Sha256};
use sri_core::models::export::{ExportData, ExportDemographics, ExportResults};
use sri_core::models::session::AssessmentSession;

use crate::error::ExportError;

/// Length of the anonymized session id.
pub const ANONYMIZED_ID_LEN: usize = 8;

/// Short, stable hash of a session id. The original id cannot be recovered
/// from it.
pub fn anonymized_id(session_id: &str) -> String {
    let digest = format!("{:x}", Sha256::digest(session_id.as_bytes()));
    digest[..ANONYMIZED_ID_LEN].to_string()
}

/// Anonymized projection of a session; `None` until it has results.
pub fn export_session(session: &AssessmentSession) -> Option<ExportData> {
    let results = session.results.as_ref()?;

    let responses: BTreeMap<String, i32> = session
        .responses
        .iter()
        .map(|r| (r.question_id.clone(), r.value))
        .collect();

    let demographics = &session.demographics;
    Some(ExportData {
        session_id: anonymized_id(&session.id),
        timestamp: session.start_time.to_string(),
        kind: session.kind,
        demographics: ExportDemographics {
            age: demographics.age.clone(),
            gender: demographics.gender.clone(),
            relationship_status: demographics.relationship_status.clone(),
            sexual_activity: demographics.sexual_activity.clone(),
            consent_to_participate: true,
        },
        responses,
        results: ExportResults {
            sri_score: results.sri.total_score,
            sri_level: results.sri.level,
            dimensions: results.sri.dimension_scores,
        },
    })
}

/// Every completed session with results, newest first.
pub fn export_all(sessions: &[AssessmentSession]) -> Vec<ExportData> {
    let mut completed: Vec<&AssessmentSession> = sessions
        .iter()
        .filter(|s| s.completed && s.results.is_some())
        .collect();
    completed.sort_by(|a, b| b.start_time.cmp(&a.start_time));

    let exports: Vec<ExportData> = completed.into_iter().filter_map(export_session).collect();
    tracing::info!(
        exported = exports.len(),
        skipped = sessions.len() - exports.len(),
        "sessions exported"
    );
    exports
}

/// Pretty-printed JSON array.
pub fn to_json(exports: &[ExportData]) -> Result<String, ExportError> {
    Ok(serde_json::to_string_pretty(exports)?)
}
