use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::results::{DimensionScores, SriLevel};
use super::session::AssessmentType;

/// Anonymized projection of one completed session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct ExportData {
    /// Short hash of the session id, never the id itself.
    pub session_id: String,
    pub timestamp: String,
    #[serde(rename = "type")]
    pub kind: AssessmentType,
    pub demographics: ExportDemographics,
    pub responses: BTreeMap<String, i32>,
    pub results: ExportResults,
}

/// Demographics without the free-text / religious background field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct ExportDemographics {
    pub age: String,
    pub gender: String,
    pub relationship_status: String,
    pub sexual_activity: String,
    pub consent_to_participate: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct ExportResults {
    pub sri_score: u8,
    pub sri_level: SriLevel,
    pub dimensions: DimensionScores,
}
