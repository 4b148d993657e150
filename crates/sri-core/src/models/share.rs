use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::results::{DimensionScores, SriLevel};
use super::session::AssessmentType;

/// What a shared result link carries: the headline numbers only, no
/// responses and no demographics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct SharePayload {
    pub sri: SharedSri,
    #[serde(rename = "type")]
    pub kind: AssessmentType,
    pub completed_at: jiff::Timestamp,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct SharedSri {
    pub total_score: u8,
    pub level: SriLevel,
    pub dimension_scores: DimensionScores,
}
