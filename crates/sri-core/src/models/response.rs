use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// A single answer to a catalog question.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Response {
    pub question_id: String,
    pub value: i32,
    pub timestamp: jiff::Timestamp,
}

impl Response {
    pub fn new(question_id: impl Into<String>, value: i32, timestamp: jiff::Timestamp) -> Self {
        Self {
            question_id: question_id.into(),
            value,
            timestamp,
        }
    }
}
