use serde::{Deserialize, Serialize};
use thiserror::Error;
use ts_rs::TS;

/// How the response to a question is collected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum QuestionType {
    Likert,
    Binary,
    Multiple,
}

/// How item values combine into an instrument total.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum ScoringType {
    Sum,
    Average,
    Weighted,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ScoringMethod {
    #[serde(rename = "type")]
    pub kind: ScoringType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weights: Option<Vec<f64>>,
    /// Inclusive `[min, max]` of the instrument total.
    pub range: (i32, i32),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct QuestionOption {
    pub value: i32,
    pub label: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Question {
    pub id: String,
    pub text: String,
    /// Id of the owning scale.
    pub scale: String,
    #[serde(rename = "type")]
    pub kind: QuestionType,
    pub options: Vec<QuestionOption>,
    pub required: bool,
    #[serde(default)]
    pub reverse: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl Question {
    pub fn accepts(&self, value: i32) -> bool {
        self.options.iter().any(|o| o.value == value)
    }

    pub fn min_value(&self) -> Option<i32> {
        self.options.iter().map(|o| o.value).min()
    }

    pub fn max_value(&self) -> Option<i32> {
        self.options.iter().map(|o| o.value).max()
    }

    /// Item contribution of an answer, or `None` when the value is not one of
    /// the offered options.
    pub fn score(&self, value: i32) -> Option<i32> {
        if !self.accepts(value) {
            return None;
        }
        if self.reverse {
            let max = self.max_value()?;
            let min = self.min_value()?;
            Some(max + min - value)
        } else {
            Some(value)
        }
    }
}

/// A complete instrument definition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Scale {
    pub id: String,
    pub name: String,
    pub description: String,
    pub questions: Vec<Question>,
    pub scoring: ScoringMethod,
}

/// A response that could not be scored against its question.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS, Error)]
#[ts(export)]
#[error("{message}")]
pub struct ValidationError {
    pub question_id: String,
    pub value: i32,
    pub allowed: Vec<i32>,
    pub message: String,
}

/// Five-point agreement options (1 = strongly disagree).
pub fn likert_options() -> Vec<QuestionOption> {
    options(&[
        (1, "Strongly disagree"),
        (2, "Disagree"),
        (3, "Neutral"),
        (4, "Agree"),
        (5, "Strongly agree"),
    ])
}

/// Five-point frequency options (1 = never).
pub fn frequency_options() -> Vec<QuestionOption> {
    options(&[
        (1, "Never"),
        (2, "Rarely"),
        (3, "Sometimes"),
        (4, "Often"),
        (5, "Always"),
    ])
}

fn options(pairs: &[(i32, &str)]) -> Vec<QuestionOption> {
    pairs
        .iter()
        .map(|(value, label)| QuestionOption {
            value: *value,
            label: label.to_string(),
            description: None,
        })
        .collect()
}

/// `(id, text, reverse)` rows for a block of items.
pub(crate) type ItemRow = (&'static str, &'static str, bool);

/// Build questions for `scale_id` from item rows.
pub(crate) fn items(
    scale_id: &str,
    kind: QuestionType,
    options: fn() -> Vec<QuestionOption>,
    rows: &[ItemRow],
) -> Vec<Question> {
    rows.iter()
        .map(|(id, text, reverse)| Question {
            id: id.to_string(),
            text: text.to_string(),
            scale: scale_id.to_string(),
            kind,
            options: options(),
            required: true,
            reverse: *reverse,
            description: None,
        })
        .collect()
}

/// Likert items, the common case.
pub(crate) fn likert_items(scale_id: &str, rows: &[ItemRow]) -> Vec<Question> {
    items(scale_id, QuestionType::Likert, likert_options, rows)
}

/// Copy questions from another scale, re-tagged as belonging to `scale_id`.
pub(crate) fn adopt<'a>(
    scale_id: &str,
    questions: impl IntoIterator<Item = &'a Question>,
) -> Vec<Question> {
    questions
        .into_iter()
        .map(|q| Question {
            scale: scale_id.to_string(),
            ..q.clone()
        })
        .collect()
}

/// Summed instrument whose range follows from its item count and options.
pub(crate) fn sum_scoring(questions: &[Question]) -> ScoringMethod {
    let min = questions.iter().filter_map(Question::min_value).sum();
    let max = questions.iter().filter_map(Question::max_value).sum();
    ScoringMethod {
        kind: ScoringType::Sum,
        weights: None,
        range: (min, max),
    }
}
