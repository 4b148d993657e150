use serde::{Deserialize, Serialize};
use sri_core::models::response::Response;
use ts_rs::TS;

use crate::scale::Question;

/// A response whose value is not among the question's options.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct InvalidResponse {
    pub question_id: String,
    pub value: i32,
}

/// Sum of the valid, reverse-adjusted item scores of one item group.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct RawScore {
    pub total: i32,
    pub valid_items: usize,
    pub invalid: Vec<InvalidResponse>,
}

impl RawScore {
    pub fn is_empty(&self) -> bool {
        self.valid_items == 0
    }
}

/// Score `(question, response)` pairs. Out-of-range values are dropped and
/// recorded, never fatal.
pub(crate) fn score_items<'a>(
    pairs: impl IntoIterator<Item = (&'a Question, &'a Response)>,
) -> RawScore {
    let mut score = RawScore::default();
    for (question, response) in pairs {
        match question.score(response.value) {
            Some(value) => {
                score.total += value;
                score.valid_items += 1;
            }
            None => {
                tracing::warn!(
                    question_id = %response.question_id,
                    value = response.value,
                    "discarding response outside the option set"
                );
                score.invalid.push(InvalidResponse {
                    question_id: response.question_id.clone(),
                    value: response.value,
                });
            }
        }
    }
    score
}

/// Full raw scoring of one catalog instrument.
pub fn score_responses(responses: &[Response], scale_id: &str) -> RawScore {
    match crate::get_instrument(scale_id) {
        Some(instrument) => instrument.raw_score(responses),
        None => {
            tracing::warn!(scale_id, "raw score requested for unknown scale");
            RawScore::default()
        }
    }
}

/// Raw total of one catalog instrument; 0 when nothing valid was answered.
pub fn raw_score(responses: &[Response], scale_id: &str) -> i32 {
    score_responses(responses, scale_id).total
}

/// Standardized deviation from `mean`; 0 when `sd` is 0.
pub fn z_score(raw: f64, mean: f64, sd: f64) -> f64 {
    if sd == 0.0 {
        return 0.0;
    }
    (raw - mean) / sd
}

/// Standard normal CDF, Abramowitz & Stegun 7.1.26 (|error| < 1.5e-7).
pub fn standard_normal_cdf(z: f64) -> f64 {
    const A1: f64 = 0.254829592;
    const A2: f64 = -0.284496736;
    const A3: f64 = 1.421413741;
    const A4: f64 = -1.453152027;
    const A5: f64 = 1.061405429;
    const P: f64 = 0.3275911;

    let sign = if z < 0.0 { -1.0 } else { 1.0 };
    let x = z.abs() / std::f64::consts::SQRT_2;
    let t = 1.0 / (1.0 + P * x);
    let y = 1.0 - (((((A5 * t + A4) * t) + A3) * t + A2) * t + A1) * t * (-x * x).exp();
    0.5 * (1.0 + sign * y)
}

/// CDF percentile, unrounded, in 0–100.
pub fn percentile(z: f64) -> f64 {
    standard_normal_cdf(z) * 100.0
}
