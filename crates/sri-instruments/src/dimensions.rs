//! Aggregation of item groups into the four latent dimensions.
//!
//! Item groups cut across instruments: the SOS screening items are also the
//! first five items of the full survey, and so on. Groups are therefore
//! identified by question-id prefix, and the reference norm is chosen by how
//! many items of the group were actually answered.

use sri_core::models::norms::NormativeData;
use sri_core::models::response::Response;
use sri_core::models::results::DimensionScores;

use crate::instruments::{kiss9_shame, sexual_cognition, teen_sexual_attitudes};
use crate::norms::{self, GUILT_NORMS, NormSelection, SES_NORMS, SIS_NORMS, SOS_NORMS};
use crate::scoring::{self, RawScore};

/// Question-id prefix of each item group.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemGroup {
    Sos,
    Guilt,
    Shame,
    TeenAttitudes,
    Cognition,
    AdaptedDualControl,
    Excitation,
    PerformanceInhibition,
    ConsequenceInhibition,
}

impl ItemGroup {
    pub fn prefix(self) -> &'static str {
        match self {
            Self::Sos => "sos_",
            Self::Guilt => "mg_",
            Self::Shame => "ks_",
            Self::TeenAttitudes => "tsa_",
            Self::Cognition => "sc_",
            Self::AdaptedDualControl => "sisa_",
            Self::Excitation => "ses_",
            Self::PerformanceInhibition => "sis1_",
            Self::ConsequenceInhibition => "sis2_",
        }
    }

    pub fn contains(self, question_id: &str) -> bool {
        question_id.starts_with(self.prefix())
    }
}

/// Raw score of every response in `group`.
pub fn group_score(responses: &[Response], group: ItemGroup) -> RawScore {
    let mut score = RawScore::default();
    for response in responses.iter().filter(|r| group.contains(&r.question_id)) {
        match crate::find_question(&response.question_id) {
            Some(question) => {
                let item = scoring::score_items([(question, response)]);
                score.total += item.total;
                score.valid_items += item.valid_items;
                score.invalid.extend(item.invalid);
            }
            None => {
                tracing::warn!(
                    question_id = %response.question_id,
                    "discarding response to a question outside the catalog"
                );
                score.invalid.push(scoring::InvalidResponse {
                    question_id: response.question_id.clone(),
                    value: response.value,
                });
            }
        }
    }
    score
}

/// z-score of a group under its short/full norm selection; 0 when nothing
/// in the group was answered.
fn selected_z(score: &RawScore, selection: NormSelection, norms: Option<&NormativeData>) -> f64 {
    if score.is_empty() {
        return 0.0;
    }
    reference_z(score.total, selection.key_for(score.valid_items), norms)
}

fn reference_z(raw: i32, key: &str, norms: Option<&NormativeData>) -> f64 {
    match norms::resolve(key, norms) {
        Some(reference) => scoring::z_score(f64::from(raw), reference.mean, reference.sd),
        None => {
            tracing::warn!(key, "no reference norm; dimension scored as 0");
            0.0
        }
    }
}

/// Breakdown of the dual-control dimension for the standard instruments.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SisSesScores {
    pub sis_raw: i32,
    pub ses_raw: i32,
    pub sis_items: usize,
    pub ses_items: usize,
    pub sis_z: f64,
    pub ses_z: f64,
}

impl SisSesScores {
    /// Inhibition advantage over excitation.
    pub fn difference(&self) -> f64 {
        self.sis_z - self.ses_z
    }
}

/// SIS (both inhibition subscales) and SES scored separately, each under its
/// own short/full norm. Unanswered subscales are standardized as a raw of 0.
pub fn sis_ses_scores(responses: &[Response], norms: Option<&NormativeData>) -> SisSesScores {
    let ses = group_score(responses, ItemGroup::Excitation);
    let sis1 = group_score(responses, ItemGroup::PerformanceInhibition);
    let sis2 = group_score(responses, ItemGroup::ConsequenceInhibition);

    let sis_raw = sis1.total + sis2.total;
    let sis_items = sis1.valid_items + sis2.valid_items;

    SisSesScores {
        sis_raw,
        ses_raw: ses.total,
        sis_items,
        ses_items: ses.valid_items,
        sis_z: reference_z(sis_raw, SIS_NORMS.key_for(sis_items), norms),
        ses_z: reference_z(ses.total, SES_NORMS.key_for(ses.valid_items), norms),
    }
}

/// The four dimension z-scores.
pub fn dimension_scores(responses: &[Response], norms: Option<&NormativeData>) -> DimensionScores {
    let sos = group_score(responses, ItemGroup::Sos);
    let guilt = group_score(responses, ItemGroup::Guilt);

    DimensionScores {
        sos_reversed: selected_z(&sos, SOS_NORMS, norms),
        sex_guilt: selected_z(&guilt, GUILT_NORMS, norms),
        sexual_shame: shame_z(responses, norms),
        sis_over_ses: sis_over_ses(responses, norms),
    }
}

fn shame_z(responses: &[Response], norms: Option<&NormativeData>) -> f64 {
    let shame = group_score(responses, ItemGroup::Shame);
    if !shame.is_empty() {
        return reference_z(shame.total, kiss9_shame::ID, norms);
    }
    let teen = group_score(responses, ItemGroup::TeenAttitudes);
    if !teen.is_empty() {
        return reference_z(teen.total, teen_sexual_attitudes::ID, norms);
    }
    0.0
}

fn sis_over_ses(responses: &[Response], norms: Option<&NormativeData>) -> f64 {
    let adapted_answered = responses.iter().any(|r| {
        ItemGroup::Cognition.contains(&r.question_id)
            || ItemGroup::AdaptedDualControl.contains(&r.question_id)
    });

    if adapted_answered {
        let combined = group_score(responses, ItemGroup::Cognition).total
            + group_score(responses, ItemGroup::AdaptedDualControl).total;
        if combined == 0 {
            return 0.0;
        }
        return reference_z(combined, sexual_cognition::ID, norms);
    }

    sis_ses_scores(responses, norms).difference()
}
