use sri_core::models::demographics::{Demographics, LOW_ACTIVITY_CODE};
use sri_core::models::session::AssessmentType;

use crate::instruments::{
    bsas_brief, kiss9_shame, mosher_guilt, mosher_guilt_full, sexual_cognition, sis_ses_adapted,
    sis_ses_full, sis_ses_sf, sos_full, sos_screening, teen_sexual_attitudes,
};

/// Respondent category that decides the instrument bundle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UserGroup {
    /// Aged 14–17.
    Teen,
    /// Adult with no sexual experience.
    Inexperienced,
    /// Experienced, but not active in the last year.
    LowActivity,
    Standard,
}

impl UserGroup {
    pub fn description(self) -> &'static str {
        match self {
            Self::Teen => "Adolescent version (14-17): attitudes and cognition, no behavioral items",
            Self::Inexperienced => {
                "Experience-adapted version: attitudes and expectations rather than past experience"
            }
            Self::LowActivity => "Standard short version for respondents not recently active",
            Self::Standard => "Standard version",
        }
    }
}

/// Age takes precedence: a minor is a teen regardless of activity.
/// Unparseable codes fall through to [`UserGroup::Standard`].
pub fn user_group(demographics: &Demographics) -> UserGroup {
    if demographics.is_minor() {
        UserGroup::Teen
    } else if demographics.is_inexperienced() {
        UserGroup::Inexperienced
    } else if demographics.sexual_activity_code() == Some(LOW_ACTIVITY_CODE) {
        UserGroup::LowActivity
    } else {
        UserGroup::Standard
    }
}

/// Ordered instrument ids to administer for this respondent and tier.
pub fn select_scales(demographics: &Demographics, tier: AssessmentType) -> Vec<&'static str> {
    let group = user_group(demographics);
    let bundle = bundle(group, tier);
    tracing::debug!(?group, tier = tier.as_str(), ?bundle, "selected instrument bundle");
    bundle
}

fn bundle(group: UserGroup, tier: AssessmentType) -> Vec<&'static str> {
    use AssessmentType::{Full, Quick};

    match (group, tier) {
        (UserGroup::Teen, Quick) => vec![
            teen_sexual_attitudes::ID,
            sexual_cognition::ID,
            sis_ses_adapted::ID,
            sos_screening::ID,
        ],
        (UserGroup::Teen, Full) => vec![
            teen_sexual_attitudes::ID,
            sexual_cognition::ID,
            sis_ses_adapted::ID,
            sos_full::ID,
            kiss9_shame::ID,
        ],
        (UserGroup::Inexperienced, Quick) => vec![
            sexual_cognition::ID,
            sis_ses_adapted::ID,
            mosher_guilt::ID,
            kiss9_shame::ID,
            sos_screening::ID,
        ],
        (UserGroup::Inexperienced, Full) => vec![
            sexual_cognition::ID,
            sis_ses_adapted::ID,
            mosher_guilt_full::ID,
            kiss9_shame::ID,
            sos_full::ID,
            bsas_brief::ID,
        ],
        (UserGroup::LowActivity | UserGroup::Standard, Quick) => vec![
            sis_ses_sf::ID,
            mosher_guilt::ID,
            kiss9_shame::ID,
            sos_screening::ID,
        ],
        (UserGroup::LowActivity | UserGroup::Standard, Full) => vec![
            sis_ses_full::ID,
            mosher_guilt_full::ID,
            kiss9_shame::ID,
            sos_full::ID,
            bsas_brief::ID,
        ],
    }
}

/// Flatten a bundle into the question ids the respondent will see, in
/// order. Unknown scale ids are skipped.
pub fn question_ids(scale_ids: &[&str]) -> Vec<String> {
    scale_ids
        .iter()
        .filter_map(|id| crate::get_instrument(id))
        .flat_map(|instrument| instrument.questions().iter().map(|q| q.id.clone()))
        .collect()
}
