use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Age band code for respondents aged 14–17.
pub const MINOR_AGE_CODE: u8 = 0;

/// Sexual-activity code for "never".
pub const NO_EXPERIENCE_CODE: u8 = 0;

/// Sexual-activity code for "yes, but not in the last year".
pub const LOW_ACTIVITY_CODE: u8 = 1;

/// Intake answers. Codes are stored as the option value rendered to a string,
/// which is how the intake form hands them over.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Demographics {
    pub age: String,
    pub gender: String,
    pub relationship_status: String,
    pub sexual_activity: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub religious_cultural: Option<String>,
    pub consent_to_participate: bool,
}

impl Demographics {
    pub fn age_code(&self) -> Option<u8> {
        parse_code(&self.age)
    }

    pub fn sexual_activity_code(&self) -> Option<u8> {
        parse_code(&self.sexual_activity)
    }

    pub fn is_minor(&self) -> bool {
        self.age_code() == Some(MINOR_AGE_CODE)
    }

    pub fn is_inexperienced(&self) -> bool {
        self.sexual_activity_code() == Some(NO_EXPERIENCE_CODE)
    }

    /// Human-readable labels for the history view.
    pub fn display(&self) -> DemographicsDisplay {
        DemographicsDisplay {
            age: label_or_raw(DemographicField::Age, &self.age),
            gender: label_or_raw(DemographicField::Gender, &self.gender),
            relationship_status: label_or_raw(
                DemographicField::RelationshipStatus,
                &self.relationship_status,
            ),
            sexual_activity: label_or_raw(DemographicField::SexualActivity, &self.sexual_activity),
            religious_cultural: self
                .religious_cultural
                .as_deref()
                .map(|v| label_or_raw(DemographicField::ReligiousCultural, v)),
        }
    }
}

fn parse_code(raw: &str) -> Option<u8> {
    raw.trim().parse().ok()
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct DemographicsDisplay {
    pub age: String,
    pub gender: String,
    pub relationship_status: String,
    pub sexual_activity: String,
    pub religious_cultural: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DemographicField {
    Age,
    Gender,
    RelationshipStatus,
    SexualActivity,
    ReligiousCultural,
}

impl DemographicField {
    /// `(code, label)` pairs offered by the intake form.
    pub fn options(self) -> &'static [(u8, &'static str)] {
        match self {
            Self::Age => &[
                (0, "14-17"),
                (1, "18-24"),
                (2, "25-34"),
                (3, "35-44"),
                (4, "45-54"),
                (5, "55+"),
            ],
            Self::Gender => &[
                (1, "Male"),
                (2, "Female"),
                (3, "Non-binary"),
                (4, "Prefer not to say"),
            ],
            Self::RelationshipStatus => &[
                (1, "Single"),
                (2, "In a relationship"),
                (3, "Married / cohabiting"),
                (4, "Prefer not to say"),
            ],
            Self::SexualActivity => &[
                (0, "Never"),
                (1, "Yes, but not in the last year"),
                (2, "Rarely (1-3 times a year)"),
                (3, "Occasionally (1-3 times a month)"),
                (4, "Often (1-3 times a week)"),
                (5, "Frequently (4+ times a week)"),
            ],
            Self::ReligiousCultural => &[
                (1, "No particular religion"),
                (2, "Christianity"),
                (3, "Buddhism"),
                (4, "Islam"),
                (5, "Other"),
                (6, "Prefer not to say"),
            ],
        }
    }

    pub fn label(self, code: u8) -> Option<&'static str> {
        self.options()
            .iter()
            .find(|(c, _)| *c == code)
            .map(|(_, label)| *label)
    }
}

/// Label for a stored code, or the raw value when it is not a known option.
pub fn label_or_raw(field: DemographicField, raw: &str) -> String {
    parse_code(raw)
        .and_then(|code| field.label(code))
        .map(str::to_string)
        .unwrap_or_else(|| raw.to_string())
}
