use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Raw and standardized score for one administered instrument.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct ScaleScore {
    pub scale_id: String,
    pub raw_score: i32,
    pub z_score: f64,
    /// Rounded and clamped to 0–100.
    pub percentile: f64,
}

/// The four latent dimensions, each a z-score.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct DimensionScores {
    /// Erotophobia on the opinion survey; higher = more aversive.
    pub sos_reversed: f64,
    pub sex_guilt: f64,
    pub sexual_shame: f64,
    /// Inhibition advantage over excitation.
    pub sis_over_ses: f64,
}

impl DimensionScores {
    pub fn as_array(&self) -> [f64; 4] {
        [
            self.sos_reversed,
            self.sex_guilt,
            self.sexual_shame,
            self.sis_over_ses,
        ]
    }

    pub fn mean(&self) -> f64 {
        self.as_array().iter().sum::<f64>() / 4.0
    }
}

/// Categorical band of the composite index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "kebab-case")]
#[ts(export)]
pub enum SriLevel {
    VeryLow,
    Low,
    Moderate,
    High,
    VeryHigh,
}

impl SriLevel {
    pub const ALL: [SriLevel; 5] = [
        SriLevel::VeryLow,
        SriLevel::Low,
        SriLevel::Moderate,
        SriLevel::High,
        SriLevel::VeryHigh,
    ];

    /// Half-open `[min, max)` bounds; the top band is closed at 100.
    pub fn bounds(self) -> (u8, u8) {
        match self {
            Self::VeryLow => (0, 20),
            Self::Low => (20, 40),
            Self::Moderate => (40, 60),
            Self::High => (60, 80),
            Self::VeryHigh => (80, 101),
        }
    }

    /// Scores above 100 saturate into the top band.
    pub fn from_total_score(score: u8) -> Self {
        Self::ALL
            .into_iter()
            .find(|level| {
                let (min, max) = level.bounds();
                score >= min && score < max
            })
            .unwrap_or(Self::VeryHigh)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::VeryLow => "very-low",
            Self::Low => "low",
            Self::Moderate => "moderate",
            Self::High => "high",
            Self::VeryHigh => "very-high",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::VeryLow => "very low (little repression)",
            Self::Low => "low",
            Self::Moderate => "moderate",
            Self::High => "high",
            Self::VeryHigh => "very high",
        }
    }
}

impl std::fmt::Display for SriLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct SriResult {
    /// 0–100.
    pub total_score: u8,
    pub z_score: f64,
    /// Unrounded CDF percentile.
    pub percentile: f64,
    pub level: SriLevel,
    pub dimension_scores: DimensionScores,
    pub scale_scores: Vec<ScaleScore>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct AssessmentResults {
    pub session_id: String,
    pub sri: SriResult,
    pub interpretation: Vec<String>,
    pub recommendations: Vec<String>,
    pub calculated_at: jiff::Timestamp,
}
