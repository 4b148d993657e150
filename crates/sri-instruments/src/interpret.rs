use serde::{Deserialize, Serialize};
use sri_core::models::results::{SriLevel, SriResult};
use ts_rs::TS;

/// Dimension z-scores strictly above this are called out as contributing
/// factors.
pub const ELEVATED_THRESHOLD: f64 = 1.0;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Interpretation {
    pub interpretation: Vec<String>,
    pub recommendations: Vec<String>,
}

/// Explanatory sentences and recommendations for a composite result.
pub fn interpret(sri: &SriResult) -> Interpretation {
    Interpretation {
        interpretation: interpretation(sri),
        recommendations: recommendations(sri),
    }
}

fn level_description(level: SriLevel) -> &'static str {
    match level {
        SriLevel::VeryLow => {
            "shows little sexual repression and is relatively open to and accepting of sexual content and experiences"
        }
        SriLevel::Low => "is relatively healthy, with a low degree of repression",
        SriLevel::Moderate => "is within the normal range, neither overly repressed nor overly open",
        SriLevel::High => {
            "shows some sexual repression, which may affect sexual experience and intimate relationships"
        }
        SriLevel::VeryHigh => {
            "shows marked sexual repression; talking to a professional counsellor is recommended"
        }
    }
}

/// `(factor, recommendation)` for every elevated dimension, in a fixed order.
fn elevated_dimensions(sri: &SriResult) -> Vec<(&'static str, &'static str)> {
    let d = &sri.dimension_scores;
    [
        (
            d.sos_reversed,
            "avoidance of sexual stimuli",
            "Try gradual, self-paced exposure to accurate sexual health information to ease avoidance of sexual topics.",
        ),
        (
            d.sex_guilt,
            "sex-related guilt",
            "Explore where feelings of sexual guilt come from; they are often tied to cultural background, upbringing or religious beliefs.",
        ),
        (
            d.sexual_shame,
            "sexual shame",
            "Practice self-acceptance and body mindfulness to build a positive relationship with your own body.",
        ),
        (
            d.sis_over_ses,
            "inhibition outweighing excitation",
            "Learn relaxation techniques and mindfulness exercises to reduce sexual anxiety and over-control.",
        ),
    ]
    .into_iter()
    .filter(|(z, _, _)| *z > ELEVATED_THRESHOLD)
    .map(|(_, factor, recommendation)| (factor, recommendation))
    .collect()
}

fn interpretation(sri: &SriResult) -> Vec<String> {
    let mut lines = vec![
        format!(
            "Your sexual repression index is {}, which is at the \"{}\" level.",
            sri.total_score,
            sri.level.label()
        ),
        format!(
            "This suggests that your sexual psychology {}.",
            level_description(sri.level)
        ),
    ];

    let factors: Vec<&str> = elevated_dimensions(sri)
        .into_iter()
        .map(|(factor, _)| factor)
        .collect();
    if !factors.is_empty() {
        lines.push(format!(
            "You scored higher on the following dimensions: {}.",
            factors.join(", ")
        ));
    }
    lines
}

fn recommendations(sri: &SriResult) -> Vec<String> {
    let mut lines = Vec::new();

    if matches!(sri.level, SriLevel::High | SriLevel::VeryHigh) {
        lines.push(
            "Consider talking with a qualified sex therapist or counsellor about sexual wellbeing."
                .to_string(),
        );
        lines.push(
            "Try reading scientific material on sexual health and psychology to build an evidence-based understanding of sexuality."
                .to_string(),
        );
    }

    lines.extend(
        elevated_dimensions(sri)
            .into_iter()
            .map(|(_, recommendation)| recommendation.to_string()),
    );

    lines.push(
        "Talk openly about sexual topics with a trusted partner or friend to feel less isolated."
            .to_string(),
    );
    lines.push(
        "Remember this is not a diagnostic tool; the results are for self-understanding and reflection only."
            .to_string(),
    );
    lines
}
