use std::sync::LazyLock;

use crate::Instrument;
use crate::scale::{Scale, likert_items, sum_scoring};

pub const ID: &str = "sis_ses_adapted";

/// Inhibition/excitation adapted for respondents without sexual experience:
/// behavior-specific items replaced with romantic/intimacy framing.
/// Total 8–40.
pub struct SisSesAdapted;

impl Instrument for SisSesAdapted {
    fn scale(&self) -> &Scale {
        static SCALE: LazyLock<Scale> = LazyLock::new(|| {
            let questions = likert_items(
                ID,
                &[
                    ("sisa_1", "When I see an attractive person, romantic thoughts come easily", false),
                    ("sisa_2", "Romantic images or stories easily move me", false),
                    ("sisa_3", "I am easily touched by romantic situations", false),
                    ("sisa_4", "The thought of intimate contact makes me nervous", false),
                    ("sisa_5", "I worry about disappointing someone in an intimate relationship", false),
                    ("sisa_6", "I need many conditions to be met before I can relax in intimacy", false),
                    ("sisa_7", "If it feels risky, I avoid intimate contact", false),
                    ("sisa_8", "Strange or unfamiliar surroundings make it hard to express affection", false),
                ],
            );
            Scale {
                id: ID.to_string(),
                name: "SIS/SES (adapted)".to_string(),
                description: "Inhibition/excitation tendencies adapted for respondents without sexual experience".to_string(),
                scoring: sum_scoring(&questions),
                questions,
            }
        });
        &SCALE
    }
}
