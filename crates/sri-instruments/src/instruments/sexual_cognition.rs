use std::sync::LazyLock;

use crate::Instrument;
use crate::scale::{Scale, likert_items, sum_scoring};

pub const ID: &str = "sexual_cognition";

/// Sexual cognition: attitudes and readiness for respondents without sexual
/// experience. Total 10–50.
pub struct SexualCognition;

impl Instrument for SexualCognition {
    fn scale(&self) -> &Scale {
        static SCALE: LazyLock<Scale> = LazyLock::new(|| {
            let questions = likert_items(
                ID,
                &[
                    ("sc_1", "The topic of sex makes me nervous", false),
                    ("sc_2", "Sex is natural and beautiful", true),
                    ("sc_3", "I worry about future sexual experiences", false),
                    ("sc_4", "Sex is only appropriate under particular conditions", false),
                    ("sc_5", "I feel I do not know enough about sex", false),
                    ("sc_6", "Sexual fantasies are immoral", false),
                    ("sc_7", "Sex should be an expression of love", false),
                    ("sc_8", "I am ashamed of my sexual body", false),
                    ("sc_9", "Discussing sexual topics is important", true),
                    ("sc_10", "I worry that others will find out my sexual thoughts", false),
                ],
            );
            Scale {
                id: ID.to_string(),
                name: "Sexual Cognition".to_string(),
                description: "Cognitive attitudes toward sex and psychological readiness".to_string(),
                scoring: sum_scoring(&questions),
                questions,
            }
        });
        &SCALE
    }
}
