use std::sync::LazyLock;

use crate::Instrument;
use crate::scale::{QuestionType, Scale, frequency_options, items, sum_scoring};

pub const ID: &str = "kiss9_shame";

/// KISS-9: Kyle Inventory of Sexual Shame, brief form. Frequency-rated,
/// total 9–45.
pub struct Kiss9Shame;

impl Instrument for Kiss9Shame {
    fn scale(&self) -> &Scale {
        static SCALE: LazyLock<Scale> = LazyLock::new(|| {
            let questions = items(
                ID,
                QuestionType::Likert,
                frequency_options,
                &[
                    ("ks_1", "I feel ashamed of my sexual body", false),
                    ("ks_2", "I feel ashamed of my sexual thoughts", false),
                    ("ks_3", "I feel ashamed of my sexual desires", false),
                    ("ks_4", "I feel ashamed of my sexual behavior", false),
                    ("ks_5", "I feel ashamed of my sexual feelings", false),
                    ("ks_6", "I feel that my sexual nature is flawed in some way", false),
                    ("ks_7", "I wish I could change my sexual identity", false),
                    ("ks_8", "I feel I have let important people down as a sexual being", false),
                    ("ks_9", "I feel sexually inferior to other people", false),
                ],
            );
            Scale {
                id: ID.to_string(),
                name: "KISS-9".to_string(),
                description: "Brief inventory of sex-related shame experiences (Kyle et al.)".to_string(),
                scoring: sum_scoring(&questions),
                questions,
            }
        });
        &SCALE
    }
}
