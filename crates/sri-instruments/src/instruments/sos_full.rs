use std::sync::LazyLock;

use crate::Instrument;
use crate::scale::{Scale, adopt, likert_items, sum_scoring};

use super::sos_screening::SosScreening;

pub const ID: &str = "sos_full";

/// Sexual Opinion Survey, full length: the screening items plus 16.
/// Total 21–105.
pub struct SosFull;

impl Instrument for SosFull {
    fn scale(&self) -> &Scale {
        static SCALE: LazyLock<Scale> = LazyLock::new(|| {
            let mut questions = adopt(ID, &SosScreening.scale().questions);
            questions.extend(likert_items(
                ID,
                &[
                    ("sos_6", "Too much exposure to sexual content is harmful", false),
                    ("sos_7", "Most sex education material is too explicit", false),
                    ("sos_8", "Sex should be private and not discussed in public", false),
                    ("sos_9", "Sexual content in the media repels me", false),
                    ("sos_10", "Society has become too open about sex", false),
                    ("sos_11", "Young people are exposed to sexual information too early", false),
                    ("sos_12", "I view adult entertainment venues negatively", false),
                    ("sos_13", "Research into sex is unnecessary", false),
                    ("sos_14", "Public displays of intimacy are inappropriate", false),
                    ("sos_15", "Sex toys and products make me uncomfortable", false),
                    ("sos_16", "Sex should just happen naturally and needs no special attention", false),
                    ("sos_17", "The idea of sexual diversity troubles me", false),
                    ("sos_18", "Sex counselling or sex therapy would be embarrassing", false),
                    ("sos_19", "Traditional sexual values are preferable", false),
                    ("sos_20", "I am wary of sexual freedom in modern society", false),
                    ("sos_21", "Too much sexual information confuses people", false),
                ],
            ));
            Scale {
                id: ID.to_string(),
                name: "SOS".to_string(),
                description: "Full-length Sexual Opinion Survey; emotional orientation toward sexual stimuli (Fisher et al.)".to_string(),
                scoring: sum_scoring(&questions),
                questions,
            }
        });
        &SCALE
    }
}
