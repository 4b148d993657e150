use std::sync::LazyLock;

use crate::Instrument;
use crate::scale::{Scale, adopt, likert_items, sum_scoring};

use super::mosher_guilt::MosherGuilt;

pub const ID: &str = "mosher_guilt_full";

/// Mosher Sex Guilt, full length: the short form plus 18 items. Total 28–140.
pub struct MosherGuiltFull;

impl Instrument for MosherGuiltFull {
    fn scale(&self) -> &Scale {
        static SCALE: LazyLock<Scale> = LazyLock::new(|| {
            let mut questions = adopt(ID, &MosherGuilt.scale().questions);
            questions.extend(likert_items(
                ID,
                &[
                    ("mg_11", "Sexual desire is a base human instinct", false),
                    ("mg_12", "Talking about sex makes me uncomfortable", false),
                    ("mg_13", "A strong sex drive is a bad thing", false),
                    ("mg_14", "I regret some of my past sexual experiences", false),
                    ("mg_15", "Sex should only be for having children", false),
                    ("mg_16", "My sexual thoughts unsettle me", false),
                    ("mg_17", "Enjoying sex is selfish", false),
                    ("mg_18", "I worry that others will judge my sexual behavior", false),
                    ("mg_19", "Purity matters more than sexual experience", false),
                    ("mg_20", "I feel uncomfortable with my sexual body", false),
                    ("mg_21", "Sex is sacred and should never be treated casually", false),
                    ("mg_22", "My sexual urges trouble me", false),
                    ("mg_23", "Sexual activity would make me impure", false),
                    ("mg_24", "I worry that sex will damage my character", false),
                    ("mg_25", "Good people should not have many sexual thoughts", false),
                    ("mg_26", "I am ashamed of my sexual history", false),
                    ("mg_27", "Sexual desire distracts me from important things", false),
                    ("mg_28", "Controlling sexual urges is a sign of moral character", false),
                ],
            ));
            Scale {
                id: ID.to_string(),
                name: "Mosher Sex Guilt".to_string(),
                description: "Full-length measure of sex-related guilt and moral burden (Mosher)".to_string(),
                scoring: sum_scoring(&questions),
                questions,
            }
        });
        &SCALE
    }
}
