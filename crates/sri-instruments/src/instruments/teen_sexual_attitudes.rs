use std::sync::LazyLock;

use crate::Instrument;
use crate::scale::{Scale, likert_items, sum_scoring};

pub const ID: &str = "teen_sexual_attitudes";

/// Age-adapted attitudes instrument for respondents aged 14–17. Stands in
/// for the shame dimension when KISS-9 is not administered. Total 10–50.
pub struct TeenSexualAttitudes;

impl Instrument for TeenSexualAttitudes {
    fn scale(&self) -> &Scale {
        static SCALE: LazyLock<Scale> = LazyLock::new(|| {
            let questions = likert_items(
                ID,
                &[
                    ("tsa_1", "Sex education content confuses me", false),
                    ("tsa_2", "Talking about sexual topics is awkward", false),
                    ("tsa_3", "Knowing about sex is important", true),
                    ("tsa_4", "The changes in my body make me uneasy", false),
                    ("tsa_5", "I worry that others would judge my sexual thoughts", false),
                    ("tsa_6", "Sexual urges are bad", false),
                    ("tsa_7", "Teenagers should not have sexual thoughts", false),
                    ("tsa_8", "Sexual content in the media makes me uncomfortable", false),
                    ("tsa_9", "Sex education should happen within the family", false),
                    ("tsa_10", "I am ashamed of my sexual curiosity", false),
                ],
            );
            Scale {
                id: ID.to_string(),
                name: "Teen Sexual Attitudes".to_string(),
                description: "Sexual attitudes and understanding, adapted for teenagers".to_string(),
                scoring: sum_scoring(&questions),
                questions,
            }
        });
        &SCALE
    }
}
