use std::sync::LazyLock;

use crate::Instrument;
use crate::scale::{Scale, likert_items, sum_scoring};

pub const ID: &str = "bsas_brief";

/// BSAS: Brief Sexual Attitudes Scale. Permissiveness, birth control,
/// communion and instrumentality subscales; 23 items, seven reverse-keyed.
pub struct BsasBrief;

impl Instrument for BsasBrief {
    fn scale(&self) -> &Scale {
        static SCALE: LazyLock<Scale> = LazyLock::new(|| {
            let questions = likert_items(
                ID,
                &[
                    ("bsas_perm_1", "I do not need to be committed to a person to have sex with them", false),
                    ("bsas_perm_2", "Sex before marriage is acceptable", false),
                    ("bsas_perm_3", "One-night stands are acceptable", false),
                    ("bsas_perm_4", "Having several sexual partners is fine", false),
                    ("bsas_perm_5", "Sex should only happen between married couples", true),
                    ("bsas_perm_6", "Sexual freedom is important", false),
                    ("bsas_birth_1", "Birth control is a shared responsibility", false),
                    ("bsas_birth_2", "Women should be responsible for birth control", true),
                    ("bsas_birth_3", "Men should be responsible for birth control", true),
                    ("bsas_birth_4", "Using contraception is sensible", false),
                    ("bsas_birth_5", "I support family planning", false),
                    ("bsas_birth_6", "Sex education should cover contraception", false),
                    ("bsas_comm_1", "Talking about sex is difficult", true),
                    ("bsas_comm_2", "Discussing sex with a partner is important", false),
                    ("bsas_comm_3", "Expressing sexual needs is difficult", true),
                    ("bsas_comm_4", "I can talk about sex with friends easily", false),
                    ("bsas_comm_5", "Open sexual communication is key to a healthy relationship", false),
                    ("bsas_inst_1", "Sex is mainly about physical pleasure", false),
                    ("bsas_inst_2", "The most important part of sex is enjoyment", false),
                    ("bsas_inst_3", "Sex does not require love", false),
                    ("bsas_inst_4", "Sex can be a purely physical activity", false),
                    ("bsas_inst_5", "Sex is mainly about emotional connection", true),
                    ("bsas_inst_6", "Sex should always be romantic", true),
                ],
            );
            Scale {
                id: ID.to_string(),
                name: "BSAS".to_string(),
                description: "Brief Sexual Attitudes Scale across four attitude dimensions (Hendrick et al.)".to_string(),
                scoring: sum_scoring(&questions),
                questions,
            }
        });
        &SCALE
    }
}
