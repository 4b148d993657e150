use std::sync::LazyLock;

use crate::Instrument;
use crate::scale::{Scale, likert_items, sum_scoring};

pub const ID: &str = "mosher_guilt";

/// Mosher Sex Guilt, 10-item short form. Total 10–50.
pub struct MosherGuilt;

impl Instrument for MosherGuilt {
    fn scale(&self) -> &Scale {
        static SCALE: LazyLock<Scale> = LazyLock::new(|| {
            let questions = likert_items(
                ID,
                &[
                    ("mg_1", "Sex is something dirty", false),
                    ("mg_2", "Masturbation is harmful", false),
                    ("mg_3", "Sex is only moral within marriage", false),
                    ("mg_4", "Having sexual desires makes me feel guilty", false),
                    ("mg_5", "Sexual fantasies are wrong", false),
                    ("mg_6", "I am ashamed of my sexual thoughts", false),
                    ("mg_7", "Sex is acceptable only under particular conditions", false),
                    ("mg_8", "I worry that my sexual behavior is morally wrong", false),
                    ("mg_9", "Enjoying sexual pleasure makes me feel guilty", false),
                    ("mg_10", "Sexual urges need to be kept under control", false),
                ],
            );
            Scale {
                id: ID.to_string(),
                name: "Mosher Sex Guilt (short)".to_string(),
                description: "Measures sex-related guilt and moral burden (Mosher)".to_string(),
                scoring: sum_scoring(&questions),
                questions,
            }
        });
        &SCALE
    }
}
