use std::sync::LazyLock;

use crate::Instrument;
use crate::scale::{Scale, likert_items, sum_scoring};

pub const ID: &str = "sos_screening";

/// Sexual Opinion Survey, 5-item screening version. Higher = more
/// erotophobic. Total 5–25.
pub struct SosScreening;

impl Instrument for SosScreening {
    fn scale(&self) -> &Scale {
        static SCALE: LazyLock<Scale> = LazyLock::new(|| {
            let questions = likert_items(
                ID,
                &[
                    ("sos_1", "Pornographic content makes me uncomfortable", false),
                    ("sos_2", "Sex-related topics embarrass me", false),
                    ("sos_3", "I tend to avoid sexually suggestive content", false),
                    ("sos_4", "Seeing sexual images upsets me", false),
                    ("sos_5", "Discussing sex openly is inappropriate", false),
                ],
            );
            Scale {
                id: ID.to_string(),
                name: "SOS screening".to_string(),
                description: "Screening version of the Sexual Opinion Survey; emotional orientation toward sexual stimuli".to_string(),
                scoring: sum_scoring(&questions),
                questions,
            }
        });
        &SCALE
    }
}
