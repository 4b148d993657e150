use std::sync::LazyLock;

use crate::Instrument;
use crate::scale::{Scale, likert_items, sum_scoring};

pub const ID: &str = "sis_ses_sf";

/// SIS/SES-SF: Sexual Inhibition / Sexual Excitation Scales, short form.
/// 4 excitation items (`ses_*`), 5 performance-concern inhibition items
/// (`sis1_*`), 5 consequence-concern inhibition items (`sis2_*`). Total 14–70.
pub struct SisSesSf;

impl Instrument for SisSesSf {
    fn scale(&self) -> &Scale {
        static SCALE: LazyLock<Scale> = LazyLock::new(|| {
            let questions = likert_items(
                ID,
                &[
                    ("ses_1", "When I see an attractive person, I easily start fantasizing about sex", false),
                    ("ses_2", "Sexual images or stories easily arouse me", false),
                    ("ses_3", "I get sexually aroused easily", false),
                    ("ses_4", "Seeing nudity makes me sexually excited", false),
                    ("sis1_1", "If I am worried about my performance, it is hard to stay aroused", false),
                    ("sis1_2", "Unless I am sure I will not disappoint my partner, I find it hard to relax and enjoy sex", false),
                    ("sis1_3", "When I think I might not satisfy my partner, I lose interest in sex", false),
                    ("sis1_4", "If I worry about my sexual performance, I cannot focus on pleasure", false),
                    ("sis1_5", "Distracting thoughts during sexual activity make me lose arousal", false),
                    ("sis2_1", "If I think there is a risk of being caught, I am unlikely to seek sexual activity", false),
                    ("sis2_2", "Worrying about sexually transmitted infections lowers my interest in sex", false),
                    ("sis2_3", "If there is a risk involved, it is hard for me to stay aroused", false),
                    ("sis2_4", "Worrying about pregnancy affects my interest in sex", false),
                    ("sis2_5", "Strange or unfamiliar surroundings make it hard for me to get aroused", false),
                ],
            );
            Scale {
                id: ID.to_string(),
                name: "SIS/SES-SF".to_string(),
                description: "Dual control model short form measuring the sexual inhibition and excitation systems (Janssen et al.)".to_string(),
                scoring: sum_scoring(&questions),
                questions,
            }
        });
        &SCALE
    }
}
