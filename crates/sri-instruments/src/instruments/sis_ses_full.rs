use std::sync::LazyLock;

use crate::Instrument;
use crate::scale::{Scale, adopt, likert_items, sum_scoring};

use super::sis_ses_sf::SisSesSf;

pub const ID: &str = "sis_ses_full";

/// SIS/SES full length: the short-form items plus 12 excitation, 9 SIS1 and
/// 10 SIS2 items. 45 items, total 45–225.
pub struct SisSesFull;

impl Instrument for SisSesFull {
    fn scale(&self) -> &Scale {
        static SCALE: LazyLock<Scale> = LazyLock::new(|| {
            let sf = SisSesSf;
            let short = &sf.scale().questions;
            let from_short = |prefix: &str| {
                adopt(ID, short.iter().filter(|q| q.id.starts_with(prefix)))
            };

            let mut questions = from_short("ses_");
            questions.extend(likert_items(
                ID,
                &[
                    ("ses_5", "When I fantasize about having sex with someone, I get aroused easily", false),
                    ("ses_6", "My sexual arousal comes quickly and fades quickly", false),
                    ("ses_7", "When someone touches me sensually, I get aroused easily", false),
                    ("ses_8", "Certain scents remind me of sex and excite me", false),
                    ("ses_9", "I easily become sexually interested in people I do not know well", false),
                    ("ses_10", "Hearing others talk about sex arouses me easily", false),
                    ("ses_11", "Music can remind me of sex and excite me", false),
                    ("ses_12", "Many things remind me of sex", false),
                    ("ses_13", "I consider myself to have a strong sex drive", false),
                    ("ses_14", "Romantic scenes in films make me think about sex", false),
                    ("ses_15", "I am attracted to many different kinds of people", false),
                    ("ses_16", "I often find myself thinking about sex", false),
                ],
            ));

            questions.extend(from_short("sis1_"));
            questions.extend(likert_items(
                ID,
                &[
                    ("sis1_6", "Unless my body is fully accepted by my partner, I cannot stay aroused", false),
                    ("sis1_7", "Unless I am sure my partner finds me attractive, I cannot focus on my own pleasure", false),
                    ("sis1_8", "If I worry how my performance will be judged, I lose arousal", false),
                    ("sis1_9", "Unless I feel sexually competent, I cannot enjoy sex", false),
                    ("sis1_10", "I cannot focus on pleasure because I worry about how my body looks", false),
                    ("sis1_11", "When I worry whether I will reach orgasm, it is hard to stay aroused", false),
                    ("sis1_12", "If I feel pressured into sex, I lose interest", false),
                    ("sis1_13", "Unless I feel safe, I cannot become aroused", false),
                    ("sis1_14", "If I am unsure I can satisfy my partner, it is hard to become excited", false),
                ],
            ));

            questions.extend(from_short("sis2_"));
            questions.extend(likert_items(
                ID,
                &[
                    ("sis2_6", "If someone might overhear us, I am unlikely to become aroused", false),
                    ("sis2_7", "It is hard for me to become aroused the first time with someone", false),
                    ("sis2_8", "If I cannot concentrate on what is happening, I lose arousal", false),
                    ("sis2_9", "Unless my partner seems to really want sex, it is hard to stay aroused", false),
                    ("sis2_10", "When my partner does not seem fully engaged, I lose interest", false),
                    ("sis2_11", "I need a strong emotional connection with my partner to enjoy sex", false),
                    ("sis2_12", "Drugs or alcohol make it hard for me to become aroused", false),
                    ("sis2_13", "Unless the mood is right, I cannot really focus on sexual pleasure", false),
                    ("sis2_14", "If I worry about my partner's feelings, I cannot focus on my own pleasure", false),
                    ("sis2_15", "Sometimes worrying about what a sexual encounter means interferes with my arousal", false),
                ],
            ));

            Scale {
                id: ID.to_string(),
                name: "SIS/SES".to_string(),
                description: "Full-length dual control model scales measuring the sexual inhibition and excitation systems (Janssen et al.)".to_string(),
                scoring: sum_scoring(&questions),
                questions,
            }
        });
        &SCALE
    }
}
