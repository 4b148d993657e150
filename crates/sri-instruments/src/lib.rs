//! sri-instruments
//!
//! Psychometric instrument definitions and the scoring pipeline. Pure data
//! and pure functions, no I/O. Defines the question catalog, adaptive
//! bundle selection, raw/standardized scoring, dimension aggregation, the
//! composite index, and its interpretation.

pub mod calculator;
pub mod composite;
pub mod dimensions;
pub mod error;
pub mod instruments;
pub mod interpret;
pub mod norms;
pub mod scale;
pub mod scoring;
pub mod selection;

use std::collections::{BTreeSet, HashMap};
use std::sync::LazyLock;

use sri_core::models::response::Response;

use scale::{Question, Scale, ValidationError};
use scoring::RawScore;

/// Trait implemented by each psychometric instrument.
pub trait Instrument: Send + Sync {
    /// The full definition: questions, options and scoring method.
    fn scale(&self) -> &Scale;

    /// Unique identifier (e.g., "sis_ses_sf", "kiss9_shame").
    fn id(&self) -> &str {
        &self.scale().id
    }

    /// Human-readable name (e.g., "SIS/SES-SF", "KISS-9").
    fn name(&self) -> &str {
        &self.scale().name
    }

    fn questions(&self) -> &[Question] {
        &self.scale().questions
    }

    fn question(&self, question_id: &str) -> Option<&Question> {
        self.questions().iter().find(|q| q.id == question_id)
    }

    /// Check every response addressed to this instrument against the
    /// question's option set.
    fn validate_responses(&self, responses: &[Response]) -> Vec<ValidationError> {
        responses
            .iter()
            .filter_map(|r| {
                let question = self.question(&r.question_id)?;
                if question.accepts(r.value) {
                    return None;
                }
                let allowed: Vec<i32> = question.options.iter().map(|o| o.value).collect();
                Some(ValidationError {
                    question_id: r.question_id.clone(),
                    value: r.value,
                    message: format!(
                        "{}: value {} for {} is not one of {:?}",
                        self.name(),
                        r.value,
                        r.question_id,
                        allowed,
                    ),
                    allowed,
                })
            })
            .collect()
    }

    /// Sum of valid, reverse-adjusted item scores for this instrument.
    fn raw_score(&self, responses: &[Response]) -> RawScore {
        scoring::score_items(
            responses
                .iter()
                .filter_map(|r| self.question(&r.question_id).map(|q| (q, r))),
        )
    }
}

static CATALOG: LazyLock<Vec<Box<dyn Instrument>>> = LazyLock::new(|| {
    vec![
        Box::new(instruments::sis_ses_sf::SisSesSf),
        Box::new(instruments::sis_ses_full::SisSesFull),
        Box::new(instruments::mosher_guilt::MosherGuilt),
        Box::new(instruments::mosher_guilt_full::MosherGuiltFull),
        Box::new(instruments::kiss9_shame::Kiss9Shame),
        Box::new(instruments::sos_screening::SosScreening),
        Box::new(instruments::sos_full::SosFull),
        Box::new(instruments::bsas_brief::BsasBrief),
        Box::new(instruments::teen_sexual_attitudes::TeenSexualAttitudes),
        Box::new(instruments::sexual_cognition::SexualCognition),
        Box::new(instruments::sis_ses_adapted::SisSesAdapted),
    ]
});

/// Question id → definition. Items shared between a short form and its
/// full-length variant are identical apart from the owning scale, so the
/// first registration wins.
static QUESTION_INDEX: LazyLock<HashMap<&'static str, &'static Question>> =
    LazyLock::new(|| {
        let mut index = HashMap::new();
        for instrument in all_instruments() {
            for question in instrument.questions() {
                index.entry(question.id.as_str()).or_insert(question);
            }
        }
        index
    });

/// Return all registered instruments, in catalog order.
pub fn all_instruments() -> impl Iterator<Item = &'static dyn Instrument> {
    CATALOG.iter().map(|i| i.as_ref())
}

/// Look up an instrument by ID.
pub fn get_instrument(id: &str) -> Option<&'static dyn Instrument> {
    all_instruments().find(|i| i.id() == id)
}

/// Look up a scale definition by ID.
pub fn get_scale(id: &str) -> Option<&'static Scale> {
    get_instrument(id).map(|i| i.scale())
}

pub fn all_scale_ids() -> BTreeSet<String> {
    all_instruments().map(|i| i.id().to_string()).collect()
}

/// Find a question anywhere in the catalog.
pub fn find_question(question_id: &str) -> Option<&'static Question> {
    QUESTION_INDEX.get(question_id).copied()
}
