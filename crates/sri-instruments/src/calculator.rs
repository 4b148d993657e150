use sri_core::clock::Clock;
use sri_core::models::norms::{NormativeData, Reference};
use sri_core::models::response::Response;
use sri_core::models::results::{AssessmentResults, ScaleScore};

use crate::error::InstrumentError;
use crate::{all_instruments, composite, dimensions, interpret, norms, scoring};

/// Used for a scale with no reference norm at all.
const UNIT_REFERENCE: Reference = Reference::new(0.0, 1.0);

/// Run the whole scoring pipeline over a set of responses.
///
/// `norms` are persisted overrides; anything they lack comes from the
/// built-in table.
pub fn calculate_assessment_results(
    responses: &[Response],
    session_id: &str,
    norms: Option<&NormativeData>,
    clock: &impl Clock,
) -> Result<AssessmentResults, InstrumentError> {
    if responses.is_empty() {
        return Err(InstrumentError::InsufficientData(
            "no responses provided".to_string(),
        ));
    }

    let scale_scores = scale_scores(responses, norms);
    if scale_scores.is_empty() {
        return Err(InstrumentError::InsufficientData(
            "no instrument received a valid response".to_string(),
        ));
    }

    let mut sri = composite::synthesize(dimensions::dimension_scores(responses, norms));
    sri.scale_scores = scale_scores;

    let interpret::Interpretation {
        interpretation,
        recommendations,
    } = interpret::interpret(&sri);

    tracing::info!(
        session_id,
        total_score = sri.total_score,
        level = %sri.level,
        scales = sri.scale_scores.len(),
        "assessment scored"
    );

    Ok(AssessmentResults {
        session_id: session_id.to_string(),
        sri,
        interpretation,
        recommendations,
        calculated_at: clock.now(),
    })
}

/// One score per catalog instrument with a non-zero raw total, in catalog
/// order.
pub fn scale_scores(responses: &[Response], overrides: Option<&NormativeData>) -> Vec<ScaleScore> {
    all_instruments()
        .filter_map(|instrument| {
            let raw = instrument.raw_score(responses).total;
            if raw <= 0 {
                return None;
            }
            let id = instrument.id();
            let reference = norms::resolve(norms::scale_norm_key(id), overrides)
                .or_else(|| norms::resolve(id, overrides))
                .unwrap_or(UNIT_REFERENCE);
            let z_score = scoring::z_score(f64::from(raw), reference.mean, reference.sd);
            Some(ScaleScore {
                scale_id: id.to_string(),
                raw_score: raw,
                z_score,
                percentile: scoring::percentile(z_score).clamp(0.0, 100.0).round(),
            })
        })
        .collect()
}
