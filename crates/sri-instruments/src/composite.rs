use sri_core::models::results::{DimensionScores, SriLevel, SriResult};

use crate::scoring;

/// Combine the four dimensions into the composite index. Scale scores are
/// left empty for the caller to fill in.
pub fn synthesize(dimension_scores: DimensionScores) -> SriResult {
    let z_score = dimension_scores.mean();
    let percentile = scoring::percentile(z_score);
    let total_score = total_score(percentile);

    SriResult {
        total_score,
        z_score,
        percentile,
        level: SriLevel::from_total_score(total_score),
        dimension_scores,
        scale_scores: Vec::new(),
    }
}

/// Rounded and clamped to 0–100. A NaN percentile scores 0.
pub fn total_score(percentile: f64) -> u8 {
    if percentile.is_nan() {
        return 0;
    }
    percentile.clamp(0.0, 100.0).round() as u8
}
