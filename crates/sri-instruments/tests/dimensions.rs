use std::collections::BTreeMap;

use jiff::Timestamp;
use sri_core::models::norms::{NormativeData, Reference};
use sri_core::models::response::Response;
use sri_instruments::dimensions::{ItemGroup, dimension_scores, group_score, sis_ses_scores};
use sri_instruments::get_instrument;

fn answer(question_id: &str, value: i32) -> Response {
    Response::new(question_id, value, Timestamp::UNIX_EPOCH)
}

fn answer_all(scale_ids: &[&str], value: i32) -> Vec<Response> {
    scale_ids
        .iter()
        .flat_map(|id| get_instrument(id).unwrap().questions().iter())
        .map(|q| answer(&q.id, value))
        .collect()
}

fn close(actual: f64, expected: f64) -> bool {
    (actual - expected).abs() < 1e-9
}

#[test]
fn quick_standard_bundle_dimensions() {
    let responses = answer_all(
        &["sis_ses_sf", "mosher_guilt", "kiss9_shame", "sos_screening"],
        3,
    );
    let d = dimension_scores(&responses, None);
    assert!(close(d.sos_reversed, (15.0 - 15.3) / 4.6));
    assert!(close(d.sex_guilt, (30.0 - 25.6) / 7.8));
    assert!(close(d.sexual_shame, (27.0 - 18.7) / 6.4));
    let expected = (30.0 - 35.2) / 8.9 - (12.0 - 16.8) / 3.7;
    assert!(close(d.sis_over_ses, expected));
}

#[test]
fn full_length_groups_use_full_norms() {
    let responses = answer_all(&["sos_full", "mosher_guilt_full"], 3);
    let d = dimension_scores(&responses, None);
    assert!(close(d.sos_reversed, 0.0));
    assert!(close(d.sex_guilt, (84.0 - 62.7) / 19.2));
}

#[test]
fn excitation_only_breakdown() {
    let responses: Vec<Response> = (1..=4).map(|i| answer(&format!("ses_{i}"), 5)).collect();
    let scores = sis_ses_scores(&responses, None);
    assert_eq!(scores.ses_raw, 20);
    assert_eq!(scores.ses_items, 4);
    assert_eq!(scores.sis_raw, 0);
    assert!(close(scores.ses_z, (20.0 - 16.8) / 3.7));
    assert!(close(scores.sis_z, (0.0 - 35.2) / 8.9));
    assert!(close(scores.difference(), scores.sis_z - scores.ses_z));
}

#[test]
fn full_sis_ses_switches_norms_per_subscale() {
    let responses = answer_all(&["sis_ses_full"], 2);
    let scores = sis_ses_scores(&responses, None);
    assert_eq!(scores.ses_items, 16);
    assert_eq!(scores.sis_items, 29);
    assert!(close(scores.ses_z, (32.0 - 42.8) / 9.2));
    assert!(close(scores.sis_z, (58.0 - 87.5) / 18.3));
}

#[test]
fn teen_items_feed_shame_and_cognition() {
    let responses = answer_all(
        &["teen_sexual_attitudes", "sexual_cognition", "sis_ses_adapted"],
        3,
    );
    let d = dimension_scores(&responses, None);
    assert!(close(d.sexual_shame, (30.0 - 25.0) / 6.2));
    assert!(close(d.sis_over_ses, (54.0 - 28.5) / 7.1));
    assert_eq!(d.sos_reversed, 0.0);
    assert_eq!(d.sex_guilt, 0.0);
}

#[test]
fn shame_items_take_precedence_over_teen_items() {
    let mut responses = answer_all(&["kiss9_shame"], 1);
    responses.extend(answer_all(&["teen_sexual_attitudes"], 5));
    let d = dimension_scores(&responses, None);
    assert!(close(d.sexual_shame, (9.0 - 18.7) / 6.4));
}

#[test]
fn empty_groups_score_zero() {
    let d = dimension_scores(&[answer("bsas_perm_1", 3)], None);
    assert_eq!(d.sos_reversed, 0.0);
    assert_eq!(d.sex_guilt, 0.0);
    assert_eq!(d.sexual_shame, 0.0);
}

#[test]
fn invalid_values_do_not_count_toward_group() {
    let responses = vec![answer("sos_1", 4), answer("sos_2", 42), answer("sos_99", 3)];
    let score = group_score(&responses, ItemGroup::Sos);
    assert_eq!(score.total, 4);
    assert_eq!(score.valid_items, 1);
    assert_eq!(score.invalid.len(), 2);
}

#[test]
fn overrides_replace_default_references() {
    let mut norms = NormativeData {
        sample_size: 50,
        means: BTreeMap::new(),
        standard_deviations: BTreeMap::new(),
        updated_at: Timestamp::UNIX_EPOCH,
    };
    norms.insert("sos_screening", Reference::new(15.0, 5.0));

    let responses = answer_all(&["sos_screening", "kiss9_shame"], 3);
    let d = dimension_scores(&responses, Some(&norms));
    assert_eq!(d.sos_reversed, 0.0);
    assert!(close(d.sexual_shame, (27.0 - 18.7) / 6.4));
}

#[test]
fn zero_sd_override_scores_zero() {
    let mut norms = NormativeData {
        sample_size: 1,
        means: BTreeMap::new(),
        standard_deviations: BTreeMap::new(),
        updated_at: Timestamp::UNIX_EPOCH,
    };
    norms.insert("kiss9_shame", Reference::new(20.0, 0.0));
    let d = dimension_scores(&answer_all(&["kiss9_shame"], 5), Some(&norms));
    assert_eq!(d.sexual_shame, 0.0);
}
