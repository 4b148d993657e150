use sri_core::models::demographics::Demographics;
use sri_core::models::session::AssessmentType;
use sri_instruments::selection::{UserGroup, question_ids, select_scales, user_group};

fn demographics(age: &str, sexual_activity: &str) -> Demographics {
    Demographics {
        age: age.to_string(),
        gender: "2".to_string(),
        relationship_status: "1".to_string(),
        sexual_activity: sexual_activity.to_string(),
        religious_cultural: None,
        consent_to_participate: true,
    }
}

#[test]
fn minor_gets_teen_bundle() {
    let demo = demographics("0", "3");
    assert_eq!(user_group(&demo), UserGroup::Teen);
    assert_eq!(
        select_scales(&demo, AssessmentType::Quick),
        vec![
            "teen_sexual_attitudes",
            "sexual_cognition",
            "sis_ses_adapted",
            "sos_screening"
        ]
    );
    assert_eq!(
        select_scales(&demo, AssessmentType::Full),
        vec![
            "teen_sexual_attitudes",
            "sexual_cognition",
            "sis_ses_adapted",
            "sos_full",
            "kiss9_shame"
        ]
    );
}

#[test]
fn age_takes_precedence_over_inexperience() {
    let demo = demographics("0", "0");
    assert_eq!(user_group(&demo), UserGroup::Teen);
    assert_eq!(select_scales(&demo, AssessmentType::Quick)[0], "teen_sexual_attitudes");
}

#[test]
fn inexperienced_adult_gets_adapted_bundle() {
    let demo = demographics("2", "0");
    assert_eq!(user_group(&demo), UserGroup::Inexperienced);
    assert_eq!(
        select_scales(&demo, AssessmentType::Quick),
        vec![
            "sexual_cognition",
            "sis_ses_adapted",
            "mosher_guilt",
            "kiss9_shame",
            "sos_screening"
        ]
    );
    assert_eq!(
        select_scales(&demo, AssessmentType::Full),
        vec![
            "sexual_cognition",
            "sis_ses_adapted",
            "mosher_guilt_full",
            "kiss9_shame",
            "sos_full",
            "bsas_brief"
        ]
    );
}

#[test]
fn low_activity_uses_standard_bundles() {
    let demo = demographics("3", "1");
    assert_eq!(user_group(&demo), UserGroup::LowActivity);
    assert_eq!(
        select_scales(&demo, AssessmentType::Quick),
        vec!["sis_ses_sf", "mosher_guilt", "kiss9_shame", "sos_screening"]
    );
    assert_eq!(
        select_scales(&demo, AssessmentType::Full),
        vec![
            "sis_ses_full",
            "mosher_guilt_full",
            "kiss9_shame",
            "sos_full",
            "bsas_brief"
        ]
    );
}

#[test]
fn unparseable_codes_fall_through_to_standard() {
    let demo = demographics("unknown", "");
    assert_eq!(user_group(&demo), UserGroup::Standard);
    assert_eq!(
        select_scales(&demo, AssessmentType::Quick),
        vec!["sis_ses_sf", "mosher_guilt", "kiss9_shame", "sos_screening"]
    );
}

#[test]
fn selection_is_deterministic() {
    let demo = demographics("1", "4");
    for tier in [AssessmentType::Quick, AssessmentType::Full] {
        assert_eq!(select_scales(&demo, tier), select_scales(&demo, tier));
    }
}

#[test]
fn every_selected_scale_exists() {
    for age in ["0", "1", "5"] {
        for activity in ["0", "1", "2", "5"] {
            for tier in [AssessmentType::Quick, AssessmentType::Full] {
                for id in select_scales(&demographics(age, activity), tier) {
                    assert!(sri_instruments::get_instrument(id).is_some(), "{id}");
                }
            }
        }
    }
}

#[test]
fn question_ids_flatten_in_bundle_order() {
    let ids = question_ids(&["sos_screening", "missing", "sis_ses_adapted"]);
    assert_eq!(ids.len(), 13);
    assert_eq!(ids[0], "sos_1");
    assert_eq!(ids[5], "sisa_1");
}

#[test]
fn groups_have_descriptions() {
    for group in [
        UserGroup::Teen,
        UserGroup::Inexperienced,
        UserGroup::LowActivity,
        UserGroup::Standard,
    ] {
        assert!(!group.description().is_empty());
    }
}
