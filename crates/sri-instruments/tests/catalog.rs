use std::collections::HashSet;

use sri_instruments::scale::QuestionType;
use sri_instruments::{all_instruments, all_scale_ids, find_question, get_instrument, get_scale};

#[test]
fn catalog_has_eleven_instruments_in_order() {
    let ids: Vec<&str> = all_instruments().map(|i| i.id()).collect();
    assert_eq!(
        ids,
        vec![
            "sis_ses_sf",
            "sis_ses_full",
            "mosher_guilt",
            "mosher_guilt_full",
            "kiss9_shame",
            "sos_screening",
            "sos_full",
            "bsas_brief",
            "teen_sexual_attitudes",
            "sexual_cognition",
            "sis_ses_adapted",
        ]
    );
    assert_eq!(all_scale_ids().len(), 11);
}

#[test]
fn item_counts_match_instrument_definitions() {
    let expected = [
        ("sis_ses_sf", 14),
        ("sis_ses_full", 45),
        ("mosher_guilt", 10),
        ("mosher_guilt_full", 28),
        ("kiss9_shame", 9),
        ("sos_screening", 5),
        ("sos_full", 21),
        ("bsas_brief", 23),
        ("teen_sexual_attitudes", 10),
        ("sexual_cognition", 10),
        ("sis_ses_adapted", 8),
    ];
    for (id, count) in expected {
        let scale = get_scale(id).unwrap();
        assert_eq!(scale.questions.len(), count, "{id}");
    }
}

#[test]
fn every_question_belongs_to_its_scale() {
    let ids = all_scale_ids();
    for instrument in all_instruments() {
        let scale = instrument.scale();
        assert!(!scale.questions.is_empty(), "{} has no questions", scale.id);
        for question in &scale.questions {
            assert_eq!(question.scale, scale.id, "{}", question.id);
            assert!(ids.contains(&question.scale));
        }
    }
}

#[test]
fn question_ids_are_unique_within_each_scale() {
    for instrument in all_instruments() {
        let mut seen = HashSet::new();
        for question in instrument.questions() {
            assert!(
                seen.insert(question.id.as_str()),
                "duplicate {} in {}",
                question.id,
                instrument.id()
            );
        }
    }
}

#[test]
fn scoring_range_follows_item_count() {
    for instrument in all_instruments() {
        let scale = instrument.scale();
        let n = scale.questions.len() as i32;
        assert_eq!(scale.scoring.range, (n, 5 * n), "{}", scale.id);
    }
}

#[test]
fn reverse_items_are_where_declared() {
    let reversed = |id: &str| -> Vec<String> {
        get_scale(id)
            .unwrap()
            .questions
            .iter()
            .filter(|q| q.reverse)
            .map(|q| q.id.clone())
            .collect()
    };
    assert_eq!(reversed("teen_sexual_attitudes"), vec!["tsa_3"]);
    assert_eq!(reversed("sexual_cognition"), vec!["sc_2", "sc_9"]);
    assert_eq!(reversed("sis_ses_sf"), Vec::<String>::new());
    assert_eq!(reversed("bsas_brief").len(), 7);
}

#[test]
fn shame_items_use_frequency_options() {
    let scale = get_scale("kiss9_shame").unwrap();
    for question in &scale.questions {
        assert_eq!(question.kind, QuestionType::Likert);
        assert_eq!(question.options[0].label, "Never");
        assert_eq!(question.options.len(), 5);
    }
}

#[test]
fn full_variants_embed_short_items() {
    let full = get_instrument("sis_ses_full").unwrap();
    for question in get_instrument("sis_ses_sf").unwrap().questions() {
        let embedded = full.question(&question.id).unwrap();
        assert_eq!(embedded.text, question.text);
        assert_eq!(embedded.scale, "sis_ses_full");
    }

    let guilt_full = get_instrument("mosher_guilt_full").unwrap();
    assert!(guilt_full.question("mg_1").is_some());
    assert!(guilt_full.question("mg_28").is_some());
}

#[test]
fn find_question_prefers_first_registration() {
    assert_eq!(find_question("ses_1").unwrap().scale, "sis_ses_sf");
    assert_eq!(find_question("sos_12").unwrap().scale, "sos_full");
    assert!(find_question("nope_1").is_none());
}

#[test]
fn unknown_instrument_is_none() {
    assert!(get_instrument("beck_depression").is_none());
    assert!(get_scale("").is_none());
}

#[test]
fn scale_serializes_with_wire_field_names() {
    let json = serde_json::to_value(get_scale("teen_sexual_attitudes").unwrap()).unwrap();
    assert_eq!(json["scoring"]["type"], "sum");
    assert_eq!(json["scoring"]["range"], serde_json::json!([10, 50]));
    assert_eq!(json["questions"][2]["id"], "tsa_3");
    assert_eq!(json["questions"][2]["reverse"], true);
    assert_eq!(json["questions"][0]["type"], "likert");
}
