use jiff::Timestamp;
use sri_core::models::demographics::Demographics;
use sri_core::models::response::Response;
use sri_core::models::results::{AssessmentResults, DimensionScores, SriLevel, SriResult};
use sri_core::models::session::{AssessmentSession, AssessmentType};
use sri_export::csv::{BOM, HEADERS, to_csv};
use sri_export::error::ExportError;
use sri_export::export::{anonymized_id, export_all, export_session, to_json};

fn at(second: i64) -> Timestamp {
    Timestamp::from_second(1_700_000_000 + second).unwrap()
}

fn results(id: &str, total_score: u8, level: SriLevel) -> AssessmentResults {
    AssessmentResults {
        session_id: id.to_string(),
        sri: SriResult {
            total_score,
            z_score: 0.3,
            percentile: 61.8,
            level,
            dimension_scores: DimensionScores {
                sos_reversed: 1.23456,
                sex_guilt: -0.5,
                sexual_shame: 2.0,
                sis_over_ses: 0.999,
            },
            scale_scores: vec![],
        },
        interpretation: vec!["text".to_string()],
        recommendations: vec![],
        calculated_at: at(100),
    }
}

fn session(id: &str, start: i64, completed: bool) -> AssessmentSession {
    let demographics = Demographics {
        age: "2".to_string(),
        gender: "1".to_string(),
        relationship_status: "3".to_string(),
        sexual_activity: "4".to_string(),
        religious_cultural: Some("5".to_string()),
        consent_to_participate: true,
    };
    let mut session =
        AssessmentSession::start(id, AssessmentType::Quick, demographics, at(start)).unwrap();
    session
        .record_responses(vec![
            Response::new("sos_1", 2, at(start + 1)),
            Response::new("ks_3", 4, at(start + 2)),
            Response::new("sos_1", 5, at(start + 3)),
        ])
        .unwrap();
    if completed {
        session
            .complete(results(id, 62, SriLevel::High), at(start + 60))
            .unwrap();
    }
    session
}

#[test]
fn anonymized_id_is_short_stable_hash() {
    let id = anonymized_id("session_1700000000000_abc123def");
    assert_eq!(id, "ba02f75b");
    assert_eq!(id, anonymized_id("session_1700000000000_abc123def"));
    assert_ne!(anonymized_id("session_1"), anonymized_id("session_2"));
}

#[test]
fn export_strips_identifying_fields() {
    let data = export_session(&session("session_a", 0, true)).unwrap();
    assert_eq!(data.session_id.len(), 8);
    assert_ne!(data.session_id, "session_a");
    assert_eq!(data.timestamp, "2023-11-14T22:13:20Z");
    assert_eq!(data.kind, AssessmentType::Quick);
    assert!(data.demographics.consent_to_participate);
    assert_eq!(data.results.sri_score, 62);
    assert_eq!(data.results.sri_level, SriLevel::High);

    let json = serde_json::to_value(&data).unwrap();
    assert!(json["demographics"].get("religiousCultural").is_none());
    assert_eq!(json["type"], "quick");
    assert_eq!(json["results"]["sriLevel"], "high");
}

#[test]
fn later_answers_win_in_response_map() {
    let data = export_session(&session("s", 0, true)).unwrap();
    assert_eq!(data.responses.len(), 2);
    assert_eq!(data.responses["sos_1"], 5);
    assert_eq!(data.responses["ks_3"], 4);
}

#[test]
fn incomplete_session_is_not_exported() {
    assert!(export_session(&session("s", 0, false)).is_none());
}

#[test]
fn export_all_keeps_completed_newest_first() {
    let sessions = vec![
        session("old", 0, true),
        session("open", 50, false),
        session("new", 100, true),
    ];
    let exports = export_all(&sessions);
    assert_eq!(exports.len(), 2);
    assert_eq!(exports[0].session_id, anonymized_id("new"));
    assert_eq!(exports[1].session_id, anonymized_id("old"));
}

#[test]
fn json_export_is_an_array() {
    let exports = export_all(&[session("a", 0, true)]);
    let json = to_json(&exports).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value.as_array().unwrap().len(), 1);
    assert_eq!(value[0]["results"]["sriScore"], 62);
}

#[test]
fn csv_has_bom_headers_and_quoted_rows() {
    let exports = export_all(&[session("a", 0, true), session("b", 10, true)]);
    let csv = to_csv(&exports).unwrap();

    assert!(csv.starts_with(BOM));
    let lines: Vec<&str> = csv.trim_start_matches(BOM).lines().collect();
    assert_eq!(lines.len(), 3);
    assert_eq!(lines[0].split(',').count(), HEADERS.len());
    assert!(lines[0].starts_with("\"Session ID\",\"Timestamp\""));

    let expected_tail = "\"62\",\"high\",\"1.23\",\"-0.50\",\"2.00\",\"1.00\"";
    assert!(lines[1].ends_with(expected_tail), "{}", lines[1]);
    assert!(lines[1].contains("\"Quick\""));
    assert!(lines[1].starts_with(&format!("\"{}\"", anonymized_id("b"))));
}

#[test]
fn csv_escapes_embedded_quotes() {
    let mut exports = export_all(&[session("a", 0, true)]);
    exports[0].demographics.gender = "say \"no\"".to_string();
    let csv = to_csv(&exports).unwrap();
    assert!(csv.contains("\"say \"\"no\"\"\""));
}

#[test]
fn empty_csv_export_is_an_error() {
    assert!(matches!(to_csv(&[]), Err(ExportError::Empty)));
}
