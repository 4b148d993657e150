use sri_core::models::results::{DimensionScores, SriLevel};

#[test]
fn levels_partition_zero_to_hundred() {
    let mut previous: Option<SriLevel> = None;
    for score in 0..=100u8 {
        let level = SriLevel::from_total_score(score);
        let (min, max) = level.bounds();
        assert!(score >= min && score < max, "{score} outside {level} bounds");

        // Exactly one band claims each score.
        let claims = SriLevel::ALL
            .iter()
            .filter(|l| {
                let (lo, hi) = l.bounds();
                score >= lo && score < hi
            })
            .count();
        assert_eq!(claims, 1);

        if let Some(prev) = previous {
            assert!(prev as u8 <= level as u8, "levels must be monotonic");
        }
        previous = Some(level);
    }
}

#[test]
fn level_boundaries() {
    assert_eq!(SriLevel::from_total_score(0), SriLevel::VeryLow);
    assert_eq!(SriLevel::from_total_score(19), SriLevel::VeryLow);
    assert_eq!(SriLevel::from_total_score(20), SriLevel::Low);
    assert_eq!(SriLevel::from_total_score(40), SriLevel::Moderate);
    assert_eq!(SriLevel::from_total_score(59), SriLevel::Moderate);
    assert_eq!(SriLevel::from_total_score(60), SriLevel::High);
    assert_eq!(SriLevel::from_total_score(80), SriLevel::VeryHigh);
    assert_eq!(SriLevel::from_total_score(100), SriLevel::VeryHigh);
}

#[test]
fn level_serializes_kebab_case() {
    assert_eq!(
        serde_json::to_string(&SriLevel::VeryHigh).unwrap(),
        "\"very-high\""
    );
    let level: SriLevel = serde_json::from_str("\"very-low\"").unwrap();
    assert_eq!(level, SriLevel::VeryLow);
}

#[test]
fn dimension_mean_is_equal_weighted() {
    let dims = DimensionScores {
        sos_reversed: 1.0,
        sex_guilt: 2.0,
        sexual_shame: -1.0,
        sis_over_ses: 2.0,
    };
    assert_eq!(dims.mean(), 1.0);
}
