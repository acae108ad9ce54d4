use super::*;

fn t() -> ThresholdProfile {
    ThresholdProfile::default_v1()
}

#[test]
fn test_classification_carries_percentile() {
    let c = classify_performance_level(8.3);
    assert_eq!(c.level, PerformanceLevel::Excellent);
    assert_eq!(c.description, "Top 15% of performers");
    assert_eq!(c.percentile, 85);

    let c = classify_performance_level(7.0);
    assert_eq!(c.level, PerformanceLevel::Strong);
}

#[test]
fn test_dominant_traits_in_skill_order() {
    let s = ScoreSet::new(9, 8, 7, 8, 9).unwrap();
    assert_eq!(
        dominant_traits(&s, &t()),
        vec!["Detail-Oriented", "High-Output", "Articulate", "Proactive"]
    );

    let s = ScoreSet::uniform(7).unwrap();
    assert_eq!(dominant_traits(&s, &t()), vec![BALANCED_PERFORMER]);
}

#[test]
fn test_patterns() {
    let s = ScoreSet::new(9, 8, 7, 8, 9).unwrap();
    assert_eq!(
        detect_patterns(&s, &t()),
        vec![
            Pattern::ConsistentHighPerformer,
            Pattern::LeadershipPotential,
            Pattern::QualityFocused,
        ]
    );

    let s = ScoreSet::new(5, 5, 8, 8, 5).unwrap();
    assert_eq!(detect_patterns(&s, &t()), vec![Pattern::TeamPlayer]);

    let s = ScoreSet::uniform(5).unwrap();
    assert_eq!(
        detect_patterns(&s, &t()),
        vec![Pattern::StandardPerformancePattern]
    );
}

#[test]
fn test_ai_classification() {
    let s = ScoreSet::uniform(9).unwrap();
    assert_eq!(
        ai_classification(&s, 9.0, &t()),
        vec![
            AiClassification::HighPotentialEmployee,
            AiClassification::WellRoundedPerformer,
            AiClassification::SelfStarter,
        ]
    );

    let s = ScoreSet::uniform(5).unwrap();
    assert_eq!(
        ai_classification(&s, 5.0, &t()),
        vec![AiClassification::StandardPerformer]
    );
}

#[test]
fn test_stability() {
    let s = ScoreSet::new(9, 8, 7, 8, 9).unwrap();
    assert_eq!(stability_score(&s), 9.25);
    assert_eq!(stability_score(&ScoreSet::uniform(4).unwrap()), 10.0);
}

#[test]
fn test_serialized_labels() {
    let s = ScoreSet::new(5, 5, 8, 8, 5).unwrap();
    let out = run_stage2(&s, 6.05, &t());
    let json = serde_json::to_value(&out).unwrap();
    assert_eq!(json["performance_level"]["level"], "Good");
    assert_eq!(json["detected_patterns"][0], "Team Player");
    assert_eq!(json["dominant_traits"][1], "Articulate");
}
