use super::*;

#[test]
fn test_confidence_tiers() {
    let very_high = confidence_score(&ScoreSet::new(9, 8, 7, 8, 9).unwrap());
    assert_eq!(very_high.score, 0.95);
    assert_eq!(very_high.level, "Very High");

    // std 1.47 with range 3
    let high = confidence_score(&ScoreSet::new(5, 5, 8, 8, 8).unwrap());
    assert_eq!(high.score, 0.85);

    // std 1.26 but range 4 misses the top tier
    let high = confidence_score(&ScoreSet::new(5, 9, 7, 7, 7).unwrap());
    assert_eq!(high.score, 0.85);

    // std 1.6 with range 5
    let medium = confidence_score(&ScoreSet::new(4, 9, 7, 7, 7).unwrap());
    assert_eq!(medium.score, 0.75);
    assert_eq!(medium.reason, "Moderate score variation");

    let low = confidence_score(&ScoreSet::new(1, 10, 10, 10, 10).unwrap());
    assert_eq!(low.score, 0.65);
    assert_eq!(low.level, "Low");
}
