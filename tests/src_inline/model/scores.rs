use super::*;

#[test]
fn test_rejects_out_of_range() {
    let err = ScoreSet::new(0, 5, 5, 5, 5).unwrap_err();
    match err {
        EvalError::OutOfRangeScore { skill, value } => {
            assert_eq!(skill, Skill::QualityOfWork);
            assert_eq!(value, 0);
        }
        other => panic!("unexpected error: {other}"),
    }

    let err = ScoreSet::new(5, 5, 5, 5, 11).unwrap_err();
    assert_eq!(err.to_string(), "initiative must be between 1 and 10");
}

#[test]
fn test_first_bad_skill_in_canonical_order_is_reported() {
    let err = ScoreSet::new(5, 5, 0, 12, 5).unwrap_err();
    assert_eq!(err.to_string(), "teamwork must be between 1 and 10");
}

#[test]
fn test_accepts_bounds() {
    assert!(ScoreSet::uniform(1).is_ok());
    assert!(ScoreSet::uniform(10).is_ok());
}

#[test]
fn test_statistics() {
    let s = ScoreSet::new(9, 8, 7, 8, 9).unwrap();
    assert!((s.mean() - 8.2).abs() < 1e-12);
    assert!((s.std_dev() - 0.56f64.sqrt()).abs() < 1e-12);
    assert_eq!(s.range(), 2);
    assert!(s.all_at_least(7));
    assert!(!s.all_at_least(8));

    let flat = ScoreSet::uniform(3).unwrap();
    assert_eq!(flat.std_dev(), 0.0);
    assert_eq!(flat.range(), 0);
}

#[test]
fn test_serializes_in_canonical_order() {
    let s = ScoreSet::new(9, 8, 7, 8, 9).unwrap();
    let json = serde_json::to_string(&s).unwrap();
    assert_eq!(
        json,
        "{\"quality_of_work\":9,\"productivity\":8,\"teamwork\":7,\"communication\":8,\"initiative\":9}"
    );
}

#[test]
fn test_deserialize_validates_and_defaults() {
    let s: ScoreSet = serde_json::from_str("{\"teamwork\":8}").unwrap();
    assert_eq!(s.get(Skill::Teamwork), 8);
    assert_eq!(s.get(Skill::QualityOfWork), 5);

    let bad: std::result::Result<ScoreSet, _> = serde_json::from_str("{\"teamwork\":0}");
    assert!(bad.is_err());
}

#[test]
fn test_round_to() {
    assert_eq!(round_to(8.299999999999999, 2), 8.3);
    assert_eq!(round_to(0.36000000000000004, 3), 0.36);
    assert_eq!(round_to(1.0499999999999998, 2), 1.05);
}
