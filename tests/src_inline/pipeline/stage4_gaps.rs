use super::*;

fn t() -> ThresholdProfile {
    ThresholdProfile::default_v1()
}

#[test]
fn test_all_low_scores_are_critical() {
    let gaps = identify_critical_gaps(&ScoreSet::uniform(3).unwrap(), &t());
    assert_eq!(gaps.len(), 5);
    assert!(gaps.iter().all(|g| g.gap_severity == GapSeverity::Critical));
    let names = gaps.iter().map(|g| g.skill).collect::<Vec<_>>();
    assert_eq!(
        names,
        vec![
            "Quality Of Work",
            "Productivity",
            "Communication",
            "Initiative",
            "Teamwork",
        ]
    );
    let impacts = gaps.iter().map(|g| g.business_impact).collect::<Vec<_>>();
    assert_eq!(impacts, vec![1.75, 1.4, 1.4, 1.4, 1.05]);
}

#[test]
fn test_gaps_only_for_low_scores() {
    let s = ScoreSet::new(5, 9, 4, 6, 8).unwrap();
    let gaps = identify_critical_gaps(&s, &t());
    assert_eq!(gaps.len(), 2);
    assert_eq!(gaps[0].skill, "Quality Of Work");
    assert_eq!(gaps[0].gap_severity, GapSeverity::Significant);
    assert_eq!(gaps[0].business_impact, 1.25);
    assert_eq!(gaps[1].skill, "Teamwork");
    assert_eq!(gaps[1].gap_severity, GapSeverity::Critical);
    assert_eq!(gaps[1].business_impact, 0.9);
    assert_eq!(
        gaps[1].recommended_action,
        "Team building exercises and collaborative project assignments"
    );
}

#[test]
fn test_no_gaps_for_strong_scores() {
    let s = ScoreSet::new(9, 8, 7, 8, 9).unwrap();
    assert!(identify_critical_gaps(&s, &t()).is_empty());
}

#[test]
fn test_top_three_priorities() {
    let s = ScoreSet::new(9, 8, 7, 8, 9).unwrap();
    let p = prioritize_improvement_areas(&s, &t());
    assert_eq!(p.len(), 3);
    assert_eq!(p[0].skill, Skill::Productivity);
    assert_eq!(p[0].priority_score, 0.36);
    assert_eq!(p[1].skill, Skill::Communication);
    assert_eq!(p[2].skill, Skill::Teamwork);
    assert_eq!(p[2].priority_score, 0.315);
    assert_eq!(p[2].current_level, SkillLevel::Proficient);
    assert_eq!(p[2].target_level, TargetLevel::AdvanceToNextLevel);
    assert_eq!(p[2].improvement_urgency, Urgency::Medium);
    assert!(p.windows(2).all(|w| w[0].priority_score >= w[1].priority_score));
}

#[test]
fn test_priority_serializes_skill_key() {
    let out = run_stage4(&ScoreSet::uniform(3).unwrap(), &t());
    let json = serde_json::to_value(&out).unwrap();
    assert_eq!(json["improvement_priority"][0]["skill"], "quality_of_work");
    assert_eq!(json["improvement_priority"][0]["priority_score"], 1.75);
    assert_eq!(json["critical_skill_gaps"][0]["gap_severity"], "Critical");
    assert_eq!(json["gap_impact_analysis"]["overall_impact"], "Moderate");
}
