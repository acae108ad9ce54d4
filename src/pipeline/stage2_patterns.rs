use serde::Serialize;

use crate::model::levels::{PerformanceLevel, percentile};
use crate::model::scores::{ScoreSet, round_to};
use crate::model::skills::Skill;
use crate::model::thresholds::ThresholdProfile;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LevelClassification {
    pub level: PerformanceLevel,
    pub description: &'static str,
    pub percentile: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Pattern {
    #[serde(rename = "Consistent High Performer")]
    ConsistentHighPerformer,
    #[serde(rename = "Leadership Potential")]
    LeadershipPotential,
    #[serde(rename = "Team Player")]
    TeamPlayer,
    #[serde(rename = "Quality Focused")]
    QualityFocused,
    #[serde(rename = "Standard Performance Pattern")]
    StandardPerformancePattern,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum AiClassification {
    #[serde(rename = "High-Potential Employee")]
    HighPotentialEmployee,
    #[serde(rename = "Well-Rounded Performer")]
    WellRoundedPerformer,
    #[serde(rename = "Self-Starter")]
    SelfStarter,
    #[serde(rename = "Standard Performer")]
    StandardPerformer,
}

pub const BALANCED_PERFORMER: &str = "Balanced Performer";

#[derive(Debug, Clone, Serialize)]
pub struct PatternAnalysis {
    pub performance_level: LevelClassification,
    pub dominant_traits: Vec<&'static str>,
    pub detected_patterns: Vec<Pattern>,
    pub performance_stability: f64,
    pub ai_classification: Vec<AiClassification>,
}

pub fn classify_performance_level(overall_score: f64) -> LevelClassification {
    let level = PerformanceLevel::from_score(overall_score);
    LevelClassification {
        level,
        description: level.description(),
        percentile: percentile(overall_score),
    }
}

pub fn dominant_traits(scores: &ScoreSet, thresholds: &ThresholdProfile) -> Vec<&'static str> {
    let traits = scores
        .iter()
        .filter(|&(_, v)| v >= thresholds.strength_min)
        .map(|(skill, _)| skill.trait_label())
        .collect::<Vec<_>>();
    if traits.is_empty() {
        vec![BALANCED_PERFORMER]
    } else {
        traits
    }
}

pub fn detect_patterns(scores: &ScoreSet, thresholds: &ThresholdProfile) -> Vec<Pattern> {
    let strong = |skill: Skill| scores.get(skill) >= thresholds.strength_min;
    let mut patterns = Vec::new();

    if scores.all_at_least(thresholds.consistent_min) {
        patterns.push(Pattern::ConsistentHighPerformer);
    }
    if strong(Skill::Initiative) && strong(Skill::Communication) {
        patterns.push(Pattern::LeadershipPotential);
    }
    if strong(Skill::Teamwork) && strong(Skill::Communication) {
        patterns.push(Pattern::TeamPlayer);
    }
    if scores.get(Skill::QualityOfWork) >= thresholds.quality_focus_min {
        patterns.push(Pattern::QualityFocused);
    }

    if patterns.is_empty() {
        patterns.push(Pattern::StandardPerformancePattern);
    }
    patterns
}

pub fn stability_score(scores: &ScoreSet) -> f64 {
    round_to(10.0 - scores.std_dev(), 2)
}

pub fn ai_classification(
    scores: &ScoreSet,
    overall_score: f64,
    thresholds: &ThresholdProfile,
) -> Vec<AiClassification> {
    let mut out = Vec::new();
    if overall_score >= thresholds.high_potential_overall {
        out.push(AiClassification::HighPotentialEmployee);
    }
    if scores.all_at_least(thresholds.consistent_min) {
        out.push(AiClassification::WellRoundedPerformer);
    }
    if scores.get(Skill::Initiative) >= thresholds.strength_min {
        out.push(AiClassification::SelfStarter);
    }
    if out.is_empty() {
        out.push(AiClassification::StandardPerformer);
    }
    out
}

pub fn run_stage2(
    scores: &ScoreSet,
    overall_score: f64,
    thresholds: &ThresholdProfile,
) -> PatternAnalysis {
    PatternAnalysis {
        performance_level: classify_performance_level(overall_score),
        dominant_traits: dominant_traits(scores, thresholds),
        detected_patterns: detect_patterns(scores, thresholds),
        performance_stability: stability_score(scores),
        ai_classification: ai_classification(scores, overall_score, thresholds),
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage2_patterns.rs"]
mod tests;
