use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum PerformanceLevel {
    Exceptional,
    Excellent,
    Strong,
    Good,
    Developing,
    #[serde(rename = "Needs Support")]
    NeedsSupport,
}

/// Lower bounds (inclusive), highest band first.
const BANDS: [(f64, PerformanceLevel); 5] = [
    (9.0, PerformanceLevel::Exceptional),
    (8.0, PerformanceLevel::Excellent),
    (7.0, PerformanceLevel::Strong),
    (6.0, PerformanceLevel::Good),
    (5.0, PerformanceLevel::Developing),
];

impl PerformanceLevel {
    pub fn from_score(score: f64) -> Self {
        for &(lower, level) in &BANDS {
            if score >= lower {
                return level;
            }
        }
        PerformanceLevel::NeedsSupport
    }

    pub fn name(self) -> &'static str {
        match self {
            PerformanceLevel::Exceptional => "Exceptional",
            PerformanceLevel::Excellent => "Excellent",
            PerformanceLevel::Strong => "Strong",
            PerformanceLevel::Good => "Good",
            PerformanceLevel::Developing => "Developing",
            PerformanceLevel::NeedsSupport => "Needs Support",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            PerformanceLevel::Exceptional => "Top 5% of performers",
            PerformanceLevel::Excellent => "Top 15% of performers",
            PerformanceLevel::Strong => "Above average performer",
            PerformanceLevel::Good => "Meets all expectations",
            PerformanceLevel::Developing => "Meets basic expectations",
            PerformanceLevel::NeedsSupport => "Below expectations",
        }
    }
}

const PERCENTILES: [(i64, u8); 8] = [
    (10, 99),
    (9, 95),
    (8, 85),
    (7, 70),
    (6, 50),
    (5, 30),
    (4, 15),
    (3, 5),
];

pub const DEFAULT_PERCENTILE: u8 = 50;

/// Percentile for a score rounded half-to-even; unknown keys map to the median.
pub fn percentile(score: f64) -> u8 {
    let key = score.round_ties_even() as i64;
    PERCENTILES
        .iter()
        .find(|(k, _)| *k == key)
        .map(|&(_, p)| p)
        .unwrap_or(DEFAULT_PERCENTILE)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SkillLevel {
    Expert,
    Advanced,
    Proficient,
    Competent,
    Developing,
    Beginner,
}

impl SkillLevel {
    pub fn from_score(score: u8) -> Self {
        match score {
            9.. => SkillLevel::Expert,
            8 => SkillLevel::Advanced,
            7 => SkillLevel::Proficient,
            6 => SkillLevel::Competent,
            5 => SkillLevel::Developing,
            _ => SkillLevel::Beginner,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum TargetLevel {
    #[serde(rename = "Maintain Excellence")]
    MaintainExcellence,
    #[serde(rename = "Reach Expert Level")]
    ReachExpertLevel,
    #[serde(rename = "Advance to Next Level")]
    AdvanceToNextLevel,
    #[serde(rename = "Become Proficient")]
    BecomeProficient,
    #[serde(rename = "Reach Competency")]
    ReachCompetency,
}

impl TargetLevel {
    pub fn from_score(score: u8) -> Self {
        match score {
            9.. => TargetLevel::MaintainExcellence,
            8 => TargetLevel::ReachExpertLevel,
            7 => TargetLevel::AdvanceToNextLevel,
            6 => TargetLevel::BecomeProficient,
            _ => TargetLevel::ReachCompetency,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            TargetLevel::MaintainExcellence => "Maintain Excellence",
            TargetLevel::ReachExpertLevel => "Reach Expert Level",
            TargetLevel::AdvanceToNextLevel => "Advance to Next Level",
            TargetLevel::BecomeProficient => "Become Proficient",
            TargetLevel::ReachCompetency => "Reach Competency",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Urgency {
    High,
    Medium,
    Low,
}

impl Urgency {
    pub fn from_score(score: u8) -> Self {
        if score <= 5 {
            Urgency::High
        } else if score <= 7 {
            Urgency::Medium
        } else {
            Urgency::Low
        }
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/model/levels.rs"]
mod tests;
