use serde::Serialize;

use crate::model::scores::{ScoreSet, round_to};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ScoreDistribution {
    pub excellent_scores: usize,
    pub good_scores: usize,
    pub average_scores: usize,
    pub poor_scores: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct BasicAnalysis {
    pub overall_score: f64,
    pub weighted_score: f64,
    pub simple_average: f64,
    pub score_consistency: f64,
    pub score_distribution: ScoreDistribution,
    pub detailed_scores: ScoreSet,
}

pub fn weighted_score(scores: &ScoreSet) -> f64 {
    scores
        .iter()
        .map(|(skill, value)| value as f64 * skill.weight())
        .sum()
}

pub fn score_distribution(scores: &ScoreSet) -> ScoreDistribution {
    let mut dist = ScoreDistribution {
        excellent_scores: 0,
        good_scores: 0,
        average_scores: 0,
        poor_scores: 0,
    };
    for (_, value) in scores.iter() {
        match value {
            9.. => dist.excellent_scores += 1,
            7..=8 => dist.good_scores += 1,
            5..=6 => dist.average_scores += 1,
            _ => dist.poor_scores += 1,
        }
    }
    dist
}

pub fn run_stage1(scores: &ScoreSet) -> BasicAnalysis {
    let weighted = round_to(weighted_score(scores), 2);
    BasicAnalysis {
        overall_score: weighted,
        weighted_score: weighted,
        simple_average: round_to(scores.mean(), 2),
        score_consistency: round_to(scores.std_dev(), 2),
        score_distribution: score_distribution(scores),
        detailed_scores: *scores,
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage1_basic.rs"]
mod tests;
