use serde::Serialize;

use crate::model::scores::ScoreSet;
use crate::model::thresholds::{CONFIDENCE_TIERS, ConfidenceTier};

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AnalysisConfidence {
    pub score: f64,
    pub level: &'static str,
    pub reason: &'static str,
}

fn tier_matches(tier: &ConfidenceTier, std: f64, range: u8) -> bool {
    tier.max_std.is_none_or(|max| std <= max) && tier.max_range.is_none_or(|max| range <= max)
}

pub fn confidence_score(scores: &ScoreSet) -> AnalysisConfidence {
    let std = scores.std_dev();
    let range = scores.range();
    let tier = CONFIDENCE_TIERS
        .iter()
        .find(|t| tier_matches(t, std, range))
        .unwrap_or(&CONFIDENCE_TIERS[CONFIDENCE_TIERS.len() - 1]);
    AnalysisConfidence {
        score: tier.score,
        level: tier.level,
        reason: tier.reason,
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/confidence.rs"]
mod tests;
