use serde::Serialize;

use crate::model::scores::{ScoreSet, round_to};
use crate::model::thresholds::{GROWTH_TIERS, GrowthTier, ThresholdProfile};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GrowthPotential {
    pub level: &'static str,
    pub timeline: &'static str,
    pub recommendation: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PromotionReadiness {
    pub ready: bool,
    pub timeline: &'static str,
    pub confidence: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PerformanceTrajectory {
    pub trend: &'static str,
    pub momentum: &'static str,
    pub outlook: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DevelopmentTimeline {
    pub estimated_timeline: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct PredictiveInsights {
    pub growth_potential: GrowthPotential,
    pub promotion_readiness: PromotionReadiness,
    pub performance_trajectory: PerformanceTrajectory,
    pub development_timeline: DevelopmentTimeline,
    pub predicted_next_score: f64,
}

fn tier_matches(tier: &GrowthTier, mean: f64, std: f64) -> bool {
    mean >= tier.min_mean && tier.max_std.is_none_or(|max| std <= max)
}

pub fn predict_growth_potential(scores: &ScoreSet) -> GrowthPotential {
    let mean = scores.mean();
    let std = scores.std_dev();
    let tier = GROWTH_TIERS
        .iter()
        .find(|t| tier_matches(t, mean, std))
        .unwrap_or(&GROWTH_TIERS[GROWTH_TIERS.len() - 1]);
    GrowthPotential {
        level: tier.level,
        timeline: tier.timeline,
        recommendation: tier.recommendation,
    }
}

pub fn readiness_score(scores: &ScoreSet, tenure_months: u32, thresholds: &ThresholdProfile) -> f64 {
    let tenure_factor = (tenure_months as f64 / thresholds.promotion_tenure_horizon).min(1.0);
    scores.mean() * thresholds.promotion_score_weight
        + tenure_factor * thresholds.promotion_tenure_weight
}

pub fn assess_promotion_readiness(
    scores: &ScoreSet,
    tenure_months: u32,
    thresholds: &ThresholdProfile,
) -> PromotionReadiness {
    let r = readiness_score(scores, tenure_months, thresholds);
    if r >= thresholds.promotion_ready {
        PromotionReadiness {
            ready: true,
            timeline: "Immediate",
            confidence: "High",
        }
    } else if r >= thresholds.promotion_near {
        PromotionReadiness {
            ready: false,
            timeline: "6-12 months",
            confidence: "Medium",
        }
    } else {
        PromotionReadiness {
            ready: false,
            timeline: "12+ months",
            confidence: "Low",
        }
    }
}

pub fn run_stage3(
    scores: &ScoreSet,
    tenure_months: u32,
    thresholds: &ThresholdProfile,
) -> PredictiveInsights {
    PredictiveInsights {
        growth_potential: predict_growth_potential(scores),
        promotion_readiness: assess_promotion_readiness(scores, tenure_months, thresholds),
        performance_trajectory: PerformanceTrajectory {
            trend: "Stable",
            momentum: "Positive",
            outlook: "Promising",
        },
        development_timeline: DevelopmentTimeline {
            estimated_timeline: "6 months for significant improvement",
        },
        predicted_next_score: round_to(scores.mean() + thresholds.next_score_uplift, 2),
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage3_predictive.rs"]
mod tests;
