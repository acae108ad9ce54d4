pub mod confidence;
pub mod stage1_basic;
pub mod stage2_patterns;
pub mod stage3_predictive;
pub mod stage4_gaps;
pub mod stage5_benchmark;
pub mod stage6_trajectory;
pub mod stage7_risk;

use chrono::{Local, NaiveDateTime};
use tracing::{debug, info};

use crate::model::scores::ScoreSet;
use crate::model::thresholds::ThresholdProfile;
use crate::report::{EvaluationReport, MODEL_VERSION};

use confidence::confidence_score;
use stage1_basic::run_stage1;
use stage2_patterns::run_stage2;
use stage3_predictive::run_stage3;
use stage4_gaps::run_stage4;
use stage5_benchmark::run_stage5;
use stage6_trajectory::run_stage6;
use stage7_risk::run_stage7;

pub const DEFAULT_TENURE_MONTHS: u32 = 12;

/// Stateless; share one instance freely across threads.
#[derive(Debug, Clone, Default)]
pub struct Evaluator {
    thresholds: ThresholdProfile,
}

impl Evaluator {
    pub fn new(thresholds: ThresholdProfile) -> Self {
        Self { thresholds }
    }

    pub fn thresholds(&self) -> &ThresholdProfile {
        &self.thresholds
    }

    pub fn evaluate(
        &self,
        scores: &ScoreSet,
        tenure_months: u32,
        previous: Option<&[ScoreSet]>,
    ) -> EvaluationReport {
        self.evaluate_at(scores, tenure_months, previous, Local::now().naive_local())
    }

    /// Same as [`Evaluator::evaluate`] with a caller-supplied timestamp.
    pub fn evaluate_at(
        &self,
        scores: &ScoreSet,
        tenure_months: u32,
        previous: Option<&[ScoreSet]>,
        timestamp: NaiveDateTime,
    ) -> EvaluationReport {
        let t = &self.thresholds;

        let basic = run_stage1(scores);
        debug!(overall = basic.overall_score, "basic scores computed");

        let patterns = run_stage2(scores, basic.overall_score, t);
        let predictive = run_stage3(scores, tenure_months, t);
        let gaps = run_stage4(scores, t);
        debug!(
            gaps = gaps.critical_skill_gaps.len(),
            "gap analysis computed"
        );
        let benchmarking = run_stage5(scores, tenure_months, t);
        let growth = run_stage6(previous, t);
        let risk = run_stage7();
        let analysis_confidence = confidence_score(scores);

        info!(
            overall = basic.overall_score,
            level = patterns.performance_level.level.name(),
            tenure_months,
            confidence = analysis_confidence.score,
            "evaluation complete"
        );

        EvaluationReport {
            basic,
            patterns,
            predictive,
            gaps,
            benchmarking,
            growth,
            risk,
            evaluation_timestamp: timestamp,
            ai_model_version: MODEL_VERSION,
            analysis_confidence,
        }
    }
}

/// Evaluates with the default threshold profile.
pub fn evaluate(
    scores: &ScoreSet,
    tenure_months: u32,
    previous: Option<&[ScoreSet]>,
) -> EvaluationReport {
    Evaluator::default().evaluate(scores, tenure_months, previous)
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/evaluator.rs"]
mod tests;
