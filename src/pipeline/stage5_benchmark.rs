use serde::Serialize;

use crate::model::scores::{ScoreSet, round_to};
use crate::model::thresholds::{ThresholdProfile, tenure_band};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum BenchmarkStatus {
    #[serde(rename = "Above Benchmark")]
    Above,
    #[serde(rename = "At Benchmark")]
    At,
    #[serde(rename = "Below Benchmark")]
    Below,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TenureBenchmark {
    pub tenure_group: &'static str,
    pub benchmark_score: f64,
    pub actual_score: f64,
    pub deviation: f64,
    pub status: BenchmarkStatus,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RoleBenchmark {
    pub status: &'static str,
    pub comparison: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct IndustryBenchmark {
    pub status: &'static str,
    pub insight: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CompetitivePosition {
    pub position: &'static str,
    pub differentiators: Vec<&'static str>,
}

#[derive(Debug, Clone, Serialize)]
pub struct Benchmarking {
    pub tenure_benchmark: TenureBenchmark,
    pub role_benchmark: RoleBenchmark,
    pub industry_benchmark: IndustryBenchmark,
    pub competitive_positioning: CompetitivePosition,
}

pub fn benchmark_status(deviation: f64, tolerance: f64) -> BenchmarkStatus {
    if deviation > tolerance {
        BenchmarkStatus::Above
    } else if deviation.abs() <= tolerance {
        BenchmarkStatus::At
    } else {
        BenchmarkStatus::Below
    }
}

/// Compares the unweighted mean against the reference for the tenure band.
pub fn benchmark_against_tenure(
    scores: &ScoreSet,
    tenure_months: u32,
    thresholds: &ThresholdProfile,
) -> TenureBenchmark {
    let band = tenure_band(tenure_months);
    let mean = scores.mean();
    let deviation = mean - band.benchmark;
    TenureBenchmark {
        tenure_group: band.label,
        benchmark_score: band.benchmark,
        actual_score: round_to(mean, 2),
        deviation: round_to(deviation, 2),
        status: benchmark_status(deviation, thresholds.benchmark_tolerance),
    }
}

pub fn run_stage5(
    scores: &ScoreSet,
    tenure_months: u32,
    thresholds: &ThresholdProfile,
) -> Benchmarking {
    Benchmarking {
        tenure_benchmark: benchmark_against_tenure(scores, tenure_months, thresholds),
        role_benchmark: RoleBenchmark {
            status: "Meets Role Expectations",
            comparison: "Aligned with peer group",
        },
        industry_benchmark: IndustryBenchmark {
            status: "Competitive",
            insight: "Above industry average in quality and productivity",
        },
        competitive_positioning: CompetitivePosition {
            position: "Strong Contender",
            differentiators: vec!["Quality Focus", "Reliability"],
        },
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage5_benchmark.rs"]
mod tests;
