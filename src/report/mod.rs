pub mod json;
pub mod text;

use chrono::NaiveDateTime;
use serde::{Serialize, Serializer};

use crate::pipeline::confidence::AnalysisConfidence;
use crate::pipeline::stage1_basic::BasicAnalysis;
use crate::pipeline::stage2_patterns::PatternAnalysis;
use crate::pipeline::stage3_predictive::PredictiveInsights;
use crate::pipeline::stage4_gaps::GapAnalysis;
use crate::pipeline::stage5_benchmark::Benchmarking;
use crate::pipeline::stage6_trajectory::GrowthTrajectory;
use crate::pipeline::stage7_risk::RiskAssessment;

pub const MODEL_VERSION: &str = "v2.1.0";
pub const SYSTEM_VERSION: &str = "2.1.0";

/// One evaluation. Every layer is flattened into a single JSON object.
#[derive(Debug, Clone, Serialize)]
pub struct EvaluationReport {
    #[serde(flatten)]
    pub basic: BasicAnalysis,
    #[serde(flatten)]
    pub patterns: PatternAnalysis,
    #[serde(flatten)]
    pub predictive: PredictiveInsights,
    #[serde(flatten)]
    pub gaps: GapAnalysis,
    #[serde(flatten)]
    pub benchmarking: Benchmarking,
    #[serde(flatten)]
    pub growth: GrowthTrajectory,
    #[serde(flatten)]
    pub risk: RiskAssessment,
    #[serde(serialize_with = "serialize_iso_timestamp")]
    pub evaluation_timestamp: NaiveDateTime,
    pub ai_model_version: &'static str,
    pub analysis_confidence: AnalysisConfidence,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EmployeeInfo {
    pub name: String,
    pub employee_id: String,
    pub department: String,
    pub position: String,
    pub period: String,
    pub reviewer_name: String,
    pub tenure_months: u32,
    pub evaluation_date: String,
    pub evaluation_id: String,
}

/// Report plus the submitter's metadata, as returned to clients.
#[derive(Debug, Clone, Serialize)]
pub struct EvaluationResponse {
    #[serde(flatten)]
    pub report: EvaluationReport,
    #[serde(flatten)]
    pub employee: EmployeeInfo,
}

#[derive(Debug, Clone, Serialize)]
pub struct SystemInfo {
    pub system_name: &'static str,
    pub version: &'static str,
    pub ai_models: Vec<&'static str>,
    pub analysis_layers: u32,
    pub data_points_analyzed: u32,
    pub confidence_threshold: f64,
}

pub fn system_info() -> SystemInfo {
    SystemInfo {
        system_name: "Advanced AI Performance Analytics Engine",
        version: SYSTEM_VERSION,
        ai_models: vec![
            "Performance Pattern Recognition",
            "Predictive Growth Analytics",
            "Skill Gap Analysis Engine",
            "Benchmarking Algorithm",
            "Risk Assessment Model",
            "Career Trajectory Forecasting",
        ],
        analysis_layers: 7,
        data_points_analyzed: 28,
        confidence_threshold: 0.75,
    }
}

pub fn format_iso_timestamp(ts: &NaiveDateTime) -> String {
    ts.format("%Y-%m-%dT%H:%M:%S%.6f").to_string()
}

fn serialize_iso_timestamp<S: Serializer>(
    ts: &NaiveDateTime,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&format_iso_timestamp(ts))
}

pub fn format_score(v: f64) -> String {
    format!("{:.2}", v)
}

#[cfg(test)]
#[path = "../../tests/src_inline/report/mod.rs"]
mod tests;
