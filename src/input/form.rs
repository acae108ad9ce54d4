use std::path::Path;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::model::scores::{RawScores, ScoreSet};
use crate::pipeline::DEFAULT_TENURE_MONTHS;
use crate::report::EmployeeInfo;

/// A submitted evaluation form. Absent fields take the form defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormSubmission {
    #[serde(flatten)]
    pub scores: RawScores,
    pub tenure_months: u32,
    pub employee_name: String,
    pub employee_id: String,
    pub department: String,
    pub position: String,
    pub period: String,
    pub reviewer_name: String,
}

impl Default for FormSubmission {
    fn default() -> Self {
        Self {
            scores: RawScores::default(),
            tenure_months: DEFAULT_TENURE_MONTHS,
            employee_name: "Employee".to_string(),
            employee_id: String::new(),
            department: "General".to_string(),
            position: "Staff".to_string(),
            period: "Q1 2024".to_string(),
            reviewer_name: "AI Evaluation System".to_string(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct EvaluationRequest {
    pub scores: ScoreSet,
    pub tenure_months: u32,
    pub employee: EmployeeInfo,
}

impl FormSubmission {
    pub fn from_json_str(s: &str) -> Result<Self> {
        Ok(serde_json::from_str(s)?)
    }

    pub fn from_path(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json_str(&text)
    }

    /// Validates the scores and stamps the employee record with `now`.
    pub fn into_request(self, now: NaiveDateTime) -> Result<EvaluationRequest> {
        let scores = self.scores.validate()?;
        let employee = EmployeeInfo {
            name: self.employee_name,
            employee_id: self.employee_id,
            department: self.department,
            position: self.position,
            period: self.period,
            reviewer_name: self.reviewer_name,
            tenure_months: self.tenure_months,
            evaluation_date: now.format("%B %d, %Y %H:%M:%S").to_string(),
            evaluation_id: format!("EVAL-{}", now.format("%Y%m%d-%H%M%S")),
        };
        Ok(EvaluationRequest {
            scores,
            tenure_months: self.tenure_months,
            employee,
        })
    }
}
