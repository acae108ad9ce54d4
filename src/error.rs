use thiserror::Error;

use crate::model::skills::Skill;

#[derive(Debug, Error)]
pub enum EvalError {
    #[error("{skill} must be between 1 and 10")]
    OutOfRangeScore { skill: Skill, value: i64 },
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, EvalError>;
