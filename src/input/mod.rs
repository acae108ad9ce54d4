use std::path::Path;

pub mod form;

pub use form::{EvaluationRequest, FormSubmission};

use crate::error::Result;
use crate::model::scores::ScoreSet;

/// Reads a JSON array of prior score sets. Each entry is range-checked.
pub fn load_history(path: &Path) -> Result<Vec<ScoreSet>> {
    let text = std::fs::read_to_string(path)?;
    parse_history(&text)
}

pub fn parse_history(text: &str) -> Result<Vec<ScoreSet>> {
    Ok(serde_json::from_str(text)?)
}

#[cfg(test)]
#[path = "../../tests/src_inline/input/tests.rs"]
mod tests;
