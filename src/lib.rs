pub mod error;
pub mod input;
pub mod logging;
pub mod model;
pub mod pipeline;
pub mod report;

pub use error::{EvalError, Result};
pub use model::scores::{RawScores, ScoreSet};
pub use model::skills::Skill;
pub use pipeline::{Evaluator, evaluate};
pub use report::{EvaluationReport, EvaluationResponse};
