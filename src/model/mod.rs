pub mod levels;
pub mod scores;
pub mod skills;
pub mod thresholds;
