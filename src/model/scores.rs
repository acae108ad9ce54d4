use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};

use crate::error::{EvalError, Result};
use crate::model::skills::{Skill, skill_order};

pub const SCORE_MIN: i64 = 1;
pub const SCORE_MAX: i64 = 10;

/// Five skill scores, each in [1, 10]. Only constructible through validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoreSet {
    values: [u8; 5],
}

/// Scores as submitted, before range checks. Absent keys fall back to 5.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RawScores {
    pub quality_of_work: i64,
    pub productivity: i64,
    pub teamwork: i64,
    pub communication: i64,
    pub initiative: i64,
}

impl Default for RawScores {
    fn default() -> Self {
        Self {
            quality_of_work: 5,
            productivity: 5,
            teamwork: 5,
            communication: 5,
            initiative: 5,
        }
    }
}

impl RawScores {
    pub fn get(&self, skill: Skill) -> i64 {
        match skill {
            Skill::QualityOfWork => self.quality_of_work,
            Skill::Productivity => self.productivity,
            Skill::Teamwork => self.teamwork,
            Skill::Communication => self.communication,
            Skill::Initiative => self.initiative,
        }
    }

    pub fn validate(&self) -> Result<ScoreSet> {
        let mut values = [0u8; 5];
        for &skill in skill_order() {
            let value = self.get(skill);
            if !(SCORE_MIN..=SCORE_MAX).contains(&value) {
                return Err(EvalError::OutOfRangeScore { skill, value });
            }
            values[skill as usize] = value as u8;
        }
        Ok(ScoreSet { values })
    }
}

impl ScoreSet {
    pub fn new(
        quality_of_work: i64,
        productivity: i64,
        teamwork: i64,
        communication: i64,
        initiative: i64,
    ) -> Result<Self> {
        RawScores {
            quality_of_work,
            productivity,
            teamwork,
            communication,
            initiative,
        }
        .validate()
    }

    pub fn uniform(value: i64) -> Result<Self> {
        Self::new(value, value, value, value, value)
    }

    pub fn get(&self, skill: Skill) -> u8 {
        self.values[skill as usize]
    }

    /// (skill, score) pairs in canonical order.
    pub fn iter(&self) -> impl Iterator<Item = (Skill, u8)> + '_ {
        skill_order().iter().map(move |&s| (s, self.get(s)))
    }

    pub fn all_at_least(&self, threshold: u8) -> bool {
        self.values.iter().all(|&v| v >= threshold)
    }

    pub fn mean(&self) -> f64 {
        let sum: u32 = self.values.iter().map(|&v| v as u32).sum();
        sum as f64 / self.values.len() as f64
    }

    /// Population standard deviation.
    pub fn std_dev(&self) -> f64 {
        let mean = self.mean();
        let var = self
            .values
            .iter()
            .map(|&v| {
                let d = v as f64 - mean;
                d * d
            })
            .sum::<f64>()
            / self.values.len() as f64;
        var.sqrt()
    }

    pub fn range(&self) -> u8 {
        let max = self.values.iter().copied().max().unwrap_or(0);
        let min = self.values.iter().copied().min().unwrap_or(0);
        max - min
    }
}

impl Serialize for ScoreSet {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.values.len()))?;
        for (skill, value) in self.iter() {
            map.serialize_entry(skill.key(), &value)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for ScoreSet {
    fn deserialize<D: serde::Deserializer<'de>>(
        deserializer: D,
    ) -> std::result::Result<Self, D::Error> {
        let raw = RawScores::deserialize(deserializer)?;
        raw.validate().map_err(serde::de::Error::custom)
    }
}

/// Rounds to `places` decimals, half away from zero.
pub fn round_to(x: f64, places: i32) -> f64 {
    let factor = 10f64.powi(places);
    (x * factor).round() / factor
}

#[cfg(test)]
#[path = "../../tests/src_inline/model/scores.rs"]
mod tests;
