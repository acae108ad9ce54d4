use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Skill {
    QualityOfWork,
    Productivity,
    Teamwork,
    Communication,
    Initiative,
}

#[derive(Debug, Clone, Copy)]
pub struct CriterionWeight {
    pub skill: Skill,
    pub weight: f64,
    pub description: &'static str,
}

pub static CRITERIA: [CriterionWeight; 5] = [
    CriterionWeight {
        skill: Skill::QualityOfWork,
        weight: 0.25,
        description: "Accuracy, attention to detail, and excellence of deliverables",
    },
    CriterionWeight {
        skill: Skill::Productivity,
        weight: 0.20,
        description: "Efficiency, output volume, and time management",
    },
    CriterionWeight {
        skill: Skill::Teamwork,
        weight: 0.15,
        description: "Collaboration, support for colleagues, and team contribution",
    },
    CriterionWeight {
        skill: Skill::Communication,
        weight: 0.20,
        description: "Clarity, effectiveness, and professionalism in communication",
    },
    CriterionWeight {
        skill: Skill::Initiative,
        weight: 0.20,
        description: "Proactivity, problem-solving, and innovative thinking",
    },
];

/// Canonical skill order. Every per-skill list in a report follows it.
pub fn skill_order() -> &'static [Skill] {
    &[
        Skill::QualityOfWork,
        Skill::Productivity,
        Skill::Teamwork,
        Skill::Communication,
        Skill::Initiative,
    ]
}

impl Skill {
    pub fn key(self) -> &'static str {
        match self {
            Skill::QualityOfWork => "quality_of_work",
            Skill::Productivity => "productivity",
            Skill::Teamwork => "teamwork",
            Skill::Communication => "communication",
            Skill::Initiative => "initiative",
        }
    }

    /// Display name: the key with underscores as spaces, every word capitalized.
    pub fn title(self) -> &'static str {
        match self {
            Skill::QualityOfWork => "Quality Of Work",
            Skill::Productivity => "Productivity",
            Skill::Teamwork => "Teamwork",
            Skill::Communication => "Communication",
            Skill::Initiative => "Initiative",
        }
    }

    pub fn criterion(self) -> &'static CriterionWeight {
        &CRITERIA[self as usize]
    }

    pub fn weight(self) -> f64 {
        self.criterion().weight
    }

    pub fn description(self) -> &'static str {
        self.criterion().description
    }

    /// Multiplier applied on top of the weight when ranking improvement areas.
    pub fn importance(self) -> f64 {
        match self {
            Skill::QualityOfWork => 1.0,
            Skill::Productivity => 0.9,
            Skill::Communication => 0.9,
            Skill::Initiative => 0.8,
            Skill::Teamwork => 0.7,
        }
    }

    pub fn trait_label(self) -> &'static str {
        match self {
            Skill::QualityOfWork => "Detail-Oriented",
            Skill::Productivity => "High-Output",
            Skill::Teamwork => "Collaborative",
            Skill::Communication => "Articulate",
            Skill::Initiative => "Proactive",
        }
    }

    pub fn mitigation(self) -> &'static str {
        match self {
            Skill::QualityOfWork => "Quality assurance training and peer review implementation",
            Skill::Productivity => "Time management workshop and workflow optimization",
            Skill::Teamwork => "Team building exercises and collaborative project assignments",
            Skill::Communication => "Communication skills training and presentation practice",
            Skill::Initiative => "Innovation challenges and self-directed project opportunities",
        }
    }
}

impl std::fmt::Display for Skill {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.key())
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/model/skills.rs"]
mod tests;
