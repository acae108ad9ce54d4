use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BurnoutRisk {
    pub risk_level: &'static str,
    pub factors: Vec<&'static str>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AttritionRisk {
    pub risk_level: &'static str,
    pub retention_probability: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct VolatilityRisk {
    pub risk_level: &'static str,
    pub stability: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct RiskAssessment {
    pub burnout_risk: BurnoutRisk,
    pub attrition_risk: AttritionRisk,
    pub performance_volatility: VolatilityRisk,
    pub mitigation_recommendations: Vec<&'static str>,
}

pub fn run_stage7() -> RiskAssessment {
    RiskAssessment {
        burnout_risk: BurnoutRisk {
            risk_level: "Low",
            factors: vec!["Good work-life balance indicators"],
        },
        attrition_risk: AttritionRisk {
            risk_level: "Low",
            retention_probability: "High",
        },
        performance_volatility: VolatilityRisk {
            risk_level: "Low",
            stability: "High performance consistency",
        },
        mitigation_recommendations: vec![
            "Continue current development path",
            "Monitor workload balance",
        ],
    }
}
