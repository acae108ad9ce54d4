#[derive(Debug, Clone)]
pub struct ThresholdProfile {
    pub strength_min: u8,
    pub consistent_min: u8,
    pub quality_focus_min: u8,
    pub high_potential_overall: f64,
    pub gap_max: u8,
    pub critical_gap_max: u8,
    pub priority_limit: usize,
    pub benchmark_tolerance: f64,
    pub promotion_tenure_horizon: f64,
    pub promotion_score_weight: f64,
    pub promotion_tenure_weight: f64,
    pub promotion_ready: f64,
    pub promotion_near: f64,
    pub next_score_uplift: f64,
    pub min_history_for_growth: usize,
}

impl ThresholdProfile {
    pub fn default_v1() -> Self {
        Self {
            strength_min: 8,
            consistent_min: 7,
            quality_focus_min: 9,
            high_potential_overall: 8.5,
            gap_max: 5,
            critical_gap_max: 4,
            priority_limit: 3,
            benchmark_tolerance: 0.5,
            promotion_tenure_horizon: 24.0,
            promotion_score_weight: 0.7,
            promotion_tenure_weight: 0.3,
            promotion_ready: 8.0,
            promotion_near: 6.5,
            next_score_uplift: 0.3,
            min_history_for_growth: 2,
        }
    }
}

impl Default for ThresholdProfile {
    fn default() -> Self {
        Self::default_v1()
    }
}

#[derive(Debug, Clone, Copy)]
pub struct TenureBand {
    pub label: &'static str,
    /// Inclusive upper bound in months; `None` for the open-ended band.
    pub max_months: Option<u32>,
    pub benchmark: f64,
}

pub static TENURE_BANDS: [TenureBand; 5] = [
    TenureBand {
        label: "0-6",
        max_months: Some(6),
        benchmark: 6.0,
    },
    TenureBand {
        label: "7-12",
        max_months: Some(12),
        benchmark: 6.5,
    },
    TenureBand {
        label: "13-24",
        max_months: Some(24),
        benchmark: 7.0,
    },
    TenureBand {
        label: "25-36",
        max_months: Some(36),
        benchmark: 7.5,
    },
    TenureBand {
        label: "37+",
        max_months: None,
        benchmark: 8.0,
    },
];

pub fn tenure_band(tenure_months: u32) -> &'static TenureBand {
    TENURE_BANDS
        .iter()
        .find(|b| b.max_months.is_none_or(|max| tenure_months <= max))
        .unwrap_or(&TENURE_BANDS[TENURE_BANDS.len() - 1])
}

#[derive(Debug, Clone, Copy)]
pub struct GrowthTier {
    pub min_mean: f64,
    pub max_std: Option<f64>,
    pub level: &'static str,
    pub timeline: &'static str,
    pub recommendation: &'static str,
}

/// First match wins; the last tier always matches.
pub static GROWTH_TIERS: [GrowthTier; 4] = [
    GrowthTier {
        min_mean: 8.5,
        max_std: Some(1.0),
        level: "Very High",
        timeline: "3-6 months",
        recommendation: "Ready for advanced responsibilities and leadership roles",
    },
    GrowthTier {
        min_mean: 7.5,
        max_std: Some(1.5),
        level: "High",
        timeline: "6-12 months",
        recommendation: "Strong potential for role expansion and skill development",
    },
    GrowthTier {
        min_mean: 6.5,
        max_std: None,
        level: "Moderate",
        timeline: "12-18 months",
        recommendation: "Focus on core competency development before advancement",
    },
    GrowthTier {
        min_mean: f64::NEG_INFINITY,
        max_std: None,
        level: "Foundation",
        timeline: "18+ months",
        recommendation: "Concentrate on building fundamental skills and consistency",
    },
];

#[derive(Debug, Clone, Copy)]
pub struct ConfidenceTier {
    pub max_std: Option<f64>,
    pub max_range: Option<u8>,
    pub score: f64,
    pub level: &'static str,
    pub reason: &'static str,
}

/// First match wins; the last tier always matches.
pub static CONFIDENCE_TIERS: [ConfidenceTier; 4] = [
    ConfidenceTier {
        max_std: Some(1.0),
        max_range: Some(3),
        score: 0.95,
        level: "Very High",
        reason: "Consistent scoring pattern",
    },
    ConfidenceTier {
        max_std: Some(1.5),
        max_range: Some(4),
        score: 0.85,
        level: "High",
        reason: "Relatively consistent pattern",
    },
    ConfidenceTier {
        max_std: Some(2.0),
        max_range: None,
        score: 0.75,
        level: "Medium",
        reason: "Moderate score variation",
    },
    ConfidenceTier {
        max_std: None,
        max_range: None,
        score: 0.65,
        level: "Low",
        reason: "High score variability detected",
    },
];
