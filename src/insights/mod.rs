//! Insight metrics and narrative parsing layered over an optimization result.

mod narrative;

use serde::{Deserialize, Serialize};

use crate::core::{OptimizationResult, RiskSeverity, average_skill_match, round_one_decimal};

pub use narrative::{
    DEFAULT_RECOMMENDATION, FALLBACK_EXPLANATION, Narrative, RECOMMENDATIONS_MARKER,
    parse_narrative,
};

/// Headline figures used when explaining a result.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct InsightMetrics {
    /// Share of the budget left over, in percent with one decimal.
    pub budget_efficiency: f64,
    /// Share of the deadline left over, in percent with one decimal.
    pub time_efficiency: f64,
    pub avg_skill_match: f64,
    pub high_risks: usize,
    pub medium_risks: usize,
}

impl InsightMetrics {
    #[must_use]
    pub fn compute(budget: f64, deadline: f64, result: &OptimizationResult) -> Self {
        Self {
            budget_efficiency: headroom_percent(budget, result.total_cost),
            time_efficiency: headroom_percent(deadline, result.completion_time),
            avg_skill_match: round_one_decimal(average_skill_match(&result.assignments)),
            high_risks: result.count_risks(RiskSeverity::High),
            medium_risks: result.count_risks(RiskSeverity::Medium),
        }
    }
}

/// Explanation, recommendations and metrics for one result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InsightReport {
    pub explanation: String,
    pub recommendations: Vec<String>,
    pub metrics: InsightMetrics,
}

impl InsightReport {
    #[must_use]
    pub fn from_narrative(text: &str, metrics: InsightMetrics) -> Self {
        let Narrative {
            explanation,
            recommendations,
        } = parse_narrative(text);
        Self {
            explanation,
            recommendations,
            metrics,
        }
    }
}

fn headroom_percent(ceiling: f64, actual: f64) -> f64 {
    if !ceiling.is_finite() || ceiling <= 0.0 {
        return 0.0;
    }
    let value = round_one_decimal((ceiling - actual) / ceiling * 100.0);
    if value.is_finite() { value } else { 0.0 }
}
