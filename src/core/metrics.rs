use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::core::{Assignment, OptimizationResult};

pub const SKILL_MATCH_MAX: f64 = 100.0;

/// Arithmetic mean of `skill_match` over all assignments.
///
/// Values outside `[0, 100]` are clamped before averaging so the doughnut
/// split stays non-negative. Returns `0` for an empty slice.
#[must_use]
pub fn average_skill_match(assignments: &[Assignment]) -> f64 {
    if assignments.is_empty() {
        return 0.0;
    }

    let mut sum = 0.0;
    for assignment in assignments {
        let value = assignment.skill_match;
        if !value.is_finite() {
            warn!(project = %assignment.project, "ignoring non-finite skill match");
            continue;
        }
        if !(0.0..=SKILL_MATCH_MAX).contains(&value) {
            warn!(
                project = %assignment.project,
                skill_match = value,
                "clamping out-of-range skill match"
            );
        }
        sum += value.clamp(0.0, SKILL_MATCH_MAX);
    }
    sum / assignments.len() as f64
}

/// Percentage of `ceiling` left unused by `actual`, rounded to a whole number.
///
/// Returns `0` when the ceiling is not a positive finite number.
#[must_use]
pub fn savings_percent(actual: f64, ceiling: f64) -> i64 {
    if !ceiling.is_finite() || ceiling <= 0.0 {
        return 0;
    }
    let ratio = (1.0 - actual / ceiling) * 100.0;
    if !ratio.is_finite() {
        return 0;
    }
    round_half_up(ratio) as i64
}

/// Rounds halves toward positive infinity (`-2.5 -> -2`, `2.5 -> 3`).
#[must_use]
pub fn round_half_up(value: f64) -> f64 {
    (value + 0.5).floor()
}

/// Rounds to one decimal place.
#[must_use]
pub fn round_one_decimal(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

#[must_use]
pub fn percent_label(value: i64) -> String {
    format!("{value}%")
}

/// Derived percentages shown next to the dashboard charts.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ResultSummary {
    pub budget: f64,
    pub deadline: f64,
    pub average_skill_match: f64,
    pub cost_savings_percent: i64,
    pub time_efficiency_percent: i64,
    pub skill_utilization_percent: i64,
}

impl ResultSummary {
    #[must_use]
    pub fn compute(result: &OptimizationResult, budget: f64, deadline: f64) -> Self {
        let average_skill_match = average_skill_match(&result.assignments);
        Self {
            budget,
            deadline,
            average_skill_match,
            cost_savings_percent: savings_percent(result.total_cost, budget),
            time_efficiency_percent: savings_percent(result.completion_time, deadline),
            skill_utilization_percent: round_half_up(average_skill_match) as i64,
        }
    }

    /// Doughnut split `[matched, remaining]`.
    #[must_use]
    pub fn skill_match_split(&self) -> [f64; 2] {
        [
            self.average_skill_match,
            SKILL_MATCH_MAX - self.average_skill_match,
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::{round_half_up, savings_percent};

    #[test]
    fn halves_round_toward_positive_infinity() {
        assert_eq!(round_half_up(2.5), 3.0);
        assert_eq!(round_half_up(-2.5), -2.0);
        assert_eq!(round_half_up(-2.6), -3.0);
    }

    #[test]
    fn savings_against_zero_or_negative_ceiling_is_zero() {
        assert_eq!(savings_percent(500.0, 0.0), 0);
        assert_eq!(savings_percent(500.0, -10.0), 0);
        assert_eq!(savings_percent(500.0, f64::NAN), 0);
    }

    #[test]
    fn overspend_yields_negative_savings() {
        assert_eq!(savings_percent(1_500.0, 1_000.0), -50);
    }
}
