use serde::{Deserialize, Serialize};

use crate::core::DEFAULT_HOURS_PER_DAY;
use crate::error::{ChartError, ChartResult};

pub const DEFAULT_BUDGET: f64 = 10_000.0;
pub const DEFAULT_DEADLINE_DAYS: f64 = 30.0;

/// Page element identifiers the presenters bind to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ElementIds {
    pub cost_chart: String,
    pub time_chart: String,
    pub skill_match_chart: String,
    pub budget_input: String,
    pub deadline_input: String,
    pub cost_savings_text: String,
    pub time_efficiency_text: String,
    pub skill_match_text: String,
}

impl Default for ElementIds {
    fn default() -> Self {
        Self {
            cost_chart: "cost-chart".to_owned(),
            time_chart: "time-chart".to_owned(),
            skill_match_chart: "skill-match-chart".to_owned(),
            budget_input: "budget".to_owned(),
            deadline_input: "deadline".to_owned(),
            cost_savings_text: "cost-savings".to_owned(),
            time_efficiency_text: "time-efficiency".to_owned(),
            skill_match_text: "skill-match".to_owned(),
        }
    }
}

impl ElementIds {
    fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> {
        [
            ("cost_chart", self.cost_chart.as_str()),
            ("time_chart", self.time_chart.as_str()),
            ("skill_match_chart", self.skill_match_chart.as_str()),
            ("budget_input", self.budget_input.as_str()),
            ("deadline_input", self.deadline_input.as_str()),
            ("cost_savings_text", self.cost_savings_text.as_str()),
            ("time_efficiency_text", self.time_efficiency_text.as_str()),
            ("skill_match_text", self.skill_match_text.as_str()),
        ]
        .into_iter()
    }
}

/// Presenter bootstrap configuration.
///
/// Every field has a default, so a partial JSON document is a valid config.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PresenterConfig {
    pub elements: ElementIds,
    /// Used when the budget input is absent or non-numeric.
    pub default_budget: f64,
    /// Used when the deadline input is absent or non-numeric.
    pub default_deadline: f64,
    pub hours_per_day: f64,
    /// Starts the per-project breakdown on the alternate palette.
    pub alternate_palette: bool,
}

impl Default for PresenterConfig {
    fn default() -> Self {
        Self {
            elements: ElementIds::default(),
            default_budget: DEFAULT_BUDGET,
            default_deadline: DEFAULT_DEADLINE_DAYS,
            hours_per_day: DEFAULT_HOURS_PER_DAY,
            alternate_palette: false,
        }
    }
}

impl PresenterConfig {
    #[must_use]
    pub fn with_elements(mut self, elements: ElementIds) -> Self {
        self.elements = elements;
        self
    }

    #[must_use]
    pub fn with_default_budget(mut self, budget: f64) -> Self {
        self.default_budget = budget;
        self
    }

    #[must_use]
    pub fn with_default_deadline(mut self, deadline: f64) -> Self {
        self.default_deadline = deadline;
        self
    }

    #[must_use]
    pub fn with_hours_per_day(mut self, hours_per_day: f64) -> Self {
        self.hours_per_day = hours_per_day;
        self
    }

    #[must_use]
    pub fn with_alternate_palette(mut self, alternate: bool) -> Self {
        self.alternate_palette = alternate;
        self
    }

    pub fn validate(&self) -> ChartResult<()> {
        if !self.default_budget.is_finite() {
            return Err(ChartError::InvalidData(
                "default budget must be finite".to_owned(),
            ));
        }
        if !self.default_deadline.is_finite() {
            return Err(ChartError::InvalidData(
                "default deadline must be finite".to_owned(),
            ));
        }
        if !self.hours_per_day.is_finite() || self.hours_per_day <= 0.0 {
            return Err(ChartError::InvalidData(
                "hours per day must be finite and > 0".to_owned(),
            ));
        }
        for (field, id) in self.elements.iter() {
            if id.trim().is_empty() {
                return Err(ChartError::InvalidData(format!(
                    "element id `{field}` must not be empty"
                )));
            }
        }
        Ok(())
    }
}
