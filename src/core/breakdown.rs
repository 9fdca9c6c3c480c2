use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::core::Assignment;
use crate::error::{ChartError, ChartResult};

pub const DEFAULT_HOURS_PER_DAY: f64 = 8.0;

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ProjectTotals {
    pub cost: f64,
    pub hours: f64,
}

/// Per-project cost and hour totals, in first-seen project order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectBreakdown {
    totals: IndexMap<String, ProjectTotals>,
    hours_per_day: f64,
}

impl ProjectBreakdown {
    pub fn from_assignments(assignments: &[Assignment], hours_per_day: f64) -> ChartResult<Self> {
        if !hours_per_day.is_finite() || hours_per_day <= 0.0 {
            return Err(ChartError::InvalidData(
                "hours per day must be finite and > 0".to_owned(),
            ));
        }

        let mut totals: IndexMap<String, ProjectTotals> = IndexMap::new();
        for assignment in assignments {
            let entry = totals.entry(assignment.project.clone()).or_default();
            entry.cost += assignment.cost;
            entry.hours += assignment.hours;
        }

        Ok(Self {
            totals,
            hours_per_day,
        })
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.totals.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.totals.is_empty()
    }

    #[must_use]
    pub fn hours_per_day(&self) -> f64 {
        self.hours_per_day
    }

    #[must_use]
    pub fn get(&self, project: &str) -> Option<ProjectTotals> {
        self.totals.get(project).copied()
    }

    #[must_use]
    pub fn labels(&self) -> Vec<String> {
        self.totals.keys().cloned().collect()
    }

    #[must_use]
    pub fn costs(&self) -> Vec<f64> {
        self.totals.values().map(|t| t.cost).collect()
    }

    #[must_use]
    pub fn hours(&self) -> Vec<f64> {
        self.totals.values().map(|t| t.hours).collect()
    }

    #[must_use]
    pub fn days(&self) -> Vec<f64> {
        self.totals
            .values()
            .map(|t| t.hours / self.hours_per_day)
            .collect()
    }
}
