use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{ChartError, ChartResult};

pub const MIN_PROJECT_PRIORITY: i64 = 1;
pub const MAX_PROJECT_PRIORITY: i64 = 5;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Developer {
    pub name: String,
    pub rate: f64,
    pub hours_per_day: f64,
    pub skills: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub name: String,
    pub hours: f64,
    pub priority: i64,
    #[serde(default)]
    pub dependencies: Vec<String>,
    #[serde(default)]
    pub required_skills: Vec<String>,
}

/// Input sent to the optimizer: ceilings plus the people and work to allocate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanRequest {
    pub budget: f64,
    pub deadline: f64,
    pub developers: Vec<Developer>,
    pub projects: Vec<Project>,
}

impl PlanRequest {
    /// Checks the request before it is handed to an optimizer.
    pub fn validate(&self) -> ChartResult<()> {
        require_positive(self.budget, "budget")?;
        require_positive(self.deadline, "deadline")?;

        if self.developers.is_empty() {
            return Err(ChartError::InvalidInput(
                "at least one developer is required".to_owned(),
            ));
        }
        for developer in &self.developers {
            if developer.name.trim().is_empty() {
                return Err(ChartError::InvalidInput(
                    "developer name must not be empty".to_owned(),
                ));
            }
            require_positive(developer.rate, "developer rate")?;
            require_positive(developer.hours_per_day, "developer hours_per_day")?;
        }

        if self.projects.is_empty() {
            return Err(ChartError::InvalidInput(
                "at least one project is required".to_owned(),
            ));
        }
        for project in &self.projects {
            if project.name.trim().is_empty() {
                return Err(ChartError::InvalidInput(
                    "project name must not be empty".to_owned(),
                ));
            }
            require_positive(project.hours, "project hours")?;
            if !(MIN_PROJECT_PRIORITY..=MAX_PROJECT_PRIORITY).contains(&project.priority) {
                return Err(ChartError::InvalidInput(format!(
                    "project priority must be between {MIN_PROJECT_PRIORITY} and {MAX_PROJECT_PRIORITY}, got {}",
                    project.priority
                )));
            }
        }

        debug!(
            developers = self.developers.len(),
            projects = self.projects.len(),
            "plan request validated"
        );
        Ok(())
    }
}

fn require_positive(value: f64, field: &str) -> ChartResult<()> {
    if !value.is_finite() || value <= 0.0 {
        return Err(ChartError::InvalidInput(format!(
            "{field} must be a positive number"
        )));
    }
    Ok(())
}
