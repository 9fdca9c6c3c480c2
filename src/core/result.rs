use serde::{Deserialize, Deserializer, Serialize};

/// One worker-to-project allocation produced by the optimizer.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Assignment {
    #[serde(default)]
    pub project: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub developer: Option<String>,
    #[serde(default, deserialize_with = "null_as_zero")]
    pub cost: f64,
    #[serde(default, deserialize_with = "null_as_zero")]
    pub hours: f64,
    /// Percentage in `[0, 100]`.
    #[serde(default, deserialize_with = "null_as_zero")]
    pub skill_match: f64,
}

impl Assignment {
    #[must_use]
    pub fn new(project: impl Into<String>, cost: f64, hours: f64, skill_match: f64) -> Self {
        Self {
            project: project.into(),
            developer: None,
            cost,
            hours,
            skill_match,
        }
    }

    #[must_use]
    pub fn with_developer(mut self, developer: impl Into<String>) -> Self {
        self.developer = Some(developer.into());
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskSeverity {
    High,
    Medium,
    Low,
    #[serde(other)]
    Unknown,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Risk {
    pub severity: RiskSeverity,
    /// Risk text; optimizer payloads send it as `message`.
    #[serde(default, alias = "message")]
    pub description: String,
}

impl Risk {
    #[must_use]
    pub fn new(severity: RiskSeverity, description: impl Into<String>) -> Self {
        Self {
            severity,
            description: description.into(),
        }
    }
}

/// Result payload handed over by the optimization backend.
///
/// Decoding is tolerant: absent or `null` numbers read as `0` and an absent
/// assignment list reads as empty, so a partial payload still renders.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct OptimizationResult {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub assignments: Vec<Assignment>,
    #[serde(default, deserialize_with = "null_as_zero")]
    pub total_cost: f64,
    #[serde(default, deserialize_with = "null_as_zero")]
    pub completion_time: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub budget_remaining: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time_buffer: Option<f64>,
    #[serde(
        default,
        deserialize_with = "null_as_empty",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub risks: Vec<Risk>,
}

impl OptimizationResult {
    #[must_use]
    pub fn new(assignments: Vec<Assignment>, total_cost: f64, completion_time: f64) -> Self {
        Self {
            assignments,
            total_cost,
            completion_time,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_risks(mut self, risks: Vec<Risk>) -> Self {
        self.risks = risks;
        self
    }

    #[must_use]
    pub fn count_risks(&self, severity: RiskSeverity) -> usize {
        self.risks.iter().filter(|r| r.severity == severity).count()
    }
}

fn null_as_zero<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<f64>::deserialize(deserializer)?.unwrap_or(0.0))
}

fn null_as_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}
