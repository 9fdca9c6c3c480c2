pub mod breakdown;
pub mod metrics;
pub mod plan;
pub mod result;

pub use breakdown::{DEFAULT_HOURS_PER_DAY, ProjectBreakdown, ProjectTotals};
pub use metrics::{
    ResultSummary, SKILL_MATCH_MAX, average_skill_match, percent_label, round_half_up,
    round_one_decimal, savings_percent,
};
pub use plan::{Developer, MAX_PROJECT_PRIORITY, MIN_PROJECT_PRIORITY, PlanRequest, Project};
pub use result::{Assignment, OptimizationResult, Risk, RiskSeverity};
