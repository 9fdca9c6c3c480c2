mod breakdown;
mod config;
pub mod dashboard_charts;
mod json_contract;
mod page;
mod presenter;

pub use breakdown::{BreakdownCharts, ProjectBreakdownPresenter};
pub use config::{DEFAULT_BUDGET, DEFAULT_DEADLINE_DAYS, ElementIds, PresenterConfig};
pub use json_contract::{RENDER_SNAPSHOT_JSON_SCHEMA_V1, RenderSnapshotJsonContractV1};
pub use page::{MemoryPage, Page, read_numeric_input};
pub use presenter::{ChartPresenter, DashboardCharts, PresenterState};
