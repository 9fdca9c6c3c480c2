//! qeo-charts: headless chart presenters for workforce optimization results.
//!
//! Presenters turn an optimization result into chart specs for a pluggable
//! charting backend and write derived percentages back into the host page.
//! Plan import, request validation and insight helpers sit alongside.

pub mod api;
pub mod core;
pub mod error;
pub mod import;
pub mod insights;
pub mod render;
pub mod telemetry;

pub use api::{ChartPresenter, PresenterConfig, ProjectBreakdownPresenter};
pub use error::{ChartError, ChartResult};
