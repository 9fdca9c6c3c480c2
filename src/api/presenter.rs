use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::{OptimizationResult, ResultSummary, percent_label};
use crate::error::ChartResult;
use crate::render::{ChartBackend, ChartHandle};

use super::dashboard_charts::{
    cost_chart_data, cost_chart_spec, skill_match_chart_data, skill_match_chart_spec,
    time_chart_data, time_chart_spec,
};
use super::page::{Page, read_numeric_input, require_canvas};
use super::PresenterConfig;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum PresenterState {
    #[default]
    Uninitialized,
    Initialized,
    Updated,
}

/// Handles of the three dashboard charts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DashboardCharts {
    pub cost: ChartHandle,
    pub time: ChartHandle,
    pub skill_match: ChartHandle,
}

impl DashboardCharts {
    fn all(self) -> [ChartHandle; 3] {
        [self.cost, self.time, self.skill_match]
    }
}

/// Owns the cost, time and skill-match charts of the result dashboard.
///
/// Charts are created once (explicitly or on the first update) and then
/// mutated in place on every update.
pub struct ChartPresenter<B: ChartBackend> {
    backend: B,
    config: PresenterConfig,
    charts: Option<DashboardCharts>,
    last_summary: Option<ResultSummary>,
    update_count: u64,
}

impl<B: ChartBackend> ChartPresenter<B> {
    pub fn new(backend: B, config: PresenterConfig) -> ChartResult<Self> {
        config.validate()?;
        Ok(Self {
            backend,
            config,
            charts: None,
            last_summary: None,
            update_count: 0,
        })
    }

    /// Creates the three charts with placeholder data: configured budget and
    /// deadline defaults against zeroed actuals.
    ///
    /// Does nothing when the charts already exist.
    pub fn initialize<P: Page + ?Sized>(&mut self, page: &P) -> ChartResult<()> {
        self.ensure_charts(page).map(|_| ())
    }

    /// Redraws all charts from `result` and writes the derived percentages
    /// into the page.
    pub fn update<P: Page + ?Sized>(
        &mut self,
        page: &mut P,
        result: &OptimizationResult,
    ) -> ChartResult<()> {
        let charts = self.ensure_charts(&*page)?;
        let ids = &self.config.elements;

        let budget = read_numeric_input(&*page, &ids.budget_input, self.config.default_budget);
        let deadline =
            read_numeric_input(&*page, &ids.deadline_input, self.config.default_deadline);
        let summary = ResultSummary::compute(result, budget, deadline);

        self.backend
            .update_chart(charts.cost, &cost_chart_data(budget, result.total_cost))?;
        self.backend.update_chart(
            charts.time,
            &time_chart_data(deadline, result.completion_time),
        )?;
        self.backend.update_chart(
            charts.skill_match,
            &skill_match_chart_data(summary.average_skill_match),
        )?;

        page.set_text(
            &ids.cost_savings_text,
            &percent_label(summary.cost_savings_percent),
        )?;
        page.set_text(
            &ids.time_efficiency_text,
            &percent_label(summary.time_efficiency_percent),
        )?;
        page.set_text(
            &ids.skill_match_text,
            &percent_label(summary.skill_utilization_percent),
        )?;

        self.update_count += 1;
        self.last_summary = Some(summary);
        debug!(
            update = self.update_count,
            assignments = result.assignments.len(),
            cost_savings = summary.cost_savings_percent,
            time_efficiency = summary.time_efficiency_percent,
            skill_utilization = summary.skill_utilization_percent,
            "dashboard charts updated"
        );
        Ok(())
    }

    /// Forwards a viewport resize to every live chart.
    pub fn resize(&mut self) -> ChartResult<()> {
        let Some(charts) = self.charts else {
            return Ok(());
        };
        for handle in charts.all() {
            self.backend.resize_chart(handle)?;
        }
        Ok(())
    }

    #[must_use]
    pub fn state(&self) -> PresenterState {
        match (self.charts, self.update_count) {
            (None, _) => PresenterState::Uninitialized,
            (Some(_), 0) => PresenterState::Initialized,
            (Some(_), _) => PresenterState::Updated,
        }
    }

    #[must_use]
    pub fn charts(&self) -> Option<DashboardCharts> {
        self.charts
    }

    #[must_use]
    pub fn last_summary(&self) -> Option<ResultSummary> {
        self.last_summary
    }

    #[must_use]
    pub fn config(&self) -> &PresenterConfig {
        &self.config
    }

    #[must_use]
    pub fn backend(&self) -> &B {
        &self.backend
    }

    #[must_use]
    pub fn into_backend(self) -> B {
        self.backend
    }

    fn ensure_charts<P: Page + ?Sized>(&mut self, page: &P) -> ChartResult<DashboardCharts> {
        if let Some(charts) = self.charts {
            return Ok(charts);
        }

        let ids = &self.config.elements;
        for canvas in [&ids.cost_chart, &ids.time_chart, &ids.skill_match_chart] {
            require_canvas(page, canvas)?;
        }

        let budget = self.config.default_budget;
        let deadline = self.config.default_deadline;
        let charts = DashboardCharts {
            cost: self
                .backend
                .create_chart(&ids.cost_chart, &cost_chart_spec(budget, 0.0))?,
            time: self
                .backend
                .create_chart(&ids.time_chart, &time_chart_spec(deadline, 0.0))?,
            skill_match: self
                .backend
                .create_chart(&ids.skill_match_chart, &skill_match_chart_spec(0.0))?,
        };
        self.charts = Some(charts);
        debug!(
            cost = charts.cost.get(),
            time = charts.time.get(),
            skill_match = charts.skill_match.get(),
            "dashboard charts initialized"
        );
        Ok(charts)
    }
}
