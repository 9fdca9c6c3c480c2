use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::{OptimizationResult, ProjectBreakdown};
use crate::error::ChartResult;
use crate::render::{
    ChartBackend, ChartData, ChartHandle, ChartKind, ChartOptions, ChartSpec, Dataset,
    ValueFormat, border_colors, generate_colors,
};

use super::PresenterConfig;
use super::page::{Page, require_canvas};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BreakdownCharts {
    pub cost: ChartHandle,
    pub time: ChartHandle,
}

/// Per-project cost and duration bar charts.
///
/// Unlike [`super::ChartPresenter`], every render tears down the previous
/// charts and creates fresh ones sized to the current project list.
pub struct ProjectBreakdownPresenter<B: ChartBackend> {
    backend: B,
    config: PresenterConfig,
    cost_chart: Option<ChartHandle>,
    time_chart: Option<ChartHandle>,
    last_breakdown: Option<ProjectBreakdown>,
}

impl<B: ChartBackend> ProjectBreakdownPresenter<B> {
    pub fn new(backend: B, config: PresenterConfig) -> ChartResult<Self> {
        config.validate()?;
        Ok(Self {
            backend,
            config,
            cost_chart: None,
            time_chart: None,
            last_breakdown: None,
        })
    }

    pub fn render<P: Page + ?Sized>(
        &mut self,
        page: &P,
        result: &OptimizationResult,
    ) -> ChartResult<()> {
        let cost_canvas = self.config.elements.cost_chart.clone();
        let time_canvas = self.config.elements.time_chart.clone();
        require_canvas(page, &cost_canvas)?;
        require_canvas(page, &time_canvas)?;

        let breakdown =
            ProjectBreakdown::from_assignments(&result.assignments, self.config.hours_per_day)?;
        let cost_spec = project_chart_spec(
            &breakdown,
            breakdown.costs(),
            "Cost ($)",
            ValueFormat::Currency,
            self.config.alternate_palette,
        );
        let time_spec = project_chart_spec(
            &breakdown,
            breakdown.days(),
            "Time (days)",
            ValueFormat::Days,
            !self.config.alternate_palette,
        );

        self.destroy()?;
        let cost = self.backend.create_chart(&cost_canvas, &cost_spec)?;
        self.cost_chart = Some(cost);
        let time = self.backend.create_chart(&time_canvas, &time_spec)?;
        self.time_chart = Some(time);

        debug!(
            projects = breakdown.len(),
            cost = cost.get(),
            time = time.get(),
            "project breakdown charts rendered"
        );
        self.last_breakdown = Some(breakdown);
        Ok(())
    }

    pub fn resize(&mut self) -> ChartResult<()> {
        for handle in [self.cost_chart, self.time_chart].into_iter().flatten() {
            self.backend.resize_chart(handle)?;
        }
        Ok(())
    }

    /// Destroys the live charts, if any.
    ///
    /// A handle is released only after the backend destroyed its chart, so a
    /// failed call can be retried.
    pub fn destroy(&mut self) -> ChartResult<()> {
        for slot in [&mut self.cost_chart, &mut self.time_chart] {
            if let Some(handle) = *slot {
                self.backend.destroy_chart(handle)?;
                *slot = None;
            }
        }
        Ok(())
    }

    /// Both handles, once a render has completed.
    #[must_use]
    pub fn charts(&self) -> Option<BreakdownCharts> {
        Some(BreakdownCharts {
            cost: self.cost_chart?,
            time: self.time_chart?,
        })
    }

    #[must_use]
    pub fn last_breakdown(&self) -> Option<&ProjectBreakdown> {
        self.last_breakdown.as_ref()
    }

    #[must_use]
    pub fn backend(&self) -> &B {
        &self.backend
    }

    #[must_use]
    pub fn into_backend(self) -> B {
        self.backend
    }
}

fn project_chart_spec(
    breakdown: &ProjectBreakdown,
    values: Vec<f64>,
    label: &str,
    format: ValueFormat,
    alternate: bool,
) -> ChartSpec {
    let fills = generate_colors(values.len(), alternate);
    let borders = border_colors(&fills);
    let data = ChartData::new(breakdown.labels()).with_dataset(
        Dataset::new(label, values)
            .with_background_colors(fills)
            .with_border_colors(borders),
    );
    ChartSpec::new(ChartKind::Bar, data).with_options(ChartOptions {
        value_axis_title: Some(label.to_owned()),
        value_format: format,
        ..ChartOptions::default()
    })
}
