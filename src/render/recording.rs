use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::error::{ChartError, ChartResult};
use crate::render::{ChartBackend, ChartData, ChartHandle, ChartSpec};

/// Chart state held by [`RecordingBackend`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecordedChart {
    pub canvas_id: String,
    pub spec: ChartSpec,
    pub redraw_count: u32,
    pub resize_count: u32,
}

/// Serializable view of one live chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartSnapshot {
    pub handle: ChartHandle,
    #[serde(flatten)]
    pub chart: RecordedChart,
}

/// In-memory backend used by tests and headless rendering.
///
/// It validates every spec and data update the way a real backend would
/// reject them, and keeps the latest state of each chart for inspection.
#[derive(Debug, Default)]
pub struct RecordingBackend {
    charts: IndexMap<ChartHandle, RecordedChart>,
    next_handle: u64,
    created_count: usize,
    destroyed_count: usize,
}

impl RecordingBackend {
    #[must_use]
    pub fn chart(&self, handle: ChartHandle) -> Option<&RecordedChart> {
        self.charts.get(&handle)
    }

    /// Most recently created live chart bound to `canvas_id`.
    #[must_use]
    pub fn chart_on_canvas(&self, canvas_id: &str) -> Option<(ChartHandle, &RecordedChart)> {
        self.charts
            .iter()
            .rev()
            .find(|(_, chart)| chart.canvas_id == canvas_id)
            .map(|(handle, chart)| (*handle, chart))
    }

    #[must_use]
    pub fn live_chart_count(&self) -> usize {
        self.charts.len()
    }

    #[must_use]
    pub fn created_count(&self) -> usize {
        self.created_count
    }

    #[must_use]
    pub fn destroyed_count(&self) -> usize {
        self.destroyed_count
    }

    #[must_use]
    pub fn snapshot(&self) -> Vec<ChartSnapshot> {
        self.charts
            .iter()
            .map(|(handle, chart)| ChartSnapshot {
                handle: *handle,
                chart: chart.clone(),
            })
            .collect()
    }

    fn chart_mut(&mut self, handle: ChartHandle) -> ChartResult<&mut RecordedChart> {
        self.charts
            .get_mut(&handle)
            .ok_or_else(|| ChartError::Backend(format!("unknown chart handle {}", handle.get())))
    }
}

impl ChartBackend for RecordingBackend {
    fn create_chart(&mut self, canvas_id: &str, spec: &ChartSpec) -> ChartResult<ChartHandle> {
        spec.validate()?;
        self.next_handle += 1;
        let handle = ChartHandle::new(self.next_handle);
        self.charts.insert(
            handle,
            RecordedChart {
                canvas_id: canvas_id.to_owned(),
                spec: spec.clone(),
                redraw_count: 0,
                resize_count: 0,
            },
        );
        self.created_count += 1;
        trace!(handle = handle.get(), canvas_id, "chart created");
        Ok(handle)
    }

    fn update_chart(&mut self, handle: ChartHandle, data: &ChartData) -> ChartResult<()> {
        let chart = self.chart_mut(handle)?;
        let mut next = chart.spec.clone();
        next.data = data.clone();
        next.validate()?;
        chart.spec = next;
        chart.redraw_count += 1;
        trace!(
            handle = handle.get(),
            redraws = chart.redraw_count,
            "chart updated"
        );
        Ok(())
    }

    fn resize_chart(&mut self, handle: ChartHandle) -> ChartResult<()> {
        let chart = self.chart_mut(handle)?;
        chart.resize_count += 1;
        Ok(())
    }

    fn destroy_chart(&mut self, handle: ChartHandle) -> ChartResult<()> {
        self.charts
            .shift_remove(&handle)
            .ok_or_else(|| ChartError::Backend(format!("unknown chart handle {}", handle.get())))?;
        self.destroyed_count += 1;
        trace!(handle = handle.get(), "chart destroyed");
        Ok(())
    }
}
