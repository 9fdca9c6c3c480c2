mod chart_spec;
mod palette;
mod primitives;
mod recording;

pub use chart_spec::{
    ChartData, ChartKind, ChartOptions, ChartSpec, Dataset, ValueFormat, format_currency,
};
pub use palette::{
    ALTERNATE_PALETTE, BORDER_DARKEN_PERCENT, DISTINCT_OPACITY_CYCLES, OPACITY_DECAY, PALETTE_LEN,
    PRIMARY_PALETTE, border_colors, generate_colors,
};
pub use primitives::{Color, darken_color};
pub use recording::{ChartSnapshot, RecordedChart, RecordingBackend};

use serde::{Deserialize, Serialize};

use crate::error::ChartResult;

/// Opaque identifier of a chart instance owned by a backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ChartHandle(u64);

impl ChartHandle {
    #[must_use]
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }
}

/// Contract implemented by any charting backend.
///
/// Presenters describe charts as plain data (`ChartSpec`/`ChartData`) so the
/// drawing library stays isolated from result handling and page logic.
pub trait ChartBackend {
    /// Creates a chart on the canvas `canvas_id` and draws it once.
    fn create_chart(&mut self, canvas_id: &str, spec: &ChartSpec) -> ChartResult<ChartHandle>;

    /// Replaces labels/datasets of a live chart and redraws it.
    fn update_chart(&mut self, handle: ChartHandle, data: &ChartData) -> ChartResult<()>;

    fn resize_chart(&mut self, handle: ChartHandle) -> ChartResult<()>;

    fn destroy_chart(&mut self, handle: ChartHandle) -> ChartResult<()>;
}
