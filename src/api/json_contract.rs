use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::core::{OptimizationResult, PlanRequest, ResultSummary};
use crate::error::{ChartError, ChartResult};
use crate::render::ChartSnapshot;

use super::PresenterConfig;

pub const RENDER_SNAPSHOT_JSON_SCHEMA_V1: u32 = 1;

/// Headless render output: live charts, page texts and derived percentages.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderSnapshotJsonContractV1 {
    pub schema_version: u32,
    pub charts: Vec<ChartSnapshot>,
    #[serde(default)]
    pub page_texts: IndexMap<String, String>,
    #[serde(default)]
    pub summary: Option<ResultSummary>,
}

impl RenderSnapshotJsonContractV1 {
    #[must_use]
    pub fn new(
        charts: Vec<ChartSnapshot>,
        page_texts: IndexMap<String, String>,
        summary: Option<ResultSummary>,
    ) -> Self {
        Self {
            schema_version: RENDER_SNAPSHOT_JSON_SCHEMA_V1,
            charts,
            page_texts,
            summary,
        }
    }

    pub fn to_json_pretty(&self) -> ChartResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| {
            ChartError::InvalidData(format!("failed to serialize render snapshot v1: {e}"))
        })
    }

    pub fn from_json_str(input: &str) -> ChartResult<Self> {
        let payload: Self = serde_json::from_str(input).map_err(|e| {
            ChartError::InvalidData(format!("failed to parse render snapshot payload: {e}"))
        })?;
        if payload.schema_version != RENDER_SNAPSHOT_JSON_SCHEMA_V1 {
            return Err(ChartError::InvalidData(format!(
                "unsupported render snapshot schema version: {}",
                payload.schema_version
            )));
        }
        Ok(payload)
    }
}

impl OptimizationResult {
    pub fn from_json_str(input: &str) -> ChartResult<Self> {
        serde_json::from_str(input).map_err(|e| {
            ChartError::InvalidData(format!("failed to parse optimization result: {e}"))
        })
    }

    pub fn to_json_pretty(&self) -> ChartResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| {
            ChartError::InvalidData(format!("failed to serialize optimization result: {e}"))
        })
    }
}

impl PlanRequest {
    /// Decodes and validates a plan request.
    pub fn from_json_str(input: &str) -> ChartResult<Self> {
        let request: Self = serde_json::from_str(input)
            .map_err(|e| ChartError::InvalidInput(format!("malformed plan request: {e}")))?;
        request.validate()?;
        Ok(request)
    }

    pub fn to_json_pretty(&self) -> ChartResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| {
            ChartError::InvalidData(format!("failed to serialize plan request: {e}"))
        })
    }
}

impl PresenterConfig {
    pub fn from_json_str(input: &str) -> ChartResult<Self> {
        let config: Self = serde_json::from_str(input).map_err(|e| {
            ChartError::InvalidData(format!("failed to parse presenter config: {e}"))
        })?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json_pretty(&self) -> ChartResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| {
            ChartError::InvalidData(format!("failed to serialize presenter config: {e}"))
        })
    }
}
