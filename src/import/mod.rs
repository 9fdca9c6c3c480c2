//! Plan file import: budget, deadline, developers and projects from CSV or
//! Excel uploads.
//!
//! Imported plans are returned as-is; call [`PlanRequest::validate`] before
//! handing one to an optimizer.

mod csv_plan;
mod excel_plan;

use std::path::Path;

use tracing::{debug, warn};

use crate::core::{Developer, PlanRequest, Project};
use crate::error::{ChartError, ChartResult};

pub use csv_plan::parse_plan_csv;
pub use excel_plan::parse_plan_workbook;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlanFileFormat {
    Csv,
    Xlsx,
    Xls,
}

impl PlanFileFormat {
    /// Picks the format from the file extension (case-insensitive).
    pub fn from_filename(filename: &str) -> ChartResult<Self> {
        let extension = Path::new(filename)
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase)
            .unwrap_or_default();
        match extension.as_str() {
            "csv" => Ok(Self::Csv),
            "xlsx" => Ok(Self::Xlsx),
            "xls" => Ok(Self::Xls),
            _ => Err(ChartError::UnsupportedFormat(filename.to_owned())),
        }
    }
}

pub fn import_plan_file(bytes: &[u8], filename: &str) -> ChartResult<PlanRequest> {
    let format = PlanFileFormat::from_filename(filename)?;
    let plan = match format {
        PlanFileFormat::Csv => parse_plan_csv(bytes),
        PlanFileFormat::Xlsx | PlanFileFormat::Xls => parse_plan_workbook(bytes),
    }
    .inspect_err(|err| warn!(filename, error = %err, "plan import failed"))?;

    debug!(
        filename,
        developers = plan.developers.len(),
        projects = plan.projects.len(),
        "plan imported"
    );
    Ok(plan)
}

pub fn import_plan_path(path: &Path) -> ChartResult<PlanRequest> {
    let bytes = std::fs::read(path)
        .map_err(|e| ChartError::Import(format!("failed to read `{}`: {e}", path.display())))?;
    let filename = path
        .file_name()
        .and_then(|name| name.to_str())
        .unwrap_or_default();
    import_plan_file(&bytes, filename)
}

/// Column roles shared by the CSV and Excel layouts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DeveloperColumn {
    Name,
    Rate,
    HoursPerDay,
    Skills,
}

impl DeveloperColumn {
    fn from_header(header: &str) -> Option<Self> {
        match header.trim().to_ascii_lowercase().as_str() {
            "name" => Some(Self::Name),
            "rate" => Some(Self::Rate),
            "hours per day" | "hours_per_day" => Some(Self::HoursPerDay),
            "skills" => Some(Self::Skills),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ProjectColumn {
    Name,
    Hours,
    Priority,
    Dependencies,
    RequiredSkills,
}

impl ProjectColumn {
    fn from_header(header: &str) -> Option<Self> {
        match header.trim().to_ascii_lowercase().as_str() {
            "name" => Some(Self::Name),
            "hours" => Some(Self::Hours),
            "priority" => Some(Self::Priority),
            "dependencies" => Some(Self::Dependencies),
            "required skills" | "required_skills" => Some(Self::RequiredSkills),
            _ => None,
        }
    }
}

const DEFAULT_PRIORITY: i64 = 1;

fn empty_developer() -> Developer {
    Developer {
        name: String::new(),
        rate: 0.0,
        hours_per_day: 0.0,
        skills: Vec::new(),
    }
}

fn empty_project() -> Project {
    Project {
        name: String::new(),
        hours: 0.0,
        priority: DEFAULT_PRIORITY,
        dependencies: Vec::new(),
        required_skills: Vec::new(),
    }
}

fn apply_developer_cell(
    developer: &mut Developer,
    column: DeveloperColumn,
    cell: &str,
    row: usize,
) -> ChartResult<()> {
    match column {
        DeveloperColumn::Name => developer.name = cell.trim().to_owned(),
        DeveloperColumn::Rate => developer.rate = parse_number(cell, row, "rate")?,
        DeveloperColumn::HoursPerDay => {
            developer.hours_per_day = parse_number(cell, row, "hours per day")?;
        }
        DeveloperColumn::Skills => developer.skills = split_list(cell),
    }
    Ok(())
}

fn apply_project_cell(
    project: &mut Project,
    column: ProjectColumn,
    cell: &str,
    row: usize,
) -> ChartResult<()> {
    match column {
        ProjectColumn::Name => project.name = cell.trim().to_owned(),
        ProjectColumn::Hours => project.hours = parse_number(cell, row, "hours")?,
        ProjectColumn::Priority => project.priority = parse_priority(cell, row)?,
        ProjectColumn::Dependencies => project.dependencies = split_list(cell),
        ProjectColumn::RequiredSkills => project.required_skills = split_list(cell),
    }
    Ok(())
}

/// Parses a numeric cell; an empty cell reads as `0`.
fn parse_number(cell: &str, row: usize, field: &str) -> ChartResult<f64> {
    let cell = cell.trim();
    if cell.is_empty() {
        return Ok(0.0);
    }
    cell.parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| ChartError::Import(format!("row {row}: invalid {field} `{cell}`")))
}

fn parse_priority(cell: &str, row: usize) -> ChartResult<i64> {
    let cell = cell.trim();
    if cell.is_empty() {
        return Ok(DEFAULT_PRIORITY);
    }
    cell.parse::<i64>()
        .map_err(|_| ChartError::Import(format!("row {row}: invalid priority `{cell}`")))
}

/// Splits a comma-separated cell, dropping blank entries.
fn split_list(cell: &str) -> Vec<String> {
    cell.split(',')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(str::to_owned)
        .collect()
}
