use std::io::Cursor;

use calamine::{Data, Range, Reader, open_workbook_auto_from_rs};
use tracing::warn;

use crate::core::{Developer, PlanRequest, Project};
use crate::error::{ChartError, ChartResult};

use super::{
    DeveloperColumn, ProjectColumn, apply_developer_cell, apply_project_cell, empty_developer,
    empty_project, parse_number,
};

const METADATA_SHEET: &str = "Metadata";
const DEVELOPERS_SHEET: &str = "Developers";
const PROJECTS_SHEET: &str = "Projects";

/// Parses a plan workbook (`.xlsx` or `.xls`).
///
/// `Metadata` holds the budget in B1 and the deadline in B2; `Developers` and
/// `Projects` are headed tables using the same column names as the CSV layout.
pub fn parse_plan_workbook(bytes: &[u8]) -> ChartResult<PlanRequest> {
    let mut workbook = open_workbook_auto_from_rs(Cursor::new(bytes.to_vec()))
        .map_err(|e| ChartError::Import(format!("Excel parsing error: {e}")))?;

    let mut sheet = |name: &str| -> ChartResult<Range<Data>> {
        workbook
            .worksheet_range(name)
            .map_err(|e| ChartError::Import(format!("Excel sheet `{name}`: {e}")))
    };

    let metadata = sheet(METADATA_SHEET)?;
    let budget = metadata_value(&metadata, 0, "budget")?;
    let deadline = metadata_value(&metadata, 1, "deadline")?;
    let developers = extract_developers(&sheet(DEVELOPERS_SHEET)?)?;
    let projects = extract_projects(&sheet(PROJECTS_SHEET)?)?;

    Ok(PlanRequest {
        budget,
        deadline,
        developers,
        projects,
    })
}

fn cell_text(cell: &Data) -> String {
    match cell {
        Data::Empty => String::new(),
        Data::String(text) => text.trim().to_owned(),
        other => other.to_string(),
    }
}

fn metadata_value(sheet: &Range<Data>, row: u32, field: &str) -> ChartResult<f64> {
    match sheet.get_value((row, 1)) {
        Some(Data::Float(value)) => Ok(*value),
        Some(Data::Int(value)) => Ok(*value as f64),
        Some(other) => parse_number(&cell_text(other), row as usize + 1, field),
        None => Err(ChartError::Import(format!(
            "Metadata sheet is missing {field} in row {}",
            row + 1
        ))),
    }
}

/// Header names of the first row, then the remaining rows as text cells.
fn headed_rows(sheet: &Range<Data>) -> (Vec<String>, Vec<Vec<String>>) {
    let mut rows = sheet
        .rows()
        .map(|row| row.iter().map(cell_text).collect::<Vec<String>>());
    let headers = rows.next().unwrap_or_default();
    (headers, rows.collect())
}

fn extract_developers(sheet: &Range<Data>) -> ChartResult<Vec<Developer>> {
    let (headers, rows) = headed_rows(sheet);
    let columns: Vec<Option<DeveloperColumn>> = headers
        .iter()
        .map(|h| DeveloperColumn::from_header(h))
        .collect();

    let mut developers = Vec::new();
    for (index, row) in rows.iter().enumerate() {
        let mut developer = empty_developer();
        for (cell, column) in row.iter().zip(&columns) {
            if let Some(column) = column {
                apply_developer_cell(&mut developer, *column, cell, index + 2)?;
            }
        }
        if developer.name.is_empty() {
            warn!(
                sheet = DEVELOPERS_SHEET,
                row = index + 2,
                "skipping row without a name"
            );
            continue;
        }
        developers.push(developer);
    }
    Ok(developers)
}

fn extract_projects(sheet: &Range<Data>) -> ChartResult<Vec<Project>> {
    let (headers, rows) = headed_rows(sheet);
    let columns: Vec<Option<ProjectColumn>> = headers
        .iter()
        .map(|h| ProjectColumn::from_header(h))
        .collect();

    let mut projects = Vec::new();
    for (index, row) in rows.iter().enumerate() {
        let mut project = empty_project();
        for (cell, column) in row.iter().zip(&columns) {
            if let Some(column) = column {
                apply_project_cell(&mut project, *column, cell, index + 2)?;
            }
        }
        if project.name.is_empty() {
            warn!(
                sheet = PROJECTS_SHEET,
                row = index + 2,
                "skipping row without a name"
            );
            continue;
        }
        projects.push(project);
    }
    Ok(projects)
}
