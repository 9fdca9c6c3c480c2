use csv::{ReaderBuilder, Trim};
use tracing::{trace, warn};

use crate::core::{Developer, PlanRequest, Project};
use crate::error::{ChartError, ChartResult};

use super::{
    DeveloperColumn, ProjectColumn, apply_developer_cell, apply_project_cell, empty_developer,
    empty_project, parse_number,
};

/// Rows scanned for `Budget`/`Deadline` metadata.
const METADATA_ROW_LIMIT: usize = 10;

/// Parses a sectioned plan CSV:
///
/// ```text
/// Budget,50000
/// Deadline,60
/// Developers
/// Name,Rate,Hours per day,Skills
/// Alice,80,8,"rust,sql"
/// Projects
/// Name,Hours,Priority,Dependencies,Required Skills
/// Billing,120,2,,rust
/// ```
///
/// Each section starts at a row whose first cell names it, followed by a
/// header row. Records run until a blank line or a row with an empty first
/// cell. Error messages cite 1-based file lines.
pub fn parse_plan_csv(bytes: &[u8]) -> ChartResult<PlanRequest> {
    let text = std::str::from_utf8(bytes)
        .map_err(|e| ChartError::Import(format!("CSV file is not valid UTF-8: {e}")))?;
    let text = text.strip_prefix('\u{feff}').unwrap_or(text);

    let rows = read_rows(text)?;

    let (budget, deadline) = extract_metadata(&rows)?;
    let (developers_at, projects_at) = find_sections(&rows);
    let (Some(developers_at), Some(projects_at)) = (developers_at, projects_at) else {
        return Err(ChartError::Import(
            "could not find 'Developers' or 'Projects' sections in the CSV file".to_owned(),
        ));
    };

    Ok(PlanRequest {
        budget,
        deadline,
        developers: extract_developers(&rows, developers_at)?,
        projects: extract_projects(&rows, projects_at)?,
    })
}

/// One CSV record and the file line it starts on. Blank lines are kept as
/// rows without cells.
#[derive(Debug)]
struct CsvRow {
    line: usize,
    cells: Vec<String>,
}

/// Splits `text` into records, keeping blank lines as empty rows.
///
/// Quoted fields may span lines; a record ends at the first line break
/// outside quotes.
fn read_rows(text: &str) -> ChartResult<Vec<CsvRow>> {
    let mut rows = Vec::new();
    let mut pending = String::new();
    let mut start_line = 0;
    let mut in_quotes = false;

    for (index, line) in text.lines().enumerate() {
        if pending.is_empty() && !in_quotes {
            start_line = index + 1;
        } else {
            pending.push('\n');
        }
        pending.push_str(line);
        if line.matches('"').count() % 2 == 1 {
            in_quotes = !in_quotes;
        }
        if !in_quotes {
            rows.push(CsvRow {
                line: start_line,
                cells: parse_record(&pending, start_line)?,
            });
            pending.clear();
        }
    }
    if !pending.is_empty() {
        return Err(ChartError::Import(format!(
            "CSV parsing error: unterminated quoted field starting on line {start_line}"
        )));
    }
    Ok(rows)
}

fn parse_record(record: &str, line: usize) -> ChartResult<Vec<String>> {
    if record.trim().is_empty() {
        return Ok(Vec::new());
    }
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(Trim::All)
        .from_reader(record.as_bytes());

    match reader.records().next() {
        Some(Ok(fields)) => Ok(fields.iter().map(str::to_owned).collect()),
        Some(Err(e)) => Err(ChartError::Import(format!(
            "CSV parsing error on line {line}: {e}"
        ))),
        None => Ok(Vec::new()),
    }
}

fn first_cell(row: &CsvRow) -> &str {
    row.cells.first().map_or("", String::as_str)
}

fn extract_metadata(rows: &[CsvRow]) -> ChartResult<(f64, f64)> {
    let mut budget = 0.0;
    let mut deadline = 0.0;
    for row in rows.iter().take(METADATA_ROW_LIMIT) {
        let [key, value, ..] = row.cells.as_slice() else {
            continue;
        };
        if key.eq_ignore_ascii_case("budget") {
            budget = parse_number(value, row.line, "budget")?;
        } else if key.eq_ignore_ascii_case("deadline") {
            deadline = parse_number(value, row.line, "deadline")?;
        }
    }
    Ok((budget, deadline))
}

/// Index of the `Developers` and `Projects` marker rows; the last marker wins.
fn find_sections(rows: &[CsvRow]) -> (Option<usize>, Option<usize>) {
    let mut developers = None;
    let mut projects = None;
    for (index, row) in rows.iter().enumerate() {
        let key = first_cell(row);
        if key.eq_ignore_ascii_case("developers") {
            developers = Some(index);
        } else if key.eq_ignore_ascii_case("projects") {
            projects = Some(index);
        }
    }
    (developers, projects)
}

fn header_row(rows: &[CsvRow], section_at: usize) -> &[String] {
    rows.get(section_at + 1)
        .map(|row| row.cells.as_slice())
        .unwrap_or(&[])
}

fn extract_developers(rows: &[CsvRow], section_at: usize) -> ChartResult<Vec<Developer>> {
    let columns: Vec<Option<DeveloperColumn>> = header_row(rows, section_at)
        .iter()
        .map(|h| DeveloperColumn::from_header(h))
        .collect();

    let mut developers = Vec::new();
    for row in rows.iter().skip(section_at + 2) {
        let key = first_cell(row);
        if key.is_empty() || key.eq_ignore_ascii_case("projects") {
            break;
        }

        let mut developer = empty_developer();
        for (cell, column) in row.cells.iter().zip(&columns) {
            if let Some(column) = column {
                apply_developer_cell(&mut developer, *column, cell, row.line)?;
            }
        }

        if developer.name.is_empty() {
            warn!(row = row.line, "skipping developer row without a name");
            continue;
        }
        trace!(row = row.line, name = %developer.name, "developer row imported");
        developers.push(developer);
    }
    Ok(developers)
}

fn extract_projects(rows: &[CsvRow], section_at: usize) -> ChartResult<Vec<Project>> {
    let columns: Vec<Option<ProjectColumn>> = header_row(rows, section_at)
        .iter()
        .map(|h| ProjectColumn::from_header(h))
        .collect();

    let mut projects = Vec::new();
    for row in rows.iter().skip(section_at + 2) {
        if first_cell(row).is_empty() {
            break;
        }

        let mut project = empty_project();
        for (cell, column) in row.cells.iter().zip(&columns) {
            if let Some(column) = column {
                apply_project_cell(&mut project, *column, cell, row.line)?;
            }
        }

        if project.name.is_empty() {
            warn!(row = row.line, "skipping project row without a name");
            continue;
        }
        trace!(row = row.line, name = %project.name, "project row imported");
        projects.push(project);
    }
    Ok(projects)
}
