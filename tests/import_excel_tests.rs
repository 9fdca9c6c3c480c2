use qeo_charts::ChartError;
use qeo_charts::import::{import_plan_file, parse_plan_workbook};

const TEAM_PLAN_XLSX: &[u8] = include_bytes!("fixtures/team_plan.xlsx");

#[test]
fn workbook_imports_metadata_developers_and_projects() {
    let plan = import_plan_file(TEAM_PLAN_XLSX, "team_plan.xlsx").expect("import");

    assert_eq!(plan.budget, 5_000.0);
    assert_eq!(plan.deadline, 45.0);

    assert_eq!(plan.developers.len(), 2);
    assert_eq!(plan.developers[0].name, "Alice");
    assert_eq!(plan.developers[0].rate, 80.0);
    assert_eq!(plan.developers[0].hours_per_day, 8.0);
    assert_eq!(plan.developers[0].skills, vec!["rust", "sql"]);
    assert_eq!(plan.developers[1].rate, 65.5);

    assert_eq!(plan.projects.len(), 2);
    assert_eq!(plan.projects[0].name, "Billing");
    assert_eq!(plan.projects[0].priority, 2);
    assert!(plan.projects[0].dependencies.is_empty());
    assert_eq!(plan.projects[1].priority, 1);
    assert_eq!(plan.projects[1].dependencies, vec!["Billing"]);
    assert_eq!(plan.projects[1].required_skills, vec!["python", "sql"]);

    plan.validate().expect("imported plan is valid");
}

#[test]
fn workbook_bytes_parse_without_a_filename() {
    let plan = parse_plan_workbook(TEAM_PLAN_XLSX).expect("import");
    assert_eq!(plan.developers.len(), 2);
    assert_eq!(plan.projects.len(), 2);
}

#[test]
fn corrupt_workbook_is_an_import_error() {
    let err = import_plan_file(b"definitely not a zip archive", "plan.xlsx")
        .expect_err("garbage workbook");
    assert!(matches!(err, ChartError::Import(_)));
}
