use qeo_charts::ChartError;
use qeo_charts::core::{Developer, PlanRequest, Project};

fn developer(name: &str) -> Developer {
    Developer {
        name: name.to_owned(),
        rate: 75.0,
        hours_per_day: 8.0,
        skills: vec!["rust".to_owned()],
    }
}

fn project(name: &str, priority: i64) -> Project {
    Project {
        name: name.to_owned(),
        hours: 40.0,
        priority,
        dependencies: Vec::new(),
        required_skills: vec!["rust".to_owned()],
    }
}

fn valid_plan() -> PlanRequest {
    PlanRequest {
        budget: 10_000.0,
        deadline: 30.0,
        developers: vec![developer("Alice")],
        projects: vec![project("Billing", 3)],
    }
}

fn invalid_message(plan: &PlanRequest) -> String {
    match plan.validate().expect_err("plan should be rejected") {
        ChartError::InvalidInput(message) => message,
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn valid_plan_passes() {
    valid_plan().validate().expect("valid plan");
}

#[test]
fn non_positive_ceilings_are_rejected() {
    let mut plan = valid_plan();
    plan.budget = 0.0;
    assert!(invalid_message(&plan).contains("budget"));

    let mut plan = valid_plan();
    plan.deadline = f64::NAN;
    assert!(invalid_message(&plan).contains("deadline"));
}

#[test]
fn empty_rosters_are_rejected() {
    let mut plan = valid_plan();
    plan.developers.clear();
    assert!(invalid_message(&plan).contains("developer"));

    let mut plan = valid_plan();
    plan.projects.clear();
    assert!(invalid_message(&plan).contains("project"));
}

#[test]
fn developer_rate_and_hours_must_be_positive() {
    let mut plan = valid_plan();
    plan.developers[0].rate = -5.0;
    assert!(invalid_message(&plan).contains("rate"));

    let mut plan = valid_plan();
    plan.developers[0].hours_per_day = 0.0;
    assert!(invalid_message(&plan).contains("hours_per_day"));
}

#[test]
fn priority_must_be_between_one_and_five() {
    for priority in [1, 5] {
        let mut plan = valid_plan();
        plan.projects = vec![project("Edge", priority)];
        plan.validate().expect("boundary priority is valid");
    }
    for priority in [0, 6, -1] {
        let mut plan = valid_plan();
        plan.projects = vec![project("Edge", priority)];
        assert!(invalid_message(&plan).contains("priority"));
    }
}

#[test]
fn plan_json_is_validated_on_decode() {
    let json = valid_plan().to_json_pretty().expect("serialize");
    let decoded = PlanRequest::from_json_str(&json).expect("decode");
    assert_eq!(decoded, valid_plan());

    let mut broken = valid_plan();
    broken.projects[0].hours = 0.0;
    let json = broken.to_json_pretty().expect("serialize");
    assert!(PlanRequest::from_json_str(&json).is_err());
}
