//! Chart specs for the budget/deadline/skill-match dashboard.

use crate::core::SKILL_MATCH_MAX;
use crate::render::{
    ChartData, ChartKind, ChartOptions, ChartSpec, Color, Dataset, ValueFormat, border_colors,
    generate_colors,
};

const SKILL_GAP_COLOR: Color = Color::rgba(201, 203, 207, 0.3);
const SKILL_MATCH_CUTOUT_PERCENT: f64 = 70.0;

fn comparison_data(labels: [&str; 2], dataset_label: &str, ceiling: f64, actual: f64) -> ChartData {
    let fills = generate_colors(2, false);
    let borders = border_colors(&fills);
    ChartData::new(labels.iter().map(|l| (*l).to_owned()).collect()).with_dataset(
        Dataset::new(dataset_label, [ceiling, actual])
            .with_background_colors(fills)
            .with_border_colors(borders),
    )
}

#[must_use]
pub fn cost_chart_data(budget: f64, total_cost: f64) -> ChartData {
    comparison_data(["Budget", "Actual Cost"], "Cost ($)", budget, total_cost)
}

#[must_use]
pub fn time_chart_data(deadline: f64, completion_time: f64) -> ChartData {
    comparison_data(
        ["Deadline", "Completion Time"],
        "Time (days)",
        deadline,
        completion_time,
    )
}

#[must_use]
pub fn skill_match_chart_data(average_skill_match: f64) -> ChartData {
    let matched = generate_colors(3, false)[2];
    ChartData::new(vec!["Skill Match".to_owned(), "Gap".to_owned()]).with_dataset(
        Dataset::new(
            "Skill match (%)",
            [average_skill_match, SKILL_MATCH_MAX - average_skill_match],
        )
        .with_background_colors(vec![matched, SKILL_GAP_COLOR])
        .with_border_width(0.0),
    )
}

#[must_use]
pub fn cost_chart_spec(budget: f64, total_cost: f64) -> ChartSpec {
    ChartSpec::new(ChartKind::Bar, cost_chart_data(budget, total_cost)).with_options(
        ChartOptions {
            title: Some("Budget vs. Actual Cost".to_owned()),
            value_axis_title: Some("Cost ($)".to_owned()),
            value_format: ValueFormat::Currency,
            ..ChartOptions::default()
        },
    )
}

#[must_use]
pub fn time_chart_spec(deadline: f64, completion_time: f64) -> ChartSpec {
    ChartSpec::new(ChartKind::Bar, time_chart_data(deadline, completion_time)).with_options(
        ChartOptions {
            title: Some("Deadline vs. Completion Time".to_owned()),
            value_axis_title: Some("Days".to_owned()),
            value_format: ValueFormat::Days,
            ..ChartOptions::default()
        },
    )
}

#[must_use]
pub fn skill_match_chart_spec(average_skill_match: f64) -> ChartSpec {
    ChartSpec::new(
        ChartKind::Doughnut,
        skill_match_chart_data(average_skill_match),
    )
    .with_options(ChartOptions {
        title: Some("Average Skill Match".to_owned()),
        value_format: ValueFormat::Percent,
        show_legend: true,
        cutout_percent: Some(SKILL_MATCH_CUTOUT_PERCENT),
        ..ChartOptions::default()
    })
}
