use criterion::{Criterion, criterion_group, criterion_main};
use qeo_charts::api::{ChartPresenter, MemoryPage, PresenterConfig, ProjectBreakdownPresenter};
use qeo_charts::core::{Assignment, OptimizationResult, ProjectBreakdown};
use qeo_charts::render::{RecordingBackend, darken_color, generate_colors};
use std::hint::black_box;

fn generated_result(count: usize) -> OptimizationResult {
    let assignments: Vec<Assignment> = (0..count)
        .map(|i| {
            let project = format!("project-{}", i % 250);
            Assignment::new(project, 100.0 + i as f64, 8.0 + (i % 40) as f64, (i % 101) as f64)
        })
        .collect();
    let total_cost = assignments.iter().map(|a| a.cost).sum();
    OptimizationResult::new(assignments, total_cost, 42.0)
}

fn bench_generate_colors_1k(c: &mut Criterion) {
    c.bench_function("generate_colors_1k", |b| {
        b.iter(|| {
            let _ = generate_colors(black_box(1_000), black_box(false));
        })
    });
}

fn bench_darken_color_string(c: &mut Criterion) {
    c.bench_function("darken_color_string", |b| {
        b.iter(|| {
            let _ = darken_color(black_box("rgba(54, 162, 235, 0.7)"), black_box(20.0));
        })
    });
}

fn bench_project_breakdown_10k(c: &mut Criterion) {
    let result = generated_result(10_000);
    c.bench_function("project_breakdown_10k", |b| {
        b.iter(|| {
            let _ = ProjectBreakdown::from_assignments(black_box(&result.assignments), 8.0)
                .expect("breakdown should succeed");
        })
    });
}

fn bench_dashboard_update_10k(c: &mut Criterion) {
    let config = PresenterConfig::default();
    let mut page = MemoryPage::with_elements(&config.elements)
        .with_input("budget", "2000000")
        .with_input("deadline", "90");
    let mut presenter =
        ChartPresenter::new(RecordingBackend::default(), config).expect("presenter init");
    let result = generated_result(10_000);

    c.bench_function("dashboard_update_10k", |b| {
        b.iter(|| {
            presenter
                .update(&mut page, black_box(&result))
                .expect("update should succeed");
        })
    });
}

fn bench_breakdown_render_2k(c: &mut Criterion) {
    let config = PresenterConfig::default();
    let page = MemoryPage::with_elements(&config.elements);
    let mut presenter =
        ProjectBreakdownPresenter::new(RecordingBackend::default(), config).expect("presenter init");
    let result = generated_result(2_000);

    c.bench_function("breakdown_render_2k", |b| {
        b.iter(|| {
            presenter
                .render(&page, black_box(&result))
                .expect("render should succeed");
        })
    });
}

criterion_group!(
    benches,
    bench_generate_colors_1k,
    bench_darken_color_string,
    bench_project_breakdown_10k,
    bench_dashboard_update_10k,
    bench_breakdown_render_2k
);
criterion_main!(benches);
