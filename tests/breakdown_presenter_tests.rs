use approx::assert_relative_eq;
use qeo_charts::ChartError;
use qeo_charts::api::{ElementIds, MemoryPage, PresenterConfig, ProjectBreakdownPresenter};
use qeo_charts::core::{Assignment, OptimizationResult, ProjectBreakdown};
use qeo_charts::ChartResult;
use qeo_charts::render::{
    ALTERNATE_PALETTE, ChartBackend, ChartData, ChartHandle, ChartKind, ChartSpec,
    PRIMARY_PALETTE, RecordingBackend, ValueFormat,
};

fn sample_result() -> OptimizationResult {
    OptimizationResult::new(
        vec![
            Assignment::new("Billing", 800.0, 40.0, 90.0),
            Assignment::new("Search", 300.0, 12.0, 70.0),
            Assignment::new("Billing", 200.0, 20.0, 60.0),
        ],
        1_300.0,
        8.0,
    )
}

fn breakdown_page() -> MemoryPage {
    MemoryPage::new()
        .with_canvas("cost-chart")
        .with_canvas("time-chart")
}

#[test]
fn aggregates_per_project_in_first_seen_order() {
    let breakdown =
        ProjectBreakdown::from_assignments(&sample_result().assignments, 8.0).expect("breakdown");

    assert_eq!(breakdown.labels(), vec!["Billing", "Search"]);
    assert_eq!(breakdown.costs(), vec![1_000.0, 300.0]);
    assert_eq!(breakdown.hours(), vec![60.0, 12.0]);
    assert_relative_eq!(breakdown.days()[0], 7.5);
    assert_relative_eq!(breakdown.days()[1], 1.5);
}

#[test]
fn breakdown_rejects_non_positive_hours_per_day() {
    let err = ProjectBreakdown::from_assignments(&[], 0.0).expect_err("must reject 0");
    assert!(matches!(err, ChartError::InvalidData(_)));
}

#[test]
fn renders_cost_and_day_bar_charts() {
    let page = breakdown_page();
    let mut presenter =
        ProjectBreakdownPresenter::new(RecordingBackend::default(), PresenterConfig::default())
            .expect("presenter init");

    presenter.render(&page, &sample_result()).expect("render");

    let backend = presenter.backend();
    let (_, cost) = backend.chart_on_canvas("cost-chart").expect("cost chart");
    let (_, time) = backend.chart_on_canvas("time-chart").expect("time chart");

    assert_eq!(cost.spec.kind, ChartKind::Bar);
    assert_eq!(cost.spec.options.value_format, ValueFormat::Currency);
    assert_eq!(cost.spec.data.values(0), Some(&[1_000.0, 300.0][..]));
    assert_eq!(time.spec.options.value_format, ValueFormat::Days);
    assert_eq!(time.spec.data.values(0), Some(&[7.5, 1.5][..]));

    let cost_dataset = &cost.spec.data.datasets[0];
    assert_eq!(cost_dataset.background_colors, PRIMARY_PALETTE[..2].to_vec());
    assert_eq!(cost_dataset.border_colors.len(), 2);
    assert!(cost_dataset
        .border_colors
        .iter()
        .all(|c| (c.alpha - 1.0).abs() <= 1e-12));
    assert_eq!(
        time.spec.data.datasets[0].background_colors,
        ALTERNATE_PALETTE[..2].to_vec()
    );
    assert_eq!(
        time.spec.tooltip_label(0, 0).as_deref(),
        Some("Billing: 7.5 days")
    );
}

#[test]
fn every_render_replaces_previous_charts() {
    let page = breakdown_page();
    let mut presenter =
        ProjectBreakdownPresenter::new(RecordingBackend::default(), PresenterConfig::default())
            .expect("presenter init");

    presenter.render(&page, &sample_result()).expect("first render");
    let first = presenter.charts().expect("charts");
    presenter.render(&page, &sample_result()).expect("second render");
    let second = presenter.charts().expect("charts");

    assert_ne!(first, second);
    let backend = presenter.backend();
    assert_eq!(backend.created_count(), 4);
    assert_eq!(backend.destroyed_count(), 2);
    assert_eq!(backend.live_chart_count(), 2);
    assert!(backend.chart(first.cost).is_none());
}

#[test]
fn empty_result_renders_empty_charts() {
    let page = breakdown_page();
    let mut presenter =
        ProjectBreakdownPresenter::new(RecordingBackend::default(), PresenterConfig::default())
            .expect("presenter init");

    presenter
        .render(&page, &OptimizationResult::default())
        .expect("render");

    let (_, cost) = presenter
        .backend()
        .chart_on_canvas("cost-chart")
        .expect("cost chart");
    assert!(cost.spec.data.labels.is_empty());
    assert_eq!(cost.spec.data.values(0), Some(&[][..]));
    assert!(presenter.last_breakdown().expect("breakdown").is_empty());
}

#[test]
fn custom_hours_per_day_changes_day_totals() {
    let page = breakdown_page();
    let config = PresenterConfig::default().with_hours_per_day(6.0);
    let mut presenter = ProjectBreakdownPresenter::new(RecordingBackend::default(), config)
        .expect("presenter init");

    presenter.render(&page, &sample_result()).expect("render");

    let (_, time) = presenter
        .backend()
        .chart_on_canvas("time-chart")
        .expect("time chart");
    assert_eq!(time.spec.data.values(0), Some(&[10.0, 2.0][..]));
}

#[test]
fn missing_canvas_fails_without_touching_backend() {
    let page = MemoryPage::with_elements(&ElementIds {
        time_chart: "elsewhere".to_owned(),
        ..ElementIds::default()
    });
    let mut presenter =
        ProjectBreakdownPresenter::new(RecordingBackend::default(), PresenterConfig::default())
            .expect("presenter init");

    let err = presenter
        .render(&page, &sample_result())
        .expect_err("missing canvas must fail");

    assert!(matches!(err, ChartError::MissingElement { ref id } if id == "time-chart"));
    assert_eq!(presenter.backend().created_count(), 0);
}

#[test]
fn destroy_releases_live_charts() {
    let page = breakdown_page();
    let mut presenter =
        ProjectBreakdownPresenter::new(RecordingBackend::default(), PresenterConfig::default())
            .expect("presenter init");
    presenter.render(&page, &sample_result()).expect("render");

    presenter.resize().expect("resize");
    presenter.destroy().expect("destroy");
    presenter.destroy().expect("destroy twice");

    assert!(presenter.charts().is_none());
    assert_eq!(presenter.backend().live_chart_count(), 0);
}

/// Recording backend whose next destroy of `refuse` fails once.
struct FlakyDestroyBackend {
    inner: RecordingBackend,
    refuse: Option<ChartHandle>,
}

impl ChartBackend for FlakyDestroyBackend {
    fn create_chart(&mut self, canvas_id: &str, spec: &ChartSpec) -> ChartResult<ChartHandle> {
        self.inner.create_chart(canvas_id, spec)
    }

    fn update_chart(&mut self, handle: ChartHandle, data: &ChartData) -> ChartResult<()> {
        self.inner.update_chart(handle, data)
    }

    fn resize_chart(&mut self, handle: ChartHandle) -> ChartResult<()> {
        self.inner.resize_chart(handle)
    }

    fn destroy_chart(&mut self, handle: ChartHandle) -> ChartResult<()> {
        if self.refuse == Some(handle) {
            self.refuse = None;
            return Err(ChartError::Backend("canvas is busy".to_owned()));
        }
        self.inner.destroy_chart(handle)
    }
}

fn flaky_presenter(refuse: u64) -> ProjectBreakdownPresenter<FlakyDestroyBackend> {
    let backend = FlakyDestroyBackend {
        inner: RecordingBackend::default(),
        refuse: Some(ChartHandle::new(refuse)),
    };
    let mut presenter = ProjectBreakdownPresenter::new(backend, PresenterConfig::default())
        .expect("presenter init");
    presenter
        .render(&breakdown_page(), &sample_result())
        .expect("render");
    presenter
}

#[test]
fn failed_cost_destroy_keeps_both_handles() {
    let mut presenter = flaky_presenter(1);
    let charts = presenter.charts().expect("charts");
    assert_eq!(charts.cost, ChartHandle::new(1));

    let err = presenter.destroy().expect_err("cost chart refuses");
    assert!(matches!(err, ChartError::Backend(_)));
    assert_eq!(presenter.charts(), Some(charts));
    assert_eq!(presenter.backend().inner.live_chart_count(), 2);

    presenter.destroy().expect("retry");
    assert!(presenter.charts().is_none());
    assert_eq!(presenter.backend().inner.live_chart_count(), 0);
}

#[test]
fn failed_time_destroy_is_retried_alone() {
    let mut presenter = flaky_presenter(2);

    presenter.destroy().expect_err("time chart refuses");
    assert!(presenter.charts().is_none());
    assert_eq!(presenter.backend().inner.live_chart_count(), 1);

    presenter.destroy().expect("retry");
    let backend = &presenter.backend().inner;
    assert_eq!(backend.live_chart_count(), 0);
    assert_eq!(backend.destroyed_count(), 2);
}
