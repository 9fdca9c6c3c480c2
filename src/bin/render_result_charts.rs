use std::fs;
use std::path::{Path, PathBuf};

use qeo_charts::api::{
    ChartPresenter, MemoryPage, PresenterConfig, ProjectBreakdownPresenter,
    RenderSnapshotJsonContractV1,
};
use qeo_charts::core::OptimizationResult;
use qeo_charts::import::import_plan_path;
use qeo_charts::render::RecordingBackend;
use qeo_charts::telemetry::init_default_tracing;

const USAGE: &str = "usage: render_result_charts --input <result.json> --output <snapshot.json> [--config <config.json>] [--plan <plan.csv|xlsx>] [--budget <n>] [--deadline <n>] [--breakdown]";

#[derive(Debug)]
struct CliArgs {
    input: PathBuf,
    output: PathBuf,
    config: Option<PathBuf>,
    plan: Option<PathBuf>,
    budget: Option<String>,
    deadline: Option<String>,
    breakdown: bool,
}

fn main() {
    let _ = init_default_tracing();
    if let Err(err) = run() {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let args = parse_args()?;

    let raw = fs::read_to_string(&args.input)
        .map_err(|err| format!("failed to read `{}`: {err}", args.input.display()))?;
    let result = OptimizationResult::from_json_str(&raw).map_err(|err| err.to_string())?;

    let config = match &args.config {
        Some(path) => {
            let raw = fs::read_to_string(path)
                .map_err(|err| format!("failed to read `{}`: {err}", path.display()))?;
            PresenterConfig::from_json_str(&raw).map_err(|err| err.to_string())?
        }
        None => PresenterConfig::default(),
    };

    let mut page = MemoryPage::with_elements(&config.elements);
    if let Some(path) = &args.plan {
        let plan = import_plan_path(path).map_err(|err| err.to_string())?;
        page.set_input(&config.elements.budget_input, plan.budget.to_string());
        page.set_input(&config.elements.deadline_input, plan.deadline.to_string());
    }
    if let Some(budget) = &args.budget {
        page.set_input(&config.elements.budget_input, budget.as_str());
    }
    if let Some(deadline) = &args.deadline {
        page.set_input(&config.elements.deadline_input, deadline.as_str());
    }

    let snapshot = if args.breakdown {
        let mut presenter = ProjectBreakdownPresenter::new(RecordingBackend::default(), config)
            .map_err(|err| err.to_string())?;
        presenter
            .render(&page, &result)
            .map_err(|err| err.to_string())?;
        RenderSnapshotJsonContractV1::new(presenter.backend().snapshot(), page.texts().clone(), None)
    } else {
        let mut presenter = ChartPresenter::new(RecordingBackend::default(), config)
            .map_err(|err| err.to_string())?;
        presenter
            .update(&mut page, &result)
            .map_err(|err| err.to_string())?;
        RenderSnapshotJsonContractV1::new(
            presenter.backend().snapshot(),
            page.texts().clone(),
            presenter.last_summary(),
        )
    };

    let json = snapshot.to_json_pretty().map_err(|err| err.to_string())?;
    write_output(&args.output, &json)
}

fn write_output(path: &Path, json: &str) -> Result<(), String> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .map_err(|err| format!("failed to create `{}`: {err}", parent.display()))?;
        }
    }
    fs::write(path, json).map_err(|err| format!("failed to write `{}`: {err}", path.display()))
}

fn parse_args() -> Result<CliArgs, String> {
    let mut args = std::env::args().skip(1);

    let mut input = None::<PathBuf>;
    let mut output = None::<PathBuf>;
    let mut config = None::<PathBuf>;
    let mut plan = None::<PathBuf>;
    let mut budget = None::<String>;
    let mut deadline = None::<String>;
    let mut breakdown = false;

    while let Some(flag) = args.next() {
        let mut value = |name: &str| {
            args.next()
                .ok_or_else(|| format!("missing value for {name}"))
        };
        match flag.as_str() {
            "--input" => input = Some(PathBuf::from(value("--input")?)),
            "--output" => output = Some(PathBuf::from(value("--output")?)),
            "--config" => config = Some(PathBuf::from(value("--config")?)),
            "--plan" => plan = Some(PathBuf::from(value("--plan")?)),
            "--budget" => budget = Some(value("--budget")?),
            "--deadline" => deadline = Some(value("--deadline")?),
            "--breakdown" => breakdown = true,
            "--help" | "-h" => return Err(USAGE.to_owned()),
            _ => return Err(format!("unknown argument `{flag}`\n{USAGE}")),
        }
    }

    Ok(CliArgs {
        input: input.ok_or_else(|| format!("missing --input\n{USAGE}"))?,
        output: output.ok_or_else(|| format!("missing --output\n{USAGE}"))?,
        config,
        plan,
        budget,
        deadline,
        breakdown,
    })
}
