use clap::{Parser, Subcommand};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::time::Instant;

use ids_app::{
    AppError, AppResult, LabConfig, METRIC_LABELS, RunRequest, SIMULATED_RUN_DELAY,
    SelectionState, build_chart, config, execute_run, export_history_json, format_run_timestamp,
    selected_runs,
};
use ids_catalog::{ModelKind, parameter_options};
use ids_results::RunStore;

#[derive(Parser)]
#[command(name = "ids-cli")]
#[command(about = "idsbench CLI - simulated intrusion-detection experiment runner", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the available detection models
    Models,
    /// List the parameter presets for a model
    Params {
        /// Model slug or label (e.g. lccde, "Tree-based")
        model: String,
    },
    /// Execute simulated experiment runs and print the session history
    Run {
        /// Dataset file; only the file name is captured, contents are never read
        dataset: PathBuf,
        /// Model slug or label
        #[arg(long)]
        model: Option<String>,
        /// Parameter preset value (see `params`)
        #[arg(long)]
        param: Option<String>,
        /// Number of runs to execute in this session
        #[arg(long, default_value_t = 1)]
        count: u32,
        /// Skip the simulated backend delay
        #[arg(long)]
        no_wait: bool,
        /// Print the run history as JSON after the batch
        #[arg(long)]
        json: bool,
        /// Workbench config file (defaults to ./idsbench.yaml when present)
        #[arg(long)]
        config: Option<PathBuf>,
    },
}

fn main() -> AppResult<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Models => cmd_models(),
        Commands::Params { model } => cmd_params(&model),
        Commands::Run {
            dataset,
            model,
            param,
            count,
            no_wait,
            json,
            config,
        } => cmd_run(
            &dataset,
            model.as_deref(),
            param,
            count,
            no_wait,
            json,
            config.as_deref(),
        ),
    }
}

fn cmd_models() -> AppResult<()> {
    println!("Available models:");
    for model in ModelKind::ALL {
        println!("  {} ({})", model.label(), model.slug());
    }
    Ok(())
}

fn cmd_params(model_arg: &str) -> AppResult<()> {
    let model = parse_model(model_arg)?;
    println!("Parameter presets for {}:", model.label());
    for preset in parameter_options(model) {
        println!("  {:<22} {}", preset.value, preset.label);
    }
    Ok(())
}

fn cmd_run(
    dataset: &Path,
    model_arg: Option<&str>,
    param: Option<String>,
    count: u32,
    no_wait: bool,
    json: bool,
    config_path: Option<&Path>,
) -> AppResult<()> {
    let config = load_config(config_path)?;

    let model = model_arg.map(parse_model).transpose()?;
    let request = RunRequest {
        dataset: dataset_name(dataset),
        model,
        parameter: param,
    };

    let mut store = RunStore::new();
    for _ in 0..count {
        if !no_wait {
            wait_for_simulated_backend();
        }
        let record = execute_run(&mut store, &request, &config)?;
        println!("✓ {} completed", record.label());
        for (label, value) in METRIC_LABELS.iter().zip(record.metrics.values()) {
            println!("  {:<10} {:>5.1}%", label, value);
        }
    }

    print_history(&store);
    print_comparison(&store);

    if json {
        println!("{}", export_history_json(store.runs())?);
    }

    Ok(())
}

fn load_config(path: Option<&Path>) -> AppResult<LabConfig> {
    let config = match path {
        Some(path) => config::load_yaml(path)?,
        None => config::load_or_default(Path::new("idsbench.yaml"))?,
    };
    tracing::debug!(?config, "workbench config loaded");
    Ok(config)
}

fn parse_model(input: &str) -> AppResult<ModelKind> {
    input
        .parse()
        .map_err(|e: ids_catalog::ModelParseError| AppError::Validation(e.to_string()))
}

/// Capture the selected file's name, never its contents.
fn dataset_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.to_string_lossy().into_owned())
}

fn wait_for_simulated_backend() {
    let spinner = ['|', '/', '-', '\\'];
    let started = Instant::now();
    let mut tick = 0usize;
    while started.elapsed() < SIMULATED_RUN_DELAY {
        print!(
            "\r{} Running experiment  elapsed={:.1}s",
            spinner[tick % spinner.len()],
            started.elapsed().as_secs_f64()
        );
        let _ = io::stdout().flush();
        tick += 1;
        std::thread::sleep(std::time::Duration::from_millis(100));
    }
    print!("\r{}\r", " ".repeat(60));
    let _ = io::stdout().flush();
}

fn print_history(store: &RunStore) {
    println!("\nRun history:");
    for run in store.runs() {
        println!("  {:<24} {}", run.label(), format_run_timestamp(&run.timestamp));
    }
}

/// The CLI has no checkboxes; the whole session feeds the comparison.
fn print_comparison(store: &RunStore) {
    let mut selection = SelectionState::default();
    for run in store.runs() {
        selection.note_run(run.run_number);
    }

    let selected = selected_runs(store, &selection, ids_app::ComparisonMode::MultiSelect);
    let Some(chart) = build_chart(&selected) else {
        return;
    };

    println!("\nComparison:");
    print!("  {:<10}", "Metric");
    for series in &chart.series {
        print!("  {:>8}", format!("Run {}", series.run_number));
    }
    println!();

    for (index, label) in METRIC_LABELS.iter().enumerate() {
        print!("  {:<10}", label);
        for series in &chart.series {
            print!("  {:>7.1}%", series.values[index]);
        }
        println!();
    }
}
