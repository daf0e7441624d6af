use std::fs;
use std::path::{Path, PathBuf};

use clap::{Parser, ValueEnum};
use log::{info, warn};
use serde::{Deserialize, Serialize};

use table_cells::detect::{detect_table, load_image};
use table_cells::export::{export_cells, save_masks};
use table_cells::preprocess::PreprocessParams;
use table_cells::{TableGridParams, TableGridResult};

#[derive(Parser, Debug)]
#[command(
    name = "table-cells",
    version,
    about = "Detect the cells of a bordered table in a scanned image"
)]
struct Cli {
    /// Input image (any format supported by the `image` crate).
    image: PathBuf,

    /// JSON file with `grid` and/or `preprocess` parameter sections.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Directory for cell crops and mask dumps.
    #[arg(long, default_value = "output")]
    out_dir: PathBuf,

    /// Write the JSON report here instead of stdout.
    #[arg(long)]
    report: Option<PathBuf>,

    #[arg(long)]
    margin_x: Option<i32>,
    #[arg(long)]
    margin_y: Option<i32>,
    #[arg(long)]
    dot_margin: Option<i32>,
    #[arg(long)]
    line_tolerance_x: Option<i32>,
    #[arg(long)]
    line_tolerance_y: Option<i32>,

    /// Also save binary, line, table and intersection masks.
    #[arg(long)]
    save_masks: bool,

    /// Do not write cell crops.
    #[arg(long)]
    no_crops: bool,

    /// Log verbosity. Builds with the `tracing` feature let `RUST_LOG`
    /// override it.
    #[arg(long, value_enum, default_value_t = LogLevel::Info)]
    log_level: LogLevel,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum LogLevel {
    Off,
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    #[cfg(not(feature = "tracing"))]
    fn filter(self) -> log::LevelFilter {
        match self {
            LogLevel::Off => log::LevelFilter::Off,
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }

    #[cfg(feature = "tracing")]
    fn directive(self) -> &'static str {
        match self {
            LogLevel::Off => "off",
            LogLevel::Error => "error",
            LogLevel::Warn => "warn",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
            LogLevel::Trace => "trace",
        }
    }
}

#[derive(Debug, Default, Deserialize, Serialize)]
#[serde(default)]
struct RunConfig {
    grid: TableGridParams,
    preprocess: PreprocessParams,
}

#[derive(Debug, Serialize)]
struct Report {
    image_path: String,
    width: u32,
    height: u32,
    config: RunConfig,
    result: TableGridResult,
    crops: Vec<String>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    init_logging(cli.log_level)?;
    run(cli)
}

#[cfg(not(feature = "tracing"))]
fn init_logging(level: LogLevel) -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::new()
        .filter_level(level.filter())
        .format_timestamp_millis()
        .try_init()?;
    Ok(())
}

/// The report may go to stdout, so spans and events are written to stderr.
#[cfg(feature = "tracing")]
fn init_logging(level: LogLevel) -> Result<(), Box<dyn std::error::Error>> {
    use tracing_subscriber::fmt::format::FmtSpan;
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(level.directive()));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_span_events(FmtSpan::CLOSE)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|err| err as Box<dyn std::error::Error>)?;
    Ok(())
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let config = load_config(&cli)?;

    let img = load_image(&cli.image)?;
    let (width, height) = (img.width(), img.height());
    info!("loaded {} ({width}x{height})", cli.image.display());

    let found = detect_table(&img.to_luma8(), &config.preprocess, config.grid.clone())?;
    if let Some(reason) = &found.result.reason {
        warn!("no cells: {reason}");
    }

    if cli.save_masks {
        save_masks(&found.masks, &cli.out_dir)?;
    }

    let mut crops = Vec::new();
    if !cli.no_crops && !found.result.cells.is_empty() {
        let stem = cli
            .image
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| "table".to_string());
        let written = export_cells(&img.to_rgb8(), &found.result.cells, &cli.out_dir, &stem)?;
        crops = written
            .iter()
            .map(|p| p.to_string_lossy().into_owned())
            .collect();
    }

    let report = Report {
        image_path: cli.image.to_string_lossy().into_owned(),
        width,
        height,
        config,
        result: found.result,
        crops,
    };
    write_report(cli.report.as_deref(), &report)
}

fn load_config(cli: &Cli) -> Result<RunConfig, Box<dyn std::error::Error>> {
    let mut config = match &cli.config {
        Some(path) => serde_json::from_str(&fs::read_to_string(path)?)?,
        None => RunConfig::default(),
    };
    let grid = &mut config.grid;
    let overrides = [
        (cli.margin_x, &mut grid.margin_x),
        (cli.margin_y, &mut grid.margin_y),
        (cli.dot_margin, &mut grid.dot_margin),
        (cli.line_tolerance_x, &mut grid.line_tolerance_x),
        (cli.line_tolerance_y, &mut grid.line_tolerance_y),
    ];
    for (value, slot) in overrides {
        if let Some(v) = value {
            *slot = v;
        }
    }
    Ok(config)
}

fn write_report(path: Option<&Path>, report: &Report) -> Result<(), Box<dyn std::error::Error>> {
    let json = serde_json::to_string_pretty(report)?;
    match path {
        Some(path) => {
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent)?;
            }
            fs::write(path, json)?;
            info!("wrote report JSON to {}", path.display());
        }
        None => println!("{json}"),
    }
    Ok(())
}
