//! arcgauge CLI - render arc gauges as SVG or JSON.

#![allow(
    clippy::needless_pass_by_value,
    clippy::unwrap_used,
    clippy::missing_errors_doc,
    clippy::struct_excessive_bools
)]

use arcgauge_core::{svg, GaugeRender, DEFAULT_MAX, DEFAULT_MIN, DEFAULT_SIZE, DEFAULT_STROKE_WIDTH};
use arcgauge_yaml::{GaugeConfig, GaugeManifest, ParseError, Theme, ThresholdConfig};
use clap::{Parser, Subcommand, ValueEnum};
use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use thiserror::Error;
use tracing::{debug, error, info};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "arcgauge")]
#[command(about = "Render 270-degree arc gauges as SVG")]
#[command(version)]
struct Cli {
    /// Log at debug level (RUST_LOG takes precedence)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render a single gauge from command-line parameters
    Render(RenderArgs),

    /// Render every gauge in a YAML manifest into a directory
    Manifest {
        /// Path to manifest file
        #[arg(default_value = "gauges.yaml")]
        manifest: PathBuf,

        /// Output directory
        #[arg(short, long, default_value = ".")]
        output: PathBuf,

        /// Output format
        #[arg(short, long, value_enum, default_value = "svg")]
        format: OutputFormat,
    },

    /// Check YAML manifest validity
    Check {
        /// Path to manifest file
        #[arg(default_value = "gauges.yaml")]
        manifest: PathBuf,
    },
}

#[derive(clap::Args)]
struct RenderArgs {
    /// Value to display (clamped to the range)
    #[arg(long, allow_hyphen_values = true)]
    value: f64,

    /// Range minimum
    #[arg(long, default_value_t = DEFAULT_MIN, allow_hyphen_values = true)]
    min: f64,

    /// Range maximum
    #[arg(long, default_value_t = DEFAULT_MAX, allow_hyphen_values = true)]
    max: f64,

    /// Drawing diameter
    #[arg(long, default_value_t = DEFAULT_SIZE)]
    size: f64,

    /// Stroke width
    #[arg(long, default_value_t = DEFAULT_STROKE_WIDTH)]
    stroke_width: f64,

    /// Secondary label below the value
    #[arg(long)]
    label: Option<String>,

    /// Do not draw the value at the center
    #[arg(long)]
    hide_value: bool,

    /// Fixed fill color (hex), disables threshold banding
    #[arg(long)]
    color: Option<String>,

    /// Track color (hex)
    #[arg(long)]
    track_color: Option<String>,

    /// Base palette
    #[arg(long, value_enum, default_value = "light")]
    theme: ThemeArg,

    /// Upper bound of the low band, as a fraction of the range
    #[arg(long)]
    low_threshold: Option<f64>,

    /// Upper bound of the medium band, as a fraction of the range
    #[arg(long)]
    medium_threshold: Option<f64>,

    /// Decimal places for path coordinates
    #[arg(long)]
    precision: Option<usize>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "svg")]
    format: OutputFormat,

    /// Output file (stdout when omitted)
    #[arg(short, long)]
    output: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Svg,
    Json,
}

impl OutputFormat {
    fn extension(self) -> &'static str {
        match self {
            Self::Svg => "svg",
            Self::Json => "json",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum ThemeArg {
    Light,
    Dark,
}

impl From<ThemeArg> for Theme {
    fn from(theme: ThemeArg) -> Self {
        match theme {
            ThemeArg::Light => Self::Light,
            ThemeArg::Dark => Self::Dark,
        }
    }
}

#[derive(Debug, Error)]
enum CliError {
    #[error("failed to read {}: {source}", path.display())]
    Read { path: PathBuf, source: io::Error },

    #[error("failed to write {}: {source}", path.display())]
    Write { path: PathBuf, source: io::Error },

    #[error(transparent)]
    Manifest(#[from] ParseError),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(cli.command) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(error = %e, "command failed");
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init();
}

fn run(command: Commands) -> Result<(), CliError> {
    match command {
        Commands::Render(args) => render_single(&args),
        Commands::Manifest {
            manifest,
            output,
            format,
        } => render_manifest(&manifest, &output, format).map(|written| {
            for path in written {
                println!("{}", path.display());
            }
        }),
        Commands::Check { manifest } => check_manifest(&manifest).map(|summary| {
            print!("{summary}");
        }),
    }
}

/// Single-gauge manifest equivalent to the `render` flags.
fn manifest_from_args(args: &RenderArgs) -> GaugeManifest {
    let mut gauge = GaugeConfig::new("gauge", args.value);
    gauge.min = args.min;
    gauge.max = args.max;
    gauge.size = args.size;
    gauge.stroke_width = args.stroke_width;
    gauge.label.clone_from(&args.label);
    gauge.show_value = !args.hide_value;
    gauge.primary_color.clone_from(&args.color);
    gauge.secondary_color.clone_from(&args.track_color);

    let thresholds = match (args.low_threshold, args.medium_threshold) {
        (None, None) => None,
        (low, medium) => {
            let defaults = arcgauge_core::ColorThresholds::default();
            Some(ThresholdConfig {
                low: low.unwrap_or(defaults.low()),
                medium: medium.unwrap_or(defaults.medium()),
            })
        }
    };

    GaugeManifest {
        theme: args.theme.into(),
        precision: args.precision,
        thresholds,
        gauges: vec![gauge],
        ..GaugeManifest::default()
    }
}

fn render_single(args: &RenderArgs) -> Result<(), CliError> {
    let manifest = manifest_from_args(args);
    let renderer = manifest.renderer()?;
    let document = manifest
        .specs()?
        .iter()
        .map(|(name, spec)| encode(name, &renderer.render(spec), args.format))
        .collect::<Result<String, _>>()?;

    match &args.output {
        Some(path) => {
            write_file(path, &document)?;
            info!(path = %path.display(), "wrote gauge");
        }
        None => println!("{document}"),
    }
    Ok(())
}

fn encode(name: &str, render: &GaugeRender, format: OutputFormat) -> Result<String, CliError> {
    match format {
        OutputFormat::Svg => Ok(svg::to_svg(render)),
        OutputFormat::Json => {
            let report = serde_json::json!({
                "name": name,
                "track_path": render.track_path_data(),
                "fill_path": render.fill_path_data(),
                "render": render,
            });
            Ok(serde_json::to_string_pretty(&report)?)
        }
    }
}

fn read_manifest(path: &Path) -> Result<GaugeManifest, CliError> {
    let content = fs::read_to_string(path).map_err(|source| CliError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(path = %path.display(), bytes = content.len(), "read manifest");
    Ok(GaugeManifest::from_yaml(&content)?)
}

fn write_file(path: &Path, contents: &str) -> Result<(), CliError> {
    fs::write(path, contents).map_err(|source| CliError::Write {
        path: path.to_path_buf(),
        source,
    })
}

/// File stem for a gauge name; anything outside `[A-Za-z0-9_-]` becomes `_`.
fn file_stem(name: &str) -> String {
    name.chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '-' || c == '_' {
                c
            } else {
                '_'
            }
        })
        .collect()
}

fn render_manifest(
    path: &Path,
    output: &Path,
    format: OutputFormat,
) -> Result<Vec<PathBuf>, CliError> {
    let manifest = read_manifest(path)?;
    let renderer = manifest.renderer()?;
    let specs = manifest.specs()?;

    let mut claimed: HashMap<String, &str> = HashMap::with_capacity(specs.len());
    for (name, _) in &specs {
        if let Some(first) = claimed.insert(file_stem(name), name) {
            return Err(ParseError::Validation(format!(
                "gauges '{first}' and '{name}' would both be written to {}.{}",
                file_stem(name),
                format.extension()
            ))
            .into());
        }
    }

    fs::create_dir_all(output).map_err(|source| CliError::Write {
        path: output.to_path_buf(),
        source,
    })?;

    let mut written = Vec::with_capacity(specs.len());
    for (name, spec) in &specs {
        let target = output.join(format!("{}.{}", file_stem(name), format.extension()));
        let document = encode(name, &renderer.render(spec), format)?;
        write_file(&target, &document)?;
        info!(gauge = %name, path = %target.display(), "wrote gauge");
        written.push(target);
    }
    Ok(written)
}

fn check_manifest(path: &Path) -> Result<String, CliError> {
    let manifest = read_manifest(path)?;
    manifest.validate()?;
    let thresholds = manifest.thresholds()?;
    let mut summary = format!(
        "Manifest valid: {}\n  Theme: {:?}\n  Thresholds: {} / {}\n  Gauges: {}\n",
        path.display(),
        manifest.theme,
        thresholds.low(),
        thresholds.medium(),
        manifest.gauges.len()
    );
    for gauge in &manifest.gauges {
        summary.push_str(&format!(
            "    {} = {} in [{}, {}]\n",
            gauge.name, gauge.value, gauge.min, gauge.max
        ));
    }
    Ok(summary)
}
