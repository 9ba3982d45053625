//! relation-gen: renders the type relation table for the value comparator
//!
//! Run from the build step to (re)generate the table, or with `check` in CI
//! to fail when the committed artifact is stale.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use tracing::{error, info};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use type_ordering::{OutputFormat, RelationTableService, RenderConfig, TypeTag};

/// relation-gen: type relation table generator
#[derive(Parser, Debug)]
#[command(name = "relation-gen")]
#[command(about = "Generate the 16x16 type relation table used by the value comparator")]
struct Cli {
    /// Log at debug level (RUST_LOG overrides)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render the table to a file or stdout
    Generate {
        #[command(flatten)]
        render: RenderArgs,

        /// Destination file (stdout when omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Fail if the file on disk differs from a fresh rendering
    Check {
        #[command(flatten)]
        render: RenderArgs,

        /// Generated file to compare against
        #[arg(short, long)]
        output: PathBuf,
    },
    /// Print the relation for a single pair of types
    Relate {
        /// First type (name or code 0-15)
        type1: TypeTag,
        /// Second type (name or code 0-15)
        type2: TypeTag,
    },
}

#[derive(Args, Debug, Default)]
struct RenderArgs {
    /// JSON render config; flags below override it
    #[arg(long)]
    config: Option<PathBuf>,

    /// Output format: go, rust or json
    #[arg(short, long)]
    format: Option<OutputFormat>,

    /// Name of the relation enumeration
    #[arg(long)]
    enum_name: Option<String>,

    /// Identifier of the generated array
    #[arg(long)]
    table_name: Option<String>,

    /// Go package clause
    #[arg(long)]
    package: Option<String>,

    /// Maximum line width of the literal
    #[arg(long)]
    width: Option<usize>,

    /// Omit the generated-code banner
    #[arg(long)]
    no_header: bool,
}

impl RenderArgs {
    fn resolve(&self) -> Result<RenderConfig> {
        let mut config = match &self.config {
            Some(path) => RenderConfig::load(path)
                .with_context(|| format!("Failed to load render config {}", path.display()))?,
            None => RenderConfig::default(),
        };

        if let Some(format) = self.format {
            config.format = format;
        }
        if let Some(name) = &self.enum_name {
            config.enum_name = name.clone();
        }
        if let Some(name) = &self.table_name {
            config.table_name = name.clone();
        }
        if let Some(package) = &self.package {
            config.package = Some(package.clone());
        }
        if let Some(width) = self.width {
            config.max_line_width = width;
        }
        if self.no_header {
            config.emit_header = false;
        }

        config.validate()?;
        Ok(config)
    }
}

fn init_logging(verbose: bool) -> Result<()> {
    let default_level = if verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let subscriber = FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;
    Ok(())
}

fn render(args: &RenderArgs) -> Result<String> {
    let config = args.resolve()?;
    let service = RelationTableService::with_config(config);
    let rendered = service
        .render()
        .context("Failed to build relation table")?;
    Ok(rendered)
}

fn generate(args: &RenderArgs, output: Option<&Path>) -> Result<()> {
    let rendered = render(args)?;
    match output {
        Some(path) => {
            fs::write(path, &rendered)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            info!(path = %path.display(), bytes = rendered.len(), "Relation table written");
        }
        None => print!("{}", rendered),
    }
    Ok(())
}

/// True when the file matches a fresh rendering
fn check(args: &RenderArgs, output: &Path) -> Result<bool> {
    let rendered = render(args)?;
    let on_disk = fs::read_to_string(output)
        .with_context(|| format!("Failed to read {}", output.display()))?;

    if on_disk == rendered {
        info!(path = %output.display(), "Relation table is up to date");
        Ok(true)
    } else {
        error!(path = %output.display(), "Relation table is stale; rerun relation-gen generate");
        Ok(false)
    }
}

fn run(cli: Cli) -> Result<ExitCode> {
    match cli.command {
        Command::Generate { render, output } => {
            generate(&render, output.as_deref())?;
            Ok(ExitCode::SUCCESS)
        }
        Command::Check { render, output } => {
            let fresh = check(&render, &output)?;
            Ok(if fresh {
                ExitCode::SUCCESS
            } else {
                ExitCode::FAILURE
            })
        }
        Command::Relate { type1, type2 } => {
            let relation = type_ordering::relation_table().get(type1, type2);
            println!("{} {} {}: {}", type1, type2, (type1.code() << 4) | type2.code(), relation);
            Ok(ExitCode::SUCCESS)
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Err(e) = init_logging(cli.verbose) {
        eprintln!("Warning: Failed to initialize logging: {}", e);
    }

    match run(cli) {
        Ok(code) => code,
        Err(e) => {
            error!("{:#}", e);
            ExitCode::FAILURE
        }
    }
}
