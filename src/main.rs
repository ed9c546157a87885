//! ONU Haïti Data
//!
//! Command-line entry point:
//! - `serve`: run the dashboard server
//! - `summary`: print the headline metrics
//! - `export`: write the department CSV
//! - `config`: print a default config file
//!
//! Environment variables:
//! - `ONU_HAITI_HOST`, `ONU_HAITI_PORT`: Server bind address
//! - `ONU_HAITI_LOG_LEVEL`, `ONU_HAITI_LOG_FORMAT`: Logging
//! - `RUST_LOG`: Overrides the configured log filter

use anyhow::Context;
use clap::{Parser, Subcommand, ValueEnum};
use std::io::Write;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use onu_haiti::api::{serve, AppState};
use onu_haiti::config::{generate_default_config, Config, LoggingConfig};
use onu_haiti::dashboard::{export_departments, render, RenderState, View};
use onu_haiti::data::Dataset;

#[derive(Parser)]
#[command(name = "onu-haiti")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "UN demonstration statistics dashboard for Haiti")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Config file (default: search standard locations)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the dashboard server (default)
    Serve {
        /// Host to bind to
        #[arg(long)]
        host: Option<String>,
        /// Port to listen on
        #[arg(short, long)]
        port: Option<u16>,
    },

    /// Print the headline metrics
    Summary {
        /// Department to select ("All" or a department name)
        #[arg(short, long)]
        department: Option<String>,
        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Table)]
        format: OutputFormat,
    },

    /// Export the department table as CSV
    Export {
        /// Output file (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Generate default config file
    Config {
        /// Output path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[derive(Clone, Copy, ValueEnum)]
pub enum OutputFormat {
    Table,
    Json,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let (config, outcome) = match &cli.config {
        Some(path) => (Config::load_with_env(path)?, None),
        None => {
            let outcome = Config::load_default();
            (outcome.config.clone(), Some(outcome))
        }
    };

    init_tracing(&config.logging);
    if let Some(outcome) = &outcome {
        outcome.log();
    }

    match cli.command.unwrap_or(Commands::Serve {
        host: None,
        port: None,
    }) {
        Commands::Serve { host, port } => run_server(config, host, port).await,
        Commands::Summary { department, format } => print_summary(&config, department, format),
        Commands::Export { output } => write_export(output),
        Commands::Config { output } => write_config(output),
    }
}

/// Initialize logging on stderr; `RUST_LOG` wins over the configured level
fn init_tracing(logging: &LoggingConfig) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        format!("onu_haiti={},tower_http=info", logging.level).into()
    });

    let registry = tracing_subscriber::registry().with(filter);

    if logging.is_json() {
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_writer(std::io::stderr),
            )
            .init();
    } else {
        registry
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init();
    }
}

async fn run_server(
    mut config: Config,
    host: Option<String>,
    port: Option<u16>,
) -> anyhow::Result<()> {
    if let Some(host) = host {
        config.server.host = host;
    }
    if let Some(port) = port {
        config.server.port = port;
    }

    tracing::info!("Starting ONU Haïti dashboard v{}", env!("CARGO_PKG_VERSION"));

    let dataset = Dataset::load();
    dataset
        .validate()
        .context("Compiled-in dataset violates its invariants")?;
    tracing::info!(
        departments = dataset.departments.len(),
        themes = dataset.themes.len(),
        "Dataset loaded"
    );

    let state = AppState::new(dataset, &config);
    serve(state, &config.server).await?;

    tracing::info!("ONU Haïti dashboard stopped");
    Ok(())
}

fn print_summary(
    config: &Config,
    department: Option<String>,
    format: OutputFormat,
) -> anyhow::Result<()> {
    let dataset = Dataset::load();
    let view = render(
        &dataset,
        &RenderState::from_values(department),
        &config.dashboard.render_options(),
    );

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&view)?),
        OutputFormat::Table => print_summary_table(&view),
    }

    Ok(())
}

fn print_summary_table(view: &View) {
    if let Some(notice) = &view.notice {
        eprintln!("warning: {}", notice);
    }

    println!("📊 Indicateurs Clés");
    for card in &view.cards {
        println!("  {:<20} {:>12}", card.label, card.value);
    }

    if let Some(selection) = &view.selection {
        let record = &selection.record;
        println!();
        println!("📍 {}", record.name);
        println!(
            "  {:<20} {:>12}",
            "Population",
            format!("{} ({:.1}%)", record.population, selection.population_share)
        );
        println!("  {:<20} {:>12}", "Projets ONU", record.un_projects);
        println!("  {:<20} {:>11}%", "Taux de pauvreté", record.poverty_rate);
        println!("  {:<20} {:>11}%", "Accès à l'eau", record.water_access);
    }
}

fn write_export(output: Option<PathBuf>) -> anyhow::Result<()> {
    let dataset = Dataset::load();
    let export = export_departments(&dataset.departments)?;

    match output {
        Some(path) => {
            std::fs::write(&path, &export.bytes)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            eprintln!("Wrote {} bytes to {}", export.bytes.len(), path.display());
        }
        None => std::io::stdout().write_all(&export.bytes)?,
    }

    Ok(())
}

fn write_config(output: Option<PathBuf>) -> anyhow::Result<()> {
    let content = generate_default_config();

    match output {
        Some(path) => {
            std::fs::write(&path, content)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            eprintln!("Wrote default config to {}", path.display());
        }
        None => print!("{}", content),
    }

    Ok(())
}
