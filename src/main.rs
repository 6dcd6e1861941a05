use anyhow::Result;
use clap::{Parser, Subcommand};
use promwide::*;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::time::FormatTime;

struct LocalTimer;

impl FormatTime for LocalTimer {
    fn format_time(&self, w: &mut tracing_subscriber::fmt::format::Writer<'_>) -> std::fmt::Result {
        write!(
            w,
            "{}",
            chrono::Local::now().format("%Y-%m-%dT%H:%M:%S%.3f%:z")
        )
    }
}

#[derive(Parser)]
#[command(version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Collect metrics over the configured range and write the wide CSV
    Export,
    /// Print a CREATE TABLE statement built from a CSV header row
    CreateTable {
        #[arg(long)]
        csv: PathBuf,

        #[arg(long, default_value = "smartness_keyspace.t300")]
        table: String,

        /// How many header columns the statement covers
        #[arg(long, default_value_t = 300)]
        columns: usize,
    },
    /// Print an INSERT INTO statement built from a CSV header row
    Inserts {
        #[arg(long)]
        csv: PathBuf,

        #[arg(long, default_value = "smartness_keyspace.t300")]
        table: String,

        #[arg(long, default_value_t = 100)]
        columns: usize,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_timer(LocalTimer)
        .with_env_filter(filter)
        .init();

    let cli = Cli::parse();
    match cli.command {
        Command::Export => run_export().await,
        Command::CreateTable {
            csv,
            table,
            columns,
        } => {
            let headers = sqlgen::read_csv_header(&csv)?;
            println!("{}", sqlgen::create_table_statement(&table, &headers, columns));
            Ok(())
        }
        Command::Inserts {
            csv,
            table,
            columns,
        } => {
            let headers = sqlgen::read_csv_header(&csv)?;
            println!("{}", sqlgen::insert_statement(&table, &headers, columns));
            Ok(())
        }
    }
}

async fn run_export() -> Result<()> {
    let app_config = config::AppConfig::load()?;
    tracing::info!(
        version = version::VERSION,
        endpoint = %app_config.prometheus.endpoint,
        start = app_config.export.start,
        end = app_config.export.end,
        "{} export starting",
        version::NAME
    );

    let repo = prom_repo::PromRepo::connect(&app_config.prometheus)?;
    let catalog = queries::QueryCatalog::new();

    let table = collector::collect(&repo, &catalog, &app_config.export).await?;

    let output_path = std::path::Path::new(&app_config.export.output_path);
    wide_csv::write_wide_csv(&table, output_path)?;
    tracing::info!(path = %output_path.display(), "wide CSV written");

    Ok(())
}
