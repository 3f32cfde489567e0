//! CLI entry point for the bikeshare statistics tool.
//!
//! With no subcommand it runs the interactive session; `report` prints the
//! statistics for one city/month/day selection and exits.

use anyhow::Result;
use bikeshare_stats::{
    config::Catalog,
    filters::FilterSelection,
    input::ReaderSource,
    session::{run_once, run_session},
};
use clap::{Parser, Subcommand};
use std::ffi::OsStr;
use std::path::{Path, PathBuf};
use tracing::info;
use tracing_subscriber::{
    EnvFilter, Layer,
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
};

#[derive(Parser)]
#[command(name = "bikeshare_stats")]
#[command(about = "Explore US bikeshare trip data", long_about = None)]
struct Cli {
    /// Directory containing chicago.csv, new_york_city.csv and washington.csv
    #[arg(short, long, env = "BIKESHARE_DATA_DIR", default_value = ".")]
    data_dir: PathBuf,

    /// JSON log file, rotated daily
    #[arg(long, env = "LOG_FILE_PATH", default_value = "logs/bikeshare_stats.log")]
    log_file: PathBuf,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Print statistics for one selection without prompting
    Report {
        /// chicago, "new york city" or washington
        #[arg(short, long)]
        city: String,

        /// all, or january through june
        #[arg(short, long, default_value = "all")]
        month: String,

        /// all, or monday through sunday
        #[arg(short, long, default_value = "all")]
        day: String,
    },
}

fn main() -> Result<()> {
    dotenvy::dotenv().ok(); // Load .env file

    let cli = Cli::parse();

    // Logging setup: stderr + JSON rolling log file
    let log_dir = cli
        .log_file
        .parent()
        .filter(|dir| !dir.as_os_str().is_empty())
        .unwrap_or(Path::new("."));
    let log_file_name = cli
        .log_file
        .file_name()
        .unwrap_or(OsStr::new("bikeshare_stats.log"));

    let file_appender = tracing_appender::rolling::daily(log_dir, log_file_name);
    let (non_blocking_file, _file_guard) = tracing_appender::non_blocking(file_appender);

    // stderr stays quiet by default so it does not interleave with the prompts
    let stderr_layer = fmt::layer()
        .with_target(true)
        .with_span_events(FmtSpan::CLOSE)
        .with_ansi(true)
        .with_writer(std::io::stderr)
        .with_filter(EnvFilter::from_env("RUST_LOG").add_directive("warn".parse()?));

    let json_layer = fmt::layer()
        .json()
        .with_current_span(true)
        .with_span_list(true)
        .with_writer(non_blocking_file)
        .with_filter(EnvFilter::from_env("RUST_LOG_JSON").add_directive("debug".parse()?));

    tracing_subscriber::registry()
        .with(stderr_layer)
        .with(json_layer)
        .init();

    let catalog = Catalog::new(cli.data_dir);
    info!(data_dir = %catalog.data_dir().display(), "Catalog ready");

    let mut stdout = std::io::stdout().lock();

    match cli.command {
        None => {
            let mut stdin = ReaderSource::stdin();
            run_session(&catalog, &mut stdin, &mut stdout)?;
        }
        Some(Commands::Report { city, month, day }) => {
            let selection = FilterSelection::parse(&city, &month, &day)?;
            run_once(&catalog, &selection, &mut stdout)?;
        }
    }

    Ok(())
}
