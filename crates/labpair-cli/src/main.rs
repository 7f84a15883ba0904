//! labpair - pairs Bottlenose lab teams with course staff.
//!
//! Logs in to Bottlenose, downloads the course teamset export, splits the
//! active teams of one lab section evenly across the staff list, and writes
//! `students.csv` and `staff.csv`.

mod cli_args;
mod config;
mod credentials;
mod output;
mod prompt;

use std::io;

use anyhow::Result;
use clap::Parser;
use labpair_core::api::BottlenoseClient;
use labpair_core::pair_teams;
use labpair_core::report::RenderedReports;
use labpair_core::workbook::{resolve_sheet, TeamsetWorkbook};
use tracing::{info, warn};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use cli_args::CliArgs;
use config::{Config, RunConfig};
use credentials::Credentials;

/// Initialize the tracing subscriber for logging
fn init_tracing() {
    // Use RUST_LOG env var to control log level (e.g., RUST_LOG=debug)
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr))
        .with(filter)
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present (silently ignore if not found)
    let _ = dotenvy::dotenv();

    init_tracing();

    let args = CliArgs::parse();
    let file_config = Config::load().unwrap_or_else(|e| {
        warn!(error = %e, "Ignoring unreadable config file");
        Config::default()
    });

    if let Err(e) = run(args, file_config).await {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
    Ok(())
}

async fn run(args: CliArgs, file_config: Config) -> Result<()> {
    let config = RunConfig::resolve(args, file_config)?;
    let credentials = Credentials::resolve(config.username.as_deref())?;

    let client = BottlenoseClient::new(&config.base_url)?;
    client
        .login(&credentials.username, credentials.password())
        .await?;
    let export = client.fetch_teamset_export(config.course_id).await?;

    let mut workbook = TeamsetWorkbook::from_bytes(export)?;
    let sheet = match resolve_sheet(workbook.sheet_names(), config.sheet.as_deref(), config.latest)? {
        Some(sheet) => sheet,
        None => prompt::prompt_for_sheet(
            workbook.sheet_names(),
            &mut io::stdin().lock(),
            &mut io::stdout(),
        )?,
    };
    info!(sheet = %sheet, "Using worksheet");

    let rows = workbook.team_rows(&sheet)?;
    let report = pair_teams(&rows, &config.request)?;

    // Render everything before touching the filesystem
    let rendered = RenderedReports::render(&report)?;
    let [students_path, staff_path] = output::write_reports(&config.output_dir, &rendered)?;

    for row in &report.staff {
        println!("{}", row.summary());
    }
    println!(
        "Wrote {} teams to {} and {} groups to {}",
        report.students.len(),
        students_path.display(),
        report.staff.len(),
        staff_path.display()
    );
    Ok(())
}
