use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use version_poll::checker::{run_check, CheckOutcome};
use version_poll::config::Config;
use version_poll::registry::npm::NpmSite;
use version_poll::release::github::GitHubReleases;
use version_poll::state::VersionFile;

#[derive(Parser)]
#[command(name = "version-poll")]
#[command(
    version,
    about = "Checks a package for a new published version and prints its release notes"
)]
struct Cli {}

fn main() -> ExitCode {
    let _cli = Cli::parse();
    init_tracing();

    println!("Checking for updates...");

    match run() {
        Ok(outcome) => {
            for line in outcome.console_lines() {
                println!("{line}");
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            println!("An error occurred: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> anyhow::Result<CheckOutcome> {
    let config = Config::default();
    let repository = config.repository()?;

    let source = NpmSite::new(&config.registry_url, &config.version_table_selector)?;
    let releases = GitHubReleases::new(&config.api_url);
    let store = VersionFile::new(&config.state_path);

    let outcome = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?
        .block_on(run_check(&source, &releases, &store, &config, &repository))?;

    Ok(outcome)
}

fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();
}
