//! TKS CLI binary entrypoint.
//!
//! This is the main entry point for the `tks` command-line tool.

use std::io;
use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use tks_cli::cli::{Cli, Commands};
use tks_cli::commands::ClusterCommand;
use tks_cli::config::Settings;
use tks_cli::output::OutputFormat;

fn main() -> ExitCode {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    // Parse CLI arguments
    let cli = Cli::parse();

    let runtime = match tokio::runtime::Runtime::new() {
        Ok(rt) => rt,
        Err(e) => {
            eprintln!("Failed to create async runtime: {e}");
            return ExitCode::FAILURE;
        }
    };

    match runtime.block_on(run(cli)) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<(), tks_cli::CliError> {
    let settings = Settings::load(cli.config.as_deref())?
        .with_overrides(cli.tks_info_url.as_deref(), cli.contract_id.as_deref());
    let format = OutputFormat::new(cli.format);
    let mut stdout = io::stdout().lock();

    match cli.command {
        Commands::Cluster { command } => {
            let cmd = ClusterCommand::new(&settings, cli.verbose);
            cmd.execute(&mut stdout, &format, &command).await?;
        }
    }

    Ok(())
}
