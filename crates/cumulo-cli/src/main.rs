//! Cumulo CLI binary entrypoint.
//!
//! This is the main entry point for the `cumulo` command-line tool.

use std::io;
use std::process::ExitCode;

use clap::Parser;
use cumulo_api::ApiConfig;
use tracing_subscriber::EnvFilter;

use cumulo_cli::cli::{Cli, Commands};
use cumulo_cli::commands::{
    AccountCommand, CatalogCommand, DnsCommand, FirewallCommand, InstanceCommand, NetworkCommand,
    QuotaCommand, SnapshotCommand, SshKeyCommand,
};
use cumulo_cli::output::OutputFormat;

fn main() -> ExitCode {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    // Parse CLI arguments
    let cli = Cli::parse();

    // Run async runtime
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

async fn run(cli: Cli) -> Result<(), cumulo_cli::CliError> {
    let format = OutputFormat::new(cli.format);
    let config = load_config(&cli)?;
    let mut stdout = io::stdout().lock();

    match cli.command {
        Commands::Instance { command } => {
            let cmd = InstanceCommand::new(config);
            cmd.execute(&mut stdout, &format, &command).await?;
        }
        Commands::Dns { command } => {
            let cmd = DnsCommand::new(config);
            cmd.execute(&mut stdout, &format, &command).await?;
        }
        Commands::Network { command } => {
            let cmd = NetworkCommand::new(config);
            cmd.execute(&mut stdout, &format, &command).await?;
        }
        Commands::Firewall { command } => {
            let cmd = FirewallCommand::new(config);
            cmd.execute(&mut stdout, &format, &command).await?;
        }
        Commands::Sshkey { command } => {
            let cmd = SshKeyCommand::new(config);
            cmd.execute(&mut stdout, &format, &command).await?;
        }
        Commands::Snapshot { command } => {
            let cmd = SnapshotCommand::new(config);
            cmd.execute(&mut stdout, &format, &command).await?;
        }
        Commands::Templates => {
            let cmd = CatalogCommand::new(config);
            cmd.templates(&mut stdout, &format).await?;
        }
        Commands::Sizes => {
            let cmd = CatalogCommand::new(config);
            cmd.sizes(&mut stdout, &format).await?;
        }
        Commands::Regions => {
            let cmd = CatalogCommand::new(config);
            cmd.regions(&mut stdout, &format).await?;
        }
        Commands::Quota { command } => {
            let cmd = QuotaCommand::new(config);
            cmd.execute(&mut stdout, &format, &command).await?;
        }
        Commands::Account { command } => {
            let cmd = AccountCommand::new(config);
            cmd.execute(&mut stdout, &format, &command).await?;
        }
    }

    Ok(())
}

fn load_config(cli: &Cli) -> Result<ApiConfig, cumulo_cli::CliError> {
    let mut config = ApiConfig::load(cli.config.as_deref())
        .map_err(|e| cumulo_cli::CliError::Config(e.to_string()))?;
    if let Some(url) = &cli.url {
        config.api_url.clone_from(url);
    }
    if let Some(token) = &cli.token {
        config.token.clone_from(token);
    }
    config
        .require_token()
        .map_err(|e| cumulo_cli::CliError::Config(e.to_string()))?;
    tracing::debug!(url = %config.api_url, "configuration loaded");
    Ok(config)
}
