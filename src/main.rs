mod cli;
mod client;
mod commands;
mod config;
mod error;
mod pretty;
mod report;

use anyhow::{Context, Result};
use clap::Parser;
use cli::Cli;
use client::AwsSecretsClient;
use report::TracingReporter;
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let cli = Cli::parse();
    init_tracing();

    let result = tokio::select! {
        result = run(&cli) => result,
        signal = tokio::signal::ctrl_c() => match signal {
            Ok(()) => Err(anyhow::anyhow!("interrupted")),
            Err(e) => Err(e).context("failed to listen for interrupt"),
        },
    };

    if let Err(e) = result {
        tracing::error!("{:#}", e);
        std::process::exit(1);
    }
}

async fn run(cli: &Cli) -> Result<()> {
    let config = config::load(cli.region.clone(), cli.profile.clone())
        .await
        .context("failed to load AWS config")?;
    let client = AwsSecretsClient::new(&config);

    commands::run(&client, &mut TracingReporter, &cli.invocation()).await
}

fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .with_ansi(atty::is(atty::Stream::Stderr))
        .with_target(false)
        .init();
}
