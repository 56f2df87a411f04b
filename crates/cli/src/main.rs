mod cli;

use anyhow::{anyhow, Context, Result};
use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use casestatus_core::{
    load_config, read_identifiers, validate_config, AuthError, BatchRunner, ConsoleProgress,
    FieldExtractor, Pacer, PortalClient, ResultWriter,
};

use cli::Args;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let args = Args::parse();

    // Logs go to stderr; stdout carries progress lines
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    if let Err(e) = run(args).await {
        error!("{:#}", e);
        // Shown regardless of RUST_LOG
        eprintln!("{:#}", e);
        std::process::exit(1);
    }
}

async fn run(args: Args) -> Result<()> {
    let config = load_config(args.config.as_deref()).context("Failed to load configuration")?;
    validate_config(&config).context("Configuration validation failed")?;

    // Missing input ends the run before any network traffic
    let identifiers = read_identifiers(&args.infile)?;
    info!(
        "Read {} case numbers from {:?}",
        identifiers.len(),
        args.infile
    );

    let extractor = FieldExtractor::from_config(&config.extractor)?;
    let writer = ResultWriter::new(&args.outfile, config.output.terminate_records);
    let pacer = Pacer::new(config.pacing);

    let client = PortalClient::new(config.portal.clone())?;
    let session = client
        .login(&args.credentials())
        .await
        .map_err(|e| match e {
            AuthError::Rejected { status } => {
                anyhow!("Login failed with status code {}, exiting...", status)
            }
            other => anyhow::Error::from(other),
        })?;
    info!("Logged in to {}", config.portal.login_url);

    let mut runner = BatchRunner::new(&session, extractor, writer, pacer, config.duplicates);
    let summary = runner.run(&identifiers, &mut ConsoleProgress).await?;

    info!(
        "Wrote {} records to {:?} ({} found, {} not found, {} repeated)",
        summary.processed, args.outfile, summary.found, summary.not_found, summary.duplicates
    );

    Ok(())
}
