//! Binary crate for the `forecast` command-line tool.
//!
//! This crate focuses on:
//! - Bootstrap: `.env` loading, logging, credential lookup
//! - Parsing CLI arguments
//! - Dispatching the fetch/store and plot branches

use clap::Parser;

mod cli;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "forecast=info,forecast_core=info".into()),
        )
        .init();

    let cmd = cli::Cli::parse();
    cmd.run().await
}
