//! Slackweb - command line client for Web API stars.
//!
//! Wires configuration, the reqwest transport and the stars API together,
//! then dispatches the parsed subcommand. Ctrl-C cancels the call in flight.

mod cli;

use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use slackweb_application::{CancellationToken, StarsApi};
use slackweb_infrastructure::{ClientConfig, ReqwestApiTransport};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use crate::cli::Cli;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Logs go to stderr; stdout carries listings.
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    let config = ClientConfig::load(cli.config.as_deref()).context("loading configuration")?;
    tracing::debug!(?config, "configuration loaded");
    if config.token.is_none() {
        tracing::warn!("no token configured; set SLACKWEB_TOKEN or `token` in the config file");
    }

    let transport = ReqwestApiTransport::new(&config).context("creating transport")?;
    let stars = StarsApi::new(Arc::new(transport));

    let (token, cancel) = CancellationToken::new();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            tracing::info!("interrupt received, cancelling");
            token.cancel();
        }
    });

    let mut stdout = std::io::stdout().lock();
    cli::run(&stars, cli.command, cancel, &mut stdout).await
}
