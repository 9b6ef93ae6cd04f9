//! clojars-deps-server - MCP server for Clojars dependency versions
//!
//! Serves two tools over stdio:
//! - get_clojars_latest_version
//! - check_clojars_version_exists

use anyhow::Context;
use clap::Parser;
use clojars_deps_server::cli::CliArgs;
use clojars_deps_server::logging;
use clojars_deps_server::registry::{ClojarsAdapter, HttpClient, DEFAULT_USER_AGENT};
use clojars_deps_server::server::ClojarsServer;
use rmcp::transport::stdio;
use rmcp::ServiceExt;
use std::process::ExitCode;
use std::sync::Arc;
use tokio_util::sync::CancellationToken;
use tracing::{debug, error, info};

#[tokio::main]
async fn main() -> ExitCode {
    let args = CliArgs::parse();
    logging::init(args.log_level());

    match run(args).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{:#}", e);
            ExitCode::FAILURE
        }
    }
}

/// Main application logic
async fn run(args: CliArgs) -> anyhow::Result<()> {
    let config = args.to_config()?;
    debug!(base_url = %config.base_url, timeout = ?config.timeout, "configuration loaded");

    let client = HttpClient::with_config(config.timeout, DEFAULT_USER_AGENT)?;
    let adapter = ClojarsAdapter::with_base_url(client, config.base_url);
    let server = ClojarsServer::new(Arc::new(adapter));

    // SIGINT closes the transport; the process then exits normally.
    let shutdown = CancellationToken::new();
    let on_interrupt = shutdown.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            info!("received SIGINT, shutting down");
            on_interrupt.cancel();
        }
    });

    let service = match server.serve_with_ct(stdio(), shutdown.clone()).await {
        Ok(service) => service,
        // Interrupted before the client finished initialize.
        Err(_) if shutdown.is_cancelled() => {
            debug!("shutdown requested before initialization completed");
            return Ok(());
        }
        Err(e) => return Err(e).context("failed to start MCP server"),
    };
    info!("Clojars MCP server running on stdio");

    let reason = service.waiting().await?;
    debug!(?reason, "server stopped");
    Ok(())
}
