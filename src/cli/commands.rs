//! CLI command dispatch
//!
//! Wires the store, service, and HTTP server together and runs the
//! selected command.

use std::sync::Arc;

use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use crate::http_server::{HttpServer, HttpServerConfig};
use crate::service::AutosService;
use crate::store::MemoryStore;

use super::args::{Cli, Command};
use super::errors::{CliError, CliResult};

/// Parse arguments and run the selected command.
pub async fn run() -> CliResult<()> {
    let cli = Cli::parse_args();
    match cli.command {
        Command::Serve {
            host,
            port,
            log_level,
        } => serve(host, port, &log_level).await,
    }
}

/// Boot the server and enter the serving loop.
async fn serve(host: String, port: u16, log_level: &str) -> CliResult<()> {
    init_tracing(log_level)?;

    let store = Arc::new(MemoryStore::new());
    let service = Arc::new(AutosService::new(store));

    let config = HttpServerConfig {
        host,
        port,
        ..Default::default()
    };
    info!(addr = %config.socket_addr(), "starting motorpool");

    let server = HttpServer::with_config(config, service);
    server.serve().await?;
    Ok(())
}

fn init_tracing(log_level: &str) -> CliResult<()> {
    let level = match log_level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };

    let subscriber = FmtSubscriber::builder().with_max_level(level).finish();
    tracing::subscriber::set_global_default(subscriber)
        .map_err(|e| CliError::Logging(e.to_string()))
}
