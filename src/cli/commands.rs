//! CLI command implementations.

use std::fs;
use std::path::Path;

use crate::http_server::{HttpServer, HttpServerConfig};
use crate::observability::Logger;

use super::args::{Cli, Command};
use super::errors::{CliError, CliResult};

/// Load the server configuration from a JSON file, falling back to defaults
/// when the file does not exist.
pub fn load_config(path: &Path) -> CliResult<HttpServerConfig> {
    if !path.exists() {
        return Ok(HttpServerConfig::default());
    }

    let content = fs::read_to_string(path)?;
    let config: HttpServerConfig = serde_json::from_str(&content)
        .map_err(|e| CliError::Config(format!("invalid config JSON: {}", e)))?;
    config.validate().map_err(CliError::Config)?;

    Ok(config)
}

/// Parse arguments and dispatch
pub fn run() -> CliResult<()> {
    let cli = Cli::parse_args();
    run_command(cli.command)
}

/// Dispatch a parsed command
pub fn run_command(command: Command) -> CliResult<()> {
    match command {
        Command::Serve { config, port } => serve(&config, port),
    }
}

fn serve(config_path: &Path, port: Option<u16>) -> CliResult<()> {
    let mut config = load_config(config_path)?;
    if let Some(port) = port {
        config.port = port;
    }

    Logger::info(
        "SERVER_BOOT",
        &[
            ("addr", &config.socket_addr()),
            ("config", &config_path.display().to_string()),
        ],
    );

    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(HttpServer::with_config(config).start())?;

    Ok(())
}
