mod cli;
mod config;
mod logging;
mod mcp;
mod tools;

use anyhow::{Context, Result};
use cli::{Cli, Commands};
use colored::*;
use config::Config;
use mcp::server::EchoServer;
use rmcp::{ServiceExt, transport::stdio};
use std::sync::Arc;
use tools::ToolDispatcher;
use tracing::{error, info};

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command() {
        Commands::Serve => serve(&cli).await,
        Commands::Tools => {
            let catalog = serde_json::json!({ "tools": ToolDispatcher::with_default().list() });
            println!("{}", serde_json::to_string_pretty(&catalog)?);
            Ok(())
        }
        Commands::ConfigPath => {
            println!("{}", Config::default_path()?.display());
            Ok(())
        }
        Commands::InitConfig => {
            let path = Config::write_example_if_absent()?;
            println!("{} {}", "Config ready at".green(), path.display());
            Ok(())
        }
    }
}

async fn serve(cli: &Cli) -> Result<()> {
    let cfg = Config::load(cli.config.as_deref())?;
    logging::init(&cfg.effective_log_level(cli.log_level.as_deref()));

    let server = EchoServer::new(
        Arc::new(ToolDispatcher::with_default()),
        cfg.server_name(),
        cfg.server_version(),
    );

    // serve() completes once the client has sent `initialize`
    let service = tokio::select! {
        res = server.serve(stdio()) => res
            .inspect_err(|e| error!("[MCP Error] {e}"))
            .context("starting stdio session")?,
        _ = tokio::signal::ctrl_c() => std::process::exit(0),
    };
    info!("Minimal MCP server running on stdio");

    let cancel = service.cancellation_token();
    tokio::select! {
        res = service.waiting() => {
            res.inspect_err(|e| error!("[MCP Error] {e}"))
                .context("stdio session failed")?;
            info!("session ended");
        }
        sig = tokio::signal::ctrl_c() => {
            sig.context("listening for interrupt")?;
            info!("interrupt received, closing server");
            cancel.cancel();
            // the stdin reader thread would otherwise hold the runtime open
            std::process::exit(0);
        }
    }
    Ok(())
}
