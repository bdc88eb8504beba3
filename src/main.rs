// Design System Showcase - component registry, demos and coverage audit
//
// Serves a browsable showcase of the project's UI components and checks that
// the showcase stays in sync with what is registered.
//
// Architecture:
// - Registry: static catalog (or TOML file) of components, prototypes, pages
// - Validator: builds every demo config once at startup and records failures
// - Showcase: resolver + demo table + audit over the registry
// - Server (axum): index, component and prototype pages, JSON diagnostics
// - CLI: `audit` for CI, `config` for configuration management

mod cli;
mod components;
mod config;
mod logging;
mod registry;
mod render;
mod server;
mod showcase;
mod startup;
mod validator;

use anyhow::{Context, Result};
use config::Config;
use server::AppState;
use showcase::Showcase;

#[tokio::main]
async fn main() -> Result<()> {
    // Handle CLI commands first (audit, config); exit early if one ran
    if cli::handle_cli() {
        return Ok(());
    }

    // Ensure config template exists (helps users discover options)
    Config::ensure_config_exists();

    let config = Config::from_env()?;

    // Kept alive for the whole run so file logs flush on exit
    let _file_guard = logging::init(&config.logging);

    // Registry problems (duplicate paths, bad routes) are fatal here
    let showcase = Showcase::from_registry_file(config.registry_file.as_deref())
        .context("Registry failed startup checks")?;

    if config.mode.is_development() && config.audit.warn_on_startup {
        showcase.warn_on_gaps();
    }

    startup::print_startup(&config, &showcase);
    startup::log_startup(&config, &showcase);

    let (shutdown_tx, shutdown_rx) = tokio::sync::oneshot::channel();
    let mut server = tokio::spawn(server::start_server(
        config.bind_addr,
        AppState::new(showcase),
        shutdown_rx,
    ));

    tokio::select! {
        // Server stopped on its own (bind failure or serve error)
        result = &mut server => {
            return result.context("Server task panicked")?;
        }
        signal = tokio::signal::ctrl_c() => {
            signal.context("Failed to listen for Ctrl+C")?;
        }
    }

    tracing::info!("Shutting down...");

    // If the send fails, the server has already stopped
    let _ = shutdown_tx.send(());
    server.await.context("Server task panicked")??;

    tracing::info!("Shutdown complete");
    Ok(())
}
