//! Serve the built API bundle (`dist/api.js`) over loopback HTTP so a
//! notebook can fetch it and load it as a module:
//!
//! ```text
//! serve_api [PORT]
//! ```
//!
//! Omit the port for the default (9009), or pass 0 to let the OS pick a
//! free one. Every request gets the same response, re-read from disk, so
//! running alongside a watching build live-reloads the notebook on the
//! next fetch.

use clap::Parser;
use std::sync::Arc;

mod cli;
mod config;
mod handler;
mod http;
mod logger;
mod server;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = cli::Cli::parse();
    let cfg = config::Config::load_from(&cli.config, cli.port)?;
    let addr = cfg.get_socket_addr()?;

    logger::init(&cfg)?;

    let mut runtime_builder = tokio::runtime::Builder::new_multi_thread();
    runtime_builder.enable_all();
    if let Some(workers) = cfg.server.workers {
        runtime_builder.worker_threads(workers);
    }
    let runtime = runtime_builder.build()?;

    runtime.block_on(async_main(cfg, addr))
}

async fn async_main(
    cfg: config::Config,
    addr: std::net::SocketAddr,
) -> Result<(), Box<dyn std::error::Error>> {
    let listener = server::create_listener(addr)?;
    let bound = listener.local_addr()?;

    // Operators and scripts read the port from this line
    logger::announce(&format!("Serving on port {}", bound.port()));
    logger::log_server_start(&bound, &cfg);

    let signals = Arc::new(server::SignalHandler::new());
    server::start_signal_handler(Arc::clone(&signals))?;

    let state = Arc::new(config::AppState::new(&cfg));
    server::start_server_loop(listener, state, Arc::clone(&signals.shutdown)).await;

    // Leave the shell prompt on a fresh line after ^C
    logger::announce("");
    Ok(())
}
