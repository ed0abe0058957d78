use crate::backend::BackendClient;
use crate::config::DashboardConfig;
use crate::router::handle;
use crate::state::AppState;
use astra::Server;
use tracing_subscriber::EnvFilter;

mod backend;
mod charts;
mod config;
mod errors;
mod filters;
mod render;
mod responses;
mod router;
mod state;
mod templates;

#[cfg(test)]
mod tests;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    // 1️⃣ Configuration (.env + environment)
    let config = match DashboardConfig::from_env() {
        Ok(cfg) => cfg,
        Err(e) => {
            tracing::error!("❌ Invalid configuration: {e}");
            std::process::exit(1);
        }
    };

    // 2️⃣ Backend client
    let backend = match BackendClient::new(&config) {
        Ok(client) => client,
        Err(e) => {
            tracing::error!("❌ Backend client initialization failed: {e}");
            std::process::exit(1);
        }
    };

    // 3️⃣ Start the server
    let addr = config.bind_addr;
    let workers = config.max_workers;
    tracing::info!(backend = %config.backend_url, "Starting server at http://{addr}");

    let state = AppState::new(config, Box::new(backend));
    let server = Server::bind(&addr).max_workers(workers);

    // 4️⃣ Serve requests, passing the shared state into the closure
    let result = server.serve(move |req, _info| match handle(req, &state) {
        Ok(resp) => resp,
        Err(err) => templates::html_error_response(err),
    });

    if let Err(e) = result {
        tracing::error!("Server ended with error: {e}");
    }

    tracing::info!("Server shut down cleanly.");
}
