//! Booking API for the safari tour catalog.
//!
//! Exact-match counterpart to the fuzzy lookup service: callers must spell
//! country and month correctly (any casing), and successful bookings return
//! a priced confirmation.

mod config;
mod error;
mod routes;
mod state;

use tours_core::{Catalog, MatchMode, TourService};
use tracing::info;

use crate::config::Config;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load .env file if present
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt::init();

    // Load configuration
    let config = Config::from_env()?;

    // Build application state around the compiled-in catalog
    let service = TourService::new(Catalog::builtin(), MatchMode::Exact);
    let state = AppState::new(service);

    // Build router
    let app = routes::router().with_state(state);

    // Start server
    info!(addr = %config.addr, "Booking API listening");
    let listener = tokio::net::TcpListener::bind(config.addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
