//! Route handlers for the booking API.

pub mod booking;
pub mod health;
pub mod tours;

use axum::routing::{get, post};
use axum::Router;

use crate::state::AppState;

/// Build the router with all routes.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::health))
        .route("/tours", get(tours::list_tours))
        .route("/book-tour", post(booking::book_tour))
}
