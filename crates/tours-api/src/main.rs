use std::env;
use std::net::SocketAddr;
use std::sync::Arc;

use axum::extract::{Json, Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::Router;
use serde::{Deserialize, Serialize};
use tours_core::{capitalize_first, Catalog, MatchMode, TourError, TourRecord, TourService};
use tracing::{info, warn};

#[derive(Clone)]
struct AppState {
    service: Arc<TourService>,
}

#[derive(Debug, Deserialize)]
struct TourQuery {
    country: String,
    month: String,
}

#[derive(Debug, Serialize)]
struct ToursResponse {
    country: String,
    month: String,
    tour: Vec<TourRecord>,
}

#[derive(Debug, Deserialize)]
struct BookTourRequest {
    country: String,
    month: String,
}

#[derive(Debug, Serialize)]
struct BookTourResponse {
    message: String,
    country: String,
    month: String,
    tour: Vec<TourRecord>,
}

#[derive(Debug, Serialize)]
struct Health {
    status: String,
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();

    let addr = env::var("TOURS_API_ADDR").unwrap_or_else(|_| "127.0.0.1:8090".to_string());

    let service = TourService::new(Catalog::builtin(), MatchMode::fuzzy());
    let state = AppState {
        service: Arc::new(service),
    };

    let app = Router::new()
        .route("/health", get(health))
        .route("/tours", get(get_tours))
        .route("/book-tour", post(book_tour))
        .with_state(state);

    let addr: SocketAddr = addr.parse().expect("Invalid TOURS_API_ADDR");
    info!(%addr, "Tours API listening");

    let listener = tokio::net::TcpListener::bind(addr).await.unwrap();
    axum::serve(listener, app).await.unwrap();
}

async fn health() -> Json<Health> {
    Json(Health {
        status: "ok".to_string(),
    })
}

async fn get_tours(
    State(state): State<AppState>,
    Query(query): Query<TourQuery>,
) -> Result<Json<ToursResponse>, ApiError> {
    // Folded up front, so rejections echo the folded form.
    let country = query.country.to_lowercase();
    let month = query.month.to_lowercase();

    let selection = state.service.find_tours(&country, &month)?;

    Ok(Json(ToursResponse {
        country: capitalize_first(selection.country),
        month: capitalize_first(selection.month),
        tour: selection.tours.to_vec(),
    }))
}

async fn book_tour(
    State(state): State<AppState>,
    Json(payload): Json<BookTourRequest>,
) -> Result<Json<BookTourResponse>, ApiError> {
    let selection = state.service.find_tours(&payload.country, &payload.month)?;

    info!(
        country = selection.country,
        month = selection.month,
        tours = selection.tours.len(),
        "Tour booked"
    );

    Ok(Json(BookTourResponse {
        message: "Tour booked successfully!".to_string(),
        country: capitalize_first(selection.country),
        month: capitalize_first(selection.month),
        tour: selection.tours.to_vec(),
    }))
}

#[derive(Debug)]
struct ApiError(TourError);

impl From<TourError> for ApiError {
    fn from(err: TourError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match self.0 {
            TourError::NoToursForSelection => StatusCode::NOT_FOUND,
            _ => StatusCode::BAD_REQUEST,
        };

        warn!(error = %self.0, "Request rejected");

        let body = serde_json::json!({ "detail": self.0.to_string() });
        (status, Json(body)).into_response()
    }
}
