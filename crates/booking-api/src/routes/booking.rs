//! Booking with priced confirmation.

use axum::extract::{Json, State};
use serde::{Deserialize, Serialize};
use tours_core::{title_case, BookingRequest};
use tracing::info;

use crate::error::Result;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct BookTourRequest {
    pub full_name: String,
    pub passport_or_id: String,
    pub country: String,
    pub month: String,
    pub tour_name: String,
    pub number_of_people: u32,
}

#[derive(Debug, Serialize)]
pub struct BookTourResponse {
    pub full_name: String,
    pub passport_or_id: String,
    pub country: String,
    pub month: String,
    pub tour_name: String,
    pub destination: String,
    pub dates: Vec<String>,
    pub number_of_people: u32,
    pub price_per_person: u32,
    pub total_cost: u64,
    pub currency: String,
}

/// Book a named tour for a party and compute the total cost.
pub async fn book_tour(
    State(state): State<AppState>,
    Json(payload): Json<BookTourRequest>,
) -> Result<Json<BookTourResponse>> {
    let request = BookingRequest {
        full_name: payload.full_name,
        passport_or_id: payload.passport_or_id,
        country: title_case(&payload.country),
        month: title_case(&payload.month),
        tour_name: payload.tour_name,
        number_of_people: payload.number_of_people,
    };

    let confirmation = state.service.book(&request)?;

    info!(
        country = %confirmation.country,
        month = %confirmation.month,
        tour = %confirmation.tour_name,
        people = confirmation.number_of_people,
        total_cost = confirmation.total_cost,
        "Tour booked"
    );

    Ok(Json(BookTourResponse {
        full_name: confirmation.full_name,
        passport_or_id: confirmation.passport_or_id,
        country: title_case(&confirmation.country),
        month: title_case(&confirmation.month),
        tour_name: confirmation.tour_name,
        destination: confirmation.destination,
        dates: confirmation.dates,
        number_of_people: confirmation.number_of_people,
        price_per_person: confirmation.price_per_person,
        total_cost: confirmation.total_cost,
        currency: confirmation.currency.to_string(),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;
    use axum::http::StatusCode;
    use axum::response::IntoResponse;
    use tours_core::{Catalog, MatchMode, TourService};

    fn test_state() -> AppState {
        AppState::new(TourService::new(Catalog::builtin(), MatchMode::Exact))
    }

    fn request(country: &str, month: &str, tour_name: &str, people: u32) -> BookTourRequest {
        BookTourRequest {
            full_name: "Jane".to_string(),
            passport_or_id: "P1".to_string(),
            country: country.to_string(),
            month: month.to_string(),
            tour_name: tour_name.to_string(),
            number_of_people: people,
        }
    }

    async fn error_body(err: crate::error::ApiError) -> serde_json::Value {
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::OK);

        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_book_tour_prices_party() {
        let Json(response) = book_tour(
            State(test_state()),
            Json(request("Tanzania", "January", "Serengeti Safari", 3)),
        )
        .await
        .unwrap();

        assert_eq!(response.full_name, "Jane");
        assert_eq!(response.passport_or_id, "P1");
        assert_eq!(response.country, "Tanzania");
        assert_eq!(response.month, "January");
        assert_eq!(response.tour_name, "Serengeti Safari");
        assert_eq!(response.destination, "Serengeti National Park");
        assert_eq!(response.dates, vec!["10th - 15th January"]);
        assert_eq!(response.number_of_people, 3);
        assert_eq!(response.price_per_person, 800);
        assert_eq!(response.total_cost, 2400);
        assert_eq!(response.currency, "USD");
    }

    #[tokio::test]
    async fn test_book_tour_accepts_lowercase_keys() {
        let Json(response) = book_tour(
            State(test_state()),
            Json(request("south africa", "march", "Victoria Falls & Zambezi River", 2)),
        )
        .await
        .unwrap();

        assert_eq!(response.country, "South Africa");
        assert_eq!(response.total_cost, 1600);
    }

    #[tokio::test]
    async fn test_book_tour_unknown_name() {
        let err = book_tour(
            State(test_state()),
            Json(request("Kenya", "January", "Moon Walk", 2)),
        )
        .await
        .unwrap_err();

        let body = error_body(err).await;
        assert_eq!(
            body["error"],
            "Invalid tour name: 'Moon Walk'. Please choose from the available tours."
        );
    }

    #[tokio::test]
    async fn test_book_tour_rejects_empty_party() {
        let err = book_tour(
            State(test_state()),
            Json(request("Tanzania", "January", "Serengeti Safari", 0)),
        )
        .await
        .unwrap_err();

        let body = error_body(err).await;
        assert_eq!(
            body["error"],
            "Invalid number of people: '0'. Must be at least 1."
        );
    }

    #[tokio::test]
    async fn test_book_tour_rejects_misspelled_country() {
        let err = book_tour(
            State(test_state()),
            Json(request("kenye", "january", "Masai Mara Safari", 2)),
        )
        .await
        .unwrap_err();

        let body = error_body(err).await;
        assert_eq!(
            body["error"],
            "Invalid country: 'Kenye'. Please enter a valid country."
        );
    }
}
