//! Tour listing by country and month.

use axum::extract::{Query, State};
use axum::Json;
use serde::{Deserialize, Serialize};
use tours_core::{title_case, TourRecord};

use crate::error::Result;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct ToursQuery {
    pub full_name: String,
    pub country: String,
    pub month: String,
}

#[derive(Debug, Serialize)]
pub struct ToursResponse {
    pub full_name: String,
    pub country: String,
    pub month: String,
    pub tours_available: Vec<TourRecord>,
}

/// List the tours available for a (country, month) selection.
///
/// Inputs are title-cased before resolution, so rejections echo the
/// title-cased form.
pub async fn list_tours(
    State(state): State<AppState>,
    Query(query): Query<ToursQuery>,
) -> Result<Json<ToursResponse>> {
    let country = title_case(&query.country);
    let month = title_case(&query.month);

    let selection = state.service.find_tours(&country, &month)?;

    Ok(Json(ToursResponse {
        full_name: query.full_name,
        country: title_case(selection.country),
        month: title_case(selection.month),
        tours_available: selection.tours.to_vec(),
    }))
}
