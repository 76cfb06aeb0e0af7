//! HTTP route handlers.

use axum::{
    Form, Json, Router,
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

use crate::directions::DistanceProvider;
use crate::domain::{Mode, RawTripQuery, TripQuery, ValidationError};

use super::dto::*;
use super::state::AppState;

/// Create the application router.
pub fn create_router<D>(state: AppState<D>) -> Router
where
    D: DistanceProvider + 'static,
{
    Router::new()
        .route("/", get(index))
        .route("/health", get(health))
        .route("/submit", post(submit_trip::<D>))
        .route("/bus", get(bus_options::<D>))
        .route("/train", get(train_options::<D>))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// Service index.
async fn index() -> Json<IndexResponse> {
    Json(IndexResponse {
        name: env!("CARGO_PKG_NAME"),
        version: env!("CARGO_PKG_VERSION"),
        endpoints: vec![
            EndpointInfo {
                method: "GET",
                path: "/health",
                description: "Health check",
            },
            EndpointInfo {
                method: "POST",
                path: "/submit",
                description: "Distance and cheapest totals for a trip",
            },
            EndpointInfo {
                method: "GET",
                path: "/bus",
                description: "Bus fares for a route",
            },
            EndpointInfo {
                method: "GET",
                path: "/train",
                description: "Train fares for a route",
            },
        ],
    })
}

/// Summarize a trip from a submitted form.
async fn submit_trip<D: DistanceProvider>(
    State(state): State<AppState<D>>,
    Form(form): Form<TripForm>,
) -> Result<Json<TripSummaryResponse>, AppError> {
    let query = parse_query(form.as_raw())?;
    info!(
        origin = %query.origin(),
        destination = %query.destination(),
        party_size = query.party_size(),
        budget = ?query.budget(),
        "trip summary requested"
    );

    let summary = state.costs.query_trip_summary(&query).await;
    Ok(Json(TripSummaryResponse {
        query: QueryEcho::from(&query),
        summary,
    }))
}

/// List bus fares.
async fn bus_options<D: DistanceProvider>(
    State(state): State<AppState<D>>,
    Query(params): Query<ModeQueryParams>,
) -> Result<Json<ModeResponse>, AppError> {
    mode_options(&state, Mode::Bus, &params)
}

/// List train fares.
async fn train_options<D: DistanceProvider>(
    State(state): State<AppState<D>>,
    Query(params): Query<ModeQueryParams>,
) -> Result<Json<ModeResponse>, AppError> {
    mode_options(&state, Mode::Train, &params)
}

fn mode_options<D: DistanceProvider>(
    state: &AppState<D>,
    mode: Mode,
    params: &ModeQueryParams,
) -> Result<Json<ModeResponse>, AppError> {
    let query = parse_query(params.as_raw())?;
    let result = state.costs.query_mode(mode, &query);
    Ok(Json(ModeResponse {
        query: QueryEcho::from(&query),
        result,
    }))
}

fn parse_query(raw: RawTripQuery<'_>) -> Result<TripQuery, AppError> {
    Ok(TripQuery::try_from(raw)?)
}

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    BadRequest { message: String },
}

impl From<ValidationError> for AppError {
    fn from(e: ValidationError) -> Self {
        AppError::BadRequest {
            message: e.to_string(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::BadRequest { message } => (StatusCode::BAD_REQUEST, message),
        };

        warn!(%status, %message, "request rejected");

        let body = Json(ErrorResponse { error: message });
        (status, body).into_response()
    }
}
