//! HTTP route handlers.

use askama::Template;
use axum::body::Bytes;
use axum::{
    Json, Router,
    extract::State,
    http::{HeaderMap, StatusCode, header},
    response::{Html, IntoResponse, Response},
    routing::{get, post},
};
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

use crate::domain::{Itinerary, ItineraryError};
use crate::import::decode_cards;
use crate::sorter::sort_cards;

use super::dto::*;
use super::state::AppState;
use super::templates::*;

/// Create the application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(index_page))
        .route("/health", get(health))
        .route("/itinerary", post(sort_itinerary))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// Index page with the card input form.
async fn index_page(State(state): State<AppState>) -> impl IntoResponse {
    Html(
        IndexTemplate {
            max_cards: state.config.max_cards,
        }
        .render()
        .unwrap_or_else(|e| format!("Template error: {}", e)),
    )
}

/// Check if request accepts HTML.
fn accepts_html(headers: &HeaderMap) -> bool {
    headers
        .get(header::ACCEPT)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|accept| accept.contains("text/html"))
}

/// Sort a pile of cards into a trip.
///
/// The body is decoded by hand rather than through the `Json` extractor so
/// that malformed documents get the same error body as every other
/// rejected card set.
async fn sort_itinerary(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Response, AppError> {
    let html = accepts_html(&headers);

    let itinerary = match sort_body(&state, &body) {
        Ok(itinerary) => itinerary,
        Err(e) => {
            warn!(status = %e.status(), error = %e.message(), "rejected cards");
            if html {
                return error_fragment(e.status(), e.message());
            }
            return Err(e);
        }
    };

    info!(cards = itinerary.len(), "sorted itinerary");

    if html {
        let template = ItineraryTemplate {
            itinerary: ItineraryView::from_itinerary(&itinerary),
        };
        let html = template.render().map_err(|e| AppError::Internal {
            message: format!("Template error: {}", e),
        })?;
        Ok(Html(html).into_response())
    } else {
        Ok(Json(ItineraryResponse::from_itinerary(&itinerary)).into_response())
    }
}

/// Decode, bound-check and sort the cards in a request body.
fn sort_body(state: &AppState, body: &[u8]) -> Result<Itinerary, AppError> {
    let cards = decode_cards(body)?;

    if cards.len() > state.config.max_cards {
        return Err(AppError::BadRequest {
            message: format!(
                "too many cards: {} given, at most {} accepted",
                cards.len(),
                state.config.max_cards
            ),
        });
    }

    Ok(sort_cards(cards)?)
}

/// Render an error as an HTML fragment.
fn error_fragment(status: StatusCode, message: String) -> Result<Response, AppError> {
    let html = ErrorTemplate { message }
        .render()
        .map_err(|e| AppError::Internal {
            message: format!("Template error: {}", e),
        })?;
    Ok((status, Html(html)).into_response())
}

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    BadRequest { message: String },
    Itinerary(ItineraryError),
    Internal { message: String },
}

impl AppError {
    /// HTTP status for this error.
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::BadRequest { .. } => StatusCode::BAD_REQUEST,
            AppError::Itinerary(_) => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Human-readable description.
    pub fn message(&self) -> String {
        match self {
            AppError::BadRequest { message } | AppError::Internal { message } => message.clone(),
            AppError::Itinerary(e) => e.to_string(),
        }
    }
}

impl From<ItineraryError> for AppError {
    fn from(e: ItineraryError) -> Self {
        AppError::Itinerary(e)
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = match &self {
            AppError::Itinerary(e) => ErrorResponse::from_itinerary_error(e),
            AppError::BadRequest { message } | AppError::Internal { message } => ErrorResponse {
                error: message.clone(),
                kind: None,
            },
        };

        if status.is_server_error() {
            tracing::error!(%status, error = %body.error, "request failed");
        }

        (status, Json(body)).into_response()
    }
}
