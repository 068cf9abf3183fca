//! HTTP route handlers.

use askama::Template;
use axum::{
    Json, Router,
    extract::{Query, State},
    http::{HeaderMap, StatusCode, header},
    response::{Html, IntoResponse, Response},
    routing::get,
};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use tracing::{error, warn};

use crate::board::{Board, BoardError, select_departures};
use crate::domain::{ClockTime, DayType, TimeError};
use crate::schedule::ScheduleError;

use super::dto::*;
use super::state::AppState;
use super::templates::*;

/// Create the application router.
///
/// `static_dir` is the path to the static assets directory.
pub fn create_router(state: AppState, static_dir: &str) -> Router {
    Router::new()
        .route("/", get(index_page))
        .route("/health", get(health))
        .route("/departures", get(departures))
        .nest_service("/static", ServeDir::new(static_dir))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// Board page. Always HTML; failures become the page's fallback message.
async fn index_page(State(state): State<AppState>, Query(query): Query<BoardQuery>) -> Response {
    let view = board_view(build_board(&state, &query).await);
    Html(
        BoardTemplate { page: view }
            .render()
            .unwrap_or_else(|e| format!("Template error: {}", e)),
    )
    .into_response()
}

/// Check if request accepts HTML.
fn accepts_html(headers: &HeaderMap) -> bool {
    headers
        .get(header::ACCEPT)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|accept| accept.contains("text/html"))
}

/// Board as HTML or JSON, depending on the Accept header.
async fn departures(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(query): Query<BoardQuery>,
) -> Result<Response, AppError> {
    let result = build_board(&state, &query).await;

    if accepts_html(&headers) {
        let template = BoardTemplate {
            page: board_view(result),
        };
        let html = template.render().map_err(|e| AppError::Internal {
            message: format!("Template error: {}", e),
        })?;

        Ok(Html(html).into_response())
    } else {
        let board = result?;
        Ok(Json(BoardResponse::from_board(&board)).into_response())
    }
}

/// Why a board could not be shown.
#[derive(Debug)]
enum BoardFailure {
    InvalidTime(TimeError),
    Load(ScheduleError),
    Board(BoardError),
}

/// Load the schedule and build the board for a query.
///
/// The schedule is loaded before the direction and station are checked, so
/// a load failure wins over any query problem.
async fn build_board(state: &AppState, query: &BoardQuery) -> Result<Board, BoardFailure> {
    let now = match query.time.as_deref() {
        Some(s) => ClockTime::parse_hhmm(s).map_err(BoardFailure::InvalidTime)?,
        None => ClockTime::now(),
    };

    // Anything other than "holiday" means the weekday timetable
    let day = query
        .day
        .as_deref()
        .and_then(|d| DayType::parse(d).ok())
        .unwrap_or_default();

    let doc = state.loader.load(day).await.map_err(|e| {
        error!(error = %e, "failed to load schedule");
        BoardFailure::Load(e)
    })?;

    select_departures(
        &doc,
        query.station.as_deref().unwrap_or_default(),
        query.direction.as_deref().unwrap_or_default(),
        now,
        &state.board,
    )
    .map_err(BoardFailure::Board)
}

/// Turn a board result into what the page shows.
fn board_view(result: Result<Board, BoardFailure>) -> BoardView {
    match result {
        Ok(board) => BoardView::from_board(&board),
        Err(BoardFailure::InvalidTime(_)) => BoardView::message(None, MSG_INVALID_TIME),
        Err(BoardFailure::Load(_)) => BoardView::message(None, MSG_LOAD_FAILURE),
        Err(BoardFailure::Board(BoardError::StationNotFound { station, label })) => {
            BoardView::message(Some(board_title(&station, &label)), MSG_STATION_NOT_FOUND)
        }
        Err(BoardFailure::Board(
            BoardError::InvalidDirection(_) | BoardError::UnlabelledDirection(_),
        )) => BoardView::message(None, MSG_INVALID_DIRECTION),
    }
}

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    BadRequest { message: String },
    NotFound { message: String },
    LoadFailed { message: String },
    Internal { message: String },
}

impl From<BoardFailure> for AppError {
    fn from(failure: BoardFailure) -> Self {
        match failure {
            BoardFailure::InvalidTime(e) => AppError::BadRequest {
                message: format!("{MSG_INVALID_TIME} ({e})"),
            },
            BoardFailure::Load(e) => AppError::LoadFailed {
                message: format!("{MSG_LOAD_FAILURE} ({e})"),
            },
            BoardFailure::Board(BoardError::StationNotFound { station, .. }) => {
                AppError::NotFound {
                    message: format!("{MSG_STATION_NOT_FOUND} ({station})"),
                }
            }
            BoardFailure::Board(e) => AppError::BadRequest {
                message: format!("{MSG_INVALID_DIRECTION} ({e})"),
            },
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::BadRequest { message } => (StatusCode::BAD_REQUEST, message),
            AppError::NotFound { message } => (StatusCode::NOT_FOUND, message),
            AppError::LoadFailed { message } => (StatusCode::BAD_GATEWAY, message),
            AppError::Internal { message } => (StatusCode::INTERNAL_SERVER_ERROR, message),
        };

        warn!(%status, %message, "request failed");

        let body = Json(ErrorResponse { error: message });
        (status, body).into_response()
    }
}
