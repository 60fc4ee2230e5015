use axum::{
    extract::{Path, Query, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::Deserialize;
use serde_json::json;
use std::sync::Arc;
use tracing::debug;

use barakah_core::models::chart::ChartGeometry;
use barakah_core::models::nav::NavPoint;
use barakah_core::models::period::NavPeriod;
use barakah_core::models::summary::NavSummary;
use barakah_core::services::chart_service::PointerPosition;
use barakah_core::BarakahNav;

/// Shared, read-only application state.
pub type AppState = Arc<BarakahNav>;

/// `?period=` on the NAV routes.
#[derive(Debug, Deserialize)]
pub struct NavQuery {
    period: Option<String>,
}

/// Query parameters of the chart route.
#[derive(Debug, Deserialize)]
pub struct ChartQuery {
    period: Option<String>,
    /// Pointer offset on the rendered chart
    hover_x: Option<f64>,
    /// Width the chart is rendered at; defaults to the logical width
    width: Option<f64>,
}

/// JSON error body: `{"message": "..."}`.
#[derive(Debug)]
pub struct ApiError {
    status: StatusCode,
    message: String,
}

impl ApiError {
    pub fn not_found(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::NOT_FOUND,
            message: message.into(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(json!({ "message": self.message }))).into_response()
    }
}

/// All NAV routes, mounted under `/api`.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/api/funds", get(list_funds))
        .route("/api/nav-data/{fund_name}", get(get_nav_data))
        .route("/api/nav-data/{fund_name}/summary", get(get_nav_summary))
        .route("/api/nav-data/{fund_name}/chart.svg", get(get_nav_chart))
        .with_state(state)
}

/// List configured fund names
async fn list_funds(State(nav): State<AppState>) -> Json<Vec<String>> {
    Json(nav.fund_names())
}

/// Tail of a fund's NAV series. Unknown funds give `[]`.
async fn get_nav_data(
    State(nav): State<AppState>,
    Path(fund_name): Path<String>,
    Query(query): Query<NavQuery>,
) -> Json<Vec<NavPoint>> {
    let points = nav.nav_data(&fund_name, query.period.as_deref());
    debug!(fund = %fund_name, period = ?query.period, points = points.len(), "served NAV data");
    Json(points)
}

/// Current NAV, daily change and 52-week high.
async fn get_nav_summary(
    State(nav): State<AppState>,
    Path(fund_name): Path<String>,
) -> Result<Json<NavSummary>, ApiError> {
    nav.summary(&fund_name)
        .map(Json)
        .ok_or_else(|| ApiError::not_found(format!("No NAV data for fund {fund_name}")))
}

/// Server-rendered chart, optionally with the tooltip under `hover_x`.
async fn get_nav_chart(
    State(nav): State<AppState>,
    Path(fund_name): Path<String>,
    Query(query): Query<ChartQuery>,
) -> impl IntoResponse {
    let period = NavPeriod::from_token(query.period.as_deref());
    let pointer = query.hover_x.map(|client_x| PointerPosition {
        client_x,
        rendered_width: query.width,
    });
    let svg = nav.chart_svg(&fund_name, period, ChartGeometry::default(), pointer);
    ([(header::CONTENT_TYPE, "image/svg+xml")], svg)
}
