use axum::{Json, Router, extract::State, routing::get};
use chrono::{DateTime, Utc};
use serde::Serialize;
use utoipa::ToSchema;

use chewcheck_core::domain::health::{entities::ApiHealthStatus, ports::HealthCheckService};

use crate::application::http::server::app_state::AppState;

#[derive(Debug, Serialize, ToSchema)]
pub struct ServiceInfoResponse {
    pub name: &'static str,
    pub version: &'static str,
    pub description: &'static str,
    pub endpoints: ServiceEndpoints,
    pub timestamp: DateTime<Utc>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ServiceEndpoints {
    pub health: &'static str,
    pub analyze: &'static str,
    pub analyze_image: &'static str,
}

#[utoipa::path(
    get,
    path = "/",
    tag = "health",
    summary = "Service info",
    responses(
        (status = 200, body = ServiceInfoResponse)
    ),
)]
pub async fn service_info() -> Json<ServiceInfoResponse> {
    Json(ServiceInfoResponse {
        name: "ChewCheck API",
        version: env!("CARGO_PKG_VERSION"),
        description: "Food photo analysis with dental-safety verdicts",
        endpoints: ServiceEndpoints {
            health: "/api/health",
            analyze: "/api/analyze-food",
            analyze_image: "/api/analyze-food/image",
        },
        timestamp: Utc::now(),
    })
}

#[utoipa::path(
    get,
    path = "/api/health",
    tag = "health",
    summary = "Health check",
    description = "Reports classifier readiness and vision fallback configuration",
    responses(
        (status = 200, body = ApiHealthStatus)
    ),
)]
pub async fn health(State(state): State<AppState>) -> Json<ApiHealthStatus> {
    Json(state.service.health().await)
}

pub fn health_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route(
            &format!("{}/", state.args.server.root_path),
            get(service_info),
        )
        .route(
            &format!("{}/api/health", state.args.server.root_path),
            get(health),
        )
}
