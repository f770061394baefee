use axum::Json;
use serde::Serialize;
use utoipa::ToSchema;

#[derive(Debug, Serialize, ToSchema)]
pub struct AppConfigResponse {
    pub name: &'static str,
    pub version: &'static str,
}

pub async fn get_config() -> Json<AppConfigResponse> {
    Json(AppConfigResponse {
        name: env!("CARGO_PKG_NAME"),
        version: env!("CARGO_PKG_VERSION"),
    })
}
