use super::handlers::{
    analyze_food_base64::{__path_analyze_food_base64, analyze_food_base64},
    analyze_food_image::{__path_analyze_food_image, analyze_food_image},
};
use crate::application::http::server::app_state::AppState;
use axum::{Router, extract::DefaultBodyLimit, routing::post};
use utoipa::OpenApi;

/// Request body cap: a 10MB image plus multipart overhead.
const MAX_BODY_SIZE: usize = 12 * 1024 * 1024;

#[derive(OpenApi)]
#[openapi(paths(analyze_food_base64, analyze_food_image))]
pub struct FoodAnalysisApiDoc;

pub fn food_analysis_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route(
            &format!("{}/api/analyze-food", state.args.server.root_path),
            post(analyze_food_base64),
        )
        .route(
            &format!("{}/api/analyze-food/image", state.args.server.root_path),
            post(analyze_food_image),
        )
        .layer(DefaultBodyLimit::max(MAX_BODY_SIZE))
}
