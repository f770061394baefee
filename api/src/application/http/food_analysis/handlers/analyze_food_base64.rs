use axum::{Json, extract::State};
use base64::{Engine as _, engine::general_purpose};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::application::http::{
    food_analysis::validators::AnalyzeFoodBase64Request,
    server::{
        api_entities::{api_error::ApiError, response::Response},
        app_state::AppState,
    },
};
use chewcheck_core::domain::food_analysis::{
    entities::FoodAnalysis, ports::FoodAnalysisService, value_objects::AnalyzeFoodInput,
};

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct AnalyzeFoodResponse {
    pub data: FoodAnalysis,
}

#[utoipa::path(
    post,
    path = "",
    tag = "food-analysis",
    summary = "Analyze food from a base64 image",
    description = "Classifies the photo and returns a dental-safety verdict for the caller's context",
    request_body = AnalyzeFoodBase64Request,
    responses(
        (status = 200, body = AnalyzeFoodResponse)
    ),
)]
pub async fn analyze_food_base64(
    State(state): State<AppState>,
    Json(request): Json<AnalyzeFoodBase64Request>,
) -> Result<Response<AnalyzeFoodResponse>, ApiError> {
    request
        .validate()
        .map_err(|e| ApiError::BadRequest(e.to_string()))?;

    let image_data = general_purpose::STANDARD
        .decode(request.image_base64.as_bytes())
        .map_err(|_| ApiError::BadRequest("imageBase64 is not valid base64".to_string()))?;

    let analysis = state
        .service
        .analyze_food(AnalyzeFoodInput {
            image_data,
            context: request.user_context.into(),
        })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(AnalyzeFoodResponse { data: analysis }))
}
