use axum::extract::{Multipart, State};

use crate::application::http::{
    food_analysis::{
        handlers::analyze_food_base64::AnalyzeFoodResponse, validators::UserContextRequest,
    },
    server::{
        api_entities::{api_error::ApiError, response::Response},
        app_state::AppState,
    },
};
use chewcheck_core::domain::food_analysis::{
    ports::FoodAnalysisService, value_objects::AnalyzeFoodInput,
};

const MAX_IMAGE_SIZE: usize = 10 * 1024 * 1024; // 10MB

#[utoipa::path(
    post,
    path = "/image",
    tag = "food-analysis",
    summary = "Analyze food from an uploaded image",
    description = "Multipart variant: an `image` part plus an optional `context` JSON part",
    responses(
        (status = 200, body = AnalyzeFoodResponse)
    ),
)]
pub async fn analyze_food_image(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Response<AnalyzeFoodResponse>, ApiError> {
    let mut image_data: Option<Vec<u8>> = None;
    let mut context = UserContextRequest::default();

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ApiError::BadRequest(format!("Failed to read multipart field: {}", e)))?
    {
        let name = field.name().unwrap_or("").to_string();

        match name.as_str() {
            "image" => {
                if let Some(content_type) = field.content_type() {
                    if !content_type.starts_with("image/") {
                        return Err(ApiError::BadRequest("File must be an image".to_string()));
                    }
                }

                let data = field
                    .bytes()
                    .await
                    .map_err(|e| ApiError::BadRequest(format!("Failed to read image: {}", e)))?;

                if data.len() > MAX_IMAGE_SIZE {
                    return Err(ApiError::BadRequest(format!(
                        "Image too large. Max size is {} bytes",
                        MAX_IMAGE_SIZE
                    )));
                }

                image_data = Some(data.to_vec());
            }
            "context" => {
                let value = field
                    .text()
                    .await
                    .map_err(|e| ApiError::BadRequest(format!("Failed to read context: {}", e)))?;
                context = serde_json::from_str(&value)
                    .map_err(|e| ApiError::BadRequest(format!("Invalid context: {}", e)))?;
            }
            _ => {}
        }
    }

    let image_data =
        image_data.ok_or_else(|| ApiError::BadRequest("Missing image field".to_string()))?;

    let analysis = state
        .service
        .analyze_food(AnalyzeFoodInput {
            image_data,
            context: context.into(),
        })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(AnalyzeFoodResponse { data: analysis }))
}
