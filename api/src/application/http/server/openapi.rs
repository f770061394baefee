use utoipa::OpenApi;

use chewcheck_core::domain::{
    classification::entities::AnalysisSource,
    dental_safety::entities::{FoodTag, Verdict},
    food_analysis::entities::FoodAnalysis,
    health::entities::ApiHealthStatus,
};

use crate::application::http::{
    food_analysis::{
        handlers::analyze_food_base64::AnalyzeFoodResponse,
        router::FoodAnalysisApiDoc,
        validators::{AnalyzeFoodBase64Request, UserContextRequest},
    },
    health::{ServiceEndpoints, ServiceInfoResponse},
    server::{api_entities::api_error::ApiErrorResponse, config::AppConfigResponse},
};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "ChewCheck API",
        description = "Classifies food photos and issues dental-safety verdicts"
    ),
    nest(
        (path = "/api/analyze-food", api = FoodAnalysisApiDoc)
    ),
    paths(
        crate::application::http::health::health,
        crate::application::http::health::service_info
    ),
    components(schemas(
        AnalysisSource,
        AnalyzeFoodBase64Request,
        AnalyzeFoodResponse,
        ApiErrorResponse,
        ApiHealthStatus,
        AppConfigResponse,
        FoodAnalysis,
        FoodTag,
        ServiceEndpoints,
        ServiceInfoResponse,
        UserContextRequest,
        Verdict
    ))
)]
pub struct ApiDoc;
