use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use chewcheck_core::domain::dental_safety::value_objects::{
    DentalProcedure, DietRestriction, UserContext,
};

/// Caller-declared oral-health context. Unknown restriction and procedure
/// values are skipped rather than rejected.
#[derive(Debug, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct UserContextRequest {
    pub has_braces: bool,
    pub diet_restrictions: Vec<String>,
    pub recent_procedures: Vec<String>,
    pub current_treatment: Option<String>,
}

impl From<UserContextRequest> for UserContext {
    fn from(request: UserContextRequest) -> Self {
        UserContext {
            has_braces: request.has_braces,
            diet_restrictions: request
                .diet_restrictions
                .iter()
                .filter_map(|value| DietRestriction::parse(value))
                .collect(),
            recent_procedures: request
                .recent_procedures
                .iter()
                .filter_map(|value| DentalProcedure::parse(value))
                .collect(),
            current_treatment: request.current_treatment,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema, Validate)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzeFoodBase64Request {
    /// Base64-encoded image payload.
    #[validate(length(min = 1, message = "imageBase64 must not be empty"))]
    pub image_base64: String,

    #[serde(default)]
    pub user_context: UserContextRequest,
}
