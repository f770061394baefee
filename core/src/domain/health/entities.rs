use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ApiHealthStatus {
    pub status: String,
    pub classifier_ready: bool,
    pub vision_configured: bool,
    pub timestamp: DateTime<Utc>,
}
