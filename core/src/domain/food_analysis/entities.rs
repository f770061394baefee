use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{
    classification::entities::AnalysisSource,
    dental_safety::entities::{FoodTag, Verdict},
};

/// Outcome of one analyze-food request.
///
/// Built once per request and returned to the caller; nothing is persisted
/// across requests. `alternative_names` are other plausible recognitions of
/// the photo, `alternatives` are substitute foods suggested for non-safe
/// verdicts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct FoodAnalysis {
    pub food_name: String,
    pub confidence: f64,
    pub alternative_names: Vec<String>,
    pub tags: Vec<FoodTag>,
    pub verdict: Verdict,
    pub reasons: Vec<String>,
    pub alternatives: Vec<String>,
    pub source: AnalysisSource,
    pub timestamp: DateTime<Utc>,
    pub processing_time: f64,
}
