use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// One raw candidate emitted by the image classifier, most-confident first
/// in the candidate list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FoodLabel {
    pub label: String,
    pub confidence: f64,
}

/// Which collaborator produced the recognition the verdict is based on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "kebab-case")]
pub enum AnalysisSource {
    PrimaryModel,
    FallbackVision,
    Mock,
}

impl AnalysisSource {
    pub fn as_str(&self) -> &str {
        match self {
            AnalysisSource::PrimaryModel => "primary-model",
            AnalysisSource::FallbackVision => "fallback-vision",
            AnalysisSource::Mock => "mock",
        }
    }
}

/// The food the classification stage settled on, before safety evaluation.
#[derive(Debug, Clone, PartialEq)]
pub struct RecognizedFood {
    pub name: String,
    pub confidence: f64,
    pub alternative_names: Vec<String>,
    pub source: AnalysisSource,
}
