/// Context forwarded to the secondary vision service so its answer can
/// account for the caller's situation.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct VisionHints {
    pub has_braces: bool,
    pub current_treatment: Option<String>,
}

/// Successful answer from the secondary vision service.
#[derive(Debug, Clone, PartialEq)]
pub struct VisionIdentification {
    pub food_name: String,
    pub confidence: f64,
}
