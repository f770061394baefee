use std::future::Future;

use crate::domain::{
    classification::{
        entities::FoodLabel,
        value_objects::{VisionHints, VisionIdentification},
    },
    common::entities::app_errors::CoreError,
};

/// Client for the primary image classifier.
#[cfg_attr(test, mockall::automock)]
pub trait FoodClassifier: Send + Sync {
    /// Classify an encoded image into an ordered list of candidates,
    /// most-confident first, at most ten entries.
    fn classify(
        &self,
        image_data: Vec<u8>,
    ) -> impl Future<Output = Result<Vec<FoodLabel>, CoreError>> + Send;

    /// Whether the classifier is reachable and has its model loaded.
    fn ready(&self) -> impl Future<Output = Result<bool, CoreError>> + Send;
}

/// Client for the secondary vision service consulted on low confidence.
#[cfg_attr(test, mockall::automock)]
pub trait VisionClient: Send + Sync {
    fn identify(
        &self,
        image_data: Vec<u8>,
        hints: VisionHints,
    ) -> impl Future<Output = Result<VisionIdentification, CoreError>> + Send;
}
