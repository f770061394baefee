use std::future::Future;

use crate::domain::{
    common::entities::app_errors::CoreError,
    food_analysis::{entities::FoodAnalysis, value_objects::AnalyzeFoodInput},
};

/// Service trait for the analysis pipeline.
#[cfg_attr(test, mockall::automock)]
pub trait FoodAnalysisService: Send + Sync {
    fn analyze_food(
        &self,
        input: AnalyzeFoodInput,
    ) -> impl Future<Output = Result<FoodAnalysis, CoreError>> + Send;
}
