use std::time::Instant;

use chrono::Utc;

use crate::domain::{
    classification::{
        entities::{AnalysisSource, RecognizedFood},
        policies::{canonical_food_name, rank_candidates},
        ports::{FoodClassifier, VisionClient},
        value_objects::VisionHints,
    },
    common::{entities::app_errors::CoreError, generate_uuid_v7, services::Service},
    dental_safety::{
        helpers::{safety_reasons, suggest_alternatives},
        policies::{derive_tags, evaluate_verdict},
    },
    food_analysis::{
        entities::FoodAnalysis, ports::FoodAnalysisService, value_objects::AnalyzeFoodInput,
    },
};

/// Primary confidence below this triggers the vision fallback.
const VISION_ESCALATION_THRESHOLD: f64 = 0.7;

/// Recognition reported when the classifier yields nothing usable.
const UNKNOWN_FOOD: &str = "Unknown Food";
const UNKNOWN_FOOD_CONFIDENCE: f64 = 0.5;

impl<CL, V> FoodAnalysisService for Service<CL, V>
where
    CL: FoodClassifier,
    V: VisionClient,
{
    async fn analyze_food(&self, input: AnalyzeFoodInput) -> Result<FoodAnalysis, CoreError> {
        let started = Instant::now();
        let analysis_id = generate_uuid_v7();

        // 1. Reject early when no classifier is configured.
        let classifier = self
            .classifier
            .as_ref()
            .ok_or(CoreError::ClassifierUnavailable)?;

        // 2. Classify and re-rank candidates by food plausibility.
        let mut recognized = match classifier.classify(input.image_data.clone()).await {
            Ok(candidates) => match rank_candidates(&candidates) {
                Some(ranked) => RecognizedFood {
                    name: canonical_food_name(&ranked.primary.label),
                    confidence: ranked.primary.confidence,
                    alternative_names: ranked
                        .alternatives
                        .iter()
                        .map(|candidate| canonical_food_name(&candidate.label))
                        .collect(),
                    source: AnalysisSource::PrimaryModel,
                },
                None => unrecognized(),
            },
            Err(err) => {
                tracing::warn!(%analysis_id, "classifier call failed, treating as no food detected: {err}");
                unrecognized()
            }
        };

        // 3. Escalate to the vision service on low confidence. Best effort:
        //    any failure keeps the primary result.
        if recognized.confidence < VISION_ESCALATION_THRESHOLD {
            if let Some(vision) = &self.vision_client {
                let hints = VisionHints {
                    has_braces: input.context.has_braces,
                    current_treatment: input.context.current_treatment.clone(),
                };
                match vision.identify(input.image_data.clone(), hints).await {
                    Ok(identification) => {
                        recognized.name = canonical_food_name(&identification.food_name);
                        recognized.confidence = identification.confidence;
                        recognized.source = AnalysisSource::FallbackVision;
                    }
                    Err(err) => {
                        tracing::warn!(%analysis_id, "vision fallback failed, keeping primary result: {err}");
                    }
                }
            }
        }

        // 4. Run the safety rules over the resolved name.
        let tags = derive_tags(&recognized.name);
        let verdict = evaluate_verdict(&tags, &input.context);
        let reasons = safety_reasons(verdict, &tags, &input.context);
        let alternatives = suggest_alternatives(verdict, &tags, &input.context);

        tracing::info!(
            %analysis_id,
            food_name = %recognized.name,
            confidence = recognized.confidence,
            verdict = verdict.as_str(),
            source = recognized.source.as_str(),
            "food analysis complete"
        );

        Ok(FoodAnalysis {
            food_name: recognized.name,
            confidence: recognized.confidence,
            alternative_names: recognized.alternative_names,
            tags,
            verdict,
            reasons,
            alternatives,
            source: recognized.source,
            timestamp: Utc::now(),
            processing_time: started.elapsed().as_secs_f64(),
        })
    }
}

fn unrecognized() -> RecognizedFood {
    RecognizedFood {
        name: UNKNOWN_FOOD.to_string(),
        confidence: UNKNOWN_FOOD_CONFIDENCE,
        alternative_names: Vec::new(),
        source: AnalysisSource::Mock,
    }
}
