use crate::{
    domain::common::{ChewCheckConfig, services::Service},
    infrastructure::{classifier::ServingClassifierClient, vision::OpenAiVisionClient},
};

pub type ChewCheckService = Service<ServingClassifierClient, OpenAiVisionClient>;

/// Wire the configured collaborators into a service instance.
///
/// Both collaborators are optional: without a classifier endpoint analyze
/// requests are rejected as unavailable, without a vision key the
/// low-confidence escalation stays disabled.
pub fn create_service(config: ChewCheckConfig) -> Result<ChewCheckService, anyhow::Error> {
    let classifier = config
        .classifier
        .endpoint
        .as_ref()
        .filter(|endpoint| !endpoint.is_empty())
        .map(|endpoint| {
            ServingClassifierClient::new(endpoint.clone(), config.classifier.model_name.clone())
        });
    if classifier.is_none() {
        tracing::warn!("no classifier endpoint configured, analyze requests will be rejected");
    }

    let vision_client = match &config.vision.api_key {
        Some(api_key) if !api_key.is_empty() => Some(OpenAiVisionClient::new(
            api_key.clone(),
            config.vision.model.clone(),
        )?),
        _ => None,
    };

    Ok(Service::new(classifier, vision_client))
}
