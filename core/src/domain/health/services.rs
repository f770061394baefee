use chrono::Utc;

use crate::domain::{
    classification::ports::{FoodClassifier, VisionClient},
    common::services::Service,
    health::{entities::ApiHealthStatus, ports::HealthCheckService},
};

impl<CL, V> HealthCheckService for Service<CL, V>
where
    CL: FoodClassifier,
    V: VisionClient,
{
    async fn health(&self) -> ApiHealthStatus {
        let classifier_ready = match &self.classifier {
            Some(classifier) => classifier.ready().await.unwrap_or(false),
            None => false,
        };

        let status = if classifier_ready { "healthy" } else { "degraded" };

        ApiHealthStatus {
            status: status.to_string(),
            classifier_ready,
            vision_configured: self.vision_client.is_some(),
            timestamp: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::classification::ports::{MockFoodClassifier, MockVisionClient};

    #[tokio::test]
    async fn unconfigured_classifier_reports_degraded() {
        let service: Service<MockFoodClassifier, MockVisionClient> = Service::new(None, None);

        let health = service.health().await;
        assert_eq!(health.status, "degraded");
        assert!(!health.classifier_ready);
        assert!(!health.vision_configured);
    }

    #[tokio::test]
    async fn ready_classifier_reports_healthy() {
        let mut classifier = MockFoodClassifier::new();
        classifier.expect_ready().returning(|| Box::pin(async { Ok(true) }));
        let vision = MockVisionClient::new();

        let service = Service::new(Some(classifier), Some(vision));

        let health = service.health().await;
        assert_eq!(health.status, "healthy");
        assert!(health.classifier_ready);
        assert!(health.vision_configured);
    }
}
