use chrono::{DateTime, Utc};
use uuid::{NoContext, Timestamp, Uuid};

pub mod entities;
pub mod services;

#[derive(Clone, Debug)]
pub struct ChewCheckConfig {
    pub classifier: ClassifierConfig,
    pub vision: VisionConfig,
}

#[derive(Clone, Debug)]
pub struct ClassifierConfig {
    pub endpoint: Option<String>,
    pub model_name: String,
}

#[derive(Clone, Debug)]
pub struct VisionConfig {
    pub api_key: Option<String>,
    pub model: String,
}

pub fn generate_timestamp() -> (DateTime<Utc>, Timestamp) {
    let now = Utc::now();
    let seconds = now.timestamp().try_into().unwrap_or(0);
    let timestamp = Timestamp::from_unix(NoContext, seconds, 0);

    (now, timestamp)
}

pub fn generate_uuid_v7() -> Uuid {
    let (_, timestamp) = generate_timestamp();
    Uuid::new_v7(timestamp)
}
