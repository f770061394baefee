use clap::Parser;

use chewcheck_core::domain::common::{ChewCheckConfig, ClassifierConfig, VisionConfig};

#[derive(Debug, Clone, Parser)]
#[command(name = "chewcheck-api", about = "Dental-safety food analysis API")]
pub struct Args {
    #[command(flatten)]
    pub server: ServerArgs,

    #[command(flatten)]
    pub classifier: ClassifierArgs,

    #[command(flatten)]
    pub vision: VisionArgs,

    /// Emit logs as JSON.
    #[arg(long, env = "LOG_JSON", default_value_t = false)]
    pub log_json: bool,
}

#[derive(Debug, Clone, clap::Args)]
pub struct ServerArgs {
    #[arg(long, env = "HOST", default_value = "0.0.0.0")]
    pub host: String,

    #[arg(long, env = "PORT", default_value_t = 8000)]
    pub port: u16,

    /// Path prefix when served behind a reverse proxy, e.g. `/chewcheck`.
    #[arg(long, env = "ROOT_PATH", default_value = "")]
    pub root_path: String,

    #[arg(
        long,
        env = "ALLOWED_ORIGINS",
        value_delimiter = ',',
        default_value = "http://localhost:3000"
    )]
    pub allowed_origins: Vec<String>,
}

#[derive(Debug, Clone, clap::Args)]
pub struct ClassifierArgs {
    /// Base URL of the model-serving sidecar. Analyze requests are
    /// rejected while unset.
    #[arg(long, env = "CLASSIFIER_ENDPOINT")]
    pub classifier_endpoint: Option<String>,

    #[arg(long, env = "CLASSIFIER_MODEL", default_value = "food101")]
    pub classifier_model: String,
}

#[derive(Debug, Clone, clap::Args)]
pub struct VisionArgs {
    /// Enables the low-confidence vision fallback when set.
    #[arg(long, env = "OPENAI_API_KEY", hide_env_values = true)]
    pub openai_api_key: Option<String>,

    #[arg(long, env = "OPENAI_VISION_MODEL", default_value = "gpt-4o")]
    pub openai_vision_model: String,
}

impl From<Args> for ChewCheckConfig {
    fn from(args: Args) -> Self {
        ChewCheckConfig {
            classifier: ClassifierConfig {
                endpoint: args.classifier.classifier_endpoint,
                model_name: args.classifier.classifier_model,
            },
            vision: VisionConfig {
                api_key: args.vision.openai_api_key,
                model: args.vision.openai_vision_model,
            },
        }
    }
}
