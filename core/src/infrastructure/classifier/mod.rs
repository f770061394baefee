pub mod serving_client;

pub use serving_client::ServingClassifierClient;
