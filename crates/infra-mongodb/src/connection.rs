// MongoDB Client Setup

use hrdoc_core::error::{AppError, Result};
use mongodb::options::ClientOptions;
use mongodb::Client;
use std::time::Duration;

pub const DEFAULT_URL: &str = "mongodb://localhost:27017/";
pub const DEFAULT_DB_NAME: &str = "HR";
pub const DEFAULT_COLLECTION: &str = "employees";
pub const DEFAULT_APP_NAME: &str = "hrdoc";

/// Target of the insert operation
#[derive(Debug, Clone)]
pub struct MongoConfig {
    /// Connection string, e.g. `mongodb+srv://<user>:<password>@<cluster>/<db>?retryWrites=true&w=majority`
    pub url: String,
    pub db_name: String,
    pub collection_name: String,
    pub app_name: Option<String>,
    /// None keeps the driver default (30s)
    pub server_selection_timeout: Option<Duration>,
}

impl Default for MongoConfig {
    fn default() -> Self {
        Self {
            url: DEFAULT_URL.to_string(),
            db_name: DEFAULT_DB_NAME.to_string(),
            collection_name: DEFAULT_COLLECTION.to_string(),
            app_name: Some(DEFAULT_APP_NAME.to_string()),
            server_selection_timeout: None,
        }
    }
}

/// Create a MongoDB client from the connection string
///
/// The driver connects lazily; connection problems surface on the first write.
pub async fn create_client(config: &MongoConfig) -> Result<Client> {
    let mut options = ClientOptions::parse(config.url.as_str())
        .await
        .map_err(|e| AppError::Config(format!("Invalid MongoDB URL: {}", e)))?;

    if let Some(app_name) = &config.app_name {
        options.app_name = Some(app_name.clone());
    }
    if let Some(timeout) = config.server_selection_timeout {
        options.server_selection_timeout = Some(timeout);
    }

    Client::with_options(options)
        .map_err(|e| AppError::Config(format!("MongoDB client creation failed: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_target() {
        let config = MongoConfig::default();
        assert_eq!(config.url, "mongodb://localhost:27017/");
        assert_eq!(config.db_name, "HR");
        assert_eq!(config.collection_name, "employees");
    }

    #[tokio::test]
    async fn test_create_client_is_lazy() {
        // No server is needed until the first operation
        let config = MongoConfig {
            url: "mongodb://127.0.0.1:1/".to_string(),
            ..Default::default()
        };
        assert!(create_client(&config).await.is_ok());
    }

    #[tokio::test]
    async fn test_create_client_rejects_bad_scheme() {
        let config = MongoConfig {
            url: "postgres://localhost:5432/".to_string(),
            ..Default::default()
        };
        let err = create_client(&config).await.unwrap_err();
        assert!(matches!(err, AppError::Config(_)));
    }
}
