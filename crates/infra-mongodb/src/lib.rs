// hrdoc Infrastructure - MongoDB Adapter
// Implements: HrRecordRepository

mod connection;
mod record_repository;

pub use connection::{
    create_client, MongoConfig, DEFAULT_APP_NAME, DEFAULT_COLLECTION, DEFAULT_DB_NAME, DEFAULT_URL,
};
pub use record_repository::{to_document, MongoHrRecordRepository};

// Note: mongodb::error::Error conversion is handled by a helper function
// due to Rust's orphan rules (cannot implement From<mongodb::error::Error> for AppError here)
