// MongoDB HrRecordRepository Implementation

use crate::connection::{create_client, MongoConfig};
use async_trait::async_trait;
use hrdoc_core::domain::{HrRecord, RecordId};
use hrdoc_core::error::{AppError, Result};
use hrdoc_core::port::HrRecordRepository;
use mongodb::bson::{self, Bson, Document};
use mongodb::error::{ErrorKind, WriteFailure};
use mongodb::{Client, Collection};
use tracing::{debug, info};

const DUPLICATE_KEY_CODE: i32 = 11000;

// Server-side write errors, keyed by MongoDB error code
fn map_write_error(code: i32, message: &str) -> AppError {
    if code == DUPLICATE_KEY_CODE {
        AppError::Conflict(format!("Duplicate key: {}", message))
    } else {
        AppError::Database(format!("Write error [{}]: {}", code, message))
    }
}

// Helper to convert mongodb::error::Error to AppError with structured information
fn map_mongo_error(err: mongodb::error::Error) -> AppError {
    match err.kind.as_ref() {
        ErrorKind::Write(WriteFailure::WriteError(write_err)) => {
            map_write_error(write_err.code, &write_err.message)
        }
        ErrorKind::Write(WriteFailure::WriteConcernError(wc_err)) => AppError::Database(format!(
            "Write concern error [{}]: {}",
            wc_err.code, wc_err.message
        )),
        ErrorKind::ServerSelection { message, .. } => {
            // No reachable server within the selection timeout
            AppError::Database(format!("Server selection failed: {}", message))
        }
        ErrorKind::Authentication { message, .. } => {
            AppError::Database(format!("Authentication failed: {}", message))
        }
        ErrorKind::InvalidArgument { message, .. } => {
            AppError::Config(format!("Invalid argument: {}", message))
        }
        _ => {
            // Network, DNS, protocol errors
            AppError::Database(err.to_string())
        }
    }
}

/// Convert a record into the BSON document that gets inserted
pub fn to_document(record: &HrRecord) -> Result<Document> {
    bson::to_document(record).map_err(|e| match e {
        bson::ser::Error::UnsignedIntegerExceededRange(value) => AppError::Validation(format!(
            "Value {} does not fit a signed 64-bit BSON integer",
            value
        )),
        other => AppError::Internal(format!("BSON serialization failed: {}", other)),
    })
}

fn record_id_from_bson(id: &Bson) -> RecordId {
    match id {
        Bson::ObjectId(oid) => RecordId::new(oid.to_hex()),
        Bson::String(s) => RecordId::new(s.clone()),
        other => RecordId::new(other.to_string()),
    }
}

pub struct MongoHrRecordRepository {
    collection: Collection<Document>,
}

impl MongoHrRecordRepository {
    pub fn new(client: Client, config: &MongoConfig) -> Self {
        let collection = client
            .database(&config.db_name)
            .collection::<Document>(&config.collection_name);
        Self { collection }
    }

    /// Create a client from the config and bind to its collection
    pub async fn connect(config: &MongoConfig) -> Result<Self> {
        let client = create_client(config).await?;
        Ok(Self::new(client, config))
    }

    pub fn namespace(&self) -> String {
        self.collection.namespace().to_string()
    }
}

#[async_trait]
impl HrRecordRepository for MongoHrRecordRepository {
    async fn insert(&self, record: &HrRecord) -> Result<RecordId> {
        let doc = to_document(record)?;
        debug!(
            namespace = %self.namespace(),
            employee_id = %record.employee_id(),
            "Inserting HR record"
        );

        let result = self
            .collection
            .insert_one(doc)
            .await
            .map_err(map_mongo_error)?;

        let id = record_id_from_bson(&result.inserted_id);
        info!(namespace = %self.namespace(), "Record inserted with _id: {}", id);
        Ok(id)
    }
}
