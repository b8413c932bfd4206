// HR Record Service - build and store employee records

pub mod create;
pub mod sample;

pub use create::{create_hr_record, HrRecordInput};
pub use sample::sample_input;

use crate::domain::{HrRecord, RecordId};
use crate::error::Result;
use crate::port::HrRecordRepository;
use std::sync::Arc;
use tracing::{debug, info};

/// HR Record Service
pub struct HrRecordService {
    record_repo: Arc<dyn HrRecordRepository>,
}

impl HrRecordService {
    pub fn new(record_repo: Arc<dyn HrRecordRepository>) -> Self {
        Self { record_repo }
    }

    /// Build a record from flat input and insert it
    pub async fn register(&self, input: HrRecordInput) -> Result<RecordId> {
        let record = create_hr_record(input);
        debug!(
            employee_id = %record.employee_id(),
            history_events = record.history.len(),
            "HR record built"
        );
        self.insert(&record).await
    }

    /// Insert an already built record
    pub async fn insert(&self, record: &HrRecord) -> Result<RecordId> {
        let id = self.record_repo.insert(record).await?;
        info!(employee_id = %record.employee_id(), record_id = %id, "HR record stored");
        Ok(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AppError;
    use crate::port::record_repository::mocks::InMemoryHrRecordRepository;

    #[tokio::test]
    async fn test_register_inserts_once() {
        let repo = Arc::new(InMemoryHrRecordRepository::new());
        let service = HrRecordService::new(repo.clone());

        let id = service.register(sample_input()).await.unwrap();

        assert_eq!(id.as_str(), "mock-1");
        assert_eq!(repo.len(), 1);
        let (stored_id, stored) = &repo.records()[0];
        assert_eq!(stored_id, &id);
        assert_eq!(stored.employee_id(), "E001");
        assert_eq!(stored, &create_hr_record(sample_input()));
    }

    #[tokio::test]
    async fn test_same_input_twice_is_not_deduplicated() {
        let repo = Arc::new(InMemoryHrRecordRepository::new());
        let service = HrRecordService::new(repo.clone());

        let first = service.register(sample_input()).await.unwrap();
        let second = service.register(sample_input()).await.unwrap();

        assert_ne!(first, second);
        assert_eq!(repo.len(), 2);
    }

    #[test]
    fn test_repository_error_propagates() {
        let repo = Arc::new(InMemoryHrRecordRepository::new());
        repo.fail_inserts("connection refused");
        let service = HrRecordService::new(repo.clone());

        let result = tokio_test::block_on(service.insert(&create_hr_record(sample_input())));

        match result {
            Err(AppError::Database(msg)) => assert_eq!(msg, "connection refused"),
            other => panic!("expected database error, got {:?}", other),
        }

        // Every later insert fails as well
        let again = tokio_test::block_on(service.register(sample_input()));
        assert!(matches!(again, Err(AppError::Database(_))));
        assert!(repo.is_empty());
    }
}
