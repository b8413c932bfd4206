// HR Record Repository Port (Interface)

use crate::domain::{HrRecord, RecordId};
use crate::error::Result;
use async_trait::async_trait;

/// Repository interface for HR record persistence
///
/// Write-only: records are inserted one document at a time.
#[async_trait]
pub trait HrRecordRepository: Send + Sync {
    /// Insert a single record and return the id assigned by the store
    async fn insert(&self, record: &HrRecord) -> Result<RecordId>;
}

// ============================================================================
// Mock Implementations for Testing
// ============================================================================

pub mod mocks {
    use super::*;
    use crate::error::AppError;
    use std::sync::Mutex;

    /// In-memory HrRecordRepository for testing
    ///
    /// Hands out sequential ids (`mock-1`, `mock-2`, ...).
    #[derive(Default)]
    pub struct InMemoryHrRecordRepository {
        records: Mutex<Vec<(RecordId, HrRecord)>>,
        fail_with: Mutex<Option<String>>,
    }

    impl InMemoryHrRecordRepository {
        pub fn new() -> Self {
            Self::default()
        }

        /// Make every subsequent insert fail with a database error
        pub fn fail_inserts(&self, message: impl Into<String>) {
            *self.fail_with.lock().unwrap() = Some(message.into());
        }

        pub fn records(&self) -> Vec<(RecordId, HrRecord)> {
            self.records.lock().unwrap().clone()
        }

        pub fn len(&self) -> usize {
            self.records.lock().unwrap().len()
        }

        pub fn is_empty(&self) -> bool {
            self.len() == 0
        }
    }

    #[async_trait]
    impl HrRecordRepository for InMemoryHrRecordRepository {
        async fn insert(&self, record: &HrRecord) -> Result<RecordId> {
            if let Some(message) = self.fail_with.lock().unwrap().clone() {
                return Err(AppError::Database(message));
            }

            let mut records = self.records.lock().unwrap();
            let id = RecordId::new(format!("mock-{}", records.len() + 1));
            records.push((id.clone(), record.clone()));
            Ok(id)
        }
    }
}
