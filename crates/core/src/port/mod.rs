// Port Layer - Interfaces for external dependencies

pub mod record_repository;

// Re-exports
pub use record_repository::HrRecordRepository;
