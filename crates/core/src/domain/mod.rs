// Domain Layer - HR record entities

pub mod history;
pub mod record;

// Re-exports
pub use history::HistoryEvent;
pub use record::{
    Compensation, Documentation, EmployeeProfile, Exit, HrRecord, Osh, RecordId, Resources,
    SocialSecurity,
};
