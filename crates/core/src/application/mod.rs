// Application Layer - Use Cases

pub mod hr_record;

// Re-exports
pub use hr_record::{create_hr_record, sample_input, HrRecordInput, HrRecordService};
