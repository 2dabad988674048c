pub mod record;
pub mod stats;

pub use record::{AccuracyCategory, AuditRow, BillRecord, ProcessingStatus, VerifyFlag};
pub use stats::{BatchStatistics, DataOrigin, GlobalAccuracy, GlobalKpis, RecordSet};
