pub mod analytics;
pub mod classifier;
pub mod loader;
pub mod synthetic;

pub use loader::{RecordSource, SourceError};
pub use synthetic::SyntheticGenerator;
