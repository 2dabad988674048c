pub mod api;
pub mod config;
pub mod db;
pub mod disco;
pub mod export;
pub mod models;
pub mod service;

pub use config::AppConfig;
pub use db::create_pool;
pub use service::{RecordSource, SyntheticGenerator};
