pub mod api;
pub mod config;
pub mod export;
pub mod ingest;
pub mod models;
pub mod service;

pub use config::AppConfig;
pub use ingest::Normalizer;
pub use service::{compute, position, RollupService};
