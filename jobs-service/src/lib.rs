/// Jobs Service Library
///
/// Handles job listings for the Kwik Konnect platform: filterable job
/// search, swipe decisions (apply/skip/undo), saved jobs, the company
/// directory, and certificate registration/verification.
///
/// # Modules
///
/// - `handlers`: Job-related HTTP request handlers
/// - `models`: Data structures for jobs, companies, decisions, certificates
/// - `services`: Business logic layer
/// - `db`: Database access layer and repositories
/// - `error`: Error types and handling
/// - `config`: Configuration management
/// - `metrics`: Observability and metrics collection
pub mod config;
pub mod db;
pub mod error;
pub mod handlers;
pub mod metrics;
pub mod models;
pub mod services;

pub use config::Config;
pub use error::{AppError, Result};
