/// Community Service Library
///
/// Handles the community feed for the Kwik Konnect platform: posts,
/// comments, reactions, profiles, and the latest/trending read paths.
///
/// # Modules
///
/// - `handlers`: Feed-related HTTP request handlers
/// - `models`: Data structures for posts, comments, reactions, profiles
/// - `services`: Business logic layer
/// - `db`: Database access layer and repositories
/// - `cache`: Trending feed caching
/// - `error`: Error types and handling
/// - `config`: Configuration management
/// - `metrics`: Observability and metrics collection
pub mod cache;
pub mod config;
pub mod db;
pub mod error;
pub mod handlers;
pub mod metrics;
pub mod models;
pub mod services;

pub use config::Config;
pub use error::{AppError, Result};
