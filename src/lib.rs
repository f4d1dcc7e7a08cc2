//! Release Counter - GitHub release download counts over HTTP
//!
//! Aggregates asset download counts for a repository's releases and serves
//! them as JSON or as an SVG badge, with an in-memory response cache.

pub mod aggregate;
pub mod api;
pub mod badge;
pub mod cache;
pub mod config;
pub mod error;
pub mod github;
pub mod models;
pub mod tasks;

pub use api::AppState;
pub use config::Config;
pub use error::AppError;
pub use tasks::spawn_cleanup_task;
