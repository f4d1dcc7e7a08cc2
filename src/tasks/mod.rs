//! Background Tasks Module
//!
//! Tasks that run detached from request handling.
//!
//! # Tasks
//! - Cache sweep: removes expired responses at configured intervals
//! - Cache write: stores a freshly built response without delaying the caller

mod cache_write;
mod cleanup;

pub use cache_write::spawn_cache_write;
pub use cleanup::spawn_cleanup_task;
