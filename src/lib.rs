//! Portfolio API - Backend for a personal portfolio site
//!
//! Serves GitHub project summaries and blog posts, with a TTL response
//! cache deduplicating outbound GitHub API calls.

pub mod api;
pub mod cache;
pub mod config;
pub mod error;
pub mod github;
pub mod models;
pub mod posts;
pub mod tasks;

pub use api::AppState;
pub use config::Config;
pub use tasks::spawn_cleanup_task;
