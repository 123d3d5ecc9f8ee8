//! API Module
//!
//! HTTP handlers and routing for the portfolio REST API.
//!
//! # Endpoints
//! - `GET /api/projects` - Cached GitHub project summaries
//! - `GET /api/posts` - Blog posts
//! - `GET /cache/stats` - Cache statistics
//! - `DELETE /cache` - Clear the response cache
//! - `GET /health` - Health check endpoint

pub mod handlers;
pub mod routes;

pub use handlers::*;
pub use routes::create_router;
