//! API Module
//!
//! HTTP handlers and routing for the voting summary proxy.
//!
//! # Endpoints
//! - `GET /api/voting-summary?_proposal_id=<id>` - Cached voting summary
//! - `GET /stats` - Cache statistics
//! - `GET /health` - Health check endpoint

pub mod handlers;
pub mod routes;

pub use handlers::*;
pub use routes::create_router;
