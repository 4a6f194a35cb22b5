//! # Recipe HTTP Server Module
//!
//! Combines all endpoint routers into a single Axum server.
//!
//! # Endpoints
//!
//! - `/health` - Health check
//! - `/recipes`, `/recipes/:id` - Recipe CRUD

pub mod config;
pub mod observability_routes;
pub mod server;

pub use config::ServerConfig;
pub use server::HttpServer;
