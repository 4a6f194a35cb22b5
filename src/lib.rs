//! recipe-api - A small recipe record-management HTTP service
//!
//! Create, list, fetch, partially update and delete recipes kept in a
//! single in-memory SQLite table.

pub mod cli;
pub mod http_server;
pub mod rest_api;
pub mod store;
