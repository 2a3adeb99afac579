//! motorpool - a small vehicle record-management REST service
//!
//! CRUD over automobile records: create, list/filter, fetch by VIN,
//! partial update, delete.

pub mod auto;
pub mod cli;
pub mod http_server;
pub mod service;
pub mod store;
