//! # HTTP Server Module
//!
//! Axum-based API surface for the record service.
//!
//! # Endpoints
//!
//! - `GET /health` - Health check
//! - `GET /api/autos` - List records, optional `color`/`make` filters
//! - `POST /api/autos` - Create a record
//! - `GET /api/autos/:vin` - Fetch by VIN
//! - `PATCH /api/autos/:vin` - Update color/owner
//! - `DELETE /api/autos/:vin` - Delete by VIN

pub mod autos_routes;
pub mod config;
pub mod errors;
pub mod server;

pub use config::HttpServerConfig;
pub use errors::{ApiError, ApiResult};
pub use server::HttpServer;
