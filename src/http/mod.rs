//! # HTTP Server Module
//!
//! Maps the four store operations onto an Axum router:
//!
//! - `GET /drop` - list active drops (HTML page, or JSON per `Accept`)
//! - `GET /drop/{id}` - raw stored payload, 404 when absent or deleted
//! - `POST /drop` - store a JSON body, returns `{id}`
//! - `DELETE /drop/{id}` - soft delete, returns `{deleted}`
//!
//! Every response carries the fixed CORS headers, preflight `OPTIONS`
//! requests short-circuit with an empty 200, and trailing slashes are
//! stripped before routing.

pub mod config;
pub mod cors;
pub mod errors;
pub mod render;
pub mod routes;
pub mod server;

pub use config::HttpServerConfig;
pub use errors::{ApiError, ApiResult};
pub use server::HttpServer;
