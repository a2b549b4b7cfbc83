//! # HTTP server module
//!
//! Axum-based HTTP/JSON surface for the gradebook.
//!
//! # Endpoints
//!
//! - `/health` - Health check
//! - `/api/students/*` - Student registration, GPA, and grade views
//! - `/api/courses` - Course creation and listing
//! - `/api/grades` - Grade creation and listing

pub mod config;
pub mod course_routes;
pub mod errors;
pub mod grade_routes;
pub mod server;
pub mod state;
pub mod student_routes;

pub use config::HttpServerConfig;
pub use errors::{ApiError, ApiResult, ErrorResponse};
pub use server::HttpServer;
pub use state::AppState;
