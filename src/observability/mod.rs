//! Observability for the gradebook server.
//!
//! Structured JSON logging: one line per event, synchronous, deterministic
//! field ordering. Read-only with respect to request handling.

mod logger;

pub use logger::{Logger, Severity};
