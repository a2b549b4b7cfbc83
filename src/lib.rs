//! gradebook - a small student records backend
//!
//! Students, grades, and courses behind an HTTP/JSON API, with per-student
//! GPA derived on read.

pub mod cli;
pub mod http_server;
pub mod model;
pub mod observability;
pub mod service;
pub mod store;
