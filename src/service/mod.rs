//! # Application logic
//!
//! One service per entity, each generic over the persistence gateway.
//! Services validate foreign-key references on write, compute GPA, assemble
//! the client-facing views, and enforce not-found semantics. No entity state
//! is cached across calls; every operation is a single, stateless read or
//! write against the store.

pub mod course;
pub mod errors;
pub mod grade;
pub mod student;
pub mod view;

pub use course::CourseService;
pub use errors::{ServiceError, ServiceResult};
pub use grade::GradeService;
pub use student::StudentService;
pub use view::{CourseView, StudentView};
