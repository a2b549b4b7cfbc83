//! Application logic error types.

use thiserror::Error;

use crate::model::{GradeId, StudentId};
use crate::store::StoreError;

/// Result type for service operations
pub type ServiceResult<T> = Result<T, ServiceError>;

/// Errors surfaced by the application logic.
///
/// The two `*RefMissing` variants are write-side validation failures (the
/// request named a row that does not exist); the `*NotFound` variants are
/// read-side lookup failures. The HTTP layer maps them to distinct statuses.
#[derive(Debug, Clone, Error)]
pub enum ServiceError {
    /// Lookup target student does not exist
    #[error("student {0} not found")]
    StudentNotFound(StudentId),

    /// No course matches the student and course name
    #[error("no course named '{name}' for student {student_id}")]
    CourseNotFound { student_id: StudentId, name: String },

    /// The course exists but has no grade recorded
    #[error("no grade recorded for course '{name}' of student {student_id}")]
    CourseNotGraded { student_id: StudentId, name: String },

    /// Course creation referenced a student that does not exist
    #[error("referenced student {0} does not exist")]
    StudentRefMissing(StudentId),

    /// Course creation referenced a grade that does not exist
    #[error("referenced grade {0} does not exist")]
    GradeRefMissing(GradeId),

    /// Persistence gateway failure
    #[error(transparent)]
    Store(#[from] StoreError),
}
