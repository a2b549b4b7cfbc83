//! # Persistence gateway
//!
//! `RecordStore` is the query contract the application logic needs from
//! storage: per-entity inserts, full scans, id lookups, and two narrow course
//! lookups (by student, and by student plus course name). `MemoryStore` is
//! the in-process implementation; a durable engine would slot in behind the
//! same trait.

pub mod errors;
pub mod memory;

pub use errors::{StoreError, StoreResult};
pub use memory::MemoryStore;

use crate::model::{Course, Grade, GradeId, Student, StudentId};

/// Storage contract for the three record collections.
pub trait RecordStore: Send + Sync {
    /// Insert a student, assigning its identifier.
    fn insert_student(&self, name: String, email: String) -> StoreResult<Student>;

    /// All students, in insertion order.
    fn students(&self) -> StoreResult<Vec<Student>>;

    /// Look up a student by id.
    fn student(&self, id: StudentId) -> StoreResult<Option<Student>>;

    /// Insert a grade, assigning its identifier.
    fn insert_grade(&self, letter: String, score: f64) -> StoreResult<Grade>;

    /// All grades, in insertion order.
    fn grades(&self) -> StoreResult<Vec<Grade>>;

    /// Look up a grade by id.
    fn grade(&self, id: GradeId) -> StoreResult<Option<Grade>>;

    /// Insert a course, assigning its identifier. Reference validation is the
    /// caller's concern.
    fn insert_course(
        &self,
        name: String,
        student_id: StudentId,
        grade_id: Option<GradeId>,
    ) -> StoreResult<Course>;

    /// All courses, in insertion order.
    fn courses(&self) -> StoreResult<Vec<Course>>;

    /// Courses owned by the given student.
    fn courses_by_student(&self, student_id: StudentId) -> StoreResult<Vec<Course>>;

    /// The single course matching both student and course name, if any.
    fn course_by_student_and_name(
        &self,
        student_id: StudentId,
        name: &str,
    ) -> StoreResult<Option<Course>>;
}
