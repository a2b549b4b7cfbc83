//! Domain entities: students, grades, and the courses linking them.
//!
//! All three are created via explicit add operations and never updated or
//! deleted afterwards. Identifiers are assigned by the store.

use serde::{Deserialize, Serialize};

pub type StudentId = u64;
pub type CourseId = u64;
pub type GradeId = u64;

/// A registered student.
///
/// Courses reference the student; the student row itself carries no course
/// ids. GPA is derived on read, never stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Student {
    pub id: StudentId,
    pub name: String,
    pub email: String,
}

/// A grade record. Created independently of any course; multiple courses may
/// reference the same grade.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Grade {
    pub id: GradeId,
    pub letter: String,
    pub score: f64,
}

/// A course owned by exactly one student.
///
/// The grade reference is optional at the model level: an ungraded course is
/// a valid row but is excluded from grade-bearing views.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Course {
    pub id: CourseId,
    pub name: String,
    pub student_id: StudentId,
    pub grade_id: Option<GradeId>,
}
