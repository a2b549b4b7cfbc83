//! View assembly: pure projections of stored entities into client-facing
//! shapes, plus the GPA rule.

use serde::Serialize;

use crate::model::{Course, Grade, Student, StudentId};

/// GPA assigned to a student with no graded coursework.
///
/// Policy default, not a computed average: an empty record is treated as a
/// perfect one.
pub const DEFAULT_GPA: f64 = 4.0;

/// Flattened, client-facing projection of a course and its grade.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CourseView {
    pub name: String,
    pub grade_letter: Option<String>,
    pub grade_score: f64,
}

impl CourseView {
    /// Build the view for a course and its resolved grade. An absent grade
    /// becomes a null letter and a 0.0 score, never an error.
    pub fn new(course: &Course, grade: Option<&Grade>) -> Self {
        match grade {
            Some(g) => Self {
                name: course.name.clone(),
                grade_letter: Some(g.letter.clone()),
                grade_score: g.score,
            },
            None => Self {
                name: course.name.clone(),
                grade_letter: None,
                grade_score: 0.0,
            },
        }
    }
}

/// Client-facing projection of a student with derived GPA and course views.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StudentView {
    pub id: StudentId,
    pub name: String,
    pub email: String,
    pub gpa: f64,
    pub courses: Vec<CourseView>,
}

impl StudentView {
    pub fn new(student: &Student, gpa: f64, courses: Vec<CourseView>) -> Self {
        Self {
            id: student.id,
            name: student.name.clone(),
            email: student.email.clone(),
            gpa,
            courses,
        }
    }
}

/// Arithmetic mean over the scores of graded courses.
///
/// Ungraded courses are skipped rather than counted; a student with no
/// graded courses at all (including one with zero courses) gets
/// [`DEFAULT_GPA`].
pub fn gpa(courses: &[(Course, Option<Grade>)]) -> f64 {
    let scores: Vec<f64> = courses
        .iter()
        .filter_map(|(_, grade)| grade.as_ref().map(|g| g.score))
        .collect();
    if scores.is_empty() {
        return DEFAULT_GPA;
    }
    scores.iter().sum::<f64>() / scores.len() as f64
}
