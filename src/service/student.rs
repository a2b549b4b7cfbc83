//! Student application logic.

use std::sync::Arc;

use crate::model::{Course, Grade, Student, StudentId};
use crate::store::RecordStore;

use super::errors::{ServiceError, ServiceResult};
use super::view::{self, CourseView, StudentView};

/// Student operations: registration, GPA queries, and grade views.
pub struct StudentService<S: RecordStore> {
    store: Arc<S>,
}

impl<S: RecordStore> StudentService<S> {
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }

    /// Register a student. No validation of name or email format.
    pub fn add_student(&self, name: String, email: String) -> ServiceResult<Student> {
        Ok(self.store.insert_student(name, email)?)
    }

    /// Every student, each with computed GPA and the full list of course
    /// views. Ungraded courses are included with a null letter and 0.0 score.
    pub fn list_with_gpa(&self) -> ServiceResult<Vec<StudentView>> {
        let mut views = Vec::new();
        for student in self.store.students()? {
            let resolved = self.resolved_courses(student.id)?;
            let courses = resolved
                .iter()
                .map(|(course, grade)| CourseView::new(course, grade.as_ref()))
                .collect();
            views.push(StudentView::new(&student, view::gpa(&resolved), courses));
        }
        Ok(views)
    }

    /// GPA for one student. Returns the 0.0 sentinel when the student does
    /// not exist; callers that need absence as an error must check first.
    pub fn gpa(&self, id: StudentId) -> ServiceResult<f64> {
        match self.store.student(id)? {
            Some(_) => Ok(view::gpa(&self.resolved_courses(id)?)),
            None => Ok(0.0),
        }
    }

    /// View of one student restricted to graded courses. A student with no
    /// courses gets an empty course list; an unknown student is an error.
    pub fn grades_for_student(&self, id: StudentId) -> ServiceResult<StudentView> {
        let student = self
            .store
            .student(id)?
            .ok_or(ServiceError::StudentNotFound(id))?;
        let resolved = self.resolved_courses(id)?;
        let courses = resolved
            .iter()
            .filter(|(_, grade)| grade.is_some())
            .map(|(course, grade)| CourseView::new(course, grade.as_ref()))
            .collect();
        Ok(StudentView::new(&student, view::gpa(&resolved), courses))
    }

    /// Score of the single course matching both student and name. Errors when
    /// no such course exists, or when it exists but has no grade.
    pub fn grade_for_course(
        &self,
        student_id: StudentId,
        course_name: &str,
    ) -> ServiceResult<f64> {
        let course = self
            .store
            .course_by_student_and_name(student_id, course_name)?
            .ok_or_else(|| ServiceError::CourseNotFound {
                student_id,
                name: course_name.to_string(),
            })?;
        let grade = match course.grade_id {
            Some(grade_id) => self.store.grade(grade_id)?,
            None => None,
        };
        grade
            .map(|g| g.score)
            .ok_or_else(|| ServiceError::CourseNotGraded {
                student_id,
                name: course_name.to_string(),
            })
    }

    /// A student's courses paired with their resolved grades.
    fn resolved_courses(
        &self,
        student_id: StudentId,
    ) -> ServiceResult<Vec<(Course, Option<Grade>)>> {
        let mut resolved = Vec::new();
        for course in self.store.courses_by_student(student_id)? {
            let grade = match course.grade_id {
                Some(grade_id) => self.store.grade(grade_id)?,
                None => None,
            };
            resolved.push((course, grade));
        }
        Ok(resolved)
    }
}
