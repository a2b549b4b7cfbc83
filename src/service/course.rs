//! Course application logic.

use std::sync::Arc;

use crate::model::{GradeId, StudentId};
use crate::store::RecordStore;

use super::errors::{ServiceError, ServiceResult};
use super::view::CourseView;

/// Course operations: creation with reference validation, and listing.
pub struct CourseService<S: RecordStore> {
    store: Arc<S>,
}

impl<S: RecordStore> CourseService<S> {
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }

    /// Create a course linking an existing student and grade. Both references
    /// are resolved before anything is written; a dangling id fails the whole
    /// call and persists nothing.
    pub fn add_course(
        &self,
        name: String,
        student_id: StudentId,
        grade_id: GradeId,
    ) -> ServiceResult<CourseView> {
        self.store
            .student(student_id)?
            .ok_or(ServiceError::StudentRefMissing(student_id))?;
        let grade = self
            .store
            .grade(grade_id)?
            .ok_or(ServiceError::GradeRefMissing(grade_id))?;

        let course = self
            .store
            .insert_course(name, student_id, Some(grade_id))?;
        Ok(CourseView::new(&course, Some(&grade)))
    }

    /// Every course as a flattened view.
    pub fn list(&self) -> ServiceResult<Vec<CourseView>> {
        let mut views = Vec::new();
        for course in self.store.courses()? {
            let grade = match course.grade_id {
                Some(grade_id) => self.store.grade(grade_id)?,
                None => None,
            };
            views.push(CourseView::new(&course, grade.as_ref()));
        }
        Ok(views)
    }
}
