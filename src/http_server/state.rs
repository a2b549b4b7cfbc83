//! Shared handler state.

use std::sync::Arc;

use crate::service::{CourseService, GradeService, StudentService};
use crate::store::RecordStore;

/// Application state shared across all route handlers: one service per
/// entity, all backed by the same store.
pub struct AppState<S: RecordStore> {
    pub students: StudentService<S>,
    pub courses: CourseService<S>,
    pub grades: GradeService<S>,
}

impl<S: RecordStore> AppState<S> {
    pub fn new(store: Arc<S>) -> Self {
        Self {
            students: StudentService::new(store.clone()),
            courses: CourseService::new(store.clone()),
            grades: GradeService::new(store),
        }
    }
}
