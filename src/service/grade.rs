//! Grade application logic.

use std::sync::Arc;

use crate::model::Grade;
use crate::store::RecordStore;

use super::errors::ServiceResult;

/// Grade operations: unconditional creation and listing.
pub struct GradeService<S: RecordStore> {
    store: Arc<S>,
}

impl<S: RecordStore> GradeService<S> {
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }

    /// Record a grade. Letter and score are taken as-is; the score is not
    /// bounds-checked against any scale.
    pub fn add_grade(&self, letter: String, score: f64) -> ServiceResult<Grade> {
        Ok(self.store.insert_grade(letter, score)?)
    }

    /// All stored grades.
    pub fn list(&self) -> ServiceResult<Vec<Grade>> {
        Ok(self.store.grades()?)
    }
}
