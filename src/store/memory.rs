//! In-memory record store.
//!
//! Backs the persistence gateway with three collections behind a single
//! `RwLock`. Identifiers are sequential per collection, starting at 1, the
//! way an identity column would assign them. All cross-request coordination
//! is this lock; callers receive cloned values and never share rows.

use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::model::{Course, Grade, GradeId, Student, StudentId};

use super::errors::{StoreError, StoreResult};
use super::RecordStore;

#[derive(Debug, Default)]
struct Collections {
    students: Vec<Student>,
    grades: Vec<Grade>,
    courses: Vec<Course>,
    last_student_id: u64,
    last_grade_id: u64,
    last_course_id: u64,
}

/// In-memory implementation of [`RecordStore`].
pub struct MemoryStore {
    collections: RwLock<Collections>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self {
            collections: RwLock::new(Collections::default()),
        }
    }

    fn read(&self) -> StoreResult<RwLockReadGuard<'_, Collections>> {
        self.collections.read().map_err(|_| StoreError::LockPoisoned)
    }

    fn write(&self) -> StoreResult<RwLockWriteGuard<'_, Collections>> {
        self.collections.write().map_err(|_| StoreError::LockPoisoned)
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl RecordStore for MemoryStore {
    fn insert_student(&self, name: String, email: String) -> StoreResult<Student> {
        let mut data = self.write()?;
        data.last_student_id += 1;
        let student = Student {
            id: data.last_student_id,
            name,
            email,
        };
        data.students.push(student.clone());
        Ok(student)
    }

    fn students(&self) -> StoreResult<Vec<Student>> {
        Ok(self.read()?.students.clone())
    }

    fn student(&self, id: StudentId) -> StoreResult<Option<Student>> {
        Ok(self.read()?.students.iter().find(|s| s.id == id).cloned())
    }

    fn insert_grade(&self, letter: String, score: f64) -> StoreResult<Grade> {
        let mut data = self.write()?;
        data.last_grade_id += 1;
        let grade = Grade {
            id: data.last_grade_id,
            letter,
            score,
        };
        data.grades.push(grade.clone());
        Ok(grade)
    }

    fn grades(&self) -> StoreResult<Vec<Grade>> {
        Ok(self.read()?.grades.clone())
    }

    fn grade(&self, id: GradeId) -> StoreResult<Option<Grade>> {
        Ok(self.read()?.grades.iter().find(|g| g.id == id).cloned())
    }

    fn insert_course(
        &self,
        name: String,
        student_id: StudentId,
        grade_id: Option<GradeId>,
    ) -> StoreResult<Course> {
        let mut data = self.write()?;
        data.last_course_id += 1;
        let course = Course {
            id: data.last_course_id,
            name,
            student_id,
            grade_id,
        };
        data.courses.push(course.clone());
        Ok(course)
    }

    fn courses(&self) -> StoreResult<Vec<Course>> {
        Ok(self.read()?.courses.clone())
    }

    fn courses_by_student(&self, student_id: StudentId) -> StoreResult<Vec<Course>> {
        Ok(self
            .read()?
            .courses
            .iter()
            .filter(|c| c.student_id == student_id)
            .cloned()
            .collect())
    }

    fn course_by_student_and_name(
        &self,
        student_id: StudentId,
        name: &str,
    ) -> StoreResult<Option<Course>> {
        Ok(self
            .read()?
            .courses
            .iter()
            .find(|c| c.student_id == student_id && c.name == name)
            .cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_student_ids_are_sequential_from_one() {
        let store = MemoryStore::new();
        let a = store
            .insert_student("Ada".to_string(), "ada@example.com".to_string())
            .unwrap();
        let b = store
            .insert_student("Ben".to_string(), "ben@example.com".to_string())
            .unwrap();
        assert_eq!(a.id, 1);
        assert_eq!(b.id, 2);
    }

    #[test]
    fn test_id_sequences_are_independent_per_collection() {
        let store = MemoryStore::new();
        let student = store
            .insert_student("Ada".to_string(), "ada@example.com".to_string())
            .unwrap();
        let grade = store.insert_grade("A".to_string(), 4.0).unwrap();
        let course = store
            .insert_course("CS101".to_string(), student.id, Some(grade.id))
            .unwrap();
        assert_eq!(grade.id, 1);
        assert_eq!(course.id, 1);
    }

    #[test]
    fn test_lookup_by_id() {
        let store = MemoryStore::new();
        let student = store
            .insert_student("Ada".to_string(), "ada@example.com".to_string())
            .unwrap();
        let found = store.student(student.id).unwrap();
        assert_eq!(found, Some(student));
        assert_eq!(store.student(99).unwrap(), None);
    }

    #[test]
    fn test_courses_by_student_filters_owner() {
        let store = MemoryStore::new();
        store
            .insert_course("CS101".to_string(), 1, None)
            .unwrap();
        store
            .insert_course("MA201".to_string(), 1, None)
            .unwrap();
        store
            .insert_course("CS101".to_string(), 2, None)
            .unwrap();

        let courses = store.courses_by_student(1).unwrap();
        assert_eq!(courses.len(), 2);
        assert!(courses.iter().all(|c| c.student_id == 1));
        assert!(store.courses_by_student(3).unwrap().is_empty());
    }

    #[test]
    fn test_course_by_student_and_name_requires_both() {
        let store = MemoryStore::new();
        store
            .insert_course("CS101".to_string(), 1, None)
            .unwrap();

        assert!(store
            .course_by_student_and_name(1, "CS101")
            .unwrap()
            .is_some());
        assert!(store
            .course_by_student_and_name(2, "CS101")
            .unwrap()
            .is_none());
        assert!(store
            .course_by_student_and_name(1, "MA201")
            .unwrap()
            .is_none());
    }

    #[test]
    fn test_listing_preserves_insertion_order() {
        let store = MemoryStore::new();
        store.insert_grade("A".to_string(), 4.0).unwrap();
        store.insert_grade("B".to_string(), 3.0).unwrap();
        store.insert_grade("C".to_string(), 2.0).unwrap();

        let letters: Vec<String> = store
            .grades()
            .unwrap()
            .into_iter()
            .map(|g| g.letter)
            .collect();
        assert_eq!(letters, vec!["A", "B", "C"]);
    }
}
