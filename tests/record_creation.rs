//! Record creation and lookup contracts: reference validation, round-trips,
//! and not-found semantics.

use std::sync::Arc;

use gradebook::service::{
    CourseService, GradeService, ServiceError, StudentService,
};
use gradebook::store::{MemoryStore, RecordStore};

fn store() -> Arc<MemoryStore> {
    Arc::new(MemoryStore::new())
}

#[test]
fn course_with_dangling_student_reference_persists_nothing() {
    let store = store();
    let courses = CourseService::new(store.clone());
    let grades = GradeService::new(store.clone());
    let grade = grades.add_grade("A".to_string(), 4.0).unwrap();

    let result = courses.add_course("CS101".to_string(), 7, grade.id);
    assert!(matches!(result, Err(ServiceError::StudentRefMissing(7))));
    assert!(store.courses().unwrap().is_empty());
}

#[test]
fn course_with_dangling_grade_reference_persists_nothing() {
    let store = store();
    let students = StudentService::new(store.clone());
    let courses = CourseService::new(store.clone());
    let student = students
        .add_student("Ada".to_string(), "ada@example.com".to_string())
        .unwrap();

    let result = courses.add_course("CS101".to_string(), student.id, 7);
    assert!(matches!(result, Err(ServiceError::GradeRefMissing(7))));
    assert!(store.courses().unwrap().is_empty());
}

#[test]
fn listing_after_n_adds_returns_exactly_n_matching_items() {
    let store = store();
    let students = StudentService::new(store.clone());
    let grades = GradeService::new(store.clone());

    let names = ["Ada", "Ben", "Cy"];
    for name in names {
        students
            .add_student(name.to_string(), format!("{}@example.com", name.to_lowercase()))
            .unwrap();
    }
    grades.add_grade("A".to_string(), 4.0).unwrap();
    grades.add_grade("B".to_string(), 3.0).unwrap();

    let listed = students.list_with_gpa().unwrap();
    assert_eq!(listed.len(), 3);
    for (view, name) in listed.iter().zip(names) {
        assert_eq!(view.name, name);
        assert_eq!(view.email, format!("{}@example.com", name.to_lowercase()));
    }

    let listed_grades = grades.list().unwrap();
    assert_eq!(listed_grades.len(), 2);
    assert_eq!(listed_grades[0].letter, "A");
    assert_eq!(listed_grades[1].score, 3.0);
}

#[test]
fn grades_view_for_unknown_student_is_not_found() {
    let students = StudentService::new(store());
    assert!(matches!(
        students.grades_for_student(1),
        Err(ServiceError::StudentNotFound(1))
    ));
}

#[test]
fn grades_view_for_student_without_courses_is_empty() {
    let students = StudentService::new(store());
    let student = students
        .add_student("Ada".to_string(), "ada@example.com".to_string())
        .unwrap();

    let view = students.grades_for_student(student.id).unwrap();
    assert_eq!(view.id, student.id);
    assert!(view.courses.is_empty());
}

#[test]
fn grade_lookup_for_missing_course_or_missing_grade_errors() {
    let store = store();
    let students = StudentService::new(store.clone());
    let student = students
        .add_student("Ada".to_string(), "ada@example.com".to_string())
        .unwrap();

    // No such course at all
    assert!(matches!(
        students.grade_for_course(student.id, "CS101"),
        Err(ServiceError::CourseNotFound { .. })
    ));

    // Course exists but carries no grade
    store
        .insert_course("CS101".to_string(), student.id, None)
        .unwrap();
    assert!(matches!(
        students.grade_for_course(student.id, "CS101"),
        Err(ServiceError::CourseNotGraded { .. })
    ));
}

#[test]
fn course_listing_shows_ungraded_courses_with_null_letter() {
    let store = store();
    let students = StudentService::new(store.clone());
    let courses = CourseService::new(store.clone());
    let student = students
        .add_student("Ada".to_string(), "ada@example.com".to_string())
        .unwrap();
    store
        .insert_course("CS101".to_string(), student.id, None)
        .unwrap();

    let views = courses.list().unwrap();
    assert_eq!(views.len(), 1);
    assert_eq!(views[0].grade_letter, None);
    assert_eq!(views[0].grade_score, 0.0);
}
