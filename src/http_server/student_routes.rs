//! Student HTTP routes.
//!
//! Endpoints for registering students and querying GPA and grade views.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use serde::Deserialize;

use crate::model::{Student, StudentId};
use crate::service::StudentView;
use crate::store::RecordStore;

use super::errors::ApiError;
use super::state::AppState;

#[derive(Debug, Deserialize)]
pub struct CreateStudentRequest {
    pub name: String,
    pub email: String,
}

/// Create student routes
pub fn student_routes<S: RecordStore + 'static>(state: Arc<AppState<S>>) -> Router {
    Router::new()
        .route("/students", post(add_student_handler))
        .route("/students", get(list_students_handler))
        .route("/students/{id}/gpa", get(student_gpa_handler))
        .route("/students/{student_id}/grades", get(student_grades_handler))
        .route(
            "/students/{student_id}/courses/{course_name}/grade",
            get(course_grade_handler),
        )
        .with_state(state)
}

async fn add_student_handler<S: RecordStore + 'static>(
    State(state): State<Arc<AppState<S>>>,
    Json(request): Json<CreateStudentRequest>,
) -> Result<(StatusCode, Json<Student>), ApiError> {
    let student = state.students.add_student(request.name, request.email)?;
    Ok((StatusCode::CREATED, Json(student)))
}

async fn list_students_handler<S: RecordStore + 'static>(
    State(state): State<Arc<AppState<S>>>,
) -> Result<Json<Vec<StudentView>>, ApiError> {
    let views = state.students.list_with_gpa()?;
    Ok(Json(views))
}

async fn student_gpa_handler<S: RecordStore + 'static>(
    State(state): State<Arc<AppState<S>>>,
    Path(id): Path<StudentId>,
) -> Result<Json<f64>, ApiError> {
    let gpa = state.students.gpa(id)?;
    Ok(Json(gpa))
}

async fn student_grades_handler<S: RecordStore + 'static>(
    State(state): State<Arc<AppState<S>>>,
    Path(student_id): Path<StudentId>,
) -> Result<Json<StudentView>, ApiError> {
    let view = state.students.grades_for_student(student_id)?;
    Ok(Json(view))
}

async fn course_grade_handler<S: RecordStore + 'static>(
    State(state): State<Arc<AppState<S>>>,
    Path((student_id, course_name)): Path<(StudentId, String)>,
) -> Result<Json<f64>, ApiError> {
    let score = state.students.grade_for_course(student_id, &course_name)?;
    Ok(Json(score))
}
