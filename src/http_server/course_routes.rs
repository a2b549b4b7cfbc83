//! Course HTTP routes.

use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use serde::Deserialize;

use crate::model::{GradeId, StudentId};
use crate::service::CourseView;
use crate::store::RecordStore;

use super::errors::ApiError;
use super::state::AppState;

/// Course creation payload. References are plain id fields, not nested
/// objects.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateCourseRequest {
    pub name: String,
    pub student_id: StudentId,
    pub grade_id: GradeId,
}

/// Create course routes
pub fn course_routes<S: RecordStore + 'static>(state: Arc<AppState<S>>) -> Router {
    Router::new()
        .route("/courses", post(add_course_handler))
        .route("/courses", get(list_courses_handler))
        .with_state(state)
}

async fn add_course_handler<S: RecordStore + 'static>(
    State(state): State<Arc<AppState<S>>>,
    Json(request): Json<CreateCourseRequest>,
) -> Result<(StatusCode, Json<CourseView>), ApiError> {
    let view = state
        .courses
        .add_course(request.name, request.student_id, request.grade_id)?;
    Ok((StatusCode::CREATED, Json(view)))
}

async fn list_courses_handler<S: RecordStore + 'static>(
    State(state): State<Arc<AppState<S>>>,
) -> Result<Json<Vec<CourseView>>, ApiError> {
    let views = state.courses.list()?;
    Ok(Json(views))
}
