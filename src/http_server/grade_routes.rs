//! Grade HTTP routes.

use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use serde::Deserialize;

use crate::model::Grade;
use crate::store::RecordStore;

use super::errors::ApiError;
use super::state::AppState;

#[derive(Debug, Deserialize)]
pub struct CreateGradeRequest {
    pub letter: String,
    pub score: f64,
}

/// Create grade routes
pub fn grade_routes<S: RecordStore + 'static>(state: Arc<AppState<S>>) -> Router {
    Router::new()
        .route("/grades", post(add_grade_handler))
        .route("/grades", get(list_grades_handler))
        .with_state(state)
}

async fn add_grade_handler<S: RecordStore + 'static>(
    State(state): State<Arc<AppState<S>>>,
    Json(request): Json<CreateGradeRequest>,
) -> Result<(StatusCode, Json<Grade>), ApiError> {
    let grade = state.grades.add_grade(request.letter, request.score)?;
    Ok((StatusCode::CREATED, Json(grade)))
}

async fn list_grades_handler<S: RecordStore + 'static>(
    State(state): State<Arc<AppState<S>>>,
) -> Result<Json<Vec<Grade>>, ApiError> {
    let grades = state.grades.list()?;
    Ok(Json(grades))
}
