//! Student endpoints
//!
//! Full CRUD on `/students`. Bodies are decoded before storage is touched,
//! so a malformed request never reaches the database.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Router,
};

use crate::http::error::ApiError;
use crate::http::extractors::JsonBody;
use crate::http::response::JsonUtf8;
use crate::http::server::AppState;
use crate::models::{Student, StudentPayload};

/// GET /students - list every student
async fn list_students(
    State(state): State<Arc<AppState>>,
) -> Result<JsonUtf8<Vec<Student>>, ApiError> {
    let students = state.students.list().await?;
    Ok(JsonUtf8(students))
}

/// POST /students - create a student, id assigned by storage
async fn create_student(
    State(state): State<Arc<AppState>>,
    JsonBody(payload): JsonBody<StudentPayload>,
) -> Result<(StatusCode, JsonUtf8<Student>), ApiError> {
    let student = state.students.create(payload).await?;
    tracing::info!(id = %student.id, "student created");

    Ok((StatusCode::CREATED, JsonUtf8(student)))
}

/// GET /students/{id}
async fn get_student(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<JsonUtf8<Student>, ApiError> {
    let student = state.students.get(&id).await?;
    Ok(JsonUtf8(student))
}

/// PUT /students/{id} - replace all fields but the id
async fn update_student(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    JsonBody(payload): JsonBody<StudentPayload>,
) -> Result<JsonUtf8<Student>, ApiError> {
    let student = state.students.update(&id, payload).await?;
    Ok(JsonUtf8(student))
}

/// DELETE /students/{id}
async fn delete_student(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    state.students.delete(&id).await?;
    tracing::info!(%id, "student deleted");

    Ok(StatusCode::NO_CONTENT)
}

/// Student routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/students", get(list_students).post(create_student))
        .route(
            "/students/{id}",
            get(get_student).put(update_student).delete(delete_student),
        )
}
