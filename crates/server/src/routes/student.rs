use super::{deleted, found, require};
use crate::{dtos::ErrorResponse, error::ApiError, state::AppState};
use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use database::{
    entities::{attendance, student, student_subject, subject},
    services::{
        student::{StudentInput, StudentService},
        subject::SubjectService,
    },
};
use utoipa_axum::{router::OpenApiRouter, routes};
use uuid::Uuid;

pub fn router() -> OpenApiRouter<AppState> {
    OpenApiRouter::new()
        .routes(routes!(list_students, create_student))
        .routes(routes!(get_student, update_student, delete_student))
        .routes(routes!(student_subjects))
        .routes(routes!(enroll_student, unenroll_student))
        .routes(routes!(student_attendance))
}

/// List all students
#[utoipa::path(
    get,
    path = "/students",
    responses(
        (status = 200, description = "All students, by roll number", body = Vec<student::Model>)
    ),
    security(("jwt" = [])),
    tag = "Students"
)]
pub async fn list_students(
    State(state): State<AppState>,
) -> Result<Json<Vec<student::Model>>, ApiError> {
    Ok(Json(StudentService::list(&state.db).await?))
}

/// Create a student
#[utoipa::path(
    post,
    path = "/students",
    request_body = StudentInput,
    responses(
        (status = 201, description = "Student created", body = student::Model),
        (status = 409, description = "Conflicts with an existing record", body = ErrorResponse)
    ),
    security(("jwt" = [])),
    tag = "Students"
)]
pub async fn create_student(
    State(state): State<AppState>,
    Json(input): Json<StudentInput>,
) -> Result<(StatusCode, Json<student::Model>), ApiError> {
    let created = StudentService::create(&state.db, input).await?;

    Ok((StatusCode::CREATED, Json(created)))
}

/// Get a specific student by ID
#[utoipa::path(
    get,
    path = "/students/{id}",
    params(("id" = Uuid, Path, description = "Student ID")),
    responses(
        (status = 200, description = "Student found", body = student::Model),
        (status = 404, description = "Student not found", body = ErrorResponse)
    ),
    security(("jwt" = [])),
    tag = "Students"
)]
pub async fn get_student(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<student::Model>, ApiError> {
    found(StudentService::get(&state.db, id).await?, "Student")
}

/// Replace a student
#[utoipa::path(
    put,
    path = "/students/{id}",
    params(("id" = Uuid, Path, description = "Student ID")),
    request_body = StudentInput,
    responses(
        (status = 200, description = "Student updated", body = student::Model),
        (status = 404, description = "Student not found", body = ErrorResponse),
        (status = 409, description = "Conflicts with an existing record", body = ErrorResponse)
    ),
    security(("jwt" = [])),
    tag = "Students"
)]
pub async fn update_student(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(input): Json<StudentInput>,
) -> Result<Json<student::Model>, ApiError> {
    found(StudentService::update(&state.db, id, input).await?, "Student")
}

/// Delete a student
#[utoipa::path(
    delete,
    path = "/students/{id}",
    params(("id" = Uuid, Path, description = "Student ID")),
    responses(
        (status = 204, description = "Student deleted"),
        (status = 404, description = "Student not found", body = ErrorResponse)
    ),
    security(("jwt" = [])),
    tag = "Students"
)]
pub async fn delete_student(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    deleted(StudentService::delete(&state.db, id).await?, "Student")
}

/// Subjects a student is enrolled in
#[utoipa::path(
    get,
    path = "/students/{id}/subjects",
    params(("id" = Uuid, Path, description = "Student ID")),
    responses(
        (status = 200, description = "Enrolled subjects, by name", body = Vec<subject::Model>),
        (status = 404, description = "Student not found", body = ErrorResponse)
    ),
    security(("jwt" = [])),
    tag = "Students"
)]
pub async fn student_subjects(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Vec<subject::Model>>, ApiError> {
    require(StudentService::get(&state.db, id).await?, "Student")?;

    Ok(Json(StudentService::subjects(&state.db, id).await?))
}

/// Enroll a student in a subject
#[utoipa::path(
    put,
    path = "/students/{id}/subjects/{subject_id}",
    params(
        ("id" = Uuid, Path, description = "Student ID"),
        ("subject_id" = Uuid, Path, description = "Subject ID")
    ),
    responses(
        (status = 201, description = "Student enrolled", body = student_subject::Model),
        (status = 404, description = "Student or subject not found", body = ErrorResponse),
        (status = 409, description = "Student is already enrolled", body = ErrorResponse)
    ),
    security(("jwt" = [])),
    tag = "Students"
)]
pub async fn enroll_student(
    State(state): State<AppState>,
    Path((id, subject_id)): Path<(Uuid, Uuid)>,
) -> Result<(StatusCode, Json<student_subject::Model>), ApiError> {
    require(StudentService::get(&state.db, id).await?, "Student")?;
    require(SubjectService::get(&state.db, subject_id).await?, "Subject")?;

    let link = StudentService::enroll(&state.db, id, subject_id).await?;

    Ok((StatusCode::CREATED, Json(link)))
}

/// Remove a student from a subject
#[utoipa::path(
    delete,
    path = "/students/{id}/subjects/{subject_id}",
    params(
        ("id" = Uuid, Path, description = "Student ID"),
        ("subject_id" = Uuid, Path, description = "Subject ID")
    ),
    responses(
        (status = 204, description = "Student unenrolled"),
        (status = 404, description = "Student is not enrolled in the subject", body = ErrorResponse)
    ),
    security(("jwt" = [])),
    tag = "Students"
)]
pub async fn unenroll_student(
    State(state): State<AppState>,
    Path((id, subject_id)): Path<(Uuid, Uuid)>,
) -> Result<StatusCode, ApiError> {
    deleted(
        StudentService::unenroll(&state.db, id, subject_id).await?,
        "Enrollment",
    )
}

/// Attendance history of a student
#[utoipa::path(
    get,
    path = "/students/{id}/attendance",
    params(("id" = Uuid, Path, description = "Student ID")),
    responses(
        (status = 200, description = "Attendance marks, oldest first", body = Vec<attendance::Model>),
        (status = 404, description = "Student not found", body = ErrorResponse)
    ),
    security(("jwt" = [])),
    tag = "Students"
)]
pub async fn student_attendance(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Vec<attendance::Model>>, ApiError> {
    require(StudentService::get(&state.db, id).await?, "Student")?;

    Ok(Json(StudentService::attendance(&state.db, id).await?))
}
