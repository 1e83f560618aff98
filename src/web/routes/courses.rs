use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
};
use uuid::Uuid;

use crate::web::{
    AppState, ErrorResponse, Valid, WebResult,
    dto::{
        MessageResponse,
        courses::{CourseDto, CourseResponse},
    },
};

pub fn routes<S>(state: AppState) -> Router<S> {
    Router::new()
        .route(
            "/courses",
            post(courses_create_handler).get(courses_list_handler),
        )
        .route(
            "/courses/{course_id}",
            get(courses_get_handler)
                .put(courses_update_handler)
                .delete(courses_delete_handler),
        )
        .with_state(state)
}

#[utoipa::path(
    post,
    path = "/courses",
    request_body = CourseDto,
    description = "Creates a new course",
    responses(
        (status = 201, description = "Course created", body = CourseResponse),
        (status = 400, description = "Validation failed", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    ),
    tag = "courses"
)]
pub async fn courses_create_handler(
    State(state): State<AppState>,
    Valid(input): Valid<CourseDto>,
) -> WebResult<impl IntoResponse> {
    let course = state.courses().create(input).await?;
    Ok((StatusCode::CREATED, Json(CourseResponse::from(course))))
}

#[utoipa::path(
    get,
    path = "/courses",
    description = "Lists ALL courses",
    responses(
        (status = 200, description = "Courses collected", body = Vec<CourseResponse>),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    ),
    tag = "courses"
)]
pub async fn courses_list_handler(State(state): State<AppState>) -> WebResult<impl IntoResponse> {
    let courses = state
        .courses()
        .find_all()
        .await?
        .into_iter()
        .map(CourseResponse::from)
        .collect::<Vec<_>>();

    Ok((StatusCode::OK, Json(courses)))
}

#[utoipa::path(
    get,
    path = "/courses/{course_id}",
    params(
        ("course_id" = Uuid, Path, description = "ID of the course to get")
    ),
    responses(
        (status = 200, description = "Course found", body = CourseResponse),
        (status = 404, description = "Course not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    ),
    tag = "courses"
)]
pub async fn courses_get_handler(
    State(state): State<AppState>,
    Path(course_id): Path<Uuid>,
) -> WebResult<impl IntoResponse> {
    let course = state.courses().find_by_id(course_id).await?;
    Ok((StatusCode::OK, Json(CourseResponse::from(course))))
}

#[utoipa::path(
    put,
    path = "/courses/{course_id}",
    request_body = CourseDto,
    description = "Replaces name, description, image, status and level of a course",
    params(
        ("course_id" = Uuid, Path, description = "ID of the course to update")
    ),
    responses(
        (status = 200, description = "Course updated", body = CourseResponse),
        (status = 400, description = "Validation failed", body = ErrorResponse),
        (status = 404, description = "Course not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    ),
    tag = "courses"
)]
pub async fn courses_update_handler(
    State(state): State<AppState>,
    Path(course_id): Path<Uuid>,
    Valid(input): Valid<CourseDto>,
) -> WebResult<impl IntoResponse> {
    let course = state.courses().update(course_id, input).await?;
    Ok((StatusCode::OK, Json(CourseResponse::from(course))))
}

#[utoipa::path(
    delete,
    path = "/courses/{course_id}",
    description = "Deletes a course. Its modules and lessons go with it",
    params(
        ("course_id" = Uuid, Path, description = "ID of the course to delete")
    ),
    responses(
        (status = 200, description = "Course deleted", body = MessageResponse),
        (status = 404, description = "Course not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    ),
    tag = "courses"
)]
pub async fn courses_delete_handler(
    State(state): State<AppState>,
    Path(course_id): Path<Uuid>,
) -> WebResult<impl IntoResponse> {
    state.courses().delete(course_id).await?;
    Ok((
        StatusCode::OK,
        Json(MessageResponse::new("Course deleted successfully")),
    ))
}
