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
        lessons::{LessonDto, LessonResponse},
    },
};

pub fn routes<S>(state: AppState) -> Router<S> {
    Router::new()
        .route(
            "/modules/{module_id}/lessons",
            post(lessons_create_handler).get(lessons_list_handler),
        )
        .route(
            "/modules/{module_id}/lessons/{lesson_id}",
            get(lessons_get_handler)
                .put(lessons_update_handler)
                .delete(lessons_delete_handler),
        )
        .with_state(state)
}

#[utoipa::path(
    post,
    path = "/modules/{module_id}/lessons",
    request_body = LessonDto,
    description = "Creates a lesson inside a module",
    params(
        ("module_id" = Uuid, Path, description = "Owning module")
    ),
    responses(
        (status = 201, description = "Lesson created", body = LessonResponse),
        (status = 400, description = "Validation failed", body = ErrorResponse),
        (status = 404, description = "Module not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    ),
    tag = "lessons"
)]
pub async fn lessons_create_handler(
    State(state): State<AppState>,
    Path(module_id): Path<Uuid>,
    Valid(input): Valid<LessonDto>,
) -> WebResult<impl IntoResponse> {
    let lesson = state.lessons().create(module_id, input).await?;
    Ok((StatusCode::CREATED, Json(LessonResponse::from(lesson))))
}

#[utoipa::path(
    get,
    path = "/modules/{module_id}/lessons",
    params(
        ("module_id" = Uuid, Path, description = "Owning module")
    ),
    responses(
        (status = 200, description = "Lessons collected", body = Vec<LessonResponse>),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    ),
    tag = "lessons"
)]
pub async fn lessons_list_handler(
    State(state): State<AppState>,
    Path(module_id): Path<Uuid>,
) -> WebResult<impl IntoResponse> {
    let lessons = state
        .lessons()
        .find_all_by_module(module_id)
        .await?
        .into_iter()
        .map(LessonResponse::from)
        .collect::<Vec<_>>();

    Ok((StatusCode::OK, Json(lessons)))
}

#[utoipa::path(
    get,
    path = "/modules/{module_id}/lessons/{lesson_id}",
    params(
        ("module_id" = Uuid, Path, description = "Owning module"),
        ("lesson_id" = Uuid, Path, description = "ID of the lesson to get"),
    ),
    responses(
        (status = 200, description = "Lesson found", body = LessonResponse),
        (status = 404, description = "Lesson not found in this module", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    ),
    tag = "lessons"
)]
pub async fn lessons_get_handler(
    State(state): State<AppState>,
    Path((module_id, lesson_id)): Path<(Uuid, Uuid)>,
) -> WebResult<impl IntoResponse> {
    let lesson = state.lessons().find_one(module_id, lesson_id).await?;
    Ok((StatusCode::OK, Json(LessonResponse::from(lesson))))
}

#[utoipa::path(
    put,
    path = "/modules/{module_id}/lessons/{lesson_id}",
    request_body = LessonDto,
    params(
        ("module_id" = Uuid, Path, description = "Owning module"),
        ("lesson_id" = Uuid, Path, description = "ID of the lesson to update"),
    ),
    responses(
        (status = 200, description = "Lesson updated", body = LessonResponse),
        (status = 400, description = "Validation failed", body = ErrorResponse),
        (status = 404, description = "Lesson not found in this module", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    ),
    tag = "lessons"
)]
pub async fn lessons_update_handler(
    State(state): State<AppState>,
    Path((module_id, lesson_id)): Path<(Uuid, Uuid)>,
    Valid(input): Valid<LessonDto>,
) -> WebResult<impl IntoResponse> {
    let lesson = state.lessons().update(module_id, lesson_id, input).await?;
    Ok((StatusCode::OK, Json(LessonResponse::from(lesson))))
}

#[utoipa::path(
    delete,
    path = "/modules/{module_id}/lessons/{lesson_id}",
    params(
        ("module_id" = Uuid, Path, description = "Owning module"),
        ("lesson_id" = Uuid, Path, description = "ID of the lesson to delete"),
    ),
    responses(
        (status = 200, description = "Lesson deleted", body = MessageResponse),
        (status = 404, description = "Lesson not found in this module", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    ),
    tag = "lessons"
)]
pub async fn lessons_delete_handler(
    State(state): State<AppState>,
    Path((module_id, lesson_id)): Path<(Uuid, Uuid)>,
) -> WebResult<impl IntoResponse> {
    state.lessons().delete(module_id, lesson_id).await?;
    Ok((
        StatusCode::OK,
        Json(MessageResponse::new("Lesson deleted successfully")),
    ))
}
