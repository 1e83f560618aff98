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
        modules::{ModuleDto, ModuleResponse},
    },
};

pub fn routes<S>(state: AppState) -> Router<S> {
    Router::new()
        .route(
            "/courses/{course_id}/modules",
            post(modules_create_handler).get(modules_list_handler),
        )
        .route(
            "/courses/{course_id}/modules/{module_id}",
            get(modules_get_handler)
                .put(modules_update_handler)
                .delete(modules_delete_handler),
        )
        .with_state(state)
}

#[utoipa::path(
    post,
    path = "/courses/{course_id}/modules",
    request_body = ModuleDto,
    description = "Creates a module inside a course",
    params(
        ("course_id" = Uuid, Path, description = "Owning course")
    ),
    responses(
        (status = 201, description = "Module created", body = ModuleResponse),
        (status = 400, description = "Validation failed", body = ErrorResponse),
        (status = 404, description = "Course not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    ),
    tag = "modules"
)]
pub async fn modules_create_handler(
    State(state): State<AppState>,
    Path(course_id): Path<Uuid>,
    Valid(input): Valid<ModuleDto>,
) -> WebResult<impl IntoResponse> {
    let module = state.modules().create(course_id, input).await?;
    Ok((StatusCode::CREATED, Json(ModuleResponse::from(module))))
}

#[utoipa::path(
    get,
    path = "/courses/{course_id}/modules",
    description = "Lists the modules of a course",
    params(
        ("course_id" = Uuid, Path, description = "Owning course")
    ),
    responses(
        (status = 200, description = "Modules collected", body = Vec<ModuleResponse>),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    ),
    tag = "modules"
)]
pub async fn modules_list_handler(
    State(state): State<AppState>,
    Path(course_id): Path<Uuid>,
) -> WebResult<impl IntoResponse> {
    let modules = state
        .modules()
        .find_all_by_course(course_id)
        .await?
        .into_iter()
        .map(ModuleResponse::from)
        .collect::<Vec<_>>();

    Ok((StatusCode::OK, Json(modules)))
}

#[utoipa::path(
    get,
    path = "/courses/{course_id}/modules/{module_id}",
    params(
        ("course_id" = Uuid, Path, description = "Owning course"),
        ("module_id" = Uuid, Path, description = "ID of the module to get"),
    ),
    responses(
        (status = 200, description = "Module found", body = ModuleResponse),
        (status = 404, description = "Module not found in this course", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    ),
    tag = "modules"
)]
pub async fn modules_get_handler(
    State(state): State<AppState>,
    Path((course_id, module_id)): Path<(Uuid, Uuid)>,
) -> WebResult<impl IntoResponse> {
    let module = state.modules().find_one(course_id, module_id).await?;
    Ok((StatusCode::OK, Json(ModuleResponse::from(module))))
}

#[utoipa::path(
    put,
    path = "/courses/{course_id}/modules/{module_id}",
    request_body = ModuleDto,
    params(
        ("course_id" = Uuid, Path, description = "Owning course"),
        ("module_id" = Uuid, Path, description = "ID of the module to update"),
    ),
    responses(
        (status = 200, description = "Module updated", body = ModuleResponse),
        (status = 400, description = "Validation failed", body = ErrorResponse),
        (status = 404, description = "Module not found in this course", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    ),
    tag = "modules"
)]
pub async fn modules_update_handler(
    State(state): State<AppState>,
    Path((course_id, module_id)): Path<(Uuid, Uuid)>,
    Valid(input): Valid<ModuleDto>,
) -> WebResult<impl IntoResponse> {
    let module = state.modules().update(course_id, module_id, input).await?;
    Ok((StatusCode::OK, Json(ModuleResponse::from(module))))
}

#[utoipa::path(
    delete,
    path = "/courses/{course_id}/modules/{module_id}",
    params(
        ("course_id" = Uuid, Path, description = "Owning course"),
        ("module_id" = Uuid, Path, description = "ID of the module to delete"),
    ),
    responses(
        (status = 200, description = "Module deleted", body = MessageResponse),
        (status = 404, description = "Module not found in this course", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    ),
    tag = "modules"
)]
pub async fn modules_delete_handler(
    State(state): State<AppState>,
    Path((course_id, module_id)): Path<(Uuid, Uuid)>,
) -> WebResult<impl IntoResponse> {
    state.modules().delete(course_id, module_id).await?;
    Ok((
        StatusCode::OK,
        Json(MessageResponse::new("Module deleted successfully")),
    ))
}
