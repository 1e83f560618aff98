use std::time::Duration;

use crate::{
    Config,
    web::{AppState, doc::ApiDoc},
};
use axum::Router;
use tower_http::cors::CorsLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

pub mod courses;
pub mod lessons;
pub mod modules;

pub fn build_app(state: AppState, config: &'static Config) -> Router {
    let mut router = Router::new()
        .merge(courses::routes(state.clone()))
        .merge(modules::routes(state.clone()))
        .merge(lessons::routes(state));

    if config.app().docs() {
        let openapi = ApiDoc::openapi();

        router = router.merge(SwaggerUi::new("/docs").url("/api-doc/openapi.json", openapi));
    }

    // any origin, no credentials
    router.layer(CorsLayer::permissive().max_age(Duration::from_secs(3600)))
}
