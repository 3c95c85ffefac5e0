//! OpenAPI documentation

use axum::Router;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api::{books, health};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Bookstore API",
        version = "1.0.0",
        description = "MongoDB-backed book catalog REST API",
    ),
    paths(
        // Health
        health::health_check,
        health::readiness_check,
        // Books
        books::list,
        books::list_with_filter,
        books::list_in_process,
        books::create_json_params,
        books::get,
        books::create,
        books::update,
        books::delete,
        books::add_user,
        books::user_list,
    ),
    components(
        schemas(
            crate::models::book::BookInput,
            crate::models::book::BookResponse,
            health::HealthResponse,
            crate::error::ErrorResponse,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "books", description = "Book catalog and user document management")
    )
)]
pub struct ApiDoc;

/// Create the OpenAPI documentation router
pub fn create_openapi_router() -> Router {
    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
}
