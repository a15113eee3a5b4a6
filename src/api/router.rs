use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::AppState;
use super::handlers;

pub fn create_router(state: AppState) -> Router {
    let routes = Router::new()
        .route("/", get(handlers::root::index))
        .route("/health", get(handlers::health::health_check))
        .route("/predict", post(handlers::predict::predict))
        .route("/openapi.json", get(handlers::docs::openapi))
        .route("/docs", get(handlers::docs::swagger_ui));

    // Any origin, method and header, with credentials. Wildcards cannot be
    // combined with credentials, so each is mirrored from the request.
    let cors = CorsLayer::new()
        .allow_origin(AllowOrigin::mirror_request())
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request())
        .allow_credentials(true);

    routes
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
