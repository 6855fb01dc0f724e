use axum::{Router, routing::get};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::infra::app_state::AppState;
use crate::users::handlers;

/// Create the full application router.
///
/// The panel is a separate origin during development, so CORS is open
/// for all routes.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/test", get(handlers::health_check))
        .route(
            "/api/{target}/users",
            get(handlers::list_users).post(handlers::create_user),
        )
        .route(
            "/api/{target}/users/{id}",
            get(handlers::get_user)
                .put(handlers::update_user)
                .delete(handlers::delete_user),
        )
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
