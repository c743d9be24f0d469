//! Route configuration.

use crate::handlers;
use crate::state::AppState;
use axum::Router;
use axum::routing::get;
use tower_http::trace::TraceLayer;

/// Create the application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::greeting))
        .route(
            "/{sha1}",
            get(handlers::get_tree_urls)
                .put(handlers::put_tree_urls)
                .post(handlers::put_tree_urls)
                .delete(handlers::delete_tree_urls),
        )
        .fallback(handlers::route_not_found)
        .method_not_allowed_fallback(handlers::route_not_found)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
