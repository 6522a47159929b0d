use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{compression::CompressionLayer, cors::CorsLayer, trace::TraceLayer};

use crate::handlers::{root as root_handlers, users as user_handlers};
use crate::{Config, UserStore};

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<UserStore>,
    pub config: Config,
}

pub fn create_router(store: Arc<UserStore>, config: Config) -> Router {
    let state = AppState { store, config };

    let user_routes = Router::new()
        .route(
            "/",
            get(user_handlers::list_users).post(user_handlers::create_user),
        )
        // Any other method on `/generate` is an id lookup for a user named "generate".
        .route(
            "/generate",
            post(user_handlers::generate_users).fallback(user_handlers::user_not_found),
        )
        .route(
            "/:id",
            get(user_handlers::get_user)
                .put(user_handlers::update_user)
                .delete(user_handlers::delete_user),
        );

    Router::new()
        .route("/", get(root_handlers::greeting))
        .route("/health", get(root_handlers::health_check))
        .nest("/users", user_routes)
        .layer(TraceLayer::new_for_http())
        .layer(CompressionLayer::new())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
