use axum::routing::get;
use axum::Router;
use tower_http::set_header::SetResponseHeaderLayer;
use tower_http::trace::TraceLayer;

use crate::config::{create_cors_layer, security_headers};
use crate::handlers::health_check;
use crate::handlers::users::{
    create_user, delete_user, get_all_users, get_single_user, update_user, AppState,
};

pub fn create_routes(state: AppState) -> Router {
    let mut router = Router::new()
        .route("/health", get(health_check))
        .route("/api/users", get(get_all_users).post(create_user))
        .route(
            "/api/users/:id",
            get(get_single_user).put(update_user).delete(delete_user),
        )
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(create_cors_layer());

    for (name, value) in security_headers() {
        router = router.layer(SetResponseHeaderLayer::overriding(name, value));
    }

    router
}
