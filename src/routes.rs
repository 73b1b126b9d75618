use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};
use tower::ServiceBuilder;
use tower_http::{catch_panic::CatchPanicLayer, cors::CorsLayer, trace::TraceLayer};

use crate::handlers::{self, v1};
use crate::middleware::shell;
use crate::state::AppState;

/// Full application: routes plus the shell layers selected by configuration
pub fn app(state: AppState) -> Router {
    let config = state.config.clone();

    let mut router = Router::new()
        .route("/health", get(handlers::health))
        .nest("/v1", v1_routes())
        .fallback(shell::not_found)
        .with_state(state)
        .layer(
            ServiceBuilder::new()
                .layer(CatchPanicLayer::custom(shell::handle_panic))
                .layer(DefaultBodyLimit::max(config.api.max_request_size_bytes)),
        );

    if config.security.enable_security_headers {
        router = shell::with_security_headers(router);
    }
    if config.security.enable_cors {
        router = router.layer(CorsLayer::permissive());
    }
    if config.api.enable_request_logging {
        router = router.layer(TraceLayer::new_for_http());
    }

    router
}

fn v1_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/products",
            post(v1::products::create).patch(v1::products::update),
        )
        .route(
            "/products/:id",
            get(v1::products::find_one).delete(v1::products::remove),
        )
        .route("/auth/authenticate", post(v1::auth::authenticate))
}
