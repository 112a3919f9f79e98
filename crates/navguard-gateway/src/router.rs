//! Axum router wiring.
//!
//! Pages (home, entry point, registration, and a private fallback) sit behind
//! the navigation guard. The decision endpoint and ops endpoints do not.

use axum::{http::Uri, middleware, routing::get, Router};

use crate::{app_state::AppState, guard, ops};

pub fn build_router(state: AppState) -> Router {
    let routes = state.policy().routes().clone();

    let mut pages = Router::new()
        .route(routes.entry_point(), get(|| async { "sign in" }))
        .route(routes.register(), get(|| async { "register" }));
    // home may double as the registration page
    if routes.home() != routes.register() {
        pages = pages.route(routes.home(), get(|| async { "home" }));
    }

    let pages = pages
        .fallback(private_page)
        .layer(middleware::from_fn_with_state(state.clone(), guard::navigation_guard));

    let api = Router::new()
        .route("/v1/decide", get(guard::decide))
        .route("/healthz", get(ops::healthz));

    api.merge(pages).with_state(state)
}

async fn private_page(uri: Uri) -> String {
    format!("private: {}", uri.path())
}
