use crate::server::handlers::{hello, scrape};
use crate::server::state::AppState;
use axum::{routing::get, Router};

pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/api/scrape", get(scrape))
        .route("/api/hello", get(hello))
        .with_state(state)
}
