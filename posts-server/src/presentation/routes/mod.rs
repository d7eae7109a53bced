use axum::Router;
use axum::response::Redirect;
use axum::routing::get;

use super::AppState;
use super::handlers::posts::INDEX_PATH;

pub(crate) mod posts;

pub(crate) fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(|| async { Redirect::to(INDEX_PATH) }))
        .nest("/posts", posts::router())
}
