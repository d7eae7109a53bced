use axum::Router;
use axum::routing::get;

use crate::presentation::AppState;
use crate::presentation::handlers::posts::{create, destroy, edit, index, show, store, update};

pub(crate) fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(index).post(store))
        .route("/create", get(create))
        .route("/{id}", get(show).put(update).patch(update).delete(destroy))
        .route("/{id}/edit", get(edit))
}
