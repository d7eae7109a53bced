use leptos::prelude::*;

use super::{NavLink, route_url};
use crate::state::AppState;

#[component]
pub(crate) fn NotFound(state: AppState) -> impl IntoView {
    let index_url = route_url("posts.index", None);

    view! {
        <section class="not-found">
            <h1>"Post not found"</h1>
            <p>"The post you are looking for does not exist or was deleted."</p>
            <NavLink state=state href=index_url>
                "Back to posts"
            </NavLink>
        </section>
    }
}
