use leptos::prelude::*;

use super::{NavLink, route_url};
use crate::models::Post;
use crate::navigation;
use crate::state::AppState;

#[component]
pub(crate) fn PostShow(state: AppState, post: Post) -> impl IntoView {
    let edit_url = route_url("posts.edit", Some(post.id));
    let index_url = route_url("posts.index", None);

    view! {
        <article class="post">
            <header class="page-header">
                <h1>{post.title}</h1>
                <div class="actions">
                    <NavLink state=state href=edit_url>
                        "Edit"
                    </NavLink>
                    <button
                        type="button"
                        class="secondary"
                        on:click=move |_| navigation::go_back(state, index_url.clone())
                    >
                        "Back"
                    </button>
                </div>
            </header>
            <p class="meta">
                "Created " {post.created_at} " · Updated " {post.updated_at}
            </p>
            <div class="post-content">{post.content}</div>
        </article>
    }
}
