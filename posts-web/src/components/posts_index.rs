use leptos::prelude::*;
use leptos::task::spawn_local;

use super::{NavLink, route_url};
use crate::api;
use crate::listing::{self, CONFIRM_DELETE, ListBody, PostRow};
use crate::models::Post;
use crate::navigation::{self, VisitOptions};
use crate::routes::RouteTable;
use crate::state::AppState;

fn delete_post(state: AppState, row: &PostRow) {
    let Some(request) = listing::delete_after_confirm(navigation::confirm(CONFIRM_DELETE), row)
    else {
        return;
    };

    state.loading.set(true);
    spawn_local(async move {
        match api::submit(request.method, &request.url, None).await {
            Ok(page) => navigation::show_page(
                state,
                page,
                VisitOptions {
                    preserve_scroll: true,
                    ..VisitOptions::default()
                },
            ),
            Err(err) => navigation::show_error(state, &request.url, err),
        }
        state.loading.set(false);
    });
}

#[component]
fn PostRowView(state: AppState, row: PostRow) -> impl IntoView {
    let show_url = row.show_url.clone();
    let edit_url = row.edit_url.clone();
    let title = row.title.clone();
    let preview = row.preview.clone();

    view! {
        <tr>
            <td class="title">
                <NavLink state=state href=show_url>
                    {title}
                </NavLink>
            </td>
            <td class="preview">{preview}</td>
            <td class="actions">
                <NavLink state=state href=edit_url>
                    "Edit"
                </NavLink>
                <button
                    type="button"
                    class="danger"
                    disabled=move || state.loading.get()
                    on:click=move |_| delete_post(state, &row)
                >
                    "Delete"
                </button>
            </td>
        </tr>
    }
}

#[component]
pub(crate) fn PostsIndex(state: AppState, posts: Vec<Post>) -> impl IntoView {
    let create_url = route_url("posts.create", None);

    let body = match listing::list_body(posts, &expect_context::<RouteTable>()) {
        Ok(ListBody::Empty(message)) => view! { <p class="empty-state">{message}</p> }.into_any(),
        Ok(ListBody::Rows(rows)) => view! {
            <table class="posts">
                <thead>
                    <tr>
                        <th>"Title"</th>
                        <th>"Content"</th>
                        <th class="actions">"Actions"</th>
                    </tr>
                </thead>
                <tbody>
                    {rows
                        .into_iter()
                        .map(|row| view! { <PostRowView state=state row=row /> })
                        .collect_view()}
                </tbody>
            </table>
        }
        .into_any(),
        Err(err) => {
            leptos::logging::error!("posts list routes: {err}");
            view! { <p class="empty-state">"Posts could not be listed."</p> }.into_any()
        }
    };

    view! {
        <section>
            <header class="page-header">
                <h1>"Posts"</h1>
                <NavLink state=state href=create_url>
                    "Create Post"
                </NavLink>
            </header>
            {body}
        </section>
    }
}
