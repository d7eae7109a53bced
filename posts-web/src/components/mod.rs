use leptos::prelude::*;

use crate::navigation::{self, VisitOptions};
use crate::routes::{HttpMethod, RouteTable};
use crate::state::AppState;

pub(crate) mod breadcrumbs;
pub(crate) mod not_found;
pub(crate) mod post_form;
pub(crate) mod post_show;
pub(crate) mod posts_index;

/// Resolves a named route from the table in context. Only call while a
/// component is being built.
pub(crate) fn route_url(name: &str, id: Option<i64>) -> String {
    expect_context::<RouteTable>()
        .url(name, id)
        .unwrap_or_else(|err| {
            leptos::logging::error!("{err}");
            "/posts".to_string()
        })
}

pub(crate) fn route_method(name: &str) -> HttpMethod {
    expect_context::<RouteTable>()
        .method(name)
        .unwrap_or(HttpMethod::Get)
}

/// Anchor that loads its target through the page bridge instead of a full
/// document reload.
#[component]
pub(crate) fn NavLink(state: AppState, href: String, children: Children) -> impl IntoView {
    let target = href.clone();

    view! {
        <a
            href=href
            on:click=move |ev: leptos::ev::MouseEvent| {
                ev.prevent_default();
                navigation::visit(state, target.clone(), VisitOptions::default());
            }
        >
            {children()}
        </a>
    }
}
