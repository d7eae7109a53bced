use leptos::prelude::*;

use super::NavLink;
use crate::page_meta::Crumb;
use crate::state::AppState;

/// Trail of links above each page; the last entry is the current page.
#[component]
pub(crate) fn Breadcrumbs(state: AppState, crumbs: Vec<Crumb>) -> impl IntoView {
    let last = crumbs.len().saturating_sub(1);

    view! {
        <nav class="breadcrumbs" aria-label="Breadcrumb">
            {crumbs
                .into_iter()
                .enumerate()
                .map(|(index, crumb)| {
                    let separator = (index > 0).then_some(view! { <span class="separator">"›"</span> });
                    let item = if index == last {
                        view! { <span aria-current="page">{crumb.title}</span> }.into_any()
                    } else {
                        view! {
                            <NavLink state=state href=crumb.href>
                                {crumb.title}
                            </NavLink>
                        }
                        .into_any()
                    };
                    view! { {separator} {item} }
                })
                .collect_view()}
        </nav>
    }
}
