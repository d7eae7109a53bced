use leptos::prelude::*;

use crate::components::breadcrumbs::Breadcrumbs;
use crate::components::not_found::NotFound;
use crate::components::post_form::PostFormPage;
use crate::components::post_show::PostShow;
use crate::components::posts_index::PostsIndex;
use crate::models::{Page, View as PageView};
use crate::navigation::{self, VisitOptions};
use crate::page_meta::{PageMeta, page_meta};
use crate::routes::RouteTable;
use crate::state::AppState;

fn set_document_title(title: &str) {
    if let Some(document) = web_sys::window().and_then(|window| window.document()) {
        document.set_title(title);
    }
}

fn render_view(state: AppState, view: PageView, meta: PageMeta) -> AnyView {
    match view {
        PageView::Index(props) => view! { <PostsIndex state=state posts=props.posts /> }.into_any(),
        PageView::Show(props) => view! { <PostShow state=state post=props.post /> }.into_any(),
        PageView::Create => view! {
            <PostFormPage state=state post=None heading=meta.heading subtitle=meta.subtitle />
        }
        .into_any(),
        PageView::Edit(props) => view! {
            <PostFormPage
                state=state
                post=Some(props.post)
                heading=meta.heading
                subtitle=meta.subtitle
            />
        }
        .into_any(),
        PageView::Pending => view! { <p class="loading">"Loading..."</p> }.into_any(),
        PageView::NotFound => view! { <NotFound state=state /> }.into_any(),
        PageView::Unknown(component) => {
            leptos::logging::error!("unknown page component: {component}");
            view! { <NotFound state=state /> }.into_any()
        }
    }
}

fn render_page(state: AppState, page: &Page, routes: &RouteTable) -> AnyView {
    let view = match page.view() {
        Ok(view) => view,
        Err(err) => {
            leptos::logging::error!("page props did not decode: {err}");
            PageView::NotFound
        }
    };

    match page_meta(&view, routes) {
        Ok(meta) => {
            set_document_title(&meta.document_title);
            let crumbs = meta.breadcrumbs.clone();
            view! {
                <Breadcrumbs state=state crumbs=crumbs />
                {render_view(state, view, meta)}
            }
            .into_any()
        }
        Err(err) => {
            leptos::logging::error!("page routes: {err}");
            view! { <NotFound state=state /> }.into_any()
        }
    }
}

#[component]
pub fn App(initial: Option<Page>) -> impl IntoView {
    let routes = RouteTable::posts();
    provide_context(routes.clone());

    let state = match initial {
        Some(page) => AppState::new(page),
        None => {
            // served without an embedded page, e.g. by trunk serve
            let state = AppState::new(Page::pending(navigation::current_path()));
            navigation::visit(state, navigation::current_path(), VisitOptions::default());
            state
        }
    };

    let _popstate = window_event_listener(leptos::ev::popstate, move |_| {
        navigation::visit(
            state,
            navigation::current_path(),
            VisitOptions {
                from_history: true,
                ..VisitOptions::default()
            },
        );
    });

    view! {
        <main class="page">
            <section class="container">
                <Show when=move || state.notice.get().is_some()>
                    <div class="error-banner" role="alert">
                        <span>{move || state.notice.get().unwrap_or_default()}</span>
                        <button type="button" class="link" on:click=move |_| state.clear_notice()>
                            "Dismiss"
                        </button>
                    </div>
                </Show>

                {move || {
                    let page = state.page.get();
                    render_page(state, &page, &routes)
                }}
            </section>
        </main>
    }
}
