/// What the back/cancel action should do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BackAction {
    HistoryBack,
    Visit(String),
}

/// Going back is only safe when there is an earlier entry and it is not this
/// very page; otherwise fall back to the list.
pub fn back_action(
    history_len: u32,
    referrer: &str,
    current_url: &str,
    index_url: &str,
) -> BackAction {
    if history_len > 1 && referrer != current_url {
        BackAction::HistoryBack
    } else {
        BackAction::Visit(index_url.to_string())
    }
}

#[cfg(target_arch = "wasm32")]
mod browser {
    use leptos::prelude::*;
    use wasm_bindgen::JsValue;

    use super::{BackAction, back_action};
    use crate::api::{self, ApiError};
    use crate::models::Page;
    use crate::state::AppState;

    #[derive(Debug, Clone, Copy, Default)]
    pub(crate) struct VisitOptions {
        pub(crate) preserve_scroll: bool,
        /// Set when the browser already moved (popstate).
        pub(crate) from_history: bool,
    }

    pub(crate) fn current_path() -> String {
        web_sys::window()
            .and_then(|window| window.location().pathname().ok())
            .unwrap_or_else(|| "/posts".to_string())
    }

    pub(crate) fn confirm(message: &str) -> bool {
        web_sys::window()
            .and_then(|window| window.confirm_with_message(message).ok())
            .unwrap_or(false)
    }

    /// Makes `page` the current page, updating history and scroll.
    pub(crate) fn show_page(state: AppState, page: Page, options: VisitOptions) {
        if let Some(window) = web_sys::window() {
            if !options.from_history && current_path() != page.url {
                let pushed = window
                    .history()
                    .and_then(|history| history.push_state_with_url(&JsValue::NULL, "", Some(&page.url)));
                if let Err(err) = pushed {
                    leptos::logging::error!("history push failed: {err:?}");
                }
            }
            if !options.preserve_scroll {
                window.scroll_to_with_x_and_y(0.0, 0.0);
            }
        }
        state.clear_notice();
        state.page.set(page);
    }

    /// Error path shared by visits and non-form mutations.
    pub(crate) fn show_error(state: AppState, url: &str, err: ApiError) {
        match err {
            ApiError::NotFound => state.page.set(Page::not_found(url)),
            other => {
                leptos::logging::error!("request failed: {other}");
                state.set_notice("Something went wrong. Please try again.");
            }
        }
    }

    pub(crate) fn visit(state: AppState, url: String, options: VisitOptions) {
        state.loading.set(true);

        leptos::task::spawn_local(async move {
            match api::visit(&url).await {
                Ok(page) => show_page(state, page, options),
                Err(err) => show_error(state, &url, err),
            }
            state.loading.set(false);
        });
    }

    pub(crate) fn go_back(state: AppState, index_url: String) {
        let Some(window) = web_sys::window() else {
            return;
        };

        let history_len = window
            .history()
            .and_then(|history| history.length())
            .unwrap_or(0);
        let referrer = window
            .document()
            .map(|document| document.referrer())
            .unwrap_or_default();
        let current = window.location().href().unwrap_or_default();

        match back_action(history_len, &referrer, &current, &index_url) {
            BackAction::HistoryBack => {
                if let Err(err) = window.history().and_then(|history| history.back()) {
                    leptos::logging::error!("history back failed: {err:?}");
                }
            }
            BackAction::Visit(url) => visit(state, url, VisitOptions::default()),
        }
    }
}

#[cfg(target_arch = "wasm32")]
pub(crate) use browser::{
    VisitOptions, confirm, current_path, go_back, show_error, show_page, visit,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn goes_back_when_there_is_a_distinct_previous_entry() {
        assert_eq!(
            back_action(3, "http://app/posts", "http://app/posts/1/edit", "/posts"),
            BackAction::HistoryBack
        );
    }

    #[test]
    fn fresh_tab_visits_the_list() {
        assert_eq!(
            back_action(1, "", "http://app/posts/1/edit", "/posts"),
            BackAction::Visit("/posts".to_string())
        );
    }

    #[test]
    fn referrer_equal_to_current_page_visits_the_list() {
        assert_eq!(
            back_action(
                4,
                "http://app/posts/create",
                "http://app/posts/create",
                "/posts"
            ),
            BackAction::Visit("/posts".to_string())
        );
    }
}
