use leptos::prelude::*;

use crate::models::Page;

#[derive(Debug, Clone, Copy)]
pub(crate) struct AppState {
    pub(crate) page: RwSignal<Page>,
    pub(crate) notice: RwSignal<Option<String>>,
    pub(crate) loading: RwSignal<bool>,
}

impl AppState {
    pub(crate) fn new(page: Page) -> Self {
        Self {
            page: RwSignal::new(page),
            notice: RwSignal::new(None),
            loading: RwSignal::new(false),
        }
    }

    pub(crate) fn set_notice(&self, message: impl Into<String>) {
        self.notice.set(Some(message.into()));
    }

    pub(crate) fn clear_notice(&self) {
        self.notice.set(None);
    }
}
