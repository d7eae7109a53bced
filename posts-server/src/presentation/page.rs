//! Pages: a named client view plus the props it is rendered with.
//!
//! Handlers build a [`Page`] and hand it to the configured
//! [`PageRenderer`](super::renderer::PageRenderer); they never produce HTML or
//! JSON themselves.

use std::convert::Infallible;

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use serde::Serialize;
use serde_json::Value;

/// Request header a hydrated client sets when it wants the page object as JSON.
pub(crate) const BRIDGE_HEADER: &str = "x-page-bridge";

/// Client views the server knows how to address.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum View {
    PostsIndex,
    PostsShow,
    PostsCreate,
    PostsEdit,
}

impl View {
    pub(crate) fn as_str(self) -> &'static str {
        match self {
            View::PostsIndex => "posts/index",
            View::PostsShow => "posts/show",
            View::PostsCreate => "posts/create",
            View::PostsEdit => "posts/edit",
        }
    }
}

impl Serialize for View {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

#[derive(Debug, Clone, Serialize)]
pub(crate) struct Page {
    pub(crate) component: View,
    pub(crate) props: Value,
    pub(crate) url: String,
}

impl Page {
    pub(crate) fn new<P: Serialize>(
        component: View,
        props: &P,
        url: impl Into<String>,
    ) -> Result<Self, serde_json::Error> {
        Ok(Self {
            component,
            props: serde_json::to_value(props)?,
            url: url.into(),
        })
    }
}

/// How the current request wants its page delivered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum PageRequest {
    /// First load: full HTML document with the page embedded.
    Document,
    /// Client-side navigation: page object as JSON.
    Bridge,
}

impl<S> FromRequestParts<S> for PageRequest
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let bridge = parts
            .headers
            .get(BRIDGE_HEADER)
            .and_then(|value| value.to_str().ok())
            .is_some_and(|value| value.trim().eq_ignore_ascii_case("true"));

        Ok(if bridge {
            PageRequest::Bridge
        } else {
            PageRequest::Document
        })
    }
}
