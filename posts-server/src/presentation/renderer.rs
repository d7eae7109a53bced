use askama::Template;
use axum::{
    Json,
    http::{HeaderName, HeaderValue, header},
    response::{Html, IntoResponse, Response},
};
use thiserror::Error;

use super::page::{BRIDGE_HEADER, Page, PageRequest};

#[derive(Debug, Error)]
pub(crate) enum RenderError {
    #[error("page encode failed")]
    Encode(#[source] serde_json::Error),

    #[error("shell template failed")]
    Template(#[source] askama::Error),
}

/// Turns a [`Page`] into an HTTP response.
pub(crate) trait PageRenderer: Send + Sync {
    fn render(&self, page: &Page, request: PageRequest) -> Result<Response, RenderError>;
}

#[derive(Template)]
#[template(path = "app.html")]
struct ShellTemplate<'a> {
    title: &'a str,
    page_json: &'a str,
}

/// Serves the page object as JSON to the hydrated client and as an HTML shell
/// with the page embedded in `data-page` to everything else.
#[derive(Debug, Clone)]
pub(crate) struct BridgeRenderer {
    title: String,
}

impl BridgeRenderer {
    pub(crate) fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
        }
    }
}

impl PageRenderer for BridgeRenderer {
    fn render(&self, page: &Page, request: PageRequest) -> Result<Response, RenderError> {
        let vary = (header::VARY, HeaderValue::from_static("X-Page-Bridge"));

        match request {
            PageRequest::Bridge => Ok((
                [
                    vary,
                    (
                        HeaderName::from_static(BRIDGE_HEADER),
                        HeaderValue::from_static("true"),
                    ),
                ],
                Json(page),
            )
                .into_response()),
            PageRequest::Document => {
                let page_json = serde_json::to_string(page).map_err(RenderError::Encode)?;
                let html = ShellTemplate {
                    title: &self.title,
                    page_json: &page_json,
                }
                .render()
                .map_err(RenderError::Template)?;
                Ok(([vary], Html(html)).into_response())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use axum::body::to_bytes;
    use axum::http::StatusCode;
    use serde_json::{Value, json};

    use super::*;
    use crate::presentation::page::View;

    fn sample_page() -> Page {
        Page::new(
            View::PostsShow,
            &json!({"post": {"id": 1, "title": "<b>\"quoted\"</b>"}}),
            "/posts/1",
        )
        .expect("page must build")
    }

    async fn body_text(response: Response) -> String {
        let bytes = to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("body must be readable");
        String::from_utf8(bytes.to_vec()).expect("body must be utf-8")
    }

    #[tokio::test]
    async fn bridge_request_gets_page_json() {
        let response = BridgeRenderer::new("Posts")
            .render(&sample_page(), PageRequest::Bridge)
            .expect("render must succeed");

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers().get(BRIDGE_HEADER).and_then(|v| v.to_str().ok()),
            Some("true")
        );

        let value: Value =
            serde_json::from_str(&body_text(response).await).expect("body must be json");
        assert_eq!(value["component"], "posts/show");
        assert_eq!(value["props"]["post"]["id"], 1);
        assert_eq!(value["url"], "/posts/1");
    }

    #[tokio::test]
    async fn document_request_gets_escaped_shell() {
        let response = BridgeRenderer::new("Posts")
            .render(&sample_page(), PageRequest::Document)
            .expect("render must succeed");

        assert_eq!(response.status(), StatusCode::OK);
        let content_type = response
            .headers()
            .get(header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default()
            .to_string();
        assert!(content_type.starts_with("text/html"));

        let html = body_text(response).await;
        assert!(html.contains("<title>Posts</title>"));
        assert!(html.contains("id=\"app\""));
        assert!(html.contains("posts&#x2f;show") || html.contains("posts/show"));
        assert!(html.contains("&lt;b&gt;"), "page json must be escaped");
        assert!(!html.contains("<b>"));
    }
}
