use crate::models::{FieldErrors, Page, ValidationResponse};

/// Request header that asks the backend for the page object instead of HTML.
pub(crate) const BRIDGE_HEADER: &str = "X-Page-Bridge";

#[derive(Debug, Clone, PartialEq)]
pub(crate) enum ApiError {
    Network(String),
    Http { status: u16, message: String },
    NotFound,
    Validation(FieldErrors),
    Decode(String),
}

impl core::fmt::Display for ApiError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Network(msg) => write!(f, "network error: {msg}"),
            Self::Http { status, message } => write!(f, "http error {status}: {message}"),
            Self::NotFound => write!(f, "not found"),
            Self::Validation(_) => write!(f, "validation failed"),
            Self::Decode(msg) => write!(f, "decode error: {msg}"),
        }
    }
}

fn http_error(status: u16, body: &str) -> ApiError {
    let message = serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|value| value["error"].as_str().map(str::to_string))
        .filter(|message| !message.trim().is_empty())
        .unwrap_or_else(|| match status {
            400 => "Bad request".to_string(),
            500..=599 => "Server error".to_string(),
            _ => format!("HTTP error {status}"),
        });

    ApiError::Http { status, message }
}

/// Maps a finished response to the page it carries.
///
/// Redirects are already followed by the browser, so a successful mutation
/// arrives here as the page it redirected to.
pub(crate) fn decode_page_response(status: u16, body: &str) -> Result<Page, ApiError> {
    match status {
        200..=299 => serde_json::from_str(body).map_err(|err| ApiError::Decode(err.to_string())),
        404 => Err(ApiError::NotFound),
        422 => match serde_json::from_str::<ValidationResponse>(body) {
            Ok(response) => Err(ApiError::Validation(response.errors)),
            Err(err) => Err(ApiError::Decode(err.to_string())),
        },
        _ => Err(http_error(status, body)),
    }
}

#[cfg(target_arch = "wasm32")]
mod transport {
    use gloo_net::http::{Request, RequestBuilder};

    use super::{ApiError, BRIDGE_HEADER, decode_page_response};
    use crate::models::{Page, PostFields};
    use crate::routes::HttpMethod;

    fn builder(method: HttpMethod, url: &str) -> RequestBuilder {
        let builder = match method {
            HttpMethod::Get => Request::get(url),
            HttpMethod::Post => Request::post(url),
            HttpMethod::Put => Request::put(url),
            HttpMethod::Delete => Request::delete(url),
        };
        builder
            .header(BRIDGE_HEADER, "true")
            .header("Accept", "application/json")
    }

    async fn finish(response: gloo_net::http::Response) -> Result<Page, ApiError> {
        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|err| ApiError::Network(err.to_string()))?;
        decode_page_response(status, &body)
    }

    pub(crate) async fn visit(url: &str) -> Result<Page, ApiError> {
        let response = builder(HttpMethod::Get, url)
            .send()
            .await
            .map_err(|err| ApiError::Network(err.to_string()))?;

        finish(response).await
    }

    pub(crate) async fn submit(
        method: HttpMethod,
        url: &str,
        fields: Option<&PostFields>,
    ) -> Result<Page, ApiError> {
        let request = match fields {
            Some(fields) => builder(method, url).json(fields),
            None => builder(method, url).build(),
        }
        .map_err(|err| ApiError::Network(err.to_string()))?;

        let response = request
            .send()
            .await
            .map_err(|err| ApiError::Network(err.to_string()))?;

        finish(response).await
    }
}

#[cfg(target_arch = "wasm32")]
pub(crate) use transport::{submit, visit};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn success_decodes_page() {
        let page = decode_page_response(
            200,
            r#"{"component":"posts/index","props":{"posts":[]},"url":"/posts"}"#,
        )
        .expect("page must decode");

        assert_eq!(page.component, "posts/index");
        assert_eq!(page.url, "/posts");
    }

    #[test]
    fn unprocessable_becomes_validation_error() {
        let err = decode_page_response(
            422,
            r#"{"errors":{"content":["The content field is required."]}}"#,
        )
        .expect_err("must fail");

        let ApiError::Validation(errors) = err else {
            panic!("expected validation error, got {err:?}");
        };
        assert_eq!(errors.first("content"), Some("The content field is required."));
    }

    #[test]
    fn missing_resource_is_not_found() {
        let err = decode_page_response(404, r#"{"error":"resource not found: post id: 9"}"#)
            .expect_err("must fail");
        assert_eq!(err, ApiError::NotFound);
    }

    #[test]
    fn server_error_keeps_body_message() {
        let err = decode_page_response(500, r#"{"error":"internal error"}"#).expect_err("must fail");
        assert_eq!(
            err,
            ApiError::Http {
                status: 500,
                message: "internal error".to_string()
            }
        );
    }

    #[test]
    fn non_json_error_body_falls_back_to_status_text() {
        let err = decode_page_response(502, "<html>bad gateway</html>").expect_err("must fail");
        assert_eq!(
            err,
            ApiError::Http {
                status: 502,
                message: "Server error".to_string()
            }
        );
    }

    #[test]
    fn garbage_success_body_is_a_decode_error() {
        let err = decode_page_response(200, "not json").expect_err("must fail");
        assert!(matches!(err, ApiError::Decode(_)));
    }
}
