use axum::{
    Form, Json,
    extract::{FromRequest, FromRequestParts, OriginalUri, Path, Request, State},
    http::{header, request::Parts},
    response::{Redirect, Response},
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::error::DomainError;
use crate::domain::post::{Post, PostDraft};
use crate::presentation::AppState;
use crate::presentation::app_error::{AppError, AppResult};
use crate::presentation::page::{Page, PageRequest, View};

pub(crate) const INDEX_PATH: &str = "/posts";

/// Body of the store and update actions. Absent fields deserialize as empty
/// and are rejected like blank ones.
#[derive(Debug, Default, Deserialize, Validate)]
pub(crate) struct PostFormDto {
    #[serde(default)]
    #[validate(length(min = 1, message = "The title field is required."))]
    pub(crate) title: String,
    #[serde(default)]
    #[validate(length(min = 1, message = "The content field is required."))]
    pub(crate) content: String,
}

impl PostFormDto {
    fn trimmed(self) -> Self {
        Self {
            title: self.title.trim().to_string(),
            content: self.content.trim().to_string(),
        }
    }

    /// Request-shape check only. `PostDraft::validate`, run by the service,
    /// is the rule every write goes through; both emit the same messages.
    fn into_draft(self) -> AppResult<PostDraft> {
        let dto = self.trimmed();
        dto.validate()?;
        Ok(PostDraft::new(dto.title, dto.content))
    }
}

impl<S> FromRequest<S> for PostFormDto
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let is_json = req
            .headers()
            .get(header::CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .is_some_and(|value| value.starts_with("application/json"));

        if is_json {
            let Json(dto) = Json::<Self>::from_request(req, state)
                .await
                .map_err(|err| AppError::BadRequest(err.body_text()))?;
            Ok(dto)
        } else {
            let Form(dto) = Form::<Self>::from_request(req, state)
                .await
                .map_err(|err| AppError::BadRequest(err.body_text()))?;
            Ok(dto)
        }
    }
}

/// Post id from the path. Anything that is not an integer names no post.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct PostId(pub(crate) i64);

impl<S> FromRequestParts<S> for PostId
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|err| AppError::BadRequest(err.body_text()))?;

        raw.parse::<i64>()
            .map(PostId)
            .map_err(|_| DomainError::NotFound(format!("post id: {raw}")).into())
    }
}

#[derive(Debug, Serialize)]
pub(crate) struct PostDto {
    pub(crate) id: i64,
    pub(crate) title: String,
    pub(crate) content: String,
    pub(crate) created_at: DateTime<Utc>,
    pub(crate) updated_at: DateTime<Utc>,
}

impl From<Post> for PostDto {
    fn from(post: Post) -> Self {
        Self {
            id: post.id,
            title: post.title,
            content: post.content,
            created_at: post.created_at,
            updated_at: post.updated_at,
        }
    }
}

#[derive(Debug, Serialize)]
pub(crate) struct IndexProps {
    pub(crate) posts: Vec<PostDto>,
}

#[derive(Debug, Serialize)]
pub(crate) struct PostProps {
    pub(crate) post: PostDto,
}

#[derive(Debug, Serialize)]
pub(crate) struct CreateProps {}

fn render(
    state: &AppState,
    request: PageRequest,
    view: View,
    props: &impl Serialize,
    uri: &OriginalUri,
) -> AppResult<Response> {
    let page = Page::new(view, props, uri.0.to_string()).map_err(anyhow::Error::from)?;
    Ok(state.renderer.render(&page, request)?)
}

pub(crate) async fn index(
    State(state): State<AppState>,
    request: PageRequest,
    uri: OriginalUri,
) -> AppResult<Response> {
    let posts = state.posts.list_posts().await?;
    let props = IndexProps {
        posts: posts.into_iter().map(PostDto::from).collect(),
    };
    render(&state, request, View::PostsIndex, &props, &uri)
}

pub(crate) async fn show(
    State(state): State<AppState>,
    request: PageRequest,
    uri: OriginalUri,
    PostId(id): PostId,
) -> AppResult<Response> {
    let post = state.posts.get_post(id).await?;
    let props = PostProps { post: post.into() };
    render(&state, request, View::PostsShow, &props, &uri)
}

pub(crate) async fn create(
    State(state): State<AppState>,
    request: PageRequest,
    uri: OriginalUri,
) -> AppResult<Response> {
    render(&state, request, View::PostsCreate, &CreateProps {}, &uri)
}

pub(crate) async fn store(
    State(state): State<AppState>,
    dto: PostFormDto,
) -> AppResult<Redirect> {
    state.posts.create_post(dto.into_draft()?).await?;
    Ok(Redirect::to(INDEX_PATH))
}

pub(crate) async fn edit(
    State(state): State<AppState>,
    request: PageRequest,
    uri: OriginalUri,
    PostId(id): PostId,
) -> AppResult<Response> {
    let post = state.posts.get_post(id).await?;
    let props = PostProps { post: post.into() };
    render(&state, request, View::PostsEdit, &props, &uri)
}

pub(crate) async fn update(
    State(state): State<AppState>,
    PostId(id): PostId,
    dto: PostFormDto,
) -> AppResult<Redirect> {
    state.posts.update_post(id, dto.into_draft()?).await?;
    Ok(Redirect::to(INDEX_PATH))
}

pub(crate) async fn destroy(
    State(state): State<AppState>,
    PostId(id): PostId,
) -> AppResult<Redirect> {
    state.posts.delete_post(id).await?;
    Ok(Redirect::to(INDEX_PATH))
}
