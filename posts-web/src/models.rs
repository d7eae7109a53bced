use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

pub const INDEX_COMPONENT: &str = "posts/index";
pub const SHOW_COMPONENT: &str = "posts/show";
pub const CREATE_COMPONENT: &str = "posts/create";
pub const EDIT_COMPONENT: &str = "posts/edit";
pub const NOT_FOUND_COMPONENT: &str = "errors/not_found";
pub const PENDING_COMPONENT: &str = "pending";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Post {
    pub id: i64,
    pub title: String,
    pub content: String,
    pub created_at: String,
    pub updated_at: String,
}

/// Page object as served by the backend: which view to show and its props.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Page {
    pub component: String,
    #[serde(default)]
    pub props: Value,
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct IndexProps {
    pub posts: Vec<Post>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PostProps {
    pub post: Post,
}

/// Decoded form of [`Page`], one variant per client view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum View {
    Index(IndexProps),
    Show(PostProps),
    Create,
    Edit(PostProps),
    NotFound,
    Pending,
    Unknown(String),
}

impl Page {
    pub fn not_found(url: impl Into<String>) -> Self {
        Self {
            component: NOT_FOUND_COMPONENT.to_string(),
            props: Value::Null,
            url: url.into(),
        }
    }

    /// Placeholder shown until the first page arrives.
    pub fn pending(url: impl Into<String>) -> Self {
        Self {
            component: PENDING_COMPONENT.to_string(),
            props: Value::Null,
            url: url.into(),
        }
    }

    pub fn view(&self) -> Result<View, serde_json::Error> {
        let view = match self.component.as_str() {
            INDEX_COMPONENT => View::Index(serde_json::from_value(self.props.clone())?),
            SHOW_COMPONENT => View::Show(serde_json::from_value(self.props.clone())?),
            CREATE_COMPONENT => View::Create,
            EDIT_COMPONENT => View::Edit(serde_json::from_value(self.props.clone())?),
            NOT_FOUND_COMPONENT => View::NotFound,
            PENDING_COMPONENT => View::Pending,
            other => View::Unknown(other.to_string()),
        };
        Ok(view)
    }
}

/// Field name to messages, as returned with a 422.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(transparent)]
pub struct FieldErrors(BTreeMap<String, Vec<String>>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.0.entry(field.into()).or_default().push(message.into());
    }

    pub fn first(&self, field: &str) -> Option<&str> {
        self.0
            .get(field)
            .and_then(|messages| messages.first())
            .map(String::as_str)
    }

    pub fn clear(&mut self, field: &str) {
        self.0.remove(field);
    }

    pub fn is_empty(&self) -> bool {
        self.0.values().all(Vec::is_empty)
    }
}

#[derive(Debug, Deserialize)]
pub struct ValidationResponse {
    pub errors: FieldErrors,
}

/// Body of the store and update requests.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PostFields {
    pub title: String,
    pub content: String,
}

impl From<&Post> for PostFields {
    fn from(post: &Post) -> Self {
        Self {
            title: post.title.clone(),
            content: post.content.clone(),
        }
    }
}
