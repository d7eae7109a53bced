use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::error::{DomainError, FieldErrors};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub(crate) struct Post {
    pub(crate) id: i64,
    pub(crate) title: String,
    pub(crate) content: String,
    pub(crate) created_at: DateTime<Utc>,
    pub(crate) updated_at: DateTime<Utc>,
}

/// Title and content as submitted by the store and update forms.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub(crate) struct PostDraft {
    pub(crate) title: String,
    pub(crate) content: String,
}

impl PostDraft {
    pub(crate) fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
        }
    }

    /// Trims both fields and rejects the draft when either is blank,
    /// reporting every blank field at once.
    pub(crate) fn validate(self) -> Result<Self, DomainError> {
        let title = self.title.trim().to_string();
        let content = self.content.trim().to_string();

        let mut errors = FieldErrors::new();
        if title.is_empty() {
            errors.add("title", required_message("title"));
        }
        if content.is_empty() {
            errors.add("content", required_message("content"));
        }
        errors.into_result()?;

        Ok(Self { title, content })
    }
}

impl Post {
    pub(crate) fn new(
        id: i64,
        title: impl Into<String>,
        content: impl Into<String>,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> Result<Self, DomainError> {
        if id <= 0 {
            return Err(invalid("id", "must be > 0"));
        }
        if updated_at < created_at {
            return Err(invalid("updated_at", "must be >= created_at"));
        }

        Ok(Self {
            id,
            title: title.into(),
            content: content.into(),
            created_at,
            updated_at,
        })
    }
}

pub(crate) fn required_message(field: &str) -> String {
    format!("The {field} field is required.")
}

fn invalid(field: &str, message: &str) -> DomainError {
    let mut errors = FieldErrors::new();
    errors.add(field, message);
    DomainError::Validation(errors)
}
