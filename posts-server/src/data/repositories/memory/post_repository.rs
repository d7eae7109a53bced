//! In-process post store, used when no database is configured.
//!
//! Data is lost on restart.

use std::collections::BTreeMap;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;

use crate::data::post_repository::{NewPost, PostPatch, PostRepository};
use crate::domain::error::DomainError;
use crate::domain::post::Post;

#[derive(Debug, Default)]
struct Store {
    posts: BTreeMap<i64, Post>,
    last_id: i64,
}

#[derive(Debug, Default)]
pub(crate) struct InMemoryPostRepository {
    store: RwLock<Store>,
}

impl InMemoryPostRepository {
    pub(crate) fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl PostRepository for InMemoryPostRepository {
    async fn create_post(&self, input: NewPost) -> Result<Post, DomainError> {
        let mut store = self.store.write().await;
        // Ids are never reused, even after the newest post is deleted.
        store.last_id += 1;
        let now = Utc::now();
        let post = Post::new(store.last_id, input.title, input.content, now, now)?;
        store.posts.insert(post.id, post.clone());
        Ok(post)
    }

    async fn get_post(&self, id: i64) -> Result<Option<Post>, DomainError> {
        Ok(self.store.read().await.posts.get(&id).cloned())
    }

    async fn update_post(&self, id: i64, patch: PostPatch) -> Result<Option<Post>, DomainError> {
        let mut store = self.store.write().await;
        let Some(post) = store.posts.get_mut(&id) else {
            return Ok(None);
        };

        post.title = patch.title;
        post.content = patch.content;
        post.updated_at = Utc::now().max(post.created_at);
        Ok(Some(post.clone()))
    }

    async fn delete_post(&self, id: i64) -> Result<bool, DomainError> {
        Ok(self.store.write().await.posts.remove(&id).is_some())
    }

    async fn list_posts(&self) -> Result<Vec<Post>, DomainError> {
        Ok(self.store.read().await.posts.values().cloned().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_post(title: &str, content: &str) -> NewPost {
        NewPost {
            title: title.to_string(),
            content: content.to_string(),
        }
    }

    #[tokio::test]
    async fn create_assigns_increasing_ids() {
        let repo = InMemoryPostRepository::new();

        let first = repo.create_post(new_post("a", "1")).await.expect("create");
        let second = repo.create_post(new_post("b", "2")).await.expect("create");

        assert_eq!(first.id, 1);
        assert_eq!(second.id, 2);
    }

    #[tokio::test]
    async fn ids_are_not_reused_after_delete() {
        let repo = InMemoryPostRepository::new();

        let first = repo.create_post(new_post("a", "1")).await.expect("create");
        assert!(repo.delete_post(first.id).await.expect("delete"));

        let second = repo.create_post(new_post("b", "2")).await.expect("create");
        assert_ne!(second.id, first.id);
    }

    #[tokio::test]
    async fn update_missing_post_returns_none() {
        let repo = InMemoryPostRepository::new();

        let patch = PostPatch {
            title: "t".to_string(),
            content: "c".to_string(),
        };
        let result = repo.update_post(99, patch).await.expect("update");
        assert!(result.is_none());
    }

    #[tokio::test]
    async fn list_returns_posts_in_id_order() {
        let repo = InMemoryPostRepository::new();
        for title in ["c", "a", "b"] {
            repo.create_post(new_post(title, "x")).await.expect("create");
        }

        let titles: Vec<String> = repo
            .list_posts()
            .await
            .expect("list")
            .into_iter()
            .map(|post| post.title)
            .collect();
        assert_eq!(titles, vec!["c", "a", "b"]);
    }
}
