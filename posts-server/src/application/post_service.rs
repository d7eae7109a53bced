use tracing::{debug, info};

use crate::data::post_repository::{NewPost, PostPatch, PostRepository};
use crate::domain::error::DomainError;
use crate::domain::post::{Post, PostDraft};

pub(crate) struct PostService<R: PostRepository> {
    repo: R,
}

impl<R: PostRepository> PostService<R> {
    pub(crate) fn new(repo: R) -> Self {
        Self { repo }
    }

    pub(crate) async fn list_posts(&self) -> Result<Vec<Post>, DomainError> {
        let posts = self.repo.list_posts().await?;
        debug!(count = posts.len(), "posts listed");
        Ok(posts)
    }

    pub(crate) async fn get_post(&self, id: i64) -> Result<Post, DomainError> {
        self.repo
            .get_post(id)
            .await?
            .ok_or_else(|| not_found(id))
    }

    pub(crate) async fn create_post(&self, draft: PostDraft) -> Result<Post, DomainError> {
        let draft = draft.validate()?;

        let new_post = NewPost {
            title: draft.title,
            content: draft.content,
        };
        let post = self.repo.create_post(new_post).await?;
        info!(post_id = post.id, "post created");
        Ok(post)
    }

    pub(crate) async fn update_post(&self, id: i64, draft: PostDraft) -> Result<Post, DomainError> {
        let draft = draft.validate()?;
        let patch = PostPatch {
            title: draft.title,
            content: draft.content,
        };
        let post = self
            .repo
            .update_post(id, patch)
            .await?
            .ok_or_else(|| not_found(id))?;
        info!(post_id = post.id, "post updated");
        Ok(post)
    }

    pub(crate) async fn delete_post(&self, id: i64) -> Result<(), DomainError> {
        if !self.repo.delete_post(id).await? {
            return Err(not_found(id));
        }
        info!(post_id = id, "post deleted");
        Ok(())
    }
}

fn not_found(id: i64) -> DomainError {
    DomainError::NotFound(format!("post id: {id}"))
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use async_trait::async_trait;
    use chrono::Utc;

    use super::PostService;
    use crate::data::post_repository::{NewPost, PostPatch, PostRepository};
    use crate::domain::error::DomainError;
    use crate::domain::post::{Post, PostDraft};

    #[derive(Clone)]
    struct FakePostRepo {
        created_input: Arc<Mutex<Option<NewPost>>>,
        post_for_get: Arc<Mutex<Option<Post>>>,
        update_result: Arc<Mutex<Option<Post>>>,
        update_call: Arc<Mutex<Option<(i64, PostPatch)>>>,
        delete_result: Arc<Mutex<bool>>,
        list_result: Arc<Mutex<Vec<Post>>>,
    }

    impl FakePostRepo {
        fn new() -> Self {
            Self {
                created_input: Arc::new(Mutex::new(None)),
                post_for_get: Arc::new(Mutex::new(None)),
                update_result: Arc::new(Mutex::new(None)),
                update_call: Arc::new(Mutex::new(None)),
                delete_result: Arc::new(Mutex::new(true)),
                list_result: Arc::new(Mutex::new(Vec::new())),
            }
        }
    }

    #[async_trait]
    impl PostRepository for FakePostRepo {
        async fn create_post(&self, input: NewPost) -> Result<Post, DomainError> {
            *self
                .created_input
                .lock()
                .expect("created_input mutex poisoned") = Some(input.clone());
            Ok(sample_post(1, &input.title, &input.content))
        }

        async fn get_post(&self, _id: i64) -> Result<Option<Post>, DomainError> {
            Ok(self
                .post_for_get
                .lock()
                .expect("post_for_get mutex poisoned")
                .clone())
        }

        async fn update_post(
            &self,
            id: i64,
            patch: PostPatch,
        ) -> Result<Option<Post>, DomainError> {
            *self
                .update_call
                .lock()
                .expect("update_call mutex poisoned") = Some((id, patch));
            Ok(self
                .update_result
                .lock()
                .expect("update_result mutex poisoned")
                .clone())
        }

        async fn delete_post(&self, _id: i64) -> Result<bool, DomainError> {
            Ok(*self
                .delete_result
                .lock()
                .expect("delete_result mutex poisoned"))
        }

        async fn list_posts(&self) -> Result<Vec<Post>, DomainError> {
            Ok(self
                .list_result
                .lock()
                .expect("list_result mutex poisoned")
                .clone())
        }
    }

    #[tokio::test]
    async fn create_post_normalizes_draft_before_repo_call() {
        let repo = FakePostRepo::new();
        let service = PostService::new(repo.clone());

        let created = service
            .create_post(PostDraft::new("  title  ", "  content  "))
            .await
            .expect("create_post must succeed");

        assert_eq!(created.title, "title");
        assert_eq!(created.content, "content");

        let input = repo
            .created_input
            .lock()
            .expect("created_input mutex poisoned")
            .clone()
            .expect("repo input must be captured");
        assert_eq!(input.title, "title");
        assert_eq!(input.content, "content");
    }

    #[tokio::test]
    async fn create_post_with_blank_content_never_reaches_repo() {
        let repo = FakePostRepo::new();
        let service = PostService::new(repo.clone());

        let err = service
            .create_post(PostDraft::new("title", "   "))
            .await
            .expect_err("blank content must be rejected");
        assert!(matches!(err, DomainError::Validation(ref errors) if errors.contains("content")));

        let input = repo
            .created_input
            .lock()
            .expect("created_input mutex poisoned")
            .clone();
        assert!(input.is_none());
    }

    #[tokio::test]
    async fn get_post_returns_not_found_when_missing() {
        let repo = FakePostRepo::new();
        let service = PostService::new(repo);

        let err = service
            .get_post(42)
            .await
            .expect_err("post must be missing");
        assert!(matches!(err, DomainError::NotFound(_)));
    }

    #[tokio::test]
    async fn update_post_passes_normalized_patch() {
        let repo = FakePostRepo::new();
        *repo
            .update_result
            .lock()
            .expect("update_result mutex poisoned") = Some(sample_post(7, "new", "body"));

        let service = PostService::new(repo.clone());
        let updated = service
            .update_post(7, PostDraft::new("  new  ", "  body  "))
            .await
            .expect("update must succeed");
        assert_eq!(updated.id, 7);

        let call = repo
            .update_call
            .lock()
            .expect("update_call mutex poisoned")
            .clone()
            .expect("update call must be captured");
        assert_eq!(call.0, 7);
        assert_eq!(call.1.title, "new");
        assert_eq!(call.1.content, "body");
    }

    #[tokio::test]
    async fn update_post_returns_not_found_when_repo_misses() {
        let repo = FakePostRepo::new();
        let service = PostService::new(repo);

        let err = service
            .update_post(7, PostDraft::new("t", "c"))
            .await
            .expect_err("missing post must fail");
        assert!(matches!(err, DomainError::NotFound(_)));
    }

    #[tokio::test]
    async fn delete_post_returns_not_found_when_nothing_deleted() {
        let repo = FakePostRepo::new();
        *repo
            .delete_result
            .lock()
            .expect("delete_result mutex poisoned") = false;

        let service = PostService::new(repo);
        let err = service
            .delete_post(7)
            .await
            .expect_err("must be not found");
        assert!(matches!(err, DomainError::NotFound(_)));
    }

    #[tokio::test]
    async fn list_posts_returns_repo_posts() {
        let repo = FakePostRepo::new();
        *repo.list_result.lock().expect("list_result mutex poisoned") =
            vec![sample_post(1, "a", "b"), sample_post(2, "c", "d")];

        let service = PostService::new(repo);
        let posts = service.list_posts().await.expect("list_posts must succeed");

        assert_eq!(posts.len(), 2);
        assert_eq!(posts[1].title, "c");
    }

    fn sample_post(id: i64, title: &str, content: &str) -> Post {
        let now = Utc::now();
        Post::new(id, title, content, now, now).expect("sample post must be valid")
    }
}
