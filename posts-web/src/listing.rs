//! What the posts list renders and what its delete action sends.

use crate::models::Post;
use crate::routes::{HttpMethod, RouteError, RouteTable};

pub const EMPTY_MESSAGE: &str = "No posts found. Start by creating one!";
pub const CONFIRM_DELETE: &str = "Are you sure you want to delete this post?";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeleteRequest {
    pub method: HttpMethod,
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostRow {
    pub title: String,
    pub preview: String,
    pub show_url: String,
    pub edit_url: String,
    pub delete: DeleteRequest,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListBody {
    Empty(&'static str),
    Rows(Vec<PostRow>),
}

pub fn list_body(posts: Vec<Post>, routes: &RouteTable) -> Result<ListBody, RouteError> {
    if posts.is_empty() {
        return Ok(ListBody::Empty(EMPTY_MESSAGE));
    }

    let method = routes.method("posts.destroy")?;
    let rows = posts
        .into_iter()
        .map(|post| -> Result<PostRow, RouteError> {
            Ok(PostRow {
                show_url: routes.url("posts.show", Some(post.id))?,
                edit_url: routes.url("posts.edit", Some(post.id))?,
                delete: DeleteRequest {
                    method,
                    url: routes.url("posts.destroy", Some(post.id))?,
                },
                title: post.title,
                preview: post.content,
            })
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(ListBody::Rows(rows))
}

/// Request to send once the user answered the confirmation.
pub fn delete_after_confirm(confirmed: bool, row: &PostRow) -> Option<DeleteRequest> {
    confirmed.then(|| row.delete.clone())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn post(id: i64, title: &str) -> Post {
        Post {
            id,
            title: title.to_string(),
            content: format!("{title} body"),
            created_at: "2026-01-01T00:00:00Z".to_string(),
            updated_at: "2026-01-01T00:00:00Z".to_string(),
        }
    }

    fn rows(body: ListBody) -> Vec<PostRow> {
        match body {
            ListBody::Rows(rows) => rows,
            ListBody::Empty(message) => panic!("unexpected empty state: {message}"),
        }
    }

    #[test]
    fn no_posts_renders_empty_state_and_no_rows() {
        let body = list_body(Vec::new(), &RouteTable::posts()).expect("routes resolve");
        assert_eq!(
            body,
            ListBody::Empty("No posts found. Start by creating one!")
        );
    }

    #[test]
    fn each_post_gets_one_row_with_its_links() {
        let body = list_body(vec![post(1, "A"), post(7, "B")], &RouteTable::posts())
            .expect("routes resolve");
        let rows = rows(body);

        assert_eq!(rows.len(), 2);
        assert_eq!(rows[1].title, "B");
        assert_eq!(rows[1].preview, "B body");
        assert_eq!(rows[1].show_url, "/posts/7");
        assert_eq!(rows[1].edit_url, "/posts/7/edit");
        assert_eq!(
            rows[1].delete,
            DeleteRequest {
                method: HttpMethod::Delete,
                url: "/posts/7".to_string(),
            }
        );
    }

    #[test]
    fn declined_confirmation_sends_nothing() {
        let rows = rows(list_body(vec![post(3, "A")], &RouteTable::posts()).expect("routes"));

        assert_eq!(delete_after_confirm(false, &rows[0]), None);
    }

    #[test]
    fn accepted_confirmation_deletes_that_post() {
        let rows = rows(list_body(vec![post(3, "A")], &RouteTable::posts()).expect("routes"));

        assert_eq!(
            delete_after_confirm(true, &rows[0]).map(|request| request.url),
            Some("/posts/3".to_string())
        );
    }
}
