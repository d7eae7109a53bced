//! Per-page chrome: document title, heading and breadcrumb trail.

use crate::models::View;
use crate::routes::{RouteError, RouteTable};

pub const INDEX_TITLE: &str = "Posts";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Crumb {
    pub title: String,
    pub href: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageMeta {
    pub document_title: String,
    pub heading: String,
    pub subtitle: Option<String>,
    pub breadcrumbs: Vec<Crumb>,
}

fn crumb(
    routes: &RouteTable,
    title: impl Into<String>,
    name: &str,
    id: Option<i64>,
) -> Result<Crumb, RouteError> {
    Ok(Crumb {
        title: title.into(),
        href: routes.url(name, id)?,
    })
}

pub fn page_meta(view: &View, routes: &RouteTable) -> Result<PageMeta, RouteError> {
    let posts = crumb(routes, INDEX_TITLE, "posts.index", None)?;

    let meta = match view {
        View::Index(_) | View::Pending => PageMeta {
            document_title: INDEX_TITLE.to_string(),
            heading: INDEX_TITLE.to_string(),
            subtitle: None,
            breadcrumbs: vec![posts],
        },
        View::Create => PageMeta {
            document_title: "Create Post".to_string(),
            heading: "Create New Post".to_string(),
            subtitle: Some("Fill in the details below to create a new blog post.".to_string()),
            breadcrumbs: vec![posts, crumb(routes, "Create", "posts.create", None)?],
        },
        View::Edit(props) => PageMeta {
            document_title: format!("Edit Post: {}", props.post.title),
            heading: "Edit Post".to_string(),
            subtitle: Some(format!("Update the details for \"{}\"", props.post.title)),
            breadcrumbs: vec![posts, crumb(routes, "Edit", "posts.edit", Some(props.post.id))?],
        },
        View::Show(props) => PageMeta {
            document_title: props.post.title.clone(),
            heading: props.post.title.clone(),
            subtitle: None,
            breadcrumbs: vec![
                posts,
                crumb(routes, props.post.title.clone(), "posts.show", Some(props.post.id))?,
            ],
        },
        View::NotFound | View::Unknown(_) => PageMeta {
            document_title: "Post not found".to_string(),
            heading: "Post not found".to_string(),
            subtitle: None,
            breadcrumbs: vec![posts],
        },
    };
    Ok(meta)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{IndexProps, Post, PostProps};

    fn post() -> Post {
        Post {
            id: 5,
            title: "Hello".to_string(),
            content: "World".to_string(),
            created_at: "2026-01-01T00:00:00Z".to_string(),
            updated_at: "2026-01-01T00:00:00Z".to_string(),
        }
    }

    fn trail(meta: &PageMeta) -> Vec<(&str, &str)> {
        meta.breadcrumbs
            .iter()
            .map(|crumb| (crumb.title.as_str(), crumb.href.as_str()))
            .collect()
    }

    #[test]
    fn index_is_titled_posts() {
        let meta = page_meta(&View::Index(IndexProps { posts: vec![] }), &RouteTable::posts())
            .expect("routes resolve");

        assert_eq!(meta.document_title, "Posts");
        assert_eq!(trail(&meta), vec![("Posts", "/posts")]);
    }

    #[test]
    fn create_has_posts_then_create_trail() {
        let meta = page_meta(&View::Create, &RouteTable::posts()).expect("routes resolve");

        assert_eq!(meta.document_title, "Create Post");
        assert_eq!(meta.heading, "Create New Post");
        assert_eq!(
            trail(&meta),
            vec![("Posts", "/posts"), ("Create", "/posts/create")]
        );
    }

    #[test]
    fn edit_names_the_post_in_title_and_subtitle() {
        let meta = page_meta(&View::Edit(PostProps { post: post() }), &RouteTable::posts())
            .expect("routes resolve");

        assert_eq!(meta.document_title, "Edit Post: Hello");
        assert_eq!(meta.subtitle.as_deref(), Some("Update the details for \"Hello\""));
        assert_eq!(
            trail(&meta),
            vec![("Posts", "/posts"), ("Edit", "/posts/5/edit")]
        );
    }

    #[test]
    fn show_links_back_to_itself() {
        let meta = page_meta(&View::Show(PostProps { post: post() }), &RouteTable::posts())
            .expect("routes resolve");

        assert_eq!(meta.document_title, "Hello");
        assert_eq!(trail(&meta), vec![("Posts", "/posts"), ("Hello", "/posts/5")]);
    }
}
