use std::sync::Arc;

use crate::application::post_service::PostService;
use crate::data::post_repository::PostRepository;

use self::renderer::PageRenderer;

pub(crate) mod app_error;
pub(crate) mod handlers;
pub(crate) mod http_handlers;
pub(crate) mod middleware;
pub(crate) mod page;
pub(crate) mod renderer;
pub(crate) mod routes;


pub(crate) type DynPostRepository = Arc<dyn PostRepository>;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) posts: Arc<PostService<DynPostRepository>>,
    pub(crate) renderer: Arc<dyn PageRenderer>,
}

impl AppState {
    pub(crate) fn new(
        posts: Arc<PostService<DynPostRepository>>,
        renderer: Arc<dyn PageRenderer>,
    ) -> Self {
        Self { posts, renderer }
    }
}
