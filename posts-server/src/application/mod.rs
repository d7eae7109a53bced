pub(crate) mod post_service;
