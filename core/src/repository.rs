//! Repository layer: translates raw web-service outcomes into `FeedError`.
//!
//! The repository adds no failure modes of its own. Each call makes exactly
//! one web-service call and reports exactly one outcome.

use tracing::warn;

use crate::error::{FeedError, Outcome};
use crate::types::PostCollection;
use crate::web_service::WebService;

#[derive(Clone)]
pub struct PostsRepository {
    web_service: WebService,
}

impl PostsRepository {
    pub fn new(web_service: WebService) -> Self {
        Self { web_service }
    }

    pub async fn fetch_posts(&self) -> Outcome<PostCollection> {
        self.web_service.fetch_posts().await.map_err(|raw| {
            let error = FeedError::from(raw);
            warn!(kind = error.kind(), error = %error, "fetching posts failed");
            error
        })
    }
}
