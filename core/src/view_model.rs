//! View-model layer: owns the last successfully fetched posts.
//!
//! # Design
//! State lives in a `tokio::sync::watch` channel. The sender is the only
//! writer, so the collection is always replaced wholesale, never merged, and
//! readers see either the old or the new collection. Presentation code can
//! take a synchronous snapshot with `posts()` or await changes through
//! `subscribe()`.
//!
//! Overlapping `fetch_posts` calls are not coalesced or guarded. Each writes
//! its own result when it completes, so the call that completes last wins.
//! There is no cancellation; a caller that has gone away simply never polls
//! the future again.

use tokio::sync::watch;
use tracing::info;

use crate::error::Outcome;
use crate::repository::PostsRepository;
use crate::types::PostCollection;

pub struct PostsViewModel {
    repository: PostsRepository,
    posts: watch::Sender<PostCollection>,
}

impl PostsViewModel {
    pub fn new(repository: PostsRepository) -> Self {
        let (posts, _) = watch::channel(PostCollection::new());
        Self { repository, posts }
    }

    /// Snapshot of the last successful fetch, or empty if none has succeeded.
    pub fn posts(&self) -> PostCollection {
        self.posts.borrow().clone()
    }

    /// Receiver notified whenever a fetch replaces the posts with different
    /// data.
    pub fn subscribe(&self) -> watch::Receiver<PostCollection> {
        self.posts.subscribe()
    }

    /// Fetch once and, on success, replace the current posts.
    ///
    /// A failure leaves the current posts untouched and is returned as-is.
    pub async fn fetch_posts(&self) -> Outcome<PostCollection> {
        let posts = self.repository.fetch_posts().await?;
        let replaced = self.posts.send_if_modified(|current| {
            if *current == posts {
                return false;
            }
            current.clone_from(&posts);
            true
        });
        info!(count = posts.len(), replaced, "posts fetched");
        Ok(posts)
    }
}
