//! Wires WebService → Repository → ViewModel.
//!
//! Every collaborator can be injected; anything left unset falls back to
//! `FeedConfig::default()` and `ReqwestTransport`.

use std::sync::Arc;

use crate::config::FeedConfig;
use crate::repository::PostsRepository;
use crate::transport::{ReqwestTransport, Transport, TransportError};
use crate::view_model::PostsViewModel;
use crate::web_service::WebService;

#[derive(Default)]
pub struct FeedBuilder {
    config: Option<FeedConfig>,
    transport: Option<Arc<dyn Transport>>,
}

impl FeedBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn config(mut self, config: FeedConfig) -> Self {
        self.config = Some(config);
        self
    }

    pub fn transport(mut self, transport: Arc<dyn Transport>) -> Self {
        self.transport = Some(transport);
        self
    }

    /// # Errors
    ///
    /// Fails only when no transport was injected and the default
    /// `ReqwestTransport` cannot be created.
    pub fn build(self) -> Result<PostsViewModel, TransportError> {
        let config = self.config.unwrap_or_default();
        let transport = match self.transport {
            Some(transport) => transport,
            None => Arc::new(ReqwestTransport::new()?),
        };
        let web_service = WebService::new(&config, transport);
        Ok(PostsViewModel::new(PostsRepository::new(web_service)))
    }
}
