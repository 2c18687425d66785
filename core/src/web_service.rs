//! Web service layer: one GET, one decode, one raw outcome.
//!
//! # Design
//! The fetch is split into `build_fetch_posts` (produces an `HttpRequest`),
//! the transport round-trip, and `parse_fetch_posts` (consumes an
//! `HttpResponse`). The build and parse halves are pure, so every decode and
//! status rule is testable without I/O; `fetch_posts` strings them together
//! around exactly one `Transport::execute` call.

use std::sync::Arc;

use tracing::{debug, warn};
use url::Url;

use crate::config::FeedConfig;
use crate::error::WebServiceError;
use crate::http::{HttpRequest, HttpResponse};
use crate::transport::Transport;
use crate::types::{Post, PostCollection};

/// Client for the remote posts endpoint.
#[derive(Clone)]
pub struct WebService {
    base_url: String,
    posts_path: String,
    transport: Arc<dyn Transport>,
}

impl WebService {
    pub fn new(config: &FeedConfig, transport: Arc<dyn Transport>) -> Self {
        Self {
            base_url: config.base_url.clone(),
            posts_path: config.posts_path.clone(),
            transport,
        }
    }

    /// Issue the request and decode the reply.
    ///
    /// If the endpoint cannot be built the transport is never called.
    pub async fn fetch_posts(&self) -> Result<PostCollection, WebServiceError> {
        let request = self.build_fetch_posts()?;
        debug!(url = %request.url, "fetching posts");
        let response = self.transport.execute(request).await.map_err(|err| {
            warn!(error = %err, "posts request failed in transport");
            WebServiceError::from(err)
        })?;
        self.parse_fetch_posts(response)
    }

    pub fn build_fetch_posts(&self) -> Result<HttpRequest, WebServiceError> {
        let invalid =
            |reason: String| WebServiceError::InvalidUrl(format!("{}: {reason}", self.base_url));

        let mut url = Url::parse(&self.base_url).map_err(|e| invalid(e.to_string()))?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(invalid(format!("unsupported scheme `{}`", url.scheme())));
        }
        // The posts path is appended as path segments; a query or fragment on
        // the base would otherwise swallow it.
        if url.query().is_some() || url.fragment().is_some() {
            return Err(invalid("base URL must not carry a query or fragment".to_string()));
        }
        url.path_segments_mut()
            .map_err(|()| invalid("base URL cannot carry a path".to_string()))?
            .pop_if_empty()
            .extend(self.posts_path.split('/').filter(|segment| !segment.is_empty()));

        Ok(HttpRequest {
            url,
            headers: vec![("accept".to_string(), "application/json".to_string())],
        })
    }

    pub fn parse_fetch_posts(
        &self,
        response: HttpResponse,
    ) -> Result<PostCollection, WebServiceError> {
        check_status(&response)?;
        if response.body.iter().all(u8::is_ascii_whitespace) {
            return Err(WebServiceError::NoData);
        }
        // A literal `null` payload counts as absent data, not as a decode failure.
        let posts: Option<Vec<Post>> = serde_json::from_slice(&response.body)
            .map_err(|e| WebServiceError::Decode(e.to_string()))?;
        let posts = posts.ok_or(WebServiceError::NoData)?;
        debug!(count = posts.len(), "decoded posts");
        Ok(posts)
    }
}

fn check_status(response: &HttpResponse) -> Result<(), WebServiceError> {
    if response.is_success() {
        return Ok(());
    }
    Err(WebServiceError::HttpStatus {
        status: response.status,
        body: String::from_utf8_lossy(&response.body).into_owned(),
    })
}
