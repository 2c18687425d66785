//! HTTP transport types for the host-does-IO pattern.
//!
//! # Design
//! These types describe a request and its response as plain data. The web
//! service builds an `HttpRequest` and parses an `HttpResponse`; executing the
//! round-trip in between is the job of a `Transport`. Keeping the two halves
//! as data lets the decode and error-mapping logic be tested without a socket.

use url::Url;

/// A GET request described as plain data.
///
/// Built by `WebService::build_fetch_posts`. The feed only ever issues GETs,
/// with no query parameters and no body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpRequest {
    pub url: Url,
    pub headers: Vec<(String, String)>,
}

/// An HTTP response described as plain data.
///
/// An empty `body` stands for both "no payload" and "zero-length payload";
/// HTTP does not let a client tell the two apart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: Vec<u8>,
}

impl HttpResponse {
    /// A 200 response carrying `body` verbatim.
    pub fn ok(body: impl Into<Vec<u8>>) -> Self {
        Self {
            status: 200,
            body: body.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}
