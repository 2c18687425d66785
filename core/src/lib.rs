//! Posts feed core: fetch a list of posts and hold it for presentation.
//!
//! # Overview
//! Three layers, composed bottom-up:
//! - `WebService` issues one GET through a `Transport` and decodes the JSON
//!   array into `Post` records, reporting a raw `WebServiceError` on failure.
//! - `PostsRepository` maps raw failures onto the closed `FeedError` taxonomy.
//! - `PostsViewModel` keeps the last successful collection as observable state.
//!
//! # Design
//! - Each `fetch_posts` call is single-shot: one request, one outcome, no
//!   retries, no cancellation, no timeout beyond the transport's default.
//! - The endpoint is injected through `FeedConfig`, and the network through
//!   `Transport`, so the stack runs against a local stub in tests.
//! - `FeedBuilder` wires the layers with defaults for anything not injected.

pub mod builder;
pub mod config;
pub mod error;
pub mod http;
pub mod repository;
pub mod transport;
pub mod types;
pub mod view_model;
pub mod web_service;

#[cfg(test)]
pub(crate) mod test_support;

pub use builder::FeedBuilder;
pub use config::FeedConfig;
pub use error::{ConfigError, FeedError, Outcome, WebServiceError};
pub use http::{HttpRequest, HttpResponse};
pub use repository::PostsRepository;
pub use transport::{ReqwestTransport, Transport, TransportError};
pub use types::{Post, PostCollection};
pub use view_model::PostsViewModel;
pub use web_service::WebService;
