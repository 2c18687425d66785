//! In-process transports for unit tests.

use std::collections::VecDeque;
use std::sync::Mutex;

use async_trait::async_trait;
use tokio::sync::oneshot;

use crate::http::{HttpRequest, HttpResponse};
use crate::transport::{Transport, TransportError};

type Reply = Result<HttpResponse, TransportError>;

/// Replays queued replies in order and records every request it receives.
///
/// An empty queue answers with `TransportError::Other`.
#[derive(Default)]
pub struct StubTransport {
    replies: Mutex<VecDeque<Reply>>,
    requests: Mutex<Vec<HttpRequest>>,
}

impl StubTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_ok(&self, body: &str) {
        self.push(Ok(HttpResponse::ok(body)));
    }

    pub fn push_err(&self, error: TransportError) {
        self.push(Err(error));
    }

    pub fn push(&self, reply: Reply) {
        self.replies.lock().unwrap().push_back(reply);
    }

    pub fn calls(&self) -> usize {
        self.requests.lock().unwrap().len()
    }

    pub fn requests(&self) -> Vec<HttpRequest> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl Transport for StubTransport {
    async fn execute(&self, request: HttpRequest) -> Reply {
        self.requests.lock().unwrap().push(request);
        self.replies
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(TransportError::Other("no stubbed reply".into())))
    }
}

/// Holds every request open until the test releases it, so tests can choose
/// the order in which overlapping calls complete.
#[derive(Default)]
pub struct GatedTransport {
    pending: Mutex<Vec<Option<oneshot::Sender<Reply>>>>,
}

impl GatedTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of requests received so far, released or not.
    pub fn calls(&self) -> usize {
        self.pending.lock().unwrap().len()
    }

    /// Complete the `index`-th request (zero-based, in arrival order).
    pub fn release(&self, index: usize, reply: Reply) {
        let sender = self.pending.lock().unwrap()[index]
            .take()
            .expect("request already released");
        let _ = sender.send(reply);
    }

    /// Yield until at least `count` requests are parked.
    pub async fn wait_for_calls(&self, count: usize) {
        while self.calls() < count {
            tokio::task::yield_now().await;
        }
    }
}

#[async_trait]
impl Transport for GatedTransport {
    async fn execute(&self, _request: HttpRequest) -> Reply {
        let (tx, rx) = oneshot::channel();
        self.pending.lock().unwrap().push(Some(tx));
        rx.await
            .unwrap_or_else(|_| Err(TransportError::Other("gate dropped".into())))
    }
}
