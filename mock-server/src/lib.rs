use std::sync::{
    atomic::{AtomicUsize, Ordering},
    Arc,
};

use axum::{
    extract::State,
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tokio::{net::TcpListener, sync::RwLock};
use tracing::debug;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    pub id: i64,
    pub title: String,
    pub body: String,
}

/// What `GET /posts` answers with.
#[derive(Clone, Debug)]
pub enum Fixture {
    /// 200 with the posts as a JSON array.
    Posts(Vec<Post>),
    /// 200 with a literal `null` body.
    Null,
    /// 200 with no body.
    Empty,
    /// 200 with this body sent verbatim as `application/json`.
    Raw(String),
    /// Bare status code, no body.
    Status(u16),
}

pub struct MockState {
    fixture: RwLock<Fixture>,
    hits: AtomicUsize,
}

pub type SharedState = Arc<MockState>;

impl MockState {
    pub fn new(fixture: Fixture) -> SharedState {
        Arc::new(Self {
            fixture: RwLock::new(fixture),
            hits: AtomicUsize::new(0),
        })
    }

    pub async fn set(&self, fixture: Fixture) {
        *self.fixture.write().await = fixture;
    }

    /// Number of requests served so far.
    pub fn hits(&self) -> usize {
        self.hits.load(Ordering::SeqCst)
    }
}

pub fn sample_posts() -> Vec<Post> {
    vec![
        Post {
            id: 1,
            title: "sunt aut facere".to_string(),
            body: "quia et suscipit".to_string(),
        },
        Post {
            id: 2,
            title: "qui est esse".to_string(),
            body: "est rerum tempore vitae".to_string(),
        },
        Post {
            id: 3,
            title: "ea molestias quasi".to_string(),
            body: "et iusto sed quo iure".to_string(),
        },
    ]
}

pub fn app() -> Router {
    app_with(MockState::new(Fixture::Posts(sample_posts())))
}

pub fn app_with(state: SharedState) -> Router {
    Router::new()
        .route("/posts", get(list_posts))
        .with_state(state)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

pub async fn run_with(listener: TcpListener, state: SharedState) -> Result<(), std::io::Error> {
    axum::serve(listener, app_with(state)).await
}

async fn list_posts(State(state): State<SharedState>) -> Response {
    state.hits.fetch_add(1, Ordering::SeqCst);
    let fixture = state.fixture.read().await.clone();
    debug!(?fixture, "serving /posts");
    match fixture {
        Fixture::Posts(posts) => Json(posts).into_response(),
        Fixture::Null => json_body("null".to_string()),
        Fixture::Empty => StatusCode::OK.into_response(),
        Fixture::Raw(body) => json_body(body),
        Fixture::Status(code) => StatusCode::from_u16(code)
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
            .into_response(),
    }
}

fn json_body(body: String) -> Response {
    (StatusCode::OK, [(header::CONTENT_TYPE, "application/json")], body).into_response()
}
