use axum::http::{header, Request, StatusCode};
use http_body_util::BodyExt;
use mock_server::{app, app_with, sample_posts, Fixture, MockState, Post};
use tower::ServiceExt;

async fn body_bytes(response: axum::response::Response) -> bytes::Bytes {
    response.into_body().collect().await.unwrap().to_bytes()
}

fn get_posts() -> Request<String> {
    Request::builder().uri("/posts").body(String::new()).unwrap()
}

// --- default fixture ---

#[tokio::test]
async fn list_posts_returns_sample_posts() {
    let resp = app().oneshot(get_posts()).await.unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(
        resp.headers()[header::CONTENT_TYPE],
        "application/json"
    );
    let posts: Vec<Post> = serde_json::from_slice(&body_bytes(resp).await).unwrap();
    assert_eq!(posts, sample_posts());
}

#[tokio::test]
async fn unknown_route_returns_404() {
    let resp = app()
        .oneshot(Request::builder().uri("/comments").body(String::new()).unwrap())
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn post_method_not_allowed() {
    let resp = app()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/posts")
                .body(String::new())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::METHOD_NOT_ALLOWED);
}

// --- fixtures ---

#[tokio::test]
async fn null_fixture_sends_literal_null() {
    let resp = app_with(MockState::new(Fixture::Null))
        .oneshot(get_posts())
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(body_bytes(resp).await.as_ref(), b"null");
}

#[tokio::test]
async fn empty_fixture_sends_no_body() {
    let resp = app_with(MockState::new(Fixture::Empty))
        .oneshot(get_posts())
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    assert!(body_bytes(resp).await.is_empty());
}

#[tokio::test]
async fn raw_fixture_is_sent_verbatim() {
    let resp = app_with(MockState::new(Fixture::Raw(r#"{"oops":true}"#.to_string())))
        .oneshot(get_posts())
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(body_bytes(resp).await.as_ref(), br#"{"oops":true}"#);
}

#[tokio::test]
async fn status_fixture_sets_status() {
    let resp = app_with(MockState::new(Fixture::Status(503)))
        .oneshot(get_posts())
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::SERVICE_UNAVAILABLE);
}

// --- shared state ---

#[tokio::test]
async fn fixture_swap_and_hit_counting() {
    let state = MockState::new(Fixture::Posts(Vec::new()));

    let resp = app_with(state.clone()).oneshot(get_posts()).await.unwrap();
    let posts: Vec<Post> = serde_json::from_slice(&body_bytes(resp).await).unwrap();
    assert!(posts.is_empty());

    state.set(Fixture::Posts(sample_posts()[..1].to_vec())).await;
    let resp = app_with(state.clone()).oneshot(get_posts()).await.unwrap();
    let posts: Vec<Post> = serde_json::from_slice(&body_bytes(resp).await).unwrap();
    assert_eq!(posts, sample_posts()[..1].to_vec());

    assert_eq!(state.hits(), 2);
}
