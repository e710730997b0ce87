mod common;

use std::sync::Arc;

use bookview::{
    server::{router, AppState},
    ApiClient, Credential,
};
use common::{book_json, review_json, spawn, spawn_api, MockApi, MockBook, Reply};
use serde_json::json;

async fn spawn_bookview(api: Arc<MockApi>, credential: Option<&str>) -> String {
    let base = spawn_api(api).await;
    let state = AppState {
        client:     ApiClient::new(&base).unwrap(),
        credential: credential.and_then(Credential::new),
    };
    spawn(router(Arc::new(state))).await
}

fn dune() -> MockBook {
    MockBook {
        reviews: Reply::Json(json!([review_json(12, "paul", 5.0, "Spice.")])),
        ..MockBook::new(1, "Dune")
    }
}

#[tokio::test]
async fn book_page_is_rendered() {
    let api = MockApi::with_books([("1", dune())]);
    let base = spawn_bookview(api, None).await;

    let resp = reqwest::get(format!("{base}/book/1")).await.unwrap();
    assert_eq!(resp.status(), 200);
    let content_type = resp.headers().get("content-type").unwrap().to_str().unwrap();
    assert!(content_type.contains("text/html"));

    let body = resp.text().await.unwrap();
    assert!(body.contains("<title>Dune - Book Details</title>"));
    assert!(body.contains("No editions available"));
    assert!(body.contains(r#"href="/user/12""#));
    assert!(body.contains("Write a Review"));
}

#[tokio::test]
async fn query_parameter_is_accepted() {
    let api = MockApi::with_books([("1", dune())]);
    let base = spawn_bookview(api, None).await;

    let body = reqwest::get(format!("{base}/book?id=1"))
        .await
        .unwrap()
        .text()
        .await
        .unwrap();
    assert!(body.contains("<h1>Dune</h1>"));
}

#[tokio::test]
async fn missing_book_renders_loading() {
    let api = MockApi::empty();
    let base = spawn_bookview(api, None).await;

    let resp = reqwest::get(format!("{base}/book/77")).await.unwrap();
    assert_eq!(resp.status(), 200);
    assert!(resp.text().await.unwrap().contains("Loading..."));
}

#[tokio::test]
async fn viewer_cookie_is_forwarded() {
    let api = MockApi::with_books([(
        "1",
        MockBook {
            user_review: Reply::Json(review_json(99, "viewer", 3.0, "Long.")),
            ..dune()
        },
    )]);
    let base = spawn_bookview(api.clone(), Some("configured")).await;

    let body = reqwest::Client::new()
        .get(format!("{base}/book/1"))
        .header("cookie", "token=from-cookie")
        .send()
        .await
        .unwrap()
        .text()
        .await
        .unwrap();
    assert!(body.contains("Edit Review"));

    let hits = api.hits.lock().unwrap().clone();
    let user_review = hits
        .iter()
        .find(|x| x.path == "/book/1/view_user_review")
        .unwrap();
    assert_eq!(user_review.authorization.as_deref(), Some("Bearer from-cookie"));
}

#[tokio::test]
async fn index_lists_books() {
    let api = MockApi::empty();
    *api.index.lock().unwrap() = Some(json!([book_json(1, "Dune"), book_json(2, "Emma")]));
    let base = spawn_bookview(api, None).await;

    let body = reqwest::get(format!("{base}/")).await.unwrap().text().await.unwrap();
    assert!(body.contains(r#"href="/book/1""#));
    assert!(body.contains("Emma"));
}

#[tokio::test]
async fn index_failure_is_bad_gateway() {
    let api = MockApi::empty();
    let base = spawn_bookview(api, None).await;

    let resp = reqwest::get(format!("{base}/")).await.unwrap();
    assert_eq!(resp.status(), 502);
}
