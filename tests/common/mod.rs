#![allow(dead_code)]

use std::{
    collections::HashMap,
    net::SocketAddr,
    sync::{Arc, Mutex},
    time::Duration,
};

use axum::{
    extract::{Path, State},
    http::{header::AUTHORIZATION, HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde_json::{json, Value};

/// What the mock answers on one endpoint.
#[derive(Clone, Debug)]
pub enum Reply {
    Json(Value),
    Status(u16),
}

impl Reply {
    fn respond(&self) -> Response {
        match self {
            Reply::Json(value) => Json(value.clone()).into_response(),
            Reply::Status(code) => StatusCode::from_u16(*code)
                .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
                .into_response(),
        }
    }
}

/// Replies for one book id.
#[derive(Clone, Debug)]
pub struct MockBook {
    pub book:        Reply,
    pub editions:    Reply,
    pub reviews:     Reply,
    pub user_review: Reply,
    /// Applied before answering the book request.
    pub delay:       Duration,
}

impl MockBook {
    pub fn new(id: u64, title: &str) -> Self {
        Self {
            book:        Reply::Json(book_json(id, title)),
            editions:    Reply::Json(json!([])),
            reviews:     Reply::Json(json!([])),
            user_review: Reply::Status(404),
            delay:       Duration::ZERO,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Hit {
    pub path:          String,
    pub authorization: Option<String>,
}

#[derive(Default)]
pub struct MockApi {
    pub books: Mutex<HashMap<String, MockBook>>,
    pub index: Mutex<Option<Value>>,
    pub hits:  Mutex<Vec<Hit>>,
}

impl MockApi {
    pub fn empty() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn with_books(books: impl IntoIterator<Item = (&'static str, MockBook)>) -> Arc<Self> {
        let api = Self::default();
        api.books
            .lock()
            .unwrap()
            .extend(books.into_iter().map(|(id, book)| (id.to_string(), book)));
        Arc::new(api)
    }

    pub fn paths(&self) -> Vec<String> {
        self.hits.lock().unwrap().iter().map(|x| x.path.clone()).collect()
    }

    pub fn hit(&self, path: &str) -> bool {
        self.paths().iter().any(|x| x == path)
    }

    fn record(&self, path: String, headers: &HeaderMap) {
        let authorization = headers
            .get(AUTHORIZATION)
            .and_then(|x| x.to_str().ok())
            .map(str::to_string);
        self.hits.lock().unwrap().push(Hit { path, authorization });
    }

    fn book_for(&self, id: &str) -> Option<MockBook> {
        self.books.lock().unwrap().get(id).cloned()
    }
}

pub fn book_json(id: u64, title: &str) -> Value {
    json!({
        "bookID": id,
        "title": title,
        "author": 3,
        "author_name": "Frank Herbert",
        "average_rating": 4.5,
        "genres": ["Science Fiction", "Classics"],
        "image_url": null
    })
}

pub fn review_json(reviewer: u64, username: &str, rating: f64, text: &str) -> Value {
    json!({
        "reviewer": reviewer,
        "username": username,
        "rating": rating,
        "user_Review": text
    })
}

async fn book(
    State(api): State<Arc<MockApi>>,
    Path(id): Path<String>,
    headers: HeaderMap,
) -> Response {
    api.record(format!("/book/{id}"), &headers);
    match api.book_for(&id) {
        Some(book) => {
            tokio::time::sleep(book.delay).await;
            book.book.respond()
        }
        None => StatusCode::NOT_FOUND.into_response(),
    }
}

async fn editions(
    State(api): State<Arc<MockApi>>,
    Path(id): Path<String>,
    headers: HeaderMap,
) -> Response {
    api.record(format!("/book/{id}/editions"), &headers);
    match api.book_for(&id) {
        Some(book) => book.editions.respond(),
        None => StatusCode::NOT_FOUND.into_response(),
    }
}

async fn reviews(
    State(api): State<Arc<MockApi>>,
    Path(id): Path<String>,
    headers: HeaderMap,
) -> Response {
    api.record(format!("/book/{id}/view_reviews"), &headers);
    match api.book_for(&id) {
        Some(book) => book.reviews.respond(),
        None => StatusCode::NOT_FOUND.into_response(),
    }
}

async fn user_review(
    State(api): State<Arc<MockApi>>,
    Path(id): Path<String>,
    headers: HeaderMap,
) -> Response {
    api.record(format!("/book/{id}/view_user_review"), &headers);
    match api.book_for(&id) {
        Some(book) => book.user_review.respond(),
        None => StatusCode::NOT_FOUND.into_response(),
    }
}

async fn index(State(api): State<Arc<MockApi>>, headers: HeaderMap) -> Response {
    api.record("/book".to_string(), &headers);
    match api.index.lock().unwrap().clone() {
        Some(value) => Json(value).into_response(),
        None => StatusCode::INTERNAL_SERVER_ERROR.into_response(),
    }
}

pub fn router(api: Arc<MockApi>) -> Router {
    Router::new()
        .route("/book", get(index))
        .route("/book/:id", get(book))
        .route("/book/:id/editions", get(editions))
        .route("/book/:id/view_reviews", get(reviews))
        .route("/book/:id/view_user_review", get(user_review))
        .with_state(api)
}

/// Serves `app` on an OS-assigned port, returning the base URL.
pub async fn spawn(app: Router) -> String {
    let server = axum::Server::bind(&SocketAddr::from(([127, 0, 0, 1], 0)))
        .serve(app.into_make_service());
    let addr = server.local_addr();
    tokio::spawn(server);
    format!("http://{}", addr)
}

pub async fn spawn_api(api: Arc<MockApi>) -> String {
    spawn(router(api)).await
}
