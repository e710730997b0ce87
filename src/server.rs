//! Serves rendered pages over HTTP.
//!
//! Every request builds a fresh [BookDetailPage], lets it settle and renders the
//! result. The viewer's credential comes from the request (`Authorization`
//! header or `token` cookie). [AppState::credential] is only used for requests
//! that carry neither.

use std::{collections::HashMap, net::SocketAddr, sync::Arc};

use anyhow::Result;
use axum::{
    extract::{Path, Query, State},
    http::{
        header::{AUTHORIZATION, COOKIE},
        HeaderMap, StatusCode,
    },
    response::Html,
    routing::get,
    Router,
};
use tracing::{error, info};

use crate::{
    client::ApiClient,
    credential::Credential,
    page::BookDetailPage,
    render::{
        html,
        view::{PageView, SummaryView},
    },
    types::id::Id,
};

pub struct AppState {
    pub client:     ApiClient,
    /// Lent to every visitor without a credential of their own.
    pub credential: Option<Credential>,
}

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/book", get(book_query))
        .route("/book/:id", get(book))
        .with_state(state)
}

pub async fn start(addr: SocketAddr, state: AppState) -> Result<()> {
    let app = router(Arc::new(state));
    let server = axum::Server::try_bind(&addr)?.serve(app.into_make_service());
    info!("Listening on {}.", server.local_addr());
    server.await?;
    Ok(())
}

fn credential_for(headers: &HeaderMap, fallback: &Option<Credential>) -> Option<Credential> {
    let from_header = headers
        .get(AUTHORIZATION)
        .and_then(|x| x.to_str().ok())
        .and_then(Credential::from_authorization);
    let from_cookie = || {
        headers
            .get_all(COOKIE)
            .iter()
            .filter_map(|x| x.to_str().ok())
            .find_map(Credential::from_cookie_header)
    };
    from_header.or_else(from_cookie).or_else(|| fallback.clone())
}

async fn render_book(
    state: &AppState,
    id: Option<Id>,
    headers: &HeaderMap,
) -> Result<Html<String>, StatusCode> {
    let credential = credential_for(headers, &state.credential);
    let mut page = BookDetailPage::new(state.client.clone(), credential);
    page.set_identifier(id);
    page.settle().await;
    match html::render_page(&PageView::from_page(&page)) {
        Ok(body) => Ok(Html(body)),
        Err(e) => {
            error!("Rendering of {:?} failed: {e}", page.identifier());
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

async fn book(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
) -> Result<Html<String>, StatusCode> {
    info!("Received /book/{}.", id);
    let id = Some(id.trim())
        .filter(|x| !x.is_empty())
        .map(Id::from);
    render_book(&state, id, &headers).await
}

async fn book_query(
    Query(params): Query<HashMap<String, String>>,
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
) -> Result<Html<String>, StatusCode> {
    let id = params
        .get("id")
        .map(|x| x.trim())
        .filter(|x| !x.is_empty())
        .map(Id::from);
    render_book(&state, id, &headers).await
}

async fn index(State(state): State<Arc<AppState>>) -> Result<Html<String>, StatusCode> {
    let books = match state.client.books().await {
        Ok(books) => books,
        Err(e) => {
            error!("Loading the book index failed: {e}");
            return Err(StatusCode::BAD_GATEWAY);
        }
    };
    let books: Vec<SummaryView> = books.iter().map(SummaryView::from).collect();
    html::render_index(&books).map(Html).map_err(|e| {
        error!("Rendering the book index failed: {e}");
        StatusCode::INTERNAL_SERVER_ERROR
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    #[test]
    fn request_credential_beats_configured_one() {
        let fallback = Credential::new("configured");
        let mut headers = HeaderMap::new();
        assert_eq!(credential_for(&headers, &fallback), fallback);

        headers.insert(COOKIE, HeaderValue::from_static("token=cookie"));
        assert_eq!(credential_for(&headers, &fallback), Credential::new("cookie"));

        headers.insert(AUTHORIZATION, HeaderValue::from_static("Bearer header"));
        assert_eq!(credential_for(&headers, &fallback), Credential::new("header"));
    }

    #[test]
    fn anonymous_visitor_without_fallback_is_anonymous() {
        assert_eq!(credential_for(&HeaderMap::new(), &None), None);

        let mut headers = HeaderMap::new();
        headers.insert(COOKIE, HeaderValue::from_static("token=cookie"));
        assert_eq!(credential_for(&headers, &None), Credential::new("cookie"));
    }
}
