//! Typed client for the review service's REST API.

use std::time::Duration;

use reqwest::{header::AUTHORIZATION, RequestBuilder, StatusCode, Url};
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::{
    config::Config,
    credential::Credential,
    error::{FetchError, FetchResult},
    types::{
        book::{Book, BookSummary},
        edition::Edition,
        id::Id,
        review::Review,
    },
};

#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base: Url,
}

impl ApiClient {
    pub fn new(base_url: &str) -> FetchResult<Self> {
        Self::with_client(reqwest::Client::new(), base_url)
    }

    pub fn with_client(http: reqwest::Client, base_url: &str) -> FetchResult<Self> {
        let base = Url::parse(base_url)
            .map_err(|e| FetchError::InvalidUrl(format!("{base_url}: {e}")))?;
        if base.cannot_be_a_base() {
            return Err(FetchError::InvalidUrl(base_url.to_string()));
        }
        Ok(Self { http, base })
    }

    pub fn from_config(config: &Config) -> FetchResult<Self> {
        let mut builder = reqwest::Client::builder();
        if let Some(secs) = config.request_timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        Self::with_client(builder.build()?, &config.api_base_url)
    }

    pub fn base_url(&self) -> &Url {
        &self.base
    }

    /// `base` followed by `segments`, each percent-encoded.
    fn endpoint(&self, segments: &[&str]) -> FetchResult<Url> {
        let mut url = self.base.clone();
        url.path_segments_mut()
            .map_err(|_| FetchError::InvalidUrl(self.base.to_string()))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        url: Url,
        request: RequestBuilder,
    ) -> FetchResult<T> {
        debug!("GET {url}");
        let response = request.send().await?;
        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            return Err(FetchError::NotFound { url: url.to_string() });
        }
        if !status.is_success() {
            return Err(FetchError::Status {
                url: url.to_string(),
                status,
            });
        }
        let body = response.bytes().await?;
        let de = &mut serde_json::Deserializer::from_slice(&body);
        serde_path_to_error::deserialize(de).map_err(|source| FetchError::Decode {
            url: url.to_string(),
            source,
        })
    }

    async fn get<T: DeserializeOwned>(&self, segments: &[&str]) -> FetchResult<T> {
        let url = self.endpoint(segments)?;
        let request = self.http.get(url.clone());
        self.get_json(url, request).await
    }

    /// `GET /book`
    pub async fn books(&self) -> FetchResult<Vec<BookSummary>> {
        self.get(&["book"]).await
    }

    /// `GET /book/{id}`
    pub async fn book(&self, id: &Id) -> FetchResult<Book> {
        self.get(&["book", id.as_str()]).await
    }

    /// `GET /book/{id}/editions`
    pub async fn editions(&self, id: &Id) -> FetchResult<Vec<Edition>> {
        self.get(&["book", id.as_str(), "editions"]).await
    }

    /// `GET /book/{id}/view_reviews`
    pub async fn reviews(&self, id: &Id) -> FetchResult<Vec<Review>> {
        self.get(&["book", id.as_str(), "view_reviews"]).await
    }

    /// `GET /book/{id}/view_user_review`, authenticated with `credential` when given.
    ///
    /// A 404 comes back as [FetchError::NotFound]: the viewer hasn't reviewed the book.
    pub async fn user_review(
        &self,
        id: &Id,
        credential: Option<&Credential>,
    ) -> FetchResult<Review> {
        let url = self.endpoint(&["book", id.as_str(), "view_user_review"])?;
        let mut request = self.http.get(url.clone());
        if let Some(credential) = credential {
            request = request.header(AUTHORIZATION, credential.bearer());
        }
        self.get_json(url, request).await
    }
}
