//! Where the page is, and where it links to.

use percent_encoding::{percent_decode_str, utf8_percent_encode, AsciiSet, CONTROLS};
use reqwest::Url;
use std::fmt::Display;

use crate::types::id::Id;

/// Characters escaped inside a single path segment. Routes end up in HTML
/// attributes unescaped, so quotes and `&` are encoded too.
const SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'&')
    .add(b'\'')
    .add(b'/')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'`')
    .add(b'{')
    .add(b'}');

const RELATIVE_BASE: &str = "http://localhost/";

/// Resolves the book identifier from a location.
///
/// `location` may be an absolute URL or a path with an optional query. The `id`
/// query parameter wins; otherwise the last path segment is used. Empty values
/// resolve to nothing.
pub fn resolve_identifier(location: &str) -> Option<Id> {
    let location = location.trim();
    let url = match Url::parse(location) {
        Ok(url) => url,
        Err(_) => Url::parse(RELATIVE_BASE).ok()?.join(location).ok()?,
    };

    let from_query = url
        .query_pairs()
        .find(|(key, _)| key == "id")
        .map(|(_, value)| value.trim().to_string())
        .filter(|value| !value.is_empty());
    if let Some(id) = from_query {
        return Some(Id(id));
    }

    let segment = url.path_segments()?.last()?;
    let segment = percent_decode_str(segment).decode_utf8().ok()?;
    let segment = segment.trim();
    if segment.is_empty() {
        None
    } else {
        Some(Id(segment.to_string()))
    }
}

/// Navigation targets rendered as links.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Book(Id),
    Author(Id),
    User(Id),
    WriteReview(Id),
}

impl Display for Route {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let encode = |id: &Id| utf8_percent_encode(id.as_str(), SEGMENT).to_string();
        match self {
            Route::Book(id) => write!(f, "/book/{}", encode(id)),
            Route::Author(id) => write!(f, "/author/{}", encode(id)),
            Route::User(id) => write!(f, "/user/{}", encode(id)),
            Route::WriteReview(id) => write!(f, "/book/{}/review", encode(id)),
        }
    }
}
