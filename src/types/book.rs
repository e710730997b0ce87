use serde::{Deserialize, Serialize};

use crate::types::{id::Id, rating::Rating};

/// A book as returned by `GET /book/{id}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Book {
    #[serde(alias = "bookID")]
    pub id:             Id,
    pub title:          String,
    pub author:         Id,
    pub author_name:    String,
    /// `null` when nobody has reviewed the book yet.
    pub average_rating: Option<Rating>,
    pub genres:         Vec<String>,
    pub image_url:      Option<String>,
}

impl Book {
    pub fn genres_joined(&self) -> String {
        self.genres.join(", ")
    }

    /// Cover url, unless the server sent an empty one.
    pub fn cover(&self) -> Option<&str> {
        self.image_url
            .as_deref()
            .map(str::trim)
            .filter(|x| !x.is_empty())
    }
}

/// Entry of the book index, `GET /book`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookSummary {
    #[serde(alias = "bookID")]
    pub id:             Id,
    pub title:          String,
    pub author:         Id,
    pub author_name:    Option<String>,
    pub average_rating: Option<Rating>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn parses_server_book() {
        let book: Book = serde_json::from_str(
            r#"{
                "bookID": 1,
                "title": "Dune",
                "author": 3,
                "author_name": "Frank Herbert",
                "average_rating": 4.5,
                "genres": ["Science Fiction", "Classics"],
                "image_url": null
            }"#,
        )
        .unwrap();
        assert_eq!(
            book,
            Book {
                id:             Id::from(1),
                title:          "Dune".into(),
                author:         Id::from(3),
                author_name:    "Frank Herbert".into(),
                average_rating: Some(Rating(4.5)),
                genres:         vec!["Science Fiction".into(), "Classics".into()],
                image_url:      None,
            }
        );
        assert_eq!(book.genres_joined(), "Science Fiction, Classics");
        assert_eq!(book.cover(), None);
    }

    #[test]
    fn missing_title_is_rejected() {
        let result = serde_json::from_str::<Book>(
            r#"{"id": 1, "author": 3, "author_name": "x", "average_rating": 1, "genres": []}"#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn empty_cover_counts_as_missing() {
        let book: Book = serde_json::from_str(
            r#"{"id": "b", "title": "t", "author": 1, "author_name": "a",
                "average_rating": null, "genres": [], "image_url": "  "}"#,
        )
        .unwrap();
        assert_eq!(book.cover(), None);
        assert_eq!(book.average_rating, None);
    }
}
